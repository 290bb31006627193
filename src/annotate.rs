//! Special points of a diagram and their labeled markers.
//!
//! Special points are a hand-derived lookup table of parameter values, not the output
//! of a solver. [`annotate`] turns each entry into a [`Marker`] placed on a curve and
//! labeled `θ = ...`. [`check_intersections`] measures how well a table of claimed
//! intersections actually holds for a second curve.
use std::f64::consts::{FRAC_PI_3, PI};

use serde::{Deserialize, Serialize};

use crate::{
    coords::CoordMap,
    curve::PolarCurve,
    display::angle_label,
    figure::{Color, Direction, Label, Marker, DEFAULT_FONT_SIZE, DEFAULT_MARKER_RADIUS},
    sampler::PointSequence,
    value::{Point, Vector},
};

/// Residual below which a point counts as lying on a curve
pub const INTERSECTION_TOLERANCE: f64 = 1e-9;

/// A parameter value to mark, with the look of its marker and label
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpecialPoint {
    /// Curve parameter, in radians
    pub theta: f64,

    /// Radius to use instead of evaluating the curve
    #[serde(default)]
    pub radius_override: Option<f64>,

    /// Marker and label color
    pub color: Color,

    /// Side of the marker the label sits on
    pub direction: Direction,

    /// Gap between marker and label
    pub buff: f64,

    /// Extra label offset
    #[serde(default = "Vector::zeros")]
    pub nudge: Vector,

    /// Marker radius
    pub marker_radius: f64,

    /// Label font size
    pub font_size: f64,
}
impl SpecialPoint {
    /// A special point with default spacing, labeled to the right
    #[must_use]
    pub fn new(theta: f64, color: Color) -> Self {
        Self {
            theta,
            radius_override: None,
            color,
            direction: Direction::Right,
            buff: crate::figure::DEFAULT_BUFF,
            nudge: Vector::zeros(),
            marker_radius: DEFAULT_MARKER_RADIUS,
            font_size: DEFAULT_FONT_SIZE,
        }
    }

    /// Pins the radius instead of evaluating the curve
    #[must_use]
    pub fn with_radius(mut self, radius: f64) -> Self {
        self.radius_override = Some(radius);
        self
    }

    /// Places the label on the given side, `buff` units away
    #[must_use]
    pub fn label_at(mut self, direction: Direction, buff: f64) -> Self {
        self.direction = direction;
        self.buff = buff;
        self
    }

    /// Shifts the label after placement
    #[must_use]
    pub fn nudged(mut self, x: f64, y: f64) -> Self {
        self.nudge = Vector::new(x, y);
        self
    }

    /// Sets the marker radius and label font size
    #[must_use]
    pub fn sized(mut self, marker_radius: f64, font_size: f64) -> Self {
        self.marker_radius = marker_radius;
        self.font_size = font_size;
        self
    }

    /// The math-space point on `curve`, honoring the radius override
    ///
    /// Returns `None` where the curve is undefined.
    pub fn locate<C: PolarCurve + ?Sized>(&self, curve: &C) -> Option<Point> {
        let r = match self.radius_override {
            Some(r) => r,
            None => curve.radius(self.theta)?,
        };
        let (sin, cos) = self.theta.sin_cos();
        Some(Point::new(r * cos, r * sin))
    }

    /// A labeled marker at `point`, in display coordinates
    #[must_use]
    pub fn marker_at(&self, point: Point) -> Marker {
        let label = Label::new(angle_label(self.theta), self.color)
            .next_to(self.direction, self.buff)
            .nudged(self.nudge)
            .font_size(self.font_size);
        Marker::new(point, self.color)
            .with_radius(self.marker_radius)
            .with_label(label)
    }
}

/// Claimed intersections of `r = 3(1 + cos θ)` and `r = 2 + 4cos θ`
///
/// At `θ = π` the radius is pinned to 0, the shared origin. Points are placed on the
/// cardioid.
#[must_use]
pub fn cardioid_limacon_intersections() -> Vec<SpecialPoint> {
    const RADIUS: f64 = 0.12;
    const FONT_SIZE: f64 = 22.0;
    const BUFF: f64 = 0.2;

    vec![
        SpecialPoint::new(0.0, Color::Green)
            .label_at(Direction::Right, BUFF)
            .nudged(0.35, 0.35)
            .sized(RADIUS, FONT_SIZE),
        SpecialPoint::new(2.0 * FRAC_PI_3, Color::Yellow)
            .label_at(Direction::UpLeft, BUFF)
            .sized(RADIUS, FONT_SIZE),
        SpecialPoint::new(PI, Color::Orange)
            .with_radius(0.0)
            .label_at(Direction::Left, BUFF)
            .nudged(-0.35, -0.35)
            .sized(RADIUS, FONT_SIZE),
        SpecialPoint::new(4.0 * FRAC_PI_3, Color::Pink)
            .label_at(Direction::DownLeft, BUFF)
            .sized(RADIUS, FONT_SIZE),
    ]
}

/// Builds a labeled marker for each special point on `curve`
///
/// Entries where the curve is undefined are skipped.
pub fn annotate<C: PolarCurve + ?Sized>(
    curve: &C,
    points: &[SpecialPoint],
    map: &CoordMap,
) -> Vec<Marker> {
    points
        .iter()
        .filter_map(|special| {
            let Some(point) = special.locate(curve) else {
                log::debug!(
                    "{} is undefined at {}, no marker placed",
                    curve.name(),
                    angle_label(special.theta)
                );
                return None;
            };
            Some(special.marker_at(map.apply(&point)))
        })
        .collect()
}

/// Start and end markers of an arc that runs into the origin
///
/// - green `θ = <start>` on the first sample of `arc`, labeled to the right
/// - red `θ = <end>` on the origin, labeled below, when `origin_theta` is given
///
/// The start marker is omitted when `arc` is empty.
#[must_use]
pub fn arc_markers(
    arc: &PointSequence,
    origin_theta: Option<f64>,
    map: &CoordMap,
) -> Vec<Marker> {
    const RADIUS: f64 = 0.08;
    const FONT_SIZE: f64 = 16.0;

    let mut markers = Vec::with_capacity(2);
    if let Some(start) = arc.first() {
        let special = SpecialPoint::new(start.theta, Color::Green)
            .label_at(Direction::Right, 0.15)
            .sized(RADIUS, FONT_SIZE);
        markers.push(special.marker_at(start.point));
    }

    if let Some(theta) = origin_theta {
        let origin = SpecialPoint::new(theta, Color::Red)
            .label_at(Direction::Down, 0.2)
            .sized(RADIUS, FONT_SIZE);
        markers.push(origin.marker_at(map.origin()));
    }
    markers
}

/// How well a claimed intersection holds
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct IntersectionCheck {
    /// Parameter of the table entry
    pub theta: f64,

    /// Math-space point placed on the first curve
    pub point: Point,

    /// Distance of `point` from the origin
    pub r_first: f64,

    /// Radius of the second curve at `theta`, if defined
    pub r_second: Option<f64>,

    /// Implicit-equation residual of `point` on the second curve
    pub residual: f64,
}
impl IntersectionCheck {
    /// True if the point also lies on the second curve
    #[must_use]
    pub fn holds(&self) -> bool {
        self.residual.abs() <= INTERSECTION_TOLERANCE
    }

    /// `|r₁ − r₂|` at the tabulated parameter, if the second curve is defined there
    ///
    /// Non-zero for an entry that still holds when the curves meet at different
    /// parameters, as they do at the origin.
    #[must_use]
    pub fn radius_gap(&self) -> Option<f64> {
        self.r_second.map(|r| (self.r_first - r).abs())
    }
}

/// Checks each table entry, placed on `first`, against the implicit equation of `second`
///
/// The check is done in Cartesian space, so an entry holds even when the second curve
/// reaches the point at a different parameter (for example the origin, or a point
/// traced with a negative radius). Entries that do not hold are logged at `warn`.
pub fn check_intersections<A, B>(
    first: &A,
    second: &B,
    points: &[SpecialPoint],
) -> Vec<IntersectionCheck>
where
    A: PolarCurve + ?Sized,
    B: PolarCurve + ?Sized,
{
    points
        .iter()
        .filter_map(|special| {
            let point = special.locate(first)?;
            let check = IntersectionCheck {
                theta: special.theta,
                point,
                r_first: point.coords.norm(),
                r_second: second.radius(special.theta),
                residual: second.implicit_residual(&point),
            };

            if !check.holds() {
                log::warn!(
                    "{} is not on {}: ({:.3}, {:.3}) leaves residual {:.3}",
                    angle_label(special.theta),
                    second.equation(),
                    point.x,
                    point.y,
                    check.residual
                );
            }
            Some(check)
        })
        .collect()
}
