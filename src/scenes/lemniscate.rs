//! Arc length of the lemniscate `r² = 4cos(2θ)`.
//!
//! The diagram shows both lobes faintly and highlights the arc from `θ = π/8` up to the
//! origin at `θ = π/4`, where the curve stops being defined. The result line shows the
//! closed form `2√2`, and [`LemniscateReport`] prints the derivation to the console.
use std::{
    f64::consts::FRAC_PI_4,
    fmt::{self, Display},
};

use serde::{Deserialize, Serialize};

use crate::{
    annotate::arc_markers,
    arclength::{arc_length_of, ArcLength, LEMNISCATE_CLOSED_FORM},
    coords::AxesConfig,
    curve::{Lemniscate, PolarCurve},
    display::{
        angle_interval, coefficient, fixed, pi_fraction, unicode::SQRT, DEFAULT_PRECISION,
    },
    error::Result,
    figure::{bottom_edge, text_height, top_edge, Color, Figure, Style, Text},
    quadrature::QuadOptions,
    sampler::{sample, PointSequence},
    value::Point,
};

const RULE_WIDTH: usize = 60;
const TITLE_SIZE: f64 = 36.0;
const NOTE_SIZE: f64 = 18.0;

/// A closed-form value paired with how it is written
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClosedForm {
    /// Symbolic form, e.g. `2√2`
    pub label: String,

    /// Numeric value of the closed form
    pub value: f64,
}
impl Default for ClosedForm {
    fn default() -> Self {
        Self {
            label: format!("2{SQRT}2"),
            value: LEMNISCATE_CLOSED_FORM,
        }
    }
}

/// Options for the lemniscate diagram
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LemniscateOptions {
    /// The curve
    pub curve: Lemniscate,

    /// Axes the curve is drawn on
    pub axes: AxesConfig,

    /// Samples per lobe, and for the highlighted arc
    pub samples: usize,

    /// Start of the measured arc
    pub arc_start: f64,

    /// End of the measured arc
    pub arc_end: f64,

    /// Closed form shown next to the result
    pub closed_form: Option<ClosedForm>,

    /// Quadrature settings for each sub-integral
    pub quadrature: QuadOptions,
}
impl Default for LemniscateOptions {
    fn default() -> Self {
        Self {
            curve: Lemniscate::default(),
            axes: AxesConfig::lemniscate(),
            samples: 200,
            arc_start: FRAC_PI_4 / 2.0,
            arc_end: 3.0 * FRAC_PI_4 / 2.0,
            closed_form: Some(ClosedForm::default()),
            quadrature: QuadOptions::default(),
        }
    }
}

/// The built diagram and the values behind it
#[derive(Debug, Clone)]
pub struct LemniscateScene {
    /// Everything to draw
    pub figure: Figure,

    /// Right and left lobes
    pub lobes: [PointSequence; 2],

    /// The highlighted part of the arc
    pub arc_points: PointSequence,

    /// The computed arc length
    pub arc: ArcLength,

    options: LemniscateOptions,
}
impl LemniscateScene {
    /// The console summary of this scene
    #[must_use]
    pub fn report(&self) -> LemniscateReport<'_> {
        LemniscateReport {
            options: &self.options,
            arc: &self.arc,
        }
    }
}

/// Builds the lemniscate arc-length diagram
///
/// # Errors
/// - [`crate::error::Error::DegenerateAxis`] if the axes cannot be mapped.
/// - [`crate::error::Error::InvalidRange`] if the arc bounds are inverted or not finite.
pub fn build(options: &LemniscateOptions) -> Result<LemniscateScene> {
    let map = options.axes.coord_map()?;
    let curve = &options.curve;
    let (start, end) = (options.arc_start, options.arc_end);

    let mut arc = arc_length_of(curve, start, end, &options.quadrature)?;
    arc.closed_form = options.closed_form.as_ref().map(|c| c.value);

    let mut figure = Figure::new(curve.equation(), Some(options.axes));
    let title_y = top_edge(0.15, TITLE_SIZE);
    figure.push_text(Text::new(
        curve.equation(),
        Point::new(0.0, title_y),
        Color::White,
        TITLE_SIZE,
    ));

    let lobe_style = Style::stroke(Color::Gray, 2.0).with_opacity(0.3);
    let lobes = [
        sample(curve, -FRAC_PI_4, FRAC_PI_4, options.samples, &map),
        sample(curve, 3.0 * FRAC_PI_4, 5.0 * FRAC_PI_4, options.samples, &map),
    ];
    for lobe in &lobes {
        figure.push_polyline(lobe.points(), lobe_style);
    }

    // The highlighted arc runs until the curve reaches the origin
    let origin_theta = curve.singular_points(start, end).first().copied();
    let arc_points = sample(
        curve,
        start,
        origin_theta.unwrap_or(end),
        options.samples,
        &map,
    );
    figure.push_polyline(arc_points.points(), Style::stroke(Color::Yellow, 5.0));
    for marker in arc_markers(&arc_points, origin_theta, &map) {
        figure.push_marker(marker);
    }

    let shown = arc.closed_form.unwrap_or(arc.value);
    let result_y = bottom_edge(0.4, TITLE_SIZE);
    figure.push_text(Text::new(
        format!("L = {}", fixed(shown, DEFAULT_PRECISION)),
        Point::new(0.0, result_y),
        Color::Yellow,
        TITLE_SIZE,
    ));
    if let Some(closed) = &options.closed_form {
        let note_y = result_y - (text_height(TITLE_SIZE) + text_height(NOTE_SIZE)) / 2.0 - 0.15;
        figure.push_text(Text::new(
            format!(
                "(Exact: {} ≈ {})",
                closed.label,
                fixed(closed.value, DEFAULT_PRECISION)
            ),
            Point::new(0.0, note_y),
            Color::Gray,
            NOTE_SIZE,
        ));
    }

    log::info!(
        "built '{}' with {} elements, L = {:.6}",
        figure.title(),
        figure.elements().len(),
        arc.value
    );

    Ok(LemniscateScene {
        figure,
        lobes,
        arc_points,
        arc,
        options: options.clone(),
    })
}

/// Console summary of the arc-length derivation
///
/// ```text
/// ============================================================
///      LEMNISCATE ARC LENGTH: r² = 4cos(2θ)
/// ============================================================
/// Arc: θ ∈ [π/8, 3π/8]
/// ...
/// EXACT ANSWER:        L = 2√2 = 2.828
/// NUMERIC:             L ≈ 1.701719 (± 1.9e-14, 2 pieces)
/// ============================================================
/// ```
#[derive(Debug, Clone, Copy)]
pub struct LemniscateReport<'a> {
    options: &'a LemniscateOptions,
    arc: &'a ArcLength,
}
impl Display for LemniscateReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rule = "=".repeat(RULE_WIDTH);
        let equation = self.options.curve.equation();
        let a = coefficient(self.options.curve.a_squared.sqrt());
        let (start, end) = (self.options.arc_start, self.options.arc_end);

        writeln!(f)?;
        writeln!(f, "{rule}")?;
        writeln!(f, "     LEMNISCATE ARC LENGTH: {equation}")?;
        writeln!(f, "{rule}")?;
        writeln!(f, "Arc: {}", angle_interval(start, end))?;
        writeln!(f)?;
        writeln!(f, "For {equation}:")?;
        writeln!(f, "  r = {a}{SQRT}(cos(2θ))")?;
        writeln!(f, "  dr/dθ = -{a}sin(2θ)/{SQRT}(cos(2θ))")?;
        writeln!(f)?;
        writeln!(f, "Arc length L = ∫{SQRT}(r² + (dr/dθ)²) dθ")?;
        writeln!(f)?;
        writeln!(f, "After simplification:")?;
        writeln!(
            f,
            "  L = ∫ {a}/{SQRT}(cos(2θ)) dθ  from {} to {}",
            pi_fraction(start),
            pi_fraction(end)
        )?;

        if let Some(closed) = &self.options.closed_form {
            writeln!(f)?;
            writeln!(f, "This integral evaluates to: {}", closed.label)?;
            writeln!(f)?;
            writeln!(
                f,
                "{:<20} L = {} = {:.3}",
                "EXACT ANSWER:", closed.label, closed.value
            )?;
        } else {
            writeln!(f)?;
        }

        writeln!(
            f,
            "{:<20} L ≈ {:.6} (± {:.1e}, {} pieces)",
            "NUMERIC:",
            self.arc.value,
            self.arc.abs_error,
            self.arc.pieces.len()
        )?;
        writeln!(f, "{rule}")?;
        writeln!(f)
    }
}
