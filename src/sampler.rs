//! Evaluate a curve over a parameter range.
//!
//! [`sample`] generates `n` evenly spaced angles over an inclusive range, maps each
//! one through the geometry layer and drops the angles where the curve is undefined.
//! The result can be shorter than `n` and can contain gaps; nothing is interpolated
//! across them. An empty result is a valid outcome.
use serde::Serialize;

use crate::{
    coords::CoordMap,
    curve::{polar_to_cartesian, PolarCurve},
    value::{Linspace, Point},
};

/// A single defined sample of a curve
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Sample {
    /// Curve parameter, in radians
    pub theta: f64,

    /// Display-space point
    pub point: Point,
}

/// Ordered samples of one curve segment
///
/// Invariants:
/// - `theta` is strictly increasing (for an increasing range)
/// - consecutive kept samples are separated by a whole number of sampling steps
/// - undefined samples are omitted
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PointSequence {
    samples: Vec<Sample>,
    points: Vec<Point>,
    evaluated: usize,
    step: f64,
}
impl PointSequence {
    /// The kept samples, in parameter order
    #[must_use]
    pub fn samples(&self) -> &[Sample] {
        &self.samples
    }

    /// The display points of the kept samples
    #[must_use]
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Number of candidate parameters that were evaluated
    #[must_use]
    pub fn evaluated(&self) -> usize {
        self.evaluated
    }

    /// Parameter distance between consecutive candidates
    #[must_use]
    pub fn step(&self) -> f64 {
        self.step
    }

    /// Number of kept samples
    #[must_use]
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// True if every candidate was undefined
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// The first kept sample
    #[must_use]
    pub fn first(&self) -> Option<&Sample> {
        self.samples.first()
    }

    /// The last kept sample
    #[must_use]
    pub fn last(&self) -> Option<&Sample> {
        self.samples.last()
    }

    /// Number of places where undefined samples split the sequence
    #[must_use]
    pub fn gaps(&self) -> usize {
        let tolerance = self.step.abs() * 1.5;
        self.samples
            .windows(2)
            .filter(|w| (w[1].theta - w[0].theta).abs() > tolerance)
            .count()
    }
}

/// Samples `curve` at `n` evenly spaced angles in `[theta_start, theta_end]`
///
/// Undefined samples are silently dropped. Returns an empty sequence when every
/// sample is undefined or `n == 0`.
///
/// ```
/// # use polarplot::{sampler::sample, curve::Lemniscate, coords::CoordMap};
/// use std::f64::consts::FRAC_PI_4;
///
/// let right_lobe = sample(&Lemniscate::default(), -FRAC_PI_4, FRAC_PI_4, 200, &CoordMap::identity());
/// assert_eq!(right_lobe.evaluated(), 200);
/// assert_eq!(right_lobe.len(), 200);
/// ```
pub fn sample<C: PolarCurve + ?Sized>(
    curve: &C,
    theta_start: f64,
    theta_end: f64,
    n: usize,
    map: &CoordMap,
) -> PointSequence {
    let thetas = Linspace::new(theta_start, theta_end, n);
    let step = thetas.step();

    let samples: Vec<Sample> = thetas
        .filter_map(|theta| {
            polar_to_cartesian(curve, theta, map).map(|point| Sample { theta, point })
        })
        .collect();
    let points = samples.iter().map(|s| s.point).collect();

    log::debug!(
        "sampled {} over [{theta_start:.4}, {theta_end:.4}]: kept {}/{n}",
        curve.name(),
        samples.len()
    );

    PointSequence {
        samples,
        points,
        evaluated: n,
        step,
    }
}
