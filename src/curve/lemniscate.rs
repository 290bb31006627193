use std::f64::consts::{FRAC_PI_2, FRAC_PI_4};

use serde::{Deserialize, Serialize};

use crate::{
    curve::PolarCurve,
    display::{coefficient, unicode::superscript},
    value::Point,
};

/// Below this value of `cos(2θ)` (relative to the sign of `a²`) the lemniscate's
/// arc-length element is treated as `0`
///
/// `dr/dθ` diverges as `r² → 0⁺`, where the curve passes through the origin.
pub const LEMNISCATE_EPSILON: f64 = 1e-10;

/// Lemniscate of Bernoulli, `r² = a²·cos(2θ)`
///
/// The radius is real only where `a²·cos(2θ) ≥ 0`, so roughly half of all angles yield
/// no point at all. The right lobe is traced by `θ ∈ [−π/4, π/4]`, the left lobe by
/// `θ ∈ [3π/4, 5π/4]`.
///
/// ```
/// # use polarplot::curve::{Lemniscate, PolarCurve};
/// let lemniscate = Lemniscate::default();
/// assert_eq!(lemniscate.equation(), "r² = 4cos(2θ)");
/// assert_eq!(lemniscate.radius(0.0), Some(2.0));
/// assert_eq!(lemniscate.radius(std::f64::consts::FRAC_PI_2), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Lemniscate {
    /// The `a²` coefficient
    pub a_squared: f64,
}
impl Lemniscate {
    /// Creates a lemniscate `r² = a_squared·cos(2θ)`
    #[must_use]
    pub const fn new(a_squared: f64) -> Self {
        Self { a_squared }
    }
}
impl Default for Lemniscate {
    fn default() -> Self {
        Self::new(4.0)
    }
}
impl PolarCurve for Lemniscate {
    fn name(&self) -> &'static str {
        "lemniscate"
    }

    fn equation(&self) -> String {
        format!(
            "r{} = {}cos(2θ)",
            superscript("2"),
            coefficient(self.a_squared)
        )
    }

    fn radius(&self, theta: f64) -> Option<f64> {
        let r_squared = self.a_squared * (2.0 * theta).cos();
        (r_squared >= 0.0).then(|| r_squared.sqrt())
    }

    fn radius_derivative(&self, theta: f64) -> Option<f64> {
        let (s, c) = (2.0 * theta).sin_cos();
        let r_squared = self.a_squared * c;
        if !(r_squared > LEMNISCATE_EPSILON * self.a_squared.abs()) {
            return None;
        }

        // r = √(a²·c)  ⇒  dr/dθ = −a²·sin(2θ) / √(a²·c)
        Some(-self.a_squared * s / r_squared.sqrt())
    }

    fn implicit_residual(&self, point: &Point) -> f64 {
        let (x2, y2) = (point.x * point.x, point.y * point.y);
        (x2 + y2).powi(2) - self.a_squared * (x2 - y2)
    }

    /// `cos(2θ) = 0` at `θ = π/4 + k·π/2`
    fn singular_points(&self, start: f64, end: f64) -> Vec<f64> {
        if !(start.is_finite() && end.is_finite()) || start >= end {
            return Vec::new();
        }

        let first = ((start - FRAC_PI_4) / FRAC_PI_2).floor() as i64;
        let last = ((end - FRAC_PI_4) / FRAC_PI_2).ceil() as i64;
        (first..=last)
            .map(|k| FRAC_PI_4 + k as f64 * FRAC_PI_2)
            .filter(|&theta| theta > start && theta < end)
            .collect()
    }
}
