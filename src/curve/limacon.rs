use serde::{Deserialize, Serialize};

use crate::{
    curve::PolarCurve,
    display::{coefficient, unicode::MINUS},
    value::Point,
};

/// Limaçon of Pascal, `r = a + b·cos θ`
///
/// Defined for every finite angle. When `|b| > |a|` the radius goes negative over part
/// of the period and the curve traces an inner loop through the origin; those points
/// are plotted as-is.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Limacon {
    /// Constant term
    pub a: f64,

    /// Cosine coefficient
    pub b: f64,
}
impl Limacon {
    /// Creates a limaçon `r = a + b·cos θ`
    #[must_use]
    pub const fn new(a: f64, b: f64) -> Self {
        Self { a, b }
    }

    /// Whether the curve has an inner loop
    #[must_use]
    pub fn has_inner_loop(&self) -> bool {
        self.b.abs() > self.a.abs()
    }
}
impl Default for Limacon {
    fn default() -> Self {
        Self::new(2.0, 4.0)
    }
}
impl PolarCurve for Limacon {
    fn name(&self) -> &'static str {
        "limacon"
    }

    fn equation(&self) -> String {
        let sign = if self.b < 0.0 { MINUS } else { '+' };
        format!(
            "r = {} {sign} {}cos θ",
            coefficient(self.a),
            coefficient(self.b.abs())
        )
    }

    fn radius(&self, theta: f64) -> Option<f64> {
        theta.is_finite().then(|| self.a + self.b * theta.cos())
    }

    fn radius_derivative(&self, theta: f64) -> Option<f64> {
        theta.is_finite().then(|| -self.b * theta.sin())
    }

    fn implicit_residual(&self, point: &Point) -> f64 {
        let rho2 = point.x * point.x + point.y * point.y;
        (rho2 - self.b * point.x).powi(2) - self.a * self.a * rho2
    }
}
