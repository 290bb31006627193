use serde::{Deserialize, Serialize};

use crate::{curve::PolarCurve, display::coefficient, value::Point};

/// Cardioid, `r = a(1 + cos θ)`
///
/// Defined for every finite angle. The cusp sits at the origin (`θ = π`) and the
/// perimeter is `8a`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Cardioid {
    /// Scale factor
    pub a: f64,
}
impl Cardioid {
    /// Creates a cardioid `r = a(1 + cos θ)`
    #[must_use]
    pub const fn new(a: f64) -> Self {
        Self { a }
    }
}
impl Default for Cardioid {
    fn default() -> Self {
        Self::new(3.0)
    }
}
impl PolarCurve for Cardioid {
    fn name(&self) -> &'static str {
        "cardioid"
    }

    fn equation(&self) -> String {
        format!("r = {}(1 + cos θ)", coefficient(self.a))
    }

    fn radius(&self, theta: f64) -> Option<f64> {
        theta.is_finite().then(|| self.a * (1.0 + theta.cos()))
    }

    fn radius_derivative(&self, theta: f64) -> Option<f64> {
        theta.is_finite().then(|| -self.a * theta.sin())
    }

    fn implicit_residual(&self, point: &Point) -> f64 {
        let rho2 = point.x * point.x + point.y * point.y;
        (rho2 - self.a * point.x).powi(2) - self.a * self.a * rho2
    }
}
