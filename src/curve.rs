//! Closed-form polar curves.
//!
//! A [`PolarCurve`] is a relation `r = f(θ)` plus a validity predicate: [`PolarCurve::radius`]
//! returns `None` wherever the radius is not real. Absence is an expected outcome, not
//! an error; the [`crate::sampler`] filters those parameters out.
//!
//! # Curves
//! - [`Lemniscate`]: `r² = a²·cos(2θ)`, defined only where `cos(2θ) ≥ 0`
//! - [`Cardioid`]: `r = a(1 + cos θ)`
//! - [`Limacon`]: `r = a + b·cos θ`, which has an inner loop when `|b| > |a|`
//!
//! [`Curve`] wraps all three for code that selects a curve at runtime.
use serde::{Deserialize, Serialize};

use crate::{coords::CoordMap, value::Point};

mod cardioid;
mod lemniscate;
mod limacon;

pub use cardioid::Cardioid;
pub use lemniscate::{Lemniscate, LEMNISCATE_EPSILON};
pub use limacon::Limacon;

/// A curve given in polar form `r = f(θ)`, with angles in radians
pub trait PolarCurve {
    /// Short identifier for the curve, e.g. `"lemniscate"`
    fn name(&self) -> &'static str;

    /// Human-readable equation, e.g. `r² = 4cos(2θ)`
    fn equation(&self) -> String;

    /// The radius at `theta`, or `None` where the curve is undefined
    fn radius(&self, theta: f64) -> Option<f64>;

    /// `dr/dθ` at `theta`, or `None` where it is undefined or numerically unusable
    fn radius_derivative(&self, theta: f64) -> Option<f64>;

    /// Residual of the curve's implicit Cartesian equation at a math-space point
    ///
    /// Zero on the curve, including any branch traced with a negative radius.
    fn implicit_residual(&self, point: &Point) -> f64;

    /// Arc-length element `ds/dθ = √(r² + (dr/dθ)²)`
    ///
    /// Returns `0.0` wherever either the radius or its derivative is undefined.
    fn speed(&self, theta: f64) -> f64 {
        match (self.radius(theta), self.radius_derivative(theta)) {
            (Some(r), Some(dr)) => r.hypot(dr),
            _ => 0.0,
        }
    }

    /// Parameter values strictly inside `(start, end)` where the arc-length element diverges
    ///
    /// Sorted ascending. Quadrature is split at these points.
    fn singular_points(&self, _start: f64, _end: f64) -> Vec<f64> {
        Vec::new()
    }

    /// The math-space point at `theta`, or `None` where the curve is undefined
    fn to_cartesian(&self, theta: f64) -> Option<Point> {
        let r = self.radius(theta)?;
        let (sin, cos) = theta.sin_cos();
        Some(Point::new(r * cos, r * sin))
    }
}

/// Maps the curve point at `theta` through a coordinate map
///
/// Returns `None` where the curve is undefined; this never fails.
///
/// ```
/// # use polarplot::{curve::{polar_to_cartesian, Lemniscate}, coords::CoordMap};
/// let lemniscate = Lemniscate::default();
/// let map = CoordMap::identity();
/// assert!(polar_to_cartesian(&lemniscate, 0.0, &map).is_some());
/// assert!(polar_to_cartesian(&lemniscate, std::f64::consts::FRAC_PI_2, &map).is_none());
/// ```
pub fn polar_to_cartesian<C: PolarCurve + ?Sized>(
    curve: &C,
    theta: f64,
    map: &CoordMap,
) -> Option<Point> {
    curve.to_cartesian(theta).map(|p| map.apply(&p))
}

/// One of the supported curves, selectable at runtime
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Curve {
    /// `r² = a²·cos(2θ)`
    Lemniscate(Lemniscate),

    /// `r = a(1 + cos θ)`
    Cardioid(Cardioid),

    /// `r = a + b·cos θ`
    Limacon(Limacon),
}
impl Curve {
    fn inner(&self) -> &dyn PolarCurve {
        match self {
            Curve::Lemniscate(c) => c,
            Curve::Cardioid(c) => c,
            Curve::Limacon(c) => c,
        }
    }
}
impl PolarCurve for Curve {
    fn name(&self) -> &'static str {
        self.inner().name()
    }

    fn equation(&self) -> String {
        self.inner().equation()
    }

    fn radius(&self, theta: f64) -> Option<f64> {
        self.inner().radius(theta)
    }

    fn radius_derivative(&self, theta: f64) -> Option<f64> {
        self.inner().radius_derivative(theta)
    }

    fn implicit_residual(&self, point: &Point) -> f64 {
        self.inner().implicit_residual(point)
    }

    fn speed(&self, theta: f64) -> f64 {
        self.inner().speed(theta)
    }

    fn singular_points(&self, start: f64, end: f64) -> Vec<f64> {
        self.inner().singular_points(start, end)
    }
}
impl From<Lemniscate> for Curve {
    fn from(c: Lemniscate) -> Self {
        Curve::Lemniscate(c)
    }
}
impl From<Cardioid> for Curve {
    fn from(c: Cardioid) -> Self {
        Curve::Cardioid(c)
    }
}
impl From<Limacon> for Curve {
    fn from(c: Limacon) -> Self {
        Curve::Limacon(c)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{assert_close, coords::AxesConfig};
    use std::f64::consts::{FRAC_PI_2, PI};

    #[test]
    fn test_curve_dispatch() {
        let curves: [Curve; 3] = [
            Lemniscate::default().into(),
            Cardioid::default().into(),
            Limacon::default().into(),
        ];
        let names: Vec<_> = curves.iter().map(PolarCurve::name).collect();
        assert_eq!(names, vec!["lemniscate", "cardioid", "limacon"]);

        assert_eq!(curves[0].radius(FRAC_PI_2), None);
        assert_close!(curves[1].radius(0.0).unwrap(), 6.0);
        assert_close!(curves[2].radius(PI).unwrap(), -2.0);
    }

    #[test]
    fn test_polar_to_cartesian_maps_through_axes() {
        let map = AxesConfig::cardioid().coord_map().unwrap();
        let p = polar_to_cartesian(&Cardioid::default(), 0.0, &map).unwrap();
        let expected = map.c2p(6.0, 0.0);
        assert_close!(p.x, expected.x);
        assert_close!(p.y, expected.y);
    }

    #[test]
    fn test_non_finite_theta() {
        let map = CoordMap::identity();
        assert!(polar_to_cartesian(&Cardioid::default(), f64::NAN, &map).is_none());
        assert!(polar_to_cartesian(&Limacon::default(), f64::INFINITY, &map).is_none());
        assert!(polar_to_cartesian(&Lemniscate::default(), f64::NAN, &map).is_none());
    }

    #[test]
    fn test_curve_serde() {
        let curve: Curve = Limacon::new(2.0, 4.0).into();
        let json = serde_json::to_string(&curve).unwrap();
        assert_eq!(json, r#"{"kind":"limacon","a":2.0,"b":4.0}"#);
        let back: Curve = serde_json::from_str(&json).unwrap();
        assert_eq!(back, curve);
    }
}
