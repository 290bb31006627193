//! Arc length of polar curves by adaptive quadrature.
//!
//! The arc-length element `ds/dθ = √(r² + (dr/dθ)²)` diverges wherever a curve reaches
//! the origin with an infinite radial derivative; for `r² = 4cos(2θ)` that happens at
//! `θ = π/4 + k·π/2`. Those points are sidestepped twice over:
//! - the element is `0` where `cos(2θ) ≤ ε` (see [`crate::curve::LEMNISCATE_EPSILON`])
//! - the interval is split at each interior singular point, and each piece stops
//!   [`SINGULAR_GAP`] short of it
//!
//! Pieces are integrated independently and summed.
use serde::Serialize;

use crate::{
    curve::{Lemniscate, PolarCurve},
    error::{Error, Result},
    quadrature::{integrate, QuadOptions},
};

/// Distance, in radians, that each piece stops short of a singular point
pub const SINGULAR_GAP: f64 = 0.001;

/// Widest angle range [`arc_length_of`] accepts, one thousand turns
pub const MAX_ARC_SPAN: f64 = 1000.0 * std::f64::consts::TAU;

/// The closed form shown next to the lemniscate arc length, `2√2`
pub const LEMNISCATE_CLOSED_FORM: f64 = 2.0 * std::f64::consts::SQRT_2;

/// An arc length estimate
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ArcLength {
    /// Sum of the piecewise integrals
    pub value: f64,

    /// Sum of the quadrature error estimates
    pub abs_error: f64,

    /// The sub-intervals that were integrated
    pub pieces: Vec<(f64, f64)>,

    /// Whether every piece met the quadrature tolerance
    pub converged: bool,

    /// Closed-form counterpart, for display alongside the numeric value
    pub closed_form: Option<f64>,
}

/// Arc length of the lemniscate `r² = 4cos(2θ)` between two angles
///
/// The result carries [`LEMNISCATE_CLOSED_FORM`] as its closed-form counterpart.
/// Parts of the interval where the curve is undefined contribute nothing.
///
/// # Errors
/// Returns [`Error::InvalidRange`] if `theta_a > theta_b`, either bound is not finite, or
/// the range is wider than [`MAX_ARC_SPAN`].
///
/// ```
/// # use polarplot::arclength::arc_length;
/// use std::f64::consts::PI;
/// let arc = arc_length(PI / 8.0, 3.0 * PI / 8.0).unwrap();
/// assert_eq!(arc.pieces.len(), 2);
/// assert_eq!(format!("{:.3}", arc.closed_form.unwrap()), "2.828");
/// ```
pub fn arc_length(theta_a: f64, theta_b: f64) -> Result<ArcLength> {
    let mut arc = arc_length_of(
        &Lemniscate::default(),
        theta_a,
        theta_b,
        &QuadOptions::default(),
    )?;
    arc.closed_form = Some(LEMNISCATE_CLOSED_FORM);
    Ok(arc)
}

/// Arc length of any polar curve between two angles
///
/// # Errors
/// - [`Error::InvalidRange`] if `theta_a > theta_b`, either bound is not finite, or the
///   range is wider than [`MAX_ARC_SPAN`].
/// - [`Error::NonFiniteIntegrand`] if the curve's arc-length element is not finite.
pub fn arc_length_of<C: PolarCurve + ?Sized>(
    curve: &C,
    theta_a: f64,
    theta_b: f64,
    options: &QuadOptions,
) -> Result<ArcLength> {
    if !(theta_a.is_finite() && theta_b.is_finite())
        || theta_a > theta_b
        || theta_b - theta_a > MAX_ARC_SPAN
    {
        return Err(Error::InvalidRange {
            start: theta_a,
            end: theta_b,
        });
    }

    let singular = curve.singular_points(theta_a, theta_b);
    let pieces = split_pieces(theta_a, theta_b, &singular, SINGULAR_GAP);

    let mut arc = ArcLength {
        value: 0.0,
        abs_error: 0.0,
        pieces: Vec::with_capacity(pieces.len()),
        converged: true,
        closed_form: None,
    };

    for (start, end) in pieces {
        let q = integrate(|theta| curve.speed(theta), start, end, options)?;
        arc.value += q.value;
        arc.abs_error += q.abs_error;
        arc.converged &= q.converged;
        arc.pieces.push((start, end));
    }

    log::debug!(
        "arc length of {} over [{theta_a:.6}, {theta_b:.6}] in {} pieces: {:.9}",
        curve.name(),
        arc.pieces.len(),
        arc.value
    );
    Ok(arc)
}

/// Splits `[start, end]` at each singular point, leaving `gap` on either side of it
///
/// Pieces that vanish because two singular points are closer than `2·gap` are dropped.
fn split_pieces(start: f64, end: f64, singular: &[f64], gap: f64) -> Vec<(f64, f64)> {
    let mut pieces = Vec::with_capacity(singular.len() + 1);
    let mut lo = start;
    for &s in singular {
        let hi = s - gap;
        if hi > lo {
            pieces.push((lo, hi));
        }
        lo = lo.max(s + gap);
    }
    if end > lo || pieces.is_empty() {
        pieces.push((lo.min(end), end));
    }
    pieces
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        assert_close,
        curve::{Cardioid, Limacon},
    };
    use std::f64::consts::{FRAC_PI_4, PI};

    /// `∫ 2/√cos(2θ) dθ` over `[π/8, π/4 − 0.001]`
    const LEMNISCATE_ARC: f64 = 1.701_718_613_048;

    #[test]
    fn test_lemniscate_arc() {
        let arc = arc_length(PI / 8.0, 3.0 * PI / 8.0).unwrap();
        assert_close!(arc.closed_form.unwrap(), 2.828, tol = 1e-3);
        assert_close!(arc.value, LEMNISCATE_ARC, tol = 1e-6);
        assert!(arc.converged);

        assert_eq!(arc.pieces.len(), 2);
        assert_close!(arc.pieces[0].0, PI / 8.0);
        assert_close!(arc.pieces[0].1, FRAC_PI_4 - SINGULAR_GAP);
        assert_close!(arc.pieces[1].0, FRAC_PI_4 + SINGULAR_GAP);
        assert_close!(arc.pieces[1].1, 3.0 * PI / 8.0);
    }

    #[test]
    fn test_undefined_part_contributes_nothing() {
        let past_singularity = arc_length(FRAC_PI_4 + SINGULAR_GAP, 3.0 * PI / 8.0).unwrap();
        assert_eq!(past_singularity.value, 0.0);

        let before = arc_length(PI / 8.0, FRAC_PI_4 - SINGULAR_GAP).unwrap();
        assert_close!(before.value, LEMNISCATE_ARC, tol = 1e-6);
    }

    #[test]
    fn test_full_lobe() {
        // Half the lemniscate perimeter: ϖ·a with a = 2
        let arc = arc_length(-FRAC_PI_4, FRAC_PI_4).unwrap();
        assert_close!(arc.value, 5.244_115_108_584, tol = 1e-3);
    }

    #[test]
    fn test_invalid_ranges() {
        assert!(matches!(
            arc_length(1.0, 0.5),
            Err(Error::InvalidRange { start, end }) if start == 1.0 && end == 0.5
        ));
        assert!(matches!(
            arc_length(f64::NAN, 0.5),
            Err(Error::InvalidRange { .. })
        ));
        assert!(matches!(
            arc_length(0.0, f64::INFINITY),
            Err(Error::InvalidRange { .. })
        ));
    }

    #[test]
    fn test_span_limit() {
        assert!(matches!(
            arc_length(0.0, 1e12),
            Err(Error::InvalidRange { .. })
        ));

        // Ten full turns are well inside the limit
        let options = QuadOptions::default();
        let turn = arc_length_of(&Limacon::default(), 0.0, 2.0 * PI, &options).unwrap();
        let turns = arc_length_of(&Limacon::default(), 0.0, 20.0 * PI, &options).unwrap();
        assert_close!(turns.value, 10.0 * turn.value, tol = 1e-6);
    }

    #[test]
    fn test_empty_range() {
        let arc = arc_length(0.3, 0.3).unwrap();
        assert_eq!(arc.value, 0.0);
        assert_eq!(arc.pieces, vec![(0.3, 0.3)]);
    }

    #[test]
    fn test_cardioid_perimeter() {
        let options = QuadOptions::default();
        let full = arc_length_of(&Cardioid::default(), 0.0, 2.0 * PI, &options).unwrap();
        assert_close!(full.value, 24.0, tol = 1e-6);
        assert_eq!(full.closed_form, None);

        let half = arc_length_of(&Cardioid::new(1.0), 0.0, PI, &options).unwrap();
        assert_close!(half.value, 4.0, tol = 1e-6);
    }

    #[test]
    fn test_limacon_matches_closed_integrand() {
        // ds/dθ = √(20 + 16cos θ), symmetric about π
        let options = QuadOptions::default();
        let full = arc_length_of(&Limacon::default(), 0.0, 2.0 * PI, &options).unwrap();
        let half = arc_length_of(&Limacon::default(), 0.0, PI, &options).unwrap();
        assert_close!(full.value, 2.0 * half.value, tol = 1e-6);
    }

    #[test]
    fn test_split_pieces() {
        assert_eq!(split_pieces(0.0, 1.0, &[], 0.25), vec![(0.0, 1.0)]);
        assert_eq!(
            split_pieces(0.0, 1.0, &[0.5], 0.25),
            vec![(0.0, 0.25), (0.75, 1.0)]
        );

        // Singular points closer than the gap swallow the piece between them
        let pieces = split_pieces(0.0, 2.0, &[0.5, 0.75], 0.25);
        assert_eq!(pieces, vec![(0.0, 0.25), (1.0, 2.0)]);
    }
}
