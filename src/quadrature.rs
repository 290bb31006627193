//! Adaptive Gauss–Kronrod quadrature.
//!
//! [`integrate`] estimates `∫ₐᵇ f(x) dx` with a 21-point Kronrod rule nested around a
//! 10-point Gauss rule. The difference between the two is the local error estimate.
//! The interval with the largest estimated error is bisected until the requested
//! tolerance is met or [`QuadOptions::limit`] sub-intervals exist.
//!
//! Reaching the limit is not an error: the current estimate is returned with
//! [`Quadrature::converged`] set to `false`, and a warning is logged.
use std::{cmp::Ordering, collections::BinaryHeap};

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Kronrod abscissae on `[0, 1]`, outermost first. Odd indices are the Gauss nodes.
const XGK: [f64; 11] = [
    0.995_657_163_025_808_080_735_527_280_689_003,
    0.973_906_528_517_171_720_077_964_012_084_452,
    0.930_157_491_355_708_226_001_207_180_059_508,
    0.865_063_366_688_984_510_732_096_688_423_493,
    0.780_817_726_586_416_897_063_717_578_345_042,
    0.679_409_568_299_024_406_234_327_365_114_874,
    0.562_757_134_668_604_683_339_000_099_272_694,
    0.433_395_394_129_247_190_799_265_943_165_784,
    0.294_392_862_701_460_198_131_126_603_103_866,
    0.148_874_338_981_631_210_884_826_001_129_720,
    0.0,
];

/// Kronrod weights matching [`XGK`]
const WGK: [f64; 11] = [
    0.011_694_638_867_371_874_278_064_396_062_192,
    0.032_558_162_307_964_727_478_818_972_459_390,
    0.054_755_896_574_351_996_031_381_300_244_580,
    0.075_039_674_810_919_952_767_043_140_916_190,
    0.093_125_454_583_697_605_535_065_465_083_366,
    0.109_387_158_802_297_641_899_210_590_325_805,
    0.123_491_976_262_065_851_077_600_525_755_214,
    0.134_709_217_311_473_325_928_054_001_771_707,
    0.142_775_938_577_060_080_797_094_273_138_717,
    0.147_739_104_901_338_491_374_841_515_972_068,
    0.149_445_554_002_916_905_664_936_468_389_821,
];

/// Gauss weights for the nodes `XGK[1], XGK[3], .., XGK[9]`
const WG: [f64; 5] = [
    0.066_671_344_308_688_137_593_568_809_893_332,
    0.149_451_349_150_580_593_145_776_339_657_697,
    0.219_086_362_515_982_043_995_534_934_228_163,
    0.269_266_719_309_996_355_091_226_921_569_469,
    0.295_524_224_714_752_870_173_892_994_651_338,
];

/// Tolerances and limits for [`integrate`]
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct QuadOptions {
    /// Absolute error target
    pub epsabs: f64,

    /// Relative error target
    pub epsrel: f64,

    /// Maximum number of sub-intervals
    pub limit: usize,
}
impl Default for QuadOptions {
    fn default() -> Self {
        Self {
            epsabs: 1.49e-8,
            epsrel: 1.49e-8,
            limit: 100,
        }
    }
}

/// The outcome of an adaptive integration
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Quadrature {
    /// Estimated value of the integral
    pub value: f64,

    /// Estimated absolute error
    pub abs_error: f64,

    /// Number of sub-intervals used
    pub intervals: usize,

    /// Whether the error target was met before the sub-interval limit
    pub converged: bool,
}

#[derive(Debug, Clone, Copy)]
struct Segment {
    start: f64,
    end: f64,
    value: f64,
    error: f64,
}
impl PartialEq for Segment {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}
impl Eq for Segment {}
impl PartialOrd for Segment {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
impl Ord for Segment {
    fn cmp(&self, other: &Self) -> Ordering {
        self.error.total_cmp(&other.error)
    }
}

/// Integrates `f` over `[a, b]` with adaptive Gauss–Kronrod quadrature
///
/// - `a == b` yields `0`
/// - `a > b` yields the negated integral over `[b, a]`
///
/// # Errors
/// - [`Error::InvalidRange`] if either bound is not finite.
/// - [`Error::NonFiniteIntegrand`] if `f` returns NaN or infinity inside the interval.
///
/// ```
/// # use polarplot::quadrature::{integrate, QuadOptions};
/// let q = integrate(|x: f64| x.sin(), 0.0, std::f64::consts::PI, &QuadOptions::default()).unwrap();
/// assert!((q.value - 2.0).abs() < 1e-12);
/// assert!(q.converged);
/// ```
pub fn integrate<F>(f: F, a: f64, b: f64, options: &QuadOptions) -> Result<Quadrature>
where
    F: Fn(f64) -> f64,
{
    if !(a.is_finite() && b.is_finite()) {
        return Err(Error::InvalidRange { start: a, end: b });
    }

    if a == b {
        return Ok(Quadrature {
            value: 0.0,
            abs_error: 0.0,
            intervals: 0,
            converged: true,
        });
    }

    if a > b {
        let q = integrate(f, b, a, options)?;
        return Ok(Quadrature {
            value: -q.value,
            ..q
        });
    }

    let limit = options.limit.max(1);
    let first = gauss_kronrod(&f, a, b)?;
    let mut value = first.value;
    let mut error = first.error;

    let mut heap = BinaryHeap::with_capacity(limit);
    heap.push(first);

    while !within_tolerance(value, error, options) && heap.len() < limit {
        let Some(worst) = heap.pop() else { break };

        // Bisecting does not help once the interval is below float resolution
        let mid = 0.5 * (worst.start + worst.end);
        if mid <= worst.start || mid >= worst.end {
            heap.push(worst);
            break;
        }

        let left = gauss_kronrod(&f, worst.start, mid)?;
        let right = gauss_kronrod(&f, mid, worst.end)?;

        value += left.value + right.value - worst.value;
        error += left.error + right.error - worst.error;
        heap.push(left);
        heap.push(right);
    }

    // Re-sum to shed the drift from incremental updates
    let value: f64 = heap.iter().map(|s| s.value).sum();
    let error: f64 = heap.iter().map(|s| s.error).sum();
    let converged = within_tolerance(value, error, options);

    if converged {
        log::debug!(
            "integrated over [{a:.6}, {b:.6}] with {} intervals: {value:.12} ± {error:.3e}",
            heap.len()
        );
    } else {
        log::warn!(
            "quadrature over [{a:.6}, {b:.6}] hit the limit of {limit} intervals; \
             accepting {value:.12} ± {error:.3e}"
        );
    }

    Ok(Quadrature {
        value,
        abs_error: error,
        intervals: heap.len(),
        converged,
    })
}

fn within_tolerance(value: f64, error: f64, options: &QuadOptions) -> bool {
    error <= options.epsabs.max(options.epsrel * value.abs())
}

/// Applies the 21-point Kronrod rule to `[a, b]`, estimating the error against the
/// embedded 10-point Gauss rule.
fn gauss_kronrod<F>(f: &F, a: f64, b: f64) -> Result<Segment>
where
    F: Fn(f64) -> f64,
{
    let center = 0.5 * (a + b);
    let half = 0.5 * (b - a);

    let f_center = f(center);
    let mut kronrod = WGK[10] * f_center;
    let mut gauss = 0.0;
    let mut abs_sum = WGK[10] * f_center.abs();
    let mut values = [(0.0, 0.0); 10];

    for (j, &x) in XGK[..10].iter().enumerate() {
        let dx = half * x;
        let (lo, hi) = (f(center - dx), f(center + dx));
        values[j] = (lo, hi);

        kronrod += WGK[j] * (lo + hi);
        abs_sum += WGK[j] * (lo.abs() + hi.abs());
        if j % 2 == 1 {
            gauss += WG[j / 2] * (lo + hi);
        }
    }

    if !(kronrod.is_finite() && abs_sum.is_finite()) {
        return Err(Error::NonFiniteIntegrand { start: a, end: b });
    }

    // Spread of f around its mean, used to scale the raw estimate
    let mean = 0.5 * kronrod;
    let mut spread = WGK[10] * (f_center - mean).abs();
    for (j, (lo, hi)) in values.iter().enumerate() {
        spread += WGK[j] * ((lo - mean).abs() + (hi - mean).abs());
    }

    let value = kronrod * half;
    let spread = spread * half.abs();
    let abs_sum = abs_sum * half.abs();
    let mut error = ((kronrod - gauss) * half).abs();

    if spread != 0.0 && error != 0.0 {
        error = spread * (200.0 * error / spread).powf(1.5).min(1.0);
    }
    if abs_sum > f64::MIN_POSITIVE / (50.0 * f64::EPSILON) {
        error = error.max(50.0 * f64::EPSILON * abs_sum);
    }

    Ok(Segment {
        start: a,
        end: b,
        value,
        error,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_close;
    use std::f64::consts::PI;

    #[test]
    fn test_polynomial_exact() {
        // K21 integrates polynomials up to degree 31 exactly
        let q = integrate(|x| 3.0 * x * x - 2.0 * x + 1.0, -1.0, 2.0, &QuadOptions::default())
            .unwrap();
        assert_close!(q.value, 9.0, tol = 1e-12);
        assert!(q.converged);
        assert_eq!(q.intervals, 1);
    }

    #[test]
    fn test_smooth_functions() {
        let options = QuadOptions::default();
        let q = integrate(f64::exp, 0.0, 1.0, &options).unwrap();
        assert_close!(q.value, std::f64::consts::E - 1.0, tol = 1e-12);

        let q = integrate(|x| 1.0 / (1.0 + x * x), 0.0, 1.0, &options).unwrap();
        assert_close!(q.value, PI / 4.0, tol = 1e-12);
    }

    #[test]
    fn test_endpoint_singularity_adapts() {
        // ∫₀¹ 1/√x = 2, integrable but singular at 0
        let q = integrate(
            |x: f64| if x > 0.0 { 1.0 / x.sqrt() } else { 0.0 },
            0.0,
            1.0,
            &QuadOptions::default(),
        )
        .unwrap();
        assert_close!(q.value, 2.0, tol = 1e-6);
        assert!(q.intervals > 1);
    }

    #[test]
    fn test_kink_adapts() {
        let q = integrate(f64::abs, -1.0, 2.0, &QuadOptions::default()).unwrap();
        assert_close!(q.value, 2.5, tol = 1e-9);
    }

    #[test]
    fn test_limit_reached_returns_estimate() {
        let options = QuadOptions {
            limit: 3,
            epsabs: 0.0,
            epsrel: 0.0,
        };
        let q = integrate(|x: f64| (50.0 * x).sin().abs(), 0.0, 10.0, &options).unwrap();
        assert!(!q.converged);
        assert_eq!(q.intervals, 3);
        assert!(q.value.is_finite());
    }

    #[test]
    fn test_bounds() {
        let options = QuadOptions::default();
        let q = integrate(|x| x, 1.0, 1.0, &options).unwrap();
        assert_eq!(q.value, 0.0);

        let q = integrate(|x| x, 2.0, 0.0, &options).unwrap();
        assert_close!(q.value, -2.0, tol = 1e-12);

        assert!(matches!(
            integrate(|x| x, 0.0, f64::INFINITY, &options),
            Err(Error::InvalidRange { .. })
        ));
        assert!(matches!(
            integrate(|x| x, f64::NAN, 1.0, &options),
            Err(Error::InvalidRange { .. })
        ));
    }

    #[test]
    fn test_non_finite_integrand() {
        let result = integrate(|_| f64::NAN, 0.0, 1.0, &QuadOptions::default());
        assert!(matches!(result, Err(Error::NonFiniteIntegrand { .. })));
    }

    #[test]
    fn test_options_deserialize_with_defaults() {
        let options: QuadOptions = serde_json::from_str(r#"{ "limit": 50 }"#).unwrap();
        assert_eq!(options.limit, 50);
        assert_eq!(options.epsabs, QuadOptions::default().epsabs);
    }
}
