//! Utilities for displaying angles, coefficients and equations
//!
//! # Helpers
//! - [`pi_fraction`]: Renders an angle as a multiple of π (`2π/3`, `−π/4`), falling
//!   back to a decimal when no small denominator matches.
//! - [`angle_label`]: The `θ = ...` text used for markers.
//! - [`coefficient`]: Formats a coefficient, dropping the fractional part when it is
//!   an integer.
//! - [`fixed`]: Fixed-precision formatting with a true minus sign.
use std::f64::consts::PI;

pub mod unicode;
use unicode::{Greek, MINUS};

/// Default precision for formatting numeric results
pub const DEFAULT_PRECISION: usize = 3;

/// Largest denominator [`pi_fraction`] will try
pub const MAX_PI_DENOMINATOR: u32 = 12;

const PI_FRACTION_TOLERANCE: f64 = 1e-9;

/// Formats `value` with `precision` decimal places, using `−` for negatives
#[must_use]
pub fn fixed(value: f64, precision: usize) -> String {
    let s = format!("{value:.precision$}");
    match s.strip_prefix('-') {
        Some(rest) => format!("{MINUS}{rest}"),
        None => s,
    }
}

/// Formats a coefficient, omitting the fractional part of integers
///
/// ```
/// # use polarplot::display::coefficient;
/// assert_eq!(coefficient(4.0), "4");
/// assert_eq!(coefficient(2.5), "2.5");
/// ```
#[must_use]
pub fn coefficient(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        fixed(value, 0)
    } else {
        let s = fixed(value, DEFAULT_PRECISION);
        s.trim_end_matches('0').trim_end_matches('.').to_string()
    }
}

/// Renders an angle in radians as a fraction of π
///
/// ```
/// # use polarplot::display::pi_fraction;
/// use std::f64::consts::PI;
/// assert_eq!(pi_fraction(0.0), "0");
/// assert_eq!(pi_fraction(PI), "π");
/// assert_eq!(pi_fraction(2.0 * PI / 3.0), "2π/3");
/// assert_eq!(pi_fraction(-PI / 4.0), "−π/4");
/// assert_eq!(pi_fraction(1.0), "1.000");
/// ```
#[must_use]
pub fn pi_fraction(theta: f64) -> String {
    if theta.abs() < PI_FRACTION_TOLERANCE {
        return "0".to_string();
    }

    let ratio = theta / PI;
    for denominator in 1..=MAX_PI_DENOMINATOR {
        let numerator = ratio * f64::from(denominator);
        let rounded = numerator.round();
        if (numerator - rounded).abs() > PI_FRACTION_TOLERANCE {
            continue;
        }

        let sign = if rounded < 0.0 { MINUS.to_string() } else { String::new() };
        let numerator = rounded.abs();
        let numerator = if numerator == 1.0 {
            String::new()
        } else {
            format!("{numerator:.0}")
        };

        return if denominator == 1 {
            format!("{sign}{numerator}{}", Greek::LowerPi)
        } else {
            format!("{sign}{numerator}{}/{denominator}", Greek::LowerPi)
        };
    }

    fixed(theta, DEFAULT_PRECISION)
}

/// The marker label for an angle: `θ = 2π/3`
#[must_use]
pub fn angle_label(theta: f64) -> String {
    format!("{} = {}", Greek::LowerTheta, pi_fraction(theta))
}

/// An inclusive angle interval: `θ ∈ [π/8, 3π/8]`
#[must_use]
pub fn angle_interval(start: f64, end: f64) -> String {
    format!(
        "{} ∈ [{}, {}]",
        Greek::LowerTheta,
        pi_fraction(start),
        pi_fraction(end)
    )
}
