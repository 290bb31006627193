//! # Polarplot
//! ## Polar curves, measured and drawn
//!
//! Curves like the lemniscate `r² = 4cos(2θ)` are easy to write down and surprisingly
//! fiddly to work with: half of the parameter domain has no real radius, the arc-length
//! element blows up where the curve passes through the origin, and every point has to be
//! mapped onto a set of axes before it can be drawn.
//!
//! This library provides a small set of tools for exactly that:
//! - Evaluate closed-form polar curves, with undefined angles reported as `None`
//! - Sample a curve over an angle range, silently dropping undefined samples
//! - Measure arc length with adaptive quadrature, split around singular points
//! - Mark special points (intersections, arc endpoints) with labeled markers
//! - Collect everything into an explicit [`figure::Figure`] and render it to PNG (`plotting` feature)
//!
//! The simplest use-case is measuring a piece of a curve:
//! ```rust
//! # use polarplot::{arclength::arc_length, assert_close};
//! use std::f64::consts::PI;
//!
//! let arc = arc_length(PI / 8.0, 3.0 * PI / 8.0).unwrap();
//!
//! // The curve stops being defined at π/4, so only [π/8, π/4) contributes
//! assert_close!(arc.value, 1.70172, tol = 1e-5);
//! assert_close!(arc.closed_form.unwrap(), 2.828, tol = 1e-3);
//! ```
//!
//! # Core Concepts
//! - A [`curve::PolarCurve`] is a relation `r = f(θ)` with a validity predicate.
//!     - [`curve::Lemniscate`], [`curve::Cardioid`] and [`curve::Limacon`] are provided.
//!     - Angles are in radians, and a negative radius is plotted as-is.
//! - A [`coords::CoordMap`] is the affine map from math coordinates to display
//!   coordinates, built from an [`coords::AxesConfig`].
//! - [`sampler::sample`] produces a [`sampler::PointSequence`]: strictly increasing θ,
//!   undefined samples omitted. An empty sequence is a valid result.
//! - [`arclength::arc_length_of`] integrates `√(r² + (dr/dθ)²)` piecewise with
//!   [`quadrature::integrate`], stopping short of each singular point.
//! - [`annotate`] turns a hand-derived table of angles into labeled markers.
//! - [`scenes`] builds the two complete diagrams.
//!
//! # Testing utilities
//!
//! This crate includes a set of testing utilities, see [`test`].
//!
//! This includes a macro that plots the curve and the offending point when a point is
//! found off its curve.
//!
#![warn(missing_docs)]
#![warn(clippy::pedantic)]
#![allow(clippy::cast_precision_loss)] // I don't care about this one
#![allow(clippy::similar_names)] //       Clippy does not get to decide what names are similar
#![allow(clippy::many_single_char_names)] // Math
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod test;

#[cfg(feature = "plotting")]
#[cfg_attr(docsrs, doc(cfg(feature = "plotting")))]
pub mod plotting;

pub mod annotate;
pub mod arclength;
pub mod coords;
pub mod curve;
pub mod display;
pub mod error;
pub mod figure;
pub mod quadrature;
pub mod sampler;
pub mod scenes;
pub mod value;

pub use nalgebra;

#[cfg(feature = "plotting")]
#[cfg_attr(docsrs, doc(cfg(feature = "plotting")))]
pub use plotters;
