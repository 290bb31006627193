//! Assertions for testing curve geometry and numeric results.
//!
//! # Macros
//!
//! ### [`crate::assert_close`]
//! Asserts that two floating-point values are approximately equal.
//! - Uses [`DEFAULT_TOLERANCE`] unless `tol = ...` is given.
//! - `assert_eq!` equivalent for floats.
//!
//! ### [`crate::assert_all_close`]
//! Element-wise [`crate::assert_close`] over two slices of equal length.
//!
//! ### [`crate::assert_on_curve`]
//! Asserts that a display-space point lies on a polar curve once the coordinate map is
//! inverted.
//! - If the `plotting` feature is active, a plot of the curve and the offending point
//!   is written to `target/plot_output` on failure.
//!
//! ```rust
//! # use polarplot::{assert_on_curve, curve::Cardioid, coords::CoordMap};
//! let cardioid = Cardioid::default();
//! let map = CoordMap::identity();
//! let point = polarplot::curve::polar_to_cartesian(&cardioid, 1.0, &map).unwrap();
//! assert_on_curve!(cardioid, map, point);
//! ```

mod assertions;

/// Absolute tolerance used by the assertions when none is given
pub const DEFAULT_TOLERANCE: f64 = 1e-9;
