//! Mapping from math coordinates to display coordinates.
//!
//! A [`CoordMap`] is the affine map an [`AxesConfig`] describes: each axis range is
//! scaled to the requested on-screen length, the range midpoints are centered at the
//! origin, and the whole thing is shifted. It is stored as a homogeneous
//! [`nalgebra::Matrix3`], so composition and inversion come for free.
use nalgebra::{Matrix3, Vector2};
use serde::{Deserialize, Serialize};

use crate::{
    error::{Error, Result},
    value::{Point, Vector},
};

/// Most ticks a single axis will draw
pub const MAX_TICKS: usize = 10_000;

/// Range and tick spacing of a single axis: `[min, max, step]`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisRange {
    /// Smallest value on the axis
    pub min: f64,

    /// Largest value on the axis
    pub max: f64,

    /// Distance between ticks
    pub step: f64,
}
impl AxisRange {
    /// Creates a new axis range
    #[must_use]
    pub const fn new(min: f64, max: f64, step: f64) -> Self {
        Self { min, max, step }
    }

    /// Width of the range
    #[must_use]
    pub fn span(&self) -> f64 {
        self.max - self.min
    }

    /// Midpoint of the range
    #[must_use]
    pub fn mid(&self) -> f64 {
        (self.min + self.max) / 2.0
    }

    /// Tick positions, excluding the origin
    ///
    /// Empty if the step is not positive, or if it would produce more than
    /// [`MAX_TICKS`] ticks.
    #[must_use]
    pub fn ticks(&self) -> Vec<f64> {
        if !(self.step > 0.0) || !self.span().is_finite() {
            return Vec::new();
        }

        let count = self.span().abs() / self.step;
        if !(count <= MAX_TICKS as f64) {
            log::warn!(
                "axis step {} over {}..{} gives more than {MAX_TICKS} ticks; omitting ticks",
                self.step,
                self.min,
                self.max
            );
            return Vec::new();
        }

        let first = (self.min / self.step).ceil() as i64;
        let last = (self.max / self.step).floor() as i64;
        (first..=last)
            .filter(|&i| i != 0)
            .map(|i| i as f64 * self.step)
            .collect()
    }

    fn validate(&self, name: &'static str) -> Result<()> {
        let span = self.span();
        if span.is_finite() && span.abs() > f64::EPSILON {
            Ok(())
        } else {
            Err(Error::DegenerateAxis(name))
        }
    }
}

/// Describes a pair of axes placed in the display frame
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxesConfig {
    /// Math range of the horizontal axis
    pub x_range: AxisRange,

    /// Math range of the vertical axis
    pub y_range: AxisRange,

    /// On-screen length of the horizontal axis
    pub x_length: f64,

    /// On-screen length of the vertical axis
    pub y_length: f64,

    /// Display-space offset applied after scaling
    pub shift: Vector,
}
impl AxesConfig {
    /// Axes used by the lemniscate diagram
    #[must_use]
    pub fn lemniscate() -> Self {
        Self {
            x_range: AxisRange::new(-3.0, 3.0, 1.0),
            y_range: AxisRange::new(-3.0, 3.0, 1.0),
            x_length: 6.0,
            y_length: 5.0,
            shift: Vector::new(0.0, -0.8),
        }
    }

    /// Axes used by the cardioid / limaçon diagram
    #[must_use]
    pub fn cardioid() -> Self {
        Self {
            x_range: AxisRange::new(-8.0, 8.0, 1.0),
            y_range: AxisRange::new(-6.0, 6.0, 1.0),
            x_length: 9.0,
            y_length: 6.0,
            shift: Vector::new(0.0, -1.0),
        }
    }

    /// Builds the coordinate map for these axes
    ///
    /// # Errors
    /// Returns [`Error::DegenerateAxis`] if either range is empty or not finite.
    pub fn coord_map(&self) -> Result<CoordMap> {
        CoordMap::from_axes(self)
    }
}
impl Default for AxesConfig {
    fn default() -> Self {
        Self::lemniscate()
    }
}

/// Affine map from math coordinates to display coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CoordMap {
    forward: Matrix3<f64>,
    inverse: Matrix3<f64>,
}
impl CoordMap {
    /// The identity map, where math and display coordinates coincide
    #[must_use]
    pub fn identity() -> Self {
        Self {
            forward: Matrix3::identity(),
            inverse: Matrix3::identity(),
        }
    }

    /// Builds the map described by a set of axes
    ///
    /// # Errors
    /// Returns [`Error::DegenerateAxis`] if either range is empty or not finite.
    pub fn from_axes(axes: &AxesConfig) -> Result<Self> {
        axes.x_range.validate("x")?;
        axes.y_range.validate("y")?;

        let scale = Vector2::new(
            axes.x_length / axes.x_range.span(),
            axes.y_length / axes.y_range.span(),
        );
        let offset = Vector2::new(
            axes.shift.x - axes.x_range.mid() * scale.x,
            axes.shift.y - axes.y_range.mid() * scale.y,
        );

        let forward = Matrix3::new_nonuniform_scaling(&scale).append_translation(&offset);
        let inverse = forward.try_inverse().ok_or(Error::DegenerateAxis("x/y"))?;
        Ok(Self { forward, inverse })
    }

    /// Maps a math-space point to display space
    #[must_use]
    pub fn apply(&self, point: &Point) -> Point {
        self.forward.transform_point(point)
    }

    /// Maps `(x, y)` in math space to display space
    #[must_use]
    pub fn c2p(&self, x: f64, y: f64) -> Point {
        self.apply(&Point::new(x, y))
    }

    /// Maps a display-space point back to math space
    #[must_use]
    pub fn invert(&self, point: &Point) -> Point {
        self.inverse.transform_point(point)
    }

    /// Display-space location of the math origin
    #[must_use]
    pub fn origin(&self) -> Point {
        self.c2p(0.0, 0.0)
    }
}
impl Default for CoordMap {
    fn default() -> Self {
        Self::identity()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_close;

    #[test]
    fn test_lemniscate_axes() {
        let map = AxesConfig::lemniscate().coord_map().unwrap();

        // 6 units of x over 6 units of length, 6 units of y over 5
        let p = map.c2p(3.0, 3.0);
        assert_close!(p.x, 3.0);
        assert_close!(p.y, 2.5 - 0.8);

        let origin = map.origin();
        assert_close!(origin.x, 0.0);
        assert_close!(origin.y, -0.8);
    }

    #[test]
    fn test_cardioid_axes() {
        let map = AxesConfig::cardioid().coord_map().unwrap();
        let p = map.c2p(8.0, -6.0);
        assert_close!(p.x, 4.5);
        assert_close!(p.y, -3.0 - 1.0);
    }

    #[test]
    fn test_inverse_roundtrip() {
        let map = AxesConfig::cardioid().coord_map().unwrap();
        let p = Point::new(1.25, -3.5);
        let back = map.invert(&map.apply(&p));
        assert_close!(back.x, p.x, tol = 1e-12);
        assert_close!(back.y, p.y, tol = 1e-12);
    }

    #[test]
    fn test_asymmetric_range_centers_midpoint() {
        let axes = AxesConfig {
            x_range: AxisRange::new(0.0, 10.0, 1.0),
            y_range: AxisRange::new(-1.0, 3.0, 1.0),
            x_length: 5.0,
            y_length: 4.0,
            shift: Vector::zeros(),
        };
        let map = axes.coord_map().unwrap();
        let mid = map.c2p(5.0, 1.0);
        assert_close!(mid.x, 0.0);
        assert_close!(mid.y, 0.0);
    }

    #[test]
    fn test_degenerate_axis() {
        let mut axes = AxesConfig::lemniscate();
        axes.y_range = AxisRange::new(2.0, 2.0, 1.0);
        assert!(matches!(axes.coord_map(), Err(Error::DegenerateAxis("y"))));

        axes.y_range = AxisRange::new(0.0, f64::NAN, 1.0);
        assert!(axes.coord_map().is_err());
    }

    #[test]
    fn test_ticks() {
        let ticks = AxisRange::new(-3.0, 3.0, 1.0).ticks();
        assert_eq!(ticks, vec![-3.0, -2.0, -1.0, 1.0, 2.0, 3.0]);
        assert!(AxisRange::new(-3.0, 3.0, 0.0).ticks().is_empty());
    }

    #[test]
    fn test_ticks_capped() {
        assert!(AxisRange::new(-3.0, 3.0, 1e-6).ticks().is_empty());
        assert!(AxisRange::new(-3.0, 3.0, 1e-300).ticks().is_empty());

        // Right at the cap still draws every tick but the origin
        let ticks = AxisRange::new(-5_000.0, 5_000.0, 1.0).ticks();
        assert_eq!(ticks.len(), MAX_TICKS);
    }
}
