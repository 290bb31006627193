//! Point types and parameter iteration utilities.
//!
//! # Iterators
//!
//! - [`Linspace`]: `n` evenly spaced values over an inclusive range, the way
//!   curve parameters are generated before sampling.
//!
//! # Example
//!
//! ```rust
//! use polarplot::value::Linspace;
//!
//! let thetas: Vec<f64> = Linspace::new(0.0, 1.0, 5).collect();
//! assert_eq!(thetas, vec![0.0, 0.25, 0.5, 0.75, 1.0]);
//! ```

/// A point in the plane, either in math coordinates or display coordinates.
pub type Point = nalgebra::Point2<f64>;

/// A displacement in the plane.
pub type Vector = nalgebra::Vector2<f64>;

/// Iterator over `n` evenly spaced values in `[start, end]`, inclusive.
///
/// - `n == 0` yields nothing
/// - `n == 1` yields `start` only
/// - Otherwise the first value is exactly `start` and the last exactly `end`
#[derive(Debug, Clone)]
pub struct Linspace {
    start: f64,
    end: f64,
    n: usize,
    index: usize,
}
impl Linspace {
    /// Creates a new iterator over `n` values from `start` to `end`
    #[must_use]
    pub fn new(start: f64, end: f64, n: usize) -> Self {
        Self {
            start,
            end,
            n,
            index: 0,
        }
    }

    /// Distance between consecutive values, or `0.0` if fewer than two are produced
    #[must_use]
    pub fn step(&self) -> f64 {
        if self.n < 2 {
            0.0
        } else {
            (self.end - self.start) / (self.n - 1) as f64
        }
    }

    fn value_at(&self, i: usize) -> f64 {
        if i + 1 == self.n && self.n > 1 {
            self.end
        } else {
            self.start + self.step() * i as f64
        }
    }
}
impl Iterator for Linspace {
    type Item = f64;

    fn next(&mut self) -> Option<Self::Item> {
        if self.index >= self.n {
            return None;
        }

        let value = self.value_at(self.index);
        self.index += 1;
        Some(value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.n - self.index;
        (remaining, Some(remaining))
    }
}
impl ExactSizeIterator for Linspace {}
