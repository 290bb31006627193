//! Error types for curve sampling, quadrature and figure export
//!
//! This module defines the failure modes of the library along with a
//! convenient `Result` alias. Undefined curve samples are *not* errors; they
//! are reported as `None` by the geometry layer and filtered by the sampler.

/// Errors that can occur while evaluating, integrating or exporting curves.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The integration bounds are inverted or not finite.
    ///
    /// Arc lengths are only defined for `start <= end`.
    #[error("Invalid integration range {start}..{end}; bounds must be finite and start <= end")]
    InvalidRange {
        /// Lower bound that was requested
        start: f64,
        /// Upper bound that was requested
        end: f64,
    },

    /// The integrand produced NaN or infinity somewhere in the interval.
    #[error("Integrand is not finite on the interval {start}..{end}")]
    NonFiniteIntegrand {
        /// Start of the offending sub-interval
        start: f64,
        /// End of the offending sub-interval
        end: f64,
    },

    /// An axis has an empty or non-finite range, so no coordinate map exists.
    #[error("Axis `{0}` has a degenerate range; min and max must be finite and distinct")]
    DegenerateAxis(&'static str),

    /// Options could not be parsed.
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// Reading or writing a file failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Figure or option (de)serialization failed.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Drawing a figure to an image failed.
    #[cfg(feature = "plotting")]
    #[error("Render error: {0}")]
    Render(#[from] crate::plotting::plotters::Error),
}

/// Result type for the polar curve library
pub type Result<T> = std::result::Result<T, Error>;
