//! Error types for curve configuration.
//!
//! The numeric operations themselves are total and never fail (out-of-domain
//! input propagates as NaN, per IEEE-754); the only fallible surface is
//! resolving a curve name from the pipeline configuration.
//!
//! # Usage
//!
//! ```rust
//! use luma_transfer::{CurveKind, Error};
//!
//! let err = "rec709".parse::<CurveKind>().unwrap_err();
//! assert!(matches!(err, Error::UnknownCurve(_)));
//! ```

use thiserror::Error;

/// Result type alias using [`Error`] as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while configuring a transfer curve.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// The configured curve name does not match any supported curve.
    #[error("unknown transfer curve '{0}' (expected 'linear', 'srgb' or 'hdr')")]
    UnknownCurve(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_curve_message() {
        let err = Error::UnknownCurve("aces".to_string());
        let msg = err.to_string();
        assert!(msg.contains("aces"));
        assert!(msg.contains("srgb"));
    }
}
