//! # luma-transfer
//!
//! Invertible per-pixel transfer curves for image filtering pipelines.
//!
//! A transfer curve maps linear radiance into a normalized processing domain
//! before heavy per-pixel work (denoising, neural filtering) and maps the
//! result back afterwards. Each curve is a pure, closed-form scalar mapping
//! with an exact closed-form inverse, cheap enough to apply once per color
//! channel per pixel.
//!
//! # Terminology
//!
//! - **Forward**: Linear radiance -> encoded processing domain
//! - **Reverse**: Encoded processing domain -> linear radiance (the
//!   mathematical inverse of forward)
//! - **Exposure**: Multiplicative pre-scaling of radiance before log-domain
//!   compression, modeling camera exposure
//!
//! # Supported Curves
//!
//! | Curve | forward(x) | Domain | Use Case |
//! |-------|------------|--------|----------|
//! | [`linear`] | `x` | all finite | already-normalized input |
//! | [`srgb`] | `x^(1/2.2)` | [0, inf) | LDR content, display gamma |
//! | [`hdr`] | `(log2(x*e + 1) * s)^(1/2.2)` | [0, inf) | HDR content, ~64x dynamic range |
//!
//! # Usage
//!
//! ```rust
//! use luma_transfer::CurveKind;
//!
//! // Direct module calls
//! let encoded = luma_transfer::srgb::forward(0.5);
//! let back = luma_transfer::srgb::reverse(encoded);
//! assert!((back - 0.5).abs() < 1e-5);
//!
//! // Runtime selection via the configuration enum
//! let kind: CurveKind = "hdr".parse().unwrap();
//! let curve = kind.curve(2.0);
//! let y = curve.forward(1.0);
//! assert!((curve.reverse(y) - 1.0).abs() < 1e-4);
//! ```
//!
//! # Sharing
//!
//! All curve values are small `Copy` types. The stateless curves can be
//! shared freely between threads. [`HdrCurve`] reads are safe to run
//! concurrently, but [`HdrCurve::set_exposure`] must not race in-flight
//! `forward`/`reverse` calls on the same instance; give each worker its own
//! copy or update exposure only between processing batches.
//!
//! # Used By
//!
//! The surrounding filtering pipeline: its configuration layer selects a
//! [`CurveKind`], instantiates a [`TransferCurve`], and applies it per
//! sample around the filter.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod curve;
pub mod error;
pub mod hdr;
pub mod linear;
pub mod srgb;

// Re-export common items
pub use curve::{CurveKind, TransferCurve};
pub use error::{Error, Result};
pub use hdr::HdrCurve;
pub use linear::{forward as linear_forward, reverse as linear_reverse};
pub use srgb::{forward as srgb_forward, reverse as srgb_reverse};
