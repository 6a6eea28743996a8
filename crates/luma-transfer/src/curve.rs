//! Runtime curve selection and dispatch.
//!
//! The pipeline's configuration layer picks a [`CurveKind`] (by name, from
//! config), instantiates a [`TransferCurve`], and applies it per sample.
//! The variant set is closed and known at configuration time, so dispatch
//! is a plain `match` with no virtual calls on the per-pixel path.
//!
//! # Usage
//!
//! ```rust
//! use luma_transfer::CurveKind;
//!
//! let kind: CurveKind = "hdr".parse()?;
//! let mut curve = kind.curve(1.0);
//!
//! // Rebind exposure between batches without reconstructing
//! if let Some(hdr) = curve.hdr_mut() {
//!     hdr.set_exposure(2.0);
//! }
//!
//! let y = curve.forward(0.18);
//! assert!(y > 0.0 && y < 1.0);
//! # Ok::<(), luma_transfer::Error>(())
//! ```

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::hdr::HdrCurve;
use crate::{linear, srgb};

/// A transfer curve selected at runtime.
///
/// Each variant maps linear radiance to the processing domain
/// ([`forward`](Self::forward)) and back ([`reverse`](Self::reverse));
/// `reverse` is the exact closed-form inverse of `forward` on the curve's
/// effective domain.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum TransferCurve {
    /// Identity; no encoding.
    #[default]
    Linear,
    /// Fixed gamma 2.2 display approximation.
    Srgb,
    /// Exposure-compensated log + gamma 2.2, for HDR input.
    Hdr(HdrCurve),
}

impl TransferCurve {
    /// Creates the HDR variant with the given exposure.
    #[inline]
    pub fn hdr(exposure: f32) -> Self {
        TransferCurve::Hdr(HdrCurve::new(exposure))
    }

    /// Returns the HDR curve state, if this is the HDR variant.
    ///
    /// The stateless variants have nothing to rebind, so exposure updates
    /// go through here rather than a setter that silently ignores them.
    #[inline]
    pub fn hdr_mut(&mut self) -> Option<&mut HdrCurve> {
        match self {
            TransferCurve::Hdr(curve) => Some(curve),
            _ => None,
        }
    }

    /// Encodes a linear sample into the processing domain.
    #[inline]
    pub fn forward(&self, x: f32) -> f32 {
        match self {
            TransferCurve::Linear => linear::forward(x),
            TransferCurve::Srgb => srgb::forward(x),
            TransferCurve::Hdr(curve) => curve.forward(x),
        }
    }

    /// Decodes a processing-domain sample back to linear.
    #[inline]
    pub fn reverse(&self, x: f32) -> f32 {
        match self {
            TransferCurve::Linear => linear::reverse(x),
            TransferCurve::Srgb => srgb::reverse(x),
            TransferCurve::Hdr(curve) => curve.reverse(x),
        }
    }

    /// Applies [`forward`](Self::forward) to an RGB triplet.
    #[inline]
    pub fn forward_rgb(&self, rgb: [f32; 3]) -> [f32; 3] {
        match self {
            TransferCurve::Linear => linear::forward_rgb(rgb),
            TransferCurve::Srgb => srgb::forward_rgb(rgb),
            TransferCurve::Hdr(curve) => curve.forward_rgb(rgb),
        }
    }

    /// Applies [`reverse`](Self::reverse) to an RGB triplet.
    #[inline]
    pub fn reverse_rgb(&self, rgb: [f32; 3]) -> [f32; 3] {
        match self {
            TransferCurve::Linear => linear::reverse_rgb(rgb),
            TransferCurve::Srgb => srgb::reverse_rgb(rgb),
            TransferCurve::Hdr(curve) => curve.reverse_rgb(rgb),
        }
    }
}

/// Curve selector for the configuration layer.
///
/// Carries no parameters; [`curve`](Self::curve) binds the exposure and
/// produces the applicable [`TransferCurve`]. Parses from the names
/// `"linear"`, `"srgb"` and `"hdr"` (case- and separator-insensitive).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum CurveKind {
    /// Identity; no encoding.
    #[default]
    Linear,
    /// Fixed gamma 2.2 display approximation.
    Srgb,
    /// Exposure-compensated log + gamma 2.2.
    Hdr,
}

impl CurveKind {
    /// Instantiates the curve for this kind.
    ///
    /// `exposure` only affects [`CurveKind::Hdr`]; the stateless kinds
    /// ignore it.
    #[inline]
    pub fn curve(self, exposure: f32) -> TransferCurve {
        match self {
            CurveKind::Linear => TransferCurve::Linear,
            CurveKind::Srgb => TransferCurve::Srgb,
            CurveKind::Hdr => TransferCurve::hdr(exposure),
        }
    }
}

impl fmt::Display for CurveKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            CurveKind::Linear => "linear",
            CurveKind::Srgb => "srgb",
            CurveKind::Hdr => "hdr",
        };
        f.write_str(name)
    }
}

impl FromStr for CurveKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.to_lowercase().replace(['-', '_', ' '], "");
        match name.as_str() {
            "linear" | "identity" | "none" => Ok(CurveKind::Linear),
            "srgb" | "gamma22" => Ok(CurveKind::Srgb),
            "hdr" | "log" => Ok(CurveKind::Hdr),
            _ => Err(Error::UnknownCurve(s.to_string())),
        }
    }
}
