//! sRGB-style gamma 2.2 transfer curve.
//!
//! A single power-law approximation of the sRGB display curve. This is
//! deliberately NOT the piecewise IEC 61966-2-1 function (linear toe +
//! gamma 2.4 segment): the filter this feeds is calibrated against the
//! plain 2.2 curve, and the single `powf` keeps the per-pixel path
//! branch-free.
//!
//! # Range
//!
//! - Input/Output: [0, 1] for well-exposed content, [0, inf) accepted
//!
//! # Formula
//!
//! ```text
//! forward(x) = x^(1/2.2)
//! reverse(x) = x^2.2
//! ```
//!
//! Negative input is out of domain and yields NaN (fractional power of a
//! negative base); values are neither clamped nor validated here.

/// Display gamma exponent.
pub const GAMMA: f32 = 2.2;

const RCP_GAMMA: f32 = 1.0 / GAMMA;

/// Gamma 2.2 forward: encodes linear radiance.
///
/// # Example
///
/// ```rust
/// use luma_transfer::srgb::forward;
///
/// let encoded = forward(0.5);
/// assert!((encoded - 0.72974).abs() < 1e-5);
/// ```
#[inline]
pub fn forward(x: f32) -> f32 {
    x.powf(RCP_GAMMA)
}

/// Gamma 2.2 reverse: decodes back to linear radiance.
///
/// # Example
///
/// ```rust
/// use luma_transfer::srgb::reverse;
///
/// let linear = reverse(0.72974);
/// assert!((linear - 0.5).abs() < 1e-5);
/// ```
#[inline]
pub fn reverse(x: f32) -> f32 {
    x.powf(GAMMA)
}

/// Applies the gamma 2.2 forward to an RGB triplet.
#[inline]
pub fn forward_rgb(rgb: [f32; 3]) -> [f32; 3] {
    [forward(rgb[0]), forward(rgb[1]), forward(rgb[2])]
}

/// Applies the gamma 2.2 reverse to an RGB triplet.
#[inline]
pub fn reverse_rgb(rgb: [f32; 3]) -> [f32; 3] {
    [reverse(rgb[0]), reverse(rgb[1]), reverse(rgb[2])]
}
