//! HDR transfer curve: exposure-compensated log2 compression + gamma 2.2.
//!
//! Compresses radiance spanning up to ~64x the nominal reference level into
//! a bounded domain so a fixed-range filter (e.g., one trained on [0, 1]
//! input) behaves uniformly regardless of scene brightness. Radiance is
//! pre-scaled by exposure, shifted into log2 space, normalized by the
//! dynamic-range ceiling, then gamma-encoded with the [`srgb`](crate::srgb)
//! stage. Reverse undoes the chain exactly: de-gamma, exponentiate,
//! subtract the +1 offset, divide by exposure.
//!
//! # Range
//!
//! - Linear input: [0, inf), scene-referred; forward(64 / exposure) = 1
//! - Encoded output: [0, 1] up to the 64x ceiling, continues above it
//!
//! # Formula
//!
//! ```text
//! forward(x) = (log2(x * exposure + 1) * s)^(1/2.2)
//! reverse(x) = (2^(x^2.2 / s) - 1) / exposure
//! ```
//!
//! where `s = 1/log2(64 + 1)`, so the log term spans [0, 1] over the
//! 64x dynamic range. Negative input yields NaN; zero exposure is a caller
//! error (see [`HdrCurve::set_exposure`]).

use crate::srgb;

/// Log-domain normalization factor, 1/log2(64 + 1).
///
/// The ceiling of 64 is fixed: it is what the downstream filter is
/// calibrated against, not a tunable.
pub const SCALE: f32 = 0.16604764621;

const RCP_SCALE: f32 = 1.0 / SCALE;

/// Exposure-compensated HDR curve.
///
/// The only stateful curve: it holds the exposure pre-scale and its
/// precomputed reciprocal, so the reverse path multiplies instead of
/// dividing. Construct once per worker; see the
/// [crate docs](crate#sharing) for the sharing discipline around
/// [`set_exposure`](Self::set_exposure).
///
/// # Example
///
/// ```rust
/// use luma_transfer::HdrCurve;
///
/// let curve = HdrCurve::new(2.0);
/// let encoded = curve.forward(1.0);
/// assert!((curve.reverse(encoded) - 1.0).abs() < 1e-4);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HdrCurve {
    exposure: f32,
    rcp_exposure: f32,
}

impl Default for HdrCurve {
    /// Unit exposure: radiance is used as-is.
    fn default() -> Self {
        Self::new(1.0)
    }
}

impl HdrCurve {
    /// Creates a curve with the given exposure.
    ///
    /// `exposure` must be finite and > 0; zero would make the reverse path
    /// divide by zero. This precondition is not checked in release builds.
    #[inline]
    pub fn new(exposure: f32) -> Self {
        debug_assert!(exposure > 0.0, "exposure must be > 0, got {exposure}");
        Self {
            exposure,
            rcp_exposure: 1.0 / exposure,
        }
    }

    /// Returns the current exposure.
    #[inline]
    pub fn exposure(&self) -> f32 {
        self.exposure
    }

    /// Rebinds the exposure without reconstructing the curve.
    ///
    /// Must not race in-flight [`forward`](Self::forward) /
    /// [`reverse`](Self::reverse) calls on the same instance; update only
    /// between processing batches. Same precondition as [`new`](Self::new).
    #[inline]
    pub fn set_exposure(&mut self, exposure: f32) {
        debug_assert!(exposure > 0.0, "exposure must be > 0, got {exposure}");
        self.exposure = exposure;
        self.rcp_exposure = 1.0 / exposure;
    }

    /// HDR forward: encodes exposure-scaled radiance.
    ///
    /// # Example
    ///
    /// ```rust
    /// use luma_transfer::HdrCurve;
    ///
    /// let curve = HdrCurve::default();
    /// assert_eq!(curve.forward(0.0), 0.0);
    /// // 64x radiance fills the encoded range at unit exposure
    /// assert!((curve.forward(64.0) - 1.0).abs() < 1e-5);
    /// ```
    #[inline]
    pub fn forward(&self, x: f32) -> f32 {
        srgb::forward((x * self.exposure + 1.0).log2() * SCALE)
    }

    /// HDR reverse: decodes back to radiance at the bound exposure.
    ///
    /// # Example
    ///
    /// ```rust
    /// use luma_transfer::HdrCurve;
    ///
    /// let curve = HdrCurve::default();
    /// assert_eq!(curve.reverse(0.0), 0.0);
    /// ```
    #[inline]
    pub fn reverse(&self, x: f32) -> f32 {
        ((srgb::reverse(x) * RCP_SCALE).exp2() - 1.0) * self.rcp_exposure
    }

    /// Applies the HDR forward to an RGB triplet.
    #[inline]
    pub fn forward_rgb(&self, rgb: [f32; 3]) -> [f32; 3] {
        [
            self.forward(rgb[0]),
            self.forward(rgb[1]),
            self.forward(rgb[2]),
        ]
    }

    /// Applies the HDR reverse to an RGB triplet.
    #[inline]
    pub fn reverse_rgb(&self, rgb: [f32; 3]) -> [f32; 3] {
        [
            self.reverse(rgb[0]),
            self.reverse(rgb[1]),
            self.reverse(rgb[2]),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roundtrip() {
        for &exposure in &[0.25, 1.0, 2.0, 8.0] {
            let curve = HdrCurve::new(exposure);
            for i in 0..=100 {
                let x = i as f32 / 100.0;
                let back = curve.reverse(curve.forward(x));
                assert!(
                    (x - back).abs() < 1e-5,
                    "exposure={}, x={}, back={}",
                    exposure,
                    x,
                    back
                );
            }
            // Wide-range radiance, relative tolerance
            for &x in &[2.0, 4.0, 16.0, 64.0, 256.0] {
                let back = curve.reverse(curve.forward(x));
                assert!(
                    (x - back).abs() < x * 1e-4,
                    "exposure={}, x={}, back={}",
                    exposure,
                    x,
                    back
                );
            }
        }
    }

    #[test]
    fn test_encoded_roundtrip() {
        let curve = HdrCurve::new(2.0);
        for i in 0..=100 {
            let y = i as f32 / 100.0;
            let back = curve.forward(curve.reverse(y));
            assert!((y - back).abs() < 1e-5, "y={}, back={}", y, back);
        }
    }

    #[test]
    fn test_zero_fixed_point() {
        // log2(0 + 1) = 0 in both directions, for any exposure
        for &exposure in &[0.5, 1.0, 3.0] {
            let curve = HdrCurve::new(exposure);
            assert_eq!(curve.forward(0.0), 0.0);
            assert_eq!(curve.reverse(0.0), 0.0);
        }
    }

    #[test]
    fn test_ceiling_normalization() {
        // At unit exposure the 64x ceiling encodes to 1
        let curve = HdrCurve::default();
        assert!((curve.forward(64.0) - 1.0).abs() < 1e-5);
    }

    #[test]
    fn test_exposure_scaling() {
        // forward at exposure e equals forward at exposure 1 of x * e
        let reference = HdrCurve::new(1.0);
        for &e in &[0.5, 2.0, 4.0] {
            let curve = HdrCurve::new(e);
            for i in 0..=50 {
                let x = i as f32 / 25.0;
                let a = curve.forward(x);
                let b = reference.forward(x * e);
                assert!((a - b).abs() < 1e-6, "e={}, x={}: {} vs {}", e, x, a, b);
            }
        }
    }

    #[test]
    fn test_set_exposure_matches_fresh() {
        let mut updated = HdrCurve::new(1.0);
        updated.set_exposure(4.0);
        let fresh = HdrCurve::new(4.0);
        assert_eq!(updated, fresh);
        for &x in &[0.0, 0.1, 0.5, 1.0, 10.0] {
            assert_eq!(updated.forward(x), fresh.forward(x));
            assert_eq!(updated.reverse(x), fresh.reverse(x));
        }
    }

    #[test]
    fn test_monotonic() {
        let curve = HdrCurve::new(2.0);
        let mut prev_f = 0.0;
        let mut prev_r = 0.0;
        for i in 1..=200 {
            let x = i as f32 / 100.0;
            let f = curve.forward(x);
            let r = curve.reverse(x);
            assert!(f > prev_f, "forward not monotonic at x={}", x);
            assert!(r > prev_r, "reverse not monotonic at x={}", x);
            prev_f = f;
            prev_r = r;
        }
    }

    #[test]
    fn test_exposure_accessor() {
        let mut curve = HdrCurve::new(1.5);
        assert_eq!(curve.exposure(), 1.5);
        curve.set_exposure(0.75);
        assert_eq!(curve.exposure(), 0.75);
    }
}
