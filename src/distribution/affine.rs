//! Affine mapping from raw samples to bytes

use serde::{Deserialize, Serialize};

/// Linear transform `raw * scale + offset`, rounded and clamped into a byte
///
/// Rounding is half-to-even so that golden outputs stay stable: `2.5` maps to
/// `2` and `3.5` maps to `4`. Clamping saturates; it never wraps. A NaN
/// result maps to `0`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AffineMap {
    pub scale: f64,
    pub offset: f64,
}

impl AffineMap {
    pub const IDENTITY: AffineMap = AffineMap { scale: 1.0, offset: 0.0 };

    pub fn new(scale: f64, offset: f64) -> Self {
        Self { scale, offset }
    }

    #[inline]
    pub fn apply(&self, raw: f64) -> u8 {
        map_to_byte(raw, self.scale, self.offset)
    }
}

impl Default for AffineMap {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// `clamp(round_half_even(raw * scale + offset), 0, 255)`
#[inline]
pub fn map_to_byte(raw: f64, scale: f64, offset: f64) -> u8 {
    let value = (raw * scale + offset).round_ties_even();
    if value.is_nan() {
        return 0;
    }
    value.clamp(0.0, 255.0) as u8
}
