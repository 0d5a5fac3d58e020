//! Decimal rounding of compensated values
//!
//! The float formulas produce more digits than the sensor can resolve, so
//! outputs are rounded to the datasheet accuracy: pressure to 0.01 Pa,
//! humidity to 0.001 %RH, temperature to 0.01 °C.
//!
//! Rounding works on the exact binary value of the input, not on the
//! product `value × 10ⁿ`. That product is itself rounded, so a double just
//! above or below a `.5` boundary can land exactly on it and then break the
//! wrong way. The exact product is recovered with a fused multiply-add, and
//! only a value whose exact decimal expansion sits on the midpoint counts as
//! a tie for [`RoundingMode`].

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Tie-breaking rule for decimal rounding
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum RoundingMode {
    /// Ties go to the even neighbour (banker's rounding)
    #[default]
    HalfEven,
    /// Ties go away from zero
    HalfAwayFromZero,
}

/// Largest power of ten that is exact in `f64`
const MAX_EXACT_DECIMALS: u8 = 22;

/// Scaled magnitude beyond which every `f64` is already an integer
const INTEGER_LIMIT: f64 = 4_503_599_627_370_496.0; // 2^52

/// Round `value` to `decimals` places under `mode`.
///
/// The result is the double nearest to the correctly rounded decimal.
/// NaN and infinities pass through unchanged, as do values already
/// integral at the requested scale.
pub fn round_to(value: f64, decimals: u8, mode: RoundingMode) -> f64 {
    if decimals > MAX_EXACT_DECIMALS {
        return value;
    }

    let scale = libm::pow(10.0, f64::from(decimals));
    let scaled = value * scale;
    if !scaled.is_finite() || libm::fabs(scaled) >= INTEGER_LIMIT {
        return value;
    }

    // value × scale == scaled + residual, exactly
    let residual = libm::fma(value, scale, -scaled);
    let floor = libm::floor(scaled);
    let above_midpoint = (scaled - (floor + 0.5)) + residual;

    let rounded = if above_midpoint > 0.0 {
        floor + 1.0
    } else if above_midpoint < 0.0 {
        floor
    } else {
        match mode {
            RoundingMode::HalfEven if libm::fmod(floor, 2.0) == 0.0 => floor,
            RoundingMode::HalfEven => floor + 1.0,
            RoundingMode::HalfAwayFromZero if value >= 0.0 => floor + 1.0,
            RoundingMode::HalfAwayFromZero => floor,
        }
    };
    rounded / scale
}
