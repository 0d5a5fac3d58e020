//! Output configuration for compensation
//!
//! The defaults follow the datasheet accuracy: 2 decimals for
//! pressure, 3 for humidity, 2 for temperature, ties to even.
//!
//! ```rust
//! use psychro_core::{CompensationConfig, RoundingMode};
//!
//! // Coarser output for a display that only shows whole pascals
//! let display = CompensationConfig {
//!     pressure_decimals: 0,
//!     ..CompensationConfig::default()
//! };
//! assert_eq!(display.rounding, RoundingMode::HalfEven);
//! ```

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    reading::{CompensatedReading, FineReading},
    rounding::{round_to, RoundingMode},
};

/// Default decimals for pressure output (Pa)
pub const PRESSURE_DECIMALS: u8 = 2;

/// Default decimals for humidity output (%RH)
pub const HUMIDITY_DECIMALS: u8 = 3;

/// Default decimals for temperature output (°C)
pub const TEMPERATURE_DECIMALS: u8 = 2;

/// How compensated values are rounded before they are returned
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CompensationConfig {
    /// Tie-breaking rule
    pub rounding: RoundingMode,
    /// Decimal places kept for pressure
    pub pressure_decimals: u8,
    /// Decimal places kept for humidity
    pub humidity_decimals: u8,
    /// Decimal places kept for temperature
    pub temperature_decimals: u8,
}

impl Default for CompensationConfig {
    fn default() -> Self {
        Self {
            rounding: RoundingMode::HalfEven,
            pressure_decimals: PRESSURE_DECIMALS,
            humidity_decimals: HUMIDITY_DECIMALS,
            temperature_decimals: TEMPERATURE_DECIMALS,
        }
    }
}

impl CompensationConfig {
    /// Same decimals as the default, ties away from zero
    pub fn half_away_from_zero() -> Self {
        Self {
            rounding: RoundingMode::HalfAwayFromZero,
            ..Self::default()
        }
    }

    /// Round an unrounded reading under this configuration
    pub fn apply(&self, fine: &FineReading) -> CompensatedReading {
        CompensatedReading {
            pressure: round_to(fine.pressure, self.pressure_decimals, self.rounding),
            humidity: round_to(fine.humidity, self.humidity_decimals, self.rounding),
            temperature: round_to(fine.temperature, self.temperature_decimals, self.rounding),
        }
    }
}
