//! Error Types for Plausibility Checks
//!
//! ## Design Philosophy
//!
//! The compensation formulas themselves never fail: they are total over
//! finite floats and propagate NaN/infinity the way IEEE-754 arithmetic does.
//! Errors only come out of the opt-in checks in [`crate::validation`], which a
//! driver layer runs when it wants to reject a reading before using it.
//!
//! Like the rest of the crate, errors are built for small targets:
//!
//! 1. **No Heap Allocation**: messages are `&'static str`, values are inline.
//! 2. **Copy Semantics**: errors are returned by value from hot paths.
//! 3. **Actionable Information**: each variant carries the offending value and
//!    the limit it broke.
//!
//! ## Error Categories
//!
//! ### Physical Range Violations
//! - `OutOfRange`: compensated value outside the sensor's operating range or
//!   outside a formula's validity range (e.g. Antoine equation above 100°C)
//! - `InvalidValue`: NaN or infinity
//!
//! ### Raw Input Violations
//! - `RawOutOfRange`: an ADC value the converter cannot produce
//!
//! ## Error Handling Strategy
//!
//! ```rust
//! use psychro_core::{validation, CompensationError, CompensatedReading};
//!
//! fn handle(reading: &CompensatedReading) {
//!     match validation::validate_reading(reading) {
//!         Ok(()) => {
//!             // publish(reading);
//!         }
//!         Err(CompensationError::OutOfRange { .. }) => {
//!             // Calibration profile likely belongs to another device
//!         }
//!         Err(CompensationError::InvalidValue) => {
//!             // Raw snapshot was corrupted upstream
//!         }
//!         Err(_) => {}
//!     }
//! }
//! ```

use thiserror_no_std::Error;

/// Result type for checked operations
pub type CompensationResult<T> = Result<T, CompensationError>;

/// Plausibility errors - kept small for embedded use
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum CompensationError {
    /// Value outside the accepted range
    #[error("Value {value} outside range [{min}, {max}]")]
    OutOfRange {
        /// The value that failed the check
        value: f64,
        /// Lower bound (inclusive)
        min: f64,
        /// Upper bound (inclusive)
        max: f64,
    },

    /// Value makes no physical sense (NaN, infinity)
    #[error("Invalid value: not a valid number")]
    InvalidValue,

    /// Raw ADC value outside what the converter can output
    #[error("Raw {channel} value {value} outside ADC range")]
    RawOutOfRange {
        /// Channel name: "pressure", "humidity" or "temperature"
        channel: &'static str,
        /// The raw value as supplied
        value: f64,
    },
}

#[cfg(feature = "defmt")]
impl defmt::Format for CompensationError {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            Self::OutOfRange { value, min, max } =>
                defmt::write!(fmt, "Value {} outside [{}, {}]", value, min, max),
            Self::InvalidValue =>
                defmt::write!(fmt, "Invalid value"),
            Self::RawOutOfRange { channel, value } =>
                defmt::write!(fmt, "Raw {} value {} outside ADC range", channel, value),
        }
    }
}
