//! BME680 compensation and psychrometrics for Psychro
//!
//! Turns raw ADC counts from a BME680 into pascals, percent relative humidity
//! and degrees Celsius using the device's factory calibration profile, then
//! derives the water-vapor quantities a flow or drying rig needs.
//!
//! Key constraints:
//! - Pure functions, no I/O, no global state
//! - No heap allocation, `no_std` without the `std` feature
//! - Bit-for-bit the vendor's double-precision formula
//!
//! ```no_run
//! use psychro_core::{Compensator, CalibrationProfile, PsychrometricSnapshot};
//!
//! # fn read_calibration() -> CalibrationProfile { CalibrationProfile::default() }
//! let compensator = Compensator::new(read_calibration());
//!
//! // Raw values unpacked from the data registers by the driver
//! let reading = compensator.compensate_adc(324234, 18905, 490349);
//! let derived = PsychrometricSnapshot::derive(&reading, 250.0);
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod calibration;
pub mod compensation;
pub mod config;
pub mod constants;
pub mod errors;
pub mod psychrometrics;
pub mod reading;
pub mod rounding;
pub mod traits;
pub mod validation;

// Public API
pub use calibration::CalibrationProfile;
pub use compensation::{
    compensate, compensate_fine, compensate_humidity, compensate_pressure,
    compensate_temperature, compensate_with, Compensator,
};
pub use config::CompensationConfig;
pub use errors::{CompensationError, CompensationResult};
pub use psychrometrics::{
    heat_enthalpy_flow, heat_of_vaporization, saturation_pressure, stp_correction,
    vapor_pressure, PsychrometricSnapshot,
};
pub use reading::{CompensatedReading, FineReading, RawReading};
pub use rounding::RoundingMode;
pub use traits::Validatable;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
