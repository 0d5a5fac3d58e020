//! Constants for Psychro Core
//!
//! Centralized, documented constants used by the psychrometric formulas and
//! the plausibility checks. The compensation polynomial keeps its divisors
//! inline because they are part of the vendor formula's operation order.
//!
//! ## Organization
//!
//! - **Physics**: Antoine coefficients, reference conditions, heat constants
//! - **Sensors**: BME680 operating ranges and ADC widths
//!
//! ## Usage Guidelines
//!
//! 1. Always use these constants instead of magic numbers
//! 2. Reference datasheets or tables where applicable
//! 3. Use descriptive names that include units

/// Physical constants used by the derived-quantity formulas.
pub mod physics;

/// BME680 operating limits and ADC characteristics.
pub mod sensors;

// Re-export commonly used constants for convenience
pub use physics::{
    ZERO_CELSIUS_K, STANDARD_PRESSURE_PA,
    ANTOINE_VALID_MIN_C, ANTOINE_VALID_MAX_C,
};

pub use sensors::{
    PRESSURE_SENSOR_MIN_PA, PRESSURE_SENSOR_MAX_PA,
    HUMIDITY_SENSOR_MIN_PCT, HUMIDITY_SENSOR_MAX_PCT,
    TEMP_SENSOR_MIN_C, TEMP_SENSOR_MAX_C,
};
