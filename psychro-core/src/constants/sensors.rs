//! BME680 Sensor Specifications and Limits
//!
//! Operating ranges from the BME680 datasheet, used by
//! [`crate::validation`] to flag readings that the part cannot have
//! produced with a matching calibration profile.

// ===== PRESSURE =====

/// Minimum operating pressure (Pa).
///
/// Source: BME680 datasheet, 300 hPa
pub const PRESSURE_SENSOR_MIN_PA: f64 = 30000.0;

/// Maximum operating pressure (Pa).
///
/// Source: BME680 datasheet, 1100 hPa
pub const PRESSURE_SENSOR_MAX_PA: f64 = 110000.0;

// ===== HUMIDITY =====

/// Minimum relative humidity (%).
///
/// Source: Physics (0% RH = no water vapor)
pub const HUMIDITY_SENSOR_MIN_PCT: f64 = 0.0;

/// Maximum relative humidity (%).
///
/// Source: Physics (100% RH = saturated)
pub const HUMIDITY_SENSOR_MAX_PCT: f64 = 100.0;

// ===== TEMPERATURE =====

/// Minimum operating temperature (°C).
///
/// Source: BME680 datasheet
pub const TEMP_SENSOR_MIN_C: f64 = -40.0;

/// Maximum operating temperature (°C).
///
/// Source: BME680 datasheet
pub const TEMP_SENSOR_MAX_C: f64 = 85.0;

// ===== ADC =====

/// Largest raw pressure or temperature value (20-bit ADC).
pub const ADC_20BIT_MAX: f64 = 1_048_575.0;

/// Largest raw humidity value (16-bit ADC).
pub const ADC_16BIT_MAX: f64 = 65_535.0;
