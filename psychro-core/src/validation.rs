//! Opt-in Plausibility Checks
//!
//! ## Overview
//!
//! Compensation never rejects anything. A driver that wants to catch a
//! mismatched calibration profile, a corrupted register read or a formula
//! used outside its validity range runs these checks explicitly.
//!
//! ## Checks
//!
//! ### Raw Snapshot
//! ADC values must be finite, non-negative and fit the converter width:
//! 20 bits for pressure and temperature, 16 bits for humidity.
//!
//! ### Compensated Reading
//! Values must be finite and inside the BME680 operating range:
//! ```text
//! Pressure      300 .. 1100 hPa
//! Humidity      0   .. 100  %RH
//! Temperature   -40 .. 85   °C
//! ```
//! Temperature is checked first since a bad temperature poisons the other
//! two channels through `t_fine`.
//!
//! ### Antoine Range
//! [`try_saturation_pressure`] refuses temperatures outside 0–100°C.
//!
//! ## Usage
//!
//! ```rust
//! use psychro_core::{validation, CompensationError};
//!
//! assert!(validation::try_saturation_pressure(22.0).is_ok());
//! assert!(matches!(
//!     validation::try_saturation_pressure(150.0),
//!     Err(CompensationError::OutOfRange { .. })
//! ));
//! ```

use crate::{
    constants::{
        physics::{ANTOINE_VALID_MAX_C, ANTOINE_VALID_MIN_C},
        sensors::{
            ADC_16BIT_MAX, ADC_20BIT_MAX, HUMIDITY_SENSOR_MAX_PCT, HUMIDITY_SENSOR_MIN_PCT,
            PRESSURE_SENSOR_MAX_PA, PRESSURE_SENSOR_MIN_PA, TEMP_SENSOR_MAX_C, TEMP_SENSOR_MIN_C,
        },
    },
    errors::{CompensationError, CompensationResult},
    psychrometrics::saturation_pressure,
    reading::{CompensatedReading, RawReading},
    traits::Validatable,
};

// Macro for optional logging
#[cfg(feature = "log")]
macro_rules! log_warn {
    ($($arg:tt)*) => { log::warn!($($arg)*) };
}

#[cfg(not(feature = "log"))]
macro_rules! log_warn {
    ($($arg:tt)*) => {};
}

/// Check if a value is finite and within `[min, max]`
pub fn check_range(value: f64, min: f64, max: f64) -> CompensationResult<()> {
    if !value.is_valid() {
        Err(CompensationError::InvalidValue)
    } else if value < min || value > max {
        Err(CompensationError::OutOfRange { value, min, max })
    } else {
        Ok(())
    }
}

fn check_adc(channel: &'static str, value: f64, max: f64) -> CompensationResult<()> {
    if !value.is_valid() {
        return Err(CompensationError::InvalidValue);
    }
    if value < 0.0 || value > max {
        log_warn!("raw {} value {} outside ADC range", channel, value);
        return Err(CompensationError::RawOutOfRange { channel, value });
    }
    Ok(())
}

/// Check that a raw snapshot could have come out of the ADC
pub fn validate_raw(raw: &RawReading) -> CompensationResult<()> {
    check_adc("temperature", raw.temperature, ADC_20BIT_MAX)?;
    check_adc("pressure", raw.pressure, ADC_20BIT_MAX)?;
    check_adc("humidity", raw.humidity, ADC_16BIT_MAX)
}

/// Check a compensated reading against the sensor's operating range
pub fn validate_reading(reading: &CompensatedReading) -> CompensationResult<()> {
    let result = check_range(reading.temperature, TEMP_SENSOR_MIN_C, TEMP_SENSOR_MAX_C)
        .and_then(|_| {
            check_range(reading.pressure, PRESSURE_SENSOR_MIN_PA, PRESSURE_SENSOR_MAX_PA)
        })
        .and_then(|_| {
            check_range(reading.humidity, HUMIDITY_SENSOR_MIN_PCT, HUMIDITY_SENSOR_MAX_PCT)
        });

    if let Err(_e) = &result {
        log_warn!("implausible reading {:?}: {}", reading, _e);
    }
    result
}

/// [`saturation_pressure`] restricted to the Antoine validity range
pub fn try_saturation_pressure(temperature_c: f64) -> CompensationResult<f64> {
    check_range(temperature_c, ANTOINE_VALID_MIN_C, ANTOINE_VALID_MAX_C)?;
    Ok(saturation_pressure(temperature_c))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn range_check() {
        assert!(check_range(5.0, 0.0, 10.0).is_ok());
        assert!(check_range(0.0, 0.0, 10.0).is_ok());
        assert!(check_range(10.0, 0.0, 10.0).is_ok());
        assert_eq!(
            check_range(-1.0, 0.0, 10.0),
            Err(CompensationError::OutOfRange { value: -1.0, min: 0.0, max: 10.0 })
        );
        assert!(check_range(11.0, 0.0, 10.0).is_err());
        assert_eq!(check_range(f64::NAN, 0.0, 10.0), Err(CompensationError::InvalidValue));
    }

    #[test]
    fn raw_snapshot_limits() {
        assert!(validate_raw(&RawReading::new(324234.0, 18905.0, 490349.0)).is_ok());
        assert_eq!(
            validate_raw(&RawReading::new(324234.0, 70000.0, 490349.0)),
            Err(CompensationError::RawOutOfRange { channel: "humidity", value: 70000.0 })
        );
        assert_eq!(
            validate_raw(&RawReading::new(-1.0, 18905.0, 490349.0)),
            Err(CompensationError::RawOutOfRange { channel: "pressure", value: -1.0 })
        );
        assert_eq!(
            validate_raw(&RawReading::new(324234.0, 18905.0, f64::INFINITY)),
            Err(CompensationError::InvalidValue)
        );
    }

    #[test]
    fn reading_limits() {
        let ok = CompensatedReading {
            pressure: 99245.89,
            humidity: 42.019,
            temperature: 22.0,
        };
        assert!(validate_reading(&ok).is_ok());

        let hot = CompensatedReading { temperature: 120.0, ..ok };
        assert!(matches!(validate_reading(&hot), Err(CompensationError::OutOfRange { .. })));

        let vacuum = CompensatedReading {
            pressure: 1000.0,
            ..ok
        };
        assert_eq!(
            validate_reading(&vacuum),
            Err(CompensationError::OutOfRange {
                value: 1000.0,
                min: PRESSURE_SENSOR_MIN_PA,
                max: PRESSURE_SENSOR_MAX_PA,
            })
        );

        let soaked = CompensatedReading { humidity: 104.2, ..ok };
        assert!(validate_reading(&soaked).is_err());
    }

    #[test]
    fn antoine_range() {
        assert_eq!(try_saturation_pressure(22.0), Ok(saturation_pressure(22.0)));
        assert!(try_saturation_pressure(0.0).is_ok());
        assert!(try_saturation_pressure(100.0).is_ok());
        assert!(try_saturation_pressure(-5.0).is_err());
        assert_eq!(try_saturation_pressure(f64::NAN), Err(CompensationError::InvalidValue));
    }
}
