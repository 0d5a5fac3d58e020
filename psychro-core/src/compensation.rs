//! BME680 Float Compensation
//!
//! ## Background
//!
//! The BME680 reports pressure, humidity and temperature as raw ADC counts.
//! Turning those counts into physical units needs the device's factory
//! calibration profile and the vendor's compensation polynomials. This module
//! implements the double-precision variant of those polynomials (datasheet
//! rev 1.3).
//!
//! ### Data Dependency
//!
//! ```text
//!            ┌────────────┐
//!  T ───────▶│ temperature│──── t_fine ────┐
//!            └────────────┘                 ▼
//!                  │ temp_comp        ┌──────────┐
//!                  │           P ────▶│ pressure │──▶ Pa
//!                  ▼                  └──────────┘
//!            ┌──────────┐
//!  H ───────▶│ humidity │──▶ %RH
//!            └──────────┘
//! ```
//!
//! Temperature always runs first. Pressure consumes `t_fine`, humidity
//! consumes the compensated temperature in °C.
//!
//! ### Numeric Fidelity
//!
//! Every divisor, constant and operation order below is the vendor's.
//! Floating-point addition is not associative, so algebraically equivalent
//! rewrites drift in the last digits and break the 0.01 Pa output. Keep the
//! expressions exactly as written.
//!
//! No input is validated. Out-of-spec coefficients and non-finite raw values
//! propagate numerically; see [`crate::validation`] for opt-in checks.
//!
//! ## Usage
//!
//! ```rust
//! use psychro_core::{compensate, CalibrationProfile, RawReading};
//!
//! let calib = CalibrationProfile::from_coefficients([
//!     26268.0, 26341.0, 3.0,
//!     37284.0, -10577.0, 88.0, 8054.0, -122.0, 30.0, 52.0, -3895.0, -2085.0, 30.0,
//!     668.0, 1030.0, 0.0, 45.0, 20.0, 120.0, -100.0,
//!     -19.0, -12505.0, 18.0,
//! ]);
//! let raw = RawReading::from_adc(324234, 18905, 490349);
//!
//! let reading = compensate(&raw, &calib);
//! assert_eq!(reading.pressure, 99245.89);
//! assert_eq!(reading.humidity, 42.019);
//! assert_eq!(reading.temperature, 22.0);
//! ```

use crate::{
    calibration::CalibrationProfile,
    config::CompensationConfig,
    reading::{CompensatedReading, FineReading, RawReading},
};

// Macro for optional logging
#[cfg(feature = "log")]
macro_rules! log_trace {
    ($($arg:tt)*) => { log::trace!($($arg)*) };
}

#[cfg(not(feature = "log"))]
macro_rules! log_trace {
    ($($arg:tt)*) => {};
}

/// Compensate temperature.
///
/// Returns `(t_fine, temp_comp)` where `temp_comp` is in °C and `t_fine` is
/// the fine-resolution term the pressure polynomial needs.
pub fn compensate_temperature(raw_temperature: f64, calib: &CalibrationProfile) -> (f64, f64) {
    let t = raw_temperature;

    let var1 = ((t / 16384.0) - (calib.t1 / 1024.0)) * calib.t2;
    let var2 = (((t / 131072.0) - (calib.t1 / 8192.0)) * ((t / 131072.0) - (calib.t1 / 8192.0)))
        * (calib.t3 * 16.0);
    let t_fine = var1 + var2;
    let temp_comp = t_fine / 5120.0;

    (t_fine, temp_comp)
}

/// Compensate pressure in Pa, unrounded.
///
/// `t_fine` must come from [`compensate_temperature`] on the same snapshot.
#[allow(clippy::assign_op_pattern)]
pub fn compensate_pressure(raw_pressure: f64, t_fine: f64, calib: &CalibrationProfile) -> f64 {
    let mut var1 = (t_fine / 2.0) - 64000.0;
    let mut var2 = var1 * var1 * (calib.p6 / 131072.0);
    var2 = var2 + (var1 * calib.p5 * 2.0);
    var2 = (var2 / 4.0) + (calib.p4 * 65536.0);
    var1 = (((calib.p3 * var1 * var1) / 16384.0) + (calib.p2 * var1)) / 524288.0;
    var1 = (1.0 + (var1 / 32768.0)) * calib.p1;

    let mut press_comp = 1048576.0 - raw_pressure;
    press_comp = ((press_comp - (var2 / 4096.0)) * 6250.0) / var1;

    var1 = (calib.p9 * press_comp * press_comp) / 2147483648.0;
    var2 = press_comp * (calib.p8 / 32768.0);
    let var3 = (press_comp / 256.0)
        * (press_comp / 256.0)
        * (press_comp / 256.0)
        * (calib.p10 / 131072.0);

    press_comp + (var1 + var2 + var3 + (calib.p7 * 128.0)) / 16.0
}

/// Compensate relative humidity in %, unrounded.
///
/// `temp_comp` is the compensated temperature in °C.
pub fn compensate_humidity(raw_humidity: f64, temp_comp: f64, calib: &CalibrationProfile) -> f64 {
    let var1 = raw_humidity - ((calib.h1 * 16.0) + ((calib.h3 / 2.0) * temp_comp));
    let var2 = var1
        * ((calib.h2 / 262144.0)
            * (1.0
                + ((calib.h4 / 16384.0) * temp_comp)
                + ((calib.h5 / 1048576.0) * temp_comp * temp_comp)));
    let var3 = calib.h6 / 16384.0;
    let var4 = calib.h7 / 2097152.0;

    var2 + ((var3 + (var4 * temp_comp)) * var2 * var2)
}

/// Run all three channels without rounding
pub fn compensate_fine(raw: &RawReading, calib: &CalibrationProfile) -> FineReading {
    let (t_fine, temperature) = compensate_temperature(raw.temperature, calib);
    let pressure = compensate_pressure(raw.pressure, t_fine, calib);
    let humidity = compensate_humidity(raw.humidity, temperature, calib);

    log_trace!(
        "compensated t_fine={} T={} P={} H={}",
        t_fine, temperature, pressure, humidity
    );

    FineReading { pressure, humidity, temperature, t_fine }
}

/// Compensate and round under a custom configuration
pub fn compensate_with(
    raw: &RawReading,
    calib: &CalibrationProfile,
    config: &CompensationConfig,
) -> CompensatedReading {
    config.apply(&compensate_fine(raw, calib))
}

/// Compensate a raw snapshot into Pa, %RH and °C.
///
/// Pressure is rounded to 2 decimals, humidity to 3, temperature to 2,
/// ties to even.
pub fn compensate(raw: &RawReading, calib: &CalibrationProfile) -> CompensatedReading {
    compensate_with(raw, calib, &CompensationConfig::default())
}

/// Compensation bound to one sensor's calibration profile
///
/// Holds no mutable state, so one instance can serve every thread reading
/// the same device.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Compensator {
    calibration: CalibrationProfile,
    config: CompensationConfig,
}

impl Compensator {
    /// Compensator with the default output configuration
    pub fn new(calibration: CalibrationProfile) -> Self {
        Self::with_config(calibration, CompensationConfig::default())
    }

    /// Compensator with a custom output configuration
    pub fn with_config(calibration: CalibrationProfile, config: CompensationConfig) -> Self {
        Self { calibration, config }
    }

    /// Calibration profile in use
    pub fn calibration(&self) -> &CalibrationProfile {
        &self.calibration
    }

    /// Output configuration in use
    pub fn config(&self) -> &CompensationConfig {
        &self.config
    }

    /// Compensate one snapshot
    pub fn compensate(&self, raw: &RawReading) -> CompensatedReading {
        compensate_with(raw, &self.calibration, &self.config)
    }

    /// Compensate one snapshot given as ADC integers
    pub fn compensate_adc(
        &self,
        pressure: u32,
        humidity: u16,
        temperature: u32,
    ) -> CompensatedReading {
        self.compensate(&RawReading::from_adc(pressure, humidity, temperature))
    }

    /// Compensate one snapshot without rounding
    pub fn compensate_fine(&self, raw: &RawReading) -> FineReading {
        compensate_fine(raw, &self.calibration)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[rustfmt::skip]
    fn calib() -> CalibrationProfile {
        CalibrationProfile {
            t1: 26268.0, t2: 26341.0, t3: 3.0,
            p1: 37284.0, p2: -10577.0, p3: 88.0, p4: 8054.0, p5: -122.0,
            p6: 30.0, p7: 52.0, p8: -3895.0, p9: -2085.0, p10: 30.0,
            h1: 668.0, h2: 1030.0, h3: 0.0, h4: 45.0, h5: 20.0, h6: 120.0, h7: -100.0,
            g1: -19.0, g2: -12505.0, g3: 18.0,
        }
    }

    fn raw() -> RawReading {
        RawReading::new(324234.0, 18905.0, 490349.0)
    }

    fn close(a: f64, b: f64, tol: f64) -> bool {
        (a - b).abs() <= tol
    }

    #[test]
    fn temperature_channel() {
        let (t_fine, temp) = compensate_temperature(490349.0, &calib());
        assert!(close(t_fine, 112652.67921751272, 1e-8));
        assert!(close(temp, 22.002476409670454, 1e-12));
    }

    #[test]
    fn pressure_channel() {
        let (t_fine, _) = compensate_temperature(490349.0, &calib());
        let pressure = compensate_pressure(324234.0, t_fine, &calib());
        assert!(close(pressure, 99245.8902044631, 1e-8));
    }

    #[test]
    fn humidity_channel() {
        let (_, temp) = compensate_temperature(490349.0, &calib());
        let humidity = compensate_humidity(18905.0, temp, &calib());
        assert!(close(humidity, 42.018938834673094, 1e-10));
    }

    #[test]
    fn worked_example() {
        let reading = compensate(&raw(), &calib());
        assert_eq!(reading.pressure, 99245.89);
        assert_eq!(reading.humidity, 42.019);
        assert_eq!(reading.temperature, 22.0);
    }

    #[test]
    fn gas_coefficients_do_not_matter() {
        let mut other = calib();
        other.g1 = 0.0;
        other.g2 = 1.0e6;
        other.g3 = -7.0;
        assert_eq!(compensate(&raw(), &other), compensate(&raw(), &calib()));
    }

    #[test]
    fn fine_keeps_t_fine() {
        let fine = compensate_fine(&raw(), &calib());
        assert_eq!(fine.temperature, fine.t_fine / 5120.0);
    }

    #[test]
    fn non_finite_propagates() {
        let reading = compensate(&RawReading::new(324234.0, 18905.0, f64::NAN), &calib());
        assert!(reading.temperature.is_nan());
        assert!(reading.pressure.is_nan());
        assert!(reading.humidity.is_nan());

        let reading = compensate(&RawReading::new(f64::NAN, 18905.0, 490349.0), &calib());
        assert!(reading.pressure.is_nan());
        assert_eq!(reading.temperature, 22.0);
    }

    #[test]
    fn zero_p1_gives_infinite_pressure() {
        let mut broken = calib();
        broken.p1 = 0.0;
        let reading = compensate(&raw(), &broken);
        assert!(!reading.pressure.is_finite());
    }

    #[test]
    fn compensator_matches_free_function() {
        let compensator = Compensator::new(calib());
        assert_eq!(compensator.compensate(&raw()), compensate(&raw(), &calib()));
        assert_eq!(
            compensator.compensate_adc(324234, 18905, 490349),
            compensate(&raw(), &calib())
        );
        assert_eq!(compensator.calibration(), &calib());
    }
}
