//! Psychrometric Quantities Derived from Compensated Readings
//!
//! ## Physics Background
//!
//! ### Saturation Vapor Pressure
//!
//! The Antoine equation relates the vapor pressure of a pure substance to
//! temperature. For water between 0 and 100°C:
//!
//! ```text
//! log10(Psat[mmHg]) = A - B / (C + T[°C])
//! A = 8.07131, B = 1730.63, C = 233.426
//! ```
//!
//! Multiplying by 133.322 Pa/mmHg gives pascals.
//!
//! ### Vapor Pressure
//!
//! Relative humidity is by definition the ratio of actual to saturation
//! vapor pressure, so `Pvap = Psat × RH / 100`.
//!
//! ### Enthalpy Flow of Air
//!
//! A gas stream of `flow` mL/min at temperature `T` carries
//!
//! ```text
//! Qa = (T + 273.15) × Cp,m × flow / 1344000      [W]
//! ```
//!
//! where `Cp,m = 29.19 J/mol·K` and 1344000 converts mL/min to mol/s.
//!
//! ### STP Correction
//!
//! Measured volumetric flow times
//! `(P / 101325) × (273.15 / (T + 273.15))` gives flow at 0°C and 1 atm.
//!
//! ### Heat of Vaporization
//!
//! Linear fit between (91192.5 Pa, 2265.65 J/g) and (101325 Pa, 2257.92 J/g):
//! `Hvap = 2335.22 − 0.000762892 × P`. Good near atmospheric pressure only.
//!
//! ## Validity
//!
//! None of these functions check their inputs. Outside the stated ranges
//! they still return a number, just not a physically meaningful one. Use
//! [`crate::validation::try_saturation_pressure`] when the caller cannot
//! guarantee the temperature range.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    constants::physics::{
        AIR_MOLAR_HEAT_CAPACITY_J_PER_MOL_K, ANTOINE_A, ANTOINE_B, ANTOINE_C,
        FLOW_ML_MIN_TO_MOL_S, HVAP_INTERCEPT_J_PER_G, HVAP_SLOPE_J_PER_G_PA, MMHG_TO_PA,
        STANDARD_PRESSURE_PA, ZERO_CELSIUS_K,
    },
    reading::CompensatedReading,
};

/// Saturation vapor pressure of water (Pa) at `temperature_c` (°C).
///
/// Valid for 0–100°C.
pub fn saturation_pressure(temperature_c: f64) -> f64 {
    libm::pow(10.0, ANTOINE_A - (ANTOINE_B / (ANTOINE_C + temperature_c))) * MMHG_TO_PA
}

/// Water vapor pressure (Pa) for saturation pressure `psat` (Pa) and
/// relative humidity `humidity_pct` (%).
pub fn vapor_pressure(psat: f64, humidity_pct: f64) -> f64 {
    psat * (humidity_pct / 100.0)
}

/// Heat carried by an air stream (W) at `temperature_c` (°C) flowing at
/// `flow_ml_per_min` (mL/min).
pub fn heat_enthalpy_flow(temperature_c: f64, flow_ml_per_min: f64) -> f64 {
    (temperature_c + ZERO_CELSIUS_K) * AIR_MOLAR_HEAT_CAPACITY_J_PER_MOL_K * flow_ml_per_min
        / FLOW_ML_MIN_TO_MOL_S
}

/// Factor converting a flow measured at `pressure_pa` and `temperature_c`
/// to standard temperature and pressure.
pub fn stp_correction(pressure_pa: f64, temperature_c: f64) -> f64 {
    (pressure_pa / STANDARD_PRESSURE_PA) * (ZERO_CELSIUS_K / (temperature_c + ZERO_CELSIUS_K))
}

/// Heat of vaporization of water (J/g) at `pressure_pa`.
pub fn heat_of_vaporization(pressure_pa: f64) -> f64 {
    HVAP_INTERCEPT_J_PER_G - (HVAP_SLOPE_J_PER_G_PA * pressure_pa)
}

/// All derived quantities for one compensated reading
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PsychrometricSnapshot {
    /// Saturation vapor pressure (Pa)
    pub saturation_pressure: f64,
    /// Water vapor pressure (Pa)
    pub vapor_pressure: f64,
    /// Enthalpy flow of the air stream (W)
    pub heat_enthalpy_flow: f64,
    /// STP correction factor
    pub stp_correction: f64,
    /// Heat of vaporization (J/g)
    pub heat_of_vaporization: f64,
}

impl PsychrometricSnapshot {
    /// Derive every quantity from `reading` and the stream's flow rate
    pub fn derive(reading: &CompensatedReading, flow_ml_per_min: f64) -> Self {
        let psat = saturation_pressure(reading.temperature);

        Self {
            saturation_pressure: psat,
            vapor_pressure: vapor_pressure(psat, reading.humidity),
            heat_enthalpy_flow: heat_enthalpy_flow(reading.temperature, flow_ml_per_min),
            stp_correction: stp_correction(reading.pressure, reading.temperature),
            heat_of_vaporization: heat_of_vaporization(reading.pressure),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64, tol: f64) -> bool {
        (a - b).abs() <= tol
    }

    #[test]
    fn saturation_pressure_at_room_temperature() {
        assert!(close(saturation_pressure(22.0), 2634.79310887939, 1e-9));
    }

    #[test]
    fn saturation_pressure_endpoints() {
        let cold = saturation_pressure(0.0);
        let boiling = saturation_pressure(100.0);

        assert!(cold.is_finite() && cold > 0.0);
        assert!(boiling.is_finite() && boiling > 0.0);
        // Water boils near one atmosphere at 100°C
        assert!(close(boiling, STANDARD_PRESSURE_PA, 100.0));
        assert!(close(cold, 605.5786273867391, 1e-9));
    }

    #[test]
    fn vapor_pressure_scales_with_humidity() {
        assert!(close(vapor_pressure(2634.79310887939, 42.019), 1107.11371642003, 1e-9));
        assert_eq!(vapor_pressure(2634.79310887939, 100.0), 2634.79310887939);
        assert_eq!(vapor_pressure(2634.79310887939, 0.0), 0.0);
    }

    #[test]
    fn enthalpy_flow() {
        assert!(close(heat_enthalpy_flow(22.0, 1.0), 0.0064102890625, 1e-15));
        assert_eq!(heat_enthalpy_flow(22.0, 0.0), 0.0);
    }

    #[test]
    fn stp_factor() {
        assert!(close(stp_correction(99245.89, 22.0), 0.90647187859289, 1e-13));
        assert!(close(stp_correction(STANDARD_PRESSURE_PA, 0.0), 1.0, 1e-15));
    }

    #[test]
    fn vaporization_heat() {
        assert!(close(heat_of_vaporization(99245.89), 2259.50610448612, 1e-9));
        assert!(close(heat_of_vaporization(91192.5), 2265.65, 0.01));
        assert!(close(heat_of_vaporization(101325.0), 2257.92, 0.01));
    }

    #[test]
    fn snapshot_from_worked_example() {
        let reading = CompensatedReading {
            pressure: 99245.89,
            humidity: 42.019,
            temperature: 22.0,
        };
        let snapshot = PsychrometricSnapshot::derive(&reading, 1.0);

        assert_eq!(snapshot.saturation_pressure, saturation_pressure(22.0));
        assert!(close(snapshot.vapor_pressure, 1107.11371642003, 1e-9));
        assert!(close(snapshot.heat_enthalpy_flow, 0.0064102890625, 1e-15));
        assert!(close(snapshot.stp_correction, 0.90647187859289, 1e-13));
        assert!(close(snapshot.heat_of_vaporization, 2259.50610448612, 1e-9));
    }

    #[test]
    fn nan_propagates() {
        assert!(saturation_pressure(f64::NAN).is_nan());
        assert!(vapor_pressure(f64::NAN, 50.0).is_nan());
        assert!(heat_enthalpy_flow(20.0, f64::NAN).is_nan());
        assert!(stp_correction(f64::NAN, 20.0).is_nan());
        assert!(heat_of_vaporization(f64::INFINITY).is_infinite());
    }
}
