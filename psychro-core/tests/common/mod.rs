//! Common fixtures for integration tests
//!
//! Provides:
//! - The documented calibration profile of a real BME680
//! - Raw snapshots with reference outputs computed by the vendor formula
//! - Float comparison helpers

#![allow(dead_code)]

use psychro_core::{CalibrationProfile, CompensatedReading, RawReading};

/// Calibration registers of the reference device, in
/// `T1 T2 T3 P1..P10 H1..H7 G1 G2 G3` order
#[rustfmt::skip]
pub const REFERENCE_REGISTERS: [i32; 23] = [
    26268, 26341, 3,
    37284, -10577, 88, 8054, -122, 30, 52, -3895, -2085, 30,
    668, 1030, 0, 45, 20, 120, -100,
    -19, -12505, 18,
];

/// Calibration profile of the reference device
pub fn reference_calibration() -> CalibrationProfile {
    CalibrationProfile::from_registers(REFERENCE_REGISTERS)
}

/// Raw snapshot from the datasheet walk-through
///
/// Registers 0x1F..0x26 read `4F 28 A0 77 B6 D0 49 D9`.
pub fn reference_raw() -> RawReading {
    RawReading::from_adc(0x4F28A0 >> 4, 0x49D9, 0x77B6D0 >> 4)
}

/// A raw snapshot with the reading the reference formula produces for it
pub struct Scenario {
    pub name: &'static str,
    pub raw: RawReading,
    pub expected: CompensatedReading,
    /// Whether `expected` lies inside the datasheet operating range
    pub in_operating_range: bool,
}

/// Snapshots spanning cold/dry to hot/humid on the reference device
pub fn scenarios() -> Vec<Scenario> {
    vec![
        Scenario {
            name: "office",
            raw: RawReading::from_adc(324234, 18905, 490349),
            expected: (99245.89, 42.019, 22.0).into(),
            in_operating_range: true,
        },
        Scenario {
            name: "cool_dry",
            raw: RawReading::from_adc(300000, 15000, 450000),
            expected: (101155.43, 19.489, 9.33).into(),
            in_operating_range: true,
        },
        Scenario {
            name: "warm_humid",
            raw: RawReading::from_adc(350000, 25000, 520000),
            expected: (96394.71, 84.625, 31.32).into(),
            in_operating_range: true,
        },
        Scenario {
            name: "hot_high_pressure",
            raw: RawReading::from_adc(280000, 22000, 600000),
            expected: (112813.38, 67.567, 56.45).into(),
            // 1128 hPa, above the 1100 hPa ceiling
            in_operating_range: false,
        },
        Scenario {
            name: "near_freezing",
            raw: RawReading::from_adc(400000, 12000, 430000),
            expected: (83853.54, 5.393, 3.05).into(),
            in_operating_range: true,
        },
    ]
}

/// Assert `actual` is within `tolerance` of `expected`
pub fn assert_close(actual: f64, expected: f64, tolerance: f64) {
    assert!(
        (actual - expected).abs() <= tolerance,
        "expected {expected} ± {tolerance}, got {actual}"
    );
}
