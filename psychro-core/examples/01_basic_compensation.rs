//! Basic Compensation Example
//!
//! Walks one BME680 snapshot from register bytes to physical units and
//! derived water-vapor quantities.
//!
//! ## What You'll Learn
//!
//! - Building a calibration profile from decoded registers
//! - Compensating a raw snapshot
//! - Deriving psychrometric values for a gas stream
//! - Running the opt-in plausibility checks
//!
//! ## Running the Example
//!
//! ```bash
//! cargo run --example 01_basic_compensation
//! ```

use psychro_core::{
    validation, CalibrationProfile, Compensator, CompensationError, PsychrometricSnapshot,
    RawReading,
};

/// Calibration registers as decoded by the driver
#[rustfmt::skip]
const CALIBRATION_REGISTERS: [i32; 23] = [
    26268, 26341, 3,
    37284, -10577, 88, 8054, -122, 30, 52, -3895, -2085, 30,
    668, 1030, 0, 45, 20, 120, -100,
    -19, -12505, 18,
];

fn main() {
    println!("Psychro Basic Compensation Example");
    println!("==================================\n");

    let calib = CalibrationProfile::from_registers(CALIBRATION_REGISTERS);
    let compensator = Compensator::new(calib);

    // Data registers 0x1F..0x26: 4F 28 A0 | 77 B6 D0 | 49 D9
    // Lower nibble of the 20-bit channels is dropped
    let press_adc = 0x4F28A0 >> 4;
    let temp_adc = 0x77B6D0 >> 4;
    let hum_adc = 0x49D9;
    let raw = RawReading::from_adc(press_adc, hum_adc, temp_adc);

    println!("Raw ADC values:");
    println!("  P = {}", raw.pressure);
    println!("  H = {}", raw.humidity);
    println!("  T = {}", raw.temperature);
    println!();

    if let Err(e) = validation::validate_raw(&raw) {
        println!("Raw snapshot rejected: {}", e);
        return;
    }

    let reading = compensator.compensate(&raw);
    println!("Compensated:");
    println!("  Pressure:    {} Pa ({:.2} hPa)", reading.pressure, reading.pressure_hpa());
    println!("  Humidity:    {} %RH", reading.humidity);
    println!("  Temperature: {} °C", reading.temperature);
    println!();

    match validation::validate_reading(&reading) {
        Ok(()) => println!("Reading within BME680 operating range\n"),
        Err(CompensationError::OutOfRange { value, min, max }) => {
            println!("Implausible value {} (expected {}..{})", value, min, max);
            println!("Check that the calibration profile belongs to this device\n");
        }
        Err(e) => println!("Invalid reading: {}\n", e),
    }

    // Air stream through a 1 mL/min flow cell
    let derived = PsychrometricSnapshot::derive(&reading, 1.0);
    println!("Derived at 1 mL/min:");
    println!("  Psat:  {:.5} Pa", derived.saturation_pressure);
    println!("  Pvap:  {:.5} Pa", derived.vapor_pressure);
    println!("  Qa:    {:.10} W", derived.heat_enthalpy_flow);
    println!("  STP:   {:.8}", derived.stp_correction);
    println!("  Hvap:  {:.5} J/g", derived.heat_of_vaporization);
}
