//! Reading types
//!
//! One sensor snapshot flows through three shapes:
//!
//! ```text
//! RawReading ──compensate_fine──▶ FineReading ──CompensationConfig::apply──▶ CompensatedReading
//!  (ADC counts)                   (unrounded + t_fine)                        (Pa, %RH, °C rounded)
//! ```
//!
//! All three are plain `Copy` values; nothing is retained between calls.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Raw ADC values from one sensor snapshot, widened to `f64`
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RawReading {
    /// Pressure ADC (20-bit)
    pub pressure: f64,
    /// Humidity ADC (16-bit)
    pub humidity: f64,
    /// Temperature ADC (20-bit)
    pub temperature: f64,
}

impl RawReading {
    /// Reading from values already widened to float
    pub const fn new(pressure: f64, humidity: f64, temperature: f64) -> Self {
        Self { pressure, humidity, temperature }
    }

    /// Reading from ADC integers as unpacked from the data registers
    pub fn from_adc(pressure: u32, humidity: u16, temperature: u32) -> Self {
        Self {
            pressure: f64::from(pressure),
            humidity: f64::from(humidity),
            temperature: f64::from(temperature),
        }
    }
}

/// Compensated values before rounding, plus the shared temperature term
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FineReading {
    /// Pressure (Pa)
    pub pressure: f64,
    /// Relative humidity (%)
    pub humidity: f64,
    /// Temperature (°C)
    pub temperature: f64,
    /// Fine-resolution temperature feeding the pressure polynomial
    pub t_fine: f64,
}

/// Compensated reading in physical units, rounded to sensor accuracy
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CompensatedReading {
    /// Pressure (Pa)
    pub pressure: f64,
    /// Relative humidity (%)
    pub humidity: f64,
    /// Temperature (°C)
    pub temperature: f64,
}

impl CompensatedReading {
    /// Pressure in hectopascals
    pub fn pressure_hpa(&self) -> f64 {
        self.pressure / 100.0
    }
}

impl From<CompensatedReading> for (f64, f64, f64) {
    fn from(r: CompensatedReading) -> Self {
        (r.pressure, r.humidity, r.temperature)
    }
}

impl From<(f64, f64, f64)> for CompensatedReading {
    fn from((pressure, humidity, temperature): (f64, f64, f64)) -> Self {
        Self { pressure, humidity, temperature }
    }
}
