//! Physical Constants for Psychrometric Calculations
//!
//! Values used by [`crate::psychrometrics`]. All are kept in `f64` because
//! the derived quantities are chained off compensated readings and must
//! reproduce the datasheet worked values to the last printed digit.

// ===== REFERENCE CONDITIONS =====

/// Offset between Celsius and Kelvin (K).
///
/// Source: NIST Special Publication 330 (2019)
pub const ZERO_CELSIUS_K: f64 = 273.15;

/// Standard atmosphere (Pa).
///
/// Reference pressure for STP-corrected flow rates.
///
/// Source: International Standard Atmosphere (ISA)
pub const STANDARD_PRESSURE_PA: f64 = 101325.0;

// ===== ANTOINE EQUATION (WATER) =====

/// Antoine coefficient A for water, pressure in mmHg, temperature in °C.
///
/// Source: Antoine equation, water, 1–100°C parameter set
pub const ANTOINE_A: f64 = 8.07131;

/// Antoine coefficient B for water (°C).
pub const ANTOINE_B: f64 = 1730.63;

/// Antoine coefficient C for water (°C).
pub const ANTOINE_C: f64 = 233.426;

/// Lower temperature bound of the Antoine parameter set (°C).
///
/// Below this the formula still evaluates but the result is not vapor
/// pressure over liquid water.
pub const ANTOINE_VALID_MIN_C: f64 = 0.0;

/// Upper temperature bound of the Antoine parameter set (°C).
pub const ANTOINE_VALID_MAX_C: f64 = 100.0;

/// Unit conversion from millimetres of mercury to pascals (Pa/mmHg).
pub const MMHG_TO_PA: f64 = 133.322;

// ===== HEAT TRANSPORT =====

/// Molar heat capacity of air at constant pressure (J/mol·K).
///
/// Source: NIST Chemistry WebBook
pub const AIR_MOLAR_HEAT_CAPACITY_J_PER_MOL_K: f64 = 29.19;

/// Unit conversion for volumetric flow to molar flow (mL·s/mol·min).
///
/// Folds 22.4 L/mol at STP and 60 s/min into one divisor.
pub const FLOW_ML_MIN_TO_MOL_S: f64 = 1344000.0;

// ===== HEAT OF VAPORIZATION (WATER) =====

/// Intercept of the linear heat-of-vaporization model (J/g).
///
/// Line through (91192.5 Pa, 2265.65 J/g) and (101325 Pa, 2257.92 J/g),
/// roughly 2260.4 J/g at room conditions.
pub const HVAP_INTERCEPT_J_PER_G: f64 = 2335.22;

/// Slope of the linear heat-of-vaporization model (J/g per Pa).
pub const HVAP_SLOPE_J_PER_G_PA: f64 = 0.000762892;
