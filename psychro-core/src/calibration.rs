//! Per-device calibration coefficients
//!
//! Every BME680 leaves the factory with its own set of trimming parameters
//! burned into NVM. The driver layer reads and decodes them; this module only
//! holds them in the shape the float compensation formulas consume.
//!
//! ## Coefficient Groups
//!
//! ```text
//! Temperature   T1 (u16)  T2 (i16)  T3 (i8)
//! Pressure      P1 (u16)  P2..P10 (signed, mixed widths)
//! Humidity      H1, H2 (12-bit unsigned)  H3..H7 (signed)
//! Gas           G1..G3 (carried, not used by this crate)
//! ```
//!
//! Values are stored widened to `f64`. No range validation is performed:
//! an out-of-spec coefficient propagates numerically into the output.
//!
//! ```rust
//! use psychro_core::CalibrationProfile;
//!
//! let calib = CalibrationProfile::from_coefficients([
//!     26268.0, 26341.0, 3.0,
//!     37284.0, -10577.0, 88.0, 8054.0, -122.0, 30.0, 52.0, -3895.0, -2085.0, 30.0,
//!     668.0, 1030.0, 0.0, 45.0, 20.0, 120.0, -100.0,
//!     -19.0, -12505.0, 18.0,
//! ]);
//! assert_eq!(calib.p10, 30.0);
//! ```

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Number of coefficients in a full profile
pub const COEFFICIENT_COUNT: usize = 23;

/// Factory calibration profile of one sensor
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CalibrationProfile {
    /// Temperature coefficient T1 (unsigned)
    pub t1: f64,
    /// Temperature coefficient T2
    pub t2: f64,
    /// Temperature coefficient T3
    pub t3: f64,

    /// Pressure coefficient P1 (unsigned)
    pub p1: f64,
    /// Pressure coefficient P2
    pub p2: f64,
    /// Pressure coefficient P3
    pub p3: f64,
    /// Pressure coefficient P4
    pub p4: f64,
    /// Pressure coefficient P5
    pub p5: f64,
    /// Pressure coefficient P6
    pub p6: f64,
    /// Pressure coefficient P7
    pub p7: f64,
    /// Pressure coefficient P8
    pub p8: f64,
    /// Pressure coefficient P9
    pub p9: f64,
    /// Pressure coefficient P10
    pub p10: f64,

    /// Humidity coefficient H1
    pub h1: f64,
    /// Humidity coefficient H2
    pub h2: f64,
    /// Humidity coefficient H3
    pub h3: f64,
    /// Humidity coefficient H4
    pub h4: f64,
    /// Humidity coefficient H5
    pub h5: f64,
    /// Humidity coefficient H6
    pub h6: f64,
    /// Humidity coefficient H7
    pub h7: f64,

    /// Gas coefficient G1 (unused)
    #[cfg_attr(feature = "serde", serde(default))]
    pub g1: f64,
    /// Gas coefficient G2 (unused)
    #[cfg_attr(feature = "serde", serde(default))]
    pub g2: f64,
    /// Gas coefficient G3 (unused)
    #[cfg_attr(feature = "serde", serde(default))]
    pub g3: f64,
}

impl CalibrationProfile {
    /// Build a profile from coefficients in the order
    /// `T1 T2 T3 P1..P10 H1..H7 G1 G2 G3`.
    pub const fn from_coefficients(c: [f64; COEFFICIENT_COUNT]) -> Self {
        Self {
            t1: c[0], t2: c[1], t3: c[2],
            p1: c[3], p2: c[4], p3: c[5], p4: c[6], p5: c[7],
            p6: c[8], p7: c[9], p8: c[10], p9: c[11], p10: c[12],
            h1: c[13], h2: c[14], h3: c[15], h4: c[16], h5: c[17], h6: c[18], h7: c[19],
            g1: c[20], g2: c[21], g3: c[22],
        }
    }

    /// Build a profile from already-decoded integer register values, same
    /// order as [`Self::from_coefficients`]. Values are only widened.
    pub fn from_registers(regs: [i32; COEFFICIENT_COUNT]) -> Self {
        Self::from_coefficients(regs.map(f64::from))
    }

    /// Coefficients in the order accepted by [`Self::from_coefficients`]
    #[rustfmt::skip]
    pub const fn to_coefficients(&self) -> [f64; COEFFICIENT_COUNT] {
        [
            self.t1, self.t2, self.t3,
            self.p1, self.p2, self.p3, self.p4, self.p5,
            self.p6, self.p7, self.p8, self.p9, self.p10,
            self.h1, self.h2, self.h3, self.h4, self.h5, self.h6, self.h7,
            self.g1, self.g2, self.g3,
        ]
    }
}
