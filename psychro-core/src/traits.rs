//! Core traits
//!
//! Keep them simple - embedded devices don't need complex abstractions.

/// Trait for values that can be checked for validity
pub trait Validatable {
    /// Check if the value is a usable number (not NaN, infinite, etc)
    fn is_valid(&self) -> bool;
}

impl Validatable for f32 {
    fn is_valid(&self) -> bool {
        self.is_finite()
    }
}

impl Validatable for f64 {
    fn is_valid(&self) -> bool {
        self.is_finite()
    }
}

impl Validatable for crate::reading::RawReading {
    fn is_valid(&self) -> bool {
        self.pressure.is_valid() && self.humidity.is_valid() && self.temperature.is_valid()
    }
}

impl Validatable for crate::reading::CompensatedReading {
    fn is_valid(&self) -> bool {
        self.pressure.is_valid() && self.humidity.is_valid() && self.temperature.is_valid()
    }
}
