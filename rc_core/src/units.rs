//! # Unit Types
//!
//! Type-safe wrappers for engineering units. These provide compile-time
//! safety against unit confusion while remaining lightweight (just f64 wrappers).
//!
//! ## SI Units
//!
//! Eurocode section design is carried out in a consistent N-mm system.
//! Lengths (mm) and areas (mm²) stay plain `f64` fields named with their unit;
//! the wrappers cover the quantities that change units on the way in:
//! - Stress: megapascals (MPa = N/mm²)
//! - Moment: kilonewton-meters (kN·m) at the input boundary, newton-millimeters
//!   (N·mm) inside the formulas
//!
//! ## Example
//!
//! ```rust
//! use rc_core::units::{KilonewtonMeters, NewtonMillimeters};
//!
//! let m = KilonewtonMeters(1000.0);
//! let m_nmm: NewtonMillimeters = m.into();
//! assert_eq!(m_nmm.0, 1.0e9);
//! ```

use serde::{Deserialize, Serialize};

/// N·mm per kN·m
pub const NMM_PER_KNM: f64 = 1.0e6;

/// Stress in megapascals (N/mm²)
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Megapascals(pub f64);

/// Moment in kilonewton-meters
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KilonewtonMeters(pub f64);

/// Moment in newton-millimeters
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NewtonMillimeters(pub f64);

impl From<KilonewtonMeters> for NewtonMillimeters {
    fn from(knm: KilonewtonMeters) -> Self {
        NewtonMillimeters(knm.0 * NMM_PER_KNM)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_knm_to_nmm() {
        let nmm: NewtonMillimeters = KilonewtonMeters(2.5).into();
        assert_eq!(nmm.0, 2.5e6);
    }

    #[test]
    fn test_serialization() {
        let m = KilonewtonMeters(1000.0);
        let json = serde_json::to_string(&m).unwrap();
        assert_eq!(json, "1000.0");

        let roundtrip: KilonewtonMeters = serde_json::from_str(&json).unwrap();
        assert_eq!(m, roundtrip);
    }
}
