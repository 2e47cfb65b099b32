//! Reinforcing Steel (EN 1992-1-1 Annex C)
//!
//! Weldable ribbed bars of characteristic yield strength 500 MPa in the three
//! ductility classes, plus the standard bar diameter series.

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};
use crate::units::Megapascals;

/// Standard bar diameters available from stock (mm)
pub const STANDARD_BAR_DIAMETERS_MM: [u32; 9] = [6, 8, 10, 12, 16, 20, 25, 32, 40];

/// Reinforcement grade and ductility class
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ReinforcementGrade {
    /// Low ductility (typically cold-worked mesh)
    B500A,
    /// Normal ductility (typical hot-rolled bar)
    #[default]
    B500B,
    /// High ductility (seismic detailing)
    B500C,
}

impl ReinforcementGrade {
    /// All grades for UI selection
    pub const ALL: [ReinforcementGrade; 3] = [
        ReinforcementGrade::B500A,
        ReinforcementGrade::B500B,
        ReinforcementGrade::B500C,
    ];

    /// Characteristic yield strength fyk
    pub fn fyk(&self) -> Megapascals {
        Megapascals(500.0)
    }

    /// Get display name
    pub fn display_name(&self) -> &'static str {
        match self {
            ReinforcementGrade::B500A => "B500A",
            ReinforcementGrade::B500B => "B500B",
            ReinforcementGrade::B500C => "B500C",
        }
    }

    /// Parse from common string representations ("B500B", "b500b", "500B")
    pub fn from_str_flexible(s: &str) -> CalcResult<Self> {
        match s.trim().to_uppercase().trim_start_matches('B') {
            "500A" => Ok(ReinforcementGrade::B500A),
            "500B" => Ok(ReinforcementGrade::B500B),
            "500C" => Ok(ReinforcementGrade::B500C),
            _ => Err(CalcError::input_out_of_range(
                "reinforcement_grade",
                s,
                "Unknown reinforcement grade",
            )),
        }
    }
}

impl std::fmt::Display for ReinforcementGrade {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Check whether a diameter belongs to the standard series
pub fn is_standard_diameter(diameter_mm: f64) -> bool {
    STANDARD_BAR_DIAMETERS_MM
        .iter()
        .any(|&d| (f64::from(d) - diameter_mm).abs() < 1e-9)
}
