//! Concrete Strength Classes (EN 1992-1-1 Table 3.1)
//!
//! Normal-weight concrete classes from C12/15 to C90/105. The class name
//! gives the characteristic cylinder and cube strengths in MPa.

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};
use crate::units::Megapascals;

/// Concrete strength class per EN 206 / EN 1992-1-1
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ConcreteClass {
    #[serde(rename = "C12/15")]
    C12_15,
    #[serde(rename = "C16/20")]
    C16_20,
    #[serde(rename = "C20/25")]
    C20_25,
    #[serde(rename = "C25/30")]
    C25_30,
    #[serde(rename = "C30/37")]
    C30_37,
    #[default]
    #[serde(rename = "C35/45")]
    C35_45,
    #[serde(rename = "C40/50")]
    C40_50,
    #[serde(rename = "C45/55")]
    C45_55,
    #[serde(rename = "C50/60")]
    C50_60,
    #[serde(rename = "C55/67")]
    C55_67,
    #[serde(rename = "C60/75")]
    C60_75,
    #[serde(rename = "C70/85")]
    C70_85,
    #[serde(rename = "C80/95")]
    C80_95,
    #[serde(rename = "C90/105")]
    C90_105,
}

impl ConcreteClass {
    /// All concrete classes for UI selection
    pub const ALL: [ConcreteClass; 14] = [
        ConcreteClass::C12_15,
        ConcreteClass::C16_20,
        ConcreteClass::C20_25,
        ConcreteClass::C25_30,
        ConcreteClass::C30_37,
        ConcreteClass::C35_45,
        ConcreteClass::C40_50,
        ConcreteClass::C45_55,
        ConcreteClass::C50_60,
        ConcreteClass::C55_67,
        ConcreteClass::C60_75,
        ConcreteClass::C70_85,
        ConcreteClass::C80_95,
        ConcreteClass::C90_105,
    ];

    /// Characteristic cylinder strength fck (EN 1992-1-1 Table 3.1)
    pub fn fck(&self) -> Megapascals {
        let fck = match self {
            ConcreteClass::C12_15 => 12.0,
            ConcreteClass::C16_20 => 16.0,
            ConcreteClass::C20_25 => 20.0,
            ConcreteClass::C25_30 => 25.0,
            ConcreteClass::C30_37 => 30.0,
            ConcreteClass::C35_45 => 35.0,
            ConcreteClass::C40_50 => 40.0,
            ConcreteClass::C45_55 => 45.0,
            ConcreteClass::C50_60 => 50.0,
            ConcreteClass::C55_67 => 55.0,
            ConcreteClass::C60_75 => 60.0,
            ConcreteClass::C70_85 => 70.0,
            ConcreteClass::C80_95 => 80.0,
            ConcreteClass::C90_105 => 90.0,
        };
        Megapascals(fck)
    }

    /// Get display name (e.g., "C35/45")
    pub fn display_name(&self) -> &'static str {
        match self {
            ConcreteClass::C12_15 => "C12/15",
            ConcreteClass::C16_20 => "C16/20",
            ConcreteClass::C20_25 => "C20/25",
            ConcreteClass::C25_30 => "C25/30",
            ConcreteClass::C30_37 => "C30/37",
            ConcreteClass::C35_45 => "C35/45",
            ConcreteClass::C40_50 => "C40/50",
            ConcreteClass::C45_55 => "C45/55",
            ConcreteClass::C50_60 => "C50/60",
            ConcreteClass::C55_67 => "C55/67",
            ConcreteClass::C60_75 => "C60/75",
            ConcreteClass::C70_85 => "C70/85",
            ConcreteClass::C80_95 => "C80/95",
            ConcreteClass::C90_105 => "C90/105",
        }
    }

    /// Parse from common string representations ("C35/45", "c35-45", "C35")
    pub fn from_str_flexible(s: &str) -> CalcResult<Self> {
        let normalized = s.trim().to_uppercase().replace(['-', '_', ' '], "/");
        ConcreteClass::ALL
            .iter()
            .copied()
            .find(|class| {
                let name = class.display_name();
                normalized == name || name.split('/').next() == Some(normalized.as_str())
            })
            .ok_or_else(|| {
                CalcError::input_out_of_range("concrete_class", s, "Unknown concrete strength class")
            })
    }

    /// Find the class whose fck matches exactly, if any
    pub fn for_fck(fck_mpa: f64) -> Option<Self> {
        ConcreteClass::ALL
            .iter()
            .copied()
            .find(|class| (class.fck().0 - fck_mpa).abs() < 1e-9)
    }
}

impl std::fmt::Display for ConcreteClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}
