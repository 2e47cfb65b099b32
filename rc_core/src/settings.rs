//! # Design Settings
//!
//! Partial factors and material constants applied by the section check.
//! The defaults are the EN 1992-1-1 recommended values used throughout
//! this crate; a JSON settings file may override any subset of them.
//!
//! ## Example
//!
//! ```rust
//! use rc_core::settings::DesignSettings;
//!
//! let settings = DesignSettings::from_json_str(r#"{ "gamma_c": 1.5, "alpha_cc": 1.0 }"#).unwrap();
//! assert_eq!(settings.alpha_cc, 1.0);
//! assert_eq!(settings.gamma_s, 1.15); // not given, falls back to the default
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};
use crate::file_io::load_json;

/// Modulus of elasticity of reinforcing steel (MPa)
pub const STEEL_MODULUS_MPA: f64 = 200_000.0;

/// Factors and constants for one calculation pass.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DesignSettings {
    /// Long-term coefficient on concrete compressive strength αcc
    pub alpha_cc: f64,

    /// Partial factor for concrete γc
    pub gamma_c: f64,

    /// Partial factor for reinforcing steel γs
    pub gamma_s: f64,

    /// Divisor applied to Ec to obtain the effective modulus Ecd
    pub alpha_e: f64,

    /// Modulus of elasticity of reinforcing steel Es (MPa)
    pub es_mpa: f64,
}

impl Default for DesignSettings {
    fn default() -> Self {
        DesignSettings {
            alpha_cc: 0.85,
            gamma_c: 1.5,
            gamma_s: 1.15,
            alpha_e: 1.0,
            es_mpa: STEEL_MODULUS_MPA,
        }
    }
}

impl DesignSettings {
    /// Validate that every factor is finite and strictly positive.
    pub fn validate(&self) -> CalcResult<()> {
        let fields = [
            ("alpha_cc", self.alpha_cc),
            ("gamma_c", self.gamma_c),
            ("gamma_s", self.gamma_s),
            ("alpha_e", self.alpha_e),
            ("es_mpa", self.es_mpa),
        ];
        for (field, value) in fields {
            if !value.is_finite() || value <= 0.0 {
                return Err(CalcError::invalid_settings(
                    field,
                    value.to_string(),
                    "Must be a positive number",
                ));
            }
        }
        if self.alpha_cc > 1.0 {
            return Err(CalcError::invalid_settings(
                "alpha_cc",
                self.alpha_cc.to_string(),
                "Coefficient αcc lies between 0.8 and 1.0",
            ));
        }
        Ok(())
    }

    /// Parse settings from JSON. Missing fields take their default values.
    pub fn from_json_str(json: &str) -> CalcResult<Self> {
        let settings: DesignSettings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Load settings from a JSON file.
    pub fn load(path: &Path) -> CalcResult<Self> {
        let settings: DesignSettings = load_json(path)?;
        settings.validate()?;
        tracing::info!(path = %path.display(), ?settings, "loaded design settings");
        Ok(settings)
    }
}
