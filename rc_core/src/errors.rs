//! # Error Types
//!
//! Structured error types for rc_core. Each variant carries enough context
//! for the presentation layer to tell the user exactly which input to fix.
//!
//! None of these errors are transient: the user corrects the inputs and
//! triggers the calculation again.
//!
//! ## Example
//!
//! ```rust
//! use rc_core::errors::{CalcError, CalcResult};
//!
//! fn validate_cover(cover_mm: f64) -> CalcResult<()> {
//!     if cover_mm < 0.0 {
//!         return Err(CalcError::input_out_of_range(
//!             "cover_mm",
//!             cover_mm.to_string(),
//!             "Cover cannot be negative",
//!         ));
//!     }
//!     Ok(())
//! }
//!
//! assert!(validate_cover(-5.0).is_err());
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for rc_core operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Structured error type for calculation operations.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum CalcError {
    /// The section cannot be evaluated as described (no rebar, no effective depth, ...)
    #[error("Invalid geometry: {reason}")]
    InvalidGeometry { reason: String },

    /// The moment coefficient K is too large for the simplified lever-arm expression
    #[error(
        "Over-reinforced section: K = {k:.4} exceeds the limit {k_limit:.4} \
         of the simplified lever-arm method - increase the section or reduce the moment"
    )]
    OverReinforcedSection { k: f64, k_limit: f64 },

    /// A physical quantity is negative, non-finite, or otherwise unusable
    #[error("Input out of range for '{field}': {value} - {reason}")]
    InputOutOfRange {
        field: String,
        value: String,
        reason: String,
    },

    /// A design setting (partial factor, modulus) is outside its admissible range
    #[error("Invalid setting '{field}': {value} - {reason}")]
    InvalidSettings {
        field: String,
        value: String,
        reason: String,
    },

    /// File I/O error
    #[error("File error: {operation} on '{path}' - {reason}")]
    FileError {
        operation: String,
        path: String,
        reason: String,
    },

    /// JSON serialization/deserialization error
    #[error("Serialization error: {reason}")]
    SerializationError { reason: String },
}

impl CalcError {
    /// Create an InvalidGeometry error
    pub fn invalid_geometry(reason: impl Into<String>) -> Self {
        CalcError::InvalidGeometry {
            reason: reason.into(),
        }
    }

    /// Create an OverReinforcedSection error
    pub fn over_reinforced(k: f64, k_limit: f64) -> Self {
        CalcError::OverReinforcedSection { k, k_limit }
    }

    /// Create an InputOutOfRange error
    pub fn input_out_of_range(
        field: impl Into<String>,
        value: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        CalcError::InputOutOfRange {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create an InvalidSettings error
    pub fn invalid_settings(
        field: impl Into<String>,
        value: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        CalcError::InvalidSettings {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create a FileError
    pub fn file_error(
        operation: impl Into<String>,
        path: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        CalcError::FileError {
            operation: operation.into(),
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            CalcError::InvalidGeometry { .. } => "INVALID_GEOMETRY",
            CalcError::OverReinforcedSection { .. } => "OVER_REINFORCED_SECTION",
            CalcError::InputOutOfRange { .. } => "INPUT_OUT_OF_RANGE",
            CalcError::InvalidSettings { .. } => "INVALID_SETTINGS",
            CalcError::FileError { .. } => "FILE_ERROR",
            CalcError::SerializationError { .. } => "SERIALIZATION_ERROR",
        }
    }
}

impl From<serde_json::Error> for CalcError {
    fn from(err: serde_json::Error) -> Self {
        CalcError::SerializationError {
            reason: err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_serialization() {
        let error = CalcError::input_out_of_range("cover_mm", "-5", "Cover cannot be negative");
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("\"type\":\"InputOutOfRange\""));
        let roundtrip: CalcError = serde_json::from_str(&json).unwrap();
        assert_eq!(error, roundtrip);
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(CalcError::invalid_geometry("no rebar").error_code(), "INVALID_GEOMETRY");
        assert_eq!(
            CalcError::over_reinforced(0.3, 0.283).error_code(),
            "OVER_REINFORCED_SECTION"
        );
        assert_eq!(
            CalcError::invalid_settings("gamma_c", "0", "must be positive").error_code(),
            "INVALID_SETTINGS"
        );
    }

    #[test]
    fn test_over_reinforced_message_mentions_k() {
        let msg = CalcError::over_reinforced(0.31, 1.0 / 3.53).to_string();
        assert!(msg.contains("K = 0.3100"));
        assert!(msg.contains("0.2833"));
    }

    #[test]
    fn test_json_error_conversion() {
        let err: CalcError = serde_json::from_str::<f64>("not json").unwrap_err().into();
        assert_eq!(err.error_code(), "SERIALIZATION_ERROR");
    }
}
