//! # Structural Calculations
//!
//! Each calculation follows the pattern:
//!
//! - `*Input` - Input parameters (JSON-serializable)
//! - `*Result` - Calculation results (JSON-serializable)
//! - `calculate(input) -> Result<*Result, CalcError>` - Pure calculation function
//!
//! ## Available Calculations
//!
//! - [`section_capacity`] - Reinforced concrete section in bending (EN 1992-1-1)

pub mod section_capacity;

// Re-export commonly used types
pub use section_capacity::{
    calculate, calculate_with_settings, CapacityResult, DerivedSection, MaterialDesignValues,
    RebarLayer, SectionInput, Verdict,
};
