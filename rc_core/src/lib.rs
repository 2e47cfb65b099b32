//! # rc_core - Reinforced Concrete Section Check Engine
//!
//! `rc_core` is the computational heart of the section checker: it takes a
//! rectangular reinforced-concrete section, its tension reinforcement, the
//! material grades and an applied bending moment, and reports the required
//! versus provided steel area per Eurocode 2. All inputs and outputs are
//! JSON-serializable, so the engine can sit behind a GUI, a CLI, or an
//! LLM tool call without change.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: Pure functions that take input and return results
//! - **JSON-First**: All types implement Serialize/Deserialize
//! - **Rich Errors**: Structured error types, not just strings
//! - **UI-agnostic**: Presentation layers only collect inputs and render [`report`] lines
//!
//! ## Quick Start
//!
//! ```rust
//! use rc_core::{calculate, SectionInput};
//!
//! let input = SectionInput::default();
//! input.validate().unwrap();
//!
//! let result = calculate(&input).unwrap();
//! println!("Utilization: {:.2}% ({})", result.utilization * 100.0, result.verdict);
//!
//! // Serialize to JSON for storage or transmission
//! let json = serde_json::to_string_pretty(&result).unwrap();
//! ```
//!
//! ## Modules
//!
//! - [`calculations`] - The section capacity check
//! - [`equations`] - Individual Eurocode 2 formulas
//! - [`materials`] - Concrete classes and reinforcement grades
//! - [`settings`] - Partial factors and constants
//! - [`report`] - Formatted output lines with verdict styling
//! - [`units`] - Type-safe unit wrappers
//! - [`errors`] - Structured error types
//! - [`file_io`] - Loading JSON inputs and settings

pub mod calculations;
pub mod equations;
pub mod errors;
pub mod file_io;
pub mod materials;
pub mod report;
pub mod settings;
pub mod units;

// Re-export commonly used types at crate root for convenience
pub use calculations::{
    calculate, calculate_with_settings, CapacityResult, RebarLayer, SectionInput, Verdict,
};
pub use errors::{CalcError, CalcResult};
pub use file_io::load_json;
pub use settings::DesignSettings;
