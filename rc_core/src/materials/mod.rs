//! # Materials Database
//!
//! Material presets for reinforced-concrete section design.
//!
//! ## Material Types
//!
//! - **Concrete**: Strength classes C12/15 to C90/105 per EN 1992-1-1 Table 3.1
//! - **Reinforcement**: B500 bars in ductility classes A, B and C
//!
//! The section check itself consumes raw `fck` / `fyk` numbers; these
//! presets exist so a user can pick a class instead of typing a strength.
//!
//! ## Example
//!
//! ```rust
//! use rc_core::materials::{ConcreteClass, ReinforcementGrade};
//!
//! let concrete = ConcreteClass::from_str_flexible("C35/45").unwrap();
//! let steel = ReinforcementGrade::B500B;
//! println!("fck = {} MPa, fyk = {} MPa", concrete.fck().0, steel.fyk().0);
//! ```

pub mod concrete;
pub mod reinforcement;

pub use concrete::ConcreteClass;
pub use reinforcement::{is_standard_diameter, ReinforcementGrade, STANDARD_BAR_DIAMETERS_MM};
