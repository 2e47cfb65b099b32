//! # Structural Engineering Equations
//!
//! All formulas used by the section check live here as small pure
//! functions. Having equations in one place enables:
//! - Easy verification against EN 1992-1-1
//! - Documentation of assumptions and sign conventions
//! - Unit testing each expression in isolation
//!
//! ## Modules
//!
//! - [`section`] - Gross section and reinforcement geometry
//! - [`ec2`] - Eurocode 2 design strengths, moduli, and bending expressions
//!
//! ## Sign Conventions
//!
//! - **Moment**: Positive causes tension on the reinforced face
//! - **Depths**: Measured from the compression face (d) or the tension face (y)
//!
//! ## References
//!
//! - EN 1992-1-1:2004 Eurocode 2: Design of concrete structures
//! - Concrete Centre, "How to design concrete structures using Eurocode 2"

pub mod ec2;
pub mod section;

// Re-export commonly used items
pub use ec2::{
    concrete_modulus,
    design_concrete_strength,
    design_steel_strength,
    effective_modulus,
    lever_arm,
    lever_arm_uncapped,
    moment_coefficient,
    required_steel_area,
    K_BALANCED,
    K_LIMIT,
    LEVER_ARM_CAP,
    LEVER_ARM_K_FACTOR,
};

pub use section::{
    bar_area,
    first_layer_centroid,
    layer_area,
    rectangular_area,
    weighted_centroid,
};
