//! # Eurocode 2 Bending Formulas
//!
//! Design values and the simplified rectangular stress block expressions
//! for a singly-reinforced rectangular section in bending.
//!
//! All functions work in the N-mm system: stresses in MPa, lengths in mm,
//! moments in N·mm.
//!
//! ## References
//!
//! - EN 1992-1-1 Section 2.4.2.4: Partial factors for materials
//! - EN 1992-1-1 Section 3.1.6: Design compressive strength
//! - EN 1992-1-1 Section 3.2.7: Design assumptions for reinforcement
//! - Concrete Centre, "How to design concrete structures using Eurocode 2", Beams

/// Coefficient on K under the lever-arm square root: z = d/2·(1 + √(1 − 3.53K))
pub const LEVER_ARM_K_FACTOR: f64 = 3.53;

/// Upper bound on the lever arm as a fraction of the effective depth
pub const LEVER_ARM_CAP: f64 = 0.95;

/// Largest K the lever-arm expression can take before the root turns negative
pub const K_LIMIT: f64 = 1.0 / LEVER_ARM_K_FACTOR;

/// K′ for a singly-reinforced section without moment redistribution.
/// Above this value compression reinforcement is normally provided.
pub const K_BALANCED: f64 = 0.167;

/// Empirical coefficient in Ec = 22000·√fck (MPa)
pub const CONCRETE_MODULUS_COEFFICIENT: f64 = 22_000.0;

// =============================================================================
// MATERIAL DESIGN VALUES
// =============================================================================

/// Design compressive strength of concrete
///
/// # Formula
/// fcd = αcc × fck / γc
///
/// # Example
/// ```rust
/// use rc_core::equations::ec2::design_concrete_strength;
///
/// let fcd = design_concrete_strength(35.0, 0.85, 1.5);
/// assert!((fcd - 19.833).abs() < 0.001);
/// ```
#[inline]
pub fn design_concrete_strength(fck: f64, alpha_cc: f64, gamma_c: f64) -> f64 {
    alpha_cc * fck / gamma_c
}

/// Design yield strength of reinforcement: fyd = fyk / γs
#[inline]
pub fn design_steel_strength(fyk: f64, gamma_s: f64) -> f64 {
    fyk / gamma_s
}

/// Modulus of elasticity of concrete (MPa), Ec = 22000·√fck
#[inline]
pub fn concrete_modulus(fck: f64) -> f64 {
    CONCRETE_MODULUS_COEFFICIENT * fck.sqrt()
}

/// Effective modulus of concrete: Ecd = Ec / αe
#[inline]
pub fn effective_modulus(ec: f64, alpha_e: f64) -> f64 {
    ec / alpha_e
}

// =============================================================================
// BENDING RESISTANCE
// =============================================================================

/// Dimensionless moment coefficient
///
/// # Formula
/// K = M / (b·d²·fck)
///
/// # Arguments
/// * `m_nmm` - Design moment (N·mm)
/// * `b` - Section width (mm)
/// * `d` - Effective depth (mm)
/// * `fck` - Characteristic concrete strength (MPa)
#[inline]
pub fn moment_coefficient(m_nmm: f64, b: f64, d: f64, fck: f64) -> f64 {
    m_nmm / (b * d * d * fck)
}

/// Uncapped lever arm from the rectangular stress block.
///
/// # Formula
/// z = d/2 × (1 + √(1 − 3.53K))
///
/// # Returns
/// `None` when 1 − 3.53K is negative (the section cannot carry the moment
/// without compression reinforcement under this method)
#[inline]
pub fn lever_arm_uncapped(d: f64, k: f64) -> Option<f64> {
    let radicand = 1.0 - LEVER_ARM_K_FACTOR * k;
    if radicand < 0.0 {
        return None;
    }
    Some(d / 2.0 * (1.0 + radicand.sqrt()))
}

/// Lever arm capped at 0.95d
///
/// # Formula
/// z = min(d/2 × (1 + √(1 − 3.53K)), 0.95d)
///
/// # Example
/// ```rust
/// use rc_core::equations::ec2::lever_arm;
///
/// // Lightly loaded section: the 0.95d cap governs
/// let z = lever_arm(1000.0, 0.02).unwrap();
/// assert!((z - 950.0).abs() < 1e-9);
///
/// // 3.53K > 1: no real solution
/// assert!(lever_arm(1000.0, 0.3).is_none());
/// ```
pub fn lever_arm(d: f64, k: f64) -> Option<f64> {
    lever_arm_uncapped(d, k).map(|z| z.min(LEVER_ARM_CAP * d))
}

/// Area of tension reinforcement required: As,req = M / (fyd·z)
#[inline]
pub fn required_steel_area(m_nmm: f64, fyd: f64, z: f64) -> f64 {
    m_nmm / (fyd * z)
}
