//! # Cross-Section Property Formulas
//!
//! Geometric properties of a rectangular reinforced-concrete section and
//! its tension reinforcement.
//!
//! ## Notation
//!
//! - `b` = Width of section
//! - `h` = Overall height of section
//! - `φ` = Bar diameter
//! - `n` = Number of bars in a layer
//! - `y` = Distance from the tension face to a layer centroid
//!
//! ## References
//!
//! - EN 1992-1-1 Section 4.4: Concrete cover
//! - EN 1992-1-1 Section 8.2: Spacing of bars

use std::f64::consts::PI;

// =============================================================================
// RECTANGULAR SECTION PROPERTIES
// =============================================================================

/// Calculate gross cross-sectional area for rectangular section
///
/// ```text
///     ┌─────────┐
///     │         │
///   h │         │
///     │ ● ● ● ● │ ← tension reinforcement
///     └─────────┘
///          b
/// ```
///
/// # Formula
/// A = b × h
///
/// # Example
/// ```rust
/// use rc_core::equations::section::rectangular_area;
///
/// let area = rectangular_area(1000.0, 1200.0);
/// assert!((area - 1.2e6).abs() < 0.001);
/// ```
#[inline]
pub fn rectangular_area(b: f64, h: f64) -> f64 {
    b * h
}

// =============================================================================
// REINFORCEMENT
// =============================================================================

/// Cross-sectional area of a single round bar: π(φ/2)²
#[inline]
pub fn bar_area(diameter: f64) -> f64 {
    PI * (diameter / 2.0).powi(2)
}

/// Total area of a layer of `count` identical bars
///
/// # Formula
/// As = n × π(φ/2)²
///
/// A layer with zero bars or zero diameter contributes no area.
///
/// # Example
/// ```rust
/// use rc_core::equations::section::layer_area;
///
/// // 6 bars of 20 mm
/// let area = layer_area(6, 20.0);
/// assert!((area - 1884.96).abs() < 0.01);
/// ```
#[inline]
pub fn layer_area(count: u32, diameter: f64) -> f64 {
    bar_area(diameter) * f64::from(count)
}

/// Centroid depth of the first (outermost) tension layer, measured from the tension face
///
/// # Formula
/// y₁ = c + φ_link + φ₁/2
#[inline]
pub fn first_layer_centroid(cover: f64, link_diameter: f64, bar_diameter: f64) -> f64 {
    cover + link_diameter + bar_diameter / 2.0
}

/// Area-weighted centroid of several reinforcement layers.
///
/// Each entry is `(y, area)` with `y` measured from the tension face.
///
/// # Formula
/// ȳ = Σ(yᵢ·Asᵢ) / ΣAsᵢ
///
/// # Returns
/// `None` when the total area is zero (the centroid is undefined)
///
/// # Example
/// ```rust
/// use rc_core::equations::section::weighted_centroid;
///
/// let y = weighted_centroid(&[(50.0, 100.0), (150.0, 100.0)]).unwrap();
/// assert!((y - 100.0).abs() < 1e-9);
///
/// assert!(weighted_centroid(&[(50.0, 0.0)]).is_none());
/// ```
pub fn weighted_centroid(layers: &[(f64, f64)]) -> Option<f64> {
    let total_area: f64 = layers.iter().map(|(_, area)| area).sum();
    if total_area <= 0.0 {
        return None;
    }
    let first_moment: f64 = layers.iter().map(|(y, area)| y * area).sum();
    Some(first_moment / total_area)
}
