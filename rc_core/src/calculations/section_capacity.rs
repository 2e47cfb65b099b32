//! # Reinforced Concrete Section Capacity
//!
//! Checks a singly-reinforced rectangular concrete section in bending per
//! EN 1992-1-1 using the simplified rectangular stress block.
//!
//! ## Assumptions
//!
//! - Rectangular section, tension reinforcement in up to two layers
//! - Layer 1 is the outermost layer; layer 2 sits `layer_spacing_mm` further in
//! - Recommended partial factors (αcc = 0.85, γc = 1.5, γs = 1.15) unless
//!   overridden through [`DesignSettings`]
//! - No compression reinforcement, no moment redistribution
//!
//! ## Example (LLM-friendly)
//!
//! ```rust
//! use rc_core::calculations::section_capacity::{calculate, SectionInput, Verdict};
//!
//! // Reference section: 1000 x 1200, 6φ20 + 2φ20, C35/45, B500, M = 1000 kN·m
//! let input = SectionInput::default();
//! let result = calculate(&input).unwrap();
//!
//! println!("d = {:.2} mm", result.section.effective_depth_mm);
//! println!("As,req = {:.2} mm²", result.as_required_mm2);
//! assert_eq!(result.verdict, Verdict::Ok);
//! ```

use serde::{Deserialize, Serialize};

use crate::equations::{ec2, section};
use crate::errors::{CalcError, CalcResult};
use crate::settings::DesignSettings;
use crate::units::{KilonewtonMeters, NewtonMillimeters};

/// One layer of identical tension bars.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RebarLayer {
    /// Number of bars (may be zero)
    pub count: u32,

    /// Bar diameter in mm (may be zero)
    pub diameter_mm: f64,
}

impl RebarLayer {
    pub fn new(count: u32, diameter_mm: f64) -> Self {
        RebarLayer { count, diameter_mm }
    }

    /// Steel area of this layer: n·π(φ/2)²
    pub fn area_mm2(&self) -> f64 {
        section::layer_area(self.count, self.diameter_mm)
    }
}

/// Input parameters for a section check.
///
/// Each field is a plain number so the whole input serializes to flat JSON.
///
/// ## JSON Example
///
/// ```json
/// {
///   "width_mm": 1000.0,
///   "height_mm": 1200.0,
///   "cover_mm": 65.0,
///   "link_diameter_mm": 16.0,
///   "layer1": { "count": 6, "diameter_mm": 20.0 },
///   "layer2": { "count": 2, "diameter_mm": 20.0 },
///   "layer_spacing_mm": 70.0,
///   "fck_mpa": 35.0,
///   "fyk_mpa": 500.0,
///   "moment_knm": 1000.0
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectionInput {
    /// Section width b (mm)
    pub width_mm: f64,

    /// Overall section height h (mm)
    pub height_mm: f64,

    /// Nominal cover to the links (mm)
    pub cover_mm: f64,

    /// Shear link diameter (mm)
    pub link_diameter_mm: f64,

    /// Outermost tension layer
    pub layer1: RebarLayer,

    /// Inner tension layer
    pub layer2: RebarLayer,

    /// Centre-to-centre distance between layer 1 and layer 2 (mm)
    pub layer_spacing_mm: f64,

    /// Characteristic concrete cylinder strength fck (MPa)
    pub fck_mpa: f64,

    /// Characteristic reinforcement yield strength fyk (MPa)
    pub fyk_mpa: f64,

    /// Applied design bending moment M (kN·m)
    pub moment_knm: f64,
}

impl Default for SectionInput {
    fn default() -> Self {
        SectionInput {
            width_mm: 1000.0,
            height_mm: 1200.0,
            cover_mm: 65.0,
            link_diameter_mm: 16.0,
            layer1: RebarLayer::new(6, 20.0),
            layer2: RebarLayer::new(2, 20.0),
            layer_spacing_mm: 70.0,
            fck_mpa: 35.0,
            fyk_mpa: 500.0,
            moment_knm: 1000.0,
        }
    }
}

impl SectionInput {
    /// Validate that every physical quantity is finite and non-negative.
    ///
    /// The form and CLI adapters call it at the input boundary, and
    /// [`calculate`] runs it again before any arithmetic.
    pub fn validate(&self) -> CalcResult<()> {
        let fields = [
            ("width_mm", self.width_mm),
            ("height_mm", self.height_mm),
            ("cover_mm", self.cover_mm),
            ("link_diameter_mm", self.link_diameter_mm),
            ("layer1.diameter_mm", self.layer1.diameter_mm),
            ("layer2.diameter_mm", self.layer2.diameter_mm),
            ("layer_spacing_mm", self.layer_spacing_mm),
            ("fck_mpa", self.fck_mpa),
            ("fyk_mpa", self.fyk_mpa),
            ("moment_knm", self.moment_knm),
        ];
        for (field, value) in fields {
            if !value.is_finite() {
                return Err(CalcError::input_out_of_range(
                    field,
                    value.to_string(),
                    "Value must be a finite number",
                ));
            }
            if value < 0.0 {
                return Err(CalcError::input_out_of_range(
                    field,
                    value.to_string(),
                    "Value cannot be negative",
                ));
            }
        }
        Ok(())
    }

    /// Applied moment as a typed quantity
    pub fn moment(&self) -> KilonewtonMeters {
        KilonewtonMeters(self.moment_knm)
    }

    /// Derive the geometric quantities of the section.
    ///
    /// # Errors
    ///
    /// * `InvalidGeometry` - No rebar in either layer, or the reinforcement
    ///   centroid lies at or beyond the compression face (d ≤ 0)
    pub fn derive_section(&self) -> CalcResult<DerivedSection> {
        let gross_area_mm2 = section::rectangular_area(self.width_mm, self.height_mm);

        let y1_mm = section::first_layer_centroid(
            self.cover_mm,
            self.link_diameter_mm,
            self.layer1.diameter_mm,
        );
        let y2_mm = y1_mm + self.layer_spacing_mm;

        let as1_mm2 = self.layer1.area_mm2();
        let as2_mm2 = self.layer2.area_mm2();
        let as_total_mm2 = as1_mm2 + as2_mm2;

        let centroid_mm = section::weighted_centroid(&[(y1_mm, as1_mm2), (y2_mm, as2_mm2)])
            .ok_or_else(|| {
                CalcError::invalid_geometry(
                    "Total steel area is zero - specify at least one bar with a non-zero diameter",
                )
            })?;

        let effective_depth_mm = self.height_mm - centroid_mm;
        if effective_depth_mm <= 0.0 {
            return Err(CalcError::invalid_geometry(format!(
                "Effective depth d = {:.2} mm is not positive - the reinforcement centroid \
                 ({:.2} mm from the tension face) lies outside the {:.0} mm section",
                effective_depth_mm, centroid_mm, self.height_mm
            )));
        }

        Ok(DerivedSection {
            gross_area_mm2,
            y1_mm,
            y2_mm,
            as1_mm2,
            as2_mm2,
            as_total_mm2,
            centroid_mm,
            effective_depth_mm,
        })
    }
}

/// Geometric quantities derived from the input.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DerivedSection {
    /// Gross concrete area A = b·h (mm²), reported only
    pub gross_area_mm2: f64,

    /// Centroid of layer 1 from the tension face (mm)
    pub y1_mm: f64,

    /// Centroid of layer 2 from the tension face (mm)
    pub y2_mm: f64,

    /// Steel area of layer 1 (mm²)
    pub as1_mm2: f64,

    /// Steel area of layer 2 (mm²)
    pub as2_mm2: f64,

    /// Total steel area As (mm²)
    pub as_total_mm2: f64,

    /// Area-weighted centroid of all tension steel from the tension face, y (mm)
    pub centroid_mm: f64,

    /// Effective depth d = h − y (mm)
    pub effective_depth_mm: f64,
}

/// Design values of the materials.
///
/// The moduli are reported for reference; the bending check does not use them.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MaterialDesignValues {
    /// Design concrete compressive strength fcd (MPa)
    pub fcd_mpa: f64,

    /// Design steel yield strength fyd (MPa)
    pub fyd_mpa: f64,

    /// Concrete modulus Ec (MPa)
    pub ec_mpa: f64,

    /// Steel modulus Es (MPa)
    pub es_mpa: f64,

    /// Effective concrete modulus Ecd (MPa)
    pub ecd_mpa: f64,
}

impl MaterialDesignValues {
    pub fn new(fck_mpa: f64, fyk_mpa: f64, settings: &DesignSettings) -> Self {
        let ec_mpa = ec2::concrete_modulus(fck_mpa);
        MaterialDesignValues {
            fcd_mpa: ec2::design_concrete_strength(fck_mpa, settings.alpha_cc, settings.gamma_c),
            fyd_mpa: ec2::design_steel_strength(fyk_mpa, settings.gamma_s),
            ec_mpa,
            es_mpa: settings.es_mpa,
            ecd_mpa: ec2::effective_modulus(ec_mpa, settings.alpha_e),
        }
    }
}

/// Outcome of the utilization check
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Verdict {
    /// Utilization ≤ 1.0
    #[serde(rename = "OK")]
    Ok,
    /// Utilization > 1.0
    #[serde(rename = "Not OK")]
    NotOk,
}

impl Verdict {
    pub fn from_utilization(utilization: f64) -> Self {
        if utilization <= 1.0 {
            Verdict::Ok
        } else {
            Verdict::NotOk
        }
    }

    pub fn is_ok(&self) -> bool {
        matches!(self, Verdict::Ok)
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Verdict::Ok => "OK",
            Verdict::NotOk => "Not OK",
        }
    }
}

impl std::fmt::Display for Verdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Results from a section check.
///
/// ## JSON Example
///
/// ```json
/// {
///   "section": { "centroid_mm": 108.5, "effective_depth_mm": 1091.5, "...": "..." },
///   "materials": { "fcd_mpa": 19.83, "fyd_mpa": 434.78, "...": "..." },
///   "k": 0.024,
///   "z_mm": 1036.93,
///   "as_required_mm2": 2218.1,
///   "as_provided_mm2": 2513.27,
///   "utilization": 0.883,
///   "verdict": "OK"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CapacityResult {
    /// Derived geometry
    pub section: DerivedSection,

    /// Design material values
    pub materials: MaterialDesignValues,

    /// Dimensionless moment coefficient K = M/(b·d²·fck)
    pub k: f64,

    /// Lever arm z (mm), capped at 0.95d
    pub z_mm: f64,

    /// Required tension steel As,req = M/(fyd·z) (mm²)
    pub as_required_mm2: f64,

    /// Provided tension steel As,prov (mm²)
    pub as_provided_mm2: f64,

    /// As,req / As,prov
    pub utilization: f64,

    pub verdict: Verdict,
}

impl CapacityResult {
    /// Check if the provided reinforcement is adequate (utilization ≤ 1.0)
    pub fn passes(&self) -> bool {
        self.verdict.is_ok()
    }

    /// K above K′ = 0.167 means compression steel would normally be provided.
    ///
    /// Informational only: the verdict is based on utilization alone.
    pub fn exceeds_balanced_limit(&self) -> bool {
        self.k > ec2::K_BALANCED
    }
}

/// Check a section using the recommended design settings.
///
/// This is a pure function suitable for LLM invocation.
///
/// # Returns
///
/// * `Ok(CapacityResult)` - Derived values and the utilization verdict
/// * `Err(CalcError)` - `InvalidGeometry`, `InputOutOfRange` or
///   `OverReinforcedSection` when the check cannot be evaluated
///
/// # Example
///
/// ```rust
/// use rc_core::calculations::section_capacity::{calculate, RebarLayer, SectionInput};
///
/// let input = SectionInput {
///     layer1: RebarLayer::new(0, 20.0),
///     layer2: RebarLayer::new(0, 20.0),
///     ..SectionInput::default()
/// };
///
/// let err = calculate(&input).unwrap_err();
/// assert_eq!(err.error_code(), "INVALID_GEOMETRY");
/// ```
pub fn calculate(input: &SectionInput) -> CalcResult<CapacityResult> {
    calculate_with_settings(input, &DesignSettings::default())
}

/// Check a section with explicit design settings.
pub fn calculate_with_settings(
    input: &SectionInput,
    settings: &DesignSettings,
) -> CalcResult<CapacityResult> {
    settings.validate()?;
    input.validate().inspect_err(|e| {
        tracing::warn!(error = %e, "input rejected");
    })?;

    if input.width_mm <= 0.0 {
        tracing::warn!(width_mm = input.width_mm, "section width is not positive");
        return Err(CalcError::invalid_geometry(format!(
            "Section width b = {} mm must be positive",
            input.width_mm
        )));
    }
    if input.fck_mpa <= 0.0 {
        return Err(CalcError::input_out_of_range(
            "fck_mpa",
            input.fck_mpa.to_string(),
            "Concrete strength must be positive",
        ));
    }
    if input.fyk_mpa <= 0.0 {
        return Err(CalcError::input_out_of_range(
            "fyk_mpa",
            input.fyk_mpa.to_string(),
            "Steel yield strength must be positive",
        ));
    }

    let section = input.derive_section().inspect_err(|e| {
        tracing::warn!(error = %e, "section geometry rejected");
    })?;
    let materials = MaterialDesignValues::new(input.fck_mpa, input.fyk_mpa, settings);

    let d = section.effective_depth_mm;
    let m_nmm: NewtonMillimeters = input.moment().into();

    let k = ec2::moment_coefficient(m_nmm.0, input.width_mm, d, input.fck_mpa);
    let z_mm = ec2::lever_arm(d, k).ok_or_else(|| {
        tracing::warn!(k, k_limit = ec2::K_LIMIT, "lever arm undefined");
        CalcError::over_reinforced(k, ec2::K_LIMIT)
    })?;

    let as_required_mm2 = ec2::required_steel_area(m_nmm.0, materials.fyd_mpa, z_mm);
    let as_provided_mm2 = section.as_total_mm2;
    let utilization = as_required_mm2 / as_provided_mm2;
    let verdict = Verdict::from_utilization(utilization);

    tracing::debug!(
        y_mm = section.centroid_mm,
        d_mm = d,
        fcd_mpa = materials.fcd_mpa,
        fyd_mpa = materials.fyd_mpa,
        k,
        z_mm,
        as_required_mm2,
        as_provided_mm2,
        utilization,
        %verdict,
        "section check complete"
    );

    Ok(CapacityResult {
        section,
        materials,
        k,
        z_mm,
        as_required_mm2,
        as_provided_mm2,
        utilization,
        verdict,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reference_section() -> SectionInput {
        SectionInput::default()
    }

    #[test]
    fn test_layer_areas() {
        let section = reference_section().derive_section().unwrap();

        // 6φ20 = 1884.96, 2φ20 = 628.32
        assert!((section.as1_mm2 - 1884.96).abs() < 0.01);
        assert!((section.as2_mm2 - 628.32).abs() < 0.01);
        assert!((section.as_total_mm2 - 2513.27).abs() < 0.01);
    }

    #[test]
    fn test_layer_centroids() {
        let section = reference_section().derive_section().unwrap();

        // y1 = 65 + 16 + 10 = 91, y2 = 91 + 70 = 161
        assert!((section.y1_mm - 91.0).abs() < 1e-9);
        assert!((section.y2_mm - 161.0).abs() < 1e-9);

        // y = (91·3 + 161·1) / 4 = 108.5 (layer 1 holds three times the bars of layer 2)
        assert!((section.centroid_mm - 108.5).abs() < 1e-9);
        assert!((section.effective_depth_mm - 1091.5).abs() < 1e-9);
        assert!((section.gross_area_mm2 - 1.2e6).abs() < 1e-6);
    }

    #[test]
    fn test_material_design_values() {
        let result = calculate(&reference_section()).unwrap();
        let m = result.materials;

        assert!((m.fcd_mpa - 19.833).abs() < 0.001);
        assert!((m.fyd_mpa - 434.783).abs() < 0.001);
        assert!((m.ec_mpa - 130_153.76).abs() < 0.01);
        assert_eq!(m.ecd_mpa, m.ec_mpa);
        assert_eq!(m.es_mpa, 200_000.0);
    }

    #[test]
    fn test_reference_capacity() {
        let result = calculate(&reference_section()).unwrap();

        assert!((result.k - 0.023982).abs() < 1e-6);
        // Uncapped z = 1067.89 > 0.95d = 1036.925, so the cap governs
        assert!((result.z_mm - 1036.925).abs() < 1e-6);
        assert!((result.as_required_mm2 - 2218.10).abs() < 0.01);
        assert!((result.utilization - 0.88255).abs() < 1e-4);
        assert_eq!(result.verdict, Verdict::Ok);
        assert!(result.passes());
        assert!(!result.exceeds_balanced_limit());
    }

    #[test]
    fn test_utilization_is_ratio() {
        let result = calculate(&reference_section()).unwrap();
        assert_eq!(result.utilization, result.as_required_mm2 / result.as_provided_mm2);
        assert_eq!(result.as_provided_mm2, result.section.as_total_mm2);
    }

    #[test]
    fn test_overstressed_section_is_not_ok() {
        let input = SectionInput {
            moment_knm: 2000.0,
            ..reference_section()
        };
        let result = calculate(&input).unwrap();
        assert!(result.utilization > 1.0);
        assert_eq!(result.verdict, Verdict::NotOk);
        assert!(!result.passes());
    }

    #[test]
    fn test_no_rebar_is_invalid_geometry() {
        let input = SectionInput {
            layer1: RebarLayer::new(0, 20.0),
            layer2: RebarLayer::new(0, 20.0),
            ..reference_section()
        };
        match calculate(&input) {
            Err(CalcError::InvalidGeometry { reason }) => assert!(reason.contains("zero")),
            other => panic!("expected InvalidGeometry, got {:?}", other),
        }
    }

    #[test]
    fn test_zero_diameter_is_invalid_geometry() {
        let input = SectionInput {
            layer1: RebarLayer::new(6, 0.0),
            layer2: RebarLayer::new(2, 0.0),
            ..reference_section()
        };
        assert_eq!(calculate(&input).unwrap_err().error_code(), "INVALID_GEOMETRY");
    }

    #[test]
    fn test_single_layer() {
        let input = SectionInput {
            layer2: RebarLayer::new(0, 0.0),
            ..reference_section()
        };
        let result = calculate(&input).unwrap();
        assert!((result.section.centroid_mm - 91.0).abs() < 1e-9);
        assert!((result.section.effective_depth_mm - 1109.0).abs() < 1e-9);
    }

    #[test]
    fn test_excessive_moment_is_over_reinforced() {
        let input = SectionInput {
            moment_knm: 15_000.0,
            ..reference_section()
        };
        match calculate(&input) {
            Err(CalcError::OverReinforcedSection { k, k_limit }) => {
                assert!(k * ec2::LEVER_ARM_K_FACTOR > 1.0);
                assert!((k_limit - 1.0 / 3.53).abs() < 1e-12);
            }
            other => panic!("expected OverReinforcedSection, got {:?}", other),
        }
    }

    #[test]
    fn test_section_too_shallow() {
        let input = SectionInput {
            height_mm: 100.0,
            ..reference_section()
        };
        assert_eq!(calculate(&input).unwrap_err().error_code(), "INVALID_GEOMETRY");
    }

    #[test]
    fn test_zero_width_and_strengths() {
        let zero_width = SectionInput {
            width_mm: 0.0,
            ..reference_section()
        };
        assert_eq!(calculate(&zero_width).unwrap_err().error_code(), "INVALID_GEOMETRY");

        let zero_fck = SectionInput {
            fck_mpa: 0.0,
            ..reference_section()
        };
        assert_eq!(calculate(&zero_fck).unwrap_err().error_code(), "INPUT_OUT_OF_RANGE");

        let zero_fyk = SectionInput {
            fyk_mpa: 0.0,
            ..reference_section()
        };
        assert_eq!(calculate(&zero_fyk).unwrap_err().error_code(), "INPUT_OUT_OF_RANGE");
    }

    #[test]
    fn test_zero_moment() {
        let input = SectionInput {
            moment_knm: 0.0,
            ..reference_section()
        };
        let result = calculate(&input).unwrap();
        assert_eq!(result.k, 0.0);
        assert_eq!(result.as_required_mm2, 0.0);
        assert_eq!(result.verdict, Verdict::Ok);
    }

    #[test]
    fn test_validate_rejects_negative() {
        let input = SectionInput {
            cover_mm: -5.0,
            ..reference_section()
        };
        match input.validate() {
            Err(CalcError::InputOutOfRange { field, .. }) => assert_eq!(field, "cover_mm"),
            other => panic!("expected InputOutOfRange, got {:?}", other),
        }
        assert!(reference_section().validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_nan() {
        let input = SectionInput {
            moment_knm: f64::NAN,
            ..reference_section()
        };
        assert_eq!(input.validate().unwrap_err().error_code(), "INPUT_OUT_OF_RANGE");
    }

    #[test]
    fn test_calculate_rejects_nan_geometry() {
        let input = SectionInput {
            cover_mm: f64::NAN,
            ..reference_section()
        };
        match calculate(&input) {
            Err(CalcError::InputOutOfRange { field, .. }) => assert_eq!(field, "cover_mm"),
            other => panic!("expected InputOutOfRange, got {:?}", other),
        }
    }

    #[test]
    fn test_calculate_rejects_negative_moment() {
        let input = SectionInput {
            moment_knm: -1000.0,
            ..reference_section()
        };
        match calculate(&input) {
            Err(CalcError::InputOutOfRange { field, .. }) => assert_eq!(field, "moment_knm"),
            other => panic!("expected InputOutOfRange, got {:?}", other),
        }
    }

    #[test]
    fn test_custom_settings() {
        let settings = DesignSettings {
            alpha_cc: 1.0,
            gamma_s: 1.0,
            ..DesignSettings::default()
        };
        let result = calculate_with_settings(&reference_section(), &settings).unwrap();
        assert!((result.materials.fyd_mpa - 500.0).abs() < 1e-9);
        assert!((result.materials.fcd_mpa - 35.0 / 1.5).abs() < 1e-9);

        let default = calculate(&reference_section()).unwrap();
        assert!(result.as_required_mm2 < default.as_required_mm2);
    }

    #[test]
    fn test_invalid_settings_rejected() {
        let settings = DesignSettings {
            gamma_c: 0.0,
            ..DesignSettings::default()
        };
        let err = calculate_with_settings(&reference_section(), &settings).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_SETTINGS");
    }

    #[test]
    fn test_verdict_boundary() {
        assert_eq!(Verdict::from_utilization(1.0), Verdict::Ok);
        assert_eq!(Verdict::from_utilization(1.0 + 1e-12), Verdict::NotOk);
        assert_eq!(Verdict::NotOk.to_string(), "Not OK");
    }

    #[test]
    fn test_serialization_roundtrip() {
        let input = reference_section();
        let json = serde_json::to_string_pretty(&input).unwrap();
        let roundtrip: SectionInput = serde_json::from_str(&json).unwrap();
        assert_eq!(input, roundtrip);
    }

    #[test]
    fn test_result_serialization() {
        let result = calculate(&reference_section()).unwrap();
        let json = serde_json::to_string_pretty(&result).unwrap();

        assert!(json.contains("as_required_mm2"));
        assert!(json.contains("effective_depth_mm"));
        assert!(json.contains("\"verdict\": \"OK\""));
    }

    #[test]
    fn test_result_json_keys_match_documented_shape() {
        let result = calculate(&reference_section()).unwrap();
        let value = serde_json::to_value(&result).unwrap();
        let mut keys: Vec<&str> = value
            .as_object()
            .unwrap()
            .keys()
            .map(String::as_str)
            .collect();
        keys.sort_unstable();
        assert_eq!(
            keys,
            [
                "as_provided_mm2",
                "as_required_mm2",
                "k",
                "materials",
                "section",
                "utilization",
                "verdict",
                "z_mm",
            ]
        );
        assert!(value["section"]["centroid_mm"].is_number());
        assert!(value["materials"]["fcd_mpa"].is_number());

        let not_ok = serde_json::to_value(Verdict::NotOk).unwrap();
        assert_eq!(not_ok, "Not OK");
    }
}
