//! Form state for the section editor.
//!
//! Text fields are kept as the strings the user typed; they are only parsed
//! into a [`SectionInput`] when Calculate is pressed, so half-typed values
//! never reach the calculator.

use rc_core::materials::{ConcreteClass, ReinforcementGrade};
use rc_core::{CalcError, CalcResult, RebarLayer, SectionInput};

/// Identifies one text field of the form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Width,
    Height,
    Cover,
    LayerSpacing,
    Layer1Count,
    Layer1Diameter,
    Layer2Count,
    Layer2Diameter,
    LinkDiameter,
    Fck,
    Fyk,
    Moment,
}

impl Field {
    /// Field name used in error messages (matches the JSON input keys)
    pub fn key(&self) -> &'static str {
        match self {
            Field::Width => "width_mm",
            Field::Height => "height_mm",
            Field::Cover => "cover_mm",
            Field::LayerSpacing => "layer_spacing_mm",
            Field::Layer1Count => "layer1.count",
            Field::Layer1Diameter => "layer1.diameter_mm",
            Field::Layer2Count => "layer2.count",
            Field::Layer2Diameter => "layer2.diameter_mm",
            Field::LinkDiameter => "link_diameter_mm",
            Field::Fck => "fck_mpa",
            Field::Fyk => "fyk_mpa",
            Field::Moment => "moment_knm",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SectionForm {
    pub width: String,
    pub height: String,
    pub cover: String,
    pub layer_spacing: String,
    pub layer1_count: String,
    pub layer1_diameter: String,
    pub layer2_count: String,
    pub layer2_diameter: String,
    pub link_diameter: String,
    pub fck: String,
    pub fyk: String,
    pub moment: String,
}

impl Default for SectionForm {
    fn default() -> Self {
        SectionForm::from_input(&SectionInput::default())
    }
}

impl SectionForm {
    /// Fill the form from an existing input (integers without decimals,
    /// strengths with one decimal, moment with two, as the fields display them).
    pub fn from_input(input: &SectionInput) -> Self {
        SectionForm {
            width: format!("{}", input.width_mm),
            height: format!("{}", input.height_mm),
            cover: format!("{}", input.cover_mm),
            layer_spacing: format!("{}", input.layer_spacing_mm),
            layer1_count: input.layer1.count.to_string(),
            layer1_diameter: format!("{}", input.layer1.diameter_mm),
            layer2_count: input.layer2.count.to_string(),
            layer2_diameter: format!("{}", input.layer2.diameter_mm),
            link_diameter: format!("{}", input.link_diameter_mm),
            fck: format!("{:.1}", input.fck_mpa),
            fyk: format!("{:.1}", input.fyk_mpa),
            moment: format!("{:.2}", input.moment_knm),
        }
    }

    pub fn value(&self, field: Field) -> &str {
        match field {
            Field::Width => &self.width,
            Field::Height => &self.height,
            Field::Cover => &self.cover,
            Field::LayerSpacing => &self.layer_spacing,
            Field::Layer1Count => &self.layer1_count,
            Field::Layer1Diameter => &self.layer1_diameter,
            Field::Layer2Count => &self.layer2_count,
            Field::Layer2Diameter => &self.layer2_diameter,
            Field::LinkDiameter => &self.link_diameter,
            Field::Fck => &self.fck,
            Field::Fyk => &self.fyk,
            Field::Moment => &self.moment,
        }
    }

    pub fn set(&mut self, field: Field, value: String) {
        let slot = match field {
            Field::Width => &mut self.width,
            Field::Height => &mut self.height,
            Field::Cover => &mut self.cover,
            Field::LayerSpacing => &mut self.layer_spacing,
            Field::Layer1Count => &mut self.layer1_count,
            Field::Layer1Diameter => &mut self.layer1_diameter,
            Field::Layer2Count => &mut self.layer2_count,
            Field::Layer2Diameter => &mut self.layer2_diameter,
            Field::LinkDiameter => &mut self.link_diameter,
            Field::Fck => &mut self.fck,
            Field::Fyk => &mut self.fyk,
            Field::Moment => &mut self.moment,
        };
        *slot = value;
    }

    pub fn apply_concrete_class(&mut self, class: ConcreteClass) {
        self.fck = format!("{:.1}", class.fck().0);
    }

    pub fn apply_reinforcement_grade(&mut self, grade: ReinforcementGrade) {
        self.fyk = format!("{:.1}", grade.fyk().0);
    }

    fn quantity(&self, field: Field) -> CalcResult<f64> {
        let text = self.value(field).trim();
        let value: f64 = text
            .parse()
            .map_err(|_| CalcError::input_out_of_range(field.key(), text, "Not a number"))?;
        if !value.is_finite() || value < 0.0 {
            return Err(CalcError::input_out_of_range(
                field.key(),
                text,
                "Value must be a non-negative number",
            ));
        }
        Ok(value)
    }

    fn count(&self, field: Field) -> CalcResult<u32> {
        let text = self.value(field).trim();
        text.parse().map_err(|_| {
            CalcError::input_out_of_range(field.key(), text, "Bar count must be a whole number ≥ 0")
        })
    }

    /// Parse every field into an immutable input snapshot.
    pub fn to_input(&self) -> CalcResult<SectionInput> {
        let input = SectionInput {
            width_mm: self.quantity(Field::Width)?,
            height_mm: self.quantity(Field::Height)?,
            cover_mm: self.quantity(Field::Cover)?,
            link_diameter_mm: self.quantity(Field::LinkDiameter)?,
            layer1: RebarLayer::new(
                self.count(Field::Layer1Count)?,
                self.quantity(Field::Layer1Diameter)?,
            ),
            layer2: RebarLayer::new(
                self.count(Field::Layer2Count)?,
                self.quantity(Field::Layer2Diameter)?,
            ),
            layer_spacing_mm: self.quantity(Field::LayerSpacing)?,
            fck_mpa: self.quantity(Field::Fck)?,
            fyk_mpa: self.quantity(Field::Fyk)?,
            moment_knm: self.quantity(Field::Moment)?,
        };
        input.validate()?;
        Ok(input)
    }
}
