//! Interactive input collection.
//!
//! Every field shows its default in brackets; pressing Enter accepts it.
//! Text that does not parse, or a negative quantity, is reported and the
//! question is asked again. End of input accepts the remaining defaults;
//! terminal I/O failures are returned to the caller.

use std::io::{self, BufRead, Write};

use rc_core::materials::{ConcreteClass, ReinforcementGrade};
use rc_core::{CalcError, CalcResult, RebarLayer, SectionInput};

/// Parse a non-negative, finite number.
pub fn parse_quantity(field: &str, text: &str) -> CalcResult<f64> {
    let value: f64 = text.parse().map_err(|_| {
        CalcError::input_out_of_range(field, text, "Not a number")
    })?;
    if !value.is_finite() {
        return Err(CalcError::input_out_of_range(field, text, "Value must be a finite number"));
    }
    if value < 0.0 {
        return Err(CalcError::input_out_of_range(field, text, "Value cannot be negative"));
    }
    Ok(value)
}

/// Parse a bar count.
pub fn parse_count(field: &str, text: &str) -> CalcResult<u32> {
    text.parse().map_err(|_| {
        CalcError::input_out_of_range(field, text, "Bar count must be a whole number ≥ 0")
    })
}

/// Parse fck as a number or a concrete class name ("C35/45").
pub fn parse_fck(text: &str) -> CalcResult<f64> {
    if text.to_uppercase().starts_with('C') {
        return Ok(ConcreteClass::from_str_flexible(text)?.fck().0);
    }
    parse_quantity("fck_mpa", text)
}

/// Parse fyk as a number or a reinforcement grade ("B500B").
pub fn parse_fyk(text: &str) -> CalcResult<f64> {
    if text.to_uppercase().starts_with('B') {
        return Ok(ReinforcementGrade::from_str_flexible(text)?.fyk().0);
    }
    parse_quantity("fyk_mpa", text)
}

/// Ask for one value until it parses. EOF yields the default.
pub fn prompt_parsed<T, R, W, F>(
    reader: &mut R,
    writer: &mut W,
    label: &str,
    default: T,
    parse: F,
) -> io::Result<T>
where
    T: std::fmt::Display,
    R: BufRead,
    W: Write,
    F: Fn(&str) -> CalcResult<T>,
{
    loop {
        write!(writer, "{} [{}]: ", label, default)?;
        writer.flush()?;

        let mut line = String::new();
        if reader.read_line(&mut line)? == 0 {
            return Ok(default);
        }

        let text = line.trim();
        if text.is_empty() {
            return Ok(default);
        }

        match parse(text) {
            Ok(value) => return Ok(value),
            Err(e) => {
                tracing::debug!(label, input = text, error = %e, "rejected input");
                writeln!(writer, "  {}", e)?;
            }
        }
    }
}

/// Collect a full section description, field by field.
pub fn collect_input<R: BufRead, W: Write>(
    reader: &mut R,
    writer: &mut W,
) -> io::Result<SectionInput> {
    let d = SectionInput::default();

    let width_mm = prompt_quantity(reader, writer, "Width (mm)", d.width_mm, "width_mm")?;
    let height_mm = prompt_quantity(reader, writer, "Height (mm)", d.height_mm, "height_mm")?;
    let cover_mm = prompt_quantity(reader, writer, "Cover (mm)", d.cover_mm, "cover_mm")?;
    let layer_spacing_mm = prompt_quantity(
        reader,
        writer,
        "Distance between 2 layers (mm)",
        d.layer_spacing_mm,
        "layer_spacing_mm",
    )?;
    writeln!(writer)?;

    let layer1 = collect_layer(reader, writer, 1, d.layer1)?;
    let layer2 = collect_layer(reader, writer, 2, d.layer2)?;
    let link_diameter_mm = prompt_quantity(
        reader,
        writer,
        "Diameter of shear link (mm)",
        d.link_diameter_mm,
        "link_diameter_mm",
    )?;
    writeln!(writer)?;

    let fck_mpa = prompt_parsed(
        reader,
        writer,
        "Concrete strength fck (MPa or class, e.g. C35/45)",
        d.fck_mpa,
        parse_fck,
    )?;
    let fyk_mpa = prompt_parsed(
        reader,
        writer,
        "Steel yield strength fyk (MPa or grade, e.g. B500B)",
        d.fyk_mpa,
        parse_fyk,
    )?;
    let moment_knm =
        prompt_quantity(reader, writer, "Bending moment (kN·m)", d.moment_knm, "moment_knm")?;

    Ok(SectionInput {
        width_mm,
        height_mm,
        cover_mm,
        link_diameter_mm,
        layer1,
        layer2,
        layer_spacing_mm,
        fck_mpa,
        fyk_mpa,
        moment_knm,
    })
}

fn prompt_quantity<R: BufRead, W: Write>(
    reader: &mut R,
    writer: &mut W,
    label: &str,
    default: f64,
    field: &str,
) -> io::Result<f64> {
    prompt_parsed(reader, writer, label, default, |t| parse_quantity(field, t))
}

fn collect_layer<R: BufRead, W: Write>(
    reader: &mut R,
    writer: &mut W,
    index: u8,
    default: RebarLayer,
) -> io::Result<RebarLayer> {
    let count_label = format!("Number of rebars in Layer {}", index);
    let count_field = format!("layer{}.count", index);
    let count = prompt_parsed(reader, writer, &count_label, default.count, |t| {
        parse_count(&count_field, t)
    })?;

    let diameter_label = format!("Diameter of rebars in Layer {} (mm)", index);
    let diameter_field = format!("layer{}.diameter_mm", index);
    let diameter_mm =
        prompt_quantity(reader, writer, &diameter_label, default.diameter_mm, &diameter_field)?;

    Ok(RebarLayer::new(count, diameter_mm))
}
