//! # Report Formatting
//!
//! Turns a [`CapacityResult`] into display lines for the presentation layer.
//! Each line carries a [`LineStyle`] so a GUI can color the verdict lines
//! and a terminal can tag them.
//!
//! ## Example
//!
//! ```rust
//! use rc_core::calculations::section_capacity::{calculate, SectionInput};
//! use rc_core::report::{render, to_plain_text};
//!
//! let result = calculate(&SectionInput::default()).unwrap();
//! let text = to_plain_text(&render(&result));
//! assert!(text.contains("Conclusion: OK"));
//! ```

use serde::{Deserialize, Serialize};

use crate::calculations::section_capacity::CapacityResult;
use crate::equations::ec2::K_BALANCED;
use crate::errors::CalcError;

/// How a line should be presented
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LineStyle {
    Heading,
    Normal,
    /// Affirmative styling (adequate section)
    Success,
    /// Alert styling (inadequate section, errors, advisories)
    Alert,
}

/// One line of formatted output
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportLine {
    pub text: String,
    pub style: LineStyle,
}

impl ReportLine {
    pub fn new(text: impl Into<String>, style: LineStyle) -> Self {
        ReportLine {
            text: text.into(),
            style,
        }
    }

    pub fn heading(text: impl Into<String>) -> Self {
        Self::new(text, LineStyle::Heading)
    }

    pub fn normal(text: impl Into<String>) -> Self {
        Self::new(text, LineStyle::Normal)
    }
}

/// Render the calculation and results sections.
pub fn render(result: &CapacityResult) -> Vec<ReportLine> {
    let verdict_style = if result.passes() {
        LineStyle::Success
    } else {
        LineStyle::Alert
    };

    let mut lines = vec![
        ReportLine::heading("Calculation"),
        ReportLine::normal(format!(
            "The value of the design compressive strength fcd: {:.2} MPa",
            result.materials.fcd_mpa
        )),
        ReportLine::normal(format!(
            "Design yield strength of reinforcement fyd: {:.2} MPa",
            result.materials.fyd_mpa
        )),
        ReportLine::normal(format!(
            "Distance from tension fiber to centroid of tension bars y: {:.2} mm",
            result.section.centroid_mm
        )),
        ReportLine::normal(format!(
            "Effective depth d: {:.2} mm",
            result.section.effective_depth_mm
        )),
        ReportLine::normal(format!("Lever arm of internal forces z: {:.2} mm", result.z_mm)),
        ReportLine::normal(format!("K: {:.3}", result.k)),
    ];

    if result.exceeds_balanced_limit() {
        lines.push(ReportLine::new(
            format!(
                "K exceeds K' = {:.3}: compression reinforcement is normally required",
                K_BALANCED
            ),
            LineStyle::Alert,
        ));
    }

    lines.extend([
        ReportLine::heading("Results"),
        ReportLine::normal(format!("As required: {:.2} mm²", result.as_required_mm2)),
        ReportLine::normal(format!("As provided: {:.2} mm²", result.as_provided_mm2)),
        ReportLine::new(
            format!("Utilization: {:.2}%", result.utilization * 100.0),
            verdict_style,
        ),
        ReportLine::new(format!("Conclusion: {}", result.verdict), verdict_style),
    ]);

    lines
}

/// Render a failed calculation.
pub fn render_error(error: &CalcError) -> Vec<ReportLine> {
    let title = match error {
        CalcError::InvalidGeometry { .. } => "Invalid section geometry",
        CalcError::OverReinforcedSection { .. } => "Section cannot carry the moment",
        CalcError::InputOutOfRange { .. } => "Input out of range",
        CalcError::InvalidSettings { .. } => "Invalid design settings",
        CalcError::FileError { .. } | CalcError::SerializationError { .. } => "Input error",
    };
    vec![
        ReportLine::heading(title),
        ReportLine::new(error.to_string(), LineStyle::Alert),
    ]
}

/// Join lines for a terminal, tagging styled lines.
pub fn to_plain_text(lines: &[ReportLine]) -> String {
    lines
        .iter()
        .map(|line| match line.style {
            LineStyle::Heading => format!("\n== {} ==", line.text),
            LineStyle::Normal => format!("  {}", line.text),
            LineStyle::Success => format!("  {} [OK]", line.text),
            LineStyle::Alert => format!("  {} [!]", line.text),
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculations::section_capacity::{calculate, SectionInput};

    fn find<'a>(lines: &'a [ReportLine], prefix: &str) -> &'a ReportLine {
        lines
            .iter()
            .find(|l| l.text.starts_with(prefix))
            .unwrap_or_else(|| panic!("no line starting with {:?}", prefix))
    }

    #[test]
    fn test_reference_report_values() {
        let result = calculate(&SectionInput::default()).unwrap();
        let lines = render(&result);

        assert!(find(&lines, "The value of the design compressive").text.contains("19.83 MPa"));
        assert!(find(&lines, "Design yield strength").text.contains("434.78 MPa"));
        assert!(find(&lines, "Distance from tension fiber").text.contains("108.50 mm"));
        assert!(find(&lines, "Effective depth").text.contains("1091.50 mm"));
        assert!(find(&lines, "Lever arm").text.contains("1036.92 mm"));
        assert_eq!(find(&lines, "K:").text, "K: 0.024");
        assert!(find(&lines, "As provided").text.contains("2513.27"));
        assert_eq!(find(&lines, "Utilization").text, "Utilization: 88.26%");
    }

    #[test]
    fn test_verdict_styling() {
        let ok = render(&calculate(&SectionInput::default()).unwrap());
        assert_eq!(find(&ok, "Conclusion").style, LineStyle::Success);
        assert_eq!(find(&ok, "Conclusion").text, "Conclusion: OK");

        let input = SectionInput {
            moment_knm: 2000.0,
            ..SectionInput::default()
        };
        let not_ok = render(&calculate(&input).unwrap());
        assert_eq!(find(&not_ok, "Conclusion").style, LineStyle::Alert);
        assert_eq!(find(&not_ok, "Utilization").style, LineStyle::Alert);
        assert_eq!(find(&not_ok, "Conclusion").text, "Conclusion: Not OK");
    }

    #[test]
    fn test_balanced_limit_advisory() {
        let plain = render(&calculate(&SectionInput::default()).unwrap());
        assert!(!plain.iter().any(|l| l.text.starts_with("K exceeds")));

        // K ≈ 0.2: past K' but still below the lever-arm limit
        let input = SectionInput {
            moment_knm: 8300.0,
            layer1: crate::calculations::RebarLayer::new(20, 32.0),
            ..SectionInput::default()
        };
        let result = calculate(&input).unwrap();
        assert!(result.exceeds_balanced_limit());
        let lines = render(&result);
        assert_eq!(find(&lines, "K exceeds").style, LineStyle::Alert);
    }

    #[test]
    fn test_render_error() {
        let lines = render_error(&CalcError::invalid_geometry("Total steel area is zero"));
        assert_eq!(lines[0].text, "Invalid section geometry");
        assert_eq!(lines[1].style, LineStyle::Alert);
        assert!(lines[1].text.contains("Total steel area is zero"));
    }

    #[test]
    fn test_plain_text_tags() {
        let text = to_plain_text(&render(&calculate(&SectionInput::default()).unwrap()));
        assert!(text.contains("== Calculation =="));
        assert!(text.contains("Conclusion: OK [OK]"));
    }
}
