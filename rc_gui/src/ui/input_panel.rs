//! Input Panel (Left)
//!
//! Displays:
//! - Section geometry (width, height, cover, link, layer spacing)
//! - Two tension reinforcement layers (count and bar diameter)
//! - Material selection (concrete class, steel grade, or typed strengths)
//! - Design bending moment
//! - Calculate / Reset buttons

use iced::widget::{button, column, container, pick_list, row, scrollable, text, text_input, Space};
use iced::{Alignment, Element, Length, Padding};

use rc_core::materials::{is_standard_diameter, ConcreteClass, ReinforcementGrade};

use crate::form::Field;
use crate::{App, Message};

const LABEL_WIDTH: f32 = 190.0;

/// Render the input panel
///
/// `ratio` is this panel's share of the window width.
pub fn view_input_panel(app: &App, ratio: f32) -> Element<'_, Message> {
    let form = &app.form;

    let geometry = column![
        text("Section").size(14),
        Space::new().height(4),
        labeled_input("Width b (mm):", &form.width, |s| {
            Message::FieldChanged(Field::Width, s)
        }),
        labeled_input("Height h (mm):", &form.height, |s| {
            Message::FieldChanged(Field::Height, s)
        }),
        labeled_input("Cover (mm):", &form.cover, |s| {
            Message::FieldChanged(Field::Cover, s)
        }),
        labeled_input("Shear link diameter (mm):", &form.link_diameter, |s| {
            Message::FieldChanged(Field::LinkDiameter, s)
        }),
        labeled_input("Distance between 2 layers (mm):", &form.layer_spacing, |s| {
            Message::FieldChanged(Field::LayerSpacing, s)
        }),
    ]
    .spacing(6);

    let reinforcement = column![
        text("Tension Reinforcement").size(14),
        Space::new().height(4),
        layer_row(
            "Layer 1 (outer):",
            &form.layer1_count,
            &form.layer1_diameter,
            Field::Layer1Count,
            Field::Layer1Diameter,
        ),
        layer_row(
            "Layer 2 (inner):",
            &form.layer2_count,
            &form.layer2_diameter,
            Field::Layer2Count,
            Field::Layer2Diameter,
        ),
    ]
    .spacing(6);

    let materials = column![
        text("Materials").size(14),
        Space::new().height(4),
        row![
            text("Concrete class:").size(11).width(Length::Fixed(LABEL_WIDTH)),
            pick_list(
                &ConcreteClass::ALL[..],
                app.concrete_class,
                Message::ConcreteClassSelected
            )
            .placeholder("custom")
            .width(Length::Fixed(110.0))
            .text_size(11),
        ]
        .align_y(Alignment::Center),
        labeled_input("fck (MPa):", &form.fck, |s| Message::FieldChanged(Field::Fck, s)),
        row![
            text("Steel grade:").size(11).width(Length::Fixed(LABEL_WIDTH)),
            pick_list(
                &ReinforcementGrade::ALL[..],
                app.reinforcement_grade,
                Message::ReinforcementGradeSelected
            )
            .placeholder("custom")
            .width(Length::Fixed(110.0))
            .text_size(11),
        ]
        .align_y(Alignment::Center),
        labeled_input("fyk (MPa):", &form.fyk, |s| Message::FieldChanged(Field::Fyk, s)),
    ]
    .spacing(6);

    let loading = column![
        text("Loading").size(14),
        Space::new().height(4),
        labeled_input("Bending moment M (kN·m):", &form.moment, |s| {
            Message::FieldChanged(Field::Moment, s)
        }),
    ]
    .spacing(6);

    let actions = row![
        button(text("Calculate").size(12))
            .on_press(Message::Calculate)
            .padding(Padding::from([6, 16]))
            .style(button::primary),
        button(text("Reset defaults").size(12))
            .on_press(Message::ResetDefaults)
            .padding(Padding::from([6, 12]))
            .style(button::secondary),
    ]
    .spacing(8);

    let panel = column![
        geometry,
        Space::new().height(12),
        reinforcement,
        Space::new().height(12),
        materials,
        Space::new().height(12),
        loading,
        Space::new().height(16),
        actions,
    ]
    .padding(8);

    let portion = (ratio * 100.0) as u16;

    container(scrollable(panel))
        .width(Length::FillPortion(portion))
        .height(Length::Fill)
        .style(container::bordered_box)
        .padding(5)
        .into()
}

/// One reinforcement layer: "[count] × ø [diameter] mm", with a hint for
/// diameters outside the stock series.
fn layer_row<'a>(
    label: &'a str,
    count: &'a str,
    diameter: &'a str,
    count_field: Field,
    diameter_field: Field,
) -> Element<'a, Message> {
    let hint = match diameter.trim().parse::<f64>() {
        Ok(d) if d > 0.0 && !is_standard_diameter(d) => "non-standard diameter",
        _ => "",
    };

    row![
        text(label).size(11).width(Length::Fixed(LABEL_WIDTH)),
        text_input("0", count)
            .on_input(move |s| Message::FieldChanged(count_field, s))
            .width(Length::Fixed(50.0))
            .padding(4)
            .size(11),
        text(" × ø").size(11),
        text_input("mm", diameter)
            .on_input(move |s| Message::FieldChanged(diameter_field, s))
            .width(Length::Fixed(60.0))
            .padding(4)
            .size(11),
        text(" mm").size(11),
        Space::new().width(8),
        text(hint).size(10).color([0.6, 0.3, 0.0]),
    ]
    .align_y(Alignment::Center)
    .into()
}

fn labeled_input<'a>(
    label: &'a str,
    value: &'a str,
    on_change: impl Fn(String) -> Message + 'a,
) -> Element<'a, Message> {
    row![
        text(label).size(11).width(Length::Fixed(LABEL_WIDTH)),
        text_input("", value)
            .on_input(on_change)
            .width(Length::Fill)
            .padding(4)
            .size(11),
    ]
    .align_y(Alignment::Center)
    .into()
}
