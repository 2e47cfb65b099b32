//! Results Panel (Right Side)
//!
//! Shows the report lines of the last successful Calculate, the error of a
//! failed one, or a hint when nothing has been computed yet.

use iced::widget::{column, container, scrollable, text, Column, Space};
use iced::{Element, Length};

use rc_core::report::{render, render_error, LineStyle, ReportLine};

use crate::{App, Message, Outcome};

const SUCCESS_COLOR: [f32; 3] = [0.2, 0.6, 0.2];
const ALERT_COLOR: [f32; 3] = [0.8, 0.2, 0.2];

/// Render the results panel
///
/// Uses the complementary share of `input_ratio`.
pub fn view_results_panel(app: &App, input_ratio: f32) -> Element<'_, Message> {
    let content: Column<'_, Message> = match &app.outcome {
        Some(Outcome::Computed(result)) => view_lines(render(result)),
        Some(Outcome::Failed(error)) => view_lines(render_error(error)),
        None => column![
            text("Results").size(14),
            Space::new().height(8),
            text("Enter the section and press Calculate").size(12).color([0.5, 0.5, 0.5]),
        ],
    };

    let portion = ((1.0 - input_ratio) * 100.0) as u16;

    container(scrollable(content.padding(8)))
        .width(Length::FillPortion(portion))
        .height(Length::Fill)
        .style(container::bordered_box)
        .padding(5)
        .into()
}

fn view_lines(lines: Vec<ReportLine>) -> Column<'static, Message> {
    lines
        .into_iter()
        .enumerate()
        .fold(Column::new().spacing(4), |col, (i, line)| match line.style {
            LineStyle::Heading => {
                let col = if i > 0 { col.push(Space::new().height(10)) } else { col };
                col.push(text(line.text).size(14))
            }
            LineStyle::Normal => col.push(text(line.text).size(12)),
            LineStyle::Success => col.push(text(line.text).size(13).color(SUCCESS_COLOR)),
            LineStyle::Alert => col.push(text(line.text).size(13).color(ALERT_COLOR)),
        })
}
