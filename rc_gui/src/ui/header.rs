//! Application header

use iced::widget::{row, text, Space};
use iced::{Alignment, Element, Length};

use crate::Message;

pub fn view_header(subtitle: &str) -> Element<'_, Message> {
    row![
        text("RC Section Checker").size(24),
        Space::new().width(Length::Fill),
        text(subtitle).size(13).color([0.5, 0.5, 0.5]),
    ]
    .align_y(Alignment::Center)
    .into()
}
