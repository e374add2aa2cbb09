// SPDX-License-Identifier: MPL-2.0
//! Promotional top bar shown until the user's first post.

use crate::ui::design_tokens::{palette, sizing, spacing};
use crate::ui::styles;
use iced::alignment::Vertical;
use iced::widget::{Container, Text};
use iced::{Element, Length};

/// Render the pre-post top bar with the app wordmark.
pub fn view<'a, Message: 'a>() -> Element<'a, Message> {
    let wordmark = Text::new("Drop").size(24).color(palette::PRIMARY_600);

    Container::new(wordmark)
        .width(Length::Fill)
        .height(Length::Fixed(sizing::TOP_BAR_HEIGHT))
        .align_y(Vertical::Center)
        .padding([0.0, spacing::LG])
        .style(styles::container::top_bar)
        .into()
}
