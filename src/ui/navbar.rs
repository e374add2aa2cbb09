// SPDX-License-Identifier: MPL-2.0
//! Navigation bar shown after the first successful post.
//!
//! Stateless: parameterized by the download link and a compact-style flag.
//! The action button asks the parent to open the link in the system browser.

use crate::ui::design_tokens::{sizing, spacing};
use crate::ui::styles;
use iced::alignment::Vertical;
use iced::widget::{button, Container, Row, Text};
use iced::{Element, Length};

/// Contextual data needed to render the navbar.
pub struct ViewContext<'a> {
    /// Link opened by the call-to-action button.
    pub download_url: &'a str,
    /// Tighter paddings for narrow windows.
    pub compact: bool,
}

/// Messages emitted by the navbar.
#[derive(Debug, Clone)]
pub enum Message {
    OpenDownload,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone)]
pub enum Event {
    None,
    OpenLink(String),
}

/// Process a navbar message and return the corresponding event.
pub fn update(message: Message, download_url: &str) -> Event {
    match message {
        Message::OpenDownload => Event::OpenLink(download_url.to_string()),
    }
}

/// Render the navigation bar.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let padding = if ctx.compact { spacing::SM } else { spacing::LG };

    let pitch = Text::new("If you want to see the posts around you, download the app").size(16);

    let download_button = button(Text::new("Download App"))
        .on_press(Message::OpenDownload)
        .padding([spacing::XS, spacing::MD])
        .style(styles::button::primary);

    let row = Row::new()
        .spacing(spacing::MD)
        .align_y(Vertical::Center)
        .push(Container::new(pitch).width(Length::Fill))
        .push(download_button);

    Container::new(row)
        .width(Length::Fill)
        .height(Length::Fixed(sizing::TOP_BAR_HEIGHT))
        .align_y(Vertical::Center)
        .padding([0.0, padding])
        .style(styles::container::top_bar)
        .into()
}
