// SPDX-License-Identifier: MPL-2.0
//! Root layout: top bar over the map, composer floating above it.

use super::{App, Message};
use crate::ui::design_tokens::{sizing, spacing};
use crate::ui::{banner, navbar};
use iced::alignment::{Horizontal, Vertical};
use iced::widget::{Column, Container, Stack};
use iced::{Element, Length};

impl App {
    pub fn view(&self) -> Element<'_, Message> {
        let top_bar: Element<'_, Message> = if self.posted {
            navbar::view(navbar::ViewContext {
                download_url: &self.config.navbar.download_url,
                compact: false,
            })
            .map(Message::Navbar)
        } else {
            banner::view()
        };

        let map = self.map.view::<Message>();

        let overlay = Container::new(self.composer.view().map(Message::Composer))
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(Horizontal::Center)
            .align_y(Vertical::Bottom)
            .padding(spacing::MD);

        let body = Stack::new().push(map).push(overlay);

        Column::new()
            .push(
                Container::new(top_bar)
                    .width(Length::Fill)
                    .height(Length::Fixed(sizing::TOP_BAR_HEIGHT)),
            )
            .push(
                Container::new(body)
                    .width(Length::Fill)
                    .height(Length::Fill),
            )
            .into()
    }
}
