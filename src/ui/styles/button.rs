// SPDX-License-Identifier: MPL-2.0
//! Centralized button styles.

use crate::ui::design_tokens::{
    palette::{self, WHITE},
    radius, shadow,
};
use iced::widget::button;
use iced::{Background, Border, Theme};

/// Style pour bouton primaire (action principale).
pub fn primary(_theme: &Theme, status: button::Status) -> button::Style {
    match status {
        button::Status::Active | button::Status::Pressed => button::Style {
            background: Some(Background::Color(palette::PRIMARY_500)),
            text_color: WHITE,
            border: Border {
                color: palette::PRIMARY_600,
                width: 1.0,
                radius: radius::MD.into(),
            },
            shadow: shadow::SM,
            snap: true,
        },
        button::Status::Hovered => button::Style {
            background: Some(Background::Color(palette::PRIMARY_400)),
            text_color: WHITE,
            border: Border {
                color: palette::PRIMARY_500,
                width: 1.0,
                radius: radius::MD.into(),
            },
            shadow: shadow::MD,
            snap: true,
        },
        button::Status::Disabled => disabled_style(),
    }
}

/// Style pour bouton désactivé (post non disponible, envoi en cours).
pub fn disabled(_theme: &Theme, _status: button::Status) -> button::Style {
    disabled_style()
}

fn disabled_style() -> button::Style {
    button::Style {
        background: Some(Background::Color(palette::GRAY_200)),
        text_color: palette::GRAY_400,
        border: Border {
            radius: radius::MD.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Pill-shaped mode selector button; highlighted when its mode is active.
pub fn mode(selected: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme: &Theme, status: button::Status| {
        let (background, border_color) = if selected {
            (palette::PRIMARY_100, palette::PRIMARY_500)
        } else {
            match status {
                button::Status::Hovered => (palette::PRIMARY_100, palette::PRIMARY_400),
                _ => (palette::GRAY_100, palette::GRAY_200),
            }
        };

        button::Style {
            background: Some(Background::Color(background)),
            text_color: palette::PRIMARY_600,
            border: Border {
                color: border_color,
                width: 1.0,
                radius: radius::FULL.into(),
            },
            ..Default::default()
        }
    }
}

/// Green capture trigger overlayed on the live photo surface.
pub fn capture(_theme: &Theme, status: button::Status) -> button::Style {
    accent(palette::CAPTURE_GREEN, status)
}

/// Red control used for stop-recording, close and remove actions.
pub fn danger(_theme: &Theme, status: button::Status) -> button::Style {
    accent(palette::RECORD_RED, status)
}

fn accent(color: iced::Color, status: button::Status) -> button::Style {
    let background = match status {
        button::Status::Hovered | button::Status::Pressed => iced::Color {
            a: 0.85,
            ..color
        },
        _ => color,
    };

    button::Style {
        background: Some(Background::Color(background)),
        text_color: WHITE,
        border: Border {
            radius: radius::SM.into(),
            ..Default::default()
        },
        shadow: shadow::SM,
        snap: true,
    }
}
