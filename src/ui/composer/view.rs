// SPDX-License-Identifier: MPL-2.0
//! Composer card rendering.

use super::messages::Message;
use super::state::{Stage, State};
use crate::application::port::capture::CaptureError;
use crate::domain::post::{CapturedPhoto, CapturedVideo, Mode};
use crate::ui::design_tokens::{palette, sizing, spacing};
use crate::ui::styles;
use iced::alignment::{Horizontal, Vertical};
use iced::widget::{button, text_input, Column, Container, Row, Text};
use iced::{Element, Length};

impl State {
    /// Render the floating composer card.
    pub fn view(&self) -> Element<'_, Message> {
        let mut content = Column::new().spacing(spacing::SM).push(self.mode_row());

        content = match self.stage() {
            Stage::Idle => content.push(idle_hint()),
            Stage::PhotoCapturing { .. } => content.push(photo_capture_surface()),
            Stage::PhotoReview { photo, .. } => content.push(photo_preview(photo)),
            Stage::VideoArmed { .. } => content.push(video_capture_surface(false, 0)),
            Stage::VideoRecording { chunks, .. } => {
                content.push(video_capture_surface(true, chunks.len()))
            }
            Stage::VideoReview { video, .. } => content.push(video_preview(video)),
            Stage::TextEditing { body } => content.push(
                text_input("Write something...", body.as_str())
                    .on_input(Message::TextEdited)
                    .padding(spacing::XS),
            ),
            Stage::CaptureFailed { error, .. } => content.push(capture_error(error)),
        };

        if let Some(caption) = self.caption() {
            content = content.push(
                text_input("Enter caption...", caption.as_str())
                    .on_input(Message::CaptionEdited)
                    .padding(spacing::XS),
            );
        }

        content = content.push(self.post_button());

        Container::new(content)
            .width(Length::Fixed(sizing::COMPOSER_WIDTH))
            .padding(spacing::MD)
            .style(styles::container::card)
            .into()
    }

    fn mode_row(&self) -> Element<'_, Message> {
        let mode_button = |label: &'static str, mode: Mode| {
            button(Text::new(label))
                .on_press(Message::SelectMode(mode))
                .padding([spacing::XS, spacing::MD])
                .style(styles::button::mode(self.mode() == Some(mode)))
        };

        Row::new()
            .spacing(spacing::SM)
            .push(mode_button("Photo", Mode::Photo))
            .push(mode_button("Video", Mode::Video))
            .push(mode_button("Text", Mode::Text))
            .width(Length::Fill)
            .into()
    }

    fn post_button(&self) -> Element<'_, Message> {
        let label = if self.is_posting() {
            "Posting..."
        } else {
            "Upload Post"
        };

        let mut post = button(
            Container::new(Text::new(label))
                .width(Length::Fill)
                .align_x(Horizontal::Center),
        )
        .width(Length::Fill)
        .padding(spacing::XS);

        // The control stays disabled for the whole posting window, so a
        // second press cannot reach the machine.
        post = if self.postable() && !self.is_posting() {
            post.on_press(Message::Post).style(styles::button::primary)
        } else {
            post.style(styles::button::disabled)
        };

        post.into()
    }
}

fn idle_hint<'a>() -> Element<'a, Message> {
    Container::new(Text::new("Share what's happening around you").size(14))
        .width(Length::Fill)
        .align_x(Horizontal::Center)
        .padding(spacing::LG)
        .into()
}

/// Live surface placeholder with the capture and close controls.
fn photo_capture_surface<'a>() -> Element<'a, Message> {
    let capture = button(Text::new("Click Photo"))
        .on_press(Message::CapturePhoto)
        .padding([spacing::XS, spacing::MD])
        .style(styles::button::capture);

    live_surface("Live camera · 640×480", capture)
}

fn video_capture_surface<'a>(recording: bool, chunk_count: usize) -> Element<'a, Message> {
    let trigger = if recording {
        button(Text::new("Stop Recording"))
            .on_press(Message::StopRecording)
            .padding([spacing::XS, spacing::MD])
            .style(styles::button::danger)
    } else {
        button(Text::new("Start Recording"))
            .on_press(Message::StartRecording)
            .padding([spacing::XS, spacing::MD])
            .style(styles::button::primary)
    };

    let label = if recording {
        format!("● REC · {chunk_count} fragments")
    } else {
        "Live camera · 550×320 · audio".to_string()
    };

    live_surface_owned(label, trigger)
}

fn live_surface<'a>(label: &'static str, trigger: button::Button<'a, Message>) -> Element<'a, Message> {
    live_surface_owned(label.to_string(), trigger)
}

fn live_surface_owned(label: String, trigger: button::Button<'_, Message>) -> Element<'_, Message> {
    let close = button(Text::new("Close"))
        .on_press(Message::Close)
        .padding([spacing::XXS, spacing::XS])
        .style(styles::button::danger);

    let readout = Container::new(Text::new(label).size(14))
        .padding([spacing::XXS, spacing::XS])
        .style(styles::container::overlay_readout);

    let header = Row::new()
        .push(readout)
        .push(iced::widget::Space::new().width(Length::Fill))
        .push(close)
        .align_y(Vertical::Top)
        .width(Length::Fill);

    let controls = Container::new(trigger)
        .width(Length::Fill)
        .align_x(Horizontal::Center);

    Container::new(
        Column::new()
            .push(header)
            .push(iced::widget::Space::new().height(Length::Fill))
            .push(controls)
            .height(Length::Fill),
    )
    .width(Length::Fill)
    .height(Length::Fixed(sizing::CAPTURE_HEIGHT))
    .padding(spacing::XS)
    .style(styles::container::overlay_readout)
    .into()
}

fn photo_preview(photo: &CapturedPhoto) -> Element<'_, Message> {
    let handle = iced::widget::image::Handle::from_bytes(photo.bytes().as_ref().clone());
    let preview = iced::widget::image(handle)
        .width(Length::Fill)
        .height(Length::Fixed(sizing::PREVIEW_HEIGHT));

    with_remove_control(preview.into())
}

fn video_preview(video: &CapturedVideo) -> Element<'_, Message> {
    let summary = format!(
        "Video captured · {} fragments · {} KiB",
        video.chunk_count(),
        video.size_bytes().div_ceil(1024)
    );

    let body = Container::new(Text::new(summary).size(14).color(palette::WHITE))
        .width(Length::Fill)
        .height(Length::Fixed(sizing::PREVIEW_HEIGHT))
        .align_x(Horizontal::Center)
        .align_y(Vertical::Center)
        .style(styles::container::overlay_readout);

    with_remove_control(body.into())
}

fn with_remove_control(preview: Element<'_, Message>) -> Element<'_, Message> {
    let remove = button(Text::new("×"))
        .on_press(Message::Remove)
        .padding([spacing::XXS, spacing::XS])
        .style(styles::button::danger);

    Column::new()
        .spacing(spacing::XXS)
        .push(
            Container::new(remove)
                .width(Length::Fill)
                .align_x(Horizontal::Right),
        )
        .push(preview)
        .into()
}

fn capture_error(error: &CaptureError) -> Element<'_, Message> {
    let close = button(Text::new("Close"))
        .on_press(Message::Close)
        .padding([spacing::XXS, spacing::XS])
        .style(styles::button::danger);

    let banner = Container::new(
        Column::new()
            .spacing(spacing::XS)
            .push(Text::new(format!("{error}")).size(14))
            .push(close),
    )
    .width(Length::Fill)
    .padding(spacing::MD)
    .style(styles::container::error_banner);

    banner.into()
}
