// SPDX-License-Identifier: MPL-2.0
//! Conditional subscriptions for the application.

use super::{App, Message};
use crate::ui::composer;
use iced::time;
use iced::Subscription;
use std::time::Duration;

/// How often recorded fragments are drained from the capture surface.
const CHUNK_POLL_INTERVAL: Duration = Duration::from_millis(250);

impl App {
    pub fn subscription(&self) -> Subscription<Message> {
        create_chunk_subscription(self.composer.is_recording())
    }
}

/// Ticks only while a recording is live, so an idle composer costs nothing.
fn create_chunk_subscription(recording: bool) -> Subscription<Message> {
    if recording {
        time::every(CHUNK_POLL_INTERVAL)
            .map(|_| Message::Composer(composer::Message::ChunkTick))
    } else {
        Subscription::none()
    }
}
