// SPDX-License-Identifier: MPL-2.0
//! Top-level message routing and side effects.

use super::{App, Message};
use crate::ui::composer;
use crate::ui::navbar;
use iced::Task;
use std::time::Duration;

impl App {
    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Composer(message) => {
                let event = self.composer.update(message);
                self.handle_composer_event(event)
            }
            Message::Navbar(message) => {
                match navbar::update(message, &self.config.navbar.download_url) {
                    navbar::Event::OpenLink(url) => {
                        open_link(&url);
                        Task::none()
                    }
                    navbar::Event::None => Task::none(),
                }
            }
            Message::LocationResolved(outcome) => {
                self.map.location_resolved(outcome);
                Task::none()
            }
        }
    }

    fn handle_composer_event(&mut self, event: composer::Event) -> Task<Message> {
        match event {
            composer::Event::None => Task::none(),
            composer::Event::PostStarted => {
                let delay = Duration::from_millis(self.config.composer.post_delay_ms);
                tracing::info!(delay_ms = delay.as_millis() as u64, "post submitted");
                Task::perform(tokio::time::sleep(delay), |_| {
                    Message::Composer(composer::Message::PostDelayElapsed)
                })
            }
            composer::Event::PostCompleted => {
                if !self.posted {
                    self.posted = true;
                    tracing::info!("first post completed, showing download bar");
                }
                Task::none()
            }
        }
    }
}

/// Opens the store link in the system browser without blocking the UI
/// thread. Failure is logged and otherwise ignored.
fn open_link(url: &str) {
    if let Err(err) = open::that_detached(url) {
        tracing::warn!(url, error = %err, "failed to open download link");
    }
}
