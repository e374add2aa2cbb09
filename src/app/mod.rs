// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the map, composer, and
//! top bars.
//!
//! The `App` struct wires together the injected device capabilities
//! (capture, location) with the UI components and translates component
//! events into side effects like the simulated submission delay or opening
//! the download link. The `posted` flag lives here: it is set exactly once,
//! by the composer's post-completed event, and is passed down read-only —
//! components never share mutable state.

pub mod message;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};

use crate::application::port::capture::CaptureProvider;
use crate::application::port::location::LocationProvider;
use crate::config::{self, Config};
use crate::infrastructure::capture::SyntheticCaptureProvider;
use crate::infrastructure::location::StaticLocationProvider;
use crate::ui::composer;
use crate::ui::map_view;
use iced::{window, Task, Theme};
use std::fmt;
use std::sync::Arc;

pub const WINDOW_DEFAULT_WIDTH: u32 = 800;
pub const WINDOW_DEFAULT_HEIGHT: u32 = 650;
pub const MIN_WINDOW_WIDTH: u32 = 480;
pub const MIN_WINDOW_HEIGHT: u32 = 600;

/// Root Iced application state.
pub struct App {
    config: Config,
    composer: composer::State,
    map: map_view::State,
    /// Whether the user has posted yet; switches the top bar once.
    posted: bool,
    location: Arc<dyn LocationProvider>,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("posted", &self.posted)
            .field("composer", &self.composer)
            .finish()
    }
}

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // Wrap flags in RefCell<Option<_>> to satisfy Fn trait requirement
    // while only consuming flags once (iced 0.14 requires Fn, not FnOnce)
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state
            .borrow_mut()
            .take()
            .expect("Boot function called more than once");
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Initializes application state and kicks off the one-shot location
    /// request.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let config = match config::load_with_dir(flags.config_dir.as_deref()) {
            Ok(config) => config,
            Err(err) => {
                tracing::warn!(error = %err, "failed to load config, using defaults");
                Config::default()
            }
        };

        let deny_capture = flags.deny_capture || config.composer.deny_capture;
        let capture: Arc<dyn CaptureProvider> = if deny_capture {
            Arc::new(SyntheticCaptureProvider::denying())
        } else {
            Arc::new(SyntheticCaptureProvider::new())
        };

        let location: Arc<dyn LocationProvider> = Arc::new(StaticLocationProvider::from_parts(
            flags.latitude.or(config.location.latitude),
            flags.longitude.or(config.location.longitude),
        ));

        let app = App {
            composer: composer::State::new(capture),
            map: map_view::State::new(&config.map),
            posted: false,
            location: Arc::clone(&location),
            config,
        };

        let locate = Task::perform(
            async move { location.locate() },
            Message::LocationResolved,
        );

        (app, locate)
    }

    fn title(&self) -> String {
        String::from("Drop")
    }

    fn theme(&self) -> Theme {
        Theme::Light
    }
}

#[cfg(test)]
impl App {
    /// Boots against a throwaway config dir so tests never read the
    /// developer's platform settings file.
    pub(crate) fn isolated(mut flags: Flags) -> Self {
        let dir = tempfile::tempdir().expect("failed to create temp dir");
        flags.config_dir = Some(dir.path().to_string_lossy().into_owned());
        App::new(flags).0
    }
}
