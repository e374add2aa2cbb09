// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::application::port::location::LocationError;
use crate::domain::geo::Coordinates;
use crate::ui::composer;
use crate::ui::navbar;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Composer(composer::Message),
    Navbar(navbar::Message),
    /// Outcome of the one-shot location request started at boot.
    LocationResolved(Result<Coordinates, LocationError>),
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional latitude served by the location provider.
    pub latitude: Option<f64>,
    /// Optional longitude served by the location provider.
    pub longitude: Option<f64>,
    /// Optional config directory override (for settings.toml).
    pub config_dir: Option<String>,
    /// Force capture opens to fail with a permission error.
    pub deny_capture: bool,
}
