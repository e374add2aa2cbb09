// SPDX-License-Identifier: MPL-2.0

use geodrop::app::{self, Flags};
use tracing_subscriber::EnvFilter;

fn main() -> iced::Result {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let mut args = pico_args::Arguments::from_env();

    let flags = Flags {
        latitude: args.opt_value_from_str("--lat").unwrap_or(None),
        longitude: args.opt_value_from_str("--lon").unwrap_or(None),
        config_dir: args.opt_value_from_str("--config-dir").unwrap_or(None),
        deny_capture: args.contains("--deny-capture"),
    };

    app::run(flags)
}
