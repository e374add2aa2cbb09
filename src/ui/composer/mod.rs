// SPDX-License-Identifier: MPL-2.0
//! Post composer: mode selection, media capture lifecycle, caption/text
//! input, and the simulated post/reset lifecycle.
//!
//! The machine is one tagged [`Stage`] plus a `posting` overlay flag, driven
//! by a single transition function in [`state`]. Capture surfaces live
//! inside the capturing variants, so the device is released on every exit
//! path when the variant is dropped.

mod messages;
mod state;
mod view;

#[cfg(test)]
mod tests;

pub use messages::{Event, Message};
pub use state::{Stage, State};
