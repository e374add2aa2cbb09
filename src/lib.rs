// SPDX-License-Identifier: MPL-2.0
//! `geodrop` is a location-based posting client built with the Iced GUI
//! framework.
//!
//! It shows a map centered on the user's position, a floating composer for
//! photo, video, and text posts, and swaps the header for a download bar
//! after the first post. Device capabilities (camera, location) sit behind
//! ports so the UI stays testable without hardware.

#![doc(html_root_url = "https://docs.rs/geodrop/0.1.0")]

pub mod app;
pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod ui;

#[cfg(test)]
pub mod test_utils;
