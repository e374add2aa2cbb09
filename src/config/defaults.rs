// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! Single source of truth for the tunables exposed through `settings.toml`.

// ==========================================================================
// Map Defaults
// ==========================================================================

/// Fallback map center latitude used until a position resolves.
pub const FALLBACK_LATITUDE: f64 = 20.0;

/// Fallback map center longitude used until a position resolves.
pub const FALLBACK_LONGITUDE: f64 = 80.0;

/// Map zoom level while on the fallback center.
pub const FALLBACK_ZOOM: u8 = 13;

/// Map zoom level once the device position has resolved.
pub const FOCUS_ZOOM: u8 = 16;

// ==========================================================================
// Composer Defaults
// ==========================================================================

/// Duration of the simulated post submission, in milliseconds.
pub const POST_DELAY_MS: u64 = 1000;

// ==========================================================================
// Navbar Defaults
// ==========================================================================

/// Download call-to-action link shown after the first post.
pub const DOWNLOAD_URL: &str = "https://drop.example.com/get";
