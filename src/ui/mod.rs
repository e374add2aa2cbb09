// SPDX-License-Identifier: MPL-2.0
//! UI components: top bars, map surface, composer, shared styles.

pub mod banner;
pub mod composer;
pub mod design_tokens;
pub mod map_view;
pub mod navbar;
pub mod styles;
