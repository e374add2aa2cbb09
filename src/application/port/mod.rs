// SPDX-License-Identifier: MPL-2.0
//! Port definitions for device capabilities.
//!
//! The composer and map view depend on these traits, never on concrete
//! hardware, so both can be driven by fakes in tests.

pub mod capture;
pub mod location;
