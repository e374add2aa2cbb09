// SPDX-License-Identifier: MPL-2.0
//! Shared helpers for tests comparing coordinate values.
//!
//! Latitude/longitude math goes through trigonometric projections, so tests
//! compare components with `approx`'s absolute-difference assertion instead
//! of `assert_eq!`.

pub use approx::assert_abs_diff_eq;

/// Epsilon for comparing coordinate components in degrees.
pub const F64_EPSILON: f64 = 1e-10;
