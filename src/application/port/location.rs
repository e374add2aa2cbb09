// SPDX-License-Identifier: MPL-2.0
//! Location provider port definition.
//!
//! One-shot read of the device position: success carries a coordinate pair,
//! failure a typed error with a human-readable description. No retry and no
//! timeout are part of the contract.

use crate::domain::geo::Coordinates;
use std::fmt;

/// Errors a location provider can report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LocationError {
    /// No position source is available or configured.
    Unavailable,

    /// The user denied the position request.
    Denied,

    /// The platform has no location capability at all.
    Unsupported,
}

impl fmt::Display for LocationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LocationError::Unavailable => write!(f, "Location is unavailable"),
            LocationError::Denied => write!(f, "Location access was denied"),
            LocationError::Unsupported => write!(f, "Location is not supported on this system"),
        }
    }
}

impl std::error::Error for LocationError {}

/// Port for one-shot position reads.
///
/// # Thread Safety
///
/// Implementations must be `Send + Sync`: the resolve runs on a background
/// task at startup and reports back through a message.
pub trait LocationProvider: Send + Sync {
    /// Resolves the current device position once.
    ///
    /// # Errors
    ///
    /// Returns a [`LocationError`] when no position can be produced.
    fn locate(&self) -> Result<Coordinates, LocationError>;
}
