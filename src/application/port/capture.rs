// SPDX-License-Identifier: MPL-2.0
//! Capture surface port definition.
//!
//! This module defines the [`CaptureProvider`] and [`CaptureSurface`] traits
//! for the live camera/microphone feed the composer holds while in a
//! capturing stage. Infrastructure adapters implement them; the composer
//! owns the opened surface inside its stage variant, so the device is
//! released on every exit path when the variant is dropped.

use crate::domain::post::{CapturedPhoto, VideoChunk};
use std::fmt;

// =============================================================================
// CaptureError
// =============================================================================

/// Errors that can occur while acquiring or using a capture surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CaptureError {
    /// No capture device is available on this system.
    Unavailable,

    /// The user (or platform policy) denied access to the named device.
    PermissionDenied(String),

    /// The device exists but is exclusively held by another process.
    Busy,

    /// The recording sink failed to open, deliver, or flush.
    Sink(String),
}

impl fmt::Display for CaptureError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CaptureError::Unavailable => write!(f, "No capture device available"),
            CaptureError::PermissionDenied(device) => {
                write!(f, "Access to {device} was denied")
            }
            CaptureError::Busy => write!(f, "Capture device is in use by another application"),
            CaptureError::Sink(msg) => write!(f, "Recording sink error: {msg}"),
        }
    }
}

impl std::error::Error for CaptureError {}

// =============================================================================
// CaptureRequest
// =============================================================================

/// Preferred camera facing direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Facing {
    Front,
    Back,
}

/// Parameters for opening a capture surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CaptureRequest {
    pub facing: Facing,
    pub width: u32,
    pub height: u32,
    pub audio: bool,
}

impl CaptureRequest {
    /// Still-photo preset: back camera, 640x480, no audio.
    #[must_use]
    pub fn photo() -> Self {
        Self {
            facing: Facing::Back,
            width: 640,
            height: 480,
            audio: false,
        }
    }

    /// Video-recording preset: back camera, 550x320, with audio.
    #[must_use]
    pub fn video() -> Self {
        Self {
            facing: Facing::Back,
            width: 550,
            height: 320,
            audio: true,
        }
    }
}

// =============================================================================
// CaptureSurface / CaptureProvider
// =============================================================================

/// A live capture surface exclusively owned by the composer.
///
/// Photo flow: [`CaptureSurface::grab_frame`] returns one encoded still.
///
/// Video flow: [`CaptureSurface::begin_recording`] opens a binary sink bound
/// to the surface; [`CaptureSurface::poll_chunk`] hands over fragments in
/// delivery order as they become available; [`CaptureSurface::finish_recording`]
/// flushes the sink and returns every fragment not yet polled, so nothing
/// delivered before the stop signal can be dropped from the final material.
///
/// Implementations must stop any in-flight recording when dropped.
pub trait CaptureSurface: Send {
    /// Grabs one still frame from the live surface.
    ///
    /// # Errors
    ///
    /// Returns a [`CaptureError`] if the surface cannot produce a frame.
    fn grab_frame(&mut self) -> Result<CapturedPhoto, CaptureError>;

    /// Opens a recording sink on the surface. Any stale, unpolled fragments
    /// from a previous session are discarded.
    ///
    /// # Errors
    ///
    /// Returns a [`CaptureError`] if a sink cannot be opened (for example
    /// when audio was requested but is unavailable).
    fn begin_recording(&mut self) -> Result<(), CaptureError>;

    /// Returns the next pending fragment, if any. Fragments come out in the
    /// order the sink produced them.
    fn poll_chunk(&mut self) -> Option<VideoChunk>;

    /// Stops the recording, flushes the sink, and returns the fragments that
    /// were still queued, in order.
    ///
    /// # Errors
    ///
    /// Returns a [`CaptureError`] if the sink fails to flush.
    fn finish_recording(&mut self) -> Result<Vec<VideoChunk>, CaptureError>;
}

/// Port for acquiring capture surfaces.
///
/// # Thread Safety
///
/// Implementations must be `Send + Sync`; the provider is shared with the
/// composer for the lifetime of the app.
pub trait CaptureProvider: Send + Sync {
    /// Opens a surface matching `request`.
    ///
    /// # Errors
    ///
    /// Returns a [`CaptureError`] when the device is missing, busy, or
    /// access is denied.
    fn open(&self, request: &CaptureRequest) -> Result<Box<dyn CaptureSurface>, CaptureError>;
}
