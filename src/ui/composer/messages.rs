// SPDX-License-Identifier: MPL-2.0
//! Composer message/event types re-exported by the facade.

use crate::domain::post::Mode;

/// Messages emitted by the composer widgets and the app shell's timers.
#[derive(Debug, Clone)]
pub enum Message {
    /// A mode button was pressed. Always performs a full reset first.
    SelectMode(Mode),
    /// Grab one still frame from the live surface.
    CapturePhoto,
    /// Open a recording sink on the live surface.
    StartRecording,
    /// Stop recording and finalize the accumulated material.
    StopRecording,
    /// Periodic poll for pending recording fragments. Only delivered while
    /// a recording is active.
    ChunkTick,
    /// Caption input changed (photo/video review).
    CaptionEdited(String),
    /// Text body changed (text mode).
    TextEdited(String),
    /// The post button was pressed.
    Post,
    /// The simulated submission delay elapsed.
    PostDelayElapsed,
    /// Remove the captured photo/video preview.
    Remove,
    /// Close the capture surface or dismiss the error state.
    Close,
}

/// Events propagated to the parent application for side effects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    None,
    /// Posting began; the shell schedules the submission delay.
    PostStarted,
    /// The simulated submission finished. Fired exactly once per post.
    PostCompleted,
}
