// SPDX-License-Identifier: MPL-2.0
//! Composer state machine.
//!
//! All transitions go through [`State::update`]. Invalid combinations of the
//! source's independent flags (recording outside video mode, photo and video
//! present at once) are unrepresentable here.

use super::messages::{Event, Message};
use crate::application::port::capture::{
    CaptureError, CaptureProvider, CaptureRequest, CaptureSurface,
};
use crate::domain::post::{Caption, CapturedPhoto, CapturedVideo, Mode, TextBody, VideoChunk};
use std::fmt;
use std::sync::Arc;

/// The composer's effective stage.
///
/// Capturing stages own the live surface; dropping the variant releases the
/// device. `CaptureFailed` is the explicit error state for an unavailable or
/// denied surface.
pub enum Stage {
    Idle,
    PhotoCapturing {
        surface: Box<dyn CaptureSurface>,
    },
    PhotoReview {
        photo: CapturedPhoto,
        caption: Caption,
    },
    VideoArmed {
        surface: Box<dyn CaptureSurface>,
    },
    VideoRecording {
        surface: Box<dyn CaptureSurface>,
        chunks: Vec<VideoChunk>,
    },
    VideoReview {
        video: CapturedVideo,
        caption: Caption,
    },
    TextEditing {
        body: TextBody,
    },
    CaptureFailed {
        mode: Mode,
        error: CaptureError,
    },
}

impl Stage {
    /// Short variant name for logs and assertions.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Stage::Idle => "Idle",
            Stage::PhotoCapturing { .. } => "PhotoCapturing",
            Stage::PhotoReview { .. } => "PhotoReview",
            Stage::VideoArmed { .. } => "VideoArmed",
            Stage::VideoRecording { .. } => "VideoRecording",
            Stage::VideoReview { .. } => "VideoReview",
            Stage::TextEditing { .. } => "TextEditing",
            Stage::CaptureFailed { .. } => "CaptureFailed",
        }
    }
}

impl fmt::Debug for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Composer state: the current stage plus the posting overlay flag.
pub struct State {
    stage: Stage,
    posting: bool,
    provider: Arc<dyn CaptureProvider>,
}

impl fmt::Debug for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("State")
            .field("stage", &self.stage)
            .field("posting", &self.posting)
            .finish()
    }
}

impl State {
    /// Creates an idle composer bound to a capture provider.
    #[must_use]
    pub fn new(provider: Arc<dyn CaptureProvider>) -> Self {
        Self {
            stage: Stage::Idle,
            posting: false,
            provider,
        }
    }

    /// Single transition function. Returns the event the shell must act on.
    pub fn update(&mut self, message: Message) -> Event {
        // Posting overlays every stage and blocks all other transitions
        // until the delay elapses.
        if self.posting {
            return match message {
                Message::PostDelayElapsed => {
                    self.full_reset();
                    self.posting = false;
                    tracing::debug!("post completed, composer reset");
                    Event::PostCompleted
                }
                other => {
                    tracing::debug!(message = ?other, "ignored while posting");
                    Event::None
                }
            };
        }

        match message {
            Message::SelectMode(mode) => {
                self.full_reset();
                self.stage = self.enter_mode(mode);
                tracing::debug!(stage = self.stage.name(), "mode selected");
                Event::None
            }
            Message::CapturePhoto => {
                self.transition(|stage| match stage {
                    Stage::PhotoCapturing { mut surface } => match surface.grab_frame() {
                        Ok(photo) => Stage::PhotoReview {
                            photo,
                            caption: Caption::default(),
                        },
                        Err(error) => Stage::CaptureFailed {
                            mode: Mode::Photo,
                            error,
                        },
                    },
                    other => other,
                });
                Event::None
            }
            Message::StartRecording => {
                self.transition(|stage| match stage {
                    Stage::VideoArmed { mut surface } => match surface.begin_recording() {
                        Ok(()) => Stage::VideoRecording {
                            surface,
                            chunks: Vec::new(),
                        },
                        Err(error) => Stage::CaptureFailed {
                            mode: Mode::Video,
                            error,
                        },
                    },
                    other => other,
                });
                Event::None
            }
            Message::ChunkTick => {
                if let Stage::VideoRecording { surface, chunks } = &mut self.stage {
                    while let Some(chunk) = surface.poll_chunk() {
                        chunks.push(chunk);
                    }
                }
                Event::None
            }
            Message::StopRecording => {
                self.transition(|stage| match stage {
                    Stage::VideoRecording {
                        mut surface,
                        mut chunks,
                    } => match surface.finish_recording() {
                        Ok(tail) => {
                            // The sink's flush returns every fragment still
                            // queued, so nothing delivered before the stop
                            // signal is dropped from the finalized material.
                            chunks.extend(tail);
                            Stage::VideoReview {
                                video: CapturedVideo::assemble(&chunks),
                                caption: Caption::default(),
                            }
                        }
                        Err(error) => Stage::CaptureFailed {
                            mode: Mode::Video,
                            error,
                        },
                    },
                    other => other,
                });
                Event::None
            }
            Message::CaptionEdited(input) => {
                if let Stage::PhotoReview { caption, .. } | Stage::VideoReview { caption, .. } =
                    &mut self.stage
                {
                    *caption = Caption::from_input(&input);
                }
                Event::None
            }
            Message::TextEdited(input) => {
                if let Stage::TextEditing { body } = &mut self.stage {
                    *body = TextBody::from_input(&input);
                }
                Event::None
            }
            Message::Post => {
                if self.postable() {
                    self.posting = true;
                    tracing::debug!(stage = self.stage.name(), "post started");
                    Event::PostStarted
                } else {
                    Event::None
                }
            }
            Message::PostDelayElapsed => Event::None,
            Message::Remove => {
                if matches!(
                    self.stage,
                    Stage::PhotoReview { .. } | Stage::VideoReview { .. }
                ) {
                    self.full_reset();
                }
                Event::None
            }
            Message::Close => {
                self.full_reset();
                Event::None
            }
        }
    }

    /// Clears all composer-held content and returns to `Idle`. Dropping the
    /// current stage releases any held capture surface and closes any open
    /// recording sink.
    pub fn full_reset(&mut self) {
        self.stage = Stage::Idle;
        tracing::debug!("composer reset");
    }

    /// Whether the current content is valid to submit: a photo is present,
    /// a video is present, or text mode holds a non-blank body.
    #[must_use]
    pub fn postable(&self) -> bool {
        match &self.stage {
            Stage::PhotoReview { .. } | Stage::VideoReview { .. } => true,
            Stage::TextEditing { body } => body.has_content(),
            _ => false,
        }
    }

    #[must_use]
    pub fn stage(&self) -> &Stage {
        &self.stage
    }

    /// The selected mode, derived from the stage.
    #[must_use]
    pub fn mode(&self) -> Option<Mode> {
        match &self.stage {
            Stage::Idle => None,
            Stage::PhotoCapturing { .. } | Stage::PhotoReview { .. } => Some(Mode::Photo),
            Stage::VideoArmed { .. }
            | Stage::VideoRecording { .. }
            | Stage::VideoReview { .. } => Some(Mode::Video),
            Stage::TextEditing { .. } => Some(Mode::Text),
            Stage::CaptureFailed { mode, .. } => Some(*mode),
        }
    }

    #[must_use]
    pub fn is_recording(&self) -> bool {
        matches!(self.stage, Stage::VideoRecording { .. })
    }

    #[must_use]
    pub fn is_posting(&self) -> bool {
        self.posting
    }

    #[must_use]
    pub fn caption(&self) -> Option<&Caption> {
        match &self.stage {
            Stage::PhotoReview { caption, .. } | Stage::VideoReview { caption, .. } => {
                Some(caption)
            }
            _ => None,
        }
    }

    #[must_use]
    pub fn text_body(&self) -> Option<&TextBody> {
        match &self.stage {
            Stage::TextEditing { body } => Some(body),
            _ => None,
        }
    }

    #[must_use]
    pub fn photo(&self) -> Option<&CapturedPhoto> {
        match &self.stage {
            Stage::PhotoReview { photo, .. } => Some(photo),
            _ => None,
        }
    }

    #[must_use]
    pub fn video(&self) -> Option<&CapturedVideo> {
        match &self.stage {
            Stage::VideoReview { video, .. } => Some(video),
            _ => None,
        }
    }

    fn enter_mode(&self, mode: Mode) -> Stage {
        match mode {
            Mode::Photo => match self.provider.open(&CaptureRequest::photo()) {
                Ok(surface) => Stage::PhotoCapturing { surface },
                Err(error) => Stage::CaptureFailed {
                    mode: Mode::Photo,
                    error,
                },
            },
            Mode::Video => match self.provider.open(&CaptureRequest::video()) {
                Ok(surface) => Stage::VideoArmed { surface },
                Err(error) => Stage::CaptureFailed {
                    mode: Mode::Video,
                    error,
                },
            },
            Mode::Text => Stage::TextEditing {
                body: TextBody::default(),
            },
        }
    }

    /// Replaces the stage through `f`, moving owned surfaces out and back.
    fn transition<F>(&mut self, f: F)
    where
        F: FnOnce(Stage) -> Stage,
    {
        let stage = std::mem::replace(&mut self.stage, Stage::Idle);
        self.stage = f(stage);
        tracing::debug!(stage = self.stage.name(), "stage transition");
    }
}
