// SPDX-License-Identifier: MPL-2.0
//! Composer state machine tests, driven entirely through fakes.

use super::messages::{Event, Message};
use super::state::{Stage, State};
use crate::application::port::capture::{
    CaptureError, CaptureProvider, CaptureRequest, CaptureSurface,
};
use crate::domain::post::{CapturedPhoto, Mode, VideoChunk};
use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

/// Fake provider with open/release accounting and scripted chunk delivery.
#[derive(Default)]
struct FakeProvider {
    deny: bool,
    opened: AtomicUsize,
    alive: Arc<AtomicUsize>,
    /// Chunks the next surface will deliver through polling.
    pollable: Mutex<VecDeque<VideoChunk>>,
    /// Chunks still in the sink at stop time, returned by the flush.
    tail: Mutex<Vec<VideoChunk>>,
}

impl FakeProvider {
    fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    fn denying() -> Arc<Self> {
        Arc::new(Self {
            deny: true,
            ..Self::default()
        })
    }

    fn script_pollable(&self, chunks: Vec<VideoChunk>) {
        *self.pollable.lock().expect("pollable lock") = chunks.into();
    }

    fn script_tail(&self, chunks: Vec<VideoChunk>) {
        *self.tail.lock().expect("tail lock") = chunks;
    }

    fn open_count(&self) -> usize {
        self.opened.load(Ordering::SeqCst)
    }

    fn live_surfaces(&self) -> usize {
        self.alive.load(Ordering::SeqCst)
    }
}

impl CaptureProvider for FakeProvider {
    fn open(&self, _request: &CaptureRequest) -> Result<Box<dyn CaptureSurface>, CaptureError> {
        if self.deny {
            return Err(CaptureError::PermissionDenied("camera".to_string()));
        }
        self.opened.fetch_add(1, Ordering::SeqCst);
        self.alive.fetch_add(1, Ordering::SeqCst);
        Ok(Box::new(FakeSurface {
            alive: Arc::clone(&self.alive),
            pollable: self.pollable.lock().expect("pollable lock").clone(),
            tail: self.tail.lock().expect("tail lock").clone(),
            recording: false,
        }))
    }
}

struct FakeSurface {
    alive: Arc<AtomicUsize>,
    pollable: VecDeque<VideoChunk>,
    tail: Vec<VideoChunk>,
    recording: bool,
}

impl Drop for FakeSurface {
    fn drop(&mut self) {
        self.alive.fetch_sub(1, Ordering::SeqCst);
    }
}

impl CaptureSurface for FakeSurface {
    fn grab_frame(&mut self) -> Result<CapturedPhoto, CaptureError> {
        Ok(CapturedPhoto::new(2, 2, Arc::new(vec![0xAB; 16])))
    }

    fn begin_recording(&mut self) -> Result<(), CaptureError> {
        self.recording = true;
        Ok(())
    }

    fn poll_chunk(&mut self) -> Option<VideoChunk> {
        if self.recording {
            self.pollable.pop_front()
        } else {
            None
        }
    }

    fn finish_recording(&mut self) -> Result<Vec<VideoChunk>, CaptureError> {
        if !self.recording {
            return Err(CaptureError::Sink("no recording in progress".to_string()));
        }
        self.recording = false;
        Ok(std::mem::take(&mut self.tail))
    }
}

fn composer(provider: &Arc<FakeProvider>) -> State {
    State::new(Arc::clone(provider) as Arc<dyn CaptureProvider>)
}

fn chunk(sequence: u64) -> VideoChunk {
    VideoChunk::new(sequence, vec![sequence as u8; 4])
}

// -------------------------------------------------------------------------
// Mode selection and reset
// -------------------------------------------------------------------------

#[test]
fn starts_idle_and_not_postable() {
    let provider = FakeProvider::new();
    let state = composer(&provider);
    assert_eq!(state.stage().name(), "Idle");
    assert!(!state.postable());
    assert!(state.mode().is_none());
}

#[test]
fn selecting_each_mode_enters_its_stage() {
    let provider = FakeProvider::new();
    let mut state = composer(&provider);

    state.update(Message::SelectMode(Mode::Photo));
    assert_eq!(state.stage().name(), "PhotoCapturing");
    assert_eq!(state.mode(), Some(Mode::Photo));

    state.update(Message::SelectMode(Mode::Video));
    assert_eq!(state.stage().name(), "VideoArmed");

    state.update(Message::SelectMode(Mode::Text));
    assert_eq!(state.stage().name(), "TextEditing");
}

#[test]
fn mode_switch_clears_previous_content() {
    let provider = FakeProvider::new();
    let mut state = composer(&provider);

    state.update(Message::SelectMode(Mode::Photo));
    state.update(Message::CapturePhoto);
    state.update(Message::CaptionEdited("my caption".to_string()));
    assert!(state.photo().is_some());

    state.update(Message::SelectMode(Mode::Text));
    assert!(state.photo().is_none());
    assert!(state.caption().is_none());
    assert_eq!(state.text_body().map(|b| b.as_str()), Some(""));

    state.update(Message::TextEdited("hello".to_string()));
    state.update(Message::SelectMode(Mode::Photo));
    assert!(state.text_body().is_none());
    assert_eq!(state.stage().name(), "PhotoCapturing");
}

#[test]
fn mode_switch_releases_the_previous_surface() {
    let provider = FakeProvider::new();
    let mut state = composer(&provider);

    state.update(Message::SelectMode(Mode::Photo));
    assert_eq!(provider.live_surfaces(), 1);

    state.update(Message::SelectMode(Mode::Video));
    assert_eq!(provider.open_count(), 2);
    assert_eq!(provider.live_surfaces(), 1);
}

#[test]
fn reset_is_idempotent() {
    let provider = FakeProvider::new();
    let mut state = composer(&provider);
    state.update(Message::SelectMode(Mode::Text));
    state.update(Message::TextEdited("draft".to_string()));

    state.full_reset();
    assert_eq!(state.stage().name(), "Idle");
    state.full_reset();
    assert_eq!(state.stage().name(), "Idle");
    assert!(!state.postable());
}

// -------------------------------------------------------------------------
// Postable predicate
// -------------------------------------------------------------------------

#[test]
fn postable_truth_table() {
    let provider = FakeProvider::new();
    let mut state = composer(&provider);

    // Photo captured -> postable.
    state.update(Message::SelectMode(Mode::Photo));
    assert!(!state.postable(), "no photo yet");
    state.update(Message::CapturePhoto);
    assert!(state.postable());

    // Video finalized -> postable.
    state.update(Message::SelectMode(Mode::Video));
    state.update(Message::StartRecording);
    state.update(Message::StopRecording);
    assert!(state.postable());

    // Text: blank is not postable, content is.
    state.update(Message::SelectMode(Mode::Text));
    assert!(!state.postable());
    state.update(Message::TextEdited("  ".to_string()));
    assert!(!state.postable());
    state.update(Message::TextEdited("hello".to_string()));
    assert!(state.postable());
}

// -------------------------------------------------------------------------
// Photo flow
// -------------------------------------------------------------------------

#[test]
fn photo_capture_then_remove_returns_to_idle() {
    let provider = FakeProvider::new();
    let mut state = composer(&provider);

    state.update(Message::SelectMode(Mode::Photo));
    state.update(Message::CapturePhoto);
    assert_eq!(state.stage().name(), "PhotoReview");
    assert!(state.photo().is_some());
    // The live surface is released once the still is grabbed.
    assert_eq!(provider.live_surfaces(), 0);

    state.update(Message::Remove);
    assert_eq!(state.stage().name(), "Idle");
    assert!(state.photo().is_none());
}

#[test]
fn close_without_capturing_releases_the_surface() {
    let provider = FakeProvider::new();
    let mut state = composer(&provider);

    state.update(Message::SelectMode(Mode::Photo));
    assert_eq!(provider.live_surfaces(), 1);

    state.update(Message::Close);
    assert_eq!(state.stage().name(), "Idle");
    assert_eq!(provider.live_surfaces(), 0);
}

#[test]
fn capture_ignored_outside_photo_stage() {
    let provider = FakeProvider::new();
    let mut state = composer(&provider);
    state.update(Message::SelectMode(Mode::Text));
    state.update(Message::CapturePhoto);
    assert_eq!(state.stage().name(), "TextEditing");
}

// -------------------------------------------------------------------------
// Video flow
// -------------------------------------------------------------------------

#[test]
fn video_finalize_keeps_polled_chunks_in_order() {
    let provider = FakeProvider::new();
    provider.script_pollable(vec![chunk(0), chunk(1)]);
    let mut state = composer(&provider);

    state.update(Message::SelectMode(Mode::Video));
    state.update(Message::StartRecording);
    assert!(state.is_recording());

    state.update(Message::ChunkTick);
    state.update(Message::StopRecording);

    let video = state.video().expect("video should be finalized");
    assert_eq!(video.chunk_count(), 2);
    assert_eq!(video.bytes(), &[0, 0, 0, 0, 1, 1, 1, 1]);
}

#[test]
fn video_finalize_includes_chunks_still_in_the_sink() {
    let provider = FakeProvider::new();
    provider.script_pollable(vec![chunk(0)]);
    provider.script_tail(vec![chunk(1), chunk(2)]);
    let mut state = composer(&provider);

    state.update(Message::SelectMode(Mode::Video));
    state.update(Message::StartRecording);
    state.update(Message::ChunkTick);
    // Chunks 1 and 2 were delivered to the sink but never polled before the
    // stop trigger; the flush must hand them over.
    state.update(Message::StopRecording);

    let video = state.video().expect("video should be finalized");
    assert_eq!(video.chunk_count(), 3);
    assert_eq!(video.bytes()[..4], [0, 0, 0, 0]);
    assert_eq!(video.bytes()[4..8], [1, 1, 1, 1]);
    assert_eq!(video.bytes()[8..], [2, 2, 2, 2]);
}

#[test]
fn stop_recording_releases_the_surface() {
    let provider = FakeProvider::new();
    let mut state = composer(&provider);

    state.update(Message::SelectMode(Mode::Video));
    state.update(Message::StartRecording);
    assert_eq!(provider.live_surfaces(), 1);

    state.update(Message::StopRecording);
    assert_eq!(state.stage().name(), "VideoReview");
    assert_eq!(provider.live_surfaces(), 0);
}

#[test]
fn chunk_tick_outside_recording_is_a_no_op() {
    let provider = FakeProvider::new();
    provider.script_pollable(vec![chunk(0)]);
    let mut state = composer(&provider);

    state.update(Message::SelectMode(Mode::Video));
    state.update(Message::ChunkTick);
    assert_eq!(state.stage().name(), "VideoArmed");
}

#[test]
fn close_during_recording_resets_and_releases() {
    let provider = FakeProvider::new();
    let mut state = composer(&provider);

    state.update(Message::SelectMode(Mode::Video));
    state.update(Message::StartRecording);
    state.update(Message::Close);

    assert_eq!(state.stage().name(), "Idle");
    assert_eq!(provider.live_surfaces(), 0);
}

// -------------------------------------------------------------------------
// Posting lifecycle
// -------------------------------------------------------------------------

#[test]
fn text_post_lifecycle_completes_once_and_resets() {
    let provider = FakeProvider::new();
    let mut state = composer(&provider);

    state.update(Message::SelectMode(Mode::Text));
    state.update(Message::TextEdited("Hello world".to_string()));

    let event = state.update(Message::Post);
    assert_eq!(event, Event::PostStarted);
    assert!(state.is_posting());

    let event = state.update(Message::PostDelayElapsed);
    assert_eq!(event, Event::PostCompleted);
    assert!(!state.is_posting());
    assert_eq!(state.stage().name(), "Idle");
    assert!(state.text_body().is_none());
}

#[test]
fn second_post_during_the_window_is_a_no_op() {
    let provider = FakeProvider::new();
    let mut state = composer(&provider);

    state.update(Message::SelectMode(Mode::Text));
    state.update(Message::TextEdited("hi".to_string()));
    assert_eq!(state.update(Message::Post), Event::PostStarted);

    // Every transition is blocked while posting, including another post.
    assert_eq!(state.update(Message::Post), Event::None);
    assert_eq!(state.update(Message::SelectMode(Mode::Photo)), Event::None);
    assert_eq!(state.update(Message::Close), Event::None);
    assert!(state.is_posting());

    assert_eq!(state.update(Message::PostDelayElapsed), Event::PostCompleted);
    // Completion fires exactly once.
    assert_eq!(state.update(Message::PostDelayElapsed), Event::None);
}

#[test]
fn post_without_content_is_rejected() {
    let provider = FakeProvider::new();
    let mut state = composer(&provider);

    assert_eq!(state.update(Message::Post), Event::None);
    state.update(Message::SelectMode(Mode::Photo));
    assert_eq!(state.update(Message::Post), Event::None);
    assert!(!state.is_posting());
}

// -------------------------------------------------------------------------
// Capture failure
// -------------------------------------------------------------------------

#[test]
fn denied_capture_enters_the_failed_stage() {
    let provider = FakeProvider::denying();
    let mut state = composer(&provider);

    state.update(Message::SelectMode(Mode::Photo));
    match state.stage() {
        Stage::CaptureFailed { mode, error } => {
            assert_eq!(*mode, Mode::Photo);
            assert!(matches!(error, CaptureError::PermissionDenied(_)));
        }
        other => panic!("unexpected stage: {}", other.name()),
    }
    assert!(!state.postable());

    state.update(Message::Close);
    assert_eq!(state.stage().name(), "Idle");
}

#[test]
fn text_mode_still_works_when_capture_is_denied() {
    let provider = FakeProvider::denying();
    let mut state = composer(&provider);

    state.update(Message::SelectMode(Mode::Text));
    state.update(Message::TextEdited("no camera needed".to_string()));
    assert!(state.postable());
}

// -------------------------------------------------------------------------
// Input bounds
// -------------------------------------------------------------------------

#[test]
fn caption_and_text_edits_are_bounded() {
    let provider = FakeProvider::new();
    let mut state = composer(&provider);

    state.update(Message::SelectMode(Mode::Photo));
    state.update(Message::CapturePhoto);
    state.update(Message::CaptionEdited("c".repeat(500)));
    assert_eq!(
        state.caption().expect("caption").as_str().chars().count(),
        crate::domain::post::MAX_CAPTION_CHARS
    );

    state.update(Message::SelectMode(Mode::Text));
    state.update(Message::TextEdited("t".repeat(900)));
    assert_eq!(
        state.text_body().expect("body").as_str().chars().count(),
        crate::domain::post::MAX_TEXT_CHARS
    );
}

#[test]
fn caption_edit_ignored_outside_review_stages() {
    let provider = FakeProvider::new();
    let mut state = composer(&provider);

    state.update(Message::SelectMode(Mode::Text));
    state.update(Message::CaptionEdited("nope".to_string()));
    assert!(state.caption().is_none());
}

#[test]
fn composer_view_renders_in_every_stage() {
    let provider = FakeProvider::new();
    let mut state = composer(&provider);
    let _ = state.view();

    state.update(Message::SelectMode(Mode::Photo));
    let _ = state.view();
    state.update(Message::CapturePhoto);
    let _ = state.view();

    state.update(Message::SelectMode(Mode::Video));
    let _ = state.view();
    state.update(Message::StartRecording);
    let _ = state.view();
    state.update(Message::StopRecording);
    let _ = state.view();

    state.update(Message::SelectMode(Mode::Text));
    state.update(Message::TextEdited("hello".to_string()));
    let _ = state.view();
    state.update(Message::Post);
    let _ = state.view();
}
