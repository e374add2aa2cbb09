// SPDX-License-Identifier: MPL-2.0
//! Synthetic capture adapter.
//!
//! Stands in for real camera/microphone hardware: stills are deterministic
//! test-pattern frames encoded as PNG, recordings are opaque fragments
//! emitted at a bounded rate and flushed on finish. Denial can be forced to
//! exercise the composer's failure stage without platform-specific setup.

use crate::application::port::capture::{
    CaptureError, CaptureProvider, CaptureRequest, CaptureSurface,
};
use crate::domain::post::{CapturedPhoto, VideoChunk};
use std::collections::VecDeque;
use std::io::Cursor;
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Minimum spacing between emitted recording fragments.
const CHUNK_INTERVAL: Duration = Duration::from_millis(200);

/// Payload bytes per emitted fragment.
const CHUNK_PAYLOAD_LEN: usize = 320;

/// Magic prefix identifying synthetic recording fragments.
const CHUNK_MAGIC: [u8; 4] = *b"DROP";

/// Capture provider producing synthetic frames and fragments.
#[derive(Debug, Clone, Default)]
pub struct SyntheticCaptureProvider {
    deny: bool,
}

impl SyntheticCaptureProvider {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Forces every open to fail with a permission error, mimicking a user
    /// rejecting the device prompt.
    #[must_use]
    pub fn denying() -> Self {
        Self { deny: true }
    }
}

impl CaptureProvider for SyntheticCaptureProvider {
    fn open(&self, request: &CaptureRequest) -> Result<Box<dyn CaptureSurface>, CaptureError> {
        if self.deny {
            let device = if request.audio {
                "camera and microphone"
            } else {
                "camera"
            };
            tracing::warn!(?request, "capture open denied");
            return Err(CaptureError::PermissionDenied(device.to_string()));
        }

        if request.width == 0 || request.height == 0 {
            return Err(CaptureError::Unavailable);
        }

        tracing::debug!(?request, "capture surface opened");
        Ok(Box::new(SyntheticSurface::new(*request)))
    }
}

/// Live synthetic surface. Owns the recording sink while one is active.
struct SyntheticSurface {
    request: CaptureRequest,
    frames_grabbed: u32,
    sink: Option<RecordingSink>,
}

impl SyntheticSurface {
    fn new(request: CaptureRequest) -> Self {
        Self {
            request,
            frames_grabbed: 0,
            sink: None,
        }
    }
}

impl CaptureSurface for SyntheticSurface {
    fn grab_frame(&mut self) -> Result<CapturedPhoto, CaptureError> {
        self.frames_grabbed += 1;
        let frame = test_pattern(self.request.width, self.request.height, self.frames_grabbed);

        let mut encoded = Vec::new();
        frame
            .write_to(&mut Cursor::new(&mut encoded), image_rs::ImageFormat::Png)
            .map_err(|e| CaptureError::Sink(e.to_string()))?;

        Ok(CapturedPhoto::new(
            self.request.width,
            self.request.height,
            Arc::new(encoded),
        ))
    }

    fn begin_recording(&mut self) -> Result<(), CaptureError> {
        // Replacing any previous sink discards its stale fragments.
        self.sink = Some(RecordingSink::new());
        tracing::debug!("recording sink opened");
        Ok(())
    }

    fn poll_chunk(&mut self) -> Option<VideoChunk> {
        let sink = self.sink.as_mut()?;
        sink.produce_due();
        sink.pending.pop_front()
    }

    fn finish_recording(&mut self) -> Result<Vec<VideoChunk>, CaptureError> {
        let mut sink = self
            .sink
            .take()
            .ok_or_else(|| CaptureError::Sink("no recording in progress".to_string()))?;

        // The flush fragment carries whatever the encoder buffered since the
        // last emission, so a short recording still yields material.
        sink.emit();
        let tail: Vec<VideoChunk> = sink.pending.into_iter().collect();
        tracing::debug!(tail_len = tail.len(), "recording sink flushed");
        Ok(tail)
    }
}

/// Buffers encoder output between polls.
struct RecordingSink {
    next_sequence: u64,
    last_emit: Instant,
    pending: VecDeque<VideoChunk>,
}

impl RecordingSink {
    fn new() -> Self {
        Self {
            next_sequence: 0,
            last_emit: Instant::now(),
            pending: VecDeque::new(),
        }
    }

    /// Emits at most one fragment per elapsed [`CHUNK_INTERVAL`].
    fn produce_due(&mut self) {
        if self.last_emit.elapsed() >= CHUNK_INTERVAL {
            self.emit();
        }
    }

    fn emit(&mut self) {
        let sequence = self.next_sequence;
        self.next_sequence += 1;
        self.last_emit = Instant::now();

        let mut data = Vec::with_capacity(CHUNK_MAGIC.len() + 8 + CHUNK_PAYLOAD_LEN);
        data.extend_from_slice(&CHUNK_MAGIC);
        data.extend_from_slice(&sequence.to_le_bytes());
        data.extend((0..CHUNK_PAYLOAD_LEN).map(|i| (sequence as usize + i) as u8));

        self.pending.push_back(VideoChunk::new(sequence, data));
    }
}

/// Renders a deterministic gradient frame with a moving stripe, so captured
/// stills differ between grabs.
fn test_pattern(width: u32, height: u32, frame_index: u32) -> image_rs::RgbaImage {
    let stripe = (frame_index * 7) % width.max(1);
    image_rs::RgbaImage::from_fn(width, height, |x, y| {
        if x == stripe {
            image_rs::Rgba([255, 255, 255, 255])
        } else {
            let r = (x * 255 / width.max(1)) as u8;
            let g = (y * 255 / height.max(1)) as u8;
            image_rs::Rgba([r, g, 96, 255])
        }
    })
}
