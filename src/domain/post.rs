// SPDX-License-Identifier: MPL-2.0
//! Content types for a single compose session.
//!
//! Everything here is transient: created by user interaction, alive for one
//! compose session, destroyed together on reset. No persistence.

use std::sync::Arc;

/// Maximum caption length in characters (photo and video posts).
pub const MAX_CAPTION_CHARS: usize = 200;

/// Maximum text body length in characters (text posts).
pub const MAX_TEXT_CHARS: usize = 500;

/// The selected content type for the current compose session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Photo,
    Video,
    Text,
}

/// Free text attached to a photo or video post, bounded to
/// [`MAX_CAPTION_CHARS`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Caption(String);

impl Caption {
    /// Builds a caption from raw input, truncating at a character boundary
    /// when the input exceeds the bound.
    #[must_use]
    pub fn from_input(input: &str) -> Self {
        Self(bounded(input, MAX_CAPTION_CHARS))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// The entire content of a text-mode post, bounded to [`MAX_TEXT_CHARS`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextBody(String);

impl TextBody {
    /// Builds a text body from raw input, truncating at a character boundary
    /// when the input exceeds the bound.
    #[must_use]
    pub fn from_input(input: &str) -> Self {
        Self(bounded(input, MAX_TEXT_CHARS))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether the body is non-empty after trimming surrounding whitespace.
    /// This is the postability criterion for text posts.
    #[must_use]
    pub fn has_content(&self) -> bool {
        !self.0.trim().is_empty()
    }
}

/// Truncates `input` to at most `max_chars` characters, never splitting a
/// character.
fn bounded(input: &str, max_chars: usize) -> String {
    match input.char_indices().nth(max_chars) {
        Some((byte_index, _)) => input[..byte_index].to_string(),
        None => input.to_string(),
    }
}

/// An in-memory still image grabbed from the live capture surface.
///
/// Holds the encoded bytes (PNG) plus pixel dimensions; the presentation
/// layer converts the bytes into a framework image handle for preview.
#[derive(Debug, Clone)]
pub struct CapturedPhoto {
    width: u32,
    height: u32,
    encoded: Arc<Vec<u8>>,
}

impl CapturedPhoto {
    #[must_use]
    pub fn new(width: u32, height: u32, encoded: Arc<Vec<u8>>) -> Self {
        Self {
            width,
            height,
            encoded,
        }
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Encoded image bytes, cheaply cloneable for the preview widget.
    #[must_use]
    pub fn bytes(&self) -> Arc<Vec<u8>> {
        Arc::clone(&self.encoded)
    }
}

/// One opaque binary media fragment produced by the recording sink.
///
/// Sequence numbers are assigned by the sink in delivery order; assembly
/// preserves that order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VideoChunk {
    sequence: u64,
    data: Arc<Vec<u8>>,
}

impl VideoChunk {
    #[must_use]
    pub fn new(sequence: u64, data: Vec<u8>) -> Self {
        Self {
            sequence,
            data: Arc::new(data),
        }
    }

    #[must_use]
    pub fn sequence(&self) -> u64 {
        self.sequence
    }

    #[must_use]
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

/// A finalized, playable recording assembled from the chunks of one session.
#[derive(Debug, Clone)]
pub struct CapturedVideo {
    bytes: Arc<Vec<u8>>,
    chunk_count: usize,
}

impl CapturedVideo {
    /// Concatenates `chunks` in the order given. The caller guarantees the
    /// slice holds every chunk delivered before the recording was stopped,
    /// in arrival order.
    #[must_use]
    pub fn assemble(chunks: &[VideoChunk]) -> Self {
        let total: usize = chunks.iter().map(VideoChunk::len).sum();
        let mut bytes = Vec::with_capacity(total);
        for chunk in chunks {
            bytes.extend_from_slice(chunk.data());
        }
        Self {
            bytes: Arc::new(bytes),
            chunk_count: chunks.len(),
        }
    }

    #[must_use]
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    #[must_use]
    pub fn chunk_count(&self) -> usize {
        self.chunk_count
    }

    #[must_use]
    pub fn size_bytes(&self) -> usize {
        self.bytes.len()
    }
}
