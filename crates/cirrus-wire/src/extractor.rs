//! Frame extractor - recovers `VISUAL:{...}` frames from the raw stream
//!
//! The stream is append-only text: frames arrive interleaved with debug
//! output, may be split across reads, and may be malformed. A malformed
//! frame is consumed and logged, never retried; the animation simply keeps
//! its last good state.

use serde_json::Value;

use crate::StateUpdate;

/// Frame marker: the interior must be a flat JSON object (no nested braces)
const FRAME_MARKER: &str = "VISUAL:{";

/// Buffer bound; beyond this the stream is stalled or garbage
pub const MAX_BUFFER_LEN: usize = 5000;

/// How much tail survives a truncation
pub const TRUNCATED_LEN: usize = 2000;

/// Buffered extractor over the incoming byte stream
///
/// Stateless except for the carry-over buffer and counters. One instance per
/// connection; dropping it drops any in-flight partial frame.
#[derive(Debug, Default)]
pub struct FrameExtractor {
    buffer: String,
    frames_emitted: u64,
    frames_discarded: u64,
}

impl FrameExtractor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a chunk and drain every complete frame from the buffer
    ///
    /// Returns zero or more decoded events. A frame whose closing brace has
    /// not arrived yet stays buffered for the next call.
    pub fn ingest(&mut self, chunk: &str) -> Vec<StateUpdate> {
        self.buffer.push_str(chunk);

        let mut events = Vec::new();
        while let Some(start) = self.buffer.find(FRAME_MARKER) {
            let interior_start = start + FRAME_MARKER.len();
            let close = match self.buffer[interior_start..].find('}') {
                Some(rel) => interior_start + rel,
                // Frame may still be arriving
                None => break,
            };

            let interior = &self.buffer[interior_start..close];
            match serde_json::from_str::<Value>(&format!("{{{interior}}}")) {
                Ok(value) => {
                    events.push(StateUpdate::from_value(&value));
                    self.frames_emitted += 1;
                }
                Err(err) => {
                    self.frames_discarded += 1;
                    tracing::warn!(error = %err, "discarding malformed frame");
                }
            }

            // Consume through the closing brace, junk prefix included;
            // the same bytes are never re-matched.
            self.buffer.drain(..=close);
        }

        self.truncate_if_stalled();
        events
    }

    /// Lossy safety valve: a stalled or malformed stream must not grow the
    /// buffer without bound. May drop an in-flight partial frame.
    fn truncate_if_stalled(&mut self) {
        if self.buffer.len() <= MAX_BUFFER_LEN {
            return;
        }

        let mut cut = self.buffer.len() - TRUNCATED_LEN;
        while !self.buffer.is_char_boundary(cut) {
            cut += 1;
        }
        self.buffer.drain(..cut);
        tracing::warn!(kept = self.buffer.len(), "stream buffer truncated");
    }

    /// Frames successfully decoded so far
    pub fn frames_emitted(&self) -> u64 {
        self.frames_emitted
    }

    /// Frames consumed without an event (malformed interior)
    pub fn frames_discarded(&self) -> u64 {
        self.frames_discarded
    }

    /// Bytes currently carried over between calls
    pub fn buffered_len(&self) -> usize {
        self.buffer.len()
    }
}
