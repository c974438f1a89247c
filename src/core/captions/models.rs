//! Caption Segment Models
//!
//! Defines the time-coded text segment consumed by the timeline compiler,
//! plus the word-mode selector used by the segmenter.

use serde::{Deserialize, Serialize};

use crate::core::{CompileError, CompileResult, TimeSec};

// =============================================================================
// Word Mode
// =============================================================================

/// Strategy for re-slicing a segment into smaller time-sliced units before
/// animation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum WordMode {
    /// Keep segments as parsed (one event group per subtitle line)
    #[default]
    Normal,
    /// One word per segment, duration split evenly
    Single,
    /// Groups of `words_per_group` consecutive words per segment
    Multiple,
}

// =============================================================================
// Segment
// =============================================================================

/// A single time-bounded span of caption text.
///
/// Invariants: `start_sec < end_sec` and the text is non-blank. Segments are
/// immutable once created; the word segmenter produces new segments rather
/// than mutating existing ones.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Segment {
    /// Caption text
    pub text: String,
    /// Start time in seconds
    pub start_sec: TimeSec,
    /// End time in seconds
    pub end_sec: TimeSec,
    /// Running index of this segment's first word across the whole caption
    /// track. Assigned by the word segmenter; used to keep color cycling
    /// continuous across segment boundaries.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub word_start_index: Option<usize>,
}

impl Segment {
    /// Creates a new segment, validating the timing and text invariants
    pub fn new(text: &str, start_sec: TimeSec, end_sec: TimeSec) -> CompileResult<Self> {
        if text.trim().is_empty() {
            return Err(CompileError::EmptyText);
        }
        if start_sec >= end_sec {
            return Err(CompileError::InvalidTimeRange(start_sec, end_sec));
        }
        Ok(Self {
            text: text.to_string(),
            start_sec,
            end_sec,
            word_start_index: None,
        })
    }

    /// Sets the global word index of this segment's first word
    pub fn with_word_start_index(mut self, index: usize) -> Self {
        self.word_start_index = Some(index);
        self
    }

    /// Returns the duration of this segment in seconds
    pub fn duration(&self) -> TimeSec {
        self.end_sec - self.start_sec
    }

    /// Returns the whitespace-separated words of this segment
    pub fn words(&self) -> Vec<&str> {
        self.text.split_whitespace().collect()
    }

    /// Returns the number of words in this segment
    pub fn word_count(&self) -> usize {
        self.text.split_whitespace().count()
    }

    /// Returns true if the segment has drawable text and a positive duration
    pub fn is_renderable(&self) -> bool {
        !self.text.trim().is_empty() && self.start_sec < self.end_sec
    }
}

// =============================================================================
// Tests
// =============================================================================
