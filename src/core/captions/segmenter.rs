//! Word Segmenter
//!
//! Re-slices parsed segments into word-level or word-group-level segments,
//! redistributing each segment's duration proportionally and tracking a
//! running global word index. The index persists across segments so that
//! color-cycling animations alternate continuously across an entire caption
//! track instead of restarting at each subtitle line.

use tracing::debug;

use super::{Segment, WordMode};

/// Applies a word mode to a segment list.
///
/// * `Normal` is the identity transform.
/// * `Single` emits one segment per word; each word receives an equal share
///   of the source segment's duration.
/// * `Multiple` emits one segment per group of `words_per_group` consecutive
///   words (the last group may be shorter); each group's share of the
///   duration is proportional to its word count.
///
/// Segments with zero words after filtering empty tokens are dropped.
pub fn apply_word_mode(segments: &[Segment], mode: WordMode, words_per_group: usize) -> Vec<Segment> {
    match mode {
        WordMode::Normal => segments.to_vec(),
        WordMode::Single => slice_groups(segments, 1),
        WordMode::Multiple => slice_groups(segments, words_per_group.max(1)),
    }
}

fn slice_groups(segments: &[Segment], group_size: usize) -> Vec<Segment> {
    let mut out = Vec::new();
    // Global word counter, never reset between segments
    let mut word_index = 0usize;

    for segment in segments {
        let words = segment.words();
        if words.is_empty() {
            debug!("Dropping segment with no words at {:.2}s", segment.start_sec);
            continue;
        }

        let total = segment.duration();
        let word_count = words.len();
        let group_count = word_count.div_ceil(group_size);
        let mut cursor = segment.start_sec;

        for (gi, group) in words.chunks(group_size).enumerate() {
            let share = total * group.len() as f64 / word_count as f64;
            let start = cursor;
            // The last group absorbs any floating-point remainder so the
            // per-group durations sum exactly to the source duration
            let end = if gi + 1 == group_count {
                segment.end_sec
            } else {
                start + share
            };
            cursor = end;

            out.push(Segment {
                text: group.join(" "),
                start_sec: start,
                end_sec: end,
                word_start_index: Some(word_index),
            });
            word_index += group.len();
        }
    }

    out
}

// =============================================================================
// Tests
// =============================================================================
