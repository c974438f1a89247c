//! Animation Generators
//!
//! One module per animation variant. Every generator is a pure function of
//! `(segment, style, continuity, jitter)` returning the events for that
//! segment plus the continuity position to thread into the next call.
//!
//! # Shared contract
//!
//! - Blank text or `start >= end` produces an empty result, never an error.
//! - Word-level variants slice the segment into equal sub-intervals and emit
//!   a glow event (layer 0) plus a crisp text event (layer 1) per interval;
//!   the glow layer is omitted entirely when shadow strength resolves to 0.
//! - The active color is `palette[global_word_index % palette_len]`, where
//!   the global index continues across segment boundaries via
//!   `Segment::word_start_index`.
//! - Shake mode replaces the static `\pos` anchor with a `\move` from the
//!   current continuity position to a jittered next one.
//! - A malformed color override is caught at the point of use and replaced
//!   with the variant's documented default, with a warning.

pub mod girlboss;
pub mod hormozi;
pub mod impact;
pub mod reveal_enlarge;
pub mod shrinking_pairs;
pub mod thin_to_bold;
pub mod tiktok;
pub mod wavycolors;

use tracing::warn;

use super::codec;
use super::events::{Event, PLAY_RES_Y};
use super::jitter::Jitter;
use super::style::{MotionMode, ResolvedStyle};
use crate::core::captions::Segment;
use crate::core::{Point2D, TimeSec};

/// Continuity seed used when no previous position exists
pub const SHAKE_SEED: Point2D = Point2D { x: 670.0, y: 0.0 };

/// Neutral color for inactive words
pub(crate) const NEUTRAL_COLOR: &str = "&H00FFFFFF&";

/// Result of one generator call
#[derive(Debug)]
pub struct GeneratorOutput {
    pub events: Vec<Event>,
    /// Continuity position for the next segment
    pub position: Point2D,
}

impl GeneratorOutput {
    pub fn empty(position: Point2D) -> Self {
        Self {
            events: Vec::new(),
            position,
        }
    }
}

// =============================================================================
// Shared Helpers
// =============================================================================

/// Input guard shared by all generators: blank text and inverted time ranges
/// mean "nothing to draw", not failure.
pub(crate) fn renderable(segment: &Segment) -> bool {
    if segment.text.trim().is_empty() {
        warn!("Skipping segment with blank text at {:.2}s", segment.start_sec);
        return false;
    }
    if segment.start_sec >= segment.end_sec {
        warn!(
            "Skipping segment with invalid time range {:.2}~{:.2}s",
            segment.start_sec, segment.end_sec
        );
        return false;
    }
    true
}

/// Converts a style color at the point of use, substituting the variant's
/// documented default on malformed input.
pub(crate) fn ass_color_or(color: &str, fallback: &str) -> String {
    match codec::color_to_ass(color) {
        Ok(token) => token,
        Err(e) => {
            warn!("{}; substituting default color", e);
            fallback.to_string()
        }
    }
}

/// Active cycling color for a word: global-index modulo palette-length
pub(crate) fn cycled_color(style: &ResolvedStyle, global_index: usize, fallback: &str) -> String {
    if style.palette.is_empty() {
        return ass_color_or(&style.primary_color, fallback);
    }
    ass_color_or(&style.palette[global_index % style.palette.len()], fallback)
}

/// Global word index for word `i` of a segment: the segmenter-assigned base
/// when present, else the index within the segment
pub(crate) fn global_word_index(segment: &Segment, i: usize) -> usize {
    segment.word_start_index.map(|base| base + i).unwrap_or(i)
}

/// Slices `[start, end]` into `count` equal sub-intervals
pub(crate) fn slice_intervals(start: TimeSec, end: TimeSec, count: usize) -> Vec<(TimeSec, TimeSec)> {
    let count = count.max(1);
    let step = (end - start) / count as f64;
    (0..count)
        .map(|i| {
            let s = start + step * i as f64;
            let e = if i + 1 == count {
                end
            } else {
                start + step * (i + 1) as f64
            };
            (s, e)
        })
        .collect()
}

/// Escapes event text so user captions cannot open override blocks
pub(crate) fn escape_text(raw: &str) -> String {
    raw.replace('\\', r"\\").replace('{', r"\{").replace('}', r"\}")
}

fn fmt_px(v: f64) -> i64 {
    v.round() as i64
}

/// Static anchor computed from the vertical position percentage (measured
/// from the bottom edge) plus a per-index line-spacing offset for variants
/// that stack output lines
pub(crate) fn static_anchor(style: &ResolvedStyle, line_index: usize) -> Point2D {
    let line_gap = style.font_size as f64 * 1.3;
    Point2D {
        x: 640.0,
        y: PLAY_RES_Y as f64 * (1.0 - style.vertical_position / 100.0) + line_index as f64 * line_gap,
    }
}

/// Produces the positioning tag for one sub-interval and the continuity
/// position to carry forward.
///
/// Shake mode advances the position chain and emits a timed `\move`; static
/// mode emits `\pos` and leaves the chain untouched.
pub(crate) fn anchor_tag(
    style: &ResolvedStyle,
    line_index: usize,
    start: TimeSec,
    end: TimeSec,
    position: Point2D,
    jitter: &mut Jitter,
) -> (String, Point2D) {
    match style.motion {
        MotionMode::Shake => {
            let next = jitter.next_position(position);
            let duration_ms = ((end - start) * 1000.0).round() as i64;
            let tag = format!(
                "\\move({},{},{},{},0,{})",
                fmt_px(position.x),
                fmt_px(position.y),
                fmt_px(next.x),
                fmt_px(next.y),
                duration_ms
            );
            (tag, next)
        }
        MotionMode::None => {
            let anchor = static_anchor(style, line_index);
            let tag = format!("\\pos({},{})", fmt_px(anchor.x), fmt_px(anchor.y));
            (tag, position)
        }
    }
}

/// Pushes a glow/text event pair for one sub-interval. The glow layer is
/// skipped when `glow` is `None` (shadow strength 0 must emit no layer at
/// all rather than a zero-effect one).
pub(crate) fn push_layered(
    events: &mut Vec<Event>,
    start: TimeSec,
    end: TimeSec,
    glow: Option<String>,
    text: String,
) {
    if let Some(glow_text) = glow {
        events.push(Event::new(0, start, end, glow_text));
    }
    events.push(Event::new(1, start, end, text));
}

/// Glow outline alpha byte from a `base - strength * step` tuning curve,
/// clamped to a valid byte. Strength is re-clamped here even though the
/// resolver already clamps it.
pub(crate) fn glow_alpha(base: f64, step: f64, strength: f64) -> u8 {
    (base - strength.clamp(0.0, 5.0) * step).clamp(0.0, 255.0) as u8
}

// =============================================================================
// Tests
// =============================================================================
