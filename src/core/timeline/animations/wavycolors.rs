//! Character-Wave Coloring
//!
//! Structurally different from the word-level variants: each word is split
//! into chunks of at most four characters, and the segment's time range is
//! sliced per chunk-reveal step. Revealed chunks cycle a three-color palette;
//! the chunk being revealed stretches vertically and relaxes within its step.
//! There is no glow/text layer split and no continuity state: color, border
//! and blur are applied directly on the single emitted layer per step.

use super::{cycled_color, escape_text, renderable, slice_intervals, static_anchor, GeneratorOutput};
use crate::core::captions::Segment;
use crate::core::timeline::events::Event;
use crate::core::timeline::jitter::Jitter;
use crate::core::timeline::style::ResolvedStyle;
use crate::core::Point2D;

/// Documented fallback for a malformed palette entry (`#FF4E45`)
const DEFAULT_COLOR: &str = "&H00454EFF&";

/// Maximum characters per reveal chunk
const CHUNK_LEN: usize = 4;

/// Vertical stretch peak at the start of a chunk's step (percent)
const STRETCH_PEAK: u32 = 130;

pub fn generate(
    segment: &Segment,
    style: &ResolvedStyle,
    position: Point2D,
    _jitter: &mut Jitter,
) -> GeneratorOutput {
    if !renderable(segment) {
        return GeneratorOutput::empty(position);
    }

    // Words as chunk lists; chunk indices run across the whole segment
    let chunked: Vec<Vec<String>> = segment
        .words()
        .iter()
        .map(|word| {
            word.chars()
                .collect::<Vec<_>>()
                .chunks(CHUNK_LEN)
                .map(|c| c.iter().collect())
                .collect()
        })
        .collect();
    let step_count: usize = chunked.iter().map(|w| w.len()).sum();
    if step_count == 0 {
        return GeneratorOutput::empty(position);
    }

    let outline = style.outline_width.max(0.0);
    let blur = style.outline_blur.max(0.0);

    let mut events = Vec::new();

    // This variant never shakes: the anchor is always the static one
    let anchor_point = static_anchor(style, 0);
    let anchor = format!(
        "\\pos({},{})",
        anchor_point.x.round() as i64,
        anchor_point.y.round() as i64
    );

    let intervals = slice_intervals(segment.start_sec, segment.end_sec, step_count);
    for (step, (start, end)) in intervals.into_iter().enumerate() {
        let half_ms = ((end - start) * 500.0).round() as i64;

        let mut body = String::new();
        let mut chunk_index = 0usize;
        for (w, word) in chunked.iter().enumerate() {
            for chunk in word {
                let color = cycled_color(style, chunk_index, DEFAULT_COLOR);
                if chunk_index < step {
                    body.push_str(&format!("{{\\fscy100\\c{}}}{}", color, escape_text(chunk)));
                } else if chunk_index == step {
                    body.push_str(&format!(
                        "{{\\c{}\\fscy{STRETCH_PEAK}\\t(0,{half_ms},\\fscy100)}}{}",
                        color,
                        escape_text(chunk)
                    ));
                } else {
                    // Not yet revealed
                    body.push_str(&format!("{{\\alpha&HFF&}}{}", escape_text(chunk)));
                }
                chunk_index += 1;
            }
            if w + 1 < chunked.len() {
                body.push(' ');
            }
        }

        events.push(Event::new(
            0,
            start,
            end,
            format!("{{{anchor}\\bord{outline:.1}\\blur{blur:.1}}}{body}"),
        ));
    }

    // No continuity state: the position passes through untouched
    GeneratorOutput { events, position }
}

// =============================================================================
// Tests
// =============================================================================
