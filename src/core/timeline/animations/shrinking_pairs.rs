//! Shrink-and-Fade Pairs
//!
//! Word groups (pairs by default) land on stacked lines: each group enters
//! enlarged, shrinks to rest size, then fades toward the end of the segment.
//! Earlier groups stay on screen beneath later ones, offset one line per
//! group index.

use super::{
    anchor_tag, ass_color_or, escape_text, glow_alpha, push_layered, renderable, slice_intervals,
    GeneratorOutput,
};
use crate::core::captions::Segment;
use crate::core::timeline::jitter::Jitter;
use crate::core::timeline::style::ResolvedStyle;
use crate::core::Point2D;

/// Documented fallback for a malformed primary color override (`#9B5BFF`)
const DEFAULT_COLOR: &str = "&H00FF5B9B&";

const GLOW_ALPHA_BASE: f64 = 128.0;
const GLOW_ALPHA_STEP: f64 = 18.0;
const GLOW_BLUR: f64 = 6.0;
const GLOW_BORDER_SCALE: f64 = 2.0;

/// Entrance scale (percent) and shrink duration
const ENTRY_SCALE: u32 = 120;
const SHRINK_MS: i64 = 200;

/// Fade window at the tail of each group's run and its target alpha
const FADE_MS: i64 = 300;
const FADE_ALPHA: u8 = 0xB0;

pub fn generate(
    segment: &Segment,
    style: &ResolvedStyle,
    position: Point2D,
    jitter: &mut Jitter,
) -> GeneratorOutput {
    if !renderable(segment) {
        return GeneratorOutput::empty(position);
    }

    let words = segment.words();
    let group_size = style.words_per_group.max(1);
    let groups: Vec<String> = words.chunks(group_size).map(|g| g.join(" ")).collect();

    let active = ass_color_or(&style.primary_color, DEFAULT_COLOR);
    let strength = style.shadow_strength.clamp(0.0, 5.0);
    let outline = style.outline_width.max(0.0);
    let blur = style.outline_blur.max(0.0);

    let mut events = Vec::new();
    let mut position = position;

    let intervals = slice_intervals(segment.start_sec, segment.end_sec, groups.len());
    for (i, group) in groups.iter().enumerate() {
        // Each group appears at its interval start and stays until the
        // segment ends, stacking beneath the groups that follow
        let start = intervals[i].0;
        let end = segment.end_sec;

        let (anchor, next) = anchor_tag(style, i, start, end, position, jitter);
        position = next;

        let duration_ms = ((end - start) * 1000.0).round() as i64;
        let fade_from = (duration_ms - FADE_MS).max(0);
        let transform = format!(
            "\\fscx{ENTRY_SCALE}\\fscy{ENTRY_SCALE}\\t(0,{SHRINK_MS},\\fscx100\\fscy100)\\t({fade_from},{duration_ms},\\alpha&H{FADE_ALPHA:02X}&)"
        );

        let body = format!("{{\\c{}}}{}", active, escape_text(group));
        let text = format!("{{{anchor}\\bord{outline:.1}\\blur{blur:.1}{transform}}}{body}");

        let glow = (strength > 0.0).then(|| {
            let alpha = glow_alpha(GLOW_ALPHA_BASE, GLOW_ALPHA_STEP, strength);
            format!(
                "{{{anchor}\\1a&HFF&\\bord{:.1}\\3c{}\\3a&H{:02X}&\\blur{:.1}{transform}}}{}",
                outline * GLOW_BORDER_SCALE + strength,
                active,
                alpha,
                GLOW_BLUR,
                escape_text(group),
            )
        });

        push_layered(&mut events, start, end, glow, text);
    }

    GeneratorOutput { events, position }
}

// =============================================================================
// Tests
// =============================================================================
