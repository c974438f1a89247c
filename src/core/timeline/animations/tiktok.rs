//! Single-Color Highlight
//!
//! The full line stays visible in neutral white; only the current word takes
//! the primary color. Each interval gets a short entrance pop on the whole
//! line.

use super::{
    anchor_tag, ass_color_or, escape_text, glow_alpha, push_layered, renderable, slice_intervals,
    GeneratorOutput, NEUTRAL_COLOR,
};
use crate::core::captions::Segment;
use crate::core::timeline::jitter::Jitter;
use crate::core::timeline::style::ResolvedStyle;
use crate::core::Point2D;

/// Documented fallback for a malformed primary color override (`#FF3B5C`)
const DEFAULT_COLOR: &str = "&H005C3BFF&";

const GLOW_ALPHA_BASE: f64 = 140.0;
const GLOW_ALPHA_STEP: f64 = 22.0;
const GLOW_BLUR: f64 = 6.0;
const GLOW_BORDER_SCALE: f64 = 2.0;

/// Entrance pop: the line enters slightly enlarged and settles
const POP_SCALE: u32 = 106;
const POP_MS: i64 = 120;

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
    let active = ass_color_or(&style.primary_color, DEFAULT_COLOR);
    let strength = style.shadow_strength.clamp(0.0, 5.0);
    let outline = style.outline_width.max(0.0);
    let blur = style.outline_blur.max(0.0);

    let pop = format!("\\fscx{POP_SCALE}\\fscy{POP_SCALE}\\t(0,{POP_MS},\\fscx100\\fscy100)");

    let mut events = Vec::new();
    let mut position = position;

    let intervals = slice_intervals(segment.start_sec, segment.end_sec, words.len());
    for (i, (start, end)) in intervals.into_iter().enumerate() {
        let (anchor, next) = anchor_tag(style, 0, start, end, position, jitter);
        position = next;

        let mut body = String::new();
        for (j, word) in words.iter().enumerate() {
            let color = if j == i { active.as_str() } else { NEUTRAL_COLOR };
            body.push_str(&format!("{{\\c{}}}{}", color, escape_text(word)));
            if j + 1 < words.len() {
                body.push(' ');
            }
        }

        let text = format!("{{{anchor}\\bord{outline:.1}\\blur{blur:.1}{pop}}}{body}");

        let glow = (strength > 0.0).then(|| {
            let alpha = glow_alpha(GLOW_ALPHA_BASE, GLOW_ALPHA_STEP, strength);
            format!(
                "{{{anchor}\\1a&HFF&\\bord{:.1}\\3c{}\\3a&H{:02X}&\\blur{:.1}{pop}}}{}",
                outline * GLOW_BORDER_SCALE + strength,
                active,
                alpha,
                GLOW_BLUR,
                escape_text(&segment.text),
            )
        });

        push_layered(&mut events, start, end, glow, text);
    }

    GeneratorOutput { events, position }
}

// =============================================================================
// Tests
// =============================================================================
