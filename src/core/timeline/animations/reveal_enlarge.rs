//! Reveal and Enlarge
//!
//! Words appear one at a time and stay visible; the word being revealed
//! enters enlarged in the primary color and settles to rest size, while
//! words not yet reached remain hidden.

use super::{
    anchor_tag, ass_color_or, escape_text, glow_alpha, push_layered, renderable, slice_intervals,
    GeneratorOutput, NEUTRAL_COLOR,
};
use crate::core::captions::Segment;
use crate::core::timeline::jitter::Jitter;
use crate::core::timeline::style::ResolvedStyle;
use crate::core::Point2D;

/// Documented fallback for a malformed primary color override (`#00E0FF`)
const DEFAULT_COLOR: &str = "&H00FFE000&";

const GLOW_ALPHA_BASE: f64 = 137.0;
const GLOW_ALPHA_STEP: f64 = 21.0;
const GLOW_BLUR: f64 = 6.0;
const GLOW_BORDER_SCALE: f64 = 2.0;

/// Entrance scale (percent) and settle duration for the revealed word
const ENLARGE_SCALE: u32 = 115;
const SETTLE_MS: i64 = 150;

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

    let mut events = Vec::new();
    let mut position = position;

    let intervals = slice_intervals(segment.start_sec, segment.end_sec, words.len());
    for (i, (start, end)) in intervals.into_iter().enumerate() {
        let (anchor, next) = anchor_tag(style, 0, start, end, position, jitter);
        position = next;

        let mut body = String::new();
        for (j, word) in words.iter().enumerate() {
            if j < i {
                body.push_str(&format!(
                    "{{\\fscx100\\fscy100\\c{}}}{}",
                    NEUTRAL_COLOR,
                    escape_text(word)
                ));
            } else if j == i {
                body.push_str(&format!(
                    "{{\\c{}\\fscx{ENLARGE_SCALE}\\fscy{ENLARGE_SCALE}\\t(0,{SETTLE_MS},\\fscx100\\fscy100)}}{}",
                    active,
                    escape_text(word)
                ));
            } else {
                body.push_str(&format!("{{\\alpha&HFF&}}{}", escape_text(word)));
            }
            if j + 1 < words.len() {
                body.push(' ');
            }
        }

        let text = format!("{{{anchor}\\bord{outline:.1}\\blur{blur:.1}}}{body}");

        let glow = (strength > 0.0).then(|| {
            let alpha = glow_alpha(GLOW_ALPHA_BASE, GLOW_ALPHA_STEP, strength);
            format!(
                "{{{anchor}\\1a&HFF&\\bord{:.1}\\3c{}\\3a&H{:02X}&\\blur{:.1}}}{}",
                outline * GLOW_BORDER_SCALE + strength,
                active,
                alpha,
                GLOW_BLUR,
                escape_text(&words[..=i].join(" ")),
            )
        });

        push_layered(&mut events, start, end, glow, text);
    }

    GeneratorOutput { events, position }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::super::SHAKE_SEED;
    use super::*;
    use crate::core::timeline::style::{resolve, StyleOptions, StylePreset};

    fn style() -> ResolvedStyle {
        resolve(StylePreset::RevealEnlarge, &StyleOptions::default())
    }

    #[test]
    fn test_unrevealed_words_hidden_and_current_enlarged() {
        let segment = Segment::new("grow big now", 0.0, 3.0).unwrap();
        let style = style();
        let output = generate(&segment, &style, SHAKE_SEED, &mut Jitter::seeded(1));
        let active = ass_color_or(&style.primary_color, DEFAULT_COLOR);

        let first = &output.events[1].render_text;
        assert!(first.contains(&format!(
            "{{\\c{}\\fscx115\\fscy115\\t(0,150,\\fscx100\\fscy100)}}grow",
            active
        )));
        assert!(first.contains("{\\alpha&HFF&}big"));
        assert!(first.contains("{\\alpha&HFF&}now"));
    }

    #[test]
    fn test_revealed_words_settle_to_neutral() {
        let segment = Segment::new("grow big", 0.0, 2.0).unwrap();
        let output = generate(&segment, &style(), SHAKE_SEED, &mut Jitter::seeded(1));

        let second = &output.events[3].render_text;
        assert!(second.contains(&format!("{{\\fscx100\\fscy100\\c{}}}grow", NEUTRAL_COLOR)));
    }

    #[test]
    fn test_glow_covers_only_revealed_words() {
        let segment = Segment::new("grow big now", 0.0, 3.0).unwrap();
        let output = generate(&segment, &style(), SHAKE_SEED, &mut Jitter::seeded(1));

        // First interval's glow layer carries only the first word
        let glow = &output.events[0].render_text;
        assert!(glow.ends_with("grow"));
        assert!(!glow.contains("now"));
    }
}
