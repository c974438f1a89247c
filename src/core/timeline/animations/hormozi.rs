//! Multi-Color Word Flash
//!
//! Uppercased words flash one at a time, each taking the next color from the
//! cycling palette. The palette index is the global word index, so the cycle
//! runs continuously across the whole caption track instead of restarting at
//! every subtitle line.

use super::{
    anchor_tag, cycled_color, escape_text, glow_alpha, global_word_index, push_layered, renderable,
    slice_intervals, GeneratorOutput, NEUTRAL_COLOR,
};
use crate::core::captions::Segment;
use crate::core::timeline::jitter::Jitter;
use crate::core::timeline::style::ResolvedStyle;
use crate::core::Point2D;

/// Documented fallback for a malformed palette entry (`#2DE471`)
const DEFAULT_COLOR: &str = "&H0071E42D&";

const GLOW_ALPHA_BASE: f64 = 150.0;
const GLOW_ALPHA_STEP: f64 = 20.0;
const GLOW_BLUR: f64 = 7.0;
const GLOW_BORDER_SCALE: f64 = 2.0;

pub fn generate(
    segment: &Segment,
    style: &ResolvedStyle,
    position: Point2D,
    jitter: &mut Jitter,
) -> GeneratorOutput {
    if !renderable(segment) {
        return GeneratorOutput::empty(position);
    }

    let words: Vec<String> = segment.words().iter().map(|w| w.to_uppercase()).collect();
    let strength = style.shadow_strength.clamp(0.0, 5.0);
    let outline = style.outline_width.max(0.0);
    let blur = style.outline_blur.max(0.0);

    let mut events = Vec::new();
    let mut position = position;

    let intervals = slice_intervals(segment.start_sec, segment.end_sec, words.len());
    for (i, (start, end)) in intervals.into_iter().enumerate() {
        let active = cycled_color(style, global_word_index(segment, i), DEFAULT_COLOR);
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

        let text = format!("{{{anchor}\\bord{outline:.1}\\blur{blur:.1}}}{body}");

        let glow = (strength > 0.0).then(|| {
            let alpha = glow_alpha(GLOW_ALPHA_BASE, GLOW_ALPHA_STEP, strength);
            format!(
                "{{{anchor}\\1a&HFF&\\bord{:.1}\\3c{}\\3a&H{:02X}&\\blur{:.1}}}{}",
                outline * GLOW_BORDER_SCALE + strength,
                active,
                alpha,
                GLOW_BLUR,
                escape_text(&words.join(" ")),
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
    use crate::core::captions::{apply_word_mode, WordMode};
    use crate::core::timeline::codec::color_to_ass;
    use crate::core::timeline::style::{resolve, StyleOptions, StylePreset};

    fn style() -> ResolvedStyle {
        resolve(StylePreset::Hormozi, &StyleOptions::default())
    }

    #[test]
    fn test_palette_cycles_by_global_word_index() {
        // "hello world" over 0..2s in single word mode: exactly two 1s
        // word-segments, colored palette[0] and palette[1]
        let source = Segment::new("hello world", 0.0, 2.0).unwrap();
        let sliced = apply_word_mode(&[source], WordMode::Single, 1);
        assert_eq!(sliced.len(), 2);
        assert_eq!(sliced[0].duration(), 1.0);
        assert_eq!(sliced[1].duration(), 1.0);

        let style = style();
        let mut jitter = Jitter::seeded(1);

        let first = generate(&sliced[0], &style, SHAKE_SEED, &mut jitter);
        let second = generate(&sliced[1], &style, first.position, &mut jitter);

        let palette0 = color_to_ass(&style.palette[0]).unwrap();
        let palette1 = color_to_ass(&style.palette[1]).unwrap();
        assert!(first.events.last().unwrap().render_text.contains(&palette0));
        assert!(second.events.last().unwrap().render_text.contains(&palette1));
    }

    #[test]
    fn test_only_current_word_is_colored() {
        let segment = Segment::new("one two three", 0.0, 3.0).unwrap();
        let style = style();
        let output = generate(&segment, &style, SHAKE_SEED, &mut Jitter::seeded(1));

        // Second interval text event: word 1 colored, words 0 and 2 neutral
        let text = &output.events[3].render_text;
        let active = color_to_ass(&style.palette[1]).unwrap();
        assert!(text.contains(&format!("{{\\c{}}}TWO", active)));
        assert!(text.contains(&format!("{{\\c{}}}ONE", NEUTRAL_COLOR)));
        assert!(text.contains(&format!("{{\\c{}}}THREE", NEUTRAL_COLOR)));
    }

    #[test]
    fn test_malformed_palette_entry_falls_back_and_still_emits() {
        let options = StyleOptions {
            palette: Some(vec!["notacolor".to_string()]),
            ..Default::default()
        };
        let style = resolve(StylePreset::Hormozi, &options);
        let segment = Segment::new("hello", 0.0, 1.0).unwrap();
        let output = generate(&segment, &style, SHAKE_SEED, &mut Jitter::seeded(1));

        assert!(!output.events.is_empty());
        assert!(output.events.last().unwrap().render_text.contains(DEFAULT_COLOR));
    }

    #[test]
    fn test_inverted_range_yields_no_events() {
        let segment = Segment {
            text: "hello".into(),
            start_sec: 2.0,
            end_sec: 2.0,
            word_start_index: None,
        };
        let output = generate(&segment, &style(), SHAKE_SEED, &mut Jitter::seeded(1));
        assert!(output.events.is_empty());
    }

    #[test]
    fn test_events_stay_inside_segment_range() {
        let segment = Segment::new("a b c d e", 1.5, 4.25).unwrap();
        let output = generate(&segment, &style(), SHAKE_SEED, &mut Jitter::seeded(1));
        assert!(output
            .events
            .iter()
            .all(|e| e.start_sec >= 1.5 && e.end_sec <= 4.25));
    }
}
