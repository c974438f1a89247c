//! Timeline Assembler
//!
//! Drives one compilation: resolves the style, applies the word segmenter,
//! folds continuity state through the generators in segment order, and wraps
//! the result in a single document.
//!
//! Dispatch is an exhaustive match on [`StylePreset`]: adding a preset is a
//! compile-time requirement here, not a string-matching fallthrough.

use super::animations::{self, GeneratorOutput, SHAKE_SEED};
use super::events::{ScriptHeader, Timeline};
use super::jitter::Jitter;
use super::style::{resolve, ResolvedStyle, StyleOptions, StylePreset};
use crate::core::captions::{apply_word_mode, parse_srt, Segment};
use crate::core::Point2D;

/// Opaque black, used when an outline color override cannot be parsed
const DEFAULT_OUTLINE: &str = "&H00000000&";

/// Compiles segments plus a style descriptor into a timeline document.
///
/// Zero usable segments produce a valid header-only timeline, not an error.
pub fn compile(
    segments: &[Segment],
    preset: StylePreset,
    options: &StyleOptions,
    jitter: &mut Jitter,
) -> Timeline {
    let style = resolve(preset, options);
    let sliced = apply_word_mode(segments, style.word_mode, style.words_per_group);

    let primary = animations::ass_color_or(&style.primary_color, animations::NEUTRAL_COLOR);
    let outline = animations::ass_color_or(&style.outline_color, DEFAULT_OUTLINE);
    let header = ScriptHeader::from_style(&style, primary, outline);

    // Continuity fold: each generator call receives the position the
    // previous call returned and never touches shared state
    let mut events = Vec::new();
    let mut position = SHAKE_SEED;
    for segment in &sliced {
        let output = dispatch(preset, segment, &style, position, jitter);
        position = output.position;
        events.extend(output.events);
    }

    Timeline { header, events }
}

/// Parses SRT text and compiles it in one step
pub fn compile_srt(
    srt: &str,
    preset: StylePreset,
    options: &StyleOptions,
    jitter: &mut Jitter,
) -> Timeline {
    compile(&parse_srt(srt), preset, options, jitter)
}

fn dispatch(
    preset: StylePreset,
    segment: &Segment,
    style: &ResolvedStyle,
    position: Point2D,
    jitter: &mut Jitter,
) -> GeneratorOutput {
    match preset {
        StylePreset::Girlboss => animations::girlboss::generate(segment, style, position, jitter),
        StylePreset::Hormozi => animations::hormozi::generate(segment, style, position, jitter),
        StylePreset::Tiktok => animations::tiktok::generate(segment, style, position, jitter),
        StylePreset::ThinToBold => {
            animations::thin_to_bold::generate(segment, style, position, jitter)
        }
        StylePreset::Wavycolors => {
            animations::wavycolors::generate(segment, style, position, jitter)
        }
        StylePreset::ShrinkingPairs => {
            animations::shrinking_pairs::generate(segment, style, position, jitter)
        }
        StylePreset::RevealEnlarge => {
            animations::reveal_enlarge::generate(segment, style, position, jitter)
        }
        StylePreset::Impact => animations::impact::generate(segment, style, position, jitter),
        StylePreset::ImpactHeavy => {
            animations::impact::generate_heavy(segment, style, position, jitter)
        }
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::timeline::style::MotionMode;

    fn seg(text: &str, start: f64, end: f64) -> Segment {
        Segment::new(text, start, end).unwrap()
    }

    /// Extracts the four coordinates of the first `\move(` tag in a line
    fn move_coords(render_text: &str) -> (i64, i64, i64, i64) {
        let tail = render_text.split("\\move(").nth(1).expect("move tag");
        let nums: Vec<i64> = tail
            .split(')')
            .next()
            .unwrap()
            .split(',')
            .take(4)
            .map(|n| n.parse().unwrap())
            .collect();
        (nums[0], nums[1], nums[2], nums[3])
    }

    #[test]
    fn test_every_preset_compiles_simple_input() {
        let segments = vec![seg("hello world", 0.0, 2.0)];
        for preset in StylePreset::ALL {
            let timeline = compile(&segments, preset, &StyleOptions::default(), &mut Jitter::seeded(1));
            assert!(!timeline.is_empty(), "{:?} produced no events", preset);
        }
    }

    #[test]
    fn test_events_stay_inside_their_segment() {
        let segments = vec![seg("alpha beta gamma delta", 1.0, 4.0), seg("next line here", 4.5, 6.0)];
        for preset in StylePreset::ALL {
            let timeline = compile(&segments, preset, &StyleOptions::default(), &mut Jitter::seeded(1));
            for event in &timeline.events {
                assert!(
                    (event.start_sec >= 1.0 && event.end_sec <= 4.0)
                        || (event.start_sec >= 4.5 && event.end_sec <= 6.0),
                    "{:?} leaked event {}..{}",
                    preset,
                    event.start_sec,
                    event.end_sec
                );
            }
        }
    }

    #[test]
    fn test_empty_input_yields_header_only_timeline() {
        let timeline = compile(&[], StylePreset::Hormozi, &StyleOptions::default(), &mut Jitter::seeded(1));
        assert!(timeline.is_empty());
        assert!(timeline.render().contains("[Script Info]"));
    }

    #[test]
    fn test_shake_chain_threads_positions_across_segments() {
        // Three word-segments with shake on: three move tags whose
        // coordinates chain, ending away from the seed
        let segments = vec![seg("one", 0.0, 1.0), seg("two", 1.0, 2.0), seg("three", 2.0, 3.0)];
        let options = StyleOptions {
            motion: Some(MotionMode::Shake),
            shadow_strength: Some(0.0),
            ..Default::default()
        };
        let timeline = compile(&segments, StylePreset::Hormozi, &options, &mut Jitter::seeded(3));

        assert_eq!(timeline.events.len(), 3);
        let coords: Vec<(i64, i64, i64, i64)> = timeline
            .events
            .iter()
            .map(|e| move_coords(&e.render_text))
            .collect();

        // First call starts from the seed
        assert_eq!((coords[0].0, coords[0].1), (670, 0));
        // Each subsequent move begins where the previous ended; the
        // float-level position advance itself is covered by the jitter and
        // anchor tests
        assert_eq!((coords[1].0, coords[1].1), (coords[0].2, coords[0].3));
        assert_eq!((coords[2].0, coords[2].1), (coords[1].2, coords[1].3));
    }

    #[test]
    fn test_word_mode_comes_from_resolved_style() {
        // Hormozi defaults to single word mode: two events per word with
        // the default shadow strength
        let segments = vec![seg("hello world", 0.0, 2.0)];
        let timeline = compile(&segments, StylePreset::Hormozi, &StyleOptions::default(), &mut Jitter::seeded(1));
        assert_eq!(timeline.events.len(), 4);
    }

    #[test]
    fn test_unparseable_style_colors_fall_back_in_header() {
        let options = StyleOptions {
            primary_color: Some("notacolor".to_string()),
            outline_color: Some("alsobad".to_string()),
            ..Default::default()
        };
        let timeline = compile(
            &[seg("hi", 0.0, 1.0)],
            StylePreset::Tiktok,
            &options,
            &mut Jitter::seeded(1),
        );
        assert_eq!(timeline.header.primary_colour, animations::NEUTRAL_COLOR);
        assert_eq!(timeline.header.outline_colour, DEFAULT_OUTLINE);
        assert!(!timeline.is_empty());
    }

    #[test]
    fn test_compile_srt_end_to_end() {
        let srt = "1\n00:00:00,000 --> 00:00:02,000\nhello world\n\n2\n00:00:02,000 --> 00:00:03,000\nagain\n";
        let timeline = compile_srt(srt, StylePreset::Girlboss, &StyleOptions::default(), &mut Jitter::seeded(1));
        assert!(!timeline.is_empty());
        let doc = timeline.render();
        assert!(doc.contains("Dialogue: "));
    }
}
