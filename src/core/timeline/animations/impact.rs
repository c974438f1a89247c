//! Impact Variants
//!
//! Whole-segment slams: the entire segment text is treated as one
//! unbreakable unit, uppercased, and drawn with a single glow/text pair
//! spanning the full time range. The heavy variant adds an entrance pop and
//! a translucent drop shadow on top of a stronger glow.

use super::{
    anchor_tag, ass_color_or, escape_text, glow_alpha, push_layered, renderable, GeneratorOutput,
};
use crate::core::captions::Segment;
use crate::core::timeline::jitter::Jitter;
use crate::core::timeline::style::ResolvedStyle;
use crate::core::Point2D;

/// Documented fallback for a malformed primary color override (`#FFFFFF`)
const DEFAULT_COLOR: &str = "&H00FFFFFF&";
/// Documented fallback for the heavy variant (`#FFE000`)
const DEFAULT_HEAVY_COLOR: &str = "&H0000E0FF&";

struct Tuning {
    fallback: &'static str,
    glow_alpha_base: f64,
    glow_alpha_step: f64,
    glow_blur: f64,
    glow_border_scale: f64,
    /// Entrance pop `(scale percent, settle ms)`, if any
    entrance: Option<(u32, i64)>,
    /// Whether to add a translucent drop shadow (`\shad` + `\4a`)
    drop_shadow: bool,
}

const BASIC: Tuning = Tuning {
    fallback: DEFAULT_COLOR,
    glow_alpha_base: 120.0,
    glow_alpha_step: 20.0,
    glow_blur: 6.0,
    glow_border_scale: 2.0,
    entrance: None,
    drop_shadow: false,
};

const HEAVY: Tuning = Tuning {
    fallback: DEFAULT_HEAVY_COLOR,
    glow_alpha_base: 150.0,
    glow_alpha_step: 20.0,
    glow_blur: 8.0,
    glow_border_scale: 2.5,
    entrance: Some((130, 120)),
    drop_shadow: true,
};

pub fn generate(
    segment: &Segment,
    style: &ResolvedStyle,
    position: Point2D,
    jitter: &mut Jitter,
) -> GeneratorOutput {
    whole_segment(segment, style, position, jitter, &BASIC)
}

pub fn generate_heavy(
    segment: &Segment,
    style: &ResolvedStyle,
    position: Point2D,
    jitter: &mut Jitter,
) -> GeneratorOutput {
    whole_segment(segment, style, position, jitter, &HEAVY)
}

fn whole_segment(
    segment: &Segment,
    style: &ResolvedStyle,
    position: Point2D,
    jitter: &mut Jitter,
    tuning: &Tuning,
) -> GeneratorOutput {
    if !renderable(segment) {
        return GeneratorOutput::empty(position);
    }

    let active = ass_color_or(&style.primary_color, tuning.fallback);
    let strength = style.shadow_strength.clamp(0.0, 5.0);
    let outline = style.outline_width.max(0.0);
    let blur = style.outline_blur.max(0.0);

    let (start, end) = (segment.start_sec, segment.end_sec);
    let (anchor, next) = anchor_tag(style, 0, start, end, position, jitter);

    let entrance = tuning
        .entrance
        .map(|(scale, ms)| format!("\\fscx{scale}\\fscy{scale}\\t(0,{ms},\\fscx100\\fscy100)"))
        .unwrap_or_default();

    let shadow = if tuning.drop_shadow {
        let shadow_alpha = glow_alpha(tuning.glow_alpha_base, tuning.glow_alpha_step, strength);
        format!("\\shad{:.1}\\4a&H{:02X}&", strength, shadow_alpha)
    } else {
        String::new()
    };

    let body = escape_text(&segment.text.to_uppercase());
    let text = format!(
        "{{{anchor}\\bord{outline:.1}\\blur{blur:.1}{shadow}{entrance}\\c{active}}}{body}"
    );

    let glow = (strength > 0.0).then(|| {
        let alpha = glow_alpha(tuning.glow_alpha_base, tuning.glow_alpha_step, strength);
        format!(
            "{{{anchor}\\1a&HFF&\\bord{:.1}\\3c{}\\3a&H{:02X}&\\blur{:.1}{entrance}}}{body}",
            outline * tuning.glow_border_scale + strength,
            active,
            alpha,
            tuning.glow_blur,
        )
    });

    let mut events = Vec::new();
    push_layered(&mut events, start, end, glow, text);

    GeneratorOutput {
        events,
        position: next,
    }
}

// =============================================================================
// Tests
// =============================================================================
