//! Animation Style Resolver
//!
//! Maps a style preset name plus user overrides to a fully-defaulted
//! configuration. Resolution happens exactly once, before any generator
//! runs, so generators never branch on field presence: they receive a
//! complete [`ResolvedStyle`] and only clamp numeric ranges defensively.

use serde::{Deserialize, Serialize};

use crate::core::captions::WordMode;

// =============================================================================
// Presets
// =============================================================================

/// The animation styles the compiler can produce.
///
/// Adding a variant here is a compile-time exhaustiveness requirement on the
/// assembler's dispatch; there is no fallthrough string matching past this
/// boundary.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StylePreset {
    /// Progressive reveal: words light up left to right and stay lit
    Girlboss,
    /// Word flash with a palette that cycles across the whole track
    Hormozi,
    /// Full line visible, current word highlighted in one color
    Tiktok,
    /// Current word snaps from thin to bold weight
    ThinToBold,
    /// Character-wave coloring over ≤4-character chunks
    Wavycolors,
    /// Word pairs that shrink and fade on stacked lines
    ShrinkingPairs,
    /// Progressive reveal with the current word enlarged
    RevealEnlarge,
    /// Whole segment slammed on screen as one unit
    Impact,
    /// Impact with a heavier glow and entrance pop
    ImpactHeavy,
}

impl StylePreset {
    /// All presets, in dispatch order
    pub const ALL: [StylePreset; 9] = [
        StylePreset::Girlboss,
        StylePreset::Hormozi,
        StylePreset::Tiktok,
        StylePreset::ThinToBold,
        StylePreset::Wavycolors,
        StylePreset::ShrinkingPairs,
        StylePreset::RevealEnlarge,
        StylePreset::Impact,
        StylePreset::ImpactHeavy,
    ];
}

// =============================================================================
// Motion Mode
// =============================================================================

/// Positioning behavior for emitted events
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum MotionMode {
    /// Static `\pos` anchor derived from the vertical position
    #[default]
    None,
    /// Jittered `\move` anchors threaded across consecutive segments
    Shake,
}

// =============================================================================
// Text Alignment
// =============================================================================

/// Horizontal alignment of caption text (1=left, 2=center, 3=right on the
/// emitted style line)
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum TextAlignment {
    Left,
    #[default]
    Center,
    Right,
}

impl TextAlignment {
    pub fn to_ass(self) -> u8 {
        match self {
            TextAlignment::Left => 1,
            TextAlignment::Center => 2,
            TextAlignment::Right => 3,
        }
    }
}

// =============================================================================
// User Overrides
// =============================================================================

/// Per-request style overrides, as received from the request layer.
///
/// Every field is optional; anything unset falls back to the preset default.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StyleOptions {
    pub font_family: Option<String>,
    pub font_size: Option<u32>,
    /// Primary color as `#RRGGBB` or `rgb()/rgba()`
    pub primary_color: Option<String>,
    /// Ordered cycling palette; same syntax as `primary_color`
    pub palette: Option<Vec<String>>,
    /// Glow/shadow strength, clamped to `[0, 5]`
    pub shadow_strength: Option<f64>,
    pub outline_width: Option<f64>,
    pub outline_color: Option<String>,
    pub outline_blur: Option<f64>,
    /// Vertical position percentage from the bottom, clamped to `[0, 100]`
    pub vertical_position: Option<f64>,
    pub motion: Option<MotionMode>,
    pub alignment: Option<TextAlignment>,
    pub word_mode: Option<WordMode>,
    /// Words per group for `multiple` word mode, at least 1
    pub words_per_group: Option<usize>,
}

// =============================================================================
// Resolved Style
// =============================================================================

/// A fully-defaulted per-animation configuration.
///
/// Color fields stay in source syntax (`#RRGGBB` / `rgba()`): conversion to
/// the document encoding happens at the point of use inside each generator,
/// which substitutes its documented default on a malformed override instead
/// of failing the timeline.
#[derive(Clone, Debug, PartialEq)]
pub struct ResolvedStyle {
    pub preset: StylePreset,
    pub font_family: String,
    pub font_size: u32,
    pub primary_color: String,
    pub palette: Vec<String>,
    pub shadow_strength: f64,
    pub outline_width: f64,
    pub outline_color: String,
    pub outline_blur: f64,
    pub vertical_position: f64,
    pub motion: MotionMode,
    pub alignment: TextAlignment,
    pub word_mode: WordMode,
    pub words_per_group: usize,
}

/// Per-preset defaults. These are tuned visual presets, not derived values.
fn preset_defaults(preset: StylePreset) -> ResolvedStyle {
    let base = |font: &str, size: u32, primary: &str, palette: &[&str], mode: WordMode| ResolvedStyle {
        preset,
        font_family: font.to_string(),
        font_size: size,
        primary_color: primary.to_string(),
        palette: palette.iter().map(|c| c.to_string()).collect(),
        shadow_strength: 2.0,
        outline_width: 3.0,
        outline_color: "#000000".to_string(),
        outline_blur: 0.0,
        vertical_position: 50.0,
        motion: MotionMode::None,
        alignment: TextAlignment::Center,
        word_mode: mode,
        words_per_group: 1,
    };

    match preset {
        StylePreset::Girlboss => base(
            "Montserrat SemiBold",
            64,
            "#FF7BDA",
            &["#FF7BDA"],
            WordMode::Normal,
        ),
        StylePreset::Hormozi => base(
            "Montserrat ExtraBold",
            64,
            "#2DE471",
            &["#2DE471", "#FFE259", "#FF4E45", "#37B6FF"],
            WordMode::Single,
        ),
        StylePreset::Tiktok => base(
            "Proxima Nova Semibold",
            60,
            "#FF3B5C",
            &["#FF3B5C"],
            WordMode::Normal,
        ),
        StylePreset::ThinToBold => base(
            "Montserrat",
            62,
            "#FFD700",
            &["#FFD700"],
            WordMode::Normal,
        ),
        StylePreset::Wavycolors => base(
            "Titan One",
            66,
            "#FF4E45",
            &["#FF4E45", "#FFE259", "#37B6FF"],
            WordMode::Normal,
        ),
        StylePreset::ShrinkingPairs => {
            // Pairs are grouped inside the generator so they can stack on
            // one line per pair; the segmenter leaves the line whole
            let mut style = base(
                "Poppins SemiBold",
                58,
                "#9B5BFF",
                &["#9B5BFF"],
                WordMode::Normal,
            );
            style.words_per_group = 2;
            style
        }
        StylePreset::RevealEnlarge => base(
            "Poppins ExtraBold",
            62,
            "#00E0FF",
            &["#00E0FF"],
            WordMode::Normal,
        ),
        StylePreset::Impact => {
            let mut style = base("Anton", 72, "#FFFFFF", &["#FFFFFF"], WordMode::Normal);
            style.vertical_position = 20.0;
            style
        }
        StylePreset::ImpactHeavy => {
            let mut style = base("Anton", 76, "#FFE000", &["#FFE000"], WordMode::Normal);
            style.vertical_position = 20.0;
            style.shadow_strength = 4.0;
            style.outline_width = 4.0;
            style
        }
    }
}

/// Resolves a preset plus user overrides into a complete style.
///
/// Overrides always win over preset defaults. Numeric ranges are clamped
/// here; generators clamp again at the point of use.
pub fn resolve(preset: StylePreset, options: &StyleOptions) -> ResolvedStyle {
    let mut style = preset_defaults(preset);

    if let Some(font) = &options.font_family {
        style.font_family = font.clone();
    }
    if let Some(size) = options.font_size {
        style.font_size = size.clamp(1, 500);
    }
    if let Some(color) = &options.primary_color {
        style.primary_color = color.clone();
    }
    if let Some(palette) = &options.palette {
        if !palette.is_empty() {
            style.palette = palette.clone();
        }
    }
    if let Some(strength) = options.shadow_strength {
        style.shadow_strength = strength.clamp(0.0, 5.0);
    }
    if let Some(width) = options.outline_width {
        style.outline_width = width.max(0.0);
    }
    if let Some(color) = &options.outline_color {
        style.outline_color = color.clone();
    }
    if let Some(blur) = options.outline_blur {
        style.outline_blur = blur.max(0.0);
    }
    if let Some(position) = options.vertical_position {
        style.vertical_position = position.clamp(0.0, 100.0);
    }
    if let Some(motion) = options.motion {
        style.motion = motion;
    }
    if let Some(alignment) = options.alignment {
        style.alignment = alignment;
    }
    if let Some(mode) = options.word_mode {
        style.word_mode = mode;
    }
    if let Some(group) = options.words_per_group {
        style.words_per_group = group.max(1);
    }

    style
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_complete_for_every_preset() {
        for preset in StylePreset::ALL {
            let style = resolve(preset, &StyleOptions::default());
            assert!(!style.font_family.is_empty());
            assert!(!style.palette.is_empty());
            assert!((0.0..=5.0).contains(&style.shadow_strength));
            assert!(style.outline_width >= 0.0);
            assert!((0.0..=100.0).contains(&style.vertical_position));
            assert!(style.words_per_group >= 1);
        }
    }

    #[test]
    fn test_overrides_win() {
        let options = StyleOptions {
            font_family: Some("Futura".to_string()),
            primary_color: Some("#112233".to_string()),
            motion: Some(MotionMode::Shake),
            word_mode: Some(WordMode::Multiple),
            words_per_group: Some(3),
            ..Default::default()
        };
        let style = resolve(StylePreset::Hormozi, &options);

        assert_eq!(style.font_family, "Futura");
        assert_eq!(style.primary_color, "#112233");
        assert_eq!(style.motion, MotionMode::Shake);
        assert_eq!(style.word_mode, WordMode::Multiple);
        assert_eq!(style.words_per_group, 3);
        // Untouched fields keep preset defaults
        assert_eq!(style.palette.len(), 4);
    }

    #[test]
    fn test_numeric_overrides_are_clamped() {
        let options = StyleOptions {
            shadow_strength: Some(99.0),
            outline_width: Some(-4.0),
            vertical_position: Some(150.0),
            words_per_group: Some(0),
            ..Default::default()
        };
        let style = resolve(StylePreset::Tiktok, &options);

        assert_eq!(style.shadow_strength, 5.0);
        assert_eq!(style.outline_width, 0.0);
        assert_eq!(style.vertical_position, 100.0);
        assert_eq!(style.words_per_group, 1);
    }

    #[test]
    fn test_empty_palette_override_ignored() {
        let options = StyleOptions {
            palette: Some(vec![]),
            ..Default::default()
        };
        let style = resolve(StylePreset::Hormozi, &options);
        assert_eq!(style.palette.len(), 4);
    }

    #[test]
    fn test_preset_serde_names() {
        assert_eq!(
            serde_json::to_string(&StylePreset::ThinToBold).unwrap(),
            "\"thin_to_bold\""
        );
        assert_eq!(
            serde_json::from_str::<StylePreset>("\"hormozi\"").unwrap(),
            StylePreset::Hormozi
        );
        assert_eq!(
            serde_json::from_str::<StylePreset>("\"impact_heavy\"").unwrap(),
            StylePreset::ImpactHeavy
        );
    }

    #[test]
    fn test_options_deserialize_from_partial_json() {
        let json = r##"{"primaryColor": "#FF0000", "motion": "shake"}"##;
        let options: StyleOptions = serde_json::from_str(json).unwrap();
        assert_eq!(options.primary_color.as_deref(), Some("#FF0000"));
        assert_eq!(options.motion, Some(MotionMode::Shake));
        assert_eq!(options.font_family, None);
    }
}
