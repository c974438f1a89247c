//! Timeline Document Model
//!
//! The emitted document has three parts, in order: a fixed script-metadata
//! block declaring a 1280×720 canvas, one style definition line, and the
//! events block. The document is consumed by the external subtitle renderer;
//! nothing in this system parses it back.

use super::codec::format_timestamp;
use super::style::ResolvedStyle;
use crate::core::TimeSec;

/// Output canvas width in pixels
pub const PLAY_RES_X: u32 = 1280;
/// Output canvas height in pixels
pub const PLAY_RES_Y: u32 = 720;

// =============================================================================
// Event
// =============================================================================

/// One timed output line.
///
/// Multiple events may share a time range on different layers: lower layers
/// render as glow/shadow beneath higher layers' crisp text.
#[derive(Clone, Debug, PartialEq)]
pub struct Event {
    /// Z-order; 0 renders beneath 1
    pub layer: u32,
    pub start_sec: TimeSec,
    pub end_sec: TimeSec,
    /// Name of the style line this event references
    pub style_ref: String,
    /// Plain text with inline override tags
    pub render_text: String,
}

impl Event {
    pub fn new(layer: u32, start_sec: TimeSec, end_sec: TimeSec, render_text: String) -> Self {
        Self {
            layer,
            start_sec,
            end_sec,
            style_ref: "Default".to_string(),
            render_text,
        }
    }

    /// Serializes this event as one `Dialogue:` line
    pub fn to_dialogue_line(&self) -> String {
        format!(
            "Dialogue: {},{},{},{},,0,0,0,,{}",
            self.layer,
            format_timestamp(self.start_sec),
            format_timestamp(self.end_sec),
            self.style_ref,
            self.render_text
        )
    }
}

// =============================================================================
// Script Header
// =============================================================================

/// Script metadata plus the single style definition line.
///
/// Field order on the style line is fixed: name, font, size, primary,
/// secondary, outline and background colors, bold flag, italic/underline/
/// strikeout (always 0), scale X/Y (always 100), spacing/angle (always 0),
/// border style (always 1), outline width, shadow value, alignment,
/// margins, encoding (always 1).
#[derive(Clone, Debug, PartialEq)]
pub struct ScriptHeader {
    pub font_family: String,
    pub font_size: u32,
    /// Color tokens in `&HAABBGGRR&` form
    pub primary_colour: String,
    pub secondary_colour: String,
    pub outline_colour: String,
    pub bold: bool,
    pub outline_width: f64,
    pub shadow: f64,
    /// 1=left, 2=center, 3=right
    pub alignment: u8,
    pub margin_v: u32,
}

impl ScriptHeader {
    /// Derives the header from a resolved style.
    ///
    /// The vertical margin is banded, not interpolated: a vertical position
    /// of 80% or more anchors near the top, 45–55% centers, anything else
    /// anchors near the bottom.
    pub fn from_style(style: &ResolvedStyle, primary_colour: String, outline_colour: String) -> Self {
        Self {
            font_family: style.font_family.clone(),
            font_size: style.font_size,
            secondary_colour: primary_colour.clone(),
            primary_colour,
            outline_colour,
            bold: matches!(
                style.preset,
                super::style::StylePreset::Impact | super::style::StylePreset::ImpactHeavy
            ),
            outline_width: style.outline_width,
            shadow: style.shadow_strength.clamp(0.0, 5.0),
            alignment: style.alignment.to_ass(),
            margin_v: vertical_margin(style.vertical_position),
        }
    }

    /// Serializes the `[Script Info]` and `[V4+ Styles]` blocks plus the
    /// `[Events]` format line
    pub fn render(&self) -> String {
        // Style lines carry color tokens without the trailing ampersand
        let strip = |token: &str| token.trim_end_matches('&').to_string();

        format!(
            "[Script Info]\n\
             ScriptType: v4.00+\n\
             PlayResX: {x}\n\
             PlayResY: {y}\n\
             ScaledBorderAndShadow: yes\n\
             \n\
             [V4+ Styles]\n\
             Format: Name, Fontname, Fontsize, PrimaryColour, SecondaryColour, OutlineColour, BackColour, Bold, Italic, Underline, StrikeOut, ScaleX, ScaleY, Spacing, Angle, BorderStyle, Outline, Shadow, Alignment, MarginL, MarginR, MarginV, Encoding\n\
             Style: Default,{font},{size},{pri},{sec},{out},&H80000000,{bold},0,0,0,100,100,0,0,1,{ow},{sh},{al},10,10,{mv},1\n\
             \n\
             [Events]\n\
             Format: Layer, Start, End, Style, Name, MarginL, MarginR, MarginV, Effect, Text\n",
            x = PLAY_RES_X,
            y = PLAY_RES_Y,
            font = self.font_family,
            size = self.font_size,
            pri = strip(&self.primary_colour),
            sec = strip(&self.secondary_colour),
            out = strip(&self.outline_colour),
            bold = if self.bold { 1 } else { 0 },
            ow = self.outline_width,
            sh = self.shadow,
            al = self.alignment,
            mv = self.margin_v,
        )
    }
}

/// Banded vertical margin (pixels from the bottom edge, bottom-anchored
/// alignment). The three discrete bands are deliberate; do not replace with
/// interpolation.
pub fn vertical_margin(vertical_position: f64) -> u32 {
    if vertical_position >= 80.0 {
        600
    } else if (45.0..=55.0).contains(&vertical_position) {
        350
    } else {
        50
    }
}

// =============================================================================
// Timeline
// =============================================================================

/// A complete timeline document: one header plus ordered events.
///
/// Built once per request and serialized with [`Timeline::render`]; never
/// mutated afterward.
#[derive(Clone, Debug, PartialEq)]
pub struct Timeline {
    pub header: ScriptHeader,
    pub events: Vec<Event>,
}

impl Timeline {
    /// Serializes the whole document
    pub fn render(&self) -> String {
        let mut doc = self.header.render();
        for event in &self.events {
            doc.push_str(&event.to_dialogue_line());
            doc.push('\n');
        }
        doc
    }

    /// Returns true if the timeline carries no events (valid output for an
    /// input with zero usable segments)
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

// =============================================================================
// Tests
// =============================================================================
