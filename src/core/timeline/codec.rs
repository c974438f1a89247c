//! Timestamp and Color Codec
//!
//! Pure conversions between the compiler's numeric domain and the timeline
//! document's text encodings:
//! - seconds ↔ the `H:MM:SS.cc` fixed-point timestamp used on event lines
//! - `#RRGGBB` / `rgb()` / `rgba()` ↔ the `&HAABBGGRR&` color token
//!
//! Both directions are kept so the conversions stay round-trippable for
//! testing; the rest of the document format is write-only.

use std::sync::LazyLock;

use regex::Regex;

use crate::core::{Color, CompileError, CompileResult, TimeSec};

static HEX_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^#([0-9A-Fa-f]{6})$").expect("valid hex color regex"));

static RGBA_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^rgba?\(\s*(\d{1,3})\s*,\s*(\d{1,3})\s*,\s*(\d{1,3})\s*(?:,\s*(\d*\.?\d+)\s*)?\)$")
        .expect("valid rgba regex")
});

// =============================================================================
// Timestamps
// =============================================================================

/// Formats seconds as a zero-padded `H:MM:SS.cc` timestamp.
///
/// Centiseconds are truncated, not rounded. Negative or non-finite input is
/// a caller error; all validated segment times are non-negative and finite.
pub fn format_timestamp(seconds: TimeSec) -> String {
    let total_cs = (seconds * 100.0).floor() as u64;
    let cs = total_cs % 100;
    let total_secs = total_cs / 100;
    let secs = total_secs % 60;
    let total_mins = total_secs / 60;
    let mins = total_mins % 60;
    let hours = total_mins / 60;

    format!("{}:{:02}:{:02}.{:02}", hours, mins, secs, cs)
}

/// Parses an `H:MM:SS.cc` timestamp back into seconds
pub fn parse_timestamp(ts: &str) -> CompileResult<TimeSec> {
    let invalid = || CompileError::InvalidTimestamp(ts.to_string());

    let parts: Vec<&str> = ts.split(':').collect();
    if parts.len() != 3 {
        return Err(invalid());
    }

    let hours: u64 = parts[0].parse().map_err(|_| invalid())?;
    let mins: u64 = parts[1].parse().map_err(|_| invalid())?;

    let (secs_str, cs_str) = parts[2].split_once('.').ok_or_else(invalid)?;
    let secs: u64 = secs_str.parse().map_err(|_| invalid())?;
    let cs: u64 = cs_str.parse().map_err(|_| invalid())?;
    if cs_str.len() != 2 || mins >= 60 || secs >= 60 {
        return Err(invalid());
    }

    Ok((hours * 3600 + mins * 60 + secs) as TimeSec + cs as TimeSec / 100.0)
}

// =============================================================================
// Colors
// =============================================================================

/// Parses a `#RRGGBB` or `rgb()/rgba()` color string.
///
/// Any other syntax is rejected with [`CompileError::InvalidColorFormat`];
/// parsing never partially succeeds.
pub fn parse_color(color: &str) -> CompileResult<Color> {
    let input = color.trim();

    if let Some(caps) = HEX_RE.captures(input) {
        let hex = &caps[1];
        // The regex guarantees six hex digits
        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&hex[range], 16).unwrap_or(0)
        };
        return Ok(Color::rgb(channel(0..2), channel(2..4), channel(4..6)));
    }

    if let Some(caps) = RGBA_RE.captures(input) {
        // Digit-only captures; values above 255 are clamped as routine
        // out-of-range defaulting
        let channel = |i: usize| caps[i].parse::<u32>().unwrap_or(0).min(255) as u8;
        let alpha = caps
            .get(4)
            .map(|m| m.as_str().parse::<f64>().unwrap_or(1.0).clamp(0.0, 1.0))
            .unwrap_or(1.0);
        return Ok(Color::rgba(
            channel(1),
            channel(2),
            channel(3),
            (alpha * 255.0).round() as u8,
        ));
    }

    Err(CompileError::InvalidColorFormat(color.to_string()))
}

/// Converts a color string to the `&HAABBGGRR&` token used by the timeline
/// document. See [`Color::to_ass`] for the channel layout and alpha
/// inversion.
pub fn color_to_ass(color: &str) -> CompileResult<String> {
    Ok(parse_color(color)?.to_ass())
}

/// Decodes an `&HAABBGGRR&` token back into a [`Color`] (trailing `&`
/// optional). Returns `None` for anything that is not a full-width token.
pub fn ass_to_color(token: &str) -> Option<Color> {
    let hex = token.strip_prefix("&H")?;
    let hex = hex.strip_suffix('&').unwrap_or(hex);
    if hex.len() != 8 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }

    let byte = |range: std::ops::Range<usize>| u8::from_str_radix(&hex[range], 16).ok();
    let alpha_inv = byte(0..2)?;
    let b = byte(2..4)?;
    let g = byte(4..6)?;
    let r = byte(6..8)?;

    Some(Color::rgba(r, g, b, 255 - alpha_inv))
}

// =============================================================================
// Tests
// =============================================================================
