//! SRT Parsing and Export
//!
//! Parses SubRip (SRT) content into ordered [`Segment`]s and exports segments
//! back to SRT for the intermediate artifacts the transcription step writes.
//!
//! The parser is deliberately lenient: a malformed block (missing time-range
//! line, fewer than three lines, bad timestamp fields) is skipped with a
//! warning instead of aborting the parse. Output order follows input order;
//! no sorting is applied here; callers that need ordering sort explicitly.

use std::sync::LazyLock;

use regex::Regex;
use tracing::warn;

use super::Segment;
use crate::core::{CompileError, CompileResult, TimeSec};

/// `HH:MM:SS,mmm --> HH:MM:SS,mmm` (comma or dot before the millis field)
static TIME_RANGE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\d{1,2}):(\d{2}):(\d{2})[,.](\d{1,3})\s*-->\s*(\d{1,2}):(\d{2}):(\d{2})[,.](\d{1,3})")
        .expect("valid time-range regex")
});

// =============================================================================
// Parsing
// =============================================================================

/// Parses SRT content into an ordered list of segments.
///
/// # SRT Format
///
/// ```text
/// 1
/// 00:00:01,000 --> 00:00:04,000
/// First caption text
///
/// 2
/// 00:00:05,500 --> 00:00:08,000
/// Second caption text
/// with multiple lines
/// ```
///
/// Multi-line caption text is joined with single spaces.
pub fn parse_srt(content: &str) -> Vec<Segment> {
    let normalized = content.replace("\r\n", "\n");
    let mut segments = Vec::new();

    for block in normalized.split("\n\n") {
        let lines: Vec<&str> = block
            .lines()
            .map(str::trim)
            .skip_while(|l| l.is_empty())
            .collect();
        if lines.len() < 3 {
            if !lines.is_empty() {
                warn!("Skipping malformed SRT block: fewer than 3 lines");
            }
            continue;
        }

        // lines[0] is the index line; it is not validated beyond being present
        let (start_sec, end_sec) = match parse_time_range(lines[1]) {
            Ok(range) => range,
            Err(e) => {
                warn!("Skipping malformed SRT block: {}", e);
                continue;
            }
        };

        let text = lines[2..].join(" ");
        match Segment::new(&text, start_sec, end_sec) {
            Ok(segment) => segments.push(segment),
            Err(e) => warn!("Skipping SRT block: {}", e),
        }
    }

    segments
}

/// Parses an SRT time-range line into `(start, end)` seconds
fn parse_time_range(line: &str) -> CompileResult<(TimeSec, TimeSec)> {
    let caps = TIME_RANGE_RE
        .captures(line)
        .ok_or_else(|| CompileError::InvalidTimestamp(line.to_string()))?;

    let field = |i: usize| -> TimeSec {
        // The regex guarantees digit-only captures
        caps[i].parse::<u32>().unwrap_or(0) as TimeSec
    };

    let start = field(1) * 3600.0 + field(2) * 60.0 + field(3) + field(4) / 1000.0;
    let end = field(5) * 3600.0 + field(6) * 60.0 + field(7) + field(8) / 1000.0;
    Ok((start, end))
}

// =============================================================================
// Export
// =============================================================================

/// Exports segments to SRT format
pub fn export_srt(segments: &[Segment]) -> String {
    let mut output = String::new();

    for (index, segment) in segments.iter().enumerate() {
        output.push_str(&format!("{}\n", index + 1));
        output.push_str(&format!(
            "{} --> {}\n",
            format_srt_timestamp(segment.start_sec),
            format_srt_timestamp(segment.end_sec)
        ));
        output.push_str(&segment.text);
        output.push_str("\n\n");
    }

    output.trim_end().to_string()
}

/// Formats seconds as an SRT timestamp (00:00:00,000)
fn format_srt_timestamp(seconds: TimeSec) -> String {
    let total_ms = (seconds * 1000.0).round() as u64;
    let ms = total_ms % 1000;
    let total_secs = total_ms / 1000;
    let secs = total_secs % 60;
    let total_mins = total_secs / 60;
    let mins = total_mins % 60;
    let hours = total_mins / 60;

    format!("{:02}:{:02}:{:02},{:03}", hours, mins, secs, ms)
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    // -------------------------------------------------------------------------
    // Parsing Tests
    // -------------------------------------------------------------------------

    #[test]
    fn test_parse_srt_basic() {
        let srt = "1\n00:00:01,000 --> 00:00:04,000\nHello World\n\n2\n00:00:05,500 --> 00:00:08,000\nSecond caption\n";

        let segments = parse_srt(srt);
        assert_eq!(segments.len(), 2);

        assert_eq!(segments[0].start_sec, 1.0);
        assert_eq!(segments[0].end_sec, 4.0);
        assert_eq!(segments[0].text, "Hello World");

        assert_eq!(segments[1].start_sec, 5.5);
        assert_eq!(segments[1].end_sec, 8.0);
        assert_eq!(segments[1].text, "Second caption");
    }

    #[test]
    fn test_parse_srt_joins_multiline_with_spaces() {
        let srt = "1\n00:00:00,000 --> 00:00:05,000\nLine one\nLine two\nLine three\n";

        let segments = parse_srt(srt);
        assert_eq!(segments.len(), 1);
        assert_eq!(segments[0].text, "Line one Line two Line three");
    }

    #[test]
    fn test_parse_srt_skips_malformed_block() {
        // First block has no time-range arrow; second is valid
        let srt = "1\n00:00:01,000 00:00:04,000\nBroken\n\n2\n00:00:05,000 --> 00:00:06,000\nFine\n";

        let segments = parse_srt(srt);
        assert_eq!(segments.len(), 1);
        assert_eq!(segments[0].text, "Fine");
    }

    #[test]
    fn test_parse_srt_skips_short_block() {
        let srt = "1\n00:00:01,000 --> 00:00:04,000\n\n2\n00:00:05,000 --> 00:00:06,000\nKept\n";

        let segments = parse_srt(srt);
        assert_eq!(segments.len(), 1);
        assert_eq!(segments[0].text, "Kept");
    }

    #[test]
    fn test_parse_srt_skips_inverted_range() {
        let srt = "1\n00:00:04,000 --> 00:00:01,000\nBackwards\n\n2\n00:00:05,000 --> 00:00:06,000\nKept\n";

        let segments = parse_srt(srt);
        assert_eq!(segments.len(), 1);
        assert_eq!(segments[0].text, "Kept");
    }

    #[test]
    fn test_parse_srt_preserves_input_order() {
        // The parser does not sort; a track listed out of order stays that way
        let srt = "1\n00:00:05,000 --> 00:00:06,000\nLater\n\n2\n00:00:01,000 --> 00:00:02,000\nEarlier\n";

        let segments = parse_srt(srt);
        assert_eq!(segments[0].text, "Later");
        assert_eq!(segments[1].text, "Earlier");
    }

    #[test]
    fn test_parse_srt_crlf() {
        let srt = "1\r\n00:00:01,000 --> 00:00:02,000\r\nWindows line endings\r\n";
        let segments = parse_srt(srt);
        assert_eq!(segments.len(), 1);
        assert_eq!(segments[0].text, "Windows line endings");
    }

    #[test]
    fn test_parse_time_range_fields() {
        assert_eq!(
            parse_time_range("00:01:30,250 --> 01:00:00,000").unwrap(),
            (90.25, 3600.0)
        );
    }

    // -------------------------------------------------------------------------
    // Export Tests
    // -------------------------------------------------------------------------

    #[test]
    fn test_format_srt_timestamp() {
        assert_eq!(format_srt_timestamp(0.0), "00:00:00,000");
        assert_eq!(format_srt_timestamp(1.5), "00:00:01,500");
        assert_eq!(format_srt_timestamp(5400.0), "01:30:00,000");
    }

    #[test]
    fn test_export_srt_roundtrip() {
        let original = vec![
            Segment::new("First caption", 1.0, 4.0).unwrap(),
            Segment::new("Second caption", 5.5, 8.5).unwrap(),
        ];

        let srt = export_srt(&original);
        let parsed = parse_srt(&srt);

        assert_eq!(parsed.len(), original.len());
        assert_eq!(parsed[0].start_sec, original[0].start_sec);
        assert_eq!(parsed[0].end_sec, original[0].end_sec);
        assert_eq!(parsed[0].text, original[0].text);
    }
}
