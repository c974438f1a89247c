//! CaptionForge Core Type Definitions
//!
//! Defines fundamental types used throughout the compiler.

use serde::{Deserialize, Serialize};

// =============================================================================
// Time Types
// =============================================================================

/// Time in seconds (floating point)
pub type TimeSec = f64;

// =============================================================================
// Spatial Types
// =============================================================================

/// 2D pixel coordinates on the output canvas
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Point2D {
    pub x: f64,
    pub y: f64,
}

impl Point2D {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl Default for Point2D {
    fn default() -> Self {
        Self { x: 0.0, y: 0.0 }
    }
}

// =============================================================================
// Color
// =============================================================================

/// RGBA color value (0-255 for each component)
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    /// Creates a new color from RGBA components
    pub fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Creates an opaque color from RGB components
    pub fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::rgba(r, g, b, 255)
    }

    /// White color
    pub fn white() -> Self {
        Self::rgb(255, 255, 255)
    }

    /// Black color
    pub fn black() -> Self {
        Self::rgb(0, 0, 0)
    }

    /// Converts to the ASS/SSA color token (`&HAABBGGRR&`).
    ///
    /// The alpha byte is inverted: the target format encodes transparency as
    /// "how much to subtract from opaque", so an opaque color carries `00`.
    pub fn to_ass(&self) -> String {
        format!(
            "&H{:02X}{:02X}{:02X}{:02X}&",
            255 - self.a,
            self.b,
            self.g,
            self.r
        )
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::white()
    }
}

// =============================================================================
// Time Range
// =============================================================================

/// Time range in seconds
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeRange {
    pub start_sec: TimeSec,
    pub end_sec: TimeSec,
}

impl TimeRange {
    pub fn new(start_sec: TimeSec, end_sec: TimeSec) -> Self {
        Self { start_sec, end_sec }
    }

    /// Returns duration in seconds
    pub fn duration(&self) -> TimeSec {
        self.end_sec - self.start_sec
    }

    /// Checks if a given time is within range
    pub fn contains(&self, time: TimeSec) -> bool {
        time >= self.start_sec && time <= self.end_sec
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_creation() {
        let color = Color::rgba(255, 128, 64, 200);
        assert_eq!(color.r, 255);
        assert_eq!(color.g, 128);
        assert_eq!(color.b, 64);
        assert_eq!(color.a, 200);
    }

    #[test]
    fn test_color_ass_format() {
        // ASS format is &HAABBGGRR& with the alpha byte inverted
        assert_eq!(Color::white().to_ass(), "&H00FFFFFF&");
        assert_eq!(Color::rgba(255, 0, 0, 128).to_ass(), "&H7F0000FF&");
    }

    #[test]
    fn test_time_range() {
        let range = TimeRange::new(1.0, 3.5);
        assert_eq!(range.duration(), 2.5);
        assert!(range.contains(2.0));
        assert!(!range.contains(4.0));
    }
}
