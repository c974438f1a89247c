//! CaptionForge Error Definitions
//!
//! Defines error types used throughout the compiler.
//!
//! Errors local to one segment or one field never escalate to whole-timeline
//! failure: generators catch color errors at the point of use and degrade to
//! their documented defaults, and the SRT parser skips malformed blocks.

use thiserror::Error;

use super::TimeSec;

/// Compiler error types
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CompileError {
    /// Color string matches neither `#RRGGBB` nor `rgb()/rgba()` syntax
    #[error("Invalid color format: {0}")]
    InvalidColorFormat(String),

    /// Timestamp string does not match the expected field layout
    #[error("Invalid timestamp: {0}")]
    InvalidTimestamp(String),

    /// Segment with `start >= end`
    #[error("Invalid time range: {0}~{1} seconds")]
    InvalidTimeRange(TimeSec, TimeSec),

    /// Segment with no usable text after trimming
    #[error("Empty caption text")]
    EmptyText,
}

/// Compiler result type
pub type CompileResult<T> = Result<T, CompileError>;
