//! Caption Segment Module
//!
//! Provides the time-coded segment model the compiler consumes:
//! - Segment data model and validation
//! - SRT parsing and export
//! - Word-level re-slicing (word segmenter)
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                     Caption Segments                             │
//! ├─────────────────────────────────────────────────────────────────┤
//! │  models.rs     - Segment, WordMode                               │
//! │  formats.rs    - SRT parsing and export                          │
//! │  segmenter.rs  - word/word-group re-slicing, global word index   │
//! └─────────────────────────────────────────────────────────────────┘
//! ```

mod formats;
mod models;
mod segmenter;

// Re-export models
pub use models::{Segment, WordMode};

// Re-export format functions
pub use formats::{export_srt, parse_srt};

// Re-export the segmenter
pub use segmenter::apply_word_mode;
