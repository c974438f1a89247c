//! Timeline Compiler Module
//!
//! Turns time-coded segments plus a style descriptor into the ASS-like
//! document the render layer feeds to FFmpeg's subtitle filter.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                     Timeline Compiler                            │
//! ├─────────────────────────────────────────────────────────────────┤
//! │  codec.rs      - timestamp and color conversions                 │
//! │  style.rs      - preset defaults + override resolution           │
//! │  events.rs     - Event, ScriptHeader, Timeline document          │
//! │  jitter.rs     - injectable shake randomness                     │
//! │  animations/   - one generator per animation variant             │
//! │  assembler.rs  - segmentation, dispatch, continuity fold         │
//! └─────────────────────────────────────────────────────────────────┘
//! ```

pub mod animations;
mod assembler;
pub mod codec;
mod events;
mod jitter;
mod style;

// Re-export the compiler surface
pub use assembler::{compile, compile_srt};
pub use events::{Event, ScriptHeader, Timeline, PLAY_RES_X, PLAY_RES_Y};
pub use jitter::Jitter;
pub use style::{resolve, MotionMode, ResolvedStyle, StyleOptions, StylePreset, TextAlignment};
