//! CaptionForge Compiler Core
//!
//! Core compiler module. Data flows one way:
//! raw text → parser → (optional) word segmenter → assembler → generators
//! → timeline document. No component calls back upward.

pub mod captions;
pub mod timeline;

// Re-export common types
mod types;
pub use types::*;

mod error;
pub use error::*;
