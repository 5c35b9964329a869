// src/internal/severity/mod.rs

pub mod level;
pub mod priority;

pub use level::{Severity, Threshold};
pub use priority::{priority, priority_of, should_emit, should_emit_tokens, SILENT_PRIORITY};
