// src/internal/emitter/mod.rs

pub mod buffer;
pub mod console;
pub mod emitter;

use std::io;

pub use buffer::BufferSink;
pub use console::ConsoleSink;
pub use emitter::{channel_for, emit};

/// The four addressable output channels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Channel {
    Log,
    Info,
    Warn,
    Error,
}

/// Text-output device with one line-oriented writer per channel
pub trait OutputSink: Send + Sync {
    /// Write `line` followed by a line terminator
    fn write_line(&self, channel: Channel, line: &str) -> io::Result<()>;
}
