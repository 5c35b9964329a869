// src/internal/emitter/emitter.rs

use super::{Channel, OutputSink};
use crate::internal::error::LogError;
use crate::internal::severity::Severity;

/// Channel a level is written to
pub const fn channel_for(level: Severity) -> Channel {
    match level {
        Severity::Debug => Channel::Log,
        Severity::Info => Channel::Info,
        Severity::Warn => Channel::Warn,
        Severity::Error => Channel::Error,
    }
}

/// Write an already formatted line to the level's channel
pub fn emit(sink: &dyn OutputSink, level: Severity, line: &str) -> Result<(), LogError> {
    sink.write_line(channel_for(level), line)?;
    Ok(())
}
