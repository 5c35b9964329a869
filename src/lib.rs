//! Leveled console logging: threshold filtering, `[LEVEL]` prefixes with
//! optional timestamps, plain or ANSI-colored lines, and per-level output
//! channels. A logging call never panics or returns an error.
//!
//! ```no_run
//! use conlog::{log_with_color, log_with_level, LogParams, Severity};
//!
//! log_with_level!("server started on port", 8080);
//! log_with_color!(LogParams::new(Severity::Warn).with_timestamp(true), "disk at", 91, "%");
//! ```

pub mod internal;

// Re-export the public call surface
pub use internal::clock::{Clock, FixedClock, SystemClock};
pub use internal::config::LoggerConfig;
pub use internal::emitter::{BufferSink, Channel, ConsoleSink, OutputSink};
pub use internal::error::LogError;
pub use internal::formatter::{FormatterInput, LineFormatter};
pub use internal::logger::{create_logger, log_with_color, log_with_level, Arg, LogParams, Logger};
pub use internal::severity::{Severity, Threshold};
pub use internal::value::{Callable, ErrorValue, Loggable, Object, PrefixBuilder, Value};
