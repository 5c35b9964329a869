pub mod clock;
pub mod config;
pub mod core;
pub mod emitter;
pub mod error;
pub mod formatter;
pub mod logger;
pub mod severity;
pub mod value;
