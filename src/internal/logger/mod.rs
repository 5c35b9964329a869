// src/internal/logger/mod.rs

pub mod loggers;
pub mod params;

pub use loggers::{create_logger, log_with_color, log_with_level, Logger};
pub use params::{Arg, LogParams};

// The log_with_level!, log_with_color! and log_to! macros are exported at the
// crate root via #[macro_export].
