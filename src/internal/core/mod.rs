// src/internal/core/mod.rs

pub mod log_core;

pub use log_core::log_core;
pub(crate) use log_core::report_failure;
