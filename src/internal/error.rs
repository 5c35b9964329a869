// src/internal/error.rs

use std::any::Any;

/// Errors raised inside the logging pipeline.
///
/// None of these ever reach the caller of a logging entry point: the
/// orchestration core turns them into a fallback diagnostic line.
#[derive(Debug, thiserror::Error)]
pub enum LogError {
    #[error("UnknownSeverityError: unknown log level/threshold \"{0}\"")]
    UnknownSeverity(String),
    #[error("FormatterFailure: {0}")]
    Formatter(String),
    #[error("FormatterFailure: panicked: {0}")]
    Panic(String),
    #[error("OutputFailure: {0}")]
    Output(#[from] std::io::Error),
}

impl LogError {
    /// Build a formatter failure from anything printable
    pub fn formatter(message: impl std::fmt::Display) -> Self {
        LogError::Formatter(message.to_string())
    }

    /// Convert a caught panic payload into an error
    pub(crate) fn from_panic(payload: Box<dyn Any + Send>) -> Self {
        let message = if let Some(s) = payload.downcast_ref::<&str>() {
            (*s).to_string()
        } else if let Some(s) = payload.downcast_ref::<String>() {
            s.clone()
        } else {
            "non-string panic payload".to_string()
        };
        LogError::Panic(message)
    }
}
