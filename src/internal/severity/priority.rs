use super::level::{Severity, Threshold};
use crate::internal::error::LogError;

/// Priority of the silent threshold, above every real severity
pub const SILENT_PRIORITY: u16 = 999;

/// Numeric priority of a threshold; lower is more verbose
pub const fn priority(threshold: Threshold) -> u16 {
    match threshold {
        Threshold::Debug => 0,
        Threshold::Info => 1,
        Threshold::Warn => 2,
        Threshold::Error => 3,
        Threshold::Silent => SILENT_PRIORITY,
    }
}

/// Priority of a raw level or threshold token
pub fn priority_of(token: &str) -> Result<u16, LogError> {
    token.parse::<Threshold>().map(priority)
}

/// Whether a call at `level` passes `threshold`
pub fn should_emit(threshold: Threshold, level: Severity) -> bool {
    priority(level.into()) >= priority(threshold)
}

/// Token form of [`should_emit`], failing on tokens outside the enumeration
pub fn should_emit_tokens(threshold: &str, level: &str) -> Result<bool, LogError> {
    let level: Severity = level.parse()?;
    let threshold: Threshold = threshold.parse()?;
    Ok(should_emit(threshold, level))
}
