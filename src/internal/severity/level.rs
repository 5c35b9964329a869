use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::internal::error::LogError;

/// Severity of a single log call, ordered by increasing criticality
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Debug,
    #[default]
    Info,
    Warn,
    Error,
}

/// Minimum severity a call needs to be emitted, or `Silent` to drop everything
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Threshold {
    Debug,
    #[default]
    Info,
    Warn,
    Error,
    #[serde(alias = "mute")]
    Silent,
}

impl Severity {
    pub const ALL: [Severity; 4] = [
        Severity::Debug,
        Severity::Info,
        Severity::Warn,
        Severity::Error,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Debug => "debug",
            Severity::Info => "info",
            Severity::Warn => "warn",
            Severity::Error => "error",
        }
    }

    /// Uppercase tag used inside the `[LEVEL]` prefix
    pub fn tag(&self) -> &'static str {
        match self {
            Severity::Debug => "DEBUG",
            Severity::Info => "INFO",
            Severity::Warn => "WARN",
            Severity::Error => "ERROR",
        }
    }
}

impl Threshold {
    pub const ALL: [Threshold; 5] = [
        Threshold::Debug,
        Threshold::Info,
        Threshold::Warn,
        Threshold::Error,
        Threshold::Silent,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Threshold::Debug => "debug",
            Threshold::Info => "info",
            Threshold::Warn => "warn",
            Threshold::Error => "error",
            Threshold::Silent => "silent",
        }
    }
}

impl From<Severity> for Threshold {
    fn from(level: Severity) -> Self {
        match level {
            Severity::Debug => Threshold::Debug,
            Severity::Info => Threshold::Info,
            Severity::Warn => Threshold::Warn,
            Severity::Error => Threshold::Error,
        }
    }
}

impl FromStr for Severity {
    type Err = LogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "debug" => Ok(Severity::Debug),
            "info" => Ok(Severity::Info),
            "warn" => Ok(Severity::Warn),
            "error" => Ok(Severity::Error),
            other => Err(LogError::UnknownSeverity(other.to_string())),
        }
    }
}

impl FromStr for Threshold {
    type Err = LogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "silent" | "mute" => Ok(Threshold::Silent),
            other => other.parse::<Severity>().map(Threshold::from),
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for Threshold {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
