use crate::internal::error::LogError;
use crate::internal::severity::Severity;

/// Terminates every colorized line
pub const RESET_COLOR: &str = "\x1b[0m";

/// ANSI color per level
const LEVEL_COLORS: [(Severity, &str); 4] = [
    (Severity::Debug, "\x1b[90m"), // gray
    (Severity::Info, "\x1b[36m"),  // cyan
    (Severity::Warn, "\x1b[33m"),  // yellow
    (Severity::Error, "\x1b[31m"), // red
];

/// Escape code for a level
pub fn color_for(level: Severity) -> Result<&'static str, LogError> {
    LEVEL_COLORS
        .iter()
        .find(|(l, _)| *l == level)
        .map(|(_, code)| *code)
        .ok_or_else(|| LogError::UnknownSeverity(level.to_string()))
}

/// Escape code for a raw level token
pub fn color_for_token(token: &str) -> Result<&'static str, LogError> {
    color_for(token.parse()?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_level_has_a_distinct_color() {
        let codes: Vec<_> = Severity::ALL.iter().map(|l| color_for(*l).unwrap()).collect();
        for (i, code) in codes.iter().enumerate() {
            assert!(code.starts_with("\x1b["));
            assert_ne!(*code, RESET_COLOR);
            assert!(!codes[i + 1..].contains(code));
        }
    }

    #[test]
    fn known_mapping() {
        assert_eq!(color_for(Severity::Error).unwrap(), "\x1b[31m");
        assert_eq!(color_for_token("debug").unwrap(), "\x1b[90m");
    }

    #[test]
    fn unknown_token_is_an_error() {
        let err = color_for_token("fatal").unwrap_err();
        assert_eq!(
            err.to_string(),
            "UnknownSeverityError: unknown log level/threshold \"fatal\""
        );
        // silent is a threshold, it has no color
        assert!(color_for_token("silent").is_err());
    }
}
