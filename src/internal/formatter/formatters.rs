// src/internal/formatter/formatters.rs

use std::sync::Arc;

use super::colors::{color_for, RESET_COLOR};
use super::prefix::build_prefix;
use crate::internal::clock::Clock;
use crate::internal::error::LogError;
use crate::internal::severity::Severity;
use crate::internal::value::{format_values, PrefixBuilder, Value};

/// Strategy turning one log call into one line
pub type LineFormatter = Arc<dyn Fn(&FormatterInput<'_>) -> Result<String, LogError> + Send + Sync>;

/// Everything a line formatter sees for one call
#[derive(Clone, Copy)]
pub struct FormatterInput<'a> {
    pub level: Severity,
    pub values: &'a [Value],
    pub with_timestamp: bool,
    pub prefix_builder: Option<&'a PrefixBuilder>,
    pub clock: &'a dyn Clock,
}

impl<'a> FormatterInput<'a> {
    pub fn new(level: Severity, values: &'a [Value], clock: &'a dyn Clock) -> Self {
        Self {
            level,
            values,
            with_timestamp: false,
            prefix_builder: None,
            clock,
        }
    }

    pub fn with_timestamp(mut self, with_timestamp: bool) -> Self {
        self.with_timestamp = with_timestamp;
        self
    }

    pub fn with_prefix_builder(mut self, prefix_builder: Option<&'a PrefixBuilder>) -> Self {
        self.prefix_builder = prefix_builder;
        self
    }
}

/// `[LEVEL] body`, or just the prefix when there are no values
pub fn plain_format(input: &FormatterInput<'_>) -> String {
    let prefix = build_prefix(input);
    let body = format_values(input.values);

    if body.is_empty() {
        prefix
    } else {
        format!("{} {}", prefix, body)
    }
}

/// The plain line wrapped in the level's color and a reset code
pub fn color_format(input: &FormatterInput<'_>) -> Result<String, LogError> {
    let color = color_for(input.level)?;
    Ok(format!("{}{}{}", color, plain_format(input), RESET_COLOR))
}

pub fn plain_formatter() -> LineFormatter {
    Arc::new(|input: &FormatterInput<'_>| Ok(plain_format(input)))
}

pub fn color_formatter() -> LineFormatter {
    Arc::new(color_format)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::internal::clock::FixedClock;

    fn clock() -> FixedClock {
        FixedClock::parse("2025-05-10T12:00:00.000Z").unwrap()
    }

    #[test]
    fn plain_without_values_is_prefix_only() {
        let clock = clock();
        let input = FormatterInput::new(Severity::Info, &[], &clock);
        assert_eq!(plain_format(&input), "[INFO]");
    }

    #[test]
    fn plain_with_timestamp() {
        let clock = clock();
        let values = [Value::from("warning!")];
        let input = FormatterInput::new(Severity::Warn, &values, &clock).with_timestamp(true);
        assert_eq!(
            plain_format(&input),
            "2025-05-10T12:00:00.000Z [WARN] warning!"
        );
    }

    #[test]
    fn plain_joins_mixed_values() {
        let clock = clock();
        let values = [Value::from("count"), Value::from(3), Value::from(vec![1, 2])];
        let input = FormatterInput::new(Severity::Debug, &values, &clock);
        assert_eq!(plain_format(&input), "[DEBUG] count 3 [1,2]");
    }

    #[test]
    fn empty_text_value_still_counts_as_empty_body() {
        let clock = clock();
        let values = [Value::from("")];
        let input = FormatterInput::new(Severity::Info, &values, &clock);
        assert_eq!(plain_format(&input), "[INFO]");
    }

    #[test]
    fn color_wraps_whole_line() {
        let clock = clock();
        let values = [Value::from("something"), Value::from("broke")];
        let input = FormatterInput::new(Severity::Error, &values, &clock);
        let line = color_format(&input).unwrap();

        assert!(line.starts_with(color_for(Severity::Error).unwrap()));
        assert!(line.contains("[ERROR] something broke"));
        assert!(line.ends_with(RESET_COLOR));
    }

    #[test]
    fn color_always_starts_with_escape_and_ends_with_reset() {
        let clock = clock();
        let some = [Value::from("x")];
        for level in Severity::ALL {
            for values in [&[][..], &some[..]] {
                let line = color_format(&FormatterInput::new(level, values, &clock)).unwrap();
                assert!(line.starts_with("\x1b["), "{level}: {line:?}");
                assert!(line.ends_with(RESET_COLOR), "{level}: {line:?}");
            }
        }
    }

    #[test]
    fn color_without_values_has_no_trailing_space() {
        let clock = clock();
        let line = color_format(&FormatterInput::new(Severity::Info, &[], &clock)).unwrap();
        assert_eq!(line, "\x1b[36m[INFO]\x1b[0m");
    }

    #[test]
    fn strategies_as_line_formatters() {
        let clock = clock();
        let values = [Value::from("hi")];
        let input = FormatterInput::new(Severity::Warn, &values, &clock);

        assert_eq!(plain_formatter()(&input).unwrap(), "[WARN] hi");
        assert_eq!(color_formatter()(&input).unwrap(), "\x1b[33m[WARN] hi\x1b[0m");
    }
}
