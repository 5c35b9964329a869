// src/internal/logger/loggers.rs

use std::sync::{Arc, OnceLock};

use super::params::{Arg, LogParams};
use crate::internal::clock::{Clock, SystemClock};
use crate::internal::config::LoggerConfig;
use crate::internal::core::{log_core, report_failure};
use crate::internal::emitter::{ConsoleSink, OutputSink};
use crate::internal::error::LogError;
use crate::internal::formatter::{color_formatter, plain_formatter, LineFormatter};
use crate::internal::value::Value;

/// A line formatter bound to an output sink, a clock and call defaults
#[derive(Clone)]
pub struct Logger {
    formatter: LineFormatter,
    sink: Arc<dyn OutputSink>,
    clock: Arc<dyn Clock>,
    defaults: LogParams,
}

impl Logger {
    /// Console logger around a custom line formatter
    pub fn new(formatter: LineFormatter) -> Self {
        Self {
            formatter,
            sink: Arc::new(ConsoleSink),
            clock: Arc::new(SystemClock),
            defaults: LogParams::defaults(),
        }
    }

    /// Uncolored `[LEVEL] ...` lines
    pub fn plain() -> Self {
        Self::new(plain_formatter())
    }

    /// ANSI-colored lines
    pub fn colored() -> Self {
        Self::new(color_formatter())
    }

    pub fn from_config(config: &LoggerConfig) -> Self {
        let logger = if config.color {
            Self::colored()
        } else {
            Self::plain()
        };
        logger.with_defaults(config.params())
    }

    pub fn with_sink(mut self, sink: impl OutputSink + 'static) -> Self {
        self.sink = Arc::new(sink);
        self
    }

    pub fn with_clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Arc::new(clock);
        self
    }

    /// Parameters applied when a call passes none, and merged under partial ones
    pub fn with_defaults(mut self, defaults: LogParams) -> Self {
        self.defaults = defaults;
        self
    }

    pub fn defaults(&self) -> &LogParams {
        &self.defaults
    }

    /// Normalise the two call shapes into parameters plus the value list
    pub fn resolve(&self, first: Arg, rest: Vec<Value>) -> Result<(LogParams, Vec<Value>), LogError> {
        match first {
            Arg::Params(params) => Ok((params.merged_over(&self.defaults), rest)),
            Arg::Value(value) => {
                let mut values = Vec::with_capacity(rest.len() + 1);
                values.push(value);
                values.extend(rest);
                Ok((self.defaults.clone(), values))
            }
            Arg::Malformed(err) => Err(err),
        }
    }

    /// Log `first` and `rest`; `first` may be parameters or the first value.
    ///
    /// Never panics and never returns an error.
    pub fn log(&self, first: impl Into<Arg>, rest: Vec<Value>) {
        match self.resolve(first.into(), rest) {
            Ok((params, values)) => log_core(
                self.sink.as_ref(),
                self.clock.as_ref(),
                &params,
                &self.formatter,
                &values,
            ),
            Err(err) => report_failure(self.sink.as_ref(), self.clock.as_ref(), &err),
        }
    }
}

static PLAIN_LOGGER: OnceLock<Logger> = OnceLock::new();
static COLOR_LOGGER: OnceLock<Logger> = OnceLock::new();

/// Build a console logger around a custom line formatter
pub fn create_logger(formatter: LineFormatter) -> Logger {
    Logger::new(formatter)
}

/// Log to the console without colors.
///
/// Call as `log_with_level("message", vec![...])` for `info` defaults, or
/// `log_with_level(LogParams::new(Severity::Warn), vec![...])` for full
/// control. The `log_with_level!` macro accepts the values variadically.
pub fn log_with_level(first: impl Into<Arg>, rest: Vec<Value>) {
    PLAIN_LOGGER.get_or_init(Logger::plain).log(first, rest);
}

/// Log to the console with ANSI colors; same call shapes as [`log_with_level`]
pub fn log_with_color(first: impl Into<Arg>, rest: Vec<Value>) {
    COLOR_LOGGER.get_or_init(Logger::colored).log(first, rest);
}

/// Plain console logging with variadic values
#[macro_export]
macro_rules! log_with_level {
    ($first:expr $(, $rest:expr)* $(,)?) => {
        $crate::log_with_level($first, ::std::vec![$($crate::Value::from($rest)),*])
    };
}

/// Colorized console logging with variadic values
#[macro_export]
macro_rules! log_with_color {
    ($first:expr $(, $rest:expr)* $(,)?) => {
        $crate::log_with_color($first, ::std::vec![$($crate::Value::from($rest)),*])
    };
}

/// Log through a specific [`Logger`] with variadic values
#[macro_export]
macro_rules! log_to {
    ($logger:expr, $first:expr $(, $rest:expr)* $(,)?) => {
        $logger.log($first, ::std::vec![$($crate::Value::from($rest)),*])
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::internal::clock::FixedClock;
    use crate::internal::emitter::{BufferSink, Channel};
    use crate::internal::formatter::FormatterInput;
    use crate::internal::severity::{Severity, Threshold};
    use crate::internal::value::Object;

    fn capture(logger: Logger) -> (Logger, BufferSink) {
        let sink = BufferSink::new();
        let clock = FixedClock::parse("2025-05-10T12:00:00.000Z").unwrap();
        (logger.with_sink(sink.clone()).with_clock(clock), sink)
    }

    #[test]
    fn message_first_uses_defaults() {
        let logger = Logger::plain();
        let (params, values) = logger
            .resolve(Arg::from("quick"), vec!["msg".into()])
            .unwrap();

        assert_eq!(params.level, Severity::Info);
        assert_eq!(params.threshold, Some(Threshold::Info));
        assert_eq!(params.with_timestamp, None);
        assert!(params.prefix_builder.is_none());
        let texts: Vec<_> = values.iter().filter_map(Value::as_text).collect();
        assert_eq!(texts, vec!["quick", "msg"]);
    }

    #[test]
    fn params_first_keeps_level_and_defaults_threshold() {
        let logger = Logger::plain();
        let (params, values) = logger
            .resolve(LogParams::new(Severity::Warn).into(), vec!["a".into(), "b".into()])
            .unwrap();

        assert_eq!(params.level, Severity::Warn);
        assert_eq!(params.threshold, Some(Threshold::Info));
        assert_eq!(values.len(), 2);
    }

    #[test]
    fn plain_and_colored_lines() {
        let (plain, plain_out) = capture(Logger::plain());
        let (colored, color_out) = capture(Logger::colored());

        plain.log("quick", vec!["msg".into()]);
        colored.log(LogParams::new(Severity::Error), vec!["something".into(), "broke".into()]);

        assert_eq!(plain_out.lines(), vec![(Channel::Info, "[INFO] quick msg".to_string())]);
        assert_eq!(
            color_out.lines(),
            vec![(Channel::Error, "\x1b[31m[ERROR] something broke\x1b[0m".to_string())]
        );
    }

    #[test]
    fn custom_formatter_logger() {
        let formatter: LineFormatter = Arc::new(|input: &FormatterInput<'_>| -> Result<String, LogError> {
            Ok(format!("[CUSTOM] {}", input.values.len()))
        });
        let (logger, out) = capture(create_logger(formatter));

        log_to!(logger, "hello", 1, 2);

        assert_eq!(out.lines_on(Channel::Info), vec!["[CUSTOM] 3"]);
    }

    #[test]
    fn malformed_params_emit_only_a_diagnostic() {
        let (logger, out) = capture(Logger::plain());
        logger.log(Object::new().with("level", "verbose"), vec!["dropped".into()]);

        let lines = out.lines();
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].0, Channel::Error);
        assert_eq!(
            lines[0].1,
            "[logging-error @ 2025-05-10T12:00:00.000Z] UnknownSeverityError: unknown log level/threshold \"verbose\""
        );
    }

    #[test]
    fn logger_defaults_fill_partial_params() {
        let (logger, out) = capture(
            Logger::plain().with_defaults(LogParams::defaults().threshold(Threshold::Warn).with_timestamp(true)),
        );

        logger.log(LogParams::new(Severity::Info), vec!["filtered".into()]);
        logger.log(LogParams::new(Severity::Error), vec!["kept".into()]);
        logger.log(
            LogParams::new(Severity::Warn).with_timestamp(false),
            vec!["no stamp".into()],
        );

        assert_eq!(
            out.lines(),
            vec![
                (Channel::Error, "2025-05-10T12:00:00.000Z [ERROR] kept".to_string()),
                (Channel::Warn, "[WARN] no stamp".to_string()),
            ]
        );
    }

    #[test]
    fn from_config_selects_strategy_and_defaults() {
        let config = LoggerConfig {
            level: Severity::Warn,
            threshold: Threshold::Debug,
            with_timestamp: false,
            color: false,
        };
        let (logger, out) = capture(Logger::from_config(&config));
        assert_eq!(logger.defaults().level, Severity::Warn);
        assert_eq!(logger.defaults().threshold, Some(Threshold::Debug));

        logger.log("no params", vec![]);
        logger.log(LogParams::new(Severity::Debug), vec!["verbose".into()]);

        assert_eq!(
            out.lines(),
            vec![
                (Channel::Warn, "[WARN] no params".to_string()),
                (Channel::Log, "[DEBUG] verbose".to_string()),
            ]
        );
    }
}
