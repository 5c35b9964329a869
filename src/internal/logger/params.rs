// src/internal/logger/params.rs

use std::fmt;
use std::sync::Arc;

use crate::internal::error::LogError;
use crate::internal::severity::{Severity, Threshold};
use crate::internal::value::{Callable, ErrorValue, Object, PrefixBuilder, Value};

/// Per-call logging parameters.
///
/// Unset optional fields are filled from the logger's defaults; a prefix
/// builder, when present, replaces the timestamp and level prefix entirely.
#[derive(Clone, Default)]
pub struct LogParams {
    pub level: Severity,
    pub threshold: Option<Threshold>,
    pub with_timestamp: Option<bool>,
    pub prefix_builder: Option<PrefixBuilder>,
}

impl LogParams {
    pub fn new(level: Severity) -> Self {
        Self {
            level,
            ..Default::default()
        }
    }

    /// Parameters used when a call supplies none: `info` at threshold `info`
    pub fn defaults() -> Self {
        Self::new(Severity::Info).threshold(Threshold::Info)
    }

    pub fn threshold(mut self, threshold: impl Into<Threshold>) -> Self {
        self.threshold = Some(threshold.into());
        self
    }

    pub fn with_timestamp(mut self, with_timestamp: bool) -> Self {
        self.with_timestamp = Some(with_timestamp);
        self
    }

    pub fn prefix_builder<F>(mut self, builder: F) -> Self
    where
        F: Fn() -> String + Send + Sync + 'static,
    {
        self.prefix_builder = Some(Arc::new(builder));
        self
    }

    /// Fill unset optional fields from `defaults`; the level is never taken from them
    pub fn merged_over(&self, defaults: &LogParams) -> LogParams {
        LogParams {
            level: self.level,
            threshold: self.threshold.or(defaults.threshold),
            with_timestamp: self.with_timestamp.or(defaults.with_timestamp),
            prefix_builder: self
                .prefix_builder
                .clone()
                .or_else(|| defaults.prefix_builder.clone()),
        }
    }

    /// Recognise a dynamic value as parameters.
    ///
    /// `None` means the value is a message: it is not an object, its `level`
    /// is not text, or an optional field has the wrong shape. An object of
    /// the right shape carrying an unknown level or threshold token yields
    /// `Some(Err(..))`.
    pub fn from_value(value: &Value) -> Option<Result<LogParams, LogError>> {
        let Value::Object(object) = value else {
            return None;
        };

        let level = object.get("level")?.as_text()?.to_string();

        let threshold = match field(object, &["threshold"]) {
            Some(Value::Text(token)) => Some(token),
            Some(_) => return None,
            None => None,
        };
        let with_timestamp = match field(object, &["with_timestamp", "withTimestamp"]) {
            Some(Value::Bool(flag)) => Some(flag),
            Some(_) => return None,
            None => None,
        };
        let prefix_builder = match field(object, &["prefix_builder", "prefixBuilder"]) {
            Some(Value::Function(callable)) => Some(callable.as_prefix_builder()),
            Some(_) => return None,
            None => None,
        };

        Some(parse_tokens(&level, threshold.as_deref()).map(|(level, threshold)| LogParams {
            level,
            threshold,
            with_timestamp,
            prefix_builder,
        }))
    }
}

/// First of `names` present on the object with a defined value
fn field(object: &Object, names: &[&str]) -> Option<Value> {
    names
        .iter()
        .filter_map(|name| object.get(name))
        .find(|value| !matches!(value, Value::Undefined))
}

fn parse_tokens(level: &str, threshold: Option<&str>) -> Result<(Severity, Option<Threshold>), LogError> {
    let level: Severity = level.parse()?;
    let threshold: Option<Threshold> = threshold.map(str::parse).transpose()?;
    Ok((level, threshold))
}

impl fmt::Debug for LogParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LogParams")
            .field("level", &self.level)
            .field("threshold", &self.threshold)
            .field("with_timestamp", &self.with_timestamp)
            .field("prefix_builder", &self.prefix_builder.as_ref().map(|_| "<fn>"))
            .finish()
    }
}

/// First argument of a logging call: parameters or the first message value
#[derive(Debug)]
pub enum Arg {
    Params(LogParams),
    Value(Value),
    /// Parameter-shaped value with a token outside the severity enumeration
    Malformed(LogError),
}

impl From<LogParams> for Arg {
    fn from(params: LogParams) -> Self {
        Arg::Params(params)
    }
}

impl From<Value> for Arg {
    fn from(value: Value) -> Self {
        match LogParams::from_value(&value) {
            Some(Ok(params)) => Arg::Params(params),
            Some(Err(err)) => Arg::Malformed(err),
            None => Arg::Value(value),
        }
    }
}

macro_rules! arg_via_value {
    ($($t:ty),* $(,)?) => {
        $(
            impl From<$t> for Arg {
                fn from(v: $t) -> Self {
                    Arg::from(Value::from(v))
                }
            }
        )*
    };
}

arg_via_value!(
    &str,
    String,
    &String,
    bool,
    i8,
    i16,
    i32,
    i64,
    isize,
    u8,
    u16,
    u32,
    u64,
    usize,
    f32,
    f64,
    i128,
    ErrorValue,
    Callable,
    Object,
    anyhow::Error,
    serde_json::Value,
);

impl<T: Into<Value>> From<Vec<T>> for Arg {
    fn from(items: Vec<T>) -> Self {
        Arg::from(Value::from(items))
    }
}

impl<T: Into<Value>> From<Option<T>> for Arg {
    fn from(value: Option<T>) -> Self {
        Arg::from(Value::from(value))
    }
}
