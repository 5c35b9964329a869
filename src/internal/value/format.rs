// src/internal/value/format.rs

use tracing::trace;

use super::canonical::to_compact_json;
use super::inspect::inspect;
use super::value::{symbol_text, Value};

/// Last-resort text for structured values that cannot be rendered
pub const UNSERIALIZABLE: &str = "[Unserializable Object]";

/// Failure while turning a structured value into text; never leaves this module
#[derive(Debug, thiserror::Error)]
enum SerializationFailure {
    #[error("canonical encoding failed: {0}")]
    Canonical(#[from] serde_json::Error),
    #[error("structural dump failed")]
    Dump(#[from] std::fmt::Error),
}

/// Convert one value to its display text.
///
/// Checked in order: undefined, error, text, big integer, function,
/// structured (canonical JSON, then structural dump, then
/// [`UNSERIALIZABLE`]), and finally plain primitives.
pub fn format_value(value: &Value) -> String {
    match value {
        Value::Undefined => "undefined".to_string(),
        Value::Error(err) => format!(
            "{}: {}\n{}",
            err.name,
            err.message,
            err.stack.as_deref().unwrap_or("")
        ),
        Value::Text(text) => text.clone(),
        Value::BigInt(n) => format!("{}n", n),
        Value::Function(callable) => {
            format!("[Function {}]", callable.name().unwrap_or("anonymous"))
        }
        Value::Array(_) | Value::Object(_) | Value::Map(_) | Value::Set(_) | Value::Custom(_) => {
            format_structured(value)
        }
        Value::Null => "null".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => js_number(*n),
        Value::Symbol(description) => symbol_text(description.as_deref()),
    }
}

/// Format every value and join them with single spaces
pub fn format_values(values: &[Value]) -> String {
    values
        .iter()
        .map(format_value)
        .collect::<Vec<_>>()
        .join(" ")
}

fn format_structured(value: &Value) -> String {
    let failure = match to_compact_json(value) {
        Ok(text) => return text,
        Err(err) => SerializationFailure::from(err),
    };
    trace!("{}; falling back to structural dump", failure);

    match inspect(value).map_err(SerializationFailure::from) {
        Ok(text) => text,
        Err(failure) => {
            trace!("{}; value is unserializable", failure);
            UNSERIALIZABLE.to_string()
        }
    }
}

/// Number text the way ECMAScript prints it: `1`, `1.5`, `1e+21`, `NaN`
pub(crate) fn js_number(n: f64) -> String {
    if n.is_nan() {
        "NaN".to_string()
    } else if n.is_infinite() {
        if n > 0.0 { "Infinity" } else { "-Infinity" }.to_string()
    } else if n == 0.0 {
        "0".to_string()
    } else if n < 0.0 {
        format!("-{}", js_magnitude(-n))
    } else {
        js_magnitude(n)
    }
}

/// Layout of a finite positive number from its shortest round-trip digits.
///
/// Plain notation while the decimal point sits within 21 digits left or
/// 6 zeros right of the digits, exponent notation otherwise.
fn js_magnitude(n: f64) -> String {
    let scientific = format!("{:e}", n);
    let (mantissa, exponent) = scientific
        .split_once('e')
        .unwrap_or((scientific.as_str(), "0"));
    let digits: String = mantissa.chars().filter(|c| *c != '.').collect();
    let len = digits.len() as i32;
    let point = exponent.parse::<i32>().unwrap_or(0) + 1;

    if len <= point && point <= 21 {
        format!("{}{}", digits, "0".repeat((point - len) as usize))
    } else if 0 < point && point <= 21 {
        let (int, frac) = digits.split_at(point as usize);
        format!("{}.{}", int, frac)
    } else if -6 < point && point <= 0 {
        format!("0.{}{}", "0".repeat(-point as usize), digits)
    } else {
        let sign = if point > 0 { '+' } else { '-' };
        let (lead, rest) = digits.split_at(1);
        let dot = if rest.is_empty() { "" } else { "." };
        format!("{}{}{}e{}{}", lead, dot, rest, sign, (point - 1).abs())
    }
}
