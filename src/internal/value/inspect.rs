// src/internal/value/inspect.rs

use std::fmt::{self, Write};

use super::format::js_number;
use super::value::{symbol_text, Object, Value};

/// Unbounded, single-line structural dump used when canonical encoding fails.
///
/// Objects already on the current path print as `[Circular]`. Only a custom
/// value whose `Debug` impl reports an error can make this fail.
pub(crate) fn inspect(value: &Value) -> Result<String, fmt::Error> {
    let mut out = String::new();
    let mut path = Vec::new();
    write_value(&mut out, value, &mut path)?;
    Ok(out)
}

fn write_value(out: &mut String, value: &Value, path: &mut Vec<*const ()>) -> fmt::Result {
    match value {
        Value::Undefined => out.write_str("undefined"),
        Value::Null => out.write_str("null"),
        Value::Bool(b) => write!(out, "{}", b),
        Value::Number(n) => out.write_str(&js_number(*n)),
        Value::Text(text) => write!(out, "'{}'", text.replace('\'', "\\'")),
        Value::BigInt(n) => write!(out, "{}n", n),
        Value::Symbol(description) => out.write_str(&symbol_text(description.as_deref())),
        Value::Error(err) => write!(out, "[{}: {}]", err.name, err.message),
        Value::Function(callable) => match callable.name() {
            Some(name) => write!(out, "[Function: {}]", name),
            None => out.write_str("[Function (anonymous)]"),
        },
        Value::Array(items) => {
            out.write_char('[')?;
            write_items(out, items, path)?;
            out.write_char(']')
        }
        Value::Set(items) => {
            write!(out, "Set({}) {{", items.len())?;
            write_items(out, items, path)?;
            out.write_char('}')
        }
        Value::Map(entries) => {
            write!(out, "Map({}) {{", entries.len())?;
            for (i, (key, value)) in entries.iter().enumerate() {
                out.write_str(if i == 0 { " " } else { ", " })?;
                write_value(out, key, path)?;
                out.write_str(" => ")?;
                write_value(out, value, path)?;
            }
            if !entries.is_empty() {
                out.write_char(' ')?;
            }
            out.write_char('}')
        }
        Value::Object(object) => write_object(out, object, path),
        Value::Custom(custom) => write!(out, "{:?}", custom),
    }
}

fn write_items(out: &mut String, items: &[Value], path: &mut Vec<*const ()>) -> fmt::Result {
    for (i, item) in items.iter().enumerate() {
        out.write_str(if i == 0 { " " } else { ", " })?;
        write_value(out, item, path)?;
    }
    if !items.is_empty() {
        out.write_char(' ')?;
    }
    Ok(())
}

fn write_object(out: &mut String, object: &Object, path: &mut Vec<*const ()>) -> fmt::Result {
    let id = object.id();
    if path.contains(&id) {
        return out.write_str("[Circular]");
    }

    path.push(id);
    let entries = object.entries();
    out.write_char('{')?;
    for (i, (key, value)) in entries.iter().enumerate() {
        out.write_str(if i == 0 { " " } else { ", " })?;
        write_key(out, key)?;
        out.write_str(": ")?;
        write_value(out, value, path)?;
    }
    if !entries.is_empty() {
        out.write_char(' ')?;
    }
    path.pop();
    out.write_char('}')
}

fn write_key(out: &mut String, key: &str) -> fmt::Result {
    let bare = key
        .chars()
        .next()
        .is_some_and(|c| c.is_alphabetic() || c == '_' || c == '$')
        && key.chars().all(|c| c.is_alphanumeric() || c == '_' || c == '$');
    if bare {
        out.write_str(key)
    } else {
        write!(out, "'{}'", key.replace('\'', "\\'"))
    }
}
