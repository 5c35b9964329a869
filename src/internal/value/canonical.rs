// src/internal/value/canonical.rs

use serde::ser::{Error as _, SerializeMap, SerializeSeq};
use serde::{Serialize, Serializer};
use std::cell::RefCell;

use super::format::format_value;
use super::value::{symbol_text, Object, Value};

/// Largest integer an f64 holds exactly
const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_992.0;

/// Encode a structured value as compact single-line JSON.
///
/// Fails when an object is reached again while it is still being encoded.
pub(crate) fn to_compact_json(value: &Value) -> serde_json::Result<String> {
    let path = RefCell::new(Vec::new());
    serde_json::to_string(&Canonical { value, path: &path })
}

/// Serialize adapter tracking the objects on the current encoding path
struct Canonical<'a> {
    value: &'a Value,
    path: &'a RefCell<Vec<*const ()>>,
}

impl<'a> Canonical<'a> {
    fn child<'b>(&'b self, value: &'b Value) -> Canonical<'b> {
        Canonical {
            value,
            path: self.path,
        }
    }

    fn serialize_object<S: Serializer>(&self, object: &Object, serializer: S) -> Result<S::Ok, S::Error> {
        let entries = object.entries();
        let mut map = serializer.serialize_map(None)?;
        for (key, value) in entries.iter().filter(|(_, v)| !is_omitted(v)) {
            map.serialize_entry(key, &self.child(value))?;
        }
        map.end()
    }

    /// JSON property name for a map key; structured keys share the cycle path
    fn key_text<E: serde::ser::Error>(&self, key: &Value) -> Result<String, E> {
        match key {
            Value::Text(text) => Ok(text.clone()),
            structured if structured.is_structured() => {
                serde_json::to_string(&self.child(structured)).map_err(E::custom)
            }
            other => Ok(format_value(other)),
        }
    }
}

impl Serialize for Canonical<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self.value {
            // Omitted in objects, null in arrays
            Value::Undefined | Value::Function(_) | Value::Null => serializer.serialize_unit(),
            Value::Bool(b) => serializer.serialize_bool(*b),
            Value::Number(n) => serialize_number(*n, serializer),
            Value::Text(text) => serializer.serialize_str(text),
            Value::BigInt(n) => serializer.collect_str(n),
            Value::Symbol(description) => {
                serializer.serialize_str(&symbol_text(description.as_deref()))
            }
            Value::Error(err) => {
                let mut map = serializer.serialize_map(Some(2))?;
                map.serialize_entry("name", &err.name)?;
                map.serialize_entry("message", &err.message)?;
                map.end()
            }
            Value::Array(items) | Value::Set(items) => {
                let mut seq = serializer.serialize_seq(Some(items.len()))?;
                for item in items {
                    seq.serialize_element(&self.child(item))?;
                }
                seq.end()
            }
            Value::Map(entries) => {
                let mut map = serializer.serialize_map(None)?;
                for (key, value) in entries.iter().filter(|(_, v)| !is_omitted(v)) {
                    map.serialize_entry(&self.key_text::<S::Error>(key)?, &self.child(value))?;
                }
                map.end()
            }
            Value::Object(object) => {
                let id = object.id();
                if self.path.borrow().contains(&id) {
                    return Err(S::Error::custom("converting circular structure to JSON"));
                }
                self.path.borrow_mut().push(id);
                let result = self.serialize_object(object, serializer);
                self.path.borrow_mut().pop();
                result
            }
            Value::Custom(custom) => custom
                .to_json()
                .map_err(S::Error::custom)?
                .serialize(serializer),
        }
    }
}

fn is_omitted(value: &Value) -> bool {
    matches!(value, Value::Undefined | Value::Function(_))
}

fn serialize_number<S: Serializer>(n: f64, serializer: S) -> Result<S::Ok, S::Error> {
    if !n.is_finite() {
        serializer.serialize_unit()
    } else if n.fract() == 0.0 && n.abs() < MAX_SAFE_INTEGER {
        serializer.serialize_i64(n as i64)
    } else {
        serializer.serialize_f64(n)
    }
}
