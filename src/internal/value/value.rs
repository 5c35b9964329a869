// src/internal/value/value.rs

use serde::Serialize;
use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;
use std::sync::Arc;

/// Zero-argument callback producing a line prefix
pub type PrefixBuilder = Arc<dyn Fn() -> String + Send + Sync>;

/// Anything that can be logged as a value
#[derive(Debug, Clone, Default)]
pub enum Value {
    #[default]
    Undefined,
    Null,
    Bool(bool),
    Number(f64),
    Text(String),
    BigInt(i128),
    Symbol(Option<String>),
    Error(ErrorValue),
    Function(Callable),
    Array(Vec<Value>),
    Object(Object),
    Map(Vec<(Value, Value)>),
    Set(Vec<Value>),
    Custom(Rc<dyn Loggable>),
}

/// Values with both a canonical encoding and a debug dump.
///
/// Every `Serialize + Debug` type implements it, so application structs can
/// be logged through [`Value::custom`].
pub trait Loggable: fmt::Debug {
    fn to_json(&self) -> serde_json::Result<serde_json::Value>;
}

impl<T: Serialize + fmt::Debug> Loggable for T {
    fn to_json(&self) -> serde_json::Result<serde_json::Value> {
        serde_json::to_value(self)
    }
}

/// Error-like value: name, message and an optional stack/cause trace
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorValue {
    pub name: String,
    pub message: String,
    pub stack: Option<String>,
}

impl ErrorValue {
    pub fn new(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            message: message.into(),
            stack: None,
        }
    }

    pub fn with_stack(mut self, stack: impl Into<String>) -> Self {
        self.stack = Some(stack.into());
        self
    }

    /// Capture a std error: short type name, display text and cause chain
    pub fn from_error<E: std::error::Error + ?Sized>(err: &E) -> Self {
        let mut causes = Vec::new();
        let mut source = err.source();
        while let Some(cause) = source {
            causes.push(format!("caused by: {}", cause));
            source = cause.source();
        }

        Self {
            name: short_type_name(std::any::type_name::<E>()).to_string(),
            message: err.to_string(),
            stack: (!causes.is_empty()).then(|| causes.join("\n")),
        }
    }
}

fn short_type_name(full: &str) -> &str {
    let base = full.split('<').next().unwrap_or(full);
    base.rsplit("::").next().unwrap_or(base)
}

/// A named or anonymous callable value
#[derive(Clone)]
pub struct Callable {
    name: Option<String>,
    body: PrefixBuilder,
}

impl Callable {
    pub fn new<F>(name: impl Into<String>, body: F) -> Self
    where
        F: Fn() -> String + Send + Sync + 'static,
    {
        Self {
            name: Some(name.into()),
            body: Arc::new(body),
        }
    }

    pub fn anonymous<F>(body: F) -> Self
    where
        F: Fn() -> String + Send + Sync + 'static,
    {
        Self {
            name: None,
            body: Arc::new(body),
        }
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref().filter(|n| !n.is_empty())
    }

    pub fn call(&self) -> String {
        (self.body)()
    }

    /// The callable as a prefix builder
    pub fn as_prefix_builder(&self) -> PrefixBuilder {
        Arc::clone(&self.body)
    }
}

impl fmt::Debug for Callable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Callable").field("name", &self.name).finish()
    }
}

/// Shared, insertion-ordered key/value table.
///
/// Clones share storage, so an object can (directly or indirectly) contain
/// itself.
#[derive(Clone, Default)]
pub struct Object(Rc<RefCell<Vec<(String, Value)>>>);

impl Object {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder form of [`Object::insert`]
    pub fn with(self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(key, value);
        self
    }

    /// Insert or replace a property, keeping the original position on replace
    pub fn insert(&self, key: impl Into<String>, value: impl Into<Value>) {
        let key = key.into();
        let value = value.into();
        let mut entries = self.0.borrow_mut();
        match entries.iter_mut().find(|(k, _)| *k == key) {
            Some(slot) => slot.1 = value,
            None => entries.push((key, value)),
        }
    }

    pub fn get(&self, key: &str) -> Option<Value> {
        self.0
            .borrow()
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.clone())
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.0.borrow().iter().any(|(k, _)| k == key)
    }

    pub fn len(&self) -> usize {
        self.0.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.borrow().is_empty()
    }

    /// Drop every property; breaks any cycle running through this object
    pub fn clear(&self) {
        self.0.borrow_mut().clear();
    }

    pub(crate) fn entries(&self) -> std::cell::Ref<'_, Vec<(String, Value)>> {
        self.0.borrow()
    }

    /// Identity used for cycle detection
    pub(crate) fn id(&self) -> *const () {
        Rc::as_ptr(&self.0) as *const ()
    }
}

impl fmt::Debug for Object {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Object").field("len", &self.len()).finish()
    }
}

impl Value {
    pub fn symbol(description: impl Into<String>) -> Self {
        Value::Symbol(Some(description.into()))
    }

    pub fn error<E: std::error::Error + ?Sized>(err: &E) -> Self {
        Value::Error(ErrorValue::from_error(err))
    }

    pub fn function<F>(name: impl Into<String>, body: F) -> Self
    where
        F: Fn() -> String + Send + Sync + 'static,
    {
        Value::Function(Callable::new(name, body))
    }

    pub fn map<K, V>(entries: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<Value>,
        V: Into<Value>,
    {
        Value::Map(
            entries
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }

    pub fn set<T: Into<Value>>(items: impl IntoIterator<Item = T>) -> Self {
        Value::Set(items.into_iter().map(Into::into).collect())
    }

    pub fn custom<T: Loggable + 'static>(value: T) -> Self {
        Value::Custom(Rc::new(value))
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Value::Text(text) => Some(text),
            _ => None,
        }
    }

    /// Structured values take the canonical-encoding path
    pub fn is_structured(&self) -> bool {
        matches!(
            self,
            Value::Array(_) | Value::Object(_) | Value::Map(_) | Value::Set(_) | Value::Custom(_)
        )
    }
}

/// Text of a symbol, `Symbol(description)`
pub(crate) fn symbol_text(description: Option<&str>) -> String {
    format!("Symbol({})", description.unwrap_or(""))
}

impl From<&str> for Value {
    fn from(text: &str) -> Self {
        Value::Text(text.to_string())
    }
}

impl From<String> for Value {
    fn from(text: String) -> Self {
        Value::Text(text)
    }
}

impl From<&String> for Value {
    fn from(text: &String) -> Self {
        Value::Text(text.clone())
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

macro_rules! number_from {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Value {
                fn from(n: $t) -> Self {
                    Value::Number(n as f64)
                }
            }
        )*
    };
}

number_from!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize, f32, f64);

impl From<i128> for Value {
    fn from(n: i128) -> Self {
        Value::BigInt(n)
    }
}

impl From<ErrorValue> for Value {
    fn from(err: ErrorValue) -> Self {
        Value::Error(err)
    }
}

impl From<Callable> for Value {
    fn from(callable: Callable) -> Self {
        Value::Function(callable)
    }
}

impl From<Object> for Value {
    fn from(object: Object) -> Self {
        Value::Object(object)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(items: Vec<T>) -> Self {
        Value::Array(items.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or(Value::Undefined)
    }
}

impl From<anyhow::Error> for Value {
    fn from(err: anyhow::Error) -> Self {
        let causes: Vec<String> = err
            .chain()
            .skip(1)
            .map(|cause| format!("caused by: {}", cause))
            .collect();
        Value::Error(ErrorValue {
            name: "Error".to_string(),
            message: err.to_string(),
            stack: (!causes.is_empty()).then(|| causes.join("\n")),
        })
    }
}

impl From<serde_json::Value> for Value {
    fn from(json: serde_json::Value) -> Self {
        match json {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Bool(b),
            serde_json::Value::Number(n) => Value::Number(n.as_f64().unwrap_or(f64::NAN)),
            serde_json::Value::String(s) => Value::Text(s),
            serde_json::Value::Array(items) => {
                Value::Array(items.into_iter().map(Value::from).collect())
            }
            serde_json::Value::Object(map) => {
                let object = Object::new();
                for (key, value) in map {
                    object.insert(key, Value::from(value));
                }
                Value::Object(object)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, thiserror::Error)]
    #[error("disk unplugged")]
    struct DiskError;

    #[derive(Debug, thiserror::Error)]
    #[error("could not save settings")]
    struct SaveError(#[source] DiskError);

    #[test]
    fn object_insert_replaces_in_place() {
        let obj = Object::new().with("a", 1).with("b", 2);
        obj.insert("a", "one");

        assert_eq!(obj.len(), 2);
        assert_eq!(obj.entries()[0].0, "a");
        assert_eq!(obj.get("a").unwrap().as_text(), Some("one"));
        assert!(obj.get("missing").is_none());
    }

    #[test]
    fn object_clones_share_storage() {
        let obj = Object::new();
        let alias = obj.clone();
        alias.insert("k", true);

        assert!(obj.contains_key("k"));
        assert_eq!(obj.id(), alias.id());
    }

    #[test]
    fn error_value_keeps_cause_chain() {
        let err = ErrorValue::from_error(&SaveError(DiskError));

        assert_eq!(err.name, "SaveError");
        assert_eq!(err.message, "could not save settings");
        assert_eq!(err.stack.as_deref(), Some("caused by: disk unplugged"));

        let leaf = ErrorValue::from_error(&DiskError);
        assert!(leaf.stack.is_none());
    }

    #[test]
    fn anyhow_errors_become_error_values() {
        let err = anyhow::Error::new(DiskError).context("reading config");
        let Value::Error(value) = Value::from(err) else {
            panic!("expected an error value");
        };

        assert_eq!(value.name, "Error");
        assert_eq!(value.message, "reading config");
        assert_eq!(value.stack.as_deref(), Some("caused by: disk unplugged"));
    }

    #[test]
    fn callable_names() {
        assert_eq!(Callable::new("build", || String::new()).name(), Some("build"));
        assert_eq!(Callable::new("", || String::new()).name(), None);
        assert_eq!(Callable::anonymous(|| "x".into()).call(), "x");
    }

    #[test]
    fn json_objects_convert_field_by_field() {
        let json = serde_json::json!({"a": 1, "b": [true, null]});
        let Value::Object(obj) = Value::from(json) else {
            panic!("expected object");
        };
        assert!(matches!(obj.get("a"), Some(Value::Number(n)) if n == 1.0));
        assert!(matches!(obj.get("b"), Some(Value::Array(items)) if items.len() == 2));
    }

    #[test]
    fn option_none_is_undefined() {
        assert!(matches!(Value::from(None::<i32>), Value::Undefined));
        assert!(matches!(Value::from(Some("x")), Value::Text(_)));
    }
}
