// src/internal/value/mod.rs

mod canonical;
pub mod format;
mod inspect;
pub mod value;

pub use format::{format_value, format_values, UNSERIALIZABLE};
pub use value::{Callable, ErrorValue, Loggable, Object, PrefixBuilder, Value};
