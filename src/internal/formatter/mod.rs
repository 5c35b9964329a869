// src/internal/formatter/mod.rs

pub mod colors;
pub mod formatters;
pub mod prefix;

pub use colors::{color_for, color_for_token, RESET_COLOR};
pub use formatters::{
    color_format, color_formatter, plain_format, plain_formatter, FormatterInput, LineFormatter,
};
pub use prefix::build_prefix;
