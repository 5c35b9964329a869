pub mod config;

pub use self::config::{LoggerConfig, ENV_PREFIX};
