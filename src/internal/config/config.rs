use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, Environment, File, Source};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

use crate::internal::logger::LogParams;
use crate::internal::severity::{Severity, Threshold};

/// Environment variable prefix, e.g. `CONLOG_THRESHOLD=warn`
pub const ENV_PREFIX: &str = "CONLOG";

/// Settings for a configured [`Logger`](crate::Logger)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggerConfig {
    #[serde(default)]
    pub level: Severity,
    #[serde(default)]
    pub threshold: Threshold,
    #[serde(default)]
    pub with_timestamp: bool,
    #[serde(default = "default_true")]
    pub color: bool,
}

fn default_true() -> bool {
    true
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            level: Severity::Info,
            threshold: Threshold::Info,
            with_timestamp: false,
            color: true,
        }
    }
}

impl LoggerConfig {
    /// Defaults, then `./conlog.{toml,yaml,json,...}` if present, then `CONLOG_*`
    pub fn load() -> Result<Self, ConfigError> {
        Self::layered(
            File::with_name("conlog").required(false),
            Environment::with_prefix(ENV_PREFIX),
        )
    }

    fn layered(
        file: impl Source + Send + Sync + 'static,
        env: Environment,
    ) -> Result<Self, ConfigError> {
        let config = Self::builder()?
            .add_source(file)
            .add_source(env.try_parsing(true))
            .build()?;

        let logger_config: LoggerConfig = config.try_deserialize()?;
        debug!("Loaded logger config: {:?}", logger_config);
        Ok(logger_config)
    }

    /// Defaults overlaid with one required file; format follows the extension
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let config = Self::builder()?
            .add_source(File::from(path).required(true))
            .build()?;

        let logger_config: LoggerConfig = config.try_deserialize()?;
        debug!("Loaded logger config from {}: {:?}", path.display(), logger_config);
        Ok(logger_config)
    }

    fn builder() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
        Config::builder()
            .set_default("level", "info")?
            .set_default("threshold", "info")?
            .set_default("with_timestamp", false)?
            .set_default("color", true)
    }

    /// Call defaults for a logger built from this config
    pub fn params(&self) -> LogParams {
        LogParams::new(self.level)
            .threshold(self.threshold)
            .with_timestamp(self.with_timestamp)
    }
}
