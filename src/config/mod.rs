pub mod analytics;
pub mod chart;
pub mod dataset;
pub mod log;
pub mod server;

use std::path::Path;

use serde::Deserialize;
use serde::Serialize;
use toml;

pub use analytics::AnalyticsConfig;
pub use chart::ChartConfig;
pub use dataset::DatasetConfig;
pub use log::LogRotation;
pub use log::LoggingConfig;
pub use server::ServerConfig;

use crate::err_with_loc;
use crate::error::ConfigError;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub dataset: DatasetConfig,
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub analytics: AnalyticsConfig,
    #[serde(default)]
    pub chart: ChartConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    pub fn validate(&self) -> crate::Result<()> {
        self.analytics.validate()?;
        self.chart.validate()?;
        Ok(())
    }
}

pub fn load_config(path: impl AsRef<Path>) -> crate::Result<Config> {
    let path = path.as_ref();
    let config_str = std::fs::read_to_string(path)
        .map_err(|e| err_with_loc!(ConfigError::OpenFileError(format!("{}: {}", path.display(), e))))?;
    parse_config(&config_str)
}

pub fn parse_config(config_str: &str) -> crate::Result<Config> {
    let config: Config =
        toml::from_str(config_str).map_err(|e| err_with_loc!(ConfigError::ParseError(e.to_string())))?;
    config.validate()?;
    Ok(config)
}
