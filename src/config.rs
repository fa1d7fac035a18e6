use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;
use thiserror::Error;

use crate::models::ScoreScale;

/// Errors raised while loading settings
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Invalid score scale: {0} (must be greater than zero)")]
    InvalidScoreScale(u32),
}

/// Application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub server: ServerSettings,
    #[serde(default)]
    pub dashboard: DashboardSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    pub workers: Option<usize>,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            workers: None,
        }
    }
}

fn default_host() -> String { "0.0.0.0".to_string() }
fn default_port() -> u16 { 8080 }

#[derive(Debug, Clone, Deserialize)]
pub struct DashboardSettings {
    /// Upper bound of match scores (100 for percentages, 10 for ten-point scores)
    #[serde(default = "default_score_scale")]
    pub score_scale: u32,
    pub cache_capacity: Option<u64>,
    pub cache_ttl_secs: Option<u64>,
}

impl Default for DashboardSettings {
    fn default() -> Self {
        Self {
            score_scale: default_score_scale(),
            cache_capacity: None,
            cache_ttl_secs: None,
        }
    }
}

fn default_score_scale() -> u32 { 100 }

impl DashboardSettings {
    pub fn scale(&self) -> Result<ScoreScale, SettingsError> {
        ScoreScale::new(self.score_scale).ok_or(SettingsError::InvalidScoreScale(self.score_scale))
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

fn default_log_level() -> String { "info".to_string() }
fn default_log_format() -> String { "compact".to_string() }

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values in the struct
    /// 2. Configuration file (config/default.toml)
    /// 3. Local overrides (config/local.toml)
    /// 4. Environment variables (prefixed with MATCHMAKER__)
    pub fn load() -> Result<Self, SettingsError> {
        let settings = Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            // e.g., MATCHMAKER__SERVER__PORT -> server.port
            .add_source(environment())
            .build()?;

        Self::finish(settings)
    }

    /// Load configuration from a custom path
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, SettingsError> {
        let settings = Config::builder()
            .add_source(File::from(path.as_ref()))
            .add_source(environment())
            .build()?;

        Self::finish(settings)
    }

    fn finish(config: Config) -> Result<Self, SettingsError> {
        let settings: Settings = config.try_deserialize()?;
        settings.dashboard.scale()?;
        Ok(settings)
    }
}

fn environment() -> Environment {
    Environment::with_prefix("MATCHMAKER")
        .prefix_separator("__")
        .separator("__")
        .try_parsing(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use config::FileFormat;

    fn from_toml(toml: &str) -> Result<Settings, SettingsError> {
        let config = Config::builder()
            .add_source(File::from_str(toml, FileFormat::Toml))
            .build()?;
        Settings::finish(config)
    }

    #[test]
    fn test_defaults_without_file() {
        let settings = from_toml("").unwrap();
        assert_eq!(settings.server.port, 8080);
        assert_eq!(settings.dashboard.score_scale, 100);
        assert_eq!(settings.logging.level, "info");
        assert_eq!(settings.logging.format, "compact");
    }

    #[test]
    fn test_ten_point_scale() {
        let settings = from_toml("[dashboard]\nscore_scale = 10\ncache_ttl_secs = 30\n").unwrap();
        assert_eq!(settings.dashboard.scale().unwrap().max(), 10);
        assert_eq!(settings.dashboard.cache_ttl_secs, Some(30));
    }

    #[test]
    fn test_zero_scale_rejected() {
        let err = from_toml("[dashboard]\nscore_scale = 0\n").unwrap_err();
        assert!(matches!(err, SettingsError::InvalidScoreScale(0)));
    }

    // Single test so no other test observes the environment override
    #[test]
    fn test_default_file_and_env_override() {
        let settings = Settings::load_from("config/default.toml").unwrap();
        assert_eq!(settings.server.workers, Some(4));
        assert_eq!(settings.dashboard.score_scale, 100);
        assert_eq!(settings.dashboard.cache_capacity, Some(1000));
        assert_eq!(settings.dashboard.cache_ttl_secs, Some(300));

        std::env::set_var("MATCHMAKER__DASHBOARD__SCORE_SCALE", "10");
        let overridden = Settings::load_from("config/default.toml");
        std::env::remove_var("MATCHMAKER__DASHBOARD__SCORE_SCALE");

        let overridden = overridden.unwrap();
        assert_eq!(overridden.dashboard.scale().unwrap().max(), 10);
        assert_eq!(overridden.dashboard.cache_capacity, Some(1000));
    }
}
