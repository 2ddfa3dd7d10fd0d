use anyhow::Result;
use serde::{Deserialize, Serialize};

use super::{defaults, envconfig::EnvConfig, validate};

/// Service configuration, read from `APP_*` environment variables
/// (`APP_GENERAL__PORT`, `APP_DATABASE__URL`, ...).
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    pub general: GeneralConfig,
    pub logging: LoggingConfig,
    pub database: DatabaseConfig,
}

impl AppConfig {
    pub fn from_env() -> Result<Self> {
        <Self as EnvConfig>::from_env()
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.general.host, self.general.port)
    }
}

impl EnvConfig for AppConfig {
    fn validate(&self) -> Result<()> {
        validate::validate(self)
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct GeneralConfig {
    pub host: String,
    pub port: u16,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            host: defaults::DEFAULT_HOST.to_string(),
            port: defaults::DEFAULT_PORT as u16,
        }
    }
}

/// `RUST_LOG`, when set, overrides `rust_log`.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoggingConfig {
    pub rust_log: String,
    pub format: LogFormat,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            rust_log: defaults::DEFAULT_RUST_LOG.to_string(),
            format: LogFormat::default(),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
    pub min_idle: u32,
}

impl DatabaseConfig {
    pub fn with_url(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            ..Self::default()
        }
    }
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: defaults::DEFAULT_DATABASE_URL.to_string(),
            max_connections: defaults::DEFAULT_DB_MAX_CONNECTIONS as u32,
            min_idle: defaults::DEFAULT_DB_MIN_IDLE as u32,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{AppConfig, LogFormat};
    use crate::config::{EnvConfig, envconfig::EnvVars};

    fn vars(pairs: &[(&str, &str)]) -> EnvVars {
        pairs
            .iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect()
    }

    #[test]
    fn empty_environment_yields_defaults() {
        let cfg = AppConfig::from_vars(Some(vars(&[]))).expect("defaults should load");
        assert_eq!(cfg.bind_addr(), "0.0.0.0:5000");
        assert_eq!(cfg.database.url, "sqlite://testdb.db?mode=rwc");
        assert_eq!(cfg.logging.format, LogFormat::Text);
    }

    #[test]
    fn prefixed_variables_override_nested_fields() {
        let cfg = AppConfig::from_vars(Some(vars(&[
            ("APP_GENERAL__PORT", "8081"),
            ("APP_DATABASE__URL", "sqlite::memory:"),
            ("APP_LOGGING__FORMAT", "json"),
            ("APP_LOGGING__RUST_LOG", "debug"),
        ])))
        .expect("overrides should load");

        assert_eq!(cfg.general.port, 8081);
        assert_eq!(cfg.database.url, "sqlite::memory:");
        assert_eq!(cfg.logging.format, LogFormat::Json);
        assert_eq!(cfg.logging.rust_log, "debug");
    }

    #[test]
    fn invalid_values_fail_validation() {
        let err = AppConfig::from_vars(Some(vars(&[("APP_DATABASE__URL", "mysql://db")])))
            .expect_err("non-sqlite url should be rejected");
        assert!(format!("{err:#}").contains("sqlite: scheme"));
    }

    #[test]
    fn unknown_log_format_is_rejected() {
        assert!(AppConfig::from_vars(Some(vars(&[("APP_LOGGING__FORMAT", "xml")]))).is_err());
    }
}
