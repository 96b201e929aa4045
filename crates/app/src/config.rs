//! Driver configuration, read from environment variables.

use core::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use orderflow_core::{DomainError, OrderNumber};
use orderflow_observability::LogFormat;
use orderflow_sales::DEFAULT_PROCESSED_STATUS;

pub const ENV_OUTPUT: &str = "ORDERFLOW_OUTPUT";
pub const ENV_LOG_FORMAT: &str = "ORDERFLOW_LOG_FORMAT";
pub const ENV_PROCESSED_STATUS: &str = "ORDERFLOW_PROCESSED_STATUS";
pub const ENV_ORDER_NUMBER: &str = "ORDERFLOW_ORDER_NUMBER";

/// Where reports are written.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One human-readable line per report on stdout.
    #[default]
    Text,
    /// One JSON object per line on stdout.
    Json,
    /// Reports become tracing events.
    Log,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            "log" => Ok(OutputFormat::Log),
            other => Err(format!("unknown output format: {other}")),
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("ORDERFLOW_ORDER_NUMBER is invalid: {0}")]
    OrderNumber(#[from] DomainError),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    pub output: OutputFormat,
    pub log_format: LogFormat,
    pub processed_status: String,
    pub order_number: OrderNumber,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            output: OutputFormat::default(),
            log_format: LogFormat::default(),
            processed_status: DEFAULT_PROCESSED_STATUS.to_string(),
            order_number: OrderNumber::new(1),
        }
    }
}

impl AppConfig {
    /// Read configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read configuration through `lookup`, which maps a variable name to its value.
    ///
    /// Unknown output/log formats and a blank status fall back to defaults with
    /// a warning. A malformed order number is an error.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        let mut warnings = Vec::new();

        if let Some(raw) = lookup(ENV_OUTPUT) {
            match raw.parse() {
                Ok(output) => config.output = output,
                Err(e) => warnings.push(format!("{ENV_OUTPUT}: {e}; using text")),
            }
        }

        if let Some(raw) = lookup(ENV_LOG_FORMAT) {
            match raw.parse() {
                Ok(format) => config.log_format = format,
                Err(e) => warnings.push(format!("{ENV_LOG_FORMAT}: {e}; using json")),
            }
        }

        if let Some(raw) = lookup(ENV_PROCESSED_STATUS) {
            if raw.trim().is_empty() {
                warnings.push(format!(
                    "{ENV_PROCESSED_STATUS} is blank; using \"{DEFAULT_PROCESSED_STATUS}\""
                ));
            } else {
                config.processed_status = raw;
            }
        }

        if let Some(raw) = lookup(ENV_ORDER_NUMBER) {
            config.order_number = raw.parse()?;
        }

        for warning in &warnings {
            tracing::warn!("{warning}");
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn defaults_when_nothing_is_set() {
        let config = AppConfig::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.processed_status, "order processed");
        assert_eq!(config.order_number, OrderNumber::new(1));
    }

    #[test]
    fn reads_every_variable() {
        let config = AppConfig::from_lookup(lookup_from(&[
            (ENV_OUTPUT, "json"),
            (ENV_LOG_FORMAT, "pretty"),
            (ENV_PROCESSED_STATUS, "processed"),
            (ENV_ORDER_NUMBER, "42"),
        ]))
        .unwrap();

        assert_eq!(config.output, OutputFormat::Json);
        assert_eq!(config.log_format, LogFormat::Pretty);
        assert_eq!(config.processed_status, "processed");
        assert_eq!(config.order_number, OrderNumber::new(42));
    }

    #[test]
    fn unknown_formats_and_blank_status_fall_back_to_defaults() {
        let config = AppConfig::from_lookup(lookup_from(&[
            (ENV_OUTPUT, "xml"),
            (ENV_LOG_FORMAT, "yaml"),
            (ENV_PROCESSED_STATUS, "  "),
        ]))
        .unwrap();

        assert_eq!(config.output, OutputFormat::Text);
        assert_eq!(config.log_format, LogFormat::Json);
        assert_eq!(config.processed_status, DEFAULT_PROCESSED_STATUS);
    }

    #[test]
    fn malformed_order_number_is_an_error() {
        let err = AppConfig::from_lookup(lookup_from(&[(ENV_ORDER_NUMBER, "one")])).unwrap_err();
        assert!(err.to_string().starts_with("ORDERFLOW_ORDER_NUMBER is invalid"));
    }
}
