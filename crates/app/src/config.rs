use thiserror::Error;

use tradeflow_observability::LogFormat;

pub const DEFAULT_MARGIN_THRESHOLD: f64 = 15.0;
pub const DEFAULT_MODEL: &str = "gemini-3-flash-preview";

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("{var} must be an unsigned integer, got `{value}`")]
    InvalidSeed { var: &'static str, value: String },

    #[error("{var}: {source}")]
    InvalidLogFormat {
        var: &'static str,
        #[source]
        source: tradeflow_observability::UnknownLogFormat,
    },

    #[error("{var} must be a finite percentage, got `{value}`")]
    InvalidThreshold { var: &'static str, value: String },
}

/// Runtime settings, read from the environment.
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// `None` seeds the generator from OS entropy.
    pub seed: Option<u64>,
    pub log_format: LogFormat,
    /// Sale orders below this margin (percent) are flagged.
    pub margin_threshold: f64,
    pub api_key: Option<String>,
    pub model: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            seed: None,
            log_format: LogFormat::default(),
            margin_threshold: DEFAULT_MARGIN_THRESHOLD,
            api_key: None,
            model: DEFAULT_MODEL.to_string(),
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup. Absent or blank keys take their default;
    /// malformed values are errors.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());
        let mut config = Self::default();

        if let Some(value) = get("TRADEFLOW_SEED") {
            config.seed = Some(value.parse().map_err(|_| ConfigError::InvalidSeed {
                var: "TRADEFLOW_SEED",
                value,
            })?);
        }

        if let Some(value) = get("TRADEFLOW_LOG_FORMAT") {
            config.log_format = value.parse().map_err(|source| ConfigError::InvalidLogFormat {
                var: "TRADEFLOW_LOG_FORMAT",
                source,
            })?;
        }

        if let Some(value) = get("TRADEFLOW_MARGIN_THRESHOLD") {
            config.margin_threshold = value
                .parse::<f64>()
                .ok()
                .filter(|t| t.is_finite())
                .ok_or(ConfigError::InvalidThreshold {
                    var: "TRADEFLOW_MARGIN_THRESHOLD",
                    value,
                })?;
        }

        config.api_key = get("GEMINI_API_KEY").or_else(|| get("API_KEY"));
        if let Some(model) = get("GEMINI_MODEL") {
            config.model = model;
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| vars.get(key).cloned()
    }

    #[test]
    fn empty_environment_gives_defaults() {
        assert_eq!(AppConfig::from_lookup(lookup(&[])).unwrap(), AppConfig::default());
    }

    #[test]
    fn reads_every_setting() {
        let config = AppConfig::from_lookup(lookup(&[
            ("TRADEFLOW_SEED", "42"),
            ("TRADEFLOW_LOG_FORMAT", "pretty"),
            ("TRADEFLOW_MARGIN_THRESHOLD", "12.5"),
            ("API_KEY", "fallback-key"),
            ("GEMINI_MODEL", "gemini-2.5-pro"),
        ]))
        .unwrap();

        assert_eq!(config.seed, Some(42));
        assert_eq!(config.log_format, LogFormat::Pretty);
        assert_eq!(config.margin_threshold, 12.5);
        assert_eq!(config.api_key.as_deref(), Some("fallback-key"));
        assert_eq!(config.model, "gemini-2.5-pro");
    }

    #[test]
    fn gemini_key_wins_over_generic_key() {
        let config =
            AppConfig::from_lookup(lookup(&[("GEMINI_API_KEY", "g"), ("API_KEY", "a")])).unwrap();
        assert_eq!(config.api_key.as_deref(), Some("g"));
    }

    #[test]
    fn blank_values_use_defaults() {
        let config =
            AppConfig::from_lookup(lookup(&[("TRADEFLOW_SEED", "  "), ("API_KEY", "")])).unwrap();
        assert_eq!(config.seed, None);
        assert_eq!(config.api_key, None);
    }

    #[test]
    fn malformed_values_are_errors() {
        assert!(matches!(
            AppConfig::from_lookup(lookup(&[("TRADEFLOW_SEED", "-3")])),
            Err(ConfigError::InvalidSeed { .. })
        ));
        assert!(matches!(
            AppConfig::from_lookup(lookup(&[("TRADEFLOW_LOG_FORMAT", "xml")])),
            Err(ConfigError::InvalidLogFormat { .. })
        ));
        assert!(matches!(
            AppConfig::from_lookup(lookup(&[("TRADEFLOW_MARGIN_THRESHOLD", "NaN")])),
            Err(ConfigError::InvalidThreshold { .. })
        ));
    }
}
