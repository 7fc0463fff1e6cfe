//! Form configuration.
//!
//! Loaded from TOML, with optional `VERTEX_*` environment overrides applied on top.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

pub const SUBMIT_DELAY_ENV: &str = "VERTEX_SUBMIT_DELAY_MS";
pub const MIN_PASSWORD_LEN_ENV: &str = "VERTEX_MIN_PASSWORD_LEN";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("invalid value `{value}` for {key}")]
    InvalidValue { key: &'static str, value: String },
    #[error("min_password_len must be at least 1")]
    ZeroPasswordLength,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FormsConfig {
    /// Simulated network latency of a signup submission, in milliseconds.
    pub submit_delay_ms: u64,
    /// Minimum password length, counted in characters.
    pub min_password_len: usize,
}

impl Default for FormsConfig {
    fn default() -> Self {
        Self {
            submit_delay_ms: 1000,
            min_password_len: 8,
        }
    }
}

impl FormsConfig {
    pub fn from_toml_str(raw: &str) -> Result<Self, ConfigError> {
        let config: FormsConfig = toml::from_str(raw)?;
        config.validated()
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&raw)?;
        tracing::debug!(path = %path.display(), ?config, "Loaded forms config");
        Ok(config)
    }

    /// Apply `VERTEX_SUBMIT_DELAY_MS` / `VERTEX_MIN_PASSWORD_LEN` from the process environment.
    pub fn with_env_overrides(self) -> Result<Self, ConfigError> {
        self.with_overrides(|key| std::env::var(key).ok())
    }

    /// Apply overrides from an arbitrary key lookup.
    pub fn with_overrides<F>(mut self, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(raw) = lookup(SUBMIT_DELAY_ENV) {
            self.submit_delay_ms = parse_value(SUBMIT_DELAY_ENV, &raw)?;
        }
        if let Some(raw) = lookup(MIN_PASSWORD_LEN_ENV) {
            self.min_password_len = parse_value(MIN_PASSWORD_LEN_ENV, &raw)?;
        }
        self.validated()
    }

    pub fn submit_delay(&self) -> Duration {
        Duration::from_millis(self.submit_delay_ms)
    }

    fn validated(self) -> Result<Self, ConfigError> {
        if self.min_password_len == 0 {
            return Err(ConfigError::ZeroPasswordLength);
        }
        Ok(self)
    }
}

fn parse_value<T: std::str::FromStr>(key: &'static str, raw: &str) -> Result<T, ConfigError> {
    raw.trim().parse().map_err(|_| ConfigError::InvalidValue {
        key,
        value: raw.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;

    #[test]
    fn test_defaults_match_reference_behavior() {
        let config = FormsConfig::default();
        assert_eq!(config.submit_delay(), Duration::from_millis(1000));
        assert_eq!(config.min_password_len, 8);
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = FormsConfig::from_toml_str("submit_delay_ms = 250").unwrap();
        assert_eq!(config.submit_delay_ms, 250);
        assert_eq!(config.min_password_len, 8);
    }

    #[test]
    fn test_unknown_key_is_rejected() {
        let err = FormsConfig::from_toml_str("delay = 5").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_zero_password_length_is_rejected() {
        let err = FormsConfig::from_toml_str("min_password_len = 0").unwrap_err();
        assert!(matches!(err, ConfigError::ZeroPasswordLength));
    }

    #[test]
    fn test_overrides() {
        let env = HashMap::from([
            (SUBMIT_DELAY_ENV, "10"),
            (MIN_PASSWORD_LEN_ENV, " 12 "),
        ]);
        let config = FormsConfig::default()
            .with_overrides(|key| env.get(key).map(|v| v.to_string()))
            .unwrap();

        assert_eq!(config.submit_delay_ms, 10);
        assert_eq!(config.min_password_len, 12);
    }

    #[test]
    fn test_invalid_override() {
        let err = FormsConfig::default()
            .with_overrides(|key| (key == SUBMIT_DELAY_ENV).then(|| "soon".to_string()))
            .unwrap_err();

        assert_eq!(
            err.to_string(),
            "invalid value `soon` for VERTEX_SUBMIT_DELAY_MS"
        );
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "submit_delay_ms = 5\nmin_password_len = 10").unwrap();

        let config = FormsConfig::load(file.path()).unwrap();
        assert_eq!(
            config,
            FormsConfig {
                submit_delay_ms: 5,
                min_password_len: 10
            }
        );
    }

    #[test]
    fn test_load_missing_file() {
        let err = FormsConfig::load("/definitely/not/here.toml").unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }
}
