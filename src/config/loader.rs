use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::config::types::{Config, MAX_DELAY_MS};

/// Why the demo could not use its config file.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The file exists but could not be read.
    #[error("cannot read {}: {source}", path.display())]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file is not valid TOML for [`Config`].
    #[error("invalid settings in {}: {source}", path.display())]
    ParseError {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    /// The settings parsed but are out of range.
    #[error("rejected settings: {message}")]
    ValidationError { message: String },
}

impl Config {
    /// `remote-state/config.toml` under the platform config directory, or
    /// under the working directory when the platform has none.
    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("remote-state")
            .join("config.toml")
    }

    /// Loads configuration from the default config file.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::config_path())
    }

    /// Loads configuration from `path`.
    ///
    /// - If the file doesn't exist, returns `Config::default()`.
    /// - If the file exists, parses it as TOML and validates.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "No config file, using defaults");
            return Ok(Config::default());
        }

        let content = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            source: e,
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.api.delay_ms > MAX_DELAY_MS {
            return Err(ConfigError::ValidationError {
                message: format!(
                    "api.delay_ms must be at most {} (got {})",
                    MAX_DELAY_MS, self.api.delay_ms
                ),
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::viewmodel::SeedPolicy;

    #[test]
    fn missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load_from(&dir.path().join("absent.toml")).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.api.delay_ms, 1000);
        assert_eq!(config.view.seed_policy, SeedPolicy::Reset);
    }

    #[test]
    fn parses_partial_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[view]\nseed_policy = \"keep_last\"\n").unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.api.delay_ms, 1000);
        assert_eq!(config.view.seed_policy, SeedPolicy::KeepLast);
    }

    #[test]
    fn rejects_excessive_delay() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[api]\ndelay_ms = 120000\n").unwrap();

        assert!(matches!(
            Config::load_from(&path),
            Err(ConfigError::ValidationError { .. })
        ));
    }

    #[test]
    fn reports_parse_errors_with_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[api\n").unwrap();

        let err = Config::load_from(&path).unwrap_err();
        assert!(matches!(err, ConfigError::ParseError { .. }));
        assert!(err.to_string().contains("config.toml"));
    }

    #[test]
    fn read_errors_name_the_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = Config::load_from(dir.path()).unwrap_err();
        assert!(matches!(err, ConfigError::ReadError { .. }));
        assert!(err.to_string().starts_with("cannot read "));
    }

    #[test]
    fn validation_message_is_prefixed() {
        let config = Config {
            api: crate::config::ApiConfig {
                delay_ms: MAX_DELAY_MS + 1,
            },
            ..Config::default()
        };
        let err = config.validate().unwrap_err();
        assert!(err.to_string().starts_with("rejected settings: api.delay_ms"));
    }

    #[test]
    fn config_path_ends_with_expected() {
        assert!(Config::config_path().ends_with("remote-state/config.toml"));
    }
}
