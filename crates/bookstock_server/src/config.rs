//! Server configuration loaded from TOML.
//!
//! Config file path comes from the `CONFIG_FILE` environment variable,
//! falling back to `settings.toml` in the working directory, falling back
//! to built-in defaults.

use crate::error::{ConfigError, ServerError};
use serde::Deserialize;
use std::fs::read_to_string;
use std::path::{Path, PathBuf};

fn default_bind() -> String {
    "[::]:5000".into()
}

fn default_workers() -> usize {
    4
}

fn default_log_level() -> String {
    "info".into()
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub(crate) struct Config {
    #[serde(default = "default_bind")]
    pub(crate) bind: String,
    #[serde(default = "default_workers")]
    pub(crate) workers: usize,
    #[serde(default = "default_log_level")]
    pub(crate) log_level: String,
    /// When unset, logs go to stderr instead of rolling files.
    #[serde(default)]
    pub(crate) log_dir: Option<PathBuf>,
    /// Cross-origin policy is deployment configuration: no CORS headers
    /// are emitted unless an origin is configured here.
    #[serde(default)]
    pub(crate) cors_allowed_origin: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bind: default_bind(),
            workers: default_workers(),
            log_level: default_log_level(),
            log_dir: None,
            cors_allowed_origin: None,
        }
    }
}

impl Config {
    pub(crate) fn load(settings_file: &Path) -> Result<Config, ServerError> {
        let contents = read_to_string(settings_file).map_err(|e| ConfigError::ReadFile {
            path: settings_file.display().to_string(),
            source: e,
        })?;
        let config: Config = toml::from_str(&contents).map_err(ConfigError::TomlParse)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.workers == 0 {
            return Err(ConfigError::Invalid {
                reason: "workers must be greater than 0".to_string(),
            });
        }
        Ok(())
    }
}

pub(crate) fn load() -> Result<Config, ServerError> {
    match std::env::var("CONFIG_FILE") {
        Ok(settings_file) => Config::load(Path::new(&settings_file)),
        Err(_) => {
            if Path::new("settings.toml").exists() {
                Config::load(Path::new("settings.toml"))
            } else {
                Ok(Config::default())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Config;
    use crate::error::{ConfigError, ServerError};

    fn parse(contents: &str) -> Result<Config, ServerError> {
        let config: Config =
            toml::from_str(contents).map_err(|e| ServerError::Config(ConfigError::TomlParse(e)))?;
        config.validate()?;
        Ok(config)
    }

    #[test]
    fn defaults_apply_for_empty_config() {
        let config = parse("").unwrap();
        assert_eq!(config.bind, "[::]:5000");
        assert_eq!(config.workers, 4);
        assert_eq!(config.log_level, "info");
        assert_eq!(config.log_dir, None);
        assert_eq!(config.cors_allowed_origin, None);
    }

    #[test]
    fn explicit_values_override_defaults() {
        let config = parse(
            r#"
            bind = "127.0.0.1:8080"
            workers = 2
            log_level = "debug"
            cors_allowed_origin = "http://localhost:3000"
            "#,
        )
        .unwrap();
        assert_eq!(config.bind, "127.0.0.1:8080");
        assert_eq!(config.workers, 2);
        assert_eq!(config.log_level, "debug");
        assert_eq!(
            config.cors_allowed_origin.as_deref(),
            Some("http://localhost:3000")
        );
    }

    #[test]
    fn zero_workers_is_rejected() {
        let err = parse("workers = 0").unwrap_err();
        assert!(matches!(
            err,
            ServerError::Config(ConfigError::Invalid { .. })
        ));
    }

    #[test]
    fn unknown_fields_are_rejected() {
        assert!(parse("no_such_field = true").is_err());
    }
}
