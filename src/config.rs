//! Configuration management module.

use std::collections::HashSet;
use std::hash::Hash;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing_subscriber::EnvFilter;

use crate::models::{ReferenceData, ReferenceOption};

/// Configuration load result.
#[derive(Debug)]
pub enum ConfigLoadResult {
    /// Config loaded successfully.
    Loaded(AppConfig),
    /// Config file missing (first run).
    Missing,
    /// Config file exists but invalid.
    Invalid(ConfigError),
}

/// Configuration errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Read(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("Validation failed: {0}")]
    Validation(String),
}

/// Main application configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Options offered by the gender, department and designation selects.
    #[serde(default)]
    pub reference: ReferenceData,
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Window preferences.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UiConfig {
    pub window_width: f32,
    pub window_height: f32,
}

/// Log output settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Default filter directive, overridden by `RUST_LOG`.
    pub level: String,
    /// Directory for a daily rolling log file; console only when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub directory: Option<PathBuf>,
}

impl AppConfig {
    /// Get config file path (per-user config directory).
    pub fn default_path() -> PathBuf {
        ProjectDirs::from("", "", "employee-form")
            .map(|dirs| dirs.config_dir().to_path_buf())
            .unwrap_or_else(|| PathBuf::from("."))
            .join("config.toml")
    }

    /// Attempt to load config with detailed result.
    pub fn try_load(path: &Path) -> ConfigLoadResult {
        if !path.exists() {
            return ConfigLoadResult::Missing;
        }

        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str::<AppConfig>(&content) {
                Ok(config) => match config.validate() {
                    Ok(()) => ConfigLoadResult::Loaded(config),
                    Err(e) => ConfigLoadResult::Invalid(e),
                },
                Err(e) => ConfigLoadResult::Invalid(ConfigError::Parse(e)),
            },
            Err(e) => ConfigLoadResult::Invalid(ConfigError::Read(e)),
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        validate_options("gender", &self.reference.genders)?;
        validate_options("department", &self.reference.departments)?;
        validate_options("designation", &self.reference.designations)?;
        if self.reference.genders.iter().any(|g| g.id.trim().is_empty()) {
            return Err(ConfigError::Validation("Gender ids cannot be empty".to_string()));
        }
        if let Some(bad) = self
            .reference
            .departments
            .iter()
            .chain(&self.reference.designations)
            .find(|o| o.id < 1)
        {
            return Err(ConfigError::Validation(format!(
                "Option '{}' has id {}; numeric ids must be at least 1",
                bad.label, bad.id
            )));
        }
        if self.ui.window_width <= 0.0 || self.ui.window_height <= 0.0 {
            return Err(ConfigError::Validation("Window size must be positive".to_string()));
        }
        if EnvFilter::try_new(&self.logging.level).is_err() {
            return Err(ConfigError::Validation(format!(
                "Invalid log level: {}",
                self.logging.level
            )));
        }
        Ok(())
    }

    /// Save configuration to file.
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}

/// Check one reference list: non-empty, unique ids, non-empty labels.
fn validate_options<K: Eq + Hash + std::fmt::Display>(
    name: &str,
    options: &[ReferenceOption<K>],
) -> Result<(), ConfigError> {
    if options.is_empty() {
        return Err(ConfigError::Validation(format!("At least one {name} option is required")));
    }
    let mut seen = HashSet::new();
    for option in options {
        if option.label.trim().is_empty() {
            return Err(ConfigError::Validation(format!(
                "The {name} option with id {} has an empty label",
                option.id
            )));
        }
        if !seen.insert(&option.id) {
            return Err(ConfigError::Validation(format!(
                "Duplicate {name} id: {}",
                option.id
            )));
        }
    }
    Ok(())
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            window_width: 1000.0,
            window_height: 720.0,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            directory: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_validates() {
        let config = AppConfig::default();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validation_empty_departments() {
        let mut config = AppConfig::default();
        config.reference.departments.clear();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_duplicate_ids() {
        let mut config = AppConfig::default();
        config.reference.designations.push(ReferenceOption::new(1, "Duplicate"));
        assert!(config.validate().is_err());

        let mut config = AppConfig::default();
        config
            .reference
            .genders
            .push(ReferenceOption::new("Male".to_string(), "Again"));
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_sentinel_id() {
        let mut config = AppConfig::default();
        config.reference.departments.push(ReferenceOption::new(0, "Nowhere"));
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_empty_label() {
        let mut config = AppConfig::default();
        config.reference.designations[0].label = "  ".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_log_level() {
        let mut config = AppConfig::default();
        config.logging.level = "employee_form=debug".to_string();
        assert!(config.validate().is_ok());

        config.logging.level = "employee_form=loud".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_toml_round_trip() {
        let mut config = AppConfig::default();
        config.logging.directory = Some(PathBuf::from("logs"));
        let text = toml::to_string_pretty(&config).unwrap();
        let parsed: AppConfig = toml::from_str(&text).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let text = r#"
            [reference]
            genders = [{ id = "Male", label = "Male" }]
            departments = [{ id = 3, label = "Rust" }]
            designations = [{ id = 1, label = "SSE" }]
        "#;
        let config: AppConfig = toml::from_str(text).unwrap();
        assert!(config.validate().is_ok());
        assert_eq!(config.reference.department_label(3), Some("Rust"));
        assert_eq!(config.ui, UiConfig::default());
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_try_load_missing_and_invalid() {
        let dir = std::env::temp_dir().join(format!("employee-form-config-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();

        let missing = dir.join("absent.toml");
        assert!(matches!(AppConfig::try_load(&missing), ConfigLoadResult::Missing));

        let broken = dir.join("broken.toml");
        std::fs::write(&broken, "reference = 5").unwrap();
        assert!(matches!(
            AppConfig::try_load(&broken),
            ConfigLoadResult::Invalid(ConfigError::Parse(_))
        ));

        let saved = dir.join("nested").join("config.toml");
        AppConfig::default().save(&saved).unwrap();
        assert!(matches!(AppConfig::try_load(&saved), ConfigLoadResult::Loaded(_)));

        std::fs::remove_dir_all(&dir).unwrap();
    }
}
