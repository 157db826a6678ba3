//! Top-level Sarica configuration with layered resolution.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::{defaults, AlignmentConfig, StorageConfig};
use crate::errors::ConfigError;

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. Environment variables (`SARICA_*`)
/// 2. Project config (`sarica.toml` in the root directory)
/// 3. Compiled defaults
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct SaricaConfig {
    pub storage: StorageConfig,
    pub alignments: AlignmentConfig,
}

impl SaricaConfig {
    /// Load configuration for the given root directory.
    pub fn load(root: &Path) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        let project_config_path = root.join(defaults::PROJECT_CONFIG_FILENAME);
        if project_config_path.exists() {
            Self::merge_toml_file(&mut config, &project_config_path)?;
        }

        Self::apply_env_overrides(&mut config)?;
        Self::validate(&config)?;

        Ok(config)
    }

    /// Load configuration from a TOML string (for testing).
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        let config: SaricaConfig = toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })?;
        Self::validate(&config)?;
        Ok(config)
    }

    /// Validate the configuration values.
    pub fn validate(config: &SaricaConfig) -> Result<(), ConfigError> {
        if let Some(size) = config.storage.read_pool_size {
            if !(1..=defaults::MAX_READ_POOL_SIZE).contains(&size) {
                return Err(ConfigError::ValidationFailed {
                    field: "storage.read_pool_size".to_string(),
                    message: format!("must be between 1 and {}", defaults::MAX_READ_POOL_SIZE),
                });
            }
        }
        if let Some(ref guild) = config.storage.guild_id {
            if guild.is_empty() || guild.contains(['/', '\\']) {
                return Err(ConfigError::ValidationFailed {
                    field: "storage.guild_id".to_string(),
                    message: "must be a non-empty file name component".to_string(),
                });
            }
        }
        config.alignments.resolve()?;
        Ok(())
    }

    fn merge_toml_file(config: &mut SaricaConfig, path: &Path) -> Result<(), ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;

        let file_config: SaricaConfig =
            toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;

        Self::merge(config, &file_config);
        Ok(())
    }

    /// Merge `other` into `base`; `other` wins wherever it has a value.
    fn merge(base: &mut SaricaConfig, other: &SaricaConfig) {
        if other.storage.data_dir.is_some() {
            base.storage.data_dir = other.storage.data_dir.clone();
        }
        if other.storage.guild_id.is_some() {
            base.storage.guild_id = other.storage.guild_id.clone();
        }
        if other.storage.read_pool_size.is_some() {
            base.storage.read_pool_size = other.storage.read_pool_size;
        }
        for (class, alignment) in &other.alignments.overrides {
            base.alignments
                .overrides
                .insert(class.clone(), alignment.clone());
        }
    }

    fn apply_env_overrides(config: &mut SaricaConfig) -> Result<(), ConfigError> {
        if let Ok(dir) = std::env::var("SARICA_DATA_DIR") {
            config.storage.data_dir = Some(dir);
        }
        if let Ok(guild) = std::env::var("SARICA_GUILD_ID") {
            config.storage.guild_id = Some(guild);
        }
        if let Ok(size) = std::env::var("SARICA_READ_POOL_SIZE") {
            let parsed = size.parse::<usize>().map_err(|e| ConfigError::InvalidValue {
                field: "SARICA_READ_POOL_SIZE".to_string(),
                message: e.to_string(),
            })?;
            config.storage.read_pool_size = Some(parsed);
        }
        Ok(())
    }
}
