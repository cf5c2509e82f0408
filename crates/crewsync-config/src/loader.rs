//! Configuration loader (file + env merge).

use std::path::Path;

use figment::providers::{Env, Format, Serialized, Toml};
use figment::Figment;
use thiserror::Error;

use crewsync_types::DiagnosticError;

use crate::schema::CrewSyncConfig;

/// Single-variable override for the roster capacity, kept for hosts that
/// already set it.
pub const LEGACY_MAX_CREW_SIZE_ENV: &str = "MAX_CREW_SIZE";

/// Errors from configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// An explicitly requested config file does not exist.
    #[error("configuration file not found: {0}")]
    Missing(String),
    /// Failed to load or merge configuration.
    #[error("configuration error: {0}")]
    Load(String),
    /// The merged configuration is not usable.
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

impl DiagnosticError for ConfigError {
    fn hint(&self) -> Option<String> {
        match self {
            ConfigError::Missing(_) => Some("the --config path is wrong".into()),
            ConfigError::Load(_) => Some("a config file or CREWSYNC_* variable has a bad value".into()),
            ConfigError::Invalid(_) => None,
        }
    }

    fn fix(&self) -> Option<String> {
        match self {
            ConfigError::Invalid(_) => {
                Some("set registry.max_crew_size (or MAX_CREW_SIZE) to at least 1".into())
            }
            _ => None,
        }
    }
}

/// Defaults merged with the optional TOML file.
pub fn file_layers(config_path: Option<&Path>) -> Result<Figment, ConfigError> {
    let mut figment = Figment::from(Serialized::defaults(CrewSyncConfig::default()));

    if let Some(path) = config_path {
        if !path.exists() {
            return Err(ConfigError::Missing(path.display().to_string()));
        }
        figment = figment.merge(Toml::file(path));
    }

    Ok(figment)
}

/// Loads configuration by merging layers:
/// 1. Default values
/// 2. Config file (if given)
/// 3. Environment variables (`CREWSYNC_` prefix, `__` separates sections)
/// 4. `MAX_CREW_SIZE`
pub fn load_config(config_path: Option<&Path>) -> Result<CrewSyncConfig, ConfigError> {
    let figment = file_layers(config_path)?
        .merge(Env::prefixed("CREWSYNC_").split("__"))
        .merge(
            Env::raw()
                .only(&[LEGACY_MAX_CREW_SIZE_ENV])
                .map(|_| "registry.max_crew_size".into()),
        );

    extract(figment)
}

/// Extracts and validates a configuration.
pub fn extract(figment: Figment) -> Result<CrewSyncConfig, ConfigError> {
    let config: CrewSyncConfig = figment
        .extract()
        .map_err(|e| ConfigError::Load(e.to_string()))?;
    validate(&config)?;
    Ok(config)
}

fn validate(config: &CrewSyncConfig) -> Result<(), ConfigError> {
    if config.registry.max_crew_size == 0 {
        return Err(ConfigError::Invalid(
            "registry.max_crew_size must be at least 1".into(),
        ));
    }
    Ok(())
}

impl CrewSyncConfig {
    /// Re-checks invariants after programmatic overrides.
    pub fn validate(&self) -> Result<(), ConfigError> {
        validate(self)
    }
}
