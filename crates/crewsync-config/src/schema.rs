//! Configuration schema types.

use serde::{Deserialize, Serialize};

use crewsync_mcp::DEFAULT_SERVER_NAME;
use crewsync_registry::DEFAULT_MAX_CREW_SIZE;

/// Top-level crew sync configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CrewSyncConfig {
    /// Registry settings.
    #[serde(default)]
    pub registry: RegistryConfig,
    /// Server identity.
    #[serde(default)]
    pub server: ServerConfig,
    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Registry settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RegistryConfig {
    /// Maximum number of crew members the roster accepts.
    #[serde(default = "default_max_crew_size")]
    pub max_crew_size: usize,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            max_crew_size: default_max_crew_size(),
        }
    }
}

fn default_max_crew_size() -> usize {
    DEFAULT_MAX_CREW_SIZE
}

/// Server identity reported by `initialize`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ServerConfig {
    /// Name in `serverInfo`.
    #[serde(default = "default_server_name")]
    pub name: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            name: default_server_name(),
        }
    }
}

fn default_server_name() -> String {
    DEFAULT_SERVER_NAME.to_string()
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LoggingConfig {
    /// Log level filter (e.g. "info", "debug", "crewsync_registry=trace").
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = CrewSyncConfig::default();
        assert_eq!(config.registry.max_crew_size, 10);
        assert_eq!(config.server.name, "crew-sync-agent");
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn partial_config_uses_defaults_for_missing() {
        let config: CrewSyncConfig =
            serde_json::from_str(r#"{"registry":{"max_crew_size":4}}"#).expect("parse");
        assert_eq!(config.registry.max_crew_size, 4);
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn deny_unknown_fields_rejects_extra_key() {
        let result: Result<CrewSyncConfig, _> =
            serde_json::from_str(r#"{"registry":{},"unknown_key":"bad"}"#);
        assert!(result.is_err());
    }
}
