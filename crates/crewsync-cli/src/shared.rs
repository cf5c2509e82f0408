//! Shared helpers used across CLI commands.

use std::path::Path;

use crewsync_config::{load_config, ConfigError, CrewSyncConfig};
use crewsync_mcp::McpHandler;
use crewsync_registry::ToolRegistry;

/// Loads layered configuration and applies command-line overrides.
///
/// # Errors
///
/// Returns the loader's error, or `ConfigError::Invalid` if an override
/// breaks an invariant.
pub fn load_settings(
    config_path: Option<&Path>,
    max_crew_size: Option<usize>,
) -> Result<CrewSyncConfig, ConfigError> {
    let mut config = load_config(config_path)?;
    if let Some(max) = max_crew_size {
        config.registry.max_crew_size = max;
    }
    config.validate()?;
    Ok(config)
}

/// Builds a fresh handler (seeded registry) from configuration.
pub fn build_handler(config: &CrewSyncConfig) -> McpHandler {
    McpHandler::new(ToolRegistry::new(config.registry.max_crew_size))
        .with_server_name(config.server.name.clone())
}
