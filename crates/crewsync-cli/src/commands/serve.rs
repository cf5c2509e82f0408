//! `crewsync serve` command.
//!
//! Runs the MCP server over stdio until stdin closes or Ctrl-C.

use crewsync_config::CrewSyncConfig;
use crewsync_transport_stdio::{McpServer, StdioTransport, TransportError};

use crate::shared;

/// Executes the serve command.
///
/// Ctrl-C is a clean shutdown; only transport failures are errors.
pub async fn execute(config: &CrewSyncConfig) -> Result<(), TransportError> {
    let handler = shared::build_handler(config);
    let transport = StdioTransport::new(tokio::io::stdin(), tokio::io::stdout());
    let mut server = McpServer::new(transport, handler);
    tracing::info!(
        name = %config.server.name,
        max_crew_size = config.registry.max_crew_size,
        "crew sync MCP server ready on stdio"
    );

    tokio::select! {
        result = server.run() => result?,
        _ = tokio::signal::ctrl_c() => {
            tracing::info!("shutdown signal received");
        }
    }

    Ok(())
}
