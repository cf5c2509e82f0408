//! Handles the `initialize` MCP method.

use tracing::info;

use crewsync_protocol::mcp::initialize::{
    Capability, InitializeResult, ServerCapabilities, ServerInfo, PROTOCOL_VERSION,
};
use crewsync_protocol::RequestId;

use crate::handler::JsonRpcOutput;

/// Returns the fixed capability descriptor. Client params are ignored.
pub(crate) fn handle_initialize(id: RequestId, server_name: &str) -> JsonRpcOutput {
    info!("initializing crew sync MCP session");

    let result = InitializeResult {
        protocol_version: PROTOCOL_VERSION.to_string(),
        capabilities: ServerCapabilities {
            tools: Some(Capability {}),
            prompts: Some(Capability {}),
            resources: Some(Capability {}),
        },
        server_info: ServerInfo {
            name: server_name.to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        },
    };

    JsonRpcOutput::from_result(id, result)
}
