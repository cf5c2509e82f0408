//! `crewsync tools` command.

use crewsync_config::CrewSyncConfig;
use crewsync_mcp::JsonRpcOutput;
use crewsync_protocol::{methods, JsonRpcRequest};

use crate::shared;

/// Prints the `tools/list` result for the configured server.
pub fn execute(config: &CrewSyncConfig) -> anyhow::Result<()> {
    let mut handler = shared::build_handler(config);
    let request = JsonRpcRequest::new(0_i64, methods::TOOLS_LIST, None);

    match handler.dispatch(&request) {
        JsonRpcOutput::Success(resp) => {
            println!("{}", serde_json::to_string_pretty(&resp.result)?);
            Ok(())
        }
        JsonRpcOutput::Error(e) => Err(anyhow::anyhow!(
            "tools/list failed ({}): {}",
            e.error.code,
            e.error.message
        )),
    }
}
