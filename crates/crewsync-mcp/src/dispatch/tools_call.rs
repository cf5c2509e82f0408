//! Handles the `tools/call` MCP method.

use serde_json::Value;
use tracing::{debug, warn};

use crewsync_protocol::mcp::tools::{ToolsCallParams, ToolsCallResult};
use crewsync_protocol::{error_codes, RequestId};
use crewsync_registry::ToolRegistry;
use crewsync_types::{CrewError, ErrorKind};

use crate::handler::JsonRpcOutput;

/// Handles the `tools/call` request.
pub(crate) fn handle_tools_call(
    id: RequestId,
    params: &Option<Value>,
    registry: &mut ToolRegistry,
) -> JsonRpcOutput {
    // 1. Parse params (absent params behave like `{}`)
    let call_params = match params {
        None | Some(Value::Null) => ToolsCallParams::default(),
        Some(p) => match serde_json::from_value::<ToolsCallParams>(p.clone()) {
            Ok(cp) => cp,
            Err(e) => {
                return JsonRpcOutput::error(
                    id,
                    error_codes::INVALID_PARAMS,
                    format!("invalid tools/call params: {e}"),
                );
            }
        },
    };

    // 2. Look up and run the tool
    debug!(tool = %call_params.name, "calling tool");
    match registry.invoke(&call_params.name, &call_params.arguments) {
        Ok(content) => JsonRpcOutput::from_result(id, ToolsCallResult { content }),
        Err(e) => {
            let err = CrewError::from(e);
            warn!(tool = %call_params.name, error = %err, "tool call failed");
            JsonRpcOutput::error(id, error_code(err.kind), err.message)
        }
    }
}

/// JSON-RPC code for a failed tool call.
///
/// Only unusable arguments are the caller's fault; everything else,
/// unknown tools included, is reported as an internal error.
pub(crate) fn error_code(kind: ErrorKind) -> i32 {
    match kind {
        ErrorKind::InvalidInput => error_codes::INVALID_PARAMS,
        ErrorKind::NotFound | ErrorKind::Conflict | ErrorKind::CapacityExceeded => {
            error_codes::INTERNAL_ERROR
        }
    }
}
