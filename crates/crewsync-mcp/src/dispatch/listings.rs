//! Handles `prompts/list` and `resources/list`; both are always empty.

use crewsync_protocol::mcp::{PromptsListResult, ResourcesListResult};
use crewsync_protocol::RequestId;

use crate::handler::JsonRpcOutput;

pub(crate) fn handle_prompts_list(id: RequestId) -> JsonRpcOutput {
    JsonRpcOutput::from_result(id, PromptsListResult::default())
}

pub(crate) fn handle_resources_list(id: RequestId) -> JsonRpcOutput {
    JsonRpcOutput::from_result(id, ResourcesListResult::default())
}
