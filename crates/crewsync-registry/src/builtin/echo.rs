use serde::Deserialize;
use serde_json::Value;

use crewsync_protocol::mcp::tools::ToolContent;

use super::{parse_args, ECHO};
use crate::error::RegistryError;

#[derive(Debug, Default, Deserialize)]
struct EchoArgs {
    #[serde(default)]
    text: String,
}

/// Returns the input text framed as an acknowledgment.
pub(crate) fn echo(arguments: &Value) -> Result<Vec<ToolContent>, RegistryError> {
    let args: EchoArgs = parse_args(ECHO, arguments)?;
    Ok(vec![ToolContent::text(format!("Crew Sync Echo: {}", args.text))])
}
