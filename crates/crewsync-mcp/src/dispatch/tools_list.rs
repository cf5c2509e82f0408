//! Handles the `tools/list` MCP method.

use serde_json::Value;

use crewsync_protocol::mcp::tools::{McpToolDefinition, ToolsListResult};
use crewsync_protocol::RequestId;
use crewsync_registry::ToolRegistry;
use crewsync_types::ToolArgument;

use crate::handler::JsonRpcOutput;

/// Handles the `tools/list` request.
pub(crate) fn handle_tools_list(id: RequestId, registry: &ToolRegistry) -> JsonRpcOutput {
    let definitions: Vec<McpToolDefinition> = registry
        .list()
        .into_iter()
        .map(|d| McpToolDefinition {
            name: d.name.clone(),
            description: d.description.clone(),
            input_schema: build_input_schema(&d.arguments),
        })
        .collect();

    JsonRpcOutput::from_result(id, ToolsListResult { tools: definitions })
}

/// Builds a JSON Schema `inputSchema` from tool arguments.
///
/// `required` is always present, empty for argument-less tools.
pub(crate) fn build_input_schema(arguments: &[ToolArgument]) -> Value {
    let mut properties = serde_json::Map::new();
    let mut required = Vec::new();

    for arg in arguments {
        let mut prop = serde_json::Map::new();
        prop.insert("type".to_string(), Value::String(arg.arg_type.clone()));
        prop.insert(
            "description".to_string(),
            Value::String(arg.description.clone()),
        );
        if let Some(items) = &arg.items {
            prop.insert("items".to_string(), serde_json::json!({ "type": items }));
        }
        if let Some(max) = arg.max_items {
            prop.insert("maxItems".to_string(), Value::from(max));
        }
        if !arg.allowed.is_empty() {
            prop.insert(
                "enum".to_string(),
                Value::Array(arg.allowed.iter().cloned().map(Value::String).collect()),
            );
        }
        properties.insert(arg.name.clone(), Value::Object(prop));
        if arg.required {
            required.push(Value::String(arg.name.clone()));
        }
    }

    let mut schema = serde_json::Map::new();
    schema.insert("type".to_string(), Value::String("object".to_string()));
    schema.insert("properties".to_string(), Value::Object(properties));
    schema.insert("required".to_string(), Value::Array(required));

    Value::Object(schema)
}
