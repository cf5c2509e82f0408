//! JSON-RPC request router.

use tracing::{debug, error};

use crewsync_protocol::{
    error_codes, JsonRpcErrorResponse, JsonRpcRequest, JsonRpcResponse, RequestId,
};
use crewsync_registry::ToolRegistry;

use crate::dispatch;
use crate::method::Method;

/// Server name reported by `initialize` unless configured otherwise.
pub const DEFAULT_SERVER_NAME: &str = "crew-sync-agent";

/// The single response produced for a request.
#[derive(Debug, Clone)]
pub enum JsonRpcOutput {
    Success(JsonRpcResponse),
    Error(JsonRpcErrorResponse),
}

impl JsonRpcOutput {
    /// Serializes the response as a single JSON line (no trailing newline).
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        match self {
            JsonRpcOutput::Success(r) => serde_json::to_string(r),
            JsonRpcOutput::Error(e) => serde_json::to_string(e),
        }
    }

    /// The ID the response is correlated with.
    pub fn id(&self) -> &RequestId {
        match self {
            JsonRpcOutput::Success(r) => &r.id,
            JsonRpcOutput::Error(e) => &e.id,
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, JsonRpcOutput::Error(_))
    }

    /// Wraps a serializable result, falling back to `INTERNAL_ERROR`.
    pub(crate) fn from_result<T: serde::Serialize>(id: RequestId, result: T) -> Self {
        match serde_json::to_value(result) {
            Ok(v) => JsonRpcOutput::Success(JsonRpcResponse::success(id, v)),
            Err(e) => {
                error!(error = %e, "failed to serialize result");
                JsonRpcOutput::Error(JsonRpcErrorResponse::error(
                    id,
                    error_codes::INTERNAL_ERROR,
                    e.to_string(),
                ))
            }
        }
    }

    pub(crate) fn error(id: RequestId, code: i32, message: impl Into<String>) -> Self {
        JsonRpcOutput::Error(JsonRpcErrorResponse::error(id, code, message))
    }
}

impl From<JsonRpcErrorResponse> for JsonRpcOutput {
    fn from(e: JsonRpcErrorResponse) -> Self {
        JsonRpcOutput::Error(e)
    }
}

/// Routes requests to method implementations.
///
/// Owns the tool registry outright, so each handler instance is an
/// independent server.
#[derive(Debug)]
pub struct McpHandler {
    registry: ToolRegistry,
    server_name: String,
}

impl McpHandler {
    /// Creates a handler over `registry`.
    pub fn new(registry: ToolRegistry) -> Self {
        Self {
            registry,
            server_name: DEFAULT_SERVER_NAME.to_string(),
        }
    }

    /// Overrides the name reported in `serverInfo`.
    pub fn with_server_name(mut self, name: impl Into<String>) -> Self {
        self.server_name = name.into();
        self
    }

    pub fn registry(&self) -> &ToolRegistry {
        &self.registry
    }

    /// Produces exactly one response for `request`.
    pub fn dispatch(&mut self, request: &JsonRpcRequest) -> JsonRpcOutput {
        let id = request.id.clone();
        let method = Method::parse(&request.method);
        debug!(%method, %id, "dispatching");

        match method {
            Method::Initialize => dispatch::initialize::handle_initialize(id, &self.server_name),
            Method::Ping => JsonRpcOutput::from_result(id, serde_json::json!({})),
            Method::ToolsList => dispatch::tools_list::handle_tools_list(id, &self.registry),
            Method::ToolsCall => {
                dispatch::tools_call::handle_tools_call(id, &request.params, &mut self.registry)
            }
            Method::PromptsList => dispatch::listings::handle_prompts_list(id),
            Method::ResourcesList => dispatch::listings::handle_resources_list(id),
            Method::Unknown(name) => JsonRpcOutput::error(
                id,
                error_codes::METHOD_NOT_FOUND,
                format!("Method not found: {name}"),
            ),
        }
    }

    /// Parses and dispatches one raw line.
    ///
    /// Lines that fail to parse are answered with the parse/invalid-request
    /// error rather than dropped.
    pub fn handle_line(&mut self, line: &str) -> JsonRpcOutput {
        match JsonRpcRequest::parse(line) {
            Ok(request) => self.dispatch(&request),
            Err(e) => e.into(),
        }
    }
}

impl Default for McpHandler {
    fn default() -> Self {
        Self::new(ToolRegistry::default())
    }
}
