//! JSON-RPC 2.0 types for MCP transport.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// JSON-RPC protocol version tag.
pub const JSONRPC_VERSION: &str = "2.0";

/// JSON-RPC 2.0 request.
///
/// A missing `id` deserializes to [`RequestId::null`]; the server still
/// answers it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonRpcRequest {
    /// Protocol version, always "2.0".
    pub jsonrpc: String,
    /// Request ID, echoed verbatim in the response.
    #[serde(default)]
    pub id: RequestId,
    /// Method name.
    pub method: String,
    /// Optional parameters.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub params: Option<Value>,
}

/// JSON-RPC 2.0 success response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonRpcResponse {
    /// Protocol version, always "2.0".
    pub jsonrpc: String,
    /// Request ID (matches the request).
    pub id: RequestId,
    /// Result value.
    pub result: Value,
}

/// JSON-RPC 2.0 error response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonRpcErrorResponse {
    /// Protocol version, always "2.0".
    pub jsonrpc: String,
    /// Request ID (matches the request, null if it could not be read).
    pub id: RequestId,
    /// Error details.
    pub error: JsonRpcError,
}

/// JSON-RPC 2.0 error object.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonRpcError {
    /// Error code.
    pub code: i32,
    /// Human-readable message.
    pub message: String,
    /// Optional structured data.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
}

/// Opaque request ID.
///
/// Any JSON value is accepted and round-tripped untouched, including
/// `null`. Numbers keep their source text (serde_json is built with
/// `arbitrary_precision`), so ids beyond 64 bits are not rounded.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RequestId(Value);

impl RequestId {
    /// The `null` ID used when a request carried none or was unreadable.
    pub fn null() -> Self {
        Self(Value::Null)
    }

    /// Returns true for the `null` ID.
    pub fn is_null(&self) -> bool {
        self.0.is_null()
    }

    /// Borrows the raw JSON value.
    pub fn as_value(&self) -> &Value {
        &self.0
    }
}

impl From<Value> for RequestId {
    fn from(v: Value) -> Self {
        Self(v)
    }
}

impl From<i64> for RequestId {
    fn from(n: i64) -> Self {
        Self(Value::from(n))
    }
}

impl From<&str> for RequestId {
    fn from(s: &str) -> Self {
        Self(Value::from(s))
    }
}

impl From<String> for RequestId {
    fn from(s: String) -> Self {
        Self(Value::from(s))
    }
}

impl std::fmt::Display for RequestId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Standard JSON-RPC error codes.
pub mod error_codes {
    /// Invalid JSON was received.
    pub const PARSE_ERROR: i32 = -32700;
    /// The JSON sent is not a valid Request object.
    pub const INVALID_REQUEST: i32 = -32600;
    /// The method does not exist.
    pub const METHOD_NOT_FOUND: i32 = -32601;
    /// Invalid method parameter(s).
    pub const INVALID_PARAMS: i32 = -32602;
    /// Internal JSON-RPC error.
    pub const INTERNAL_ERROR: i32 = -32603;
}

impl JsonRpcRequest {
    /// Creates a new JSON-RPC 2.0 request.
    pub fn new(id: impl Into<RequestId>, method: impl Into<String>, params: Option<Value>) -> Self {
        Self {
            jsonrpc: JSONRPC_VERSION.to_string(),
            id: id.into(),
            method: method.into(),
            params,
        }
    }

    /// Parses one wire line into a request.
    ///
    /// Invalid JSON yields a `PARSE_ERROR` with a null ID. Valid JSON
    /// that is not a request object yields `INVALID_REQUEST`, carrying
    /// the `id` member when one is present.
    pub fn parse(line: &str) -> Result<Self, JsonRpcErrorResponse> {
        let value: Value = serde_json::from_str(line).map_err(|e| {
            JsonRpcErrorResponse::error(
                RequestId::null(),
                error_codes::PARSE_ERROR,
                format!("parse error: {e}"),
            )
        })?;

        let id = value
            .get("id")
            .cloned()
            .map(RequestId::from)
            .unwrap_or_default();

        let request: JsonRpcRequest = serde_json::from_value(value).map_err(|e| {
            JsonRpcErrorResponse::error(
                id.clone(),
                error_codes::INVALID_REQUEST,
                format!("invalid request: {e}"),
            )
        })?;

        if request.jsonrpc != JSONRPC_VERSION {
            return Err(JsonRpcErrorResponse::error(
                id,
                error_codes::INVALID_REQUEST,
                format!(
                    "invalid request: expected jsonrpc \"{JSONRPC_VERSION}\", got \"{}\"",
                    request.jsonrpc
                ),
            ));
        }

        Ok(request)
    }
}

impl JsonRpcResponse {
    /// Creates a success response.
    pub fn success(id: RequestId, result: Value) -> Self {
        Self {
            jsonrpc: JSONRPC_VERSION.to_string(),
            id,
            result,
        }
    }
}

impl JsonRpcErrorResponse {
    /// Creates an error response.
    pub fn error(id: RequestId, code: i32, message: impl Into<String>) -> Self {
        Self {
            jsonrpc: JSONRPC_VERSION.to_string(),
            id,
            error: JsonRpcError {
                code,
                message: message.into(),
                data: None,
            },
        }
    }
}
