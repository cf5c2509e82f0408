//! MCP server loop over stdio transport.
//!
//! Reads JSON-RPC requests line by line, dispatches them via
//! `McpHandler`, and writes exactly one response per non-blank line.
//! Malformed lines are answered with a parse or invalid-request error;
//! only transport failures end the loop early.

use tracing::{debug, error, info, warn};

use crewsync_mcp::{JsonRpcOutput, McpHandler};

use crate::error::TransportError;
use crate::transport::StdioTransport;

/// Sent when a response cannot be serialized, so the request still gets
/// its one line.
const SERIALIZE_FALLBACK: &str =
    r#"{"jsonrpc":"2.0","id":null,"error":{"code":-32603,"message":"failed to serialize response"}}"#;

/// MCP server that reads from a transport and dispatches to a handler.
pub struct McpServer<R, W> {
    transport: StdioTransport<R, W>,
    handler: McpHandler,
}

impl<R, W> McpServer<R, W>
where
    R: tokio::io::AsyncRead + Unpin,
    W: tokio::io::AsyncWrite + Unpin,
{
    /// Creates a new server with the given transport and handler.
    pub fn new(transport: StdioTransport<R, W>, handler: McpHandler) -> Self {
        Self { transport, handler }
    }

    /// Runs the server loop until the input is exhausted.
    pub async fn run(&mut self) -> Result<(), TransportError> {
        info!("MCP server starting on stdio");

        loop {
            // 1. Read next line
            let line = match self.transport.read_line().await? {
                Some(line) if line.is_empty() => continue,
                Some(line) => line,
                None => {
                    info!("stdin closed, shutting down");
                    return Ok(());
                }
            };

            // 2. Parse + dispatch; failures become error responses
            let output = self.handler.handle_line(&line);
            match &output {
                JsonRpcOutput::Success(_) => debug!(id = %output.id(), "request handled"),
                JsonRpcOutput::Error(e) => warn!(
                    id = %e.id,
                    code = e.error.code,
                    message = %e.error.message,
                    "request failed"
                ),
            }

            // 3. Respond
            self.write_output(&output).await?;
        }
    }

    /// The handler, for inspecting server state after a run.
    pub fn handler(&self) -> &McpHandler {
        &self.handler
    }

    /// Serializes and writes a JSON-RPC output to the transport.
    async fn write_output(&mut self, output: &JsonRpcOutput) -> Result<(), TransportError> {
        match output.to_json() {
            Ok(json) => self.transport.write_line(&json).await,
            Err(e) => {
                error!(error = %e, "failed to serialize response");
                self.transport.write_line(SERIALIZE_FALLBACK).await
            }
        }
    }
}
