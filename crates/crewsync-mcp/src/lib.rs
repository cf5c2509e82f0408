//! # crewsync-mcp
//!
//! MCP method dispatch handler (APPLICATION layer).
//!
//! Provides `McpHandler`, `Method` and `JsonRpcOutput` for routing
//! JSON-RPC requests to the appropriate MCP method implementations.

mod dispatch;
pub mod handler;
pub mod method;

pub use handler::{JsonRpcOutput, McpHandler, DEFAULT_SERVER_NAME};
pub use method::Method;
