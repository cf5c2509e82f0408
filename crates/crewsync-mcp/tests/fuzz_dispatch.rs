//! Property-based tests for the dispatcher.

use proptest::prelude::*;
use serde_json::{json, Value};

use crewsync_mcp::McpHandler;

proptest! {
    /// Any line yields exactly one well-formed response object.
    #[test]
    fn every_line_gets_one_response(input in "\\PC{1,256}") {
        let mut handler = McpHandler::default();
        let out = handler.handle_line(&input).to_json().expect("ser");
        prop_assert!(!out.contains('\n'));
        let parsed: Value = serde_json::from_str(&out).expect("valid json");
        prop_assert_eq!(&parsed["jsonrpc"], "2.0");
        prop_assert!(parsed.get("result").is_some() ^ parsed.get("error").is_some());
    }

    /// Known-tool calls echo the request id exactly.
    #[test]
    fn tool_call_echoes_id(id in any::<i64>(), text in "\\PC{0,64}") {
        let mut handler = McpHandler::default();
        let raw = json!({
            "jsonrpc": "2.0",
            "id": id,
            "method": "tools/call",
            "params": {"name": "echo", "arguments": {"text": text}},
        })
        .to_string();
        let parsed: Value =
            serde_json::from_str(&handler.handle_line(&raw).to_json().expect("ser")).expect("de");
        prop_assert_eq!(&parsed["id"], &json!(id));
        prop_assert!(parsed["result"]["content"][0]["text"]
            .as_str()
            .expect("text")
            .ends_with(text.as_str()));
    }

    /// Unknown tool names always produce an error and no result.
    #[test]
    fn unknown_tool_always_errors(name in "[a-z_]{1,24}") {
        let mut handler = McpHandler::default();
        prop_assume!(!handler.registry().contains(&name));
        let raw = json!({
            "jsonrpc": "2.0",
            "id": 1,
            "method": "tools/call",
            "params": {"name": name},
        })
        .to_string();
        let parsed: Value =
            serde_json::from_str(&handler.handle_line(&raw).to_json().expect("ser")).expect("de");
        prop_assert!(parsed.get("error").is_some());
        prop_assert!(parsed.get("result").is_none());
    }
}
