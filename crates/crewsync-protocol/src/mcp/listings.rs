//! `prompts/list` and `resources/list` results.
//!
//! The server defines no prompts or resources. Hosts still probe both
//! namespaces after `initialize`, so each gets a well-formed empty list;
//! entries stay untyped JSON.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Response for `prompts/list`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PromptsListResult {
    pub prompts: Vec<Value>,
}

/// Response for `resources/list`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ResourcesListResult {
    pub resources: Vec<Value>,
}
