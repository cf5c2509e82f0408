//! Tool argument declarations.

use serde::{Deserialize, Serialize};

/// MCP argument definition for a tool.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolArgument {
    /// Argument name.
    pub name: String,
    /// JSON Schema type (string, array, etc.).
    #[serde(rename = "type")]
    pub arg_type: String,
    /// Human-readable description.
    pub description: String,
    /// Whether this argument is required.
    #[serde(default)]
    pub required: bool,
    /// Item type for `array` arguments.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub items: Option<String>,
    /// Upper bound on the number of items for `array` arguments.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_items: Option<usize>,
    /// Allowed values, if the argument is an enumeration.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub allowed: Vec<String>,
}

impl ToolArgument {
    /// A string argument.
    pub fn string(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            arg_type: "string".to_string(),
            description: description.into(),
            required: false,
            items: None,
            max_items: None,
            allowed: Vec::new(),
        }
    }

    /// An array-of-strings argument.
    pub fn string_array(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            arg_type: "array".to_string(),
            items: Some("string".to_string()),
            ..Self::string(name, description)
        }
    }

    /// Marks the argument as required.
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Caps the number of array items.
    pub fn with_max_items(mut self, max: usize) -> Self {
        self.max_items = Some(max);
        self
    }

    /// Restricts the argument to a fixed set of values.
    pub fn one_of<I, S>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.allowed = values.into_iter().map(Into::into).collect();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builders_compose() {
        let arg = ToolArgument::string_array("crew_members", "who")
            .with_max_items(10)
            .required();
        assert_eq!(arg.arg_type, "array");
        assert_eq!(arg.items.as_deref(), Some("string"));
        assert_eq!(arg.max_items, Some(10));
        assert!(arg.required);
    }

    #[test]
    fn one_of_collects_values() {
        let arg = ToolArgument::string("priority", "level").one_of(["low", "high"]);
        assert_eq!(arg.allowed, vec!["low".to_string(), "high".to_string()]);
        assert!(!arg.required);
    }
}
