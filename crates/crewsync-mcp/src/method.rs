//! The set of methods this server answers.

use std::fmt;

use crewsync_protocol::methods;

/// A routed JSON-RPC method.
///
/// Every method string is classified here, once; anything unrecognized
/// becomes [`Method::Unknown`] and is answered with `METHOD_NOT_FOUND`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Method {
    Initialize,
    Ping,
    ToolsList,
    ToolsCall,
    PromptsList,
    ResourcesList,
    Unknown(String),
}

impl Method {
    /// Classifies a method name (exact, case-sensitive).
    pub fn parse(name: &str) -> Self {
        match name {
            methods::INITIALIZE => Method::Initialize,
            methods::PING => Method::Ping,
            methods::TOOLS_LIST => Method::ToolsList,
            methods::TOOLS_CALL => Method::ToolsCall,
            methods::PROMPTS_LIST => Method::PromptsList,
            methods::RESOURCES_LIST => Method::ResourcesList,
            other => Method::Unknown(other.to_string()),
        }
    }

    /// The wire name of the method.
    pub fn as_str(&self) -> &str {
        match self {
            Method::Initialize => methods::INITIALIZE,
            Method::Ping => methods::PING,
            Method::ToolsList => methods::TOOLS_LIST,
            Method::ToolsCall => methods::TOOLS_CALL,
            Method::PromptsList => methods::PROMPTS_LIST,
            Method::ResourcesList => methods::RESOURCES_LIST,
            Method::Unknown(name) => name,
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
