//! # crewsync-registry
//!
//! In-memory tool registry: an insertion-ordered table from tool name to
//! descriptor and handler, plus the crew roster the built-in tools act on.

mod builtin;
pub mod error;
pub mod registry;
pub mod roster;
pub mod tool;

pub use error::RegistryError;
pub use registry::{ToolRegistry, DEFAULT_MAX_CREW_SIZE};
pub use roster::CrewRoster;
pub use tool::{ToolDescriptor, ToolHandler};
