//! # crewsync-types
//!
//! Domain types for the crew sync server.
//! This crate contains pure data types with zero external dependencies
//! (except serde for serialization).

pub mod crew;
pub mod error;
pub mod tool;

// Re-exports for convenience.
pub use crew::{default_crew, CrewMember, Priority};
pub use error::{CrewError, DiagnosticError, ErrorKind};
pub use tool::ToolArgument;
