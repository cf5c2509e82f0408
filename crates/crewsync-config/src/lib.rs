//! # crewsync-config
//!
//! Configuration management for the crew sync server.
//! Supports layered config: defaults -> file -> env vars.

pub mod loader;
pub mod schema;

pub use loader::{extract, file_layers, load_config, ConfigError, LEGACY_MAX_CREW_SIZE_ENV};
pub use schema::CrewSyncConfig;
