//! Crew member and priority types.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A named participant with a free-form role description.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CrewMember {
    /// Member name, also used as its tool name.
    pub name: String,
    /// Role and expertise description.
    pub role: String,
}

impl CrewMember {
    /// Creates a new crew member.
    pub fn new(name: impl Into<String>, role: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            role: role.into(),
        }
    }
}

/// Task priority for `sync_crew`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
    Urgent,
}

impl Priority {
    /// All priorities, lowest first.
    pub const ALL: [Priority; 4] = [
        Priority::Low,
        Priority::Medium,
        Priority::High,
        Priority::Urgent,
    ];

    /// Returns the wire name (`low`, `medium`, ...).
    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::Low => "low",
            Priority::Medium => "medium",
            Priority::High => "high",
            Priority::Urgent => "urgent",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The crew every server starts with.
pub fn default_crew() -> Vec<CrewMember> {
    vec![
        CrewMember::new(
            "Taylor",
            "🎯 Team Coordinator - Strategic planning and project coordination",
        ),
        CrewMember::new(
            "Jordan",
            "⚡ Tech Engineer - Technical implementation and DevOps",
        ),
        CrewMember::new(
            "Riley",
            "💡 Product Strategist - User experience design and feature planning",
        ),
        CrewMember::new(
            "Casey",
            "📊 Data Specialist - Analytics, insights, and ML operations",
        ),
        CrewMember::new(
            "Morgan",
            "🏗️ System Architect - System design and scalability",
        ),
        CrewMember::new("Avery", "🎨 Design Lead - Interface design and prototyping"),
    ]
}
