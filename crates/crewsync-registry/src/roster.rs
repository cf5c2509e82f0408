//! Bounded, insertion-ordered crew roster.

use crewsync_types::CrewMember;

use crate::error::RegistryError;

/// The crew members known to the server.
///
/// `max_size` only gates [`CrewRoster::push`]; seeding through
/// [`CrewRoster::seeded`] is unconditional.
#[derive(Debug, Clone)]
pub struct CrewRoster {
    members: Vec<CrewMember>,
    max_size: usize,
}

impl CrewRoster {
    /// Creates an empty roster.
    pub fn new(max_size: usize) -> Self {
        Self {
            members: Vec::new(),
            max_size,
        }
    }

    /// Creates a roster holding `members`, regardless of `max_size`.
    pub fn seeded(members: Vec<CrewMember>, max_size: usize) -> Self {
        Self { members, max_size }
    }

    /// Appends a member, failing when the roster is full.
    pub fn push(&mut self, member: CrewMember) -> Result<(), RegistryError> {
        if self.is_full() {
            return Err(RegistryError::CapacityExceeded {
                name: member.name,
                max: self.max_size,
            });
        }
        self.members.push(member);
        Ok(())
    }

    /// Looks up a member by exact name.
    pub fn get(&self, name: &str) -> Option<&CrewMember> {
        self.members.iter().find(|m| m.name == name)
    }

    /// Member names in insertion order.
    pub fn names(&self) -> Vec<String> {
        self.members.iter().map(|m| m.name.clone()).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &CrewMember> {
        self.members.iter()
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn max_size(&self) -> usize {
        self.max_size
    }

    pub fn is_full(&self) -> bool {
        self.members.len() >= self.max_size
    }
}
