//! Interested person model.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A prospective attendee of the course.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Person {
    /// Unique person identifier.
    pub id: u32,
    /// Human-readable name.
    pub name: String,
}

impl Person {
    /// Creates a new person.
    pub fn new(id: u32, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

impl fmt::Display for Person {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}
