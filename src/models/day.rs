//! Candidate day model.
//!
//! A day is a calendar slot on which the course could be taught. The `id`
//! is the identity used for ordering and duplicate detection; the name is
//! for display only.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A candidate day for offering the course.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Day {
    /// Identity used for ordering and duplicate detection.
    pub id: u32,
    /// Human-readable label (e.g., "Fecha 3", "2024-05-14").
    pub name: String,
}

impl Day {
    /// Creates a new day.
    pub fn new(id: u32, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}
