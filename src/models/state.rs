//! Candidate state model.
//!
//! A candidate state is one hypothesis for the full schedule: an ordered
//! sequence of chosen days. Days are stored as positions into the input day
//! list, which is also how the attendance matrix is addressed.

use serde::{Deserialize, Serialize};

use super::Day;

/// An ordered sequence of chosen days, by position in the input day list.
///
/// States are never mutated after construction. [`CandidateState::extended`]
/// copies the parent's sequence, so two states never share storage.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CandidateState {
    positions: Vec<usize>,
}

impl CandidateState {
    /// The root state: no days chosen.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Creates a state from explicit day positions.
    pub fn from_positions(positions: Vec<usize>) -> Self {
        Self { positions }
    }

    /// Returns a new state with `position` appended.
    pub fn extended(&self, position: usize) -> Self {
        let mut positions = Vec::with_capacity(self.positions.len() + 1);
        positions.extend_from_slice(&self.positions);
        positions.push(position);
        Self { positions }
    }

    /// Day positions in construction order.
    pub fn positions(&self) -> &[usize] {
        &self.positions
    }

    /// Number of days in the state.
    #[inline]
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    /// Whether no day has been chosen.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Resolves positions against the input day list.
    ///
    /// Positions outside `days` are skipped.
    pub fn resolve<'a>(&self, days: &'a [Day]) -> Vec<&'a Day> {
        self.positions.iter().filter_map(|&p| days.get(p)).collect()
    }
}
