//! Search outcome.

use serde::{Deserialize, Serialize};

use super::SearchStats;
use crate::models::{CandidateState, Day};

/// Result of one search run.
///
/// Infeasibility is an ordinary outcome, not an error: callers decide how
/// to report it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SearchOutcome {
    /// A set of days covering every person within the limit.
    Found {
        /// Chosen days, in the order the search appended them.
        days: Vec<Day>,
        /// The winning state (day positions in the input list).
        state: CandidateState,
        /// Run statistics.
        stats: SearchStats,
    },
    /// No set of days within the limit covers every person.
    Infeasible {
        /// Run statistics.
        stats: SearchStats,
    },
}

impl SearchOutcome {
    /// Whether a solution was found.
    pub fn is_feasible(&self) -> bool {
        matches!(self, SearchOutcome::Found { .. })
    }

    /// Chosen days; empty when infeasible.
    pub fn days(&self) -> &[Day] {
        match self {
            SearchOutcome::Found { days, .. } => days,
            SearchOutcome::Infeasible { .. } => &[],
        }
    }

    /// Consumes the outcome, returning the chosen days (empty when infeasible).
    pub fn into_days(self) -> Vec<Day> {
        match self {
            SearchOutcome::Found { days, .. } => days,
            SearchOutcome::Infeasible { .. } => Vec::new(),
        }
    }

    /// IDs of the chosen days.
    pub fn day_ids(&self) -> Vec<u32> {
        self.days().iter().map(|d| d.id).collect()
    }

    /// The winning state, if any.
    pub fn state(&self) -> Option<&CandidateState> {
        match self {
            SearchOutcome::Found { state, .. } => Some(state),
            SearchOutcome::Infeasible { .. } => None,
        }
    }

    /// Run statistics.
    pub fn stats(&self) -> &SearchStats {
        match self {
            SearchOutcome::Found { stats, .. } | SearchOutcome::Infeasible { stats } => stats,
        }
    }
}
