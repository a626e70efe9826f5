//! Search configuration.
//!
//! Controls how far the frontier is expanded, which day sequences count as
//! repeat-free, how ties between equally short solutions are broken, and the
//! state budget that stops a runaway search.

use serde::{Deserialize, Serialize};

use crate::error::SearchError;

/// Default number of states the engine may pop before giving up.
pub const DEFAULT_MAX_STATES: usize = 5_000_000;

/// How deep the frontier is expanded, relative to the day limit.
///
/// The bound only changes how many states are explored: no state longer
/// than the limit can be a solution, so every bound yields the same answer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum DepthBound {
    /// Stop expanding once a state holds `limit` days.
    #[default]
    AtLimit,
    /// Expand one level past the limit; states of `limit + 1` days are
    /// still evaluated but not expanded further.
    LimitPlusOne,
    /// Expand every viable state. Terminates because a viable state never
    /// repeats a day, so it holds at most as many days as the input.
    Unbounded,
}

impl DepthBound {
    /// Whether a viable state with `len` days may spawn successors.
    #[inline]
    pub fn allows_expansion(self, len: usize, limit: usize) -> bool {
        match self {
            DepthBound::AtLimit => len < limit,
            DepthBound::LimitPlusOne => len <= limit,
            DepthBound::Unbounded => true,
        }
    }
}

/// Which day sequences are considered free of repeats.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SequenceRule {
    /// Day IDs must strictly increase along the sequence. Each set of days
    /// is visited exactly once, in its ascending order.
    #[default]
    Ascending,
    /// Any order is accepted as long as no day ID appears twice. Every
    /// permutation of a set is visited.
    Distinct,
}

/// Which solution wins among several with the minimum day count.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TieBreak {
    /// The last one discovered (a candidate replaces the incumbent when its
    /// size is less than or equal).
    #[default]
    Last,
    /// The first one discovered (strictly smaller replaces).
    First,
}

impl TieBreak {
    /// Whether a candidate of `candidate_len` days replaces an incumbent of
    /// `incumbent_len` days.
    #[inline]
    pub fn replaces(self, candidate_len: usize, incumbent_len: usize) -> bool {
        match self {
            TieBreak::Last => candidate_len <= incumbent_len,
            TieBreak::First => candidate_len < incumbent_len,
        }
    }
}

/// Configuration for [`super::CoverSearch`].
///
/// # Example
/// ```
/// use course_days::search::{DepthBound, SearchConfig, SequenceRule};
///
/// let config = SearchConfig::default()
///     .with_depth_bound(DepthBound::Unbounded)
///     .with_sequence_rule(SequenceRule::Distinct)
///     .with_max_states(Some(100_000));
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Frontier expansion depth.
    pub depth_bound: DepthBound,
    /// Repeat detection rule used by the viability check.
    pub sequence_rule: SequenceRule,
    /// Selection among equally short solutions.
    pub tie_break: TieBreak,
    /// Maximum states popped from the frontier. `None` = no budget.
    pub max_states: Option<usize>,
}

impl SearchConfig {
    /// Sets the depth bound.
    pub fn with_depth_bound(mut self, depth_bound: DepthBound) -> Self {
        self.depth_bound = depth_bound;
        self
    }

    /// Sets the sequence rule.
    pub fn with_sequence_rule(mut self, sequence_rule: SequenceRule) -> Self {
        self.sequence_rule = sequence_rule;
        self
    }

    /// Sets the tie-break rule.
    pub fn with_tie_break(mut self, tie_break: TieBreak) -> Self {
        self.tie_break = tie_break;
        self
    }

    /// Sets the state budget.
    pub fn with_max_states(mut self, max_states: Option<usize>) -> Self {
        self.max_states = max_states;
        self
    }

    /// Rejects configurations that could never finish a search.
    pub fn validate(&self) -> Result<(), SearchError> {
        if self.max_states == Some(0) {
            return Err(SearchError::InvalidConfig(
                "max_states must be at least 1".into(),
            ));
        }
        Ok(())
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            depth_bound: DepthBound::default(),
            sequence_rule: SequenceRule::default(),
            tie_break: TieBreak::default(),
            max_states: Some(DEFAULT_MAX_STATES),
        }
    }
}
