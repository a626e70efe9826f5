//! Search statistics.
//!
//! | Counter | Definition |
//! |---------|-----------|
//! | generated | States pushed onto the frontier (root included) |
//! | explored | States popped and evaluated |
//! | pruned | Popped states rejected by the viability check |
//! | depth_cut | Viable states not expanded because of the depth bound |
//! | solutions | Solution states recorded |
//! | peak_frontier | Largest frontier size observed |
//! | deepest_level | Largest day count among explored states |

use serde::{Deserialize, Serialize};

/// Counters collected during one search run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchStats {
    /// States pushed onto the frontier.
    pub generated: usize,
    /// States popped and evaluated.
    pub explored: usize,
    /// Non-viable states discarded.
    pub pruned: usize,
    /// Viable states left unexpanded by the depth bound.
    pub depth_cut: usize,
    /// Solution states recorded.
    pub solutions: usize,
    /// Largest frontier size.
    pub peak_frontier: usize,
    /// Largest day count among explored states.
    pub deepest_level: usize,
}

impl SearchStats {
    /// Fraction of explored states that were pruned (0.0..1.0).
    pub fn prune_rate(&self) -> f64 {
        if self.explored == 0 {
            0.0
        } else {
            self.pruned as f64 / self.explored as f64
        }
    }
}
