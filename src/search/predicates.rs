//! Coverage, viability and solution predicates, plus successor generation.
//!
//! # Viability
//! A state is viable when it repeats no day and covers no more people than
//! exist. The second clause always holds for well-formed input; it is kept
//! as an invariant check.
//!
//! # Solution
//! A viable state is a solution when it covers every person and holds at
//! most `limit` days.

use std::collections::HashSet;

use super::SequenceRule;
use crate::models::{AttendanceMatrix, CandidateState, Day, Person};

/// Number of distinct people who can attend at least one day of `state`.
///
/// A person reachable through several days is counted once.
pub fn covered_people_count(state: &CandidateState, attendance: &AttendanceMatrix) -> usize {
    let mut covered = HashSet::new();
    for &day in state.positions() {
        covered.extend(attendance.attendees(day));
    }
    covered.len()
}

/// Whether `state` chooses some day twice under `rule`.
///
/// Positions outside `days` are treated as repeats, since they cannot name
/// a real day.
pub fn has_repeated_day(state: &CandidateState, days: &[Day], rule: SequenceRule) -> bool {
    let ids: Option<Vec<u32>> = state
        .positions()
        .iter()
        .map(|&p| days.get(p).map(|d| d.id))
        .collect();
    let Some(ids) = ids else {
        return true;
    };

    match rule {
        SequenceRule::Ascending => ids.windows(2).any(|w| w[0] >= w[1]),
        SequenceRule::Distinct => {
            let mut seen = HashSet::with_capacity(ids.len());
            ids.iter().any(|id| !seen.insert(*id))
        }
    }
}

/// Read-only view of one problem instance, used to evaluate states.
#[derive(Debug, Clone, Copy)]
pub struct StateSpace<'a> {
    days: &'a [Day],
    people: &'a [Person],
    attendance: &'a AttendanceMatrix,
    limit: usize,
    rule: SequenceRule,
}

impl<'a> StateSpace<'a> {
    /// Creates a view over a problem instance.
    pub fn new(
        days: &'a [Day],
        people: &'a [Person],
        attendance: &'a AttendanceMatrix,
        limit: usize,
        rule: SequenceRule,
    ) -> Self {
        Self {
            days,
            people,
            attendance,
            limit,
            rule,
        }
    }

    /// Candidate days.
    pub fn days(&self) -> &'a [Day] {
        self.days
    }

    /// Day limit.
    pub fn limit(&self) -> usize {
        self.limit
    }

    /// Number of people covered by `state`.
    pub fn coverage(&self, state: &CandidateState) -> usize {
        covered_people_count(state, self.attendance)
    }

    /// Whether `state` may be kept and expanded.
    pub fn is_viable(&self, state: &CandidateState) -> bool {
        !has_repeated_day(state, self.days, self.rule) && self.coverage(state) <= self.people.len()
    }

    /// Whether `state` covers everyone within the day limit.
    ///
    /// Only meaningful for viable states.
    pub fn is_solution(&self, state: &CandidateState) -> bool {
        self.coverage(state) == self.people.len() && state.len() <= self.limit
    }

    /// One successor per input day, in input order.
    ///
    /// Successors may repeat a day; the viability check filters them.
    pub fn successors(&self, state: &CandidateState) -> Vec<CandidateState> {
        (0..self.days.len()).map(|p| state.extended(p)).collect()
    }
}
