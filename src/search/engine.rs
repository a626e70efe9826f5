//! Breadth-first covering search.
//!
//! # Algorithm
//!
//! 1. Seed a FIFO frontier with the empty state.
//! 2. Pop a state. Discard it if it is not viable (repeats a day).
//! 3. Record it if it is a solution (covers everyone within the limit).
//! 4. Unless the depth bound says otherwise, push one successor per input
//!    day, in input order.
//! 5. Once the frontier is empty, the smallest recorded solution wins;
//!    ties follow the configured [`TieBreak`].
//!
//! Level `k` (states of `k` days) is fully processed before level `k + 1`.
//!
//! # Complexity
//! O(C(n, L) · n · m) with the ascending rule, where n = days, m = people,
//! L = day limit. The distinct rule visits every permutation instead.
//!
//! # Reference
//! Russell & Norvig (2020), "Artificial Intelligence: A Modern Approach", Ch. 3.4.1

use std::collections::VecDeque;

use tracing::{debug, info, trace, warn};

use super::{SearchConfig, SearchOutcome, SearchStats, StateSpace, TieBreak};
use crate::error::SearchError;
use crate::models::{AttendanceMatrix, CandidateState, CoverageProblem, Day, Person};
use crate::validation::validate_input;

/// Exhaustive breadth-first search for the fewest covering days.
///
/// # Example
///
/// ```
/// use course_days::models::{AttendanceMatrix, CoverageProblem, Day, Person};
/// use course_days::search::CoverSearch;
///
/// let problem = CoverageProblem::new(
///     vec![Day::new(0, "Mon"), Day::new(1, "Tue"), Day::new(2, "Wed")],
///     vec![Person::new(0, "a"), Person::new(1, "b")],
/// )
/// .with_limit(2)
/// .with_attendance(
///     AttendanceMatrix::new(3, 2)
///         .with_attendance(0, 0)
///         .with_attendance(2, 1),
/// );
///
/// let outcome = CoverSearch::new().solve(&problem).unwrap();
/// assert_eq!(outcome.day_ids(), vec![0, 2]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct CoverSearch {
    config: SearchConfig,
}

impl CoverSearch {
    /// Creates a search with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a search with the given configuration.
    pub fn with_config(config: SearchConfig) -> Self {
        Self { config }
    }

    /// Active configuration.
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Solves a bundled problem instance.
    pub fn solve(&self, problem: &CoverageProblem) -> Result<SearchOutcome, SearchError> {
        self.find_optimal_days(
            &problem.days,
            &problem.people,
            problem.limit,
            &problem.attendance,
        )
    }

    /// Finds the fewest days (at most `limit`) that let every person attend.
    ///
    /// Returns [`SearchOutcome::Infeasible`] when no such set exists, and an
    /// error for malformed input or an exhausted state budget.
    pub fn find_optimal_days(
        &self,
        days: &[Day],
        people: &[Person],
        limit: usize,
        attendance: &AttendanceMatrix,
    ) -> Result<SearchOutcome, SearchError> {
        self.config.validate()?;
        validate_input(days, people, attendance)?;

        let space = StateSpace::new(days, people, attendance, limit, self.config.sequence_rule);
        info!(
            days = days.len(),
            people = people.len(),
            limit,
            depth_bound = ?self.config.depth_bound,
            sequence_rule = ?self.config.sequence_rule,
            "starting covering search"
        );

        let tie_break = self.config.tie_break;
        let mut best: Option<CandidateState> = None;
        let stats = self.explore(&space, |state| {
            let replace = best
                .as_ref()
                .map_or(true, |incumbent| tie_break.replaces(state.len(), incumbent.len()));
            if replace {
                best = Some(state);
            }
        })?;

        match best {
            Some(state) => {
                let chosen: Vec<Day> = state.resolve(days).into_iter().cloned().collect();
                let chosen_ids: Vec<u32> = chosen.iter().map(|d| d.id).collect();
                info!(
                    chosen = ?chosen_ids,
                    explored = stats.explored,
                    solutions = stats.solutions,
                    "covering search finished"
                );
                Ok(SearchOutcome::Found {
                    days: chosen,
                    state,
                    stats,
                })
            }
            None => {
                warn!(
                    limit,
                    explored = stats.explored,
                    "no set of days lets every person attend within the limit"
                );
                Ok(SearchOutcome::Infeasible { stats })
            }
        }
    }

    /// Returns every solution state in discovery order.
    pub fn enumerate_solutions(
        &self,
        problem: &CoverageProblem,
    ) -> Result<Vec<CandidateState>, SearchError> {
        self.config.validate()?;
        validate_input(&problem.days, &problem.people, &problem.attendance)?;

        let space = StateSpace::new(
            &problem.days,
            &problem.people,
            &problem.attendance,
            problem.limit,
            self.config.sequence_rule,
        );
        let mut solutions = Vec::new();
        let stats = self.explore(&space, |state| solutions.push(state))?;
        debug!(solutions = stats.solutions, explored = stats.explored, "enumeration finished");
        Ok(solutions)
    }

    /// Drains the frontier, handing each solution state to `on_solution`.
    fn explore<F>(&self, space: &StateSpace<'_>, mut on_solution: F) -> Result<SearchStats, SearchError>
    where
        F: FnMut(CandidateState),
    {
        let mut stats = SearchStats {
            generated: 1,
            peak_frontier: 1,
            ..Default::default()
        };
        let mut frontier = VecDeque::from([CandidateState::empty()]);
        let mut level = 0;

        while let Some(state) = frontier.pop_front() {
            if let Some(budget) = self.config.max_states {
                if stats.explored >= budget {
                    warn!(budget, frontier = frontier.len() + 1, "state budget exhausted");
                    return Err(SearchError::StateBudgetExhausted {
                        explored: stats.explored,
                        budget,
                    });
                }
            }
            stats.explored += 1;

            if state.len() > level {
                level = state.len();
                stats.deepest_level = level;
                debug!(
                    level,
                    frontier = frontier.len() + 1,
                    explored = stats.explored,
                    solutions = stats.solutions,
                    "entering level"
                );
            }

            if !space.is_viable(&state) {
                stats.pruned += 1;
                continue;
            }

            let solved = space.is_solution(&state);

            if self
                .config
                .depth_bound
                .allows_expansion(state.len(), space.limit())
            {
                let successors = space.successors(&state);
                stats.generated += successors.len();
                frontier.extend(successors);
                stats.peak_frontier = stats.peak_frontier.max(frontier.len());
            } else {
                stats.depth_cut += 1;
            }

            if solved {
                stats.solutions += 1;
                trace!(positions = ?state.positions(), "solution recorded");
                on_solution(state);
            }
        }

        Ok(stats)
    }
}

/// Picks the winner among solutions listed in discovery order.
///
/// Scans once, keeping an incumbent and replacing it according to
/// `tie_break`. Returns `None` for an empty list.
pub fn select_best(solutions: &[CandidateState], tie_break: TieBreak) -> Option<&CandidateState> {
    let mut best: Option<&CandidateState> = None;
    for state in solutions {
        let replace = best.map_or(true, |incumbent| tie_break.replaces(state.len(), incumbent.len()));
        if replace {
            best = Some(state);
        }
    }
    best
}

/// Finds the fewest days (at most `limit`) that let every person attend,
/// using the default configuration.
pub fn find_optimal_days(
    days: &[Day],
    people: &[Person],
    limit: usize,
    attendance: &AttendanceMatrix,
) -> Result<SearchOutcome, SearchError> {
    CoverSearch::new().find_optimal_days(days, people, limit, attendance)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::{DepthBound, SequenceRule};
    use crate::validation::ValidationErrorKind;

    fn make_days(n: u32) -> Vec<Day> {
        (0..n).map(|i| Day::new(i, format!("d{i}"))).collect()
    }

    fn make_people(n: u32) -> Vec<Person> {
        (0..n).map(|i| Person::new(i, format!("p{i}"))).collect()
    }

    // d0: p0   d1: p1   d2: p0
    fn tie_instance() -> (Vec<Day>, Vec<Person>, AttendanceMatrix) {
        let m = AttendanceMatrix::new(3, 2)
            .with_attendance(0, 0)
            .with_attendance(1, 1)
            .with_attendance(2, 0);
        (make_days(3), make_people(2), m)
    }

    #[test]
    fn test_single_day_covers_all() {
        let days = make_days(3);
        let people = make_people(2);
        let m = AttendanceMatrix::new(3, 2)
            .with_attendance(0, 0)
            .with_attendance(1, 0)
            .with_attendance(1, 1);

        let outcome = find_optimal_days(&days, &people, 3, &m).unwrap();
        assert_eq!(outcome.day_ids(), vec![1]);
    }

    #[test]
    fn test_limit_zero_is_infeasible() {
        let days = make_days(2);
        let people = make_people(1);
        let m = AttendanceMatrix::new(2, 1).with_attendance(0, 0);

        let outcome = find_optimal_days(&days, &people, 0, &m).unwrap();
        assert!(!outcome.is_feasible());
        assert!(outcome.days().is_empty());
        assert_eq!(outcome.stats().explored, 1);
    }

    #[test]
    fn test_no_people_returns_empty_solution() {
        let days = make_days(3);
        let m = AttendanceMatrix::new(3, 0);

        let outcome = find_optimal_days(&days, &[], 2, &m).unwrap();
        assert!(outcome.is_feasible());
        assert!(outcome.days().is_empty());
    }

    #[test]
    fn test_no_days_no_people() {
        let outcome = find_optimal_days(&[], &[], 0, &AttendanceMatrix::default()).unwrap();
        assert!(outcome.is_feasible());
        assert!(outcome.days().is_empty());
    }

    #[test]
    fn test_all_false_is_infeasible() {
        let days = make_days(4);
        let people = make_people(3);
        let m = AttendanceMatrix::new(4, 3);

        for limit in [0, 1, 4, 10] {
            let outcome = find_optimal_days(&days, &people, limit, &m).unwrap();
            assert!(!outcome.is_feasible(), "limit {limit}");
        }
    }

    #[test]
    fn test_limit_too_small() {
        // Needs both d0 and d1, but only one day allowed.
        let (days, people, m) = tie_instance();
        let outcome = find_optimal_days(&days, &people, 1, &m).unwrap();
        assert!(!outcome.is_feasible());
    }

    #[test]
    fn test_tie_break_last_ascending() {
        let (days, people, m) = tie_instance();
        let outcome = find_optimal_days(&days, &people, 2, &m).unwrap();
        // Solutions in discovery order: [0,1], [1,2]
        assert_eq!(outcome.day_ids(), vec![1, 2]);
    }

    #[test]
    fn test_tie_break_first_ascending() {
        let (days, people, m) = tie_instance();
        let search =
            CoverSearch::with_config(SearchConfig::default().with_tie_break(TieBreak::First));
        let outcome = search.find_optimal_days(&days, &people, 2, &m).unwrap();
        assert_eq!(outcome.day_ids(), vec![0, 1]);
    }

    #[test]
    fn test_tie_break_last_distinct() {
        let (days, people, m) = tie_instance();
        let search = CoverSearch::with_config(
            SearchConfig::default().with_sequence_rule(SequenceRule::Distinct),
        );
        let outcome = search.find_optimal_days(&days, &people, 2, &m).unwrap();
        // Solutions in discovery order: [0,1], [1,0], [1,2], [2,1]
        assert_eq!(outcome.day_ids(), vec![2, 1]);
    }

    #[test]
    fn test_enumerate_solutions_order() {
        let (days, people, m) = tie_instance();
        let problem = CoverageProblem::new(days, people)
            .with_limit(3)
            .with_attendance(m);

        let solutions = CoverSearch::new().enumerate_solutions(&problem).unwrap();
        let positions: Vec<&[usize]> = solutions.iter().map(|s| s.positions()).collect();
        assert_eq!(positions, vec![&[0, 1][..], &[1, 2][..], &[0, 1, 2][..]]);
    }

    #[test]
    fn test_shorter_solution_wins_over_later_longer() {
        let (days, people, m) = tie_instance();
        let problem = CoverageProblem::new(days, people)
            .with_limit(3)
            .with_attendance(m);

        let outcome = CoverSearch::new().solve(&problem).unwrap();
        assert_eq!(outcome.day_ids(), vec![1, 2]);
    }

    #[test]
    fn test_select_best() {
        let solutions = vec![
            CandidateState::from_positions(vec![0, 1, 2]),
            CandidateState::from_positions(vec![0, 3]),
            CandidateState::from_positions(vec![1, 2, 3]),
            CandidateState::from_positions(vec![2, 3]),
        ];
        assert_eq!(
            select_best(&solutions, TieBreak::Last).map(|s| s.positions()),
            Some(&[2, 3][..])
        );
        assert_eq!(
            select_best(&solutions, TieBreak::First).map(|s| s.positions()),
            Some(&[0, 3][..])
        );
        assert!(select_best(&[], TieBreak::Last).is_none());
    }

    #[test]
    fn test_depth_bounds_agree() {
        let (days, people, m) = tie_instance();
        let mut explored = Vec::new();
        for bound in [
            DepthBound::AtLimit,
            DepthBound::LimitPlusOne,
            DepthBound::Unbounded,
        ] {
            let search =
                CoverSearch::with_config(SearchConfig::default().with_depth_bound(bound));
            let outcome = search.find_optimal_days(&days, &people, 2, &m).unwrap();
            assert_eq!(outcome.day_ids(), vec![1, 2], "{bound:?}");
            explored.push(outcome.stats().explored);
        }
        assert!(explored[0] <= explored[1]);
        assert!(explored[1] <= explored[2]);
    }

    #[test]
    fn test_unbounded_terminates_distinct() {
        // 4 days, nobody ever covered: every permutation is explored.
        let days = make_days(4);
        let people = make_people(1);
        let m = AttendanceMatrix::new(4, 1);
        let search = CoverSearch::with_config(
            SearchConfig::default()
                .with_depth_bound(DepthBound::Unbounded)
                .with_sequence_rule(SequenceRule::Distinct),
        );

        let outcome = search.find_optimal_days(&days, &people, 0, &m).unwrap();
        let stats = outcome.stats();
        // Viable states: 1 + 4 + 12 + 24 + 24 = 65, each spawning 4.
        assert_eq!(stats.generated, 1 + 65 * 4);
        assert_eq!(stats.explored, stats.generated);
        assert_eq!(stats.pruned, stats.generated - 65);
        assert_eq!(stats.deepest_level, 5);
        assert_eq!(stats.solutions, 0);
    }

    #[test]
    fn test_unbounded_terminates_ascending() {
        let days = make_days(4);
        let people = make_people(1);
        let m = AttendanceMatrix::new(4, 1);
        let search = CoverSearch::with_config(
            SearchConfig::default().with_depth_bound(DepthBound::Unbounded),
        );

        let outcome = search.find_optimal_days(&days, &people, 0, &m).unwrap();
        // Viable states: every subset, 2^4 = 16.
        assert_eq!(outcome.stats().generated, 1 + 16 * 4);
        assert_eq!(outcome.stats().pruned, outcome.stats().generated - 16);
    }

    #[test]
    fn test_state_budget() {
        let days = make_days(3);
        let people = make_people(1);
        let m = AttendanceMatrix::new(3, 1).with_attendance(2, 0);
        let search =
            CoverSearch::with_config(SearchConfig::default().with_max_states(Some(1)));

        let err = search.find_optimal_days(&days, &people, 3, &m).unwrap_err();
        assert_eq!(
            err,
            SearchError::StateBudgetExhausted {
                explored: 1,
                budget: 1
            }
        );
    }

    #[test]
    fn test_invalid_config_rejected() {
        let search =
            CoverSearch::with_config(SearchConfig::default().with_max_states(Some(0)));
        let err = search
            .find_optimal_days(&[], &[], 0, &AttendanceMatrix::default())
            .unwrap_err();
        assert!(matches!(err, SearchError::InvalidConfig(_)));
    }

    #[test]
    fn test_mismatched_matrix_fails_fast() {
        let days = make_days(3);
        let people = make_people(2);
        let m = AttendanceMatrix::new(2, 2);

        match find_optimal_days(&days, &people, 3, &m) {
            Err(SearchError::InvalidInput(errors)) => {
                assert!(errors
                    .iter()
                    .any(|e| e.kind == ValidationErrorKind::RowCountMismatch));
            }
            other => panic!("expected InvalidInput, got {other:?}"),
        }
    }

    #[test]
    fn test_result_has_no_repeated_days() {
        let days = make_days(4);
        let people = make_people(4);
        let m = AttendanceMatrix::new(4, 4)
            .with_attendance(0, 0)
            .with_attendance(1, 1)
            .with_attendance(2, 2)
            .with_attendance(3, 3);

        for rule in [SequenceRule::Ascending, SequenceRule::Distinct] {
            let search =
                CoverSearch::with_config(SearchConfig::default().with_sequence_rule(rule));
            let outcome = search.find_optimal_days(&days, &people, 4, &m).unwrap();
            let mut ids = outcome.day_ids();
            assert_eq!(ids.len(), 4);
            ids.sort_unstable();
            ids.dedup();
            assert_eq!(ids.len(), 4);
        }
    }
}
