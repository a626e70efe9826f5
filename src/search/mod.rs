//! Exhaustive covering search.
//!
//! Enumerates candidate day sequences breadth-first, prunes sequences that
//! repeat a day, and returns the shortest sequence that lets every person
//! attend within the day limit.
//!
//! # Usage
//!
//! ```
//! use course_days::models::{AttendanceMatrix, Day, Person};
//! use course_days::search::{CoverSearch, SearchConfig, TieBreak};
//!
//! let days = vec![Day::new(0, "Mon"), Day::new(1, "Tue")];
//! let people = vec![Person::new(0, "a")];
//! let attendance = AttendanceMatrix::new(2, 1)
//!     .with_attendance(0, 0)
//!     .with_attendance(1, 0);
//!
//! let search = CoverSearch::with_config(SearchConfig::default().with_tie_break(TieBreak::First));
//! let outcome = search.find_optimal_days(&days, &people, 1, &attendance).unwrap();
//! assert_eq!(outcome.day_ids(), vec![0]);
//! ```
//!
//! # References
//!
//! - Russell & Norvig (2020), "Artificial Intelligence: A Modern Approach", Ch. 3
//! - Cormen et al. (2009), "Introduction to Algorithms", Ch. 35.3 (Set Cover)

mod config;
mod engine;
mod outcome;
mod predicates;
mod stats;

pub use config::{DepthBound, SearchConfig, SequenceRule, TieBreak, DEFAULT_MAX_STATES};
pub use engine::{find_optimal_days, select_best, CoverSearch};
pub use outcome::SearchOutcome;
pub use predicates::{covered_people_count, has_repeated_day, StateSpace};
pub use stats::SearchStats;
