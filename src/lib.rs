//! Course-day covering search.
//!
//! Given the candidate days on which a course may be offered, the people
//! interested in it, and which people can attend on which day, finds the
//! smallest set of days (within a day limit) that lets every person attend
//! at least once.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `Day`, `Person`, `AttendanceMatrix`,
//!   `CandidateState`, `CoverageProblem`
//! - **`validation`**: Input integrity checks (duplicate IDs, matrix dimensions)
//! - **`search`**: Breadth-first enumeration, pruning and best-of selection
//! - **`generator`**: Random problem instances
//!
//! # Example
//!
//! ```
//! use course_days::models::{AttendanceMatrix, Day, Person};
//! use course_days::search::find_optimal_days;
//!
//! let days = vec![Day::new(0, "Mon"), Day::new(1, "Tue")];
//! let people = vec![Person::new(0, "a"), Person::new(1, "b")];
//! let attendance = AttendanceMatrix::from_rows(vec![
//!     vec![true, false],
//!     vec![true, true],
//! ]);
//!
//! let outcome = find_optimal_days(&days, &people, 2, &attendance).unwrap();
//! assert_eq!(outcome.day_ids(), vec![1]);
//! ```
//!
//! # References
//!
//! - Russell & Norvig (2020), "Artificial Intelligence: A Modern Approach", Ch. 3
//! - Karp (1972), "Reducibility Among Combinatorial Problems" (set cover)

pub mod error;
pub mod generator;
pub mod models;
pub mod search;
pub mod validation;

pub use error::SearchError;
