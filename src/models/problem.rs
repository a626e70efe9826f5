//! Problem instance container.

use serde::{Deserialize, Serialize};

use super::{AttendanceMatrix, Day, Person};

/// A covering-scheduling problem instance.
///
/// Bundles the candidate days, interested people, day limit and attendance
/// relation so one instance can be validated once and searched with
/// several configurations.
///
/// # Example
///
/// ```
/// use course_days::models::{AttendanceMatrix, CoverageProblem, Day, Person};
///
/// let problem = CoverageProblem::new(
///     vec![Day::new(0, "Mon"), Day::new(1, "Tue")],
///     vec![Person::new(0, "a")],
/// )
/// .with_limit(1)
/// .with_attendance(AttendanceMatrix::new(2, 1).with_attendance(1, 0));
///
/// assert_eq!(problem.day_count(), 2);
/// assert_eq!(problem.person_count(), 1);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CoverageProblem {
    /// Candidate days, in the order their attendance rows were filled.
    pub days: Vec<Day>,
    /// Interested people, in the order their attendance columns were filled.
    pub people: Vec<Person>,
    /// Maximum number of days an acceptable solution may use.
    pub limit: usize,
    /// Who can attend on which day.
    pub attendance: AttendanceMatrix,
}

impl CoverageProblem {
    /// Creates a problem with an all-`false` attendance matrix and a limit
    /// equal to the number of days.
    pub fn new(days: Vec<Day>, people: Vec<Person>) -> Self {
        let attendance = AttendanceMatrix::new(days.len(), people.len());
        let limit = days.len();
        Self {
            days,
            people,
            limit,
            attendance,
        }
    }

    /// Sets the day limit.
    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }

    /// Sets the attendance matrix.
    pub fn with_attendance(mut self, attendance: AttendanceMatrix) -> Self {
        self.attendance = attendance;
        self
    }

    /// Number of candidate days.
    pub fn day_count(&self) -> usize {
        self.days.len()
    }

    /// Number of interested people.
    pub fn person_count(&self) -> usize {
        self.people.len()
    }
}
