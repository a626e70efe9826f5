//! Attendance relation between days and people.
//!
//! The matrix is addressed positionally: row `d` belongs to the `d`-th day
//! of the input day list and column `p` to the `p`-th person of the input
//! person list. Identities play no role in lookups, so callers must keep
//! both lists in the same order they used to fill the matrix.

use serde::{Deserialize, Serialize};

/// Boolean relation: `rows[day][person]` is `true` iff that person can
/// attend on that day.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendanceMatrix {
    rows: Vec<Vec<bool>>,
}

impl AttendanceMatrix {
    /// Creates an all-`false` matrix with the given dimensions.
    pub fn new(day_count: usize, person_count: usize) -> Self {
        Self {
            rows: vec![vec![false; person_count]; day_count],
        }
    }

    /// Wraps pre-built rows, one per day.
    ///
    /// Rows are not checked here; ragged input is reported by
    /// [`crate::validation::validate_input`].
    pub fn from_rows(rows: Vec<Vec<bool>>) -> Self {
        Self { rows }
    }

    /// Marks whether `person` can attend on `day`.
    ///
    /// Returns `false` (and changes nothing) when the cell is out of range.
    pub fn set(&mut self, day: usize, person: usize, can_attend: bool) -> bool {
        match self.rows.get_mut(day).and_then(|row| row.get_mut(person)) {
            Some(cell) => {
                *cell = can_attend;
                true
            }
            None => false,
        }
    }

    /// Builder: marks `person` as able to attend on `day`.
    pub fn with_attendance(mut self, day: usize, person: usize) -> Self {
        self.set(day, person, true);
        self
    }

    /// Whether `person` can attend on `day`. Out-of-range cells are `false`.
    #[inline]
    pub fn can_attend(&self, day: usize, person: usize) -> bool {
        self.rows
            .get(day)
            .and_then(|row| row.get(person))
            .copied()
            .unwrap_or(false)
    }

    /// Positions of the people who can attend on `day`.
    pub fn attendees(&self, day: usize) -> impl Iterator<Item = usize> + '_ {
        self.rows
            .get(day)
            .into_iter()
            .flat_map(|row| row.iter().enumerate())
            .filter_map(|(person, &ok)| ok.then_some(person))
    }

    /// Number of rows (days).
    pub fn day_count(&self) -> usize {
        self.rows.len()
    }

    /// Length of each row, if every row has the same length.
    ///
    /// An empty matrix reports `Some(0)`.
    pub fn person_count(&self) -> Option<usize> {
        let first = self.rows.first().map_or(0, Vec::len);
        self.rows
            .iter()
            .all(|row| row.len() == first)
            .then_some(first)
    }

    /// Raw rows, one per day.
    pub fn rows(&self) -> &[Vec<bool>] {
        &self.rows
    }
}
