//! Input validation for covering problems.
//!
//! Checks structural integrity of the day list, person list, and attendance
//! matrix before searching. Detects:
//! - Duplicate day or person IDs
//! - Attendance row count not matching the day count
//! - Attendance rows whose length does not match the person count
//!
//! Every issue is collected before returning, so callers see the whole
//! picture in one pass.

use crate::models::{AttendanceMatrix, CoverageProblem, Day, Person};
use std::collections::HashSet;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Two days or two people share the same ID.
    DuplicateId,
    /// The attendance matrix has a different number of rows than days.
    RowCountMismatch,
    /// An attendance row has a different length than the person list.
    ColumnCountMismatch,
}

impl ValidationError {
    /// Creates a validation error.
    pub fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates the input data for a covering problem.
///
/// Checks:
/// 1. No duplicate day IDs
/// 2. No duplicate person IDs
/// 3. One attendance row per day
/// 4. One attendance column per person in every row
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_input(
    days: &[Day],
    people: &[Person],
    attendance: &AttendanceMatrix,
) -> ValidationResult {
    let mut errors = Vec::new();

    let mut day_ids = HashSet::new();
    for day in days {
        if !day_ids.insert(day.id) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate day ID: {}", day.id),
            ));
        }
    }

    let mut person_ids = HashSet::new();
    for person in people {
        if !person_ids.insert(person.id) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate person ID: {}", person.id),
            ));
        }
    }

    if attendance.day_count() != days.len() {
        errors.push(ValidationError::new(
            ValidationErrorKind::RowCountMismatch,
            format!(
                "Attendance matrix has {} rows for {} days",
                attendance.day_count(),
                days.len()
            ),
        ));
    }

    for (idx, row) in attendance.rows().iter().enumerate() {
        if row.len() != people.len() {
            errors.push(ValidationError::new(
                ValidationErrorKind::ColumnCountMismatch,
                format!(
                    "Attendance row {idx} has {} columns for {} people",
                    row.len(),
                    people.len()
                ),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Validates a bundled problem instance.
pub fn validate_problem(problem: &CoverageProblem) -> ValidationResult {
    validate_input(&problem.days, &problem.people, &problem.attendance)
}
