//! Search error type.

use thiserror::Error;

use crate::validation::ValidationError;

/// Errors returned by the search engine.
///
/// Infeasibility is not an error; it is reported as
/// [`crate::search::SearchOutcome::Infeasible`].
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SearchError {
    /// The problem instance failed validation.
    #[error("invalid input: {}", summarize(.0))]
    InvalidInput(Vec<ValidationError>),

    /// The configured state budget was used up before the frontier emptied.
    #[error("state budget exhausted: explored {explored} states (budget {budget})")]
    StateBudgetExhausted { explored: usize, budget: usize },

    /// A configuration value was rejected.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

fn summarize(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}

impl From<Vec<ValidationError>> for SearchError {
    fn from(errors: Vec<ValidationError>) -> Self {
        SearchError::InvalidInput(errors)
    }
}
