//! Error types.

use thiserror::Error;

use crate::validation::ValidationError;

/// Errors raised by the simulation API.
///
/// Strategy functions themselves never fail; errors come from metric
/// aggregation and from pre-run validation of a [`SimulationRequest`].
///
/// [`SimulationRequest`]: crate::scheduler::SimulationRequest
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SimulationError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    #[error("Validation failed: {}", format_errors(.0))]
    Validation(Vec<ValidationError>),
}

fn format_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}

impl From<Vec<ValidationError>> for SimulationError {
    fn from(errors: Vec<ValidationError>) -> Self {
        SimulationError::Validation(errors)
    }
}

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, SimulationError>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::ValidationErrorKind;

    #[test]
    fn test_invalid_input_display() {
        let err = SimulationError::InvalidInput("empty process list".into());
        assert_eq!(err.to_string(), "Invalid input: empty process list");
    }

    #[test]
    fn test_validation_display_joins_messages() {
        let err = SimulationError::from(vec![
            ValidationError::new(ValidationErrorKind::DuplicateId, "Duplicate process ID: P1"),
            ValidationError::new(ValidationErrorKind::InvalidQuantum, "Quantum must be positive"),
        ]);
        assert_eq!(
            err.to_string(),
            "Validation failed: Duplicate process ID: P1; Quantum must be positive"
        );
    }
}
