//! Error types for the gift card ledger.

use crate::validation::ValidationFailure;

/// Failure raised by the balance store itself.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LedgerError {
    #[error("Unknown gift card: {number}")]
    UnknownGiftCard { number: String },
}

/// Terminal outcome of a rejected gift card operation.
///
/// Every variant maps to exactly one wire response; nothing here is retried.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum OperationError {
    /// The body was not a JSON object.
    #[error("Invalid Request")]
    InvalidRequest,

    #[error("Validation failed: {0}")]
    Validation(ValidationFailure),

    /// Existence failure under the not-found policy. Carries no body.
    #[error("Gift card not found")]
    NotFound,

    #[error(transparent)]
    Ledger(#[from] LedgerError),
}

impl From<ValidationFailure> for OperationError {
    fn from(failure: ValidationFailure) -> Self {
        OperationError::Validation(failure)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::FailureKind;

    #[test]
    fn test_error_display() {
        let err = LedgerError::UnknownGiftCard {
            number: "42".to_string(),
        };
        assert_eq!(err.to_string(), "Unknown gift card: 42");
        assert_eq!(OperationError::InvalidRequest.to_string(), "Invalid Request");
    }

    #[test]
    fn test_validation_failure_converts() {
        let failure = ValidationFailure::new(FailureKind::Required, "number", "number is required");
        let err: OperationError = failure.clone().into();
        assert_eq!(err, OperationError::Validation(failure));
    }
}
