use thiserror::Error;

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum DomainError {
    #[error("embedding dimension mismatch: {left} vs {right}")]
    DimensionMismatch { left: usize, right: usize },
    #[error("domain invariant violation: {0}")]
    InvariantViolation(String),
}

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ApplicationError {
    #[error(transparent)]
    Domain(#[from] DomainError),
    #[error("persistence failure: {0}")]
    Persistence(String),
    #[error("inference failure: {0}")]
    Inference(String),
    #[error("configuration failure: {0}")]
    Configuration(String),
}

impl ApplicationError {
    /// User-safe message. "Nothing to suggest" is never routed through here:
    /// an empty candidate pool is the `Ok(None)` outcome, not an error.
    pub fn user_message(&self) -> &'static str {
        match self {
            Self::Domain(_) => "The wardrobe data could not be processed.",
            Self::Persistence(_) => "The wardrobe store is temporarily unavailable.",
            Self::Inference(_) => "Couldn't fetch a suggestion right now. Please retry shortly.",
            Self::Configuration(_) => "An unexpected configuration problem occurred.",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{ApplicationError, DomainError};

    #[test]
    fn domain_error_wraps_into_application_error() {
        let error = ApplicationError::from(DomainError::DimensionMismatch { left: 2, right: 3 });
        assert!(matches!(error, ApplicationError::Domain(_)));
        assert_eq!(error.user_message(), "The wardrobe data could not be processed.");
    }

    #[test]
    fn inference_failure_has_retryable_user_message() {
        let error = ApplicationError::Inference("embedding service timed out".to_owned());
        assert_eq!(
            error.user_message(),
            "Couldn't fetch a suggestion right now. Please retry shortly."
        );
    }
}
