//! Error types for the overview pipeline.
//!
//! The pipeline itself is fail-open: malformed content degrades to literal
//! text and internal truncation faults degrade to the untruncated render,
//! so `render`/`render_truncated` never return an error. These types exist
//! for the surfaces around the pure core — the operator CLI reading input
//! and callers validating budgets up front.

use thiserror::Error;

/// Result alias for fallible overview operations.
pub type OverviewResult<T> = Result<T, OverviewError>;

/// Errors surfaced by the crate's non-pipeline surfaces.
#[derive(Debug, Error)]
pub enum OverviewError {
    /// Reading raw content from a file or stdin failed.
    #[error("failed to read content: {0}")]
    Io(#[from] std::io::Error),

    /// A caller-supplied budget that is not a usable number.
    #[error("invalid truncation budget: {0}")]
    InvalidBudget(String),
}

impl OverviewError {
    /// A short message suitable for showing to an operator.
    pub fn user_message(&self) -> String {
        match self {
            OverviewError::Io(e) => format!("Could not read the content input: {}", e),
            OverviewError::InvalidBudget(b) => {
                format!("Truncation budget '{}' is not usable; pass a whole number", b)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "not found");
        let err: OverviewError = io_err.into();
        assert!(matches!(err, OverviewError::Io(_)));
        assert!(err.user_message().contains("not found"));
    }

    #[test]
    fn test_invalid_budget_message() {
        let err = OverviewError::InvalidBudget("abc".to_string());
        assert!(err.user_message().contains("abc"));
        assert!(!err.to_string().is_empty());
    }
}
