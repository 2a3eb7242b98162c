//! Validation error types.

use assay_handler::{HandlerError, InstantiateError};
use thiserror::Error;

/// Result type for validation runs.
pub type ValidateResult<T> = Result<T, ValidateError>;

/// Errors that abort a validation run. Ordinary rule failures are not
/// errors - they come back as violations in the result.
#[derive(Debug, Error)]
pub enum ValidateError {
    /// The top-level input, or a cascade target, has an unsupported shape.
    #[error("Cannot validate value of type \"{actual}\" as the only supported shapes are Object|List<Object>")]
    UnsupportedInput { actual: String },

    /// A cascade chain descended past the nesting limit.
    #[error("Cascade nesting exceeded {limit} levels at \"{path}\"")]
    NestingTooDeep { limit: usize, path: String },

    /// A handler was invoked with a value or constraint of the wrong shape.
    #[error(transparent)]
    Handler(#[from] HandlerError),

    /// A handler could not be resolved or constructed.
    #[error(transparent)]
    Instantiate(#[from] InstantiateError),
}

impl ValidateError {
    pub fn unsupported_input(actual: impl Into<String>) -> Self {
        Self::UnsupportedInput {
            actual: actual.into(),
        }
    }

    pub fn nesting_too_deep(limit: usize, path: impl Into<String>) -> Self {
        Self::NestingTooDeep {
            limit,
            path: path.into(),
        }
    }
}
