//! Handler error types.

use thiserror::Error;

/// Result type for handler invocations.
pub type HandlerResult<T> = Result<T, HandlerError>;

/// Result type for handler resolution.
pub type InstantiateResult<T> = Result<T, InstantiateError>;

/// Errors raised when a handler is invoked with a value or constraint of
/// the wrong shape. These are wiring bugs, not rule failures.
#[derive(Debug, Error)]
pub enum HandlerError {
    #[error("Unexpected constraint type: expected \"{expected}\", got \"{actual}\"")]
    UnexpectedConstraint { expected: String, actual: String },

    #[error("Unexpected value type at \"{path}\": expected {expected}, got {actual}")]
    UnexpectedValue {
        path: String,
        expected: String,
        actual: String,
    },
}

impl HandlerError {
    pub fn unexpected_constraint(expected: impl Into<String>, actual: impl Into<String>) -> Self {
        Self::UnexpectedConstraint {
            expected: expected.into(),
            actual: actual.into(),
        }
    }

    pub fn unexpected_value(
        path: impl Into<String>,
        expected: impl Into<String>,
        actual: impl Into<String>,
    ) -> Self {
        Self::UnexpectedValue {
            path: path.into(),
            expected: expected.into(),
            actual: actual.into(),
        }
    }
}

/// Errors raised when a handler cannot be resolved or constructed.
#[derive(Debug, Error)]
pub enum InstantiateError {
    #[error("Cannot instantiate handler \"{handler}\" as it is not registered")]
    UnknownHandler { handler: String },

    #[error("Cannot instantiate handler \"{handler}\" as the locator entry does not implement the ConstraintValidator capability")]
    NotAValidator { handler: String },

    #[error("Cannot instantiate handler \"{handler}\" with argument \"{parameter}\" as its type is not concrete - \"{ty}\"")]
    NonConcreteParameter {
        handler: String,
        parameter: String,
        ty: String,
    },

    #[error("Cannot instantiate handler \"{handler}\" with argument \"{parameter}\" as its type is built-in")]
    BuiltInParameter { handler: String, parameter: String },

    #[error("Cannot instantiate handler \"{handler}\" with argument \"{parameter}:{ty}\" as it does not exist in the locator")]
    MissingService {
        handler: String,
        parameter: String,
        ty: String,
    },

    #[error("Cannot instantiate handler \"{handler}\" as argument \"{parameter}\" does not match its declared type")]
    ConstructionFailed { handler: String, parameter: String },
}

impl InstantiateError {
    pub fn unknown_handler(handler: impl Into<String>) -> Self {
        Self::UnknownHandler {
            handler: handler.into(),
        }
    }

    pub fn not_a_validator(handler: impl Into<String>) -> Self {
        Self::NotAValidator {
            handler: handler.into(),
        }
    }

    pub fn non_concrete_parameter(
        handler: impl Into<String>,
        parameter: impl Into<String>,
        ty: impl Into<String>,
    ) -> Self {
        Self::NonConcreteParameter {
            handler: handler.into(),
            parameter: parameter.into(),
            ty: ty.into(),
        }
    }

    pub fn built_in_parameter(handler: impl Into<String>, parameter: impl Into<String>) -> Self {
        Self::BuiltInParameter {
            handler: handler.into(),
            parameter: parameter.into(),
        }
    }

    pub fn missing_service(
        handler: impl Into<String>,
        parameter: impl Into<String>,
        ty: impl Into<String>,
    ) -> Self {
        Self::MissingService {
            handler: handler.into(),
            parameter: parameter.into(),
            ty: ty.into(),
        }
    }

    pub fn construction_failed(handler: impl Into<String>, parameter: impl Into<String>) -> Self {
        Self::ConstructionFailed {
            handler: handler.into(),
            parameter: parameter.into(),
        }
    }
}
