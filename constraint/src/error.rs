//! Constraint configuration error types.

use thiserror::Error;

/// Result type for constraint construction.
pub type ConfigurationResult<T> = Result<T, ConfigurationError>;

/// Errors raised when a constraint's own arguments are mutually
/// inconsistent. Detected at construction, before any value is checked.
#[derive(Debug, Error)]
pub enum ConfigurationError {
    #[error("{constraint} constraint must have one of \"{first}\" or \"{second}\" argument set")]
    MissingBounds {
        constraint: &'static str,
        first: &'static str,
        second: &'static str,
    },

    #[error("{constraint} constraint must have both \"{bound}\" and \"{message}\" arguments set")]
    UnpairedBound {
        constraint: &'static str,
        bound: &'static str,
        message: &'static str,
    },

    #[error("argument \"{max}\" of {constraint} constraint must be equal or greater than \"{min}\" value")]
    InvertedBounds {
        constraint: &'static str,
        min: &'static str,
        max: &'static str,
    },

    #[error("cannot compile pattern \"{pattern}\" of Regex constraint: {reason}")]
    InvalidPattern { pattern: String, reason: String },
}

impl ConfigurationError {
    pub fn missing_bounds(
        constraint: &'static str,
        first: &'static str,
        second: &'static str,
    ) -> Self {
        Self::MissingBounds {
            constraint,
            first,
            second,
        }
    }

    pub fn unpaired_bound(
        constraint: &'static str,
        bound: &'static str,
        message: &'static str,
    ) -> Self {
        Self::UnpairedBound {
            constraint,
            bound,
            message,
        }
    }

    pub fn inverted_bounds(constraint: &'static str, min: &'static str, max: &'static str) -> Self {
        Self::InvertedBounds {
            constraint,
            min,
            max,
        }
    }

    pub fn invalid_pattern(pattern: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidPattern {
            pattern: pattern.into(),
            reason: reason.into(),
        }
    }
}
