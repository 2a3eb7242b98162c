//! The pattern-match constraint.

use crate::{ConfigurationError, ConfigurationResult, Constraint, HandlerId};
use std::any::Any;

/// Requires a string to match a pattern. The pattern is compiled once when
/// the constraint is constructed; an invalid pattern is a configuration
/// error, never a check-time failure.
#[derive(Debug)]
pub struct Regex {
    pattern: String,
    regex: regex_lite::Regex,
    message: String,
}

impl Regex {
    pub fn new(pattern: impl Into<String>, message: impl Into<String>) -> ConfigurationResult<Self> {
        let pattern = pattern.into();
        let regex = regex_lite::Regex::new(&pattern)
            .map_err(|e| ConfigurationError::invalid_pattern(&pattern, e.to_string()))?;

        Ok(Self {
            pattern,
            regex,
            message: message.into(),
        })
    }

    /// The source pattern.
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// The compiled pattern.
    pub fn regex(&self) -> &regex_lite::Regex {
        &self.regex
    }

    /// Violation message.
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl Constraint for Regex {
    fn handler(&self) -> HandlerId {
        HandlerId::Regex
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}
