//! The length constraint.

use crate::{ConfigurationError, ConfigurationResult, Constraint, HandlerId};
use std::any::Any;

/// Bounds the length of a string (in characters) or a list (in elements).
///
/// Every bound must be paired with its message, and at least one bound must
/// be set; this is checked when the constraint is constructed.
#[derive(Debug, Clone)]
pub struct Length {
    min: Option<usize>,
    max: Option<usize>,
    min_message: Option<String>,
    max_message: Option<String>,
}

impl Length {
    /// General constructor; checks the bound/message pairing invariants.
    pub fn new(
        min: Option<usize>,
        max: Option<usize>,
        min_message: Option<&str>,
        max_message: Option<&str>,
    ) -> ConfigurationResult<Self> {
        if min.is_none() && max.is_none() {
            return Err(ConfigurationError::missing_bounds("Length", "min", "max"));
        }
        if min.is_some() != min_message.is_some() {
            return Err(ConfigurationError::unpaired_bound(
                "Length",
                "min",
                "min_message",
            ));
        }
        if max.is_some() != max_message.is_some() {
            return Err(ConfigurationError::unpaired_bound(
                "Length",
                "max",
                "max_message",
            ));
        }
        if let (Some(min), Some(max)) = (min, max) {
            if max < min {
                return Err(ConfigurationError::inverted_bounds("Length", "min", "max"));
            }
        }

        Ok(Self {
            min,
            max,
            min_message: min_message.map(str::to_string),
            max_message: max_message.map(str::to_string),
        })
    }

    /// Lower bound only.
    pub fn min(min: usize, message: impl Into<String>) -> Self {
        Self {
            min: Some(min),
            max: None,
            min_message: Some(message.into()),
            max_message: None,
        }
    }

    /// Upper bound only.
    pub fn max(max: usize, message: impl Into<String>) -> Self {
        Self {
            min: None,
            max: Some(max),
            min_message: None,
            max_message: Some(message.into()),
        }
    }

    /// Both bounds; fails if `max < min`.
    pub fn between(
        min: usize,
        max: usize,
        min_message: impl Into<String>,
        max_message: impl Into<String>,
    ) -> ConfigurationResult<Self> {
        let min_message = min_message.into();
        let max_message = max_message.into();
        Self::new(
            Some(min),
            Some(max),
            Some(min_message.as_str()),
            Some(max_message.as_str()),
        )
    }

    pub fn min_bound(&self) -> Option<usize> {
        self.min
    }

    pub fn max_bound(&self) -> Option<usize> {
        self.max
    }

    pub fn min_message(&self) -> Option<&str> {
        self.min_message.as_deref()
    }

    pub fn max_message(&self) -> Option<&str> {
        self.max_message.as_deref()
    }
}

impl Constraint for Length {
    fn handler(&self) -> HandlerId {
        HandlerId::Length
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}
