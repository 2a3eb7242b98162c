//! The non-emptiness constraint.

use crate::{Constraint, HandlerId};
use std::any::Any;

/// Requires a string or list to be non-empty. Null fails unless
/// `allow_null` is set.
#[derive(Debug, Clone)]
pub struct NotBlank {
    /// Violation message.
    pub message: String,
    /// Whether an explicit null passes.
    pub allow_null: bool,
}

impl NotBlank {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            allow_null: false,
        }
    }

    /// Accept explicit null values.
    pub fn allow_null(mut self) -> Self {
        self.allow_null = true;
        self
    }
}

impl Constraint for NotBlank {
    fn handler(&self) -> HandlerId {
        HandlerId::NotBlank
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}
