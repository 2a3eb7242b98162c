//! The initialization constraint.

use crate::{Constraint, HandlerId};
use std::any::Any;

/// Requires a field to have been assigned a value. This is the one
/// constraint that reports on uninitialized fields instead of skipping them.
#[derive(Debug, Clone)]
pub struct Initialized {
    /// Violation message.
    pub message: String,
}

impl Initialized {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl Constraint for Initialized {
    fn handler(&self) -> HandlerId {
        HandlerId::Initialized
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}
