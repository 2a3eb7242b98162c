//! The element-count constraint.

use crate::{Constraint, HandlerId};
use std::any::Any;

/// Requires a list to hold exactly `expected` elements.
#[derive(Debug, Clone)]
pub struct Count {
    /// Required number of elements.
    pub expected: usize,
    /// Violation message.
    pub message: String,
}

impl Count {
    pub fn new(expected: usize, message: impl Into<String>) -> Self {
        Self {
            expected,
            message: message.into(),
        }
    }
}

impl Constraint for Count {
    fn handler(&self) -> HandlerId {
        HandlerId::Count
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}
