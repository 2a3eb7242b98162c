//! Numeric comparison constraints.

use crate::{Constraint, HandlerId};
use std::any::Any;

/// Requires a numeric value to be greater than a threshold.
#[derive(Debug, Clone)]
pub struct GreaterThan {
    /// The comparison threshold.
    pub threshold: f64,
    /// Violation message.
    pub message: String,
    /// Whether a value equal to the threshold passes.
    pub allow_equality: bool,
}

impl GreaterThan {
    pub fn new(threshold: f64, message: impl Into<String>) -> Self {
        Self {
            threshold,
            message: message.into(),
            allow_equality: false,
        }
    }

    /// Accept values equal to the threshold.
    pub fn allow_equality(mut self) -> Self {
        self.allow_equality = true;
        self
    }
}

impl Constraint for GreaterThan {
    fn handler(&self) -> HandlerId {
        HandlerId::GreaterThan
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// Requires a numeric value to be less than a threshold.
#[derive(Debug, Clone)]
pub struct LessThan {
    /// The comparison threshold.
    pub threshold: f64,
    /// Violation message.
    pub message: String,
    /// Whether a value equal to the threshold passes.
    pub allow_equality: bool,
}

impl LessThan {
    pub fn new(threshold: f64, message: impl Into<String>) -> Self {
        Self {
            threshold,
            message: message.into(),
            allow_equality: false,
        }
    }

    /// Accept values equal to the threshold.
    pub fn allow_equality(mut self) -> Self {
        self.allow_equality = true;
        self
    }
}

impl Constraint for LessThan {
    fn handler(&self) -> HandlerId {
        HandlerId::LessThan
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// Requires a numeric value to be strictly greater than zero.
#[derive(Debug, Clone)]
pub struct Positive {
    /// Violation message.
    pub message: String,
}

impl Positive {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl Constraint for Positive {
    fn handler(&self) -> HandlerId {
        HandlerId::Positive
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// Requires a numeric value to be strictly less than zero.
#[derive(Debug, Clone)]
pub struct Negative {
    /// Violation message.
    pub message: String,
}

impl Negative {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl Constraint for Negative {
    fn handler(&self) -> HandlerId {
        HandlerId::Negative
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}
