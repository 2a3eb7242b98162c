//! The cascade marker constraint.

use crate::{Constraint, HandlerId};
use std::any::Any;

/// Marks a field (or a top-level value) as "descend into this value and
/// validate its members against their own declared constraints" instead of
/// applying a leaf check.
#[derive(Debug, Clone, Default)]
pub struct Cascade;

impl Cascade {
    pub fn new() -> Self {
        Self
    }
}

impl Constraint for Cascade {
    fn handler(&self) -> HandlerId {
        HandlerId::Cascade
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}
