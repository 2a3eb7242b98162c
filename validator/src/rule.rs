//! The rule pairing produced by traversal.

use assay_constraint::Constraint;
use assay_core::ValidatedValue;
use std::sync::Arc;

/// One value paired with the constraints to run on it. Produced by the
/// `RuleCollector`, consumed once by the orchestrator.
pub struct Rule {
    /// The value to check.
    pub value: ValidatedValue,
    /// The constraints to run, in order.
    pub constraints: Vec<Arc<dyn Constraint>>,
}

impl Rule {
    pub fn new(value: ValidatedValue, constraints: Vec<Arc<dyn Constraint>>) -> Self {
        Self { value, constraints }
    }
}
