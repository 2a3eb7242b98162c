//! The public validation entry point.

use crate::input::validate_values;
use crate::{RuleCollector, ValidateResult};
use assay_constraint::{Constraint, ViolationList};
use assay_core::Value;
use assay_handler::{HandlerRegistry, Instantiator, ServiceLocator};
use assay_schema::MetadataProvider;
use std::sync::Arc;

/// The orchestrator: collects rules for the input, resolves a handler per
/// (rule, constraint) pair, and merges every handler's violations into one
/// result. Pure and re-entrant; nothing is shared across calls except the
/// locator's own instances.
pub struct Validator {
    provider: Arc<dyn MetadataProvider>,
    instantiator: Instantiator,
}

impl Validator {
    /// A validator over the built-in handler registry, without a locator.
    pub fn new(provider: Arc<dyn MetadataProvider>) -> Self {
        Self::with_instantiator(provider, Instantiator::new(HandlerRegistry::new()))
    }

    /// A validator consulting a service locator before the registry.
    pub fn with_locator(
        provider: Arc<dyn MetadataProvider>,
        locator: Arc<dyn ServiceLocator>,
    ) -> Self {
        Self::with_instantiator(
            provider,
            Instantiator::with_locator(HandlerRegistry::new(), locator),
        )
    }

    /// A validator over a caller-assembled instantiator.
    pub fn with_instantiator(provider: Arc<dyn MetadataProvider>, instantiator: Instantiator) -> Self {
        Self {
            provider,
            instantiator,
        }
    }

    /// Validate a value (or list of values) against its declared metadata.
    pub fn validate(&self, values: &Value) -> ValidateResult<ViolationList> {
        self.run(values, &[])
    }

    /// Validate against an explicit constraint list instead of declared
    /// metadata. An empty list behaves exactly like [`Validator::validate`].
    pub fn validate_with(
        &self,
        values: &Value,
        constraints: &[Arc<dyn Constraint>],
    ) -> ValidateResult<ViolationList> {
        self.run(values, constraints)
    }

    fn run(
        &self,
        values: &Value,
        constraints: &[Arc<dyn Constraint>],
    ) -> ValidateResult<ViolationList> {
        validate_values(values)?;

        let collector = RuleCollector::new(self.provider.as_ref());
        let rules = collector.collect(values, constraints)?;

        let mut violations = ViolationList::new();
        for rule in &rules {
            for constraint in &rule.constraints {
                let handler = self.instantiator.instantiate(&constraint.handler())?;
                violations.merge(handler.validate(&rule.value, constraint.as_ref())?);
            }
        }

        Ok(violations)
    }
}
