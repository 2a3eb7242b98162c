//! The pattern-match handler.

use crate::{expect_constraint, ConstraintValidator, HandlerError, HandlerResult};
use assay_constraint::assert::Regex;
use assay_constraint::{Constraint, Violation, ViolationList};
use assay_core::{ValidatedValue, Value};

/// Checks a string against the constraint's precompiled pattern.
#[derive(Debug, Clone, Default)]
pub struct RegexValidator;

impl ConstraintValidator for RegexValidator {
    fn validate(
        &self,
        value: &ValidatedValue,
        constraint: &dyn Constraint,
    ) -> HandlerResult<ViolationList> {
        let constraint = expect_constraint::<Regex>(constraint, "Regex")?;

        let mut violations = ViolationList::new();
        if !value.is_initialized() {
            return Ok(violations);
        }

        let text = match value.value() {
            Value::String(s) => s,
            other => {
                return Err(HandlerError::unexpected_value(
                    value.path(),
                    "String",
                    other.type_name(),
                ))
            }
        };

        if !constraint.regex().is_match(text) {
            violations.push(Violation::new(
                value.value().clone(),
                constraint.message(),
                value.path(),
            ));
        }

        Ok(violations)
    }
}
