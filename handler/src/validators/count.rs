//! The element-count handler.

use crate::{expect_constraint, ConstraintValidator, HandlerError, HandlerResult};
use assay_constraint::assert::Count;
use assay_constraint::{Constraint, Violation, ViolationList};
use assay_core::{ValidatedValue, Value};

/// Checks that a list holds exactly the expected number of elements.
#[derive(Debug, Clone, Default)]
pub struct CountValidator;

impl ConstraintValidator for CountValidator {
    fn validate(
        &self,
        value: &ValidatedValue,
        constraint: &dyn Constraint,
    ) -> HandlerResult<ViolationList> {
        let constraint = expect_constraint::<Count>(constraint, "Count")?;

        let mut violations = ViolationList::new();
        if !value.is_initialized() {
            return Ok(violations);
        }

        let items = match value.value() {
            Value::List(items) => items,
            other => {
                return Err(HandlerError::unexpected_value(
                    value.path(),
                    "List",
                    other.type_name(),
                ))
            }
        };

        if items.len() != constraint.expected {
            violations.push(Violation::new(
                value.value().clone(),
                &constraint.message,
                value.path(),
            ));
        }

        Ok(violations)
    }
}
