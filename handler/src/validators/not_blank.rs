//! The non-emptiness handler.

use crate::{expect_constraint, ConstraintValidator, HandlerError, HandlerResult};
use assay_constraint::assert::NotBlank;
use assay_constraint::{Constraint, Violation, ViolationList};
use assay_core::{ValidatedValue, Value};

/// Checks that a string or list is non-empty. An explicit null fails unless
/// the constraint allows it.
#[derive(Debug, Clone, Default)]
pub struct NotBlankValidator;

impl ConstraintValidator for NotBlankValidator {
    fn validate(
        &self,
        value: &ValidatedValue,
        constraint: &dyn Constraint,
    ) -> HandlerResult<ViolationList> {
        let constraint = expect_constraint::<NotBlank>(constraint, "NotBlank")?;

        let mut violations = ViolationList::new();
        if !value.is_initialized() {
            return Ok(violations);
        }

        let blank = match value.value() {
            Value::Null => !constraint.allow_null,
            Value::String(s) => s.is_empty(),
            Value::List(items) => items.is_empty(),
            other => {
                return Err(HandlerError::unexpected_value(
                    value.path(),
                    "String|List|Null",
                    other.type_name(),
                ))
            }
        };

        if blank {
            violations.push(Violation::new(
                value.value().clone(),
                &constraint.message,
                value.path(),
            ));
        }

        Ok(violations)
    }
}
