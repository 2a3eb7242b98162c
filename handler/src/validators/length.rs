//! The length handler.

use crate::{expect_constraint, ConstraintValidator, HandlerError, HandlerResult};
use assay_constraint::assert::Length;
use assay_constraint::{Constraint, Violation, ViolationList};
use assay_core::{ValidatedValue, Value};

/// Bounds the length of a string (in characters) or a list (in elements).
/// At most one violation per call; the lower bound is checked first.
#[derive(Debug, Clone, Default)]
pub struct LengthValidator;

impl ConstraintValidator for LengthValidator {
    fn validate(
        &self,
        value: &ValidatedValue,
        constraint: &dyn Constraint,
    ) -> HandlerResult<ViolationList> {
        let constraint = expect_constraint::<Length>(constraint, "Length")?;

        let mut violations = ViolationList::new();
        if !value.is_initialized() {
            return Ok(violations);
        }

        let length = match value.value() {
            Value::String(s) => s.chars().count(),
            Value::List(items) => items.len(),
            other => {
                return Err(HandlerError::unexpected_value(
                    value.path(),
                    "String|List",
                    other.type_name(),
                ))
            }
        };

        if let (Some(min), Some(message)) = (constraint.min_bound(), constraint.min_message()) {
            if length < min {
                violations.push(Violation::new(value.value().clone(), message, value.path()));
                return Ok(violations);
            }
        }
        if let (Some(max), Some(message)) = (constraint.max_bound(), constraint.max_message()) {
            if length > max {
                violations.push(Violation::new(value.value().clone(), message, value.path()));
            }
        }

        Ok(violations)
    }
}
