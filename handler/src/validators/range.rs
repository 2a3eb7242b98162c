//! The numeric range handler.

use crate::{expect_constraint, ConstraintValidator, HandlerError, HandlerResult};
use assay_constraint::assert::Range;
use assay_constraint::{Constraint, Violation, ViolationList};
use assay_core::ValidatedValue;

/// Bounds a numeric value. At most one violation per call; the lower bound
/// is checked first.
#[derive(Debug, Clone, Default)]
pub struct RangeValidator;

impl ConstraintValidator for RangeValidator {
    fn validate(
        &self,
        value: &ValidatedValue,
        constraint: &dyn Constraint,
    ) -> HandlerResult<ViolationList> {
        let constraint = expect_constraint::<Range>(constraint, "Range")?;

        let mut violations = ViolationList::new();
        if !value.is_initialized() {
            return Ok(violations);
        }

        let number = value.value().as_float().ok_or_else(|| {
            HandlerError::unexpected_value(value.path(), "Int|Float", value.value().type_name())
        })?;

        if let (Some(min), Some(message)) = (constraint.min_bound(), constraint.min_message()) {
            if number < min {
                violations.push(Violation::new(value.value().clone(), message, value.path()));
                return Ok(violations);
            }
        }
        if let (Some(max), Some(message)) = (constraint.max_bound(), constraint.max_message()) {
            if number > max {
                violations.push(Violation::new(value.value().clone(), message, value.path()));
            }
        }

        Ok(violations)
    }
}
