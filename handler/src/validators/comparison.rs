//! Numeric comparison handlers.

use crate::{expect_constraint, ConstraintValidator, HandlerError, HandlerResult};
use assay_constraint::assert::{GreaterThan, LessThan, Negative, Positive};
use assay_constraint::{Constraint, Violation, ViolationList};
use assay_core::ValidatedValue;

fn numeric(value: &ValidatedValue) -> HandlerResult<f64> {
    value.value().as_float().ok_or_else(|| {
        HandlerError::unexpected_value(value.path(), "Int|Float", value.value().type_name())
    })
}

/// Checks a value against a lower threshold.
#[derive(Debug, Clone, Default)]
pub struct GreaterThanValidator;

impl ConstraintValidator for GreaterThanValidator {
    fn validate(
        &self,
        value: &ValidatedValue,
        constraint: &dyn Constraint,
    ) -> HandlerResult<ViolationList> {
        let constraint = expect_constraint::<GreaterThan>(constraint, "GreaterThan")?;

        let mut violations = ViolationList::new();
        if !value.is_initialized() {
            return Ok(violations);
        }

        let number = numeric(value)?;
        let invalid = if constraint.allow_equality {
            number < constraint.threshold
        } else {
            number <= constraint.threshold
        };

        if invalid {
            violations.push(Violation::new(
                value.value().clone(),
                &constraint.message,
                value.path(),
            ));
        }

        Ok(violations)
    }
}

/// Checks a value against an upper threshold.
#[derive(Debug, Clone, Default)]
pub struct LessThanValidator;

impl ConstraintValidator for LessThanValidator {
    fn validate(
        &self,
        value: &ValidatedValue,
        constraint: &dyn Constraint,
    ) -> HandlerResult<ViolationList> {
        let constraint = expect_constraint::<LessThan>(constraint, "LessThan")?;

        let mut violations = ViolationList::new();
        if !value.is_initialized() {
            return Ok(violations);
        }

        let number = numeric(value)?;
        let invalid = if constraint.allow_equality {
            number > constraint.threshold
        } else {
            number >= constraint.threshold
        };

        if invalid {
            violations.push(Violation::new(
                value.value().clone(),
                &constraint.message,
                value.path(),
            ));
        }

        Ok(violations)
    }
}

/// Checks that a value is strictly greater than zero.
#[derive(Debug, Clone, Default)]
pub struct PositiveValidator;

impl ConstraintValidator for PositiveValidator {
    fn validate(
        &self,
        value: &ValidatedValue,
        constraint: &dyn Constraint,
    ) -> HandlerResult<ViolationList> {
        let constraint = expect_constraint::<Positive>(constraint, "Positive")?;

        let mut violations = ViolationList::new();
        if !value.is_initialized() {
            return Ok(violations);
        }

        if numeric(value)? <= 0.0 {
            violations.push(Violation::new(
                value.value().clone(),
                &constraint.message,
                value.path(),
            ));
        }

        Ok(violations)
    }
}

/// Checks that a value is strictly less than zero.
#[derive(Debug, Clone, Default)]
pub struct NegativeValidator;

impl ConstraintValidator for NegativeValidator {
    fn validate(
        &self,
        value: &ValidatedValue,
        constraint: &dyn Constraint,
    ) -> HandlerResult<ViolationList> {
        let constraint = expect_constraint::<Negative>(constraint, "Negative")?;

        let mut violations = ViolationList::new();
        if !value.is_initialized() {
            return Ok(violations);
        }

        if numeric(value)? >= 0.0 {
            violations.push(Violation::new(
                value.value().clone(),
                &constraint.message,
                value.path(),
            ));
        }

        Ok(violations)
    }
}
