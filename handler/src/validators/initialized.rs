//! The initialization handler.

use crate::{expect_constraint, ConstraintValidator, HandlerResult};
use assay_constraint::assert::Initialized;
use assay_constraint::{Constraint, Violation, ViolationList};
use assay_core::{ValidatedValue, Value};

/// Reports a violation exactly when the field was never assigned. The one
/// handler that does not skip uninitialized values.
#[derive(Debug, Clone, Default)]
pub struct InitializedValidator;

impl ConstraintValidator for InitializedValidator {
    fn validate(
        &self,
        value: &ValidatedValue,
        constraint: &dyn Constraint,
    ) -> HandlerResult<ViolationList> {
        let constraint = expect_constraint::<Initialized>(constraint, "Initialized")?;

        let mut violations = ViolationList::new();
        if !value.is_initialized() {
            violations.push(Violation::new(
                Value::Null,
                &constraint.message,
                value.path(),
            ));
        }

        Ok(violations)
    }
}
