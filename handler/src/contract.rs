//! The constraint handler capability.

use crate::{HandlerError, HandlerResult};
use assay_constraint::{Constraint, ViolationList};
use assay_core::ValidatedValue;

/// Executable logic implementing a constraint.
///
/// `validate` is pure: every invocation returns a fresh violation list, so a
/// handler instance can be shared and reused freely.
pub trait ConstraintValidator: Send + Sync {
    /// Check one value against one constraint. Ordinary rule failures come
    /// back as violations; a constraint or value of the wrong shape is a
    /// wiring bug and comes back as an error.
    fn validate(
        &self,
        value: &ValidatedValue,
        constraint: &dyn Constraint,
    ) -> HandlerResult<ViolationList>;
}

/// Downcast a constraint to the kind a handler expects.
pub fn expect_constraint<'a, T: Constraint + 'static>(
    constraint: &'a dyn Constraint,
    expected: &'static str,
) -> HandlerResult<&'a T> {
    constraint
        .as_any()
        .downcast_ref::<T>()
        .ok_or_else(|| HandlerError::unexpected_constraint(expected, constraint.handler().name()))
}
