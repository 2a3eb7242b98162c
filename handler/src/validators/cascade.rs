//! The cascade shape check.

use crate::{expect_constraint, ConstraintValidator, HandlerError, HandlerResult};
use assay_constraint::assert::Cascade;
use assay_constraint::{Constraint, ViolationList};
use assay_core::{ValidatedValue, Value};

/// Checks that a cascade target has a shape the traversal can descend into:
/// an object, or a list of objects. Never emits a business violation -
/// descending is the rule collector's job, not the handler's.
#[derive(Debug, Clone, Default)]
pub struct CascadeValidator;

impl ConstraintValidator for CascadeValidator {
    fn validate(
        &self,
        value: &ValidatedValue,
        constraint: &dyn Constraint,
    ) -> HandlerResult<ViolationList> {
        expect_constraint::<Cascade>(constraint, "Cascade")?;

        if !value.is_initialized() {
            return Ok(ViolationList::new());
        }

        match value.value() {
            Value::Object(_) => Ok(ViolationList::new()),
            Value::List(items) => {
                for item in items {
                    if !item.is_object() {
                        return Err(HandlerError::unexpected_value(
                            value.path(),
                            "Object",
                            item.type_name(),
                        ));
                    }
                }
                Ok(ViolationList::new())
            }
            other => Err(HandlerError::unexpected_value(
                value.path(),
                "Object|List",
                other.type_name(),
            )),
        }
    }
}
