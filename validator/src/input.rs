//! Input argument validation for the public entry point.

use crate::{ValidateError, ValidateResult};
use assay_core::Value;

/// Reject anything that is not an object or a list of objects, before any
/// traversal happens.
pub(crate) fn validate_values(values: &Value) -> ValidateResult<()> {
    match values {
        Value::Object(_) => Ok(()),
        Value::List(items) => {
            for item in items {
                if !item.is_object() {
                    return Err(ValidateError::unsupported_input(item.type_name()));
                }
            }
            Ok(())
        }
        other => Err(ValidateError::unsupported_input(other.type_name())),
    }
}
