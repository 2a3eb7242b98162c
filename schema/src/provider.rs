//! The metadata source capability.

use crate::FieldDef;
use assay_constraint::Constraint;
use std::sync::Arc;

/// Supplies the constraint declarations attached to a type and to each of
/// its fields. The engine only consumes this; how the metadata is authored
/// is the provider's concern.
///
/// A type the provider does not know simply has no declarations: both
/// methods return empty slices.
pub trait MetadataProvider: Send + Sync {
    /// Constraints attached to the type itself, in declaration order.
    fn constraints_of(&self, type_name: &str) -> &[Arc<dyn Constraint>];

    /// Field declarations of the type, in declaration order.
    fn fields_of(&self, type_name: &str) -> &[FieldDef];
}
