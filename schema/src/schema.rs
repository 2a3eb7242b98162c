//! The Schema - immutable constraint metadata lookup.

use crate::{FieldDef, MetadataProvider, TypeDef};
use assay_constraint::Constraint;
use std::collections::HashMap;
use std::sync::Arc;

/// The Schema provides runtime lookup of constraint declarations.
/// It is immutable after construction.
pub struct Schema {
    /// Type declarations by name.
    types: HashMap<String, TypeDef>,
}

impl Schema {
    pub(crate) fn new(types: HashMap<String, TypeDef>) -> Self {
        Self { types }
    }

    /// Get a type declaration by name.
    pub fn get_type(&self, name: &str) -> Option<&TypeDef> {
        self.types.get(name)
    }

    /// Check if a type is declared.
    pub fn has_type(&self, name: &str) -> bool {
        self.types.contains_key(name)
    }

    /// Number of declared types.
    pub fn len(&self) -> usize {
        self.types.len()
    }

    /// Whether the schema declares no types.
    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}

impl MetadataProvider for Schema {
    fn constraints_of(&self, type_name: &str) -> &[Arc<dyn Constraint>] {
        self.types
            .get(type_name)
            .map(|t| t.constraints.as_slice())
            .unwrap_or(&[])
    }

    fn fields_of(&self, type_name: &str) -> &[FieldDef] {
        self.types
            .get(type_name)
            .map(|t| t.fields.as_slice())
            .unwrap_or(&[])
    }
}
