//! Schema definition types.

use assay_constraint::Constraint;
use std::sync::Arc;

/// Field declaration within a type: the field's name and the constraints
/// attached to it, in declaration order.
#[derive(Clone)]
pub struct FieldDef {
    /// Field name.
    pub name: String,
    /// Constraints attached to the field.
    pub constraints: Vec<Arc<dyn Constraint>>,
}

impl FieldDef {
    pub fn new(name: impl Into<String>, constraints: Vec<Arc<dyn Constraint>>) -> Self {
        Self {
            name: name.into(),
            constraints,
        }
    }
}

/// Type declaration: class-level constraints plus field declarations, both
/// in declaration order. Rule ordering during traversal depends on it.
#[derive(Clone)]
pub struct TypeDef {
    /// Type name.
    pub name: String,
    /// Constraints attached to the type itself.
    pub constraints: Vec<Arc<dyn Constraint>>,
    /// Field declarations, in declaration order.
    pub fields: Vec<FieldDef>,
}

impl TypeDef {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            constraints: Vec::new(),
            fields: Vec::new(),
        }
    }

    /// Get a field declaration by name.
    pub fn get_field(&self, name: &str) -> Option<&FieldDef> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Check if this type declares a field.
    pub fn has_field(&self, name: &str) -> bool {
        self.get_field(name).is_some()
    }
}
