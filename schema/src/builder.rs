//! SchemaBuilder for constructing an immutable Schema.

use crate::{FieldDef, Schema, TypeDef};
use assay_constraint::Constraint;
use std::collections::HashMap;
use std::sync::Arc;

use thiserror::Error;

/// Errors that can occur during schema construction.
#[derive(Debug, Error)]
pub enum SchemaError {
    #[error("Duplicate type name: {0}")]
    DuplicateTypeName(String),

    #[error("Duplicate field name: {field} on type {type_name}")]
    DuplicateFieldName { type_name: String, field: String },
}

/// Builder for constructing an immutable Schema.
#[derive(Default)]
pub struct SchemaBuilder {
    /// Types being built.
    types: HashMap<String, TypeDef>,
}

impl SchemaBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a type declaration.
    pub fn add_type(&mut self, name: impl Into<String>) -> TypeBuilder<'_> {
        TypeBuilder {
            builder: self,
            def: TypeDef::new(name),
        }
    }

    /// Build the immutable Schema.
    pub fn build(self) -> Schema {
        Schema::new(self.types)
    }
}

/// Builder for a type declaration.
pub struct TypeBuilder<'a> {
    builder: &'a mut SchemaBuilder,
    def: TypeDef,
}

impl<'a> TypeBuilder<'a> {
    /// Attach a class-level constraint.
    pub fn constraint(mut self, constraint: Arc<dyn Constraint>) -> Self {
        self.def.constraints.push(constraint);
        self
    }

    /// Declare a field with its constraints. Fields are visited in the
    /// order they are declared here.
    pub fn field(
        mut self,
        name: impl Into<String>,
        constraints: Vec<Arc<dyn Constraint>>,
    ) -> Self {
        self.def.fields.push(FieldDef::new(name, constraints));
        self
    }

    /// Finish building this type.
    pub fn done(self) -> Result<(), SchemaError> {
        // Check for duplicate type name
        if self.builder.types.contains_key(&self.def.name) {
            return Err(SchemaError::DuplicateTypeName(self.def.name));
        }

        // Check for duplicate field names
        for (i, field) in self.def.fields.iter().enumerate() {
            if self.def.fields[..i].iter().any(|f| f.name == field.name) {
                return Err(SchemaError::DuplicateFieldName {
                    type_name: self.def.name.clone(),
                    field: field.name.clone(),
                });
            }
        }

        self.builder.types.insert(self.def.name.clone(), self.def);
        Ok(())
    }
}
