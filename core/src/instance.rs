//! The dynamic object model.
//!
//! An `Instance` is one object visited during validation: a type name plus a
//! map of field values. A field that was never assigned is absent from the
//! map, which is not the same thing as a field explicitly set to null.

use crate::Value;
use std::collections::HashMap;

/// Type alias for field storage.
pub type Fields = HashMap<String, Value>;

/// Initialization state of a single field.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldState<'a> {
    /// The field was never assigned a value.
    Uninitialized,
    /// The field holds a value (possibly an explicit null).
    Set(&'a Value),
}

impl<'a> FieldState<'a> {
    /// Returns true if the field was assigned a value.
    pub fn is_initialized(&self) -> bool {
        matches!(self, FieldState::Set(_))
    }

    /// The field's value, if initialized.
    pub fn value(&self) -> Option<&'a Value> {
        match self {
            FieldState::Set(value) => Some(value),
            FieldState::Uninitialized => None,
        }
    }
}

/// One object in the validated graph.
#[derive(Debug, Clone, PartialEq)]
pub struct Instance {
    type_name: String,
    fields: Fields,
}

impl Instance {
    /// Create an instance with no initialized fields.
    pub fn new(type_name: impl Into<String>) -> Self {
        Self {
            type_name: type_name.into(),
            fields: Fields::new(),
        }
    }

    /// Create an instance from a prebuilt field map.
    pub fn with_fields(type_name: impl Into<String>, fields: Fields) -> Self {
        Self {
            type_name: type_name.into(),
            fields,
        }
    }

    /// Assign a field value, consuming and returning the instance.
    pub fn set(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.fields.insert(name.into(), value.into());
        self
    }

    /// The instance's type name.
    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    /// The field's value, if it was ever assigned.
    pub fn field(&self, name: &str) -> Option<&Value> {
        self.fields.get(name)
    }

    /// The initialization state of a field.
    pub fn field_state(&self, name: &str) -> FieldState<'_> {
        match self.fields.get(name) {
            Some(value) => FieldState::Set(value),
            None => FieldState::Uninitialized,
        }
    }
}

/// Helper macro to create field maps.
#[macro_export]
macro_rules! fields {
    () => {
        std::collections::HashMap::new()
    };
    ($($key:expr => $value:expr),+ $(,)?) => {
        {
            let mut map = std::collections::HashMap::new();
            $(
                map.insert($key.to_string(), $crate::Value::from($value));
            )+
            map
        }
    };
}
