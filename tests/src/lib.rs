//! Integration test support for Assay.
//!
//! Shared fixtures (schemas, instances, custom constraints) used by the
//! black-box scenarios under `tests/`.

pub mod fixtures;

/// Everything a scenario needs in one import.
pub mod prelude {
    pub use crate::fixtures::*;
    pub use assay_constraint::assert::{
        Cascade, Count, GreaterThan, Initialized, Length, LessThan, Negative, NotBlank, Positive,
        Range, Regex,
    };
    pub use assay_constraint::{Constraint, HandlerId, Violation, ViolationList};
    pub use assay_core::{Instance, ValidatedValue, Value};
    pub use assay_handler::{
        ConstraintValidator, HandlerRegistry, HandlerSpec, Instantiator, MapLocator, ParamSpec,
        ServiceLocator,
    };
    pub use assay_schema::{MetadataProvider, Schema, SchemaBuilder};
    pub use assay_validator::{ValidateError, Validator};
    pub use std::sync::Arc;
}
