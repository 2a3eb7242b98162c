//! Assay Schema
//!
//! Declared constraint metadata. Single source of truth for which
//! constraints are attached to a type and to each of its fields. The schema
//! is immutable after construction via SchemaBuilder.

mod builder;
mod provider;
mod schema;
mod types;

pub use builder::{SchemaBuilder, SchemaError, TypeBuilder};
pub use provider::MetadataProvider;
pub use schema::Schema;
pub use types::{FieldDef, TypeDef};
