//! Assay Constraints
//!
//! Declarative validation rules and the violations they produce.
//!
//! Responsibilities:
//! - The `Constraint` capability and the `HandlerId` key it maps to
//! - The built-in constraint catalogue (`assert`)
//! - Constraint configuration checking at construction time
//! - Violation records and ordered violation lists

pub mod assert;
mod constraint;
mod error;
mod violation;

pub use constraint::{Constraint, HandlerId};
pub use error::{ConfigurationError, ConfigurationResult};
pub use violation::{Violation, ViolationList};
