//! Assay Handlers
//!
//! Executable constraint logic and the machinery that resolves a
//! `HandlerId` to a handler instance.
//!
//! Responsibilities:
//! - The `ConstraintValidator` capability (pure, value-returning)
//! - The built-in handler catalogue (`validators`)
//! - The handler registry with explicit constructor metadata
//! - The optional service locator and the instantiation algorithm

mod contract;
mod error;
mod instantiator;
mod locator;
mod registry;
pub mod validators;

pub use contract::{expect_constraint, ConstraintValidator};
pub use error::{HandlerError, HandlerResult, InstantiateError, InstantiateResult};
pub use instantiator::Instantiator;
pub use locator::{MapLocator, Service, ServiceLocator};
pub use registry::{expect_arg, HandlerRegistry, HandlerSpec, ParamSpec, ParamType};
