//! Assay Core Types
//!
//! This crate provides the foundational types used throughout the Assay
//! validation engine:
//! - Value types (the Value enum with scalar and nested variants)
//! - The dynamic Instance object model with per-field initialization state
//! - ValidatedValue, the immutable carrier handed to constraint handlers

mod instance;
mod validated;
mod value;

pub use instance::*;
pub use validated::*;
pub use value::*;
