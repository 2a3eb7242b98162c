//! The built-in constraint catalogue.
//!
//! Each constraint is a small immutable configuration object; the handler
//! named by its `HandlerId` implements the actual check.

mod cascade;
mod comparison;
mod count;
mod initialized;
mod length;
mod not_blank;
mod range;
mod regex;

pub use cascade::Cascade;
pub use comparison::{GreaterThan, LessThan, Negative, Positive};
pub use count::Count;
pub use initialized::Initialized;
pub use length::Length;
pub use not_blank::NotBlank;
pub use range::Range;
pub use regex::Regex;
