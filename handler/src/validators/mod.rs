//! The built-in handler catalogue.
//!
//! Handlers check `is_initialized` themselves: an uninitialized value is
//! skipped by every handler except `InitializedValidator`, which exists to
//! report exactly that.

mod cascade;
mod comparison;
mod count;
mod initialized;
mod length;
mod not_blank;
mod range;
mod regex;

pub use cascade::CascadeValidator;
pub use comparison::{
    GreaterThanValidator, LessThanValidator, NegativeValidator, PositiveValidator,
};
pub use count::CountValidator;
pub use initialized::InitializedValidator;
pub use length::LengthValidator;
pub use not_blank::NotBlankValidator;
pub use range::RangeValidator;
pub use regex::RegexValidator;
