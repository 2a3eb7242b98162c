//! The constraint capability.

use std::any::Any;
use std::fmt;

/// Key identifying the handler that implements a constraint.
///
/// One variant per built-in handler kind; `Custom` is the extension point for
/// user-registered handlers.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum HandlerId {
    Cascade,
    Count,
    GreaterThan,
    Initialized,
    Length,
    LessThan,
    Negative,
    NotBlank,
    Positive,
    Range,
    Regex,
    Custom(String),
}

impl HandlerId {
    /// Stable string form, used for service-locator lookups and error
    /// messages.
    pub fn name(&self) -> &str {
        match self {
            HandlerId::Cascade => "Cascade",
            HandlerId::Count => "Count",
            HandlerId::GreaterThan => "GreaterThan",
            HandlerId::Initialized => "Initialized",
            HandlerId::Length => "Length",
            HandlerId::LessThan => "LessThan",
            HandlerId::Negative => "Negative",
            HandlerId::NotBlank => "NotBlank",
            HandlerId::Positive => "Positive",
            HandlerId::Range => "Range",
            HandlerId::Regex => "Regex",
            HandlerId::Custom(name) => name,
        }
    }
}

impl fmt::Display for HandlerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A declarative validation rule. The constraint's own fields are its
/// configuration; its only capability is naming the handler that runs it.
pub trait Constraint: Send + Sync {
    /// The handler implementing this constraint.
    fn handler(&self) -> HandlerId;

    /// Typed access for handlers, which downcast to their own constraint
    /// kind before reading configuration.
    fn as_any(&self) -> &dyn Any;
}
