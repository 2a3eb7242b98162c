//! Violation records.

use assay_core::Value;

/// One reported rule failure.
#[derive(Debug, Clone, PartialEq)]
pub struct Violation {
    /// The value that failed the check.
    pub invalid_value: Value,
    /// Human-readable message configured on the constraint.
    pub message: String,
    /// Locator of the failing node, e.g. `Order.items[2].price`.
    pub path: String,
}

impl Violation {
    /// Create a new violation.
    pub fn new(invalid_value: Value, message: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            invalid_value,
            message: message.into(),
            path: path.into(),
        }
    }
}

/// Ordered, append-only collection of violations. No deduplication.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ViolationList {
    violations: Vec<Violation>,
}

impl ViolationList {
    /// Create a new empty list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a violation.
    pub fn push(&mut self, violation: Violation) {
        self.violations.push(violation);
    }

    /// Concatenate another list, preserving order.
    pub fn merge(&mut self, other: ViolationList) {
        self.violations.extend(other.violations);
    }

    /// Check if there are any violations.
    pub fn is_empty(&self) -> bool {
        self.violations.is_empty()
    }

    /// Get the number of violations.
    pub fn len(&self) -> usize {
        self.violations.len()
    }

    /// Get all violations.
    pub fn all(&self) -> &[Violation] {
        &self.violations
    }

    /// Iterate over the violations in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Violation> {
        self.violations.iter()
    }
}

impl IntoIterator for ViolationList {
    type Item = Violation;
    type IntoIter = std::vec::IntoIter<Violation>;

    fn into_iter(self) -> Self::IntoIter {
        self.violations.into_iter()
    }
}

impl<'a> IntoIterator for &'a ViolationList {
    type Item = &'a Violation;
    type IntoIter = std::slice::Iter<'a, Violation>;

    fn into_iter(self) -> Self::IntoIter {
        self.violations.iter()
    }
}

impl FromIterator<Violation> for ViolationList {
    fn from_iter<T: IntoIterator<Item = Violation>>(iter: T) -> Self {
        Self {
            violations: iter.into_iter().collect(),
        }
    }
}
