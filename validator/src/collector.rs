//! Rule collection.
//!
//! Turns "a value plus optionally an explicit constraint list" into a flat
//! list of (value, constraints) rules, expanding cascades and computing
//! error paths. Rules come out in declaration order: class-level constraints
//! before field constraints, fields in declared order, cascaded sub-rules
//! spliced in at the point their parent field is visited (depth-first,
//! pre-order).
//!
//! The traversal runs on an explicit task stack rather than call-stack
//! recursion; a frame depth counter bounds how far cascade chains may
//! descend.

use crate::{Rule, ValidateError, ValidateResult};
use assay_constraint::{Constraint, HandlerId};
use assay_core::{Instance, ValidatedValue, Value};
use assay_handler::validators::CascadeValidator;
use assay_handler::ConstraintValidator;
use assay_schema::MetadataProvider;
use std::sync::Arc;

/// How many cascade levels a single collection may descend.
pub const MAX_NESTING: usize = 64;

/// One pending unit of traversal work.
enum Task<'a> {
    /// Append a finished rule to the output.
    Emit(Rule),
    /// Expand one normalized group of elements.
    Frame {
        elements: Vec<&'a Instance>,
        is_iterable: bool,
        constraints: Vec<Arc<dyn Constraint>>,
        prefix: Option<String>,
        depth: usize,
    },
}

/// The traversal engine.
pub struct RuleCollector<'p> {
    provider: &'p dyn MetadataProvider,
}

impl<'p> RuleCollector<'p> {
    /// Create a collector over a metadata source.
    pub fn new(provider: &'p dyn MetadataProvider) -> Self {
        Self { provider }
    }

    /// Collect the flat rule list for a value (or list of values) and an
    /// optional explicit constraint list. Fails atomically: on any error no
    /// partial rule list is returned.
    pub fn collect(
        &self,
        values: &Value,
        constraints: &[Arc<dyn Constraint>],
    ) -> ValidateResult<Vec<Rule>> {
        let (elements, is_iterable) = normalize(values)?;

        let mut rules = Vec::new();
        let mut stack = vec![Task::Frame {
            elements,
            is_iterable,
            constraints: constraints.to_vec(),
            prefix: None,
            depth: 0,
        }];

        while let Some(task) = stack.pop() {
            match task {
                Task::Emit(rule) => rules.push(rule),
                Task::Frame {
                    elements,
                    is_iterable,
                    constraints,
                    prefix,
                    depth,
                } => {
                    let tasks = if constraints.is_empty() {
                        self.expand_declared(&elements, is_iterable, prefix.as_deref(), depth)?
                    } else {
                        expand_explicit(&elements, &constraints, depth)
                    };

                    // Reversed so the stack pops them in declaration order.
                    for task in tasks.into_iter().rev() {
                        stack.push(task);
                    }
                }
            }
        }

        Ok(rules)
    }

    /// Reflection mode: pair every element with its declared metadata.
    fn expand_declared<'a>(
        &self,
        elements: &[&'a Instance],
        is_iterable: bool,
        prefix: Option<&str>,
        depth: usize,
    ) -> ValidateResult<Vec<Task<'a>>> {
        let mut tasks = Vec::new();

        for (index, instance) in elements.iter().enumerate() {
            let element_prefix = compute_prefix(prefix, is_iterable, index, instance.type_name());

            for constraint in self.provider.constraints_of(instance.type_name()) {
                tasks.push(Task::Emit(Rule::new(
                    ValidatedValue::new(Value::Object((*instance).clone()), &element_prefix),
                    vec![Arc::clone(constraint)],
                )));
            }

            for field in self.provider.fields_of(instance.type_name()) {
                let field_path = format!("{}.{}", element_prefix, field.name);
                let state = instance.field_state(&field.name);

                for constraint in &field.constraints {
                    let validated = match state.value() {
                        Some(value) => ValidatedValue::new(value.clone(), &field_path),
                        None => ValidatedValue::uninitialized(&field_path),
                    };

                    if constraint.handler() == HandlerId::Cascade {
                        // Shape check up front; descending past the limit
                        // must fail before any rules are returned.
                        CascadeValidator.validate(&validated, constraint.as_ref())?;

                        if let Some(value) = state.value() {
                            if depth >= MAX_NESTING {
                                return Err(ValidateError::nesting_too_deep(
                                    MAX_NESTING,
                                    &field_path,
                                ));
                            }
                            let (elements, is_iterable) = normalize(value)?;
                            tasks.push(Task::Frame {
                                elements,
                                is_iterable,
                                constraints: Vec::new(),
                                prefix: Some(field_path.clone()),
                                depth: depth + 1,
                            });
                        }
                        continue;
                    }

                    tasks.push(Task::Emit(Rule::new(validated, vec![Arc::clone(constraint)])));
                }
            }
        }

        Ok(tasks)
    }
}

/// Explicit-constraints mode: one rule per element carrying the supplied
/// list - unless the list contains a Cascade, which discards the supplied
/// constraints entirely and walks the element's own declared metadata.
fn expand_explicit<'a>(
    elements: &[&'a Instance],
    constraints: &[Arc<dyn Constraint>],
    depth: usize,
) -> Vec<Task<'a>> {
    let has_cascade = constraints
        .iter()
        .any(|c| c.handler() == HandlerId::Cascade);

    let mut tasks = Vec::new();
    for &instance in elements {
        if has_cascade {
            tasks.push(Task::Frame {
                elements: vec![instance],
                is_iterable: false,
                constraints: Vec::new(),
                prefix: None,
                depth,
            });
        } else {
            tasks.push(Task::Emit(Rule::new(
                ValidatedValue::new(Value::Object(instance.clone()), instance.type_name()),
                constraints.to_vec(),
            )));
        }
    }
    tasks
}

/// Treat the input as an ordered element sequence, remembering whether it
/// was iterable (this affects path formatting).
fn normalize(values: &Value) -> ValidateResult<(Vec<&Instance>, bool)> {
    match values {
        Value::Object(instance) => Ok((vec![instance], false)),
        Value::List(items) => {
            let mut elements = Vec::with_capacity(items.len());
            for item in items {
                match item {
                    Value::Object(instance) => elements.push(instance),
                    other => return Err(ValidateError::unsupported_input(other.type_name())),
                }
            }
            Ok((elements, true))
        }
        other => Err(ValidateError::unsupported_input(other.type_name())),
    }
}

fn compute_prefix(prefix: Option<&str>, is_iterable: bool, index: usize, type_name: &str) -> String {
    match (prefix, is_iterable) {
        (Some(prefix), true) => format!("{}[{}]", prefix, index),
        (Some(prefix), false) => prefix.to_string(),
        (None, true) => format!("[{}]", index),
        (None, false) => type_name.to_string(),
    }
}
