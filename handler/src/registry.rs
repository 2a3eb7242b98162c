//! The handler registry.
//!
//! Maps a `HandlerId` to explicit construction metadata: the constructor
//! parameters a handler declares and a closure that builds it from resolved
//! arguments. This is the engine's stand-in for runtime reflection - a
//! handler kind the registry does not know simply does not exist.

use crate::validators::{
    CascadeValidator, CountValidator, GreaterThanValidator, InitializedValidator, LengthValidator,
    LessThanValidator, NegativeValidator, NotBlankValidator, PositiveValidator, RangeValidator,
    RegexValidator,
};
use crate::{ConstraintValidator, InstantiateError, InstantiateResult, Service};
use assay_constraint::HandlerId;
use std::any::Any;
use std::collections::HashMap;
use std::sync::Arc;

/// Declared type of a constructor parameter.
#[derive(Debug, Clone)]
pub enum ParamType {
    /// A single concrete named type, resolvable through the locator.
    Named(String),
    /// A language built-in (Int, String, ...), never resolvable.
    BuiltIn(String),
    /// Absent, union, or otherwise unresolvable; the string describes what
    /// was declared, for error messages.
    Unresolved(String),
}

/// One declared constructor parameter.
#[derive(Clone)]
pub struct ParamSpec {
    /// Parameter name.
    pub name: String,
    /// Declared type.
    pub ty: ParamType,
    /// Default value, used where the resolution policy allows it.
    pub default: Option<Service>,
}

impl ParamSpec {
    /// A parameter of a concrete named type.
    pub fn named(name: impl Into<String>, ty: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty: ParamType::Named(ty.into()),
            default: None,
        }
    }

    /// A parameter of a built-in type.
    pub fn builtin(name: impl Into<String>, ty: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty: ParamType::BuiltIn(ty.into()),
            default: None,
        }
    }

    /// A parameter with an absent or non-concrete declared type.
    pub fn unresolved(name: impl Into<String>, declared: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty: ParamType::Unresolved(declared.into()),
            default: None,
        }
    }

    /// Attach a default value.
    pub fn with_default<T: Any + Send + Sync>(mut self, value: T) -> Self {
        self.default = Some(Arc::new(value));
        self
    }
}

type ConstructFn =
    Box<dyn Fn(&[Service]) -> InstantiateResult<Box<dyn ConstraintValidator>> + Send + Sync>;

/// Construction metadata for one handler kind.
pub struct HandlerSpec {
    params: Vec<ParamSpec>,
    construct: ConstructFn,
}

impl HandlerSpec {
    /// Create a spec from a construction closure. The closure receives the
    /// resolved arguments in parameter declaration order.
    pub fn new(
        construct: impl Fn(&[Service]) -> InstantiateResult<Box<dyn ConstraintValidator>>
            + Send
            + Sync
            + 'static,
    ) -> Self {
        Self {
            params: Vec::new(),
            construct: Box::new(construct),
        }
    }

    /// Declare a constructor parameter. Parameters are resolved in the
    /// order they are declared here.
    pub fn param(mut self, param: ParamSpec) -> Self {
        self.params.push(param);
        self
    }

    /// The declared parameters.
    pub fn params(&self) -> &[ParamSpec] {
        &self.params
    }

    /// Build the handler from resolved arguments.
    pub fn construct(&self, args: &[Service]) -> InstantiateResult<Box<dyn ConstraintValidator>> {
        (self.construct)(args)
    }
}

/// Downcast a resolved argument to the concrete type a construction closure
/// declared. Failing here means the locator supplied a value of the wrong
/// declared type, which must never be used.
pub fn expect_arg<T: Any + Send + Sync>(
    args: &[Service],
    index: usize,
    handler: &str,
    parameter: &str,
) -> InstantiateResult<Arc<T>> {
    args.get(index)
        .cloned()
        .and_then(|arg| arg.downcast::<T>().ok())
        .ok_or_else(|| InstantiateError::construction_failed(handler, parameter))
}

/// Registry of handler construction metadata.
pub struct HandlerRegistry {
    specs: HashMap<HandlerId, HandlerSpec>,
}

impl HandlerRegistry {
    /// Create a registry with every built-in handler registered.
    pub fn new() -> Self {
        let mut registry = Self::empty();
        registry.register(
            HandlerId::Cascade,
            HandlerSpec::new(|_| Ok(Box::new(CascadeValidator))),
        );
        registry.register(
            HandlerId::Count,
            HandlerSpec::new(|_| Ok(Box::new(CountValidator))),
        );
        registry.register(
            HandlerId::GreaterThan,
            HandlerSpec::new(|_| Ok(Box::new(GreaterThanValidator))),
        );
        registry.register(
            HandlerId::Initialized,
            HandlerSpec::new(|_| Ok(Box::new(InitializedValidator))),
        );
        registry.register(
            HandlerId::Length,
            HandlerSpec::new(|_| Ok(Box::new(LengthValidator))),
        );
        registry.register(
            HandlerId::LessThan,
            HandlerSpec::new(|_| Ok(Box::new(LessThanValidator))),
        );
        registry.register(
            HandlerId::Negative,
            HandlerSpec::new(|_| Ok(Box::new(NegativeValidator))),
        );
        registry.register(
            HandlerId::NotBlank,
            HandlerSpec::new(|_| Ok(Box::new(NotBlankValidator))),
        );
        registry.register(
            HandlerId::Positive,
            HandlerSpec::new(|_| Ok(Box::new(PositiveValidator))),
        );
        registry.register(
            HandlerId::Range,
            HandlerSpec::new(|_| Ok(Box::new(RangeValidator))),
        );
        registry.register(
            HandlerId::Regex,
            HandlerSpec::new(|_| Ok(Box::new(RegexValidator))),
        );
        registry
    }

    /// Create a registry with no handlers.
    pub fn empty() -> Self {
        Self {
            specs: HashMap::new(),
        }
    }

    /// Register (or replace) a handler spec.
    pub fn register(&mut self, id: HandlerId, spec: HandlerSpec) {
        self.specs.insert(id, spec);
    }

    /// Look up a handler spec.
    pub fn get(&self, id: &HandlerId) -> Option<&HandlerSpec> {
        self.specs.get(id)
    }
}

impl Default for HandlerRegistry {
    fn default() -> Self {
        Self::new()
    }
}
