//! Handler resolution.

use crate::{
    ConstraintValidator, HandlerRegistry, InstantiateError, InstantiateResult, ParamSpec,
    ParamType, Service, ServiceLocator,
};
use assay_constraint::HandlerId;
use std::sync::Arc;

/// Resolves a `HandlerId` to a handler instance.
///
/// The locator, when configured, is consulted first and short-circuits the
/// registry entirely. Otherwise the registry's construction metadata is
/// used, with a strict "default value or explicit locator entry, nothing
/// else" policy per constructor parameter: the instantiator never guesses
/// and never uses a value of the wrong declared type.
pub struct Instantiator {
    registry: HandlerRegistry,
    locator: Option<Arc<dyn ServiceLocator>>,
}

impl Instantiator {
    /// Create an instantiator without a locator.
    pub fn new(registry: HandlerRegistry) -> Self {
        Self {
            registry,
            locator: None,
        }
    }

    /// Create an instantiator consulting a locator first.
    pub fn with_locator(registry: HandlerRegistry, locator: Arc<dyn ServiceLocator>) -> Self {
        Self {
            registry,
            locator: Some(locator),
        }
    }

    /// Resolve a handler instance.
    pub fn instantiate(&self, id: &HandlerId) -> InstantiateResult<Arc<dyn ConstraintValidator>> {
        if let Some(locator) = &self.locator {
            if locator.has(id.name()) {
                return Self::handler_from_locator(locator.as_ref(), id);
            }
        }

        let spec = self
            .registry
            .get(id)
            .ok_or_else(|| InstantiateError::unknown_handler(id.name()))?;

        let mut args = Vec::with_capacity(spec.params().len());
        for param in spec.params() {
            args.push(self.resolve_param(id.name(), param)?);
        }

        let handler = spec.construct(&args)?;
        Ok(Arc::from(handler))
    }

    fn handler_from_locator(
        locator: &dyn ServiceLocator,
        id: &HandlerId,
    ) -> InstantiateResult<Arc<dyn ConstraintValidator>> {
        let service = locator
            .get(id.name())
            .ok_or_else(|| InstantiateError::unknown_handler(id.name()))?;

        service
            .downcast_ref::<Arc<dyn ConstraintValidator>>()
            .cloned()
            .ok_or_else(|| InstantiateError::not_a_validator(id.name()))
    }

    fn resolve_param(&self, handler: &str, param: &ParamSpec) -> InstantiateResult<Service> {
        match &param.ty {
            ParamType::Unresolved(declared) => param.default.clone().ok_or_else(|| {
                InstantiateError::non_concrete_parameter(handler, &param.name, declared)
            }),
            ParamType::BuiltIn(_) => param
                .default
                .clone()
                .ok_or_else(|| InstantiateError::built_in_parameter(handler, &param.name)),
            ParamType::Named(ty) => match &self.locator {
                Some(locator) if locator.has(ty) => locator.get(ty).ok_or_else(|| {
                    InstantiateError::missing_service(handler, &param.name, ty)
                }),
                _ => Err(InstantiateError::missing_service(handler, &param.name, ty)),
            },
        }
    }
}
