//! The external service locator capability.

use crate::ConstraintValidator;
use std::any::Any;
use std::collections::HashMap;
use std::sync::Arc;

/// An untyped shared service. Handler entries wrap an
/// `Arc<dyn ConstraintValidator>`; dependency entries wrap whatever concrete
/// type the consuming handler declares.
pub type Service = Arc<dyn Any + Send + Sync>;

/// External collaborator consulted first when resolving handlers and their
/// constructor dependencies. Instance-sharing and lifetime policy are the
/// locator's own responsibility.
pub trait ServiceLocator: Send + Sync {
    /// Whether the locator knows the identifier.
    fn has(&self, id: &str) -> bool;

    /// Resolve the identifier to a service.
    fn get(&self, id: &str) -> Option<Service>;
}

/// Map-backed locator.
#[derive(Default)]
pub struct MapLocator {
    services: HashMap<String, Service>,
}

impl MapLocator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a raw service under an identifier.
    pub fn insert(&mut self, id: impl Into<String>, service: Service) {
        self.services.insert(id.into(), service);
    }

    /// Register a concrete value under an identifier.
    pub fn insert_value<T: Any + Send + Sync>(&mut self, id: impl Into<String>, value: T) {
        self.insert(id, Arc::new(value));
    }

    /// Register a shared handler instance under a handler identifier.
    pub fn insert_handler(
        &mut self,
        id: impl Into<String>,
        handler: Arc<dyn ConstraintValidator>,
    ) {
        self.insert(id, Arc::new(handler));
    }
}

impl ServiceLocator for MapLocator {
    fn has(&self, id: &str) -> bool {
        self.services.contains_key(id)
    }

    fn get(&self, id: &str) -> Option<Service> {
        self.services.get(id).cloned()
    }
}
