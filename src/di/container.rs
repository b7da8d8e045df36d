use crate::di::DependencyResolver;
use crate::error::{DepwireError, Result};
use crate::reflect::TypeRegistry;
use crate::value::Value;
use dashmap::DashMap;
use std::any::Any;
use std::sync::Arc;

/// Thread-safe container of values keyed by service id.
#[derive(Clone, Default)]
pub struct Container {
    services: DashMap<String, ServiceEntry>,
}

#[derive(Clone)]
struct ServiceEntry {
    value: Value,
}

impl Container {
    pub fn new() -> Self {
        Self {
            services: DashMap::new(),
        }
    }

    pub fn register(&mut self, id: impl Into<String>, value: impl Into<Value>) -> &mut Self {
        let id = id.into();
        tracing::debug!("Registering service: {}", id);
        self.services.insert(
            id,
            ServiceEntry {
                value: value.into(),
            },
        );
        self
    }

    /// Register `instance` as an object of `class` under the id `class`.
    ///
    /// # Errors
    /// Returns `NotFound` if `class` is not in `registry`.
    pub fn register_instance<T: Any + Send + Sync>(
        &mut self,
        registry: &TypeRegistry,
        class: &str,
        instance: T,
    ) -> Result<&mut Self> {
        let object = registry.object(class, instance)?;
        Ok(self.register(class, object))
    }

    /// Register a shared instance of `class` under a different id, e.g. an interface name.
    pub fn alias<T: Any + Send + Sync>(
        &mut self,
        registry: &TypeRegistry,
        id: impl Into<String>,
        class: &str,
        instance: Arc<T>,
    ) -> Result<&mut Self> {
        let object = registry.object_from_arc(class, instance)?;
        Ok(self.register(id, object))
    }

    pub fn contains(&self, id: &str) -> bool {
        self.services.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.services.len()
    }

    pub fn is_empty(&self) -> bool {
        self.services.is_empty()
    }
}

impl DependencyResolver for Container {
    fn has(&self, id: &str) -> bool {
        self.contains(id)
    }

    fn get(&self, id: &str) -> Result<Value> {
        self.services
            .get(id)
            .map(|entry| entry.value.clone())
            .ok_or_else(|| DepwireError::not_found(id))
    }
}
