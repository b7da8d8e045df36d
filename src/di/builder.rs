use crate::di::Container;
use crate::error::Result;
use crate::reflect::TypeRegistry;
use crate::value::Value;
use std::any::Any;

/// Builder for constructing a container
///
/// # Example
/// ```
/// use depwire::{ClassSignature, ContainerBuilder, DependencyResolver, TypeRegistry};
///
/// struct Database;
///
/// let registry = TypeRegistry::new();
/// registry.register(ClassSignature::builder("Database").build());
///
/// let container = ContainerBuilder::new(&registry)
///     .value("db.url", "postgres://localhost")
///     .instance("Database", Database)
///     .unwrap()
///     .build();
/// assert!(container.has("Database"));
/// ```
pub struct ContainerBuilder<'r> {
    registry: &'r TypeRegistry,
    container: Container,
}

impl<'r> ContainerBuilder<'r> {
    pub fn new(registry: &'r TypeRegistry) -> Self {
        Self {
            registry,
            container: Container::new(),
        }
    }

    /// Register a plain value under `id`
    pub fn value(mut self, id: impl Into<String>, value: impl Into<Value>) -> Self {
        self.container.register(id, value);
        self
    }

    /// Register an instance of the registered class `class`
    pub fn instance<T: Any + Send + Sync>(mut self, class: &str, instance: T) -> Result<Self> {
        self.container
            .register_instance(self.registry, class, instance)?;
        Ok(self)
    }

    /// Build the container
    pub fn build(self) -> Container {
        self.container
    }
}
