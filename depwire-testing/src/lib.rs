//! Test support for code built on `depwire`.

use dashmap::DashMap;
use depwire::{
    ClassSignature, DefinitionExtractor, DependencyResolver, DepwireError, Result, TypeRegistry,
    Value,
};
use std::sync::{Arc, Once};

type Factory = Box<dyn Fn(&str) -> Result<Value> + Send + Sync>;

/// In-memory container backed by a map, with an optional fallback factory.
///
/// Values produced by the factory are cached, so repeated `get` calls return
/// the same instance.
pub struct SimpleContainer {
    definitions: DashMap<String, Value>,
    factory: Option<Factory>,
}

impl SimpleContainer {
    pub fn new<I, K, V>(definitions: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<Value>,
    {
        Self {
            definitions: definitions
                .into_iter()
                .map(|(id, value)| (id.into(), value.into()))
                .collect(),
            factory: None,
        }
    }

    pub fn empty() -> Self {
        Self::new(Vec::<(String, Value)>::new())
    }

    /// Called for ids missing from the map. Returning `NotFound` makes `has` false.
    pub fn with_factory<F>(mut self, factory: F) -> Self
    where
        F: Fn(&str) -> Result<Value> + Send + Sync + 'static,
    {
        self.factory = Some(Box::new(factory));
        self
    }
}

impl DependencyResolver for SimpleContainer {
    /// Factory failures other than `NotFound` count as present, so the
    /// following `get` reports them.
    fn has(&self, id: &str) -> bool {
        !matches!(self.get(id), Err(DepwireError::NotFound { .. }))
    }

    fn get(&self, id: &str) -> Result<Value> {
        if let Some(value) = self.definitions.get(id) {
            return Ok(value.clone());
        }
        let factory = self
            .factory
            .as_ref()
            .ok_or_else(|| DepwireError::not_found(id))?;
        let value = factory(id)?;
        self.definitions.insert(id.to_string(), value.clone());
        Ok(value)
    }
}

pub struct TestHelper;

impl TestHelper {
    pub fn registry<I: IntoIterator<Item = ClassSignature>>(classes: I) -> Arc<TypeRegistry> {
        let registry = TypeRegistry::new();
        for class in classes {
            registry.register(class);
        }
        Arc::new(registry)
    }

    pub fn extractor<I>(classes: I) -> DefinitionExtractor
    where
        I: IntoIterator<Item = ClassSignature>,
    {
        DefinitionExtractor::new(Self::registry(classes))
    }

    pub fn create_dependency_resolver(
        container: impl DependencyResolver + 'static,
    ) -> Arc<dyn DependencyResolver> {
        Arc::new(container)
    }

    /// Route `tracing` output through the test harness. Safe to call repeatedly.
    pub fn init_tracing() {
        static INIT: Once = Once::new();
        INIT.call_once(|| {
            let _ = tracing_subscriber::fmt()
                .with_test_writer()
                .with_max_level(tracing_subscriber::filter::LevelFilter::TRACE)
                .try_init();
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_has() {
        assert!(!SimpleContainer::empty().has("test"));
        assert!(SimpleContainer::new([("test", 1)]).has("test"));
    }

    #[test]
    fn test_factory_results_are_cached() {
        let container = SimpleContainer::empty().with_factory(|id| {
            if id == "answer" {
                Ok(Value::from(42))
            } else {
                Err(DepwireError::not_found(id))
            }
        });
        assert!(container.has("answer"));
        assert!(!container.has("question"));
        assert_eq!(container.get("answer").unwrap(), Value::Integer(42));
    }

    #[test]
    fn test_factory_failure_is_not_absence() {
        let container = SimpleContainer::empty()
            .with_factory(|_| Err(DepwireError::invalid_config("broken factory")));
        assert!(container.has("Engine"));
        assert!(matches!(
            container.get("Engine"),
            Err(DepwireError::InvalidConfig { message }) if message == "broken factory"
        ));
    }

    #[test]
    fn test_get_missing() {
        assert!(matches!(
            SimpleContainer::empty().get("non-exists"),
            Err(DepwireError::NotFound { .. })
        ));
    }
}
