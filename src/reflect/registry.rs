use super::signature::ClassSignature;
use crate::error::{DepwireError, Result};
use crate::value::Object;
use dashmap::DashMap;
use indexmap::IndexSet;
use std::any::Any;
use std::sync::Arc;

/// Types that can describe their own constructor.
///
/// Usually implemented via `#[derive(Injectable)]`.
pub trait Reflect {
    fn class_signature() -> ClassSignature;
}

/// Thread-safe registry of class metadata, keyed by class name.
#[derive(Clone, Default)]
pub struct TypeRegistry {
    classes: DashMap<String, Arc<ClassSignature>>,
}

impl TypeRegistry {
    pub fn new() -> Self {
        Self {
            classes: DashMap::new(),
        }
    }

    pub fn register(&self, signature: ClassSignature) -> &Self {
        tracing::debug!("Registering class signature: {}", signature.name());
        self.classes
            .insert(signature.name().to_string(), Arc::new(signature));
        self
    }

    pub fn register_reflect<T: Reflect>(&self) -> &Self {
        self.register(T::class_signature())
    }

    pub fn get(&self, name: &str) -> Option<Arc<ClassSignature>> {
        self.classes.get(name).map(|entry| entry.value().clone())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.classes.contains_key(name)
    }

    pub fn is_instantiable(&self, name: &str) -> bool {
        self.get(name).is_some_and(|class| class.is_instantiable())
    }

    /// The class itself, followed by its parents and every interface they
    /// implement, each listed once. Names missing from the registry are kept
    /// but not expanded.
    pub fn lineage(&self, name: &str) -> Result<Vec<String>> {
        if !self.contains(name) {
            return Err(DepwireError::not_found(name));
        }

        let mut seen = IndexSet::new();
        let mut pending = vec![name.to_string()];
        while let Some(current) = pending.pop() {
            if !seen.insert(current.clone()) {
                continue;
            }
            if let Some(class) = self.get(&current) {
                // Pushed in reverse so the parent is visited before interfaces.
                pending.extend(class.interfaces().iter().rev().cloned());
                pending.extend(class.parent().map(str::to_string));
            }
        }
        Ok(seen.into_iter().collect())
    }

    pub fn is_subtype(&self, child: &str, parent: &str) -> bool {
        self.lineage(child)
            .map(|lineage| lineage.iter().any(|name| name == parent))
            .unwrap_or(false)
    }

    /// Wrap `instance` as an object of the registered class `name`.
    pub fn object<T: Any + Send + Sync>(&self, name: &str, instance: T) -> Result<Object> {
        self.object_from_arc(name, Arc::new(instance))
    }

    pub fn object_from_arc(
        &self,
        name: &str,
        instance: Arc<dyn Any + Send + Sync>,
    ) -> Result<Object> {
        Ok(Object::with_lineage(self.lineage(name)?, instance))
    }

    pub fn len(&self) -> usize {
        self.classes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registry() -> TypeRegistry {
        let registry = TypeRegistry::new();
        registry
            .register(ClassSignature::builder("Vehicle").interface().build())
            .register(
                ClassSignature::builder("Electric")
                    .interface()
                    .implements("Vehicle")
                    .build(),
            )
            .register(ClassSignature::builder("Engine").abstract_class().build())
            .register(
                ClassSignature::builder("ElectricEngine")
                    .extends("Engine")
                    .implements("Electric")
                    .build(),
            );
        registry
    }

    #[test]
    fn test_lineage_includes_parents_and_interfaces() {
        let registry = registry();
        let lineage = registry.lineage("ElectricEngine").unwrap();
        assert_eq!(lineage, vec!["ElectricEngine", "Engine", "Electric", "Vehicle"]);
        assert!(registry.is_subtype("ElectricEngine", "Vehicle"));
        assert!(!registry.is_subtype("Engine", "Vehicle"));
    }

    #[test]
    fn test_lineage_of_unknown_class() {
        let registry = registry();
        assert!(matches!(
            registry.lineage("Boat"),
            Err(DepwireError::NotFound { .. })
        ));
        assert!(!registry.is_subtype("Boat", "Vehicle"));
    }

    #[test]
    fn test_object_carries_lineage() {
        let registry = registry();
        let object = registry.object("ElectricEngine", 42u32).unwrap();
        assert_eq!(object.class(), "ElectricEngine");
        assert!(object.is_instance_of("Engine"));
        assert!(object.is_instance_of("Vehicle"));
        assert_eq!(*object.downcast::<u32>().unwrap(), 42);
    }

    #[test]
    fn test_instantiable() {
        let registry = registry();
        assert!(registry.is_instantiable("ElectricEngine"));
        assert!(!registry.is_instantiable("Engine"));
        assert!(!registry.is_instantiable("Vehicle"));
        assert!(!registry.is_instantiable("Boat"));
    }
}
