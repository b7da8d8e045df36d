use crate::definition::ParameterDefinition;
use crate::error::{DepwireError, Result};
use crate::reflect::{FunctionSignature, TypeRegistry};
use indexmap::IndexMap;
use std::sync::Arc;

/// Builds parameter definitions from registered constructor signatures.
///
/// Parameters are resolved by their declared types, so service ids do not
/// need to match parameter names.
///
/// # Example
/// ```
/// use depwire::{
///     ClassSignature, DefinitionExtractor, FunctionSignature, ParameterSignature, ParameterType,
///     TypeRegistry,
/// };
/// use std::sync::Arc;
///
/// let registry = Arc::new(TypeRegistry::new());
/// registry.register(
///     ClassSignature::builder("Car")
///         .constructor(
///             FunctionSignature::constructor()
///                 .param(
///                     ParameterSignature::new("engine").typed(ParameterType::class("Engine")),
///                 ),
///         )
///         .build(),
/// );
///
/// let extractor = DefinitionExtractor::new(registry);
/// let definitions = extractor.from_class_name("Car").unwrap();
/// assert_eq!(definitions.keys().collect::<Vec<_>>(), ["engine"]);
/// ```
#[derive(Clone)]
pub struct DefinitionExtractor {
    registry: Arc<TypeRegistry>,
}

impl DefinitionExtractor {
    pub fn new(registry: Arc<TypeRegistry>) -> Self {
        Self { registry }
    }

    pub fn registry(&self) -> &TypeRegistry {
        &self.registry
    }

    /// # Errors
    /// - `NotFound` if `class` is not registered.
    /// - `NotInstantiableClass` if it is abstract, an interface, or its
    ///   constructor is not public.
    pub fn from_class_name(&self, class: &str) -> Result<IndexMap<String, ParameterDefinition>> {
        let signature = self
            .registry
            .get(class)
            .ok_or_else(|| DepwireError::not_found(class))?;

        if !signature.is_instantiable() {
            return Err(DepwireError::not_instantiable_class(class));
        }

        let definitions = signature
            .constructor()
            .map(|constructor| self.from_function(constructor))
            .unwrap_or_default();
        tracing::debug!(
            "Extracted {} parameter definition(s) for {}",
            definitions.len(),
            class
        );
        Ok(definitions)
    }

    pub fn from_function(
        &self,
        function: &FunctionSignature,
    ) -> IndexMap<String, ParameterDefinition> {
        function
            .parameters()
            .iter()
            .map(|parameter| {
                (
                    parameter.name().to_string(),
                    ParameterDefinition::new(parameter.clone()),
                )
            })
            .collect()
    }
}
