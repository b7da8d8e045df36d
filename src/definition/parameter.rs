use crate::definition::Definition;
use crate::di::DependencyResolver;
use crate::error::{DepwireError, Result};
use crate::reflect::{ParameterSignature, ParameterType};
use crate::value::Value;

/// Resolves one function parameter by its declared type.
///
/// Class-typed parameters are looked up in the container under their type
/// name; everything else falls back to the declared default value.
#[derive(Clone, Debug)]
pub struct ParameterDefinition {
    parameter: ParameterSignature,
}

impl ParameterDefinition {
    pub fn new(parameter: ParameterSignature) -> Self {
        Self { parameter }
    }

    pub fn name(&self) -> &str {
        self.parameter.name()
    }

    pub fn signature(&self) -> &ParameterSignature {
        &self.parameter
    }

    pub fn is_variadic(&self) -> bool {
        self.parameter.is_variadic()
    }

    /// Explicitly optional, variadic, or nullable.
    pub fn is_optional(&self) -> bool {
        self.parameter.is_optional() || self.parameter.allows_null()
    }

    /// A default value is available or `null` is acceptable.
    pub fn has_value(&self) -> bool {
        self.parameter.default().is_some() || self.parameter.allows_null()
    }

    pub fn resolve(&self, container: &dyn DependencyResolver) -> Result<Value> {
        let Some(ty) = self.parameter.ty() else {
            return self.resolve_not_object();
        };

        let candidates: Vec<&str> = match ty {
            ParameterType::Union(members) => members
                .iter()
                .filter(|member| !member.is_builtin())
                .map(|member| self.substitute_self(member.name()))
                .collect(),
            ParameterType::Single(member) if !member.is_builtin() => {
                vec![self.substitute_self(member.name())]
            }
            ParameterType::Single(_) => Vec::new(),
        };

        if candidates.is_empty() {
            return self.resolve_not_object();
        }
        self.resolve_object(container, &candidates)
    }

    fn substitute_self<'a>(&'a self, name: &'a str) -> &'a str {
        if name == crate::reflect::SELF_TYPE {
            if let Some(class) = self.parameter.declaring_class() {
                return class;
            }
        }
        name
    }

    fn resolve_object(
        &self,
        container: &dyn DependencyResolver,
        types: &[&str],
    ) -> Result<Value> {
        for ty in types {
            if !container.has(ty) {
                continue;
            }
            let result = container.get(ty)?;
            if !result.is_instance_of(ty) {
                tracing::warn!(
                    "Container returned \"{}\" for parameter \"{}\" of type \"{}\"",
                    result.type_name(),
                    self.parameter.name(),
                    ty
                );
                return Err(DepwireError::incorrect_type(result.type_name(), ty));
            }
            tracing::debug!(
                "Resolved parameter \"{}\" of {} from \"{}\"",
                self.parameter.name(),
                self.parameter.callable(),
                ty
            );
            return Ok(result);
        }

        if let Some(default) = self.parameter.default() {
            tracing::trace!("Using default value for parameter \"{}\"", self.parameter.name());
            return Ok(default.clone());
        }

        Err(self.not_instantiable())
    }

    fn resolve_not_object(&self) -> Result<Value> {
        if let Some(default) = self.parameter.default() {
            tracing::trace!("Using default value for parameter \"{}\"", self.parameter.name());
            return Ok(default.clone());
        }

        if self.is_optional() {
            return Err(DepwireError::not_instantiable(format!(
                "Can not determine default value of parameter \"{}\" when instantiating \"{}\" \
                 because it is runtime internal. Please specify argument explicitly.",
                self.parameter.name(),
                self.parameter.callable(),
            )));
        }

        Err(self.not_instantiable())
    }

    fn type_label(&self) -> String {
        let ty = self
            .parameter
            .ty()
            .map_or_else(|| "undefined".to_string(), ToString::to_string);
        if self.parameter.allows_null() {
            format!("?{}", ty)
        } else {
            ty
        }
    }

    fn not_instantiable(&self) -> DepwireError {
        DepwireError::not_instantiable(format!(
            "Can not determine value of the \"{}\" parameter of type \"{}\" when \
             instantiating \"{}\". Please specify argument explicitly.",
            self.parameter.name(),
            self.type_label(),
            self.parameter.callable(),
        ))
    }
}

impl Definition for ParameterDefinition {
    fn resolve(&self, container: &dyn DependencyResolver) -> Result<Value> {
        ParameterDefinition::resolve(self, container)
    }
}
