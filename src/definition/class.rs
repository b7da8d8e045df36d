use crate::definition::Definition;
use crate::di::DependencyResolver;
use crate::error::{DepwireError, Result};
use crate::value::Value;

/// Reference to a class service in the container.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClassDefinition {
    class: String,
    optional: bool,
}

impl ClassDefinition {
    pub fn new(class: impl Into<String>, optional: bool) -> Self {
        Self {
            class: class.into(),
            optional,
        }
    }

    pub fn class(&self) -> &str {
        &self.class
    }

    pub fn is_optional(&self) -> bool {
        self.optional
    }
}

impl Definition for ClassDefinition {
    /// Missing optional services resolve to `Value::Null`.
    fn resolve(&self, container: &dyn DependencyResolver) -> Result<Value> {
        if !container.has(&self.class) {
            if self.optional {
                return Ok(Value::Null);
            }
            return Err(DepwireError::not_found(&self.class));
        }

        let result = container.get(&self.class)?;
        if !result.is_instance_of(&self.class) {
            return Err(DepwireError::incorrect_type(result.type_name(), &self.class));
        }
        Ok(result)
    }
}
