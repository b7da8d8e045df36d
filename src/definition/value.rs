use crate::definition::Definition;
use crate::di::DependencyResolver;
use crate::error::Result;
use crate::value::Value;

/// A fixed value, returned as is.
#[derive(Clone, Debug, PartialEq)]
pub struct ValueDefinition {
    value: Value,
}

impl ValueDefinition {
    pub fn new(value: impl Into<Value>) -> Self {
        Self {
            value: value.into(),
        }
    }
}

impl Definition for ValueDefinition {
    fn resolve(&self, _container: &dyn DependencyResolver) -> Result<Value> {
        Ok(self.value.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::di::Container;

    #[test]
    fn test_resolve_returns_value() {
        let definition = ValueDefinition::new(vec!["a", "b"]);
        assert_eq!(
            definition.resolve(&Container::new()).unwrap(),
            Value::from(vec!["a", "b"])
        );
    }
}
