//! Definitions describe how a single value is obtained from a container.

mod class;
mod extractor;
mod parameter;
mod value;

pub use class::ClassDefinition;
pub use extractor::DefinitionExtractor;
pub use parameter::ParameterDefinition;
pub use value::ValueDefinition;

use crate::di::DependencyResolver;
use crate::error::Result;
use crate::value::Value;

/// Something that can produce a value given a container.
pub trait Definition: Send + Sync {
    /// # Errors
    /// Fails when the value can not be determined or the container holds a
    /// value of the wrong type.
    fn resolve(&self, container: &dyn DependencyResolver) -> Result<Value>;
}
