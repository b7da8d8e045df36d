use crate::error::Result;
use crate::value::Value;
use std::sync::Arc;

/// Lookup capability consulted when resolving definitions.
///
/// Implementations only answer whether an id is known and hand out the
/// stored value; checking that the value fits the requested type is up to
/// the caller.
pub trait DependencyResolver: Send + Sync {
    fn has(&self, id: &str) -> bool;

    /// # Errors
    /// Returns [`DepwireError::NotFound`](crate::DepwireError::NotFound) if
    /// nothing is registered under `id`.
    fn get(&self, id: &str) -> Result<Value>;
}

impl<T: DependencyResolver + ?Sized> DependencyResolver for Arc<T> {
    fn has(&self, id: &str) -> bool {
        (**self).has(id)
    }

    fn get(&self, id: &str) -> Result<Value> {
        (**self).get(id)
    }
}

impl<T: DependencyResolver + ?Sized> DependencyResolver for &T {
    fn has(&self, id: &str) -> bool {
        (**self).has(id)
    }

    fn get(&self, id: &str) -> Result<Value> {
        (**self).get(id)
    }
}
