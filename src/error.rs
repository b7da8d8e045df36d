use thiserror::Error;

pub type Result<T> = std::result::Result<T, DepwireError>;

#[derive(Debug, Error)]
pub enum DepwireError {
    /// The requested id is neither a registered class nor a container entry.
    #[error("No definition or class found or resolvable for \"{id}\".")]
    NotFound { id: String },

    /// The class exists but is abstract, an interface, or has a non-public constructor.
    #[error("Can not instantiate {class}.")]
    NotInstantiableClass { class: String },

    /// A single parameter's value could not be determined.
    #[error("{message}")]
    NotInstantiable { message: String },

    /// The container returned a value of the wrong type.
    #[error("{message}")]
    InvalidConfig { message: String },
}

impl DepwireError {
    pub fn not_found(id: impl Into<String>) -> Self {
        Self::NotFound { id: id.into() }
    }

    pub fn not_instantiable_class(class: impl Into<String>) -> Self {
        Self::NotInstantiableClass {
            class: class.into(),
        }
    }

    pub fn not_instantiable(message: impl Into<String>) -> Self {
        Self::NotInstantiable {
            message: message.into(),
        }
    }

    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::InvalidConfig {
            message: message.into(),
        }
    }

    /// Error raised when a container entry does not satisfy the requested class.
    pub fn incorrect_type(actual: &str, service: &str) -> Self {
        Self::invalid_config(format!(
            "Container returned incorrect type \"{}\" for service \"{}\".",
            actual, service
        ))
    }
}
