//! # Depwire
//!
//! Constructor parameter resolution for dependency injection containers.
//!
//! Rust has no runtime reflection, so classes describe their constructors up
//! front in a [`TypeRegistry`], either by hand with the signature builders or
//! with `#[derive(Injectable)]`. A [`DefinitionExtractor`] turns a class's
//! constructor into one [`ParameterDefinition`] per parameter, and each
//! definition resolves its value from any [`DependencyResolver`]:
//!
//! - class-typed parameters are looked up under their type name, trying union
//!   members in declaration order, and the value found must be an instance of
//!   that type
//! - anything else falls back to the declared default
//!
//! ## Quick Start
//!
//! ```rust
//! use depwire::prelude::*;
//!
//! struct Engine;
//!
//! let registry = Arc::new(TypeRegistry::new());
//! registry
//!     .register(ClassSignature::builder("Engine").build())
//!     .register(
//!         ClassSignature::builder("Car")
//!             .constructor(
//!                 FunctionSignature::constructor()
//!                     .param(
//!                         ParameterSignature::new("engine").typed(ParameterType::class("Engine")),
//!                     )
//!                     .param(
//!                         ParameterSignature::new("color")
//!                             .typed(ParameterType::builtin(BuiltinType::String))
//!                             .default_value("red"),
//!                     ),
//!             )
//!             .build(),
//!     );
//!
//! let container = ContainerBuilder::new(&registry)
//!     .instance("Engine", Engine)
//!     .unwrap()
//!     .build();
//!
//! let extractor = DefinitionExtractor::new(registry.clone());
//! let definitions = extractor.from_class_name("Car").unwrap();
//!
//! let engine = definitions["engine"].resolve(&container).unwrap();
//! assert_eq!(engine.type_name(), "Engine");
//! assert_eq!(definitions["color"].resolve(&container).unwrap(), Value::from("red"));
//! ```

pub mod definition;
pub mod di;
pub mod error;
pub mod reflect;
pub mod value;

// Re-export core types
pub use definition::{
    ClassDefinition, Definition, DefinitionExtractor, ParameterDefinition, ValueDefinition,
};
pub use di::{Container, ContainerBuilder, DependencyResolver};
pub use error::{DepwireError, Result};
pub use reflect::{
    BuiltinType, ClassKind, ClassSignature, FunctionSignature, NamedType, ParameterSignature,
    ParameterType, Reflect, TypeRegistry,
};
pub use value::{Object, Value};

// Re-export macros
pub use depwire_macro::Injectable;

/// Prelude module for convenient imports
///
/// ```
/// use depwire::prelude::*;
/// ```
pub mod prelude {
    pub use crate::definition::{
        ClassDefinition, Definition, DefinitionExtractor, ParameterDefinition, ValueDefinition,
    };
    pub use crate::di::{Container, ContainerBuilder, DependencyResolver};
    pub use crate::error::{DepwireError, Result};
    pub use crate::reflect::{
        BuiltinType, ClassSignature, FunctionSignature, NamedType, ParameterSignature,
        ParameterType, Reflect, TypeRegistry,
    };
    pub use crate::value::{Object, Value};
    pub use crate::Injectable;
    pub use std::sync::Arc;
}
