mod registry;
mod signature;
mod types;

pub use registry::{Reflect, TypeRegistry};
pub use signature::{
    CONSTRUCTOR, ClassKind, ClassSignature, ClassSignatureBuilder, FunctionSignature,
    ParameterSignature,
};
pub use types::{BuiltinType, NamedType, ParameterType, SELF_TYPE};
