//! Explicit type metadata describing classes, their constructors and parameters.

use super::types::{BuiltinType, ParameterType};
use crate::value::Value;
use std::str::FromStr;

/// Name given to constructors built with [`FunctionSignature::constructor`].
pub const CONSTRUCTOR: &str = "__construct";

/// One parameter of a function.
#[derive(Clone, Debug)]
pub struct ParameterSignature {
    name: String,
    ty: Option<ParameterType>,
    nullable: bool,
    variadic: bool,
    optional: bool,
    default: Option<Value>,
    declaring_class: Option<String>,
    declaring_function: String,
}

impl ParameterSignature {
    /// An untyped, required parameter.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty: None,
            nullable: false,
            variadic: false,
            optional: false,
            default: None,
            declaring_class: None,
            declaring_function: String::new(),
        }
    }

    pub fn typed(mut self, ty: ParameterType) -> Self {
        self.ty = Some(ty);
        self
    }

    pub fn nullable(mut self) -> Self {
        self.nullable = true;
        self
    }

    pub fn variadic(mut self) -> Self {
        self.variadic = true;
        self
    }

    /// Mark the parameter optional without making a default value available.
    pub fn optional(mut self) -> Self {
        self.optional = true;
        self
    }

    pub fn default_value(mut self, value: impl Into<Value>) -> Self {
        self.default = Some(value.into());
        self.optional = true;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn ty(&self) -> Option<&ParameterType> {
        self.ty.as_ref()
    }

    /// Marked nullable, or declared with a `null` or `mixed` member.
    pub fn allows_null(&self) -> bool {
        self.nullable
            || self.ty.as_ref().is_some_and(|ty| {
                ty.members().iter().any(|member| {
                    member.is_builtin()
                        && matches!(
                            BuiltinType::from_str(member.name()),
                            Ok(BuiltinType::Null | BuiltinType::Mixed)
                        )
                })
            })
    }

    pub fn is_variadic(&self) -> bool {
        self.variadic
    }

    /// Explicitly optional or variadic.
    pub fn is_optional(&self) -> bool {
        self.optional || self.variadic
    }

    pub fn default(&self) -> Option<&Value> {
        self.default.as_ref()
    }

    pub fn declaring_class(&self) -> Option<&str> {
        self.declaring_class.as_deref()
    }

    pub fn declaring_function(&self) -> &str {
        &self.declaring_function
    }

    /// `Class::function()` or `function()`.
    pub fn callable(&self) -> String {
        match &self.declaring_class {
            Some(class) => format!("{}::{}()", class, self.declaring_function),
            None => format!("{}()", self.declaring_function),
        }
    }
}

/// A function or method with its parameters in declaration order.
#[derive(Clone, Debug)]
pub struct FunctionSignature {
    name: String,
    class: Option<String>,
    parameters: Vec<ParameterSignature>,
}

impl FunctionSignature {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            class: None,
            parameters: Vec::new(),
        }
    }

    /// A `__construct` method. The declaring class is stamped when the
    /// constructor is attached to a [`ClassSignature`].
    pub fn constructor() -> Self {
        Self::new(CONSTRUCTOR)
    }

    pub fn in_class(mut self, class: impl Into<String>) -> Self {
        let class = class.into();
        for parameter in &mut self.parameters {
            parameter.declaring_class = Some(class.clone());
        }
        self.class = Some(class);
        self
    }

    pub fn param(mut self, mut parameter: ParameterSignature) -> Self {
        parameter.declaring_class = self.class.clone();
        parameter.declaring_function = self.name.clone();
        self.parameters.push(parameter);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn class(&self) -> Option<&str> {
        self.class.as_deref()
    }

    pub fn parameters(&self) -> &[ParameterSignature] {
        &self.parameters
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClassKind {
    Concrete,
    Abstract,
    Interface,
}

/// Metadata for one class or interface.
#[derive(Clone, Debug)]
pub struct ClassSignature {
    name: String,
    kind: ClassKind,
    parent: Option<String>,
    interfaces: Vec<String>,
    constructor: Option<FunctionSignature>,
    public_constructor: bool,
}

impl ClassSignature {
    pub fn builder(name: impl Into<String>) -> ClassSignatureBuilder {
        ClassSignatureBuilder {
            signature: ClassSignature {
                name: name.into(),
                kind: ClassKind::Concrete,
                parent: None,
                interfaces: Vec::new(),
                constructor: None,
                public_constructor: true,
            },
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> ClassKind {
        self.kind
    }

    pub fn parent(&self) -> Option<&str> {
        self.parent.as_deref()
    }

    pub fn interfaces(&self) -> &[String] {
        &self.interfaces
    }

    pub fn constructor(&self) -> Option<&FunctionSignature> {
        self.constructor.as_ref()
    }

    /// Concrete with a reachable constructor (or none at all).
    pub fn is_instantiable(&self) -> bool {
        self.kind == ClassKind::Concrete && self.public_constructor
    }
}

pub struct ClassSignatureBuilder {
    signature: ClassSignature,
}

impl ClassSignatureBuilder {
    pub fn interface(mut self) -> Self {
        self.signature.kind = ClassKind::Interface;
        self
    }

    pub fn abstract_class(mut self) -> Self {
        self.signature.kind = ClassKind::Abstract;
        self
    }

    pub fn extends(mut self, parent: impl Into<String>) -> Self {
        self.signature.parent = Some(parent.into());
        self
    }

    pub fn implements(mut self, interface: impl Into<String>) -> Self {
        self.signature.interfaces.push(interface.into());
        self
    }

    pub fn constructor(mut self, constructor: FunctionSignature) -> Self {
        self.signature.constructor = Some(constructor.in_class(self.signature.name.clone()));
        self
    }

    pub fn private_constructor(mut self) -> Self {
        self.signature.public_constructor = false;
        self
    }

    pub fn build(self) -> ClassSignature {
        self.signature
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constructor_stamps_declaring_class() {
        let class = ClassSignature::builder("Car")
            .constructor(
                FunctionSignature::constructor().param(
                    ParameterSignature::new("engine").typed(ParameterType::class("Engine")),
                ),
            )
            .build();

        let parameter = &class.constructor().unwrap().parameters()[0];
        assert_eq!(parameter.declaring_class(), Some("Car"));
        assert_eq!(parameter.declaring_function(), "__construct");
        assert_eq!(parameter.callable(), "Car::__construct()");
    }

    #[test]
    fn test_free_function_callable() {
        let function = FunctionSignature::new("make_car").param(
            ParameterSignature::new("speed").typed(ParameterType::builtin(BuiltinType::Int)),
        );
        assert_eq!(function.parameters()[0].callable(), "make_car()");
    }

    #[test]
    fn test_flags() {
        let parameter = ParameterSignature::new("size").default_value(10);
        assert!(parameter.is_optional());
        assert_eq!(parameter.default(), Some(&Value::Integer(10)));

        let parameter = ParameterSignature::new("rest").variadic();
        assert!(parameter.is_optional());
        assert!(parameter.default().is_none());

        assert!(!ParameterSignature::new("plain").nullable().is_optional());
    }

    #[test]
    fn test_null_or_mixed_member_allows_null() {
        let parameter = ParameterSignature::new("size").typed(ParameterType::parse("int|null"));
        assert!(parameter.allows_null());
        let parameter = ParameterSignature::new("any").typed(ParameterType::parse("mixed"));
        assert!(parameter.allows_null());

        let parameter = ParameterSignature::new("size").typed(ParameterType::parse("int|string"));
        assert!(!parameter.allows_null());
        assert!(!ParameterSignature::new("untyped").allows_null());
        // A class named `null` is not the builtin.
        let parameter = ParameterSignature::new("ghost").typed(ParameterType::class("null"));
        assert!(!parameter.allows_null());
    }

    #[test]
    fn test_instantiability() {
        assert!(ClassSignature::builder("Car").build().is_instantiable());
        assert!(!ClassSignature::builder("Shape").abstract_class().build().is_instantiable());
        assert!(!ClassSignature::builder("Drivable").interface().build().is_instantiable());
        assert!(!ClassSignature::builder("Hidden").private_constructor().build().is_instantiable());
    }
}
