//! Dynamic values produced by resolution.

use std::any::Any;
use std::fmt;
use std::sync::Arc;

/// A value handed out by a container or taken from a parameter default.
#[derive(Clone, Debug)]
pub enum Value {
    Null,
    Bool(bool),
    Integer(i64),
    Float(f64),
    String(String),
    Array(Vec<Value>),
    Object(Object),
}

impl Value {
    /// Runtime type name used in error messages.
    ///
    /// Scalars report their kind (`"integer"`, `"string"`, ...), objects report
    /// their class name.
    pub fn type_name(&self) -> &str {
        match self {
            Value::Null => "NULL",
            Value::Bool(_) => "boolean",
            Value::Integer(_) => "integer",
            Value::Float(_) => "double",
            Value::String(_) => "string",
            Value::Array(_) => "array",
            Value::Object(object) => object.class(),
        }
    }

    /// Whether this value is an object of `class` or one of its subtypes.
    pub fn is_instance_of(&self, class: &str) -> bool {
        match self {
            Value::Object(object) => object.is_instance_of(class),
            _ => false,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    pub fn as_object(&self) -> Option<&Object> {
        match self {
            Value::Object(object) => Some(object),
            _ => None,
        }
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Null, Value::Null) => true,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Integer(a), Value::Integer(b)) => a == b,
            (Value::Float(a), Value::Float(b)) => a == b,
            (Value::String(a), Value::String(b)) => a == b,
            (Value::Array(a), Value::Array(b)) => a == b,
            (Value::Object(a), Value::Object(b)) => a.same_instance(b),
            _ => false,
        }
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

macro_rules! impl_from_integer {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Value {
                fn from(value: $ty) -> Self {
                    Value::Integer(value as i64)
                }
            }
        )*
    };
}

impl_from_integer!(i8, i16, i32, i64, u8, u16, u32, isize);

impl From<f32> for Value {
    fn from(value: f32) -> Self {
        Value::Float(value as f64)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Float(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::String(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::String(value)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(values: Vec<T>) -> Self {
        Value::Array(values.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Value::Null, Into::into)
    }
}

impl From<Object> for Value {
    fn from(object: Object) -> Self {
        Value::Object(object)
    }
}

/// An instance of a registered class.
///
/// The lineage lists every class and interface name the instance satisfies,
/// starting with its own class. It is usually filled in from a
/// [`TypeRegistry`](crate::reflect::TypeRegistry).
#[derive(Clone)]
pub struct Object {
    lineage: Arc<[String]>,
    instance: Arc<dyn Any + Send + Sync>,
}

impl Object {
    /// Wrap `instance` as an object of exactly `class`, with no known supertypes.
    pub fn new<T: Any + Send + Sync>(class: impl Into<String>, instance: T) -> Self {
        Self::with_lineage(vec![class.into()], Arc::new(instance))
    }

    pub(crate) fn with_lineage(
        lineage: Vec<String>,
        instance: Arc<dyn Any + Send + Sync>,
    ) -> Self {
        Self {
            lineage: lineage.into(),
            instance,
        }
    }

    pub fn class(&self) -> &str {
        &self.lineage[0]
    }

    pub fn lineage(&self) -> &[String] {
        &self.lineage
    }

    pub fn is_instance_of(&self, class: &str) -> bool {
        self.lineage.iter().any(|name| name == class)
    }

    pub fn downcast<T: Any + Send + Sync>(&self) -> Option<Arc<T>> {
        self.instance.clone().downcast::<T>().ok()
    }

    pub fn same_instance(&self, other: &Object) -> bool {
        Arc::ptr_eq(&self.instance, &other.instance)
    }
}

impl fmt::Debug for Object {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Object")
            .field("class", &self.class())
            .field("lineage", &self.lineage)
            .finish_non_exhaustive()
    }
}
