use std::fmt;
use std::str::FromStr;
use strum_macros::{AsRefStr, Display, EnumIter, EnumString};

/// Name of the pseudo-type that refers to the declaring class.
pub const SELF_TYPE: &str = "self";

/// Types that are not classes or interfaces and can never come from a container.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, AsRefStr, Display, EnumIter, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum BuiltinType {
    Int,
    Float,
    String,
    Bool,
    Array,
    Mixed,
    Callable,
    Iterable,
    Object,
    Null,
    Void,
    False,
    True,
    Never,
}

/// A single named type, either a builtin or a class/interface name.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct NamedType {
    name: String,
    builtin: bool,
}

impl NamedType {
    pub fn class(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            builtin: false,
        }
    }

    pub fn builtin(ty: BuiltinType) -> Self {
        Self {
            name: ty.to_string(),
            builtin: true,
        }
    }

    /// Classify `name`: builtin names map to [`BuiltinType`], anything else is a class.
    pub fn parse(name: &str) -> Self {
        let name = name.trim();
        match BuiltinType::from_str(name) {
            Ok(ty) => Self::builtin(ty),
            Err(_) => Self::class(name),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_builtin(&self) -> bool {
        self.builtin
    }

    pub fn is_self(&self) -> bool {
        !self.builtin && self.name == SELF_TYPE
    }
}

impl fmt::Display for NamedType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

impl From<BuiltinType> for NamedType {
    fn from(ty: BuiltinType) -> Self {
        Self::builtin(ty)
    }
}

/// Declared type of a parameter.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ParameterType {
    Single(NamedType),
    /// Members in declaration order.
    Union(Vec<NamedType>),
}

impl ParameterType {
    pub fn class(name: impl Into<String>) -> Self {
        Self::Single(NamedType::class(name))
    }

    pub fn builtin(ty: BuiltinType) -> Self {
        Self::Single(NamedType::builtin(ty))
    }

    pub fn union<I, T>(members: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<NamedType>,
    {
        Self::Union(members.into_iter().map(Into::into).collect())
    }

    /// Parse `Foo`, `int` or `Foo|Bar|int`.
    pub fn parse(declaration: &str) -> Self {
        let mut members: Vec<NamedType> = declaration
            .split('|')
            .map(NamedType::parse)
            .collect();
        if members.len() == 1 {
            Self::Single(members.remove(0))
        } else {
            Self::Union(members)
        }
    }

    pub fn members(&self) -> &[NamedType] {
        match self {
            Self::Single(ty) => std::slice::from_ref(ty),
            Self::Union(types) => types,
        }
    }
}

impl fmt::Display for ParameterType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<&str> = self.members().iter().map(NamedType::name).collect();
        f.write_str(&names.join("|"))
    }
}

impl From<&str> for NamedType {
    fn from(name: &str) -> Self {
        Self::parse(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_builtin_names_round_trip() {
        for ty in BuiltinType::iter() {
            let parsed = NamedType::parse(ty.as_ref());
            assert!(parsed.is_builtin(), "{} should be builtin", ty);
        }
    }

    #[test]
    fn test_self_is_not_builtin() {
        let ty = NamedType::parse("self");
        assert!(!ty.is_builtin());
        assert!(ty.is_self());
        assert!(!NamedType::parse("Engine").is_self());
    }

    #[test]
    fn test_parse_union_keeps_order() {
        let ty = ParameterType::parse("Foo|int|Bar");
        assert_eq!(
            ty,
            ParameterType::Union(vec![
                NamedType::class("Foo"),
                NamedType::builtin(BuiltinType::Int),
                NamedType::class("Bar"),
            ])
        );
        assert_eq!(ty.to_string(), "Foo|int|Bar");
        assert_eq!(ParameterType::parse("string"), ParameterType::builtin(BuiltinType::String));
    }
}
