use crate::ConvertError;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// Semantic identifier for a data shape, used as the registry lookup key.
///
/// Derivable from a runtime value ([`crate::Value::descriptor`]) or from a
/// static type ([`crate::TypeInfo::descriptor`]); compared for equality and
/// rendered with `Display` to build keys, never mutated.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TypeDescriptor {
    None,
    Any,
    Bool,
    Int,
    Float,
    Number,
    String,
    List(Box<TypeDescriptor>),
    Map(Box<TypeDescriptor>, Box<TypeDescriptor>),
    /// One level of indirection to the inner shape.
    Reference(Box<TypeDescriptor>),
    /// A named abstract shape; values carrying this tag unwrap to a concrete
    /// shape before a conversion is resolved.
    Abstract(String),
    /// A named concrete embedder shape, record or newtype.
    Custom(String),
}

impl TypeDescriptor {
    #[inline]
    pub fn reference(self) -> Self {
        TypeDescriptor::Reference(Box::new(self))
    }

    /// Whether a value of this type can be stored verbatim where `target`
    /// is expected: identity, an `Any` slot, a `Number` slot for either
    /// numeric shape, and element-wise for containers.
    pub fn assignable_to(&self, target: &TypeDescriptor) -> bool {
        if self == target {
            return true;
        }
        match (self, target) {
            (_, TypeDescriptor::Any) => true,
            (TypeDescriptor::Int | TypeDescriptor::Float, TypeDescriptor::Number) => true,
            (TypeDescriptor::List(a), TypeDescriptor::List(b)) => a.assignable_to(b),
            (TypeDescriptor::Map(ak, av), TypeDescriptor::Map(bk, bv)) => {
                ak.assignable_to(bk) && av.assignable_to(bv)
            }
            (TypeDescriptor::Reference(a), TypeDescriptor::Reference(b)) => a.assignable_to(b),
            _ => false,
        }
    }

    /// Assignability plus the numeric representation changes that need no
    /// registered converter.
    pub fn representable_as(&self, target: &TypeDescriptor) -> bool {
        self.assignable_to(target)
            || matches!(
                (self, target),
                (
                    TypeDescriptor::Int | TypeDescriptor::Float | TypeDescriptor::Number,
                    TypeDescriptor::Int | TypeDescriptor::Float | TypeDescriptor::Number,
                )
            )
    }
}

impl Display for TypeDescriptor {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            TypeDescriptor::None => write!(f, "None"),
            TypeDescriptor::Any => write!(f, "Any"),
            TypeDescriptor::Bool => write!(f, "Bool"),
            TypeDescriptor::Int => write!(f, "Int"),
            TypeDescriptor::Float => write!(f, "Float"),
            TypeDescriptor::Number => write!(f, "Number"),
            TypeDescriptor::String => write!(f, "String"),
            TypeDescriptor::List(t) => write!(f, "[{t}]"),
            TypeDescriptor::Map(k, v) => write!(f, "{{{k},{v}}}"),
            TypeDescriptor::Reference(t) => write!(f, "&{t}"),
            TypeDescriptor::Abstract(name) | TypeDescriptor::Custom(name) => write!(f, "{name}"),
        }
    }
}

impl FromStr for TypeDescriptor {
    type Err = ConvertError;

    // inverse of Display for the scalar, list, and reference forms; any
    // other non-empty name parses as a Custom shape
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let descriptor = match s {
            "None" => TypeDescriptor::None,
            "Any" => TypeDescriptor::Any,
            "Bool" => TypeDescriptor::Bool,
            "Int" => TypeDescriptor::Int,
            "Float" => TypeDescriptor::Float,
            "Number" => TypeDescriptor::Number,
            "String" => TypeDescriptor::String,
            s => {
                if let Some(inner) = s.strip_prefix('&') {
                    inner.parse::<TypeDescriptor>()?.reference()
                } else if let Some(inner) =
                    s.strip_prefix('[').and_then(|s| s.strip_suffix(']'))
                {
                    TypeDescriptor::List(Box::new(inner.parse()?))
                } else if s.is_empty() {
                    return Err(ConvertError::TypeMismatch(
                        "empty type name".to_string(),
                    ));
                } else {
                    TypeDescriptor::Custom(s.to_string())
                }
            }
        };
        Ok(descriptor)
    }
}
