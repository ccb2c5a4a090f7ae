mod error;

pub use error::ConvertError;

use crate::{impl_from, Number, TypeDescriptor};
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use std::hash::{Hash, Hasher};

/// Scalar dynamic values.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Primitive {
    #[default]
    None,
    Bool(bool),
    Number(Number),
    String(String),
}

impl_from! {
    bool, Primitive, Primitive::Bool;
    String, Primitive, Primitive::String;
}

impl From<&'_ str> for Primitive {
    #[inline]
    fn from(value: &'_ str) -> Self {
        Primitive::String(value.to_string())
    }
}

impl<T: Into<Number>> From<T> for Primitive {
    #[inline]
    fn from(value: T) -> Self {
        Primitive::Number(value.into())
    }
}

impl From<()> for Primitive {
    #[inline]
    fn from(_value: ()) -> Self {
        Primitive::None
    }
}

impl Primitive {
    pub fn descriptor(&self) -> TypeDescriptor {
        match self {
            Primitive::None => TypeDescriptor::None,
            Primitive::Bool(_) => TypeDescriptor::Bool,
            Primitive::Number(n) => n.descriptor(),
            Primitive::String(_) => TypeDescriptor::String,
        }
    }
}

impl Display for Primitive {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Primitive::None => write!(f, "none"),
            Primitive::Bool(v) => write!(f, "{}", v),
            Primitive::Number(v) => write!(f, "{}", v),
            Primitive::String(v) => write!(f, "{}", v),
        }
    }
}

impl Hash for Primitive {
    fn hash<H: Hasher>(&self, state: &mut H) {
        match self {
            Primitive::None => 0.hash(state),
            Primitive::Bool(b) => b.hash(state),
            Primitive::Number(n) => n.hash(state),
            Primitive::String(s) => s.hash(state),
        }
    }
}

// equality is strict per variant; a conversion engine must not equate
// values of different shapes
impl PartialEq for Primitive {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Primitive::None, Primitive::None) => true,
            (Primitive::Bool(a), Primitive::Bool(b)) => a == b,
            (Primitive::Number(a), Primitive::Number(b)) => a == b,
            (Primitive::String(a), Primitive::String(b)) => a == b,
            (_, _) => false,
        }
    }
}

impl Eq for Primitive {}

#[cfg(test)]
mod tests {
    use crate::{Number, Primitive, TypeDescriptor};
    use pretty_assertions::assert_eq;

    #[test]
    fn eq_is_strict() {
        assert_eq!(Primitive::None, Primitive::None);
        assert_ne!(Primitive::None, Primitive::Bool(false));
        assert_ne!(Primitive::Bool(false), Primitive::Number(Number::Int(0)));
        assert_ne!(Primitive::None, Primitive::String(String::new()));
        assert_eq!(
            Primitive::Number(Number::Int(1)),
            Primitive::Number(Number::Float(1.0))
        );
    }

    #[test]
    fn descriptors() {
        assert_eq!(Primitive::None.descriptor(), TypeDescriptor::None);
        assert_eq!(Primitive::Bool(true).descriptor(), TypeDescriptor::Bool);
        assert_eq!(Primitive::from(1).descriptor(), TypeDescriptor::Int);
        assert_eq!(Primitive::from(1.5).descriptor(), TypeDescriptor::Float);
        assert_eq!(Primitive::from("a").descriptor(), TypeDescriptor::String);
    }
}
