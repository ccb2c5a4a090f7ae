mod from;

use crate::{ConvertError, IndexMap, Object, Primitive, TypeDescriptor};
use itertools::Itertools;
use log::trace;
use std::fmt::{Display, Formatter};
use std::hash::{Hash, Hasher};

/// An opaque holder of an arbitrary value together with its type.
///
/// `Reference` and `Tagged` add one level of indirection or abstraction on
/// top of a concrete shape; resolution strips them before looking up a
/// conversion.
#[derive(Clone, Debug)]
pub enum Value {
    Primitive(Primitive),
    List(Vec<Value>),
    Map(IndexMap<Value, Value>),
    Reference(Box<Value>),
    Tagged(TypeDescriptor, Box<Value>),
    Object(Box<dyn Object>),
}

impl Default for Value {
    fn default() -> Self {
        Value::Primitive(Primitive::default())
    }
}

impl Value {
    #[inline]
    pub fn object<T: Object + 'static>(value: T) -> Self {
        Value::Object(Box::new(value))
    }

    #[inline]
    pub fn reference(value: impl Into<Value>) -> Self {
        Value::Reference(Box::new(value.into()))
    }

    #[inline]
    pub fn tagged(tag: TypeDescriptor, value: impl Into<Value>) -> Self {
        Value::Tagged(tag, Box::new(value.into()))
    }

    #[inline]
    pub fn is_none(&self) -> bool {
        matches!(self, Value::Primitive(Primitive::None))
    }

    /// Type descriptor of the value as held, indirection included.
    pub fn descriptor(&self) -> TypeDescriptor {
        match self {
            Value::Primitive(p) => p.descriptor(),
            Value::List(l) => TypeDescriptor::List(Box::new(
                l.first().map(Value::descriptor).unwrap_or(TypeDescriptor::Any),
            )),
            Value::Map(m) => match m.first() {
                None => TypeDescriptor::Map(
                    Box::new(TypeDescriptor::Any),
                    Box::new(TypeDescriptor::Any),
                ),
                Some((k, v)) => {
                    TypeDescriptor::Map(Box::new(k.descriptor()), Box::new(v.descriptor()))
                }
            },
            Value::Reference(v) => v.descriptor().reference(),
            Value::Tagged(tag, _) => tag.clone(),
            Value::Object(o) => o.descriptor(),
        }
    }

    /// Remove one level of indirection or tagging.
    pub fn unwrap_once(self) -> Self {
        match self {
            Value::Reference(v) | Value::Tagged(_, v) => *v,
            v => v,
        }
    }

    /// Unwrap until the concrete shape is reached.
    pub fn into_concrete(self) -> Self {
        let mut value = self;
        while matches!(value, Value::Reference(_) | Value::Tagged(_, _)) {
            trace!("unwrapping {}", value.descriptor());
            value = value.unwrap_once();
        }
        value
    }

    /// Read a named field from a record-shaped value; string-keyed maps
    /// count as records.
    pub fn field(&self, name: &str) -> Option<Value> {
        match self {
            Value::Object(o) => o.field(name),
            Value::Map(m) => m.get(&Value::from(name)).cloned(),
            _ => None,
        }
    }

    /// Write a named field on a record-shaped value.
    pub fn set_field(&mut self, name: &str, value: Value) -> Result<(), ConvertError> {
        match self {
            Value::Object(o) => o.set_field(name, value),
            Value::Map(m) => {
                m.insert(name.into(), value);
                Ok(())
            }
            v => Err(ConvertError::UnsupportedOperation(format!(
                "Cannot set {name} on {v}"
            ))),
        }
    }

    pub fn downcast_ref<T: Object + 'static>(&self) -> Option<&T> {
        match self {
            Value::Object(o) => o.as_any().downcast_ref::<T>(),
            _ => None,
        }
    }

    pub fn into_object<T: Object + Clone + 'static>(self) -> Result<T, ConvertError> {
        let concrete = self.into_concrete();
        match concrete.downcast_ref::<T>() {
            Some(object) => Ok(object.clone()),
            None => Err(ConvertError::TypeMismatch(format!(
                "expected {}, found {concrete}",
                std::any::type_name::<T>()
            ))),
        }
    }

    /// Representation change into a representable target type; the
    /// fallback when no converter matches.
    pub fn coerce(&self, target: &TypeDescriptor) -> Option<Value> {
        if self.descriptor().assignable_to(target) {
            return Some(self.clone());
        }
        match (self, target) {
            (Value::Primitive(Primitive::Number(n)), TypeDescriptor::Int) => {
                Some(n.to_int().into())
            }
            (Value::Primitive(Primitive::Number(n)), TypeDescriptor::Float) => {
                Some(n.to_float().into())
            }
            _ => None,
        }
    }
}

impl Display for Value {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Value::Primitive(p) => write!(f, "{}", p),
            Value::List(l) => write!(f, "[{}]", l.iter().join(",")),
            Value::Map(m) => write!(
                f,
                "{{{}}}",
                m.iter().map(|(k, v)| format!("{k} = {v}")).join(",")
            ),
            Value::Reference(v) => write!(f, "&{v}"),
            Value::Tagged(tag, v) => write!(f, "{tag}({v})"),
            Value::Object(o) => write!(f, "{o:?}"),
        }
    }
}

impl Hash for Value {
    fn hash<H: Hasher>(&self, state: &mut H) {
        match self {
            Value::Primitive(p) => p.hash(state),
            Value::List(l) => l.hash(state),
            Value::Map(m) => {
                for (k, v) in m {
                    k.hash(state);
                    v.hash(state);
                }
            }
            Value::Reference(v) => v.hash(state),
            Value::Tagged(tag, v) => {
                tag.hash(state);
                v.hash(state);
            }
            Value::Object(o) => o.hash(state),
        }
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Primitive(a), Value::Primitive(b)) => a == b,
            (Value::List(a), Value::List(b)) => a == b,
            (Value::Map(a), Value::Map(b)) => a == b,
            (Value::Reference(a), Value::Reference(b)) => a == b,
            (Value::Tagged(t, a), Value::Tagged(u, b)) => t == u && a == b,
            (Value::Object(a), Value::Object(b)) => a == b,
            _ => false,
        }
    }
}

impl Eq for Value {}
