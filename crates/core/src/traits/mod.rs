mod dyn_traits;

use crate::{impl_type_info, ConvertError, IndexMap, Number, Primitive, TypeDescriptor, Value};
use dyn_clone::DynClone;
use std::fmt::Debug;
use std::hash::{Hash, Hasher};

pub use dyn_traits::*;

/// Static type information: the explicit type descriptor a Rust type is
/// registered under.
pub trait TypeInfo {
    fn descriptor() -> TypeDescriptor;
}

impl_type_info! {
    () => TypeDescriptor::None;
    bool => TypeDescriptor::Bool;
    i32 => TypeDescriptor::Int;
    i64 => TypeDescriptor::Int;
    u32 => TypeDescriptor::Int;
    usize => TypeDescriptor::Int;
    f32 => TypeDescriptor::Float;
    f64 => TypeDescriptor::Float;
    Number => TypeDescriptor::Number;
    String => TypeDescriptor::String;
    Value => TypeDescriptor::Any;
}

impl<T: TypeInfo> TypeInfo for Vec<T> {
    fn descriptor() -> TypeDescriptor {
        TypeDescriptor::List(Box::new(T::descriptor()))
    }
}

impl<K: TypeInfo, V: TypeInfo> TypeInfo for IndexMap<K, V> {
    fn descriptor() -> TypeDescriptor {
        TypeDescriptor::Map(Box::new(K::descriptor()), Box::new(V::descriptor()))
    }
}

// optionality is transparent to resolution; an absent value is just none
impl<T: TypeInfo> TypeInfo for Option<T> {
    fn descriptor() -> TypeDescriptor {
        T::descriptor()
    }
}

impl<T: TypeInfo> TypeInfo for Box<T> {
    fn descriptor() -> TypeDescriptor {
        T::descriptor().reference()
    }
}

/// Checked extraction of a concrete Rust value out of a dynamic one.
pub trait FromValue: Sized {
    fn from_value(value: Value) -> Result<Self, ConvertError>;
}

impl FromValue for Value {
    #[inline]
    fn from_value(value: Value) -> Result<Self, ConvertError> {
        Ok(value)
    }
}

impl FromValue for bool {
    fn from_value(value: Value) -> Result<Self, ConvertError> {
        match value.into_concrete() {
            Value::Primitive(Primitive::Bool(b)) => Ok(b),
            v => Err(ConvertError::mismatch(&TypeDescriptor::Bool, v)),
        }
    }
}

impl FromValue for Number {
    fn from_value(value: Value) -> Result<Self, ConvertError> {
        match value.into_concrete() {
            Value::Primitive(Primitive::Number(n)) => Ok(n),
            v => Err(ConvertError::mismatch(&TypeDescriptor::Number, v)),
        }
    }
}

impl FromValue for i64 {
    fn from_value(value: Value) -> Result<Self, ConvertError> {
        Number::from_value(value).map(Number::to_int)
    }
}

impl FromValue for i32 {
    fn from_value(value: Value) -> Result<Self, ConvertError> {
        Number::from_value(value).map(|n| n.to_int() as i32)
    }
}

impl FromValue for u32 {
    fn from_value(value: Value) -> Result<Self, ConvertError> {
        Number::from_value(value).and_then(Number::to_usize).map(|n| n as u32)
    }
}

impl FromValue for usize {
    fn from_value(value: Value) -> Result<Self, ConvertError> {
        Number::from_value(value).and_then(Number::to_usize)
    }
}

impl FromValue for f64 {
    fn from_value(value: Value) -> Result<Self, ConvertError> {
        Number::from_value(value).map(Number::to_float)
    }
}

impl FromValue for f32 {
    fn from_value(value: Value) -> Result<Self, ConvertError> {
        Number::from_value(value).map(|n| n.to_float() as f32)
    }
}

impl FromValue for String {
    fn from_value(value: Value) -> Result<Self, ConvertError> {
        match value.into_concrete() {
            Value::Primitive(Primitive::String(s)) => Ok(s),
            v => Err(ConvertError::mismatch(&TypeDescriptor::String, v)),
        }
    }
}

impl<T: FromValue> FromValue for Vec<T> {
    fn from_value(value: Value) -> Result<Self, ConvertError> {
        match value.into_concrete() {
            Value::List(values) => values.into_iter().map(T::from_value).collect(),
            v => Err(ConvertError::mismatch(
                &TypeDescriptor::List(Box::new(TypeDescriptor::Any)),
                v,
            )),
        }
    }
}

impl<T: FromValue> FromValue for Option<T> {
    fn from_value(value: Value) -> Result<Self, ConvertError> {
        if value.is_none() {
            Ok(None)
        } else {
            Ok(Some(T::from_value(value)?))
        }
    }
}

impl<T: FromValue> FromValue for Box<T> {
    fn from_value(value: Value) -> Result<Self, ConvertError> {
        let value = match value {
            Value::Reference(inner) => *inner,
            v => v,
        };
        Ok(Box::new(T::from_value(value)?))
    }
}

/// An embedder shape held as a dynamic value: a named record with
/// field-by-name access, or a fieldless named value such as a newtype.
///
/// This is the narrow seam where compile-time type safety is traded for
/// late-bound dispatch; nothing else in the engine inspects concrete Rust
/// types. Usually implemented through [`crate::impl_record!`] or
/// [`crate::impl_newtype!`].
#[allow(unused_variables)]
pub trait Object: DynClone + DynCompare + DynHash + Debug {
    fn type_name(&self) -> &'static str;

    fn descriptor(&self) -> TypeDescriptor {
        TypeDescriptor::Custom(self.type_name().to_string())
    }

    fn fields(&self) -> &'static [&'static str] {
        &[]
    }

    fn field(&self, name: &str) -> Option<Value> {
        None
    }

    fn field_type(&self, name: &str) -> Option<TypeDescriptor> {
        None
    }

    fn set_field(&mut self, name: &str, value: Value) -> Result<(), ConvertError> {
        Err(ConvertError::field_not_found(name, self.type_name()))
    }
}

dyn_clone::clone_trait_object!(Object);

impl Hash for dyn Object {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.dyn_hash(state)
    }
}

impl PartialEq<dyn Object> for dyn Object {
    fn eq(&self, other: &Self) -> bool {
        self.as_dyn_compare() == other.as_dyn_compare()
    }
}
