mod field_map;

pub use field_map::FieldMap;

use crate::Resolver;
use remold_core::{ConvertError, FromValue, TypeDescriptor, TypeInfo, Value};

/// A conversion rule: reports the (target, source) pair it is registered
/// under, and converts a source value, optionally re-entering resolution
/// through the resolver it receives.
pub trait Converter {
    /// The (target, source) descriptor pair, used purely for registry
    /// indexing. A source of `Any` makes the converter generic.
    fn info(&self) -> (TypeDescriptor, TypeDescriptor);

    fn convert(&self, resolver: &Resolver, source: Value) -> Result<Value, ConvertError>;
}

/// Converts with a fallible function of the source value; the function's
/// error is propagated verbatim.
pub struct ConvertFn<T, S> {
    target: TypeDescriptor,
    source: TypeDescriptor,
    #[allow(clippy::type_complexity)]
    convert: Box<dyn Fn(S) -> Result<T, ConvertError>>,
}

impl<T: TypeInfo, S: TypeInfo> ConvertFn<T, S> {
    pub fn new<F>(convert: F) -> Self
    where
        F: Fn(S) -> Result<T, ConvertError> + 'static,
    {
        Self {
            target: T::descriptor(),
            source: S::descriptor(),
            convert: Box::new(convert),
        }
    }
}

impl<T, S> ConvertFn<T, S> {
    /// Registers under an explicit source descriptor (e.g. an
    /// [`TypeDescriptor::Abstract`] shape) instead of the one derived
    /// from `S`.
    pub fn from_source(mut self, source: TypeDescriptor) -> Self {
        self.source = source;
        self
    }
}

impl<T, S> Converter for ConvertFn<T, S>
where
    T: Into<Value>,
    S: FromValue,
{
    fn info(&self) -> (TypeDescriptor, TypeDescriptor) {
        (self.target.clone(), self.source.clone())
    }

    fn convert(&self, _resolver: &Resolver, source: Value) -> Result<Value, ConvertError> {
        let source = S::from_value(source)?;
        (self.convert)(source).map(Into::into)
    }
}

/// Converts with a function that cannot fail.
pub struct MapFn<T, S> {
    target: TypeDescriptor,
    source: TypeDescriptor,
    map: Box<dyn Fn(S) -> T>,
}

impl<T: TypeInfo, S: TypeInfo> MapFn<T, S> {
    pub fn new<F>(map: F) -> Self
    where
        F: Fn(S) -> T + 'static,
    {
        Self {
            target: T::descriptor(),
            source: S::descriptor(),
            map: Box::new(map),
        }
    }
}

impl<T, S> MapFn<T, S> {
    pub fn from_source(mut self, source: TypeDescriptor) -> Self {
        self.source = source;
        self
    }
}

impl<T, S> Converter for MapFn<T, S>
where
    T: Into<Value>,
    S: FromValue,
{
    fn info(&self) -> (TypeDescriptor, TypeDescriptor) {
        (self.target.clone(), self.source.clone())
    }

    fn convert(&self, _resolver: &Resolver, source: Value) -> Result<Value, ConvertError> {
        let source = S::from_value(source)?;
        Ok((self.map)(source).into())
    }
}

/// Converts with a function that receives the live resolver, so nested
/// values can re-enter resolution with the same converter set. This is what
/// lets tree-shaped data convert without the converter author writing their
/// own dispatch.
pub struct RecursiveFn<T, S> {
    target: TypeDescriptor,
    source: TypeDescriptor,
    #[allow(clippy::type_complexity)]
    recurse: Box<dyn Fn(&Resolver, S) -> Result<T, ConvertError>>,
}

impl<T: TypeInfo, S: TypeInfo> RecursiveFn<T, S> {
    pub fn new<F>(recurse: F) -> Self
    where
        F: Fn(&Resolver, S) -> Result<T, ConvertError> + 'static,
    {
        Self {
            target: T::descriptor(),
            source: S::descriptor(),
            recurse: Box::new(recurse),
        }
    }
}

impl<T, S> RecursiveFn<T, S> {
    pub fn from_source(mut self, source: TypeDescriptor) -> Self {
        self.source = source;
        self
    }
}

impl<T, S> Converter for RecursiveFn<T, S>
where
    T: Into<Value>,
    S: FromValue,
{
    fn info(&self) -> (TypeDescriptor, TypeDescriptor) {
        (self.target.clone(), self.source.clone())
    }

    fn convert(&self, resolver: &Resolver, source: Value) -> Result<Value, ConvertError> {
        let source = S::from_value(source)?;
        (self.recurse)(resolver, source).map(Into::into)
    }
}
