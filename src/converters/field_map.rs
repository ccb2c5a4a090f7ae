use super::Converter;
use crate::Resolver;
use log::trace;
use remold_core::{ConvertError, IndexMap, Object, TypeDescriptor, TypeInfo, Value};
use std::marker::PhantomData;

/// Copies named fields from a source record into a freshly allocated
/// target record, re-entering resolution for any field whose type does not
/// line up.
///
/// The rule maps target field names to source field names and is applied in
/// insertion order; a name absent on either side fails the whole conversion
/// with [`ConvertError::FieldNotFound`]. `T` is the target shape (its
/// `Default` is the zero-valued instance), `S` fixes the source descriptor
/// the converter is registered under. Nothing is inferred: a field mapping
/// only ever runs for the pair it was registered against.
pub struct FieldMap<T, S> {
    target: TypeDescriptor,
    source: TypeDescriptor,
    fields: IndexMap<String, String>,
    by_ref: bool,
    shape: PhantomData<fn() -> (T, S)>,
}

impl<T, S> FieldMap<T, S>
where
    T: TypeInfo,
    S: TypeInfo,
{
    pub fn new<K, V>(fields: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            target: T::descriptor(),
            source: S::descriptor(),
            fields: fields
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
            by_ref: false,
            shape: PhantomData,
        }
    }

    /// Produces a reference to the target instead of the target itself,
    /// registering under `&T`: the pointee is allocated and populated, and
    /// one level of indirection is added at the end.
    pub fn by_ref(mut self) -> Self {
        self.target = self.target.reference();
        self.by_ref = true;
        self
    }

    /// Registers under an explicit source descriptor instead of the one
    /// derived from `S`.
    pub fn from_source(mut self, source: TypeDescriptor) -> Self {
        self.source = source;
        self
    }
}

impl<T, S> Converter for FieldMap<T, S>
where
    T: Object + Default + Into<Value>,
{
    fn info(&self) -> (TypeDescriptor, TypeDescriptor) {
        (self.target.clone(), self.source.clone())
    }

    fn convert(&self, resolver: &Resolver, source: Value) -> Result<Value, ConvertError> {
        let source = source.into_concrete();
        let mut target = T::default();

        for (target_field, source_field) in &self.fields {
            let value = source
                .field(source_field)
                .ok_or_else(|| ConvertError::field_not_found(source_field, source.descriptor()))?;
            let slot = target
                .field_type(target_field)
                .ok_or_else(|| ConvertError::field_not_found(target_field, target.type_name()))?;

            let value = if value.descriptor().assignable_to(&slot) {
                value
            } else {
                trace!("field {target_field}: converting into {slot}");
                resolver.resolve(&slot, value)?
            };

            target.set_field(target_field, value)?;
        }

        let target: Value = target.into();
        Ok(if self.by_ref {
            Value::reference(target)
        } else {
            target
        })
    }
}
