use crate::Converter;
use itertools::Itertools;
use log::{debug, trace, warn};
use remold_core::{ConvertError, FromValue, IndexMap, TypeDescriptor, TypeInfo, Value};
use std::rc::Rc;

/// Read-only converter registry and lookup service.
///
/// Each registered converter is stored under its generic key (`Target`) and
/// its specific key (`Target<-Source`), both pointing at the same instance,
/// so a converter for a specific source doubles as the fallback for its
/// target. At most one converter lives under a key; a later registration
/// replaces an earlier one. That also applies to the shared generic slot,
/// so a dedicated generic fallback for a target must be registered after
/// the specific converters for that target.
pub struct Resolver {
    conversions: IndexMap<String, Rc<dyn Converter>>,
}

impl Resolver {
    pub fn new(
        converters: impl IntoIterator<Item = Rc<dyn Converter>>,
    ) -> Result<Self, ConvertError> {
        let mut conversions: IndexMap<String, Rc<dyn Converter>> = IndexMap::default();
        for converter in converters {
            let (target, source) = converter.info();
            if target == TypeDescriptor::None {
                return Err(ConvertError::InvalidConverter(format!(
                    "cannot register a conversion into {target}"
                )));
            }
            let generic = target.to_string();
            let specific = format!("{target}<-{source}");
            trace!("registering {specific}");
            if conversions.insert(generic.clone(), converter.clone()).is_some() {
                warn!("conversion {generic} replaced by a later registration");
            }
            if conversions.insert(specific.clone(), converter).is_some() {
                warn!("conversion {specific} replaced by a later registration");
            }
        }
        Ok(Self { conversions })
    }

    /// Converts `value` into `T` against this registry. Re-entrant: usable
    /// from inside a converter to convert a nested value with the same
    /// converter set.
    pub fn convert<T>(&self, value: impl Into<Value>) -> Result<T, ConvertError>
    where
        T: FromValue + TypeInfo,
    {
        let converted = self.resolve(&T::descriptor(), value.into())?;
        T::from_value(converted)
    }

    /// The resolution chain, for a target descriptor only known at runtime:
    /// unwrap the source to its concrete shape, try the specific converter,
    /// then the generic one, then a plain representation change, then fail.
    pub fn resolve(
        &self,
        target: &TypeDescriptor,
        source: Value,
    ) -> Result<Value, ConvertError> {
        let source = source.into_concrete();
        let found = source.descriptor();

        if let Some(specific) = self.conversions.get(&format!("{target}<-{found}")) {
            trace!("{target}<-{found}: specific conversion");
            return specific.convert(self, source);
        }

        if let Some(generic) = self.conversions.get(&target.to_string()) {
            trace!("{target}<-{found}: generic conversion");
            return generic.convert(self, source);
        }

        if let Some(coerced) = source.coerce(target) {
            trace!("{target}<-{found}: representation change");
            return Ok(coerced);
        }

        debug!(
            "no conversion into {target} from {found}; registered: {}",
            self.conversions.keys().join(", ")
        );
        Err(ConvertError::no_conversion(target))
    }
}

#[cfg(test)]
mod tests {
    use crate::{converters, ConvertFn, MapFn, Resolver};
    use pretty_assertions::assert_eq;
    use remold_core::ConvertError;

    #[test]
    fn later_registration_wins_on_key_collision() {
        let resolver = Resolver::new(converters![
            ConvertFn::<String, i64>::new(|n| Ok(format!("first {n}"))),
            ConvertFn::<String, i64>::new(|n| Ok(format!("second {n}"))),
        ])
        .unwrap();
        let converted: String = resolver.convert(7).unwrap();
        assert_eq!(converted, "second 7");
    }

    #[test]
    fn unusable_converters_are_rejected_at_construction() {
        let result = Resolver::new(converters![MapFn::<(), i64>::new(|_| ())]);
        assert!(matches!(result, Err(ConvertError::InvalidConverter(_))));
    }
}
