//! Type-directed value conversion: converters are registered against a
//! (target type, optional source type) pair, a resolver picks the most
//! specific applicable one, and converters can re-enter resolution to
//! convert nested values with the same registry.

mod converters;
mod resolver;

pub use converters::{ConvertFn, Converter, FieldMap, MapFn, RecursiveFn};
pub use remold_core::*;
pub use remold_core::{impl_newtype, impl_record};
pub use resolver::Resolver;

use std::rc::Rc;

/// One-shot conversion: builds a registry from `converters` and converts
/// `value` into `T`.
///
/// Fails with [`ConvertError::InvalidConverter`] if a converter reports an
/// unusable registration pair, with [`ConvertError::NoConversionFound`] if
/// the resolution chain comes up empty, and otherwise with whatever error
/// the applied converter returned, verbatim.
pub fn convert<T>(
    value: impl Into<Value>,
    converters: Vec<Rc<dyn Converter>>,
) -> Result<T, ConvertError>
where
    T: FromValue + TypeInfo,
{
    Resolver::new(converters)?.convert(value)
}

/// Builds the converter list for [`convert`] from converter expressions.
#[macro_export]
macro_rules! converters {
    ($($converter:expr),* $(,)?) => {
        vec![$(std::rc::Rc::new($converter) as std::rc::Rc<dyn $crate::Converter>),*]
    };
}
