use crate::TypeDescriptor;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ConvertError {
    /// Registration-time programmer error, returned before any conversion
    /// runs.
    InvalidConverter(String),
    /// The resolution chain was exhausted; carries the target type name.
    NoConversionFound(String),
    /// A field-mapping rule named a field absent on the source or target.
    FieldNotFound(String),
    /// A value of the wrong shape was extracted.
    TypeMismatch(String),
    UnsupportedOperation(String),
    /// A user-supplied converter error, propagated verbatim.
    Custom(String),
}

impl Error for ConvertError {}

impl Display for ConvertError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ConvertError::InvalidConverter(m) => write!(f, "Invalid Converter: {m}"),
            ConvertError::NoConversionFound(m) => write!(f, "No Conversion Found: {m}"),
            ConvertError::FieldNotFound(m) => write!(f, "Field Not Found: {m}"),
            ConvertError::TypeMismatch(m) => write!(f, "Type Mismatch: {m}"),
            ConvertError::UnsupportedOperation(m) => write!(f, "Unsupported Operation: {m}"),
            ConvertError::Custom(m) => write!(f, "{m}"),
        }
    }
}

impl ConvertError {
    pub fn custom<T: Display>(message: T) -> Self {
        ConvertError::Custom(message.to_string())
    }

    pub fn no_conversion(target: &TypeDescriptor) -> Self {
        ConvertError::NoConversionFound(target.to_string())
    }

    pub fn field_not_found<T: Display>(field: &str, shape: T) -> Self {
        ConvertError::FieldNotFound(format!("field {field} does not exist on {shape}"))
    }

    pub fn mismatch<T: Display>(expected: &TypeDescriptor, found: T) -> Self {
        ConvertError::TypeMismatch(format!("expected {expected}, found {found}"))
    }
}
