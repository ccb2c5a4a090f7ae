#[macro_export]
macro_rules! impl_from {
    ($($From:ty, $To:ty, $Constructor:expr;)*) => {
        $(
            impl From<$From> for $To {
                #[inline]
                fn from(value: $From) -> Self {
                    $Constructor(value)
                }
            }
        )*
    };
}

#[macro_export]
macro_rules! impl_from_cast {
    ($($From:ty as $cast:ty, $To:ty, $Constructor:expr;)*) => {
        $(
            impl From<$From> for $To {
                #[inline]
                fn from(value: $From) -> Self {
                    $Constructor(value as $cast)
                }
            }
        )*
    };
}

#[macro_export]
macro_rules! impl_type_info {
    ($($T:ty => $descriptor:expr;)*) => {
        $(
            impl $crate::TypeInfo for $T {
                #[inline]
                fn descriptor() -> $crate::TypeDescriptor {
                    use $crate::TypeDescriptor;
                    $descriptor
                }
            }
        )*
    };
}

/// Implements [`Object`](crate::Object), [`TypeInfo`](crate::TypeInfo),
/// `From<T> for Value`, `From<Box<T>> for Value`, and
/// [`FromValue`](crate::FromValue) for a struct with named fields, making it
/// usable as a record shape in conversions. The struct must be `Clone`,
/// `Debug`, `PartialEq`, and `Hash` (and `Default` to serve as a
/// field-mapping target).
#[macro_export]
macro_rules! impl_record {
    ($($Record:ident { $($field:ident: $FieldType:ty),* $(,)? })*) => {
        $(
        impl $crate::Object for $Record {
            fn type_name(&self) -> &'static str {
                stringify!($Record)
            }

            fn fields(&self) -> &'static [&'static str] {
                &[$(stringify!($field)),*]
            }

            fn field(&self, name: &str) -> Option<$crate::Value> {
                match name {
                    $(stringify!($field) => Some(self.$field.clone().into()),)*
                    _ => None,
                }
            }

            fn field_type(&self, name: &str) -> Option<$crate::TypeDescriptor> {
                match name {
                    $(stringify!($field) => {
                        Some(<$FieldType as $crate::TypeInfo>::descriptor())
                    })*
                    _ => None,
                }
            }

            fn set_field(
                &mut self,
                name: &str,
                value: $crate::Value,
            ) -> Result<(), $crate::ConvertError> {
                match name {
                    $(stringify!($field) => {
                        self.$field = $crate::FromValue::from_value(value)?;
                        Ok(())
                    })*
                    _ => Err($crate::ConvertError::field_not_found(
                        name,
                        $crate::Object::type_name(self),
                    )),
                }
            }
        }

        impl $crate::TypeInfo for $Record {
            fn descriptor() -> $crate::TypeDescriptor {
                $crate::TypeDescriptor::Custom(stringify!($Record).to_string())
            }
        }

        impl From<$Record> for $crate::Value {
            fn from(value: $Record) -> Self {
                $crate::Value::object(value)
            }
        }

        impl From<Box<$Record>> for $crate::Value {
            fn from(value: Box<$Record>) -> Self {
                $crate::Value::Reference(Box::new($crate::Value::Object(value)))
            }
        }

        impl $crate::FromValue for $Record {
            fn from_value(value: $crate::Value) -> Result<Self, $crate::ConvertError> {
                value.into_object()
            }
        }
        )*
    };
}

/// Implements the same trait set as [`impl_record!`] for a fieldless named
/// value (typically a newtype), which participates in conversions as an
/// opaque `Custom` shape.
#[macro_export]
macro_rules! impl_newtype {
    ($($Name:ident),* $(,)?) => {
        $(
        impl $crate::Object for $Name {
            fn type_name(&self) -> &'static str {
                stringify!($Name)
            }
        }

        impl $crate::TypeInfo for $Name {
            fn descriptor() -> $crate::TypeDescriptor {
                $crate::TypeDescriptor::Custom(stringify!($Name).to_string())
            }
        }

        impl From<$Name> for $crate::Value {
            fn from(value: $Name) -> Self {
                $crate::Value::object(value)
            }
        }

        impl $crate::FromValue for $Name {
            fn from_value(value: $crate::Value) -> Result<Self, $crate::ConvertError> {
                value.into_object()
            }
        }
        )*
    };
}
