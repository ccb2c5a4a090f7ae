use crate::{impl_from, impl_from_cast, ConvertError, TypeDescriptor};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt::{Display, Formatter};
use std::hash::{Hash, Hasher};
use std::str::FromStr;

#[derive(Copy, Clone, Debug, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Number {
    Int(i64),
    Float(f64),
}

impl_from! {
    i64, Number, Number::Int;
    f64, Number, Number::Float;
}

impl_from_cast! {
    i32 as i64, Number, Number::Int;
    u32 as i64, Number, Number::Int;
    f32 as f64, Number, Number::Float;
}

impl Hash for Number {
    fn hash<H: Hasher>(&self, state: &mut H) {
        match self {
            Number::Int(v) => v.hash(state),
            Number::Float(v) => v.to_bits().hash(state),
        }
    }
}

impl Display for Number {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Number::Int(i) => {
                write!(f, "{}", i)
            }
            Number::Float(v) => {
                write!(f, "{}", v)
            }
        }
    }
}

impl Eq for Number {}

impl PartialEq for Number {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (&Number::Int(a), &Number::Int(b)) => a == b,
            (&Number::Float(a), &Number::Float(b)) => a == b,
            (&Number::Int(a), &Number::Float(b)) => a as f64 == b,
            (&Number::Float(a), &Number::Int(b)) => a == b as f64,
        }
    }
}

impl PartialOrd for Number {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match (self, other) {
            (Number::Int(a), Number::Int(b)) => a.partial_cmp(b),
            (Number::Float(a), Number::Float(b)) => a.partial_cmp(b),
            (Number::Int(a), Number::Float(b)) => (*a as f64).partial_cmp(b),
            (Number::Float(a), Number::Int(b)) => a.partial_cmp(&(*b as f64)),
        }
    }
}

impl FromStr for Number {
    type Err = ConvertError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.replace("_", "");
        match s {
            _ if s.contains('.') => match s.parse::<f64>() {
                Ok(f) => Ok(f.into()),
                Err(e) => Err(ConvertError::TypeMismatch(e.to_string())),
            },
            _ => match s.parse::<i64>() {
                Ok(i) => Ok(i.into()),
                Err(e) => Err(ConvertError::TypeMismatch(e.to_string())),
            },
        }
    }
}

impl Number {
    #[inline]
    pub fn descriptor(&self) -> TypeDescriptor {
        match self {
            Number::Int(_) => TypeDescriptor::Int,
            Number::Float(_) => TypeDescriptor::Float,
        }
    }

    #[inline]
    pub fn to_float(self) -> f64 {
        match self {
            Number::Int(i) => i as f64,
            Number::Float(f) => f,
        }
    }

    #[inline]
    pub fn to_int(self) -> i64 {
        match self {
            Number::Int(i) => i,
            Number::Float(f) => f as i64,
        }
    }

    pub fn to_usize(self) -> Result<usize, ConvertError> {
        let i = self.to_int();
        if i.is_negative() {
            return Err(ConvertError::UnsupportedOperation(format!(
                "Cannot convert negative number {i} to usize"
            )));
        }
        Ok(i as usize)
    }
}

#[cfg(test)]
mod tests {
    use crate::Number;
    use pretty_assertions::assert_eq;

    #[test]
    fn eq_across_representations() {
        assert_eq!(Number::Int(3), Number::Float(3.0));
        assert_eq!(Number::Float(3.0), Number::Int(3));
        assert_ne!(Number::Int(3), Number::Float(3.5));
    }

    #[test]
    fn parsing_works() {
        assert_eq!("42".parse::<Number>().unwrap(), Number::Int(42));
        assert_eq!("1_000".parse::<Number>().unwrap(), Number::Int(1000));
        assert_eq!("2.5".parse::<Number>().unwrap(), Number::Float(2.5));
        assert!("abc".parse::<Number>().is_err());
    }

    #[test]
    fn casts_work() {
        assert_eq!(Number::Int(2).to_float(), 2.0);
        assert_eq!(Number::Float(2.9).to_int(), 2);
        assert_eq!(Number::Int(4).to_usize().unwrap(), 4);
        assert!(Number::Int(-1).to_usize().is_err());
    }
}
