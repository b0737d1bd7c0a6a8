use chrono::{NaiveDate, NaiveDateTime};
use uuid::Uuid;

/// A concrete value bound into a statement.
///
/// Equality on `Value` is the identity used when the serializer deduplicates
/// the parameter list: re-encountering an equal value reuses the existing
/// ordinal placeholder.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Null,
    Bool(bool),
    I32(i32),
    I64(i64),
    F64(f64),
    String(String),
    Bytes(Vec<u8>),
    Date(NaiveDate),
    DateTime(NaiveDateTime),
    Uuid(Uuid),
}

impl Value {
    /// Returns `true` if the value is [`Value::Null`].
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Attempts to return the value as a string slice.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    /// Attempts to return the value as a boolean.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Attempts to return the value as an `i64`, widening `I32`.
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Self::I32(v) => Some(*v as i64),
            Self::I64(v) => Some(*v),
            _ => None,
        }
    }

    /// Attempts to return the value as an `f64`.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::F64(v) => Some(*v),
            _ => None,
        }
    }

    /// The variant name, used in diagnostics.
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Null => "Null",
            Self::Bool(_) => "Bool",
            Self::I32(_) => "I32",
            Self::I64(_) => "I64",
            Self::F64(_) => "F64",
            Self::String(_) => "String",
            Self::Bytes(_) => "Bytes",
            Self::Date(_) => "Date",
            Self::DateTime(_) => "DateTime",
            Self::Uuid(_) => "Uuid",
        }
    }
}

impl Default for Value {
    fn default() -> Self {
        Self::Null
    }
}

macro_rules! impl_from_for_value {
    ($( $variant:ident($ty:ty) ;)*) => {
        $(
            impl From<$ty> for Value {
                fn from(value: $ty) -> Self {
                    Self::$variant(value)
                }
            }
        )*
    };
}

impl_from_for_value! {
    Bool(bool);
    I32(i32);
    I64(i64);
    F64(f64);
    String(String);
    Bytes(Vec<u8>);
    Uuid(Uuid);
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl<T> From<Option<T>> for Value
where
    T: Into<Value>,
{
    fn from(value: Option<T>) -> Self {
        match value {
            Some(value) => value.into(),
            None => Self::Null,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_impls() {
        assert_eq!(Value::from(42_i32), Value::I32(42));
        assert_eq!(Value::from("London"), Value::String("London".into()));
        assert_eq!(Value::from(Option::<i64>::None), Value::Null);
        assert_eq!(Value::from(Some(true)), Value::Bool(true));
    }

    #[test]
    fn accessors() {
        assert_eq!(Value::I32(7).as_i64(), Some(7));
        assert_eq!(Value::I64(7).as_i64(), Some(7));
        assert_eq!(Value::from("x").as_str(), Some("x"));
        assert!(Value::Null.is_null());
        assert_eq!(Value::Bool(false).as_i64(), None);
    }

    #[test]
    fn equality_is_dedup_identity() {
        assert_eq!(Value::from("London"), Value::from("London"));
        assert_ne!(Value::I32(1), Value::I64(1));
    }
}
