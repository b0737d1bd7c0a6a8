use chrono::{NaiveDate, NaiveDateTime};

use crate::stmt::Value;

macro_rules! impl_chrono_conversions {
    ($chrono:ty, $name:ident, $lit:literal) => {
        impl From<$chrono> for Value {
            fn from(value: $chrono) -> Self {
                Self::$name(value)
            }
        }

        impl TryFrom<Value> for $chrono {
            type Error = crate::Error;

            fn try_from(value: Value) -> Result<Self, Self::Error> {
                match value {
                    Value::$name(value) => Ok(value),
                    other => Err(crate::Error::type_mapping(format!(
                        "cannot convert {} to {}",
                        other.type_name(),
                        $lit
                    ))),
                }
            }
        }
    };
}

impl_chrono_conversions!(NaiveDateTime, DateTime, "NaiveDateTime");
impl_chrono_conversions!(NaiveDate, Date, "NaiveDate");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn datetime_round_trip() {
        let dt = NaiveDate::from_ymd_opt(2024, 1, 31)
            .unwrap()
            .and_hms_opt(10, 30, 0)
            .unwrap();
        let value = Value::from(dt);
        assert_eq!(value, Value::DateTime(dt));
        assert_eq!(NaiveDateTime::try_from(value).unwrap(), dt);
    }

    #[test]
    fn mismatched_extraction_fails() {
        let err = NaiveDate::try_from(Value::I64(3)).unwrap_err();
        assert!(err.is_type_mapping());
    }
}
