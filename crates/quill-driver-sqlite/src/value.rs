use chrono::{NaiveDate, NaiveDateTime};
use rusqlite::types::{ToSql, ToSqlOutput, Value as SqlValue, ValueRef};

use quill_core::schema::ValueType;
use quill_core::stmt::Value;
use quill_core::{Error, Result};

/// Binds one engine value as a SQLite storage-class value. Dates, times and
/// GUIDs bind as the same text the serializer writes in literal mode, so a
/// bound parameter and an inlined literal always compare equal in SQL.
pub(crate) struct Bind<'a>(pub(crate) &'a Value);

impl ToSql for Bind<'_> {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        Ok(match self.0 {
            Value::Null => ToSqlOutput::Owned(SqlValue::Null),
            Value::Bool(v) => ToSqlOutput::Owned(SqlValue::Integer(i64::from(*v))),
            Value::I32(v) => ToSqlOutput::Owned(SqlValue::Integer(i64::from(*v))),
            Value::I64(v) => ToSqlOutput::Owned(SqlValue::Integer(*v)),
            Value::F64(v) => ToSqlOutput::Owned(SqlValue::Real(*v)),
            Value::String(v) => ToSqlOutput::Borrowed(ValueRef::Text(v.as_bytes())),
            Value::Bytes(v) => ToSqlOutput::Borrowed(ValueRef::Blob(v)),
            Value::Date(v) => {
                ToSqlOutput::Owned(SqlValue::Text(v.format("%Y-%m-%d").to_string()))
            }
            Value::DateTime(v) => {
                ToSqlOutput::Owned(SqlValue::Text(v.format("%Y-%m-%d %H:%M:%S%.3f").to_string()))
            }
            Value::Uuid(v) => ToSqlOutput::Owned(SqlValue::Text(v.to_string())),
        })
    }
}

/// Decodes one cell. SQLite stores dates, times and GUIDs as text, so the
/// declared column type decides which value the text becomes; cells with no
/// usable declaration keep their storage class.
pub(crate) fn decode(value: ValueRef<'_>, ty: Option<ValueType>) -> Result<Value> {
    Ok(match value {
        ValueRef::Null => Value::Null,
        ValueRef::Integer(v) => match ty {
            Some(ValueType::Bool) => Value::Bool(v != 0),
            Some(ValueType::I32) => Value::I32(v as i32),
            _ => Value::I64(v),
        },
        ValueRef::Real(v) => Value::F64(v),
        ValueRef::Text(text) => {
            let text = std::str::from_utf8(text).map_err(Error::driver)?;
            match ty {
                Some(ValueType::Uuid) => {
                    Value::Uuid(text.parse().map_err(Error::driver)?)
                }
                Some(ValueType::Date) => Value::Date(
                    NaiveDate::parse_from_str(text, "%Y-%m-%d").map_err(Error::driver)?,
                ),
                Some(ValueType::DateTime) => Value::DateTime(
                    NaiveDateTime::parse_from_str(text, "%Y-%m-%d %H:%M:%S%.f")
                        .map_err(Error::driver)?,
                ),
                _ => Value::String(text.to_string()),
            }
        }
        ValueRef::Blob(bytes) => Value::Bytes(bytes.to_vec()),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_decodes_by_declared_type() {
        let uuid = uuid::Uuid::nil();
        let decoded = decode(
            ValueRef::Text(uuid.to_string().as_bytes()),
            Some(ValueType::Uuid),
        )
        .unwrap();
        assert_eq!(decoded, Value::Uuid(uuid));

        let decoded = decode(ValueRef::Text(b"2024-03-09"), Some(ValueType::Date)).unwrap();
        assert_eq!(
            decoded,
            Value::Date(NaiveDate::from_ymd_opt(2024, 3, 9).unwrap())
        );

        let decoded =
            decode(ValueRef::Text(b"2024-03-09 13:30:15.250"), Some(ValueType::DateTime)).unwrap();
        let expected = NaiveDate::from_ymd_opt(2024, 3, 9)
            .unwrap()
            .and_hms_milli_opt(13, 30, 15, 250)
            .unwrap();
        assert_eq!(decoded, Value::DateTime(expected));
    }

    #[test]
    fn integers_narrow_by_declared_type() {
        assert_eq!(
            decode(ValueRef::Integer(1), Some(ValueType::Bool)).unwrap(),
            Value::Bool(true)
        );
        assert_eq!(
            decode(ValueRef::Integer(7), Some(ValueType::I32)).unwrap(),
            Value::I32(7)
        );
        assert_eq!(decode(ValueRef::Integer(7), None).unwrap(), Value::I64(7));
    }

    #[test]
    fn undeclared_text_stays_text() {
        let decoded = decode(ValueRef::Text(b"London"), None).unwrap();
        assert_eq!(decoded, Value::String("London".into()));
    }
}
