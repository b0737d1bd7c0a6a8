use super::{Formatter, Params, ToSql};

use quill_core::stmt::Value;
use quill_core::Result;

use std::fmt::Write as _;

impl ToSql for &Value {
    fn to_sql<T: Params>(self, f: &mut Formatter<'_, T>) -> Result<()> {
        if f.literals {
            write_literal(self, f);
        } else {
            let placeholder = f.params.push(self);
            placeholder.to_sql(f)?;
        }
        Ok(())
    }
}

/// Writes a value as an inline SQL literal. Used for literal-mode rendering
/// (view bodies, defaults) and for the parameter comment in scripts.
pub(super) fn write_literal<T: Params>(value: &Value, f: &mut Formatter<'_, T>) {
    match value {
        Value::Null => f.dst.push_str("NULL"),
        Value::Bool(true) => f.dst.push('1'),
        Value::Bool(false) => f.dst.push('0'),
        Value::I32(val) => write!(f.dst, "{val}").unwrap(),
        Value::I64(val) => write!(f.dst, "{val}").unwrap(),
        Value::F64(val) => write!(f.dst, "{val}").unwrap(),
        Value::String(val) => quote(val, f),
        Value::Bytes(val) => {
            if f.is_sqlite() {
                f.dst.push_str("X'");
                for byte in val {
                    write!(f.dst, "{byte:02X}").unwrap();
                }
                f.dst.push('\'');
            } else {
                f.dst.push_str("0x");
                for byte in val {
                    write!(f.dst, "{byte:02X}").unwrap();
                }
            }
        }
        Value::Date(val) => write!(f.dst, "'{}'", val.format("%Y-%m-%d")).unwrap(),
        Value::DateTime(val) => {
            write!(f.dst, "'{}'", val.format("%Y-%m-%d %H:%M:%S%.3f")).unwrap()
        }
        Value::Uuid(val) => write!(f.dst, "'{val}'").unwrap(),
    }
}

fn quote<T: Params>(val: &str, f: &mut Formatter<'_, T>) {
    f.dst.push('\'');
    for ch in val.chars() {
        if ch == '\'' {
            f.dst.push('\'');
        }
        f.dst.push(ch);
    }
    f.dst.push('\'');
}
