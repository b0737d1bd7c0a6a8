use super::{Formatter, Params, ToSql};

use quill_core::schema::ValueType;
use quill_core::Result;

use std::fmt::Write as _;

/// A column or routine-parameter type declaration.
pub(super) struct Ty {
    pub(super) ty: ValueType,
    pub(super) max_length: Option<u32>,
}

impl ToSql for Ty {
    fn to_sql<T: Params>(self, f: &mut Formatter<'_, T>) -> Result<()> {
        if let (ValueType::String, Some(n)) = (self.ty, self.max_length) {
            if f.is_sqlite() {
                write!(f.dst, "NVARCHAR({n})").unwrap();
            } else {
                write!(f.dst, "nvarchar({n})").unwrap();
            }
            return Ok(());
        }

        let name = if f.is_sqlite() {
            match self.ty {
                ValueType::Bool => "BOOLEAN",
                ValueType::I32 => "INT",
                ValueType::I64 => "INTEGER",
                ValueType::F64 => "DOUBLE",
                ValueType::String => "TEXT",
                ValueType::Bytes => "BLOB",
                ValueType::Date => "DATE",
                ValueType::DateTime => "DATETIME",
                ValueType::Uuid => "UNIQUEIDENTIFIER",
            }
        } else {
            match self.ty {
                ValueType::Bool => "bit",
                ValueType::I32 => "int",
                ValueType::I64 => "bigint",
                ValueType::F64 => "float",
                ValueType::String => "nvarchar(max)",
                ValueType::Bytes => "varbinary(max)",
                ValueType::Date => "date",
                ValueType::DateTime => "datetime",
                ValueType::Uuid => "uniqueidentifier",
            }
        };

        f.dst.push_str(name);
        Ok(())
    }
}
