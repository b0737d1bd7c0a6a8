use crate::stmt::Statement;

use quill_core::schema::Column;

/// `ALTER TABLE … ALTER COLUMN` redeclaring a column whose type, length,
/// nullability or default drifted. Server dialect only; the embedded engine
/// cannot alter columns in place.
#[derive(Debug, Clone)]
pub struct AlterColumn {
    pub table: String,

    pub column: Column,
}

impl Statement {
    pub fn alter_column(table: impl Into<String>, column: &Column) -> Self {
        AlterColumn {
            table: table.into(),
            column: column.clone(),
        }
        .into()
    }
}

impl From<AlterColumn> for Statement {
    fn from(value: AlterColumn) -> Self {
        Self::AlterColumn(value)
    }
}
