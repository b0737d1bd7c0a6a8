use crate::stmt::Statement;

use quill_core::schema::Column;

/// `ALTER TABLE … ADD` for one missing column.
#[derive(Debug, Clone)]
pub struct AddColumn {
    pub table: String,

    pub column: Column,
}

impl Statement {
    pub fn add_column(table: impl Into<String>, column: &Column) -> Self {
        AddColumn {
            table: table.into(),
            column: column.clone(),
        }
        .into()
    }
}

impl From<AddColumn> for Statement {
    fn from(value: AddColumn) -> Self {
        Self::AddColumn(value)
    }
}
