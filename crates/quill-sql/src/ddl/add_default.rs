use crate::stmt::Statement;

use quill_core::stmt::Value;

/// `ALTER TABLE … ADD CONSTRAINT [DF_<table>_<column>] DEFAULT <literal>
/// FOR [column]`. Server dialect only; the embedded engine declares
/// defaults inline at table creation.
#[derive(Debug, Clone)]
pub struct AddDefault {
    pub table: String,

    pub column: String,

    /// Constraint name, `DF_<table>_<column>` by convention.
    pub constraint: String,

    pub value: Value,
}

impl Statement {
    pub fn add_default(
        table: impl Into<String>,
        column: impl Into<String>,
        value: impl Into<Value>,
    ) -> Self {
        let table = table.into();
        let column = column.into();

        AddDefault {
            constraint: format!("DF_{table}_{column}"),
            table,
            column,
            value: value.into(),
        }
        .into()
    }
}

impl From<AddDefault> for Statement {
    fn from(value: AddDefault) -> Self {
        Self::AddDefault(value)
    }
}
