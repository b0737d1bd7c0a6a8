use crate::stmt::Statement;

/// `ALTER TABLE … ADD CONSTRAINT [PK_<table>] PRIMARY KEY`, used to restore
/// a primary key dropped around an `ALTER COLUMN`. Server dialect only.
#[derive(Debug, Clone)]
pub struct AddPrimaryKey {
    pub table: String,

    pub column: String,
}

impl Statement {
    pub fn add_primary_key(table: impl Into<String>, column: impl Into<String>) -> Self {
        AddPrimaryKey {
            table: table.into(),
            column: column.into(),
        }
        .into()
    }
}

impl From<AddPrimaryKey> for Statement {
    fn from(value: AddPrimaryKey) -> Self {
        Self::AddPrimaryKey(value)
    }
}
