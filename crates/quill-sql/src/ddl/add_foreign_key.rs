use crate::stmt::Statement;

use quill_core::schema::Relationship;

/// `ALTER TABLE … ADD CONSTRAINT … FOREIGN KEY … REFERENCES …`.
#[derive(Debug, Clone)]
pub struct AddForeignKey {
    pub table: String,

    pub column: String,

    pub constraint: String,

    pub target_table: String,

    pub target_column: String,
}

impl Statement {
    pub fn add_foreign_key(
        table: impl Into<String>,
        column: impl Into<String>,
        relationship: &Relationship,
    ) -> Self {
        AddForeignKey {
            table: table.into(),
            column: column.into(),
            constraint: relationship.constraint.clone(),
            target_table: relationship.table.clone(),
            target_column: relationship.column.clone(),
        }
        .into()
    }
}

impl From<AddForeignKey> for Statement {
    fn from(value: AddForeignKey) -> Self {
        Self::AddForeignKey(value)
    }
}
