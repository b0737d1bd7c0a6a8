use crate::stmt::Statement;

use quill_core::schema::Table;

/// `CREATE TABLE` with every desired column and the primary key clause.
#[derive(Debug, Clone)]
pub struct CreateTable {
    pub table: Table,
}

impl Statement {
    pub fn create_table(table: &Table) -> Self {
        CreateTable {
            table: table.clone(),
        }
        .into()
    }
}

impl From<CreateTable> for Statement {
    fn from(value: CreateTable) -> Self {
        Self::CreateTable(value)
    }
}
