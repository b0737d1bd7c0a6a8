use super::{Column, Operand, Select, Statement, TableRef};

#[derive(Debug, Clone, PartialEq)]
pub struct Insert {
    pub table: TableRef,

    pub source: InsertSource,
}

/// Where an insert's row comes from.
#[derive(Debug, Clone, PartialEq)]
pub enum InsertSource {
    /// Explicit (column, value) pairs
    Values(Vec<(Column, Operand)>),

    /// A column list fed by a nested select
    Query {
        columns: Vec<Column>,
        select: Box<Select>,
    },

    /// `INSERT INTO t DEFAULT VALUES`
    DefaultValues,
}

impl Insert {
    pub fn values(
        table: impl Into<TableRef>,
        values: impl IntoIterator<Item = (Column, Operand)>,
    ) -> Self {
        Self {
            table: table.into(),
            source: InsertSource::Values(values.into_iter().collect()),
        }
    }

    pub fn from_select(
        table: impl Into<TableRef>,
        columns: impl IntoIterator<Item = Column>,
        select: Select,
    ) -> Self {
        Self {
            table: table.into(),
            source: InsertSource::Query {
                columns: columns.into_iter().collect(),
                select: Box::new(select),
            },
        }
    }

    pub fn default_values(table: impl Into<TableRef>) -> Self {
        Self {
            table: table.into(),
            source: InsertSource::DefaultValues,
        }
    }
}

impl From<Insert> for Statement {
    fn from(value: Insert) -> Self {
        Self::Insert(value)
    }
}
