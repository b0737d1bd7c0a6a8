use super::{Join, Select, TableRef};

/// The FROM part of a select.
#[derive(Debug, Clone, PartialEq)]
pub enum Source {
    /// A plain table reference
    Table(TableRef),

    /// A subquery. Nested sources always carry an alias; both dialects
    /// reject an anonymous derived table.
    Query { select: Box<Select>, alias: String },

    /// A join carrying both of its operands.
    Join(Box<Join>),
}

impl Source {
    pub fn table(table: impl Into<TableRef>) -> Self {
        Self::Table(table.into())
    }

    pub fn query(select: Select, alias: impl Into<String>) -> Self {
        Self::Query {
            select: Box::new(select),
            alias: alias.into(),
        }
    }

    pub fn as_table(&self) -> Option<&TableRef> {
        match self {
            Self::Table(table) => Some(table),
            _ => None,
        }
    }

    /// The name columns of this source qualify themselves with.
    pub fn qualifier(&self) -> Option<&str> {
        match self {
            Self::Table(table) => Some(table.qualifier()),
            Self::Query { alias, .. } => Some(alias),
            Self::Join(_) => None,
        }
    }
}

impl From<TableRef> for Source {
    fn from(value: TableRef) -> Self {
        Self::Table(value)
    }
}

impl From<Join> for Source {
    fn from(value: Join) -> Self {
        Self::Join(Box::new(value))
    }
}
