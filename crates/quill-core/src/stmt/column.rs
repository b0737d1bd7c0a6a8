use super::Operand;

/// A column reference, optionally qualified by the owning table's name or
/// alias. The name `*` is the whole-row sentinel.
#[derive(Debug, Clone, PartialEq)]
pub struct Column {
    /// Qualifier to render before the column name, already resolved to the
    /// owning table's alias (or name) by whoever built the statement.
    pub table: Option<String>,

    pub name: String,
}

impl Column {
    pub fn new(table: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            table: Some(table.into()),
            name: name.into(),
        }
    }

    pub fn unqualified(name: impl Into<String>) -> Self {
        Self {
            table: None,
            name: name.into(),
        }
    }

    /// The whole-row sentinel, `*`.
    pub fn star() -> Self {
        Self::unqualified("*")
    }

    pub fn is_star(&self) -> bool {
        self.name == "*"
    }
}

impl From<Column> for Operand {
    fn from(value: Column) -> Self {
        Self::Column(value)
    }
}
