use super::{Relationship, ValueType};
use crate::stmt::Value;

/// A desired column.
#[derive(Debug, Clone)]
pub struct Column {
    /// The name of the column in the database.
    pub name: String,

    /// The column's value type.
    pub ty: ValueType,

    /// Maximum length for string columns. `None` renders as the dialect's
    /// unbounded form.
    pub max_length: Option<u32>,

    /// Whether or not the column is nullable
    pub nullable: bool,

    /// Default value, also used to back-fill NULLs when a column tightens
    /// from nullable to non-nullable.
    pub default: Option<Value>,

    /// True if the column is an integer primary key the database assigns
    /// automatically on insert.
    pub auto_increment: bool,

    /// Foreign key this column participates in, if any.
    pub relationship: Option<Relationship>,
}

impl Column {
    pub fn new(name: impl Into<String>, ty: ValueType) -> Self {
        Self {
            name: name.into(),
            ty,
            max_length: None,
            nullable: false,
            default: None,
            auto_increment: false,
            relationship: None,
        }
    }

    pub fn nullable(mut self) -> Self {
        self.nullable = true;
        self
    }

    pub fn max_length(mut self, max_length: u32) -> Self {
        self.max_length = Some(max_length);
        self
    }

    pub fn default_value(mut self, value: impl Into<Value>) -> Self {
        self.default = Some(value.into());
        self
    }

    pub fn auto_increment(mut self) -> Self {
        self.auto_increment = true;
        self
    }

    /// Declares a foreign key from this column.
    pub fn references(
        mut self,
        constraint: impl Into<String>,
        table: impl Into<String>,
        column: impl Into<String>,
    ) -> Self {
        self.relationship = Some(Relationship {
            constraint: constraint.into(),
            table: table.into(),
            column: column.into(),
        });
        self
    }
}
