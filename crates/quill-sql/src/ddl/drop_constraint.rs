use crate::stmt::Statement;

/// `ALTER TABLE … DROP CONSTRAINT`, by name. Server dialect only.
#[derive(Debug, Clone)]
pub struct DropConstraint {
    pub table: String,

    pub name: String,
}

impl Statement {
    pub fn drop_constraint(table: impl Into<String>, name: impl Into<String>) -> Self {
        DropConstraint {
            table: table.into(),
            name: name.into(),
        }
        .into()
    }
}

impl From<DropConstraint> for Statement {
    fn from(value: DropConstraint) -> Self {
        Self::DropConstraint(value)
    }
}
