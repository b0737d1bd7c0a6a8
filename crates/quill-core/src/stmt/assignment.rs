use super::{Column, Operand};

/// One `SET column = value` pair in an update.
#[derive(Debug, Clone, PartialEq)]
pub struct Assignment {
    pub column: Column,

    pub value: Operand,
}

impl Assignment {
    pub fn new(column: impl Into<String>, value: impl Into<Operand>) -> Self {
        Self {
            column: Column::unqualified(column),
            value: value.into(),
        }
    }
}
