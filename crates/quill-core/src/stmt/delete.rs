use super::{Condition, Statement, TableRef};
use crate::{Error, Result};

/// A DELETE with a mandatory, non-empty condition.
///
/// Same contract as [`Update`](super::Update): deleting a whole table must
/// be spelled some other way, never reached by accident through an empty
/// condition list.
#[derive(Debug, Clone, PartialEq)]
pub struct Delete {
    pub table: TableRef,

    pub filter: Condition,
}

impl Delete {
    pub fn new(table: impl Into<TableRef>, filter: Condition) -> Result<Self> {
        if filter.is_empty() {
            return Err(Error::unsafe_statement(
                "DELETE requires at least one condition",
            ));
        }

        Ok(Self {
            table: table.into(),
            filter,
        })
    }
}

impl From<Delete> for Statement {
    fn from(value: Delete) -> Self {
        Self::Delete(value)
    }
}
