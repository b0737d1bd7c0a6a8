use super::{Assignment, Condition, Statement, TableRef};
use crate::{Error, Result};

/// An UPDATE with a mandatory, non-empty condition.
///
/// An unconditional update is treated as a programming error, not as a
/// request to update every row; [`Update::new`] refuses to build one and
/// the serializers re-check before rendering.
#[derive(Debug, Clone, PartialEq)]
pub struct Update {
    pub table: TableRef,

    pub assignments: Vec<Assignment>,

    pub filter: Condition,
}

impl Update {
    pub fn new(
        table: impl Into<TableRef>,
        assignments: impl IntoIterator<Item = Assignment>,
        filter: Condition,
    ) -> Result<Self> {
        if filter.is_empty() {
            return Err(Error::unsafe_statement(
                "UPDATE requires at least one condition",
            ));
        }

        Ok(Self {
            table: table.into(),
            assignments: assignments.into_iter().collect(),
            filter,
        })
    }
}

impl From<Update> for Statement {
    fn from(value: Update) -> Self {
        Self::Update(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stmt::{Column, ConditionGroup};

    #[test]
    fn rejects_empty_filter() {
        let err = Update::new(
            "customers",
            [Assignment::new("city", "Paris")],
            Condition::Group(ConditionGroup::new()),
        )
        .unwrap_err();
        assert!(err.is_unsafe_statement());
    }

    #[test]
    fn accepts_conditional_update() {
        let update = Update::new(
            "customers",
            [Assignment::new("city", "Paris")],
            Condition::eq(Column::unqualified("id"), 1_i64),
        )
        .unwrap();
        assert_eq!(update.assignments.len(), 1);
    }
}
