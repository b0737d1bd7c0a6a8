use super::{Condition, Source};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JoinKind {
    Inner,
    Left,
    Right,
    Cross,
    /// Row-correlated subquery join. Server dialect only.
    CrossApply,
}

/// A join between two sources.
///
/// Joins listed on a [`Select`](super::Select) leave `left` unset: the
/// preceding FROM item is their implicit left operand and the serializer
/// does not re-emit it. A join used as a [`Source`] carries both operands.
#[derive(Debug, Clone, PartialEq)]
pub struct Join {
    pub kind: JoinKind,

    pub left: Option<Source>,

    pub right: Source,

    /// ON clause. Empty for cross joins and cross applies.
    pub on: Option<Condition>,
}

impl Join {
    /// A join whose left operand is implicit from its position in the
    /// statement's join list.
    pub fn new(kind: JoinKind, right: impl Into<Source>, on: impl Into<Option<Condition>>) -> Self {
        Self {
            kind,
            left: None,
            right: right.into(),
            on: on.into(),
        }
    }

    pub fn inner(right: impl Into<Source>, on: Condition) -> Self {
        Self::new(JoinKind::Inner, right, on)
    }

    pub fn left_outer(right: impl Into<Source>, on: Condition) -> Self {
        Self::new(JoinKind::Left, right, on)
    }

    pub fn cross(right: impl Into<Source>) -> Self {
        Self::new(JoinKind::Cross, right, None)
    }
}
