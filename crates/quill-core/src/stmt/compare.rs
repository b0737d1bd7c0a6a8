use super::{CompareOp, Condition, Operand};

impl Condition {
    pub fn compare(field: impl Into<Operand>, op: CompareOp, value: impl Into<Operand>) -> Self {
        Compare {
            field: field.into(),
            op,
            values: vec![value.into()],
            negate: false,
        }
        .into()
    }

    pub fn eq(field: impl Into<Operand>, value: impl Into<Operand>) -> Self {
        Self::compare(field, CompareOp::Eq, value)
    }

    pub fn ne(field: impl Into<Operand>, value: impl Into<Operand>) -> Self {
        Self::compare(field, CompareOp::Ne, value)
    }

    pub fn lt(field: impl Into<Operand>, value: impl Into<Operand>) -> Self {
        Self::compare(field, CompareOp::Lt, value)
    }

    pub fn le(field: impl Into<Operand>, value: impl Into<Operand>) -> Self {
        Self::compare(field, CompareOp::Le, value)
    }

    pub fn gt(field: impl Into<Operand>, value: impl Into<Operand>) -> Self {
        Self::compare(field, CompareOp::Gt, value)
    }

    pub fn ge(field: impl Into<Operand>, value: impl Into<Operand>) -> Self {
        Self::compare(field, CompareOp::Ge, value)
    }

    pub fn is_in(field: impl Into<Operand>, values: impl IntoIterator<Item = Operand>) -> Self {
        Compare {
            field: field.into(),
            op: CompareOp::In,
            values: values.into_iter().collect(),
            negate: false,
        }
        .into()
    }

    pub fn between(
        field: impl Into<Operand>,
        low: impl Into<Operand>,
        high: impl Into<Operand>,
    ) -> Self {
        Compare {
            field: field.into(),
            op: CompareOp::Between,
            values: vec![low.into(), high.into()],
            negate: false,
        }
        .into()
    }

    /// Null test, rendered `IS NULL` (the equality form a caller would
    /// otherwise write is rewritten to this at render time anyway).
    pub fn is_null(field: impl Into<Operand>) -> Self {
        Self::eq(field, Operand::null())
    }
}

/// A leaf condition: one field compared against one or more values.
#[derive(Debug, Clone, PartialEq)]
pub struct Compare {
    pub field: Operand,

    pub op: CompareOp,

    /// One value for the binary operators, any number for `In`, exactly two
    /// for `Between`.
    pub values: Vec<Operand>,

    /// Negates the whole leaf: `NOT (…)`.
    pub negate: bool,
}

impl Compare {
    /// The single comparison value, for the operators that take one.
    pub fn value(&self) -> Option<&Operand> {
        match self.values.as_slice() {
            [value] => Some(value),
            _ => None,
        }
    }
}

impl From<Compare> for Condition {
    fn from(value: Compare) -> Self {
        Self::Compare(value)
    }
}
