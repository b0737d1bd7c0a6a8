use super::{Condition, Operand};

/// A conditional case expression.
///
/// Else-if chains nest through `otherwise`: the serializer flattens
/// consecutive cases into one `CASE WHEN … WHEN … ELSE … END`.
#[derive(Debug, Clone, PartialEq)]
pub struct Case {
    pub when: Condition,

    pub then: Operand,

    pub otherwise: Operand,
}

impl Case {
    pub fn new(when: Condition, then: impl Into<Operand>, otherwise: impl Into<Operand>) -> Self {
        Self {
            when,
            then: then.into(),
            otherwise: otherwise.into(),
        }
    }
}
