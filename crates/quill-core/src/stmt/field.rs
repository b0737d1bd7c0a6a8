use super::Operand;

/// A projected field: an operand plus an optional output alias.
#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    pub expr: Operand,

    /// Rendered as `AS alias` when the output name differs from whatever
    /// the operand would naturally be called.
    pub alias: Option<String>,
}

impl Field {
    pub fn new(expr: impl Into<Operand>) -> Self {
        Self {
            expr: expr.into(),
            alias: None,
        }
    }

    pub fn aliased(expr: impl Into<Operand>, alias: impl Into<String>) -> Self {
        Self {
            expr: expr.into(),
            alias: Some(alias.into()),
        }
    }
}

impl From<Operand> for Field {
    fn from(value: Operand) -> Self {
        Self::new(value)
    }
}
