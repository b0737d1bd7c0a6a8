use super::Operand;

/// A raw, unescaped SQL fragment.
///
/// Used sparingly, for fragments the statement model cannot otherwise
/// express (date-part keywords, dialect function oddities). Never built
/// from user input.
#[derive(Debug, Clone, PartialEq)]
pub struct Literal(pub String);

impl Literal {
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }
}

impl From<Literal> for Operand {
    fn from(value: Literal) -> Self {
        Self::Literal(value)
    }
}
