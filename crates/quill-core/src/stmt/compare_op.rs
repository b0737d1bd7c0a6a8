#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompareOp {
    /// Equal. Against a null constant this renders `IS NULL`.
    Eq,
    /// Not equal. Against a null constant this renders `IS NOT NULL`.
    Ne,
    Lt,
    Le,
    Gt,
    Ge,
    /// Membership in a literal list or subquery
    In,
    /// Substring match
    Contains,
    /// Prefix match
    StartsWith,
    /// Suffix match
    EndsWith,
    /// Inclusive range over two comparison values
    Between,
}

impl CompareOp {
    /// The plain binary operator text, for the operators that have one.
    pub fn binary_symbol(self) -> Option<&'static str> {
        match self {
            Self::Eq => Some("="),
            Self::Ne => Some("<>"),
            Self::Lt => Some("<"),
            Self::Le => Some("<="),
            Self::Gt => Some(">"),
            Self::Ge => Some(">="),
            _ => None,
        }
    }
}
