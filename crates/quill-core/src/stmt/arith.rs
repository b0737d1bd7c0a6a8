use super::Operand;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArithOp {
    Add,
    Sub,
    Mul,
    Div,
    Mod,
}

impl ArithOp {
    pub fn symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Mod => "%",
        }
    }
}

/// Binary arithmetic between two operands.
#[derive(Debug, Clone, PartialEq)]
pub struct Arith {
    pub left: Operand,

    pub op: ArithOp,

    pub right: Operand,
}

impl Operand {
    pub fn arith(left: impl Into<Operand>, op: ArithOp, right: impl Into<Operand>) -> Self {
        Arith {
            left: left.into(),
            op,
            right: right.into(),
        }
        .into()
    }
}
