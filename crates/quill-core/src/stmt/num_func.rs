use super::Operand;

/// Numeric functions.
#[derive(Debug, Clone, PartialEq)]
pub enum NumFunc {
    Abs(Operand),
    Negate(Operand),
    Ceiling(Operand),
    Floor(Operand),
    Round {
        expr: Operand,
        digits: Option<Operand>,
    },
    /// Toward zero.
    Truncate(Operand),
    Sign(Operand),
    Power {
        base: Operand,
        exponent: Operand,
    },
    Sqrt(Operand),
    Exp(Operand),
    /// Natural logarithm.
    Log(Operand),
    Log10(Operand),
    Sin(Operand),
    Cos(Operand),
    Tan(Operand),
    Asin(Operand),
    Acos(Operand),
    Atan(Operand),
}
