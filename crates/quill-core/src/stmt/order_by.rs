use super::{Direction, Operand};

#[derive(Debug, Clone, PartialEq)]
pub struct OrderBy {
    /// The expression to order by
    pub expr: Operand,

    /// Ascending or descending
    pub direction: Direction,
}

impl OrderBy {
    pub fn new(expr: impl Into<Operand>, direction: Direction) -> Self {
        Self {
            expr: expr.into(),
            direction,
        }
    }

    pub fn asc(expr: impl Into<Operand>) -> Self {
        Self::new(expr, Direction::Asc)
    }

    pub fn desc(expr: impl Into<Operand>) -> Self {
        Self::new(expr, Direction::Desc)
    }
}
