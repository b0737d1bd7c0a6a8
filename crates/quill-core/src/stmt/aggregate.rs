use super::Operand;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AggregateFunc {
    Count,
    /// 64-bit count. The server dialect renders `COUNT_BIG`; the embedded
    /// engine's `COUNT` is already 64-bit.
    BigCount,
    Sum,
    Min,
    Max,
    Avg,
}

/// An aggregate over an optional argument.
///
/// A count with no argument renders `COUNT(*)`.
#[derive(Debug, Clone, PartialEq)]
pub struct Aggregate {
    pub func: AggregateFunc,

    pub distinct: bool,

    pub arg: Option<Operand>,
}

impl Aggregate {
    pub fn new(func: AggregateFunc, arg: impl Into<Option<Operand>>) -> Self {
        Self {
            func,
            distinct: false,
            arg: arg.into(),
        }
    }

    pub fn count_star() -> Self {
        Self::new(AggregateFunc::Count, None)
    }

    pub fn distinct(mut self) -> Self {
        self.distinct = true;
        self
    }
}
