use super::Operand;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DatePart {
    Year,
    Quarter,
    Month,
    Day,
    DayOfYear,
    /// 1 = Sunday through 7 = Saturday, both dialects.
    DayOfWeek,
    Hour,
    Minute,
    Second,
    Millisecond,
}

/// Date and time functions.
#[derive(Debug, Clone, PartialEq)]
pub enum DateFunc {
    /// Extracts one calendar field as an integer.
    Part { part: DatePart, expr: Operand },

    /// Adds `amount` units of `part`. Exact calendar arithmetic on both
    /// dialects, including rollover when adding time parts crosses a date
    /// boundary.
    Add {
        part: DatePart,
        expr: Operand,
        amount: Operand,
    },

    /// Counts `part` boundaries crossed between `start` and `end`.
    Diff {
        part: DatePart,
        start: Operand,
        end: Operand,
    },

    /// Builds a datetime from numeric fields. Time fields default to zero.
    FromParts {
        year: Operand,
        month: Operand,
        day: Operand,
        hour: Option<Operand>,
        minute: Option<Operand>,
        second: Option<Operand>,
    },
}
