use super::Operand;

/// String functions.
///
/// `Substring`, `Remove` and `IndexOf` use 0-based offsets here; each
/// dialect adjusts to its native 1-based functions at render time.
#[derive(Debug, Clone, PartialEq)]
pub enum StrFunc {
    Length(Operand),

    Substring {
        expr: Operand,
        start: Operand,
        length: Option<Operand>,
    },

    /// Deletes `count` characters starting at `start`, or everything from
    /// `start` when `count` is omitted.
    Remove {
        expr: Operand,
        start: Operand,
        count: Option<Operand>,
    },

    /// 0-based position of `search` in `expr`, -1 when absent.
    IndexOf {
        expr: Operand,
        search: Operand,
    },

    Upper(Operand),

    Lower(Operand),

    Replace {
        expr: Operand,
        from: Operand,
        to: Operand,
    },

    Trim(Operand),

    /// Three-way ordering: -1, 0 or 1.
    Compare {
        left: Operand,
        right: Operand,
    },

    Concat(Vec<Operand>),
}
