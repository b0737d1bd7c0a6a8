use super::{Formatter, Params, ToSql};

use quill_core::stmt::NumFunc;
use quill_core::Result;

impl ToSql for &NumFunc {
    fn to_sql<T: Params>(self, f: &mut Formatter<'_, T>) -> Result<()> {
        match self {
            NumFunc::Abs(expr) => fmt!(f, "ABS(" expr ")"),
            NumFunc::Negate(expr) => fmt!(f, "(-" expr ")"),
            NumFunc::Ceiling(expr) => {
                if f.is_sqlite() {
                    fmt!(
                        f,
                        "(CAST(" expr " AS INTEGER) + (CASE WHEN " expr " > CAST(" expr " AS INTEGER) THEN 1 ELSE 0 END))"
                    );
                } else {
                    fmt!(f, "CEILING(" expr ")");
                }
            }
            NumFunc::Floor(expr) => {
                // SQLite's round() is half-away-from-zero, so this is exact
                // for every non-integer input.
                if f.is_sqlite() {
                    fmt!(f, "ROUND(" expr " - 0.5)");
                } else {
                    fmt!(f, "FLOOR(" expr ")");
                }
            }
            NumFunc::Round { expr, digits } => match digits {
                Some(digits) => fmt!(f, "ROUND(" expr ", " digits ")"),
                // T-SQL ROUND requires the length argument.
                None if f.is_mssql() => fmt!(f, "ROUND(" expr ", 0)"),
                None => fmt!(f, "ROUND(" expr ")"),
            },
            NumFunc::Truncate(expr) => {
                if f.is_sqlite() {
                    fmt!(f, "CAST(" expr " AS INTEGER)");
                } else {
                    fmt!(f, "ROUND(" expr ", 0, 1)");
                }
            }
            NumFunc::Sign(expr) => {
                if f.is_sqlite() {
                    fmt!(
                        f,
                        "CASE WHEN " expr " > 0 THEN 1 WHEN " expr " < 0 THEN -1 ELSE 0 END"
                    );
                } else {
                    fmt!(f, "SIGN(" expr ")");
                }
            }
            NumFunc::Power { base, exponent } => fmt!(f, "POWER(" base ", " exponent ")"),
            NumFunc::Sqrt(expr) => fmt!(f, "SQRT(" expr ")"),
            NumFunc::Exp(expr) => fmt!(f, "EXP(" expr ")"),
            NumFunc::Log(expr) => {
                // Natural log: LN on the embedded engine, LOG in T-SQL.
                if f.is_sqlite() {
                    fmt!(f, "LN(" expr ")");
                } else {
                    fmt!(f, "LOG(" expr ")");
                }
            }
            NumFunc::Log10(expr) => fmt!(f, "LOG10(" expr ")"),
            NumFunc::Sin(expr) => fmt!(f, "SIN(" expr ")"),
            NumFunc::Cos(expr) => fmt!(f, "COS(" expr ")"),
            NumFunc::Tan(expr) => fmt!(f, "TAN(" expr ")"),
            NumFunc::Asin(expr) => fmt!(f, "ASIN(" expr ")"),
            NumFunc::Acos(expr) => fmt!(f, "ACOS(" expr ")"),
            NumFunc::Atan(expr) => fmt!(f, "ATAN(" expr ")"),
        }

        Ok(())
    }
}
