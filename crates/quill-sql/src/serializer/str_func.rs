use super::{Delimited, Formatter, Params, ToSql};

use quill_core::stmt::StrFunc;
use quill_core::Result;

// Offsets are 0-based in the statement model; both engines' native string
// functions are 1-based, so starts add one on the way in and index-of
// subtracts one on the way out.
impl ToSql for &StrFunc {
    fn to_sql<T: Params>(self, f: &mut Formatter<'_, T>) -> Result<()> {
        match self {
            StrFunc::Length(expr) => {
                if f.is_sqlite() {
                    fmt!(f, "LENGTH(" expr ")");
                } else {
                    fmt!(f, "LEN(" expr ")");
                }
            }
            StrFunc::Substring {
                expr,
                start,
                length,
            } => {
                if f.is_sqlite() {
                    fmt!(f, "SUBSTR(" expr ", " start " + 1");
                    if let Some(length) = length {
                        fmt!(f, ", " length);
                    }
                    fmt!(f, ")");
                } else {
                    // SUBSTRING requires the length argument.
                    fmt!(f, "SUBSTRING(" expr ", " start " + 1, ");
                    match length {
                        Some(length) => fmt!(f, length),
                        None => fmt!(f, "LEN(" expr ")"),
                    }
                    fmt!(f, ")");
                }
            }
            StrFunc::Remove { expr, start, count } => {
                if f.is_sqlite() {
                    match count {
                        Some(count) => fmt!(
                            f,
                            "(SUBSTR(" expr ", 1, " start ") || SUBSTR(" expr ", " start " + " count " + 1))"
                        ),
                        None => fmt!(f, "SUBSTR(" expr ", 1, " start ")"),
                    }
                } else {
                    fmt!(f, "STUFF(" expr ", " start " + 1, ");
                    match count {
                        Some(count) => fmt!(f, count),
                        None => fmt!(f, "LEN(" expr ")"),
                    }
                    fmt!(f, ", '')");
                }
            }
            StrFunc::IndexOf { expr, search } => {
                if f.is_sqlite() {
                    fmt!(f, "(INSTR(" expr ", " search ") - 1)");
                } else {
                    fmt!(f, "(CHARINDEX(" search ", " expr ") - 1)");
                }
            }
            StrFunc::Upper(expr) => fmt!(f, "UPPER(" expr ")"),
            StrFunc::Lower(expr) => fmt!(f, "LOWER(" expr ")"),
            StrFunc::Replace { expr, from, to } => {
                fmt!(f, "REPLACE(" expr ", " from ", " to ")");
            }
            StrFunc::Trim(expr) => {
                if f.is_sqlite() {
                    fmt!(f, "TRIM(" expr ")");
                } else {
                    fmt!(f, "LTRIM(RTRIM(" expr "))");
                }
            }
            StrFunc::Compare { left, right } => {
                fmt!(
                    f,
                    "CASE WHEN " left " < " right " THEN -1 WHEN " left " > " right " THEN 1 ELSE 0 END"
                );
            }
            StrFunc::Concat(items) => {
                let sep = if f.is_sqlite() { " || " } else { " + " };
                let items = Delimited(items, sep);
                fmt!(f, "(" items ")");
            }
        }

        Ok(())
    }
}
