use super::{Formatter, Params, ToSql};

use quill_core::Result;

/// A quoted identifier. Both dialects accept square-bracket quoting; a
/// closing bracket inside the name doubles.
pub(super) struct Ident<S>(pub(super) S);

impl<S: AsRef<str>> ToSql for Ident<S> {
    fn to_sql<T: Params>(self, f: &mut Formatter<'_, T>) -> Result<()> {
        let name = self.0.as_ref();
        f.dst.push('[');
        for ch in name.chars() {
            if ch == ']' {
                f.dst.push(']');
            }
            f.dst.push(ch);
        }
        f.dst.push(']');
        Ok(())
    }
}
