use super::{Formatter, ToSql};

use quill_core::{stmt::Value, Result};

/// Parameter sink used while rendering.
///
/// Pushing a value that compares equal to an already-pushed one must
/// return the existing ordinal: same value, same placeholder, and the
/// parameter list never grows for a repeat.
pub trait Params {
    fn push(&mut self, value: &Value) -> Placeholder;
}

/// Ordinal position of a parameter in the deduplicated list.
pub struct Placeholder(pub usize);

impl Params for Vec<Value> {
    fn push(&mut self, value: &Value) -> Placeholder {
        if let Some(existing) = self.iter().position(|seen| seen == value) {
            return Placeholder(existing);
        }
        self.push(value.clone());
        Placeholder(self.len() - 1)
    }
}

/// Sink for statements that must not produce any parameter, like DDL and
/// literal-mode renders.
pub struct NoParams;

impl Params for NoParams {
    fn push(&mut self, value: &Value) -> Placeholder {
        panic!("statement unexpectedly produced a parameter: {value:?}")
    }
}

impl ToSql for Placeholder {
    fn to_sql<T: Params>(self, f: &mut Formatter<'_, T>) -> Result<()> {
        use std::fmt::Write;

        write!(f.dst, "@{}", self.0).unwrap();
        Ok(())
    }
}
