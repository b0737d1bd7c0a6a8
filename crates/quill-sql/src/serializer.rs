#[macro_use]
mod fmt;
use fmt::ToSql;

mod command;
pub use command::Command;

mod delim;
use delim::{Comma, Delimited};

mod flavor;
use flavor::Flavor;

mod ident;
use ident::Ident;

mod params;
pub use params::{NoParams, Params, Placeholder};

// Fragment serializers
mod condition;
mod date_func;
mod ddl;
mod num_func;
mod operand;
mod statement;
mod str_func;
mod ty;
mod value;

use crate::stmt::Statement;
use quill_core::{stmt::Value, Result};

/// Serializes statements to dialect SQL.
///
/// The serializer is stateless; each call builds a fresh formatter, so one
/// serializer renders any number of statements and concurrent use is safe.
#[derive(Debug, Clone, Copy)]
pub struct Serializer {
    /// The flavor carries every divergence between the two dialects.
    flavor: Flavor,
}

struct Formatter<'a, T> {
    /// Handle to the serializer
    serializer: &'a Serializer,

    /// Where to write the serialized SQL
    dst: &'a mut String,

    /// Where to store parameters
    params: &'a mut T,

    /// Current query nesting level. A select with no projected fields
    /// renders `*` at depth zero and `NULL AS tmp` below it.
    depth: usize,

    /// Inline values as SQL literals instead of parameterizing. View
    /// bodies and DDL defaults render this way; neither can carry
    /// placeholders.
    literals: bool,
}

impl Serializer {
    /// Renders a statement into SQL text plus its deduplicated parameter
    /// values, in first-occurrence order.
    pub fn serialize(&self, statement: &Statement) -> Result<Command> {
        let mut params = vec![];
        let text = self.serialize_params(statement, &mut params)?;
        Ok(Command::new(text, params))
    }

    /// Renders into a caller-supplied parameter sink.
    pub fn serialize_params(
        &self,
        statement: &Statement,
        params: &mut impl Params,
    ) -> Result<String> {
        self.render(statement, params, false)
    }

    /// Renders with every value and parameter inlined as a SQL literal.
    pub fn serialize_literal(&self, statement: &Statement) -> Result<String> {
        self.render(statement, &mut NoParams, true)
    }

    /// Renders a single value as an inline SQL literal.
    pub fn literal(&self, value: &Value) -> String {
        let mut ret = String::new();
        let mut fmt = Formatter {
            serializer: self,
            dst: &mut ret,
            params: &mut NoParams,
            depth: 0,
            literals: true,
        };
        value::write_literal(value, &mut fmt);
        ret
    }

    fn render(
        &self,
        statement: &Statement,
        params: &mut impl Params,
        literals: bool,
    ) -> Result<String> {
        let mut ret = String::new();

        let mut fmt = Formatter {
            serializer: self,
            dst: &mut ret,
            params,
            depth: 0,
            literals,
        };

        statement.to_sql(&mut fmt)?;

        Ok(ret)
    }
}

impl<T> Formatter<'_, T> {
    fn is_mssql(&self) -> bool {
        matches!(self.serializer.flavor, Flavor::Mssql)
    }

    fn is_sqlite(&self) -> bool {
        matches!(self.serializer.flavor, Flavor::Sqlite)
    }
}
