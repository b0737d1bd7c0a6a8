//! Provider facade for the server dialect (SQL Server flavored T-SQL).
//!
//! Unlike the embedded driver, this crate opens nothing: the TDS client and
//! its connection lifecycle belong to the caller, who hands in anything
//! implementing the driver trait. The facade only fixes the dialect every
//! statement renders in.

use quill_core::driver::Connection;
use quill_core::schema::Schema;
use quill_core::stmt::Value;
use quill_core::Result;
use quill_sql::{Command, MigrationMode, Serializer, Statement};

/// The server-dialect facade. Stateless; one value serves any number of
/// connections.
#[derive(Debug, Clone, Copy, Default)]
pub struct SqlServer;

impl SqlServer {
    pub fn new() -> Self {
        Self
    }

    /// Renders a statement for the server dialect.
    pub fn build_command(&self, statement: &Statement) -> Result<Command> {
        Serializer::mssql().serialize(statement)
    }

    /// Wraps hand-written SQL and its positional parameter values.
    pub fn build_raw_command(&self, text: impl Into<String>, params: Vec<Value>) -> Command {
        Command::new(text.into(), params)
    }

    /// Reconciles the desired schema over the caller's connection.
    pub async fn migrate(
        &self,
        conn: &mut impl Connection,
        schema: &Schema,
        mode: MigrationMode,
    ) -> Result<Option<String>> {
        quill_sql::migrate::migrate(Serializer::mssql(), conn, schema, mode).await
    }

    /// Lists live columns the desired schema does not know about.
    pub async fn unmapped_columns(
        &self,
        conn: &mut impl Connection,
        schema: &Schema,
    ) -> Result<String> {
        quill_sql::migrate::unmapped_columns(Serializer::mssql(), conn, schema).await
    }
}
