//! Provider facade for the embedded dialect, backed by bundled SQLite.
//!
//! [`Sqlite`] owns the connection URL or path; [`SqliteConnection`] wraps one
//! live `rusqlite` connection and implements the driver trait the migrator
//! runs against. Statements render through the embedded serializer, so the
//! placeholders here are always the `@0`, `@1`, … ordinals in first-use
//! order, which SQLite binds as named parameters.

mod value;
use value::Bind;

use quill_core::driver::{Capability, Connection, Row};
use quill_core::schema::{Schema, ValueType};
use quill_core::stmt::Value;
use quill_core::{async_trait, Error, Result};
use quill_sql::{catalog, Command, MigrationMode, Serializer, Statement};

use rusqlite::Connection as RusqliteConnection;
use std::path::{Path, PathBuf};
use url::Url;

/// Where the database lives.
#[derive(Debug)]
pub enum Sqlite {
    File(PathBuf),
    InMemory,
}

impl Sqlite {
    /// Parses a connection URL, accepting `sqlite:path` and
    /// `sqlite::memory:` forms. Anything else is a usage error.
    pub fn new(url: impl Into<String>) -> Result<Self> {
        let text = url.into();
        let url = Url::parse(&text).map_err(Error::driver)?;

        if url.scheme() != "sqlite" {
            return Err(anyhow::anyhow!(
                "connection URL does not have a `sqlite` scheme; url={text}"
            )
            .into());
        }

        if url.path() == ":memory:" {
            Ok(Self::InMemory)
        } else {
            Ok(Self::File(PathBuf::from(url.path())))
        }
    }

    /// An in-memory database, private to its connection.
    pub fn in_memory() -> Self {
        Self::InMemory
    }

    /// A database file at the given path, created on first connect.
    pub fn open<P: AsRef<Path>>(path: P) -> Self {
        Self::File(path.as_ref().to_path_buf())
    }

    /// Opens one connection. In-memory databases vanish with their
    /// connection; connecting twice gives two empty databases.
    pub fn connect(&self) -> Result<SqliteConnection> {
        let connection = match self {
            Self::File(path) => RusqliteConnection::open(path).map_err(Error::driver)?,
            Self::InMemory => RusqliteConnection::open_in_memory().map_err(Error::driver)?,
        };

        Ok(SqliteConnection { connection })
    }
}

/// Renders a statement for the embedded dialect.
pub fn build_command(statement: &Statement) -> Result<Command> {
    Serializer::sqlite().serialize(statement)
}

/// Wraps hand-written SQL and its positional parameter values.
pub fn build_raw_command(text: impl Into<String>, params: Vec<Value>) -> Command {
    Command::new(text.into(), params)
}

/// Reconciles the desired schema over the given connection.
pub async fn migrate(
    conn: &mut SqliteConnection,
    schema: &Schema,
    mode: MigrationMode,
) -> Result<Option<String>> {
    quill_sql::migrate::migrate(Serializer::sqlite(), conn, schema, mode).await
}

/// Lists live columns the desired schema does not know about.
pub async fn unmapped_columns(conn: &mut SqliteConnection, schema: &Schema) -> Result<String> {
    quill_sql::migrate::unmapped_columns(Serializer::sqlite(), conn, schema).await
}

/// One live connection.
pub struct SqliteConnection {
    connection: RusqliteConnection,
}

#[async_trait]
impl Connection for SqliteConnection {
    fn capability(&self) -> &'static Capability {
        &Capability::SQLITE
    }

    async fn execute(&mut self, sql: &str, params: &[Value]) -> Result<u64> {
        let mut statement = self.connection.prepare_cached(sql).map_err(Error::driver)?;

        let count = statement
            .execute(rusqlite::params_from_iter(params.iter().map(Bind)))
            .map_err(Error::driver)?;

        Ok(count as u64)
    }

    async fn query(&mut self, sql: &str, params: &[Value]) -> Result<Vec<Row>> {
        let mut statement = self.connection.prepare_cached(sql).map_err(Error::driver)?;

        // Declared types drive text decoding; expression columns have none.
        let types: Vec<Option<ValueType>> = statement
            .columns()
            .iter()
            .map(|column| {
                column
                    .decl_type()
                    .and_then(|decl| catalog::parse_native_type(decl).ok())
                    .map(|(ty, _)| ty)
            })
            .collect();

        let mut rows = statement
            .query(rusqlite::params_from_iter(params.iter().map(Bind)))
            .map_err(Error::driver)?;

        let mut ret = Vec::new();
        while let Some(row) = rows.next().map_err(Error::driver)? {
            let mut values = Vec::with_capacity(types.len());
            for (index, ty) in types.iter().enumerate() {
                let cell = row.get_ref(index).map_err(Error::driver)?;
                values.push(value::decode(cell, *ty)?);
            }
            ret.push(values);
        }

        Ok(ret)
    }
}
