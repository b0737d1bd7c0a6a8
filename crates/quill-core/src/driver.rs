mod capability;
pub use capability::Capability;

use crate::{async_trait, stmt::Value};

/// One result row, column values in select order.
pub type Row = Vec<Value>;

/// A live database connection.
///
/// Implementations wrap one underlying client connection. Callers hand a
/// connection to a migration run for its whole duration; nothing here pools
/// or re-opens.
#[async_trait]
pub trait Connection: Send {
    /// Describes the backing engine's capability, which informs the
    /// migrator's documented skips.
    fn capability(&self) -> &'static Capability;

    /// Executes a statement, returning the affected row count.
    async fn execute(&mut self, sql: &str, params: &[Value]) -> crate::Result<u64>;

    /// Runs a query, returning all rows.
    async fn query(&mut self, sql: &str, params: &[Value]) -> crate::Result<Vec<Row>>;
}
