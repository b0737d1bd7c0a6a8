use super::Serializer;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Flavor {
    /// Embedded SQLite.
    Sqlite,

    /// SQL Server T-SQL.
    Mssql,
}

impl Serializer {
    pub fn sqlite() -> Serializer {
        Serializer {
            flavor: Flavor::Sqlite,
        }
    }

    pub fn mssql() -> Serializer {
        Serializer {
            flavor: Flavor::Mssql,
        }
    }

    /// The migrator dispatches its introspection queries on the flavor.
    pub(crate) fn is_sqlite(&self) -> bool {
        matches!(self.flavor, Flavor::Sqlite)
    }
}
