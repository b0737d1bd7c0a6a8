/// A foreign key declared on a column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Relationship {
    /// Constraint name, unique per database. Migration tracks created
    /// constraints by this name to avoid duplicate creation.
    pub constraint: String,

    /// Referenced table
    pub table: String,

    /// Referenced column
    pub column: String,
}
