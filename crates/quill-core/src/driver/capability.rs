/// What a backing engine can do, consulted by the migrators to decide
/// which passes are real and which are documented skips.
#[derive(Debug)]
pub struct Capability {
    /// Supports `ALTER TABLE … ALTER COLUMN`. SQLite can only rename.
    pub alter_column: bool,

    /// Supports adding a foreign key to an existing table.
    pub add_foreign_key: bool,

    /// Supports views in a form the migrator manages.
    pub views: bool,

    /// Supports stored procedures.
    pub procedures: bool,

    /// Supports table-valued functions.
    pub functions: bool,

    /// Requires `SET IDENTITY_INSERT … ON` to insert explicit values into
    /// an identity column.
    pub identity_insert: bool,

    /// Supports `CROSS APPLY`.
    pub cross_apply: bool,
}

impl Capability {
    /// Embedded SQLite capabilities.
    pub const SQLITE: Self = Self {
        alter_column: false,
        add_foreign_key: false,
        views: false,
        procedures: false,
        functions: false,
        identity_insert: false,
        cross_apply: false,
    };

    /// SQL Server capabilities.
    pub const MSSQL: Self = Self {
        alter_column: true,
        add_foreign_key: true,
        views: true,
        procedures: true,
        functions: true,
        identity_insert: true,
        cross_apply: true,
    };
}
