//! What a live database currently contains, as discovered by the
//! introspection pass that starts every migration run.

use crate::serializer::Serializer;

use quill_core::schema::{Column, ValueType};
use quill_core::{Error, Result};

use indexmap::{IndexMap, IndexSet};

/// Existing database state, keyed by lower-cased name so lookups are
/// case-insensitive while preserving discovery order.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    pub tables: IndexMap<String, ExistingTable>,

    /// View name to stored definition text.
    pub views: IndexMap<String, String>,

    /// Procedure name to stored definition text.
    pub procedures: IndexMap<String, String>,

    /// Function name to stored definition text.
    pub functions: IndexMap<String, String>,

    /// Foreign-key constraint names.
    pub foreign_keys: IndexSet<String>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_table(&mut self, table: ExistingTable) {
        self.tables.insert(table.name.to_lowercase(), table);
    }

    pub fn table(&self, name: &str) -> Option<&ExistingTable> {
        self.tables.get(&name.to_lowercase())
    }

    pub fn table_mut(&mut self, name: &str) -> Option<&mut ExistingTable> {
        self.tables.get_mut(&name.to_lowercase())
    }

    pub fn add_view(&mut self, name: &str, text: impl Into<String>) {
        self.views.insert(name.to_lowercase(), text.into());
    }

    pub fn view(&self, name: &str) -> Option<&str> {
        self.views.get(&name.to_lowercase()).map(String::as_str)
    }

    pub fn add_procedure(&mut self, name: &str, text: impl Into<String>) {
        self.procedures.insert(name.to_lowercase(), text.into());
    }

    pub fn procedure(&self, name: &str) -> Option<&str> {
        self.procedures.get(&name.to_lowercase()).map(String::as_str)
    }

    pub fn add_function(&mut self, name: &str, text: impl Into<String>) {
        self.functions.insert(name.to_lowercase(), text.into());
    }

    pub fn function(&self, name: &str) -> Option<&str> {
        self.functions.get(&name.to_lowercase()).map(String::as_str)
    }

    pub fn add_foreign_key(&mut self, name: &str) {
        self.foreign_keys.insert(name.to_lowercase());
    }

    pub fn has_foreign_key(&self, name: &str) -> bool {
        self.foreign_keys.contains(&name.to_lowercase())
    }

    pub fn remove_foreign_key(&mut self, name: &str) {
        self.foreign_keys.shift_remove(&name.to_lowercase());
    }
}

/// One live table.
#[derive(Debug, Clone)]
pub struct ExistingTable {
    pub name: String,

    pub columns: IndexMap<String, ExistingColumn>,

    /// Primary key constraint name, when the dialect names one.
    pub primary_key: Option<String>,
}

impl ExistingTable {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            columns: IndexMap::new(),
            primary_key: None,
        }
    }

    pub fn add_column(&mut self, column: ExistingColumn) {
        self.columns.insert(column.name.to_lowercase(), column);
    }

    pub fn column(&self, name: &str) -> Option<&ExistingColumn> {
        self.columns.get(&name.to_lowercase())
    }
}

/// One live column.
#[derive(Debug, Clone)]
pub struct ExistingColumn {
    pub name: String,

    pub ty: ValueType,

    pub max_length: Option<u32>,

    pub nullable: bool,

    /// Raw default text exactly as the catalog reports it.
    pub default: Option<String>,
}

impl ExistingColumn {
    /// Whether the live column needs an ALTER to match the desired one.
    /// Compares type, length, nullability and default; the desired default
    /// is rendered as a dialect literal and held against the normalized
    /// catalog text.
    pub fn differs(&self, desired: &Column, serializer: &Serializer) -> bool {
        if self.ty != desired.ty
            || self.max_length != desired.max_length
            || self.nullable != desired.nullable
        {
            return true;
        }

        match (&self.default, &desired.default) {
            (None, None) => false,
            (Some(existing), Some(value)) => {
                !normalize_default(existing).eq_ignore_ascii_case(&serializer.literal(value))
            }
            _ => true,
        }
    }
}

/// Strips the wrapping the server catalog stores around default text:
/// layered parentheses and the `N` unicode string prefix.
fn normalize_default(mut raw: &str) -> &str {
    raw = raw.trim();

    while raw.len() >= 2 && raw.starts_with('(') && raw.ends_with(')') {
        raw = raw[1..raw.len() - 1].trim();
    }

    if let Some(stripped) = raw.strip_prefix('N') {
        if stripped.starts_with('\'') {
            raw = stripped;
        }
    }

    raw
}

/// Maps a native type declaration back to a value type plus the declared
/// string length. Accepts both the forms this crate writes and the common
/// aliases found in databases it did not create.
pub fn parse_native_type(decl: &str) -> Result<(ValueType, Option<u32>)> {
    let decl = decl.trim();

    let (name, len) = match decl.find('(') {
        Some(at) => {
            let len = decl[at + 1..].trim_end_matches(')').trim();
            let len = if len.eq_ignore_ascii_case("max") {
                None
            } else {
                len.parse().ok()
            };
            (decl[..at].trim(), len)
        }
        None => (decl, None),
    };

    let ty = match name.to_ascii_lowercase().as_str() {
        "bit" | "bool" | "boolean" => ValueType::Bool,
        "int" | "smallint" | "tinyint" => ValueType::I32,
        "integer" | "bigint" => ValueType::I64,
        "double" | "float" | "real" | "numeric" | "decimal" => ValueType::F64,
        "nvarchar" | "varchar" | "nchar" | "char" | "text" | "ntext" => ValueType::String,
        "blob" | "varbinary" | "binary" | "image" => ValueType::Bytes,
        "date" => ValueType::Date,
        "datetime" | "datetime2" | "smalldatetime" => ValueType::DateTime,
        "uniqueidentifier" | "uuid" | "guid" => ValueType::Uuid,
        other => {
            return Err(Error::type_mapping(format!(
                "no value type for native type `{other}`"
            )))
        }
    };

    // Lengths only mean something for bounded strings; INT(11)-style
    // display widths are noise.
    let len = if ty == ValueType::String { len } else { None };

    Ok((ty, len))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn native_types_round_trip() {
        assert_eq!(
            parse_native_type("NVARCHAR(30)").unwrap(),
            (ValueType::String, Some(30))
        );
        assert_eq!(
            parse_native_type("nvarchar(max)").unwrap(),
            (ValueType::String, None)
        );
        assert_eq!(parse_native_type("INTEGER").unwrap(), (ValueType::I64, None));
        assert_eq!(parse_native_type("int").unwrap(), (ValueType::I32, None));
        assert_eq!(
            parse_native_type("uniqueidentifier").unwrap(),
            (ValueType::Uuid, None)
        );
    }

    #[test]
    fn unknown_native_type_is_a_mapping_error() {
        let err = parse_native_type("money").unwrap_err();
        assert!(err.is_type_mapping());
        assert_eq!(
            err.to_string(),
            "type mapping failed: no value type for native type `money`"
        );
    }

    #[test]
    fn catalog_lookups_ignore_case() {
        let mut catalog = Catalog::new();
        let mut table = ExistingTable::new("Customers");
        table.add_column(ExistingColumn {
            name: "City".into(),
            ty: ValueType::String,
            max_length: Some(30),
            nullable: true,
            default: None,
        });
        catalog.add_table(table);
        catalog.add_foreign_key("FK_Orders_Customers");

        assert!(catalog.table("CUSTOMERS").is_some());
        assert!(catalog.table("customers").unwrap().column("city").is_some());
        assert!(catalog.has_foreign_key("fk_orders_customers"));

        catalog.remove_foreign_key("FK_ORDERS_CUSTOMERS");
        assert!(!catalog.has_foreign_key("FK_Orders_Customers"));
    }

    #[test]
    fn default_comparison_strips_catalog_wrapping() {
        let serializer = Serializer::mssql();
        let desired = Column::new("city", ValueType::String)
            .max_length(30)
            .default_value("London");

        let existing = ExistingColumn {
            name: "city".into(),
            ty: ValueType::String,
            max_length: Some(30),
            nullable: false,
            default: Some("(N'London')".into()),
        };
        assert!(!existing.differs(&desired, &serializer));

        let drifted = ExistingColumn {
            default: Some("('Paris')".into()),
            ..existing
        };
        assert!(drifted.differs(&desired, &serializer));
    }

    #[test]
    fn nullability_change_is_a_difference() {
        let serializer = Serializer::sqlite();
        let desired = Column::new("age", ValueType::I32);

        let existing = ExistingColumn {
            name: "age".into(),
            ty: ValueType::I32,
            max_length: None,
            nullable: true,
            default: None,
        };
        assert!(existing.differs(&desired, &serializer));
    }
}
