//! Reads the live catalog at the start of a run. These queries execute in
//! every mode; scripting still has to know what already exists.

use crate::catalog::{self, Catalog, ExistingColumn, ExistingTable};
use crate::serializer::Serializer;

use quill_core::driver::{Connection, Row};
use quill_core::stmt::Value;
use quill_core::Result;

pub(super) async fn introspect(
    serializer: Serializer,
    conn: &mut dyn Connection,
) -> Result<Catalog> {
    if serializer.is_sqlite() {
        sqlite(conn).await
    } else {
        mssql(conn).await
    }
}

const SQLITE_OBJECTS: &str = "SELECT name, type, sql FROM sqlite_master \
     WHERE type IN ('table', 'view') AND name NOT LIKE 'sqlite_%'";

/// SQLite reports tables and views through `sqlite_master` and column
/// shapes through `PRAGMA table_info`. There are no procedures, functions
/// or named constraints to discover.
async fn sqlite(conn: &mut dyn Connection) -> Result<Catalog> {
    let mut catalog = Catalog::new();

    let objects = conn.query(SQLITE_OBJECTS, &[]).await?;

    for row in &objects {
        if text(row, 1) == "view" {
            catalog.add_view(text(row, 0), text(row, 2));
        }
    }

    for row in &objects {
        if text(row, 1) != "table" {
            continue;
        }

        let name = text(row, 0);
        let mut table = ExistingTable::new(name);

        // Columns are: cid, name, type, notnull, dflt_value, pk.
        let columns = conn
            .query(&format!("PRAGMA table_info([{name}])"), &[])
            .await?;
        for column in &columns {
            let (ty, max_length) = catalog::parse_native_type(text(column, 2))?;

            table.add_column(ExistingColumn {
                name: text(column, 1).to_string(),
                ty,
                max_length,
                nullable: integer(column, 3) == 0,
                default: column.get(4).and_then(default_text),
            });
        }

        catalog.add_table(table);
    }

    Ok(catalog)
}

const MSSQL_COLUMNS: &str = "SELECT TABLE_NAME, COLUMN_NAME, DATA_TYPE, \
     CHARACTER_MAXIMUM_LENGTH, IS_NULLABLE, COLUMN_DEFAULT \
     FROM INFORMATION_SCHEMA.COLUMNS ORDER BY TABLE_NAME, ORDINAL_POSITION";

const MSSQL_VIEWS: &str = "SELECT TABLE_NAME, VIEW_DEFINITION FROM INFORMATION_SCHEMA.VIEWS";

const MSSQL_ROUTINES: &str =
    "SELECT ROUTINE_NAME, ROUTINE_TYPE, ROUTINE_DEFINITION FROM INFORMATION_SCHEMA.ROUTINES";

const MSSQL_CONSTRAINTS: &str = "SELECT TABLE_NAME, CONSTRAINT_NAME, CONSTRAINT_TYPE \
     FROM INFORMATION_SCHEMA.TABLE_CONSTRAINTS";

async fn mssql(conn: &mut dyn Connection) -> Result<Catalog> {
    let mut catalog = Catalog::new();

    let columns = conn.query(MSSQL_COLUMNS, &[]).await?;
    for row in &columns {
        let name = text(row, 0);

        let (ty, _) = catalog::parse_native_type(text(row, 2))?;
        // CHARACTER_MAXIMUM_LENGTH is -1 for the unbounded forms and NULL
        // for everything that is not a string.
        let max_length = match row.get(3).and_then(Value::as_i64) {
            Some(n) if n > 0 && ty.is_string() => Some(n as u32),
            _ => None,
        };

        let column = ExistingColumn {
            name: text(row, 1).to_string(),
            ty,
            max_length,
            nullable: text(row, 4).eq_ignore_ascii_case("YES"),
            default: row.get(5).and_then(default_text),
        };

        match catalog.table_mut(name) {
            Some(table) => table.add_column(column),
            None => {
                let mut table = ExistingTable::new(name);
                table.add_column(column);
                catalog.add_table(table);
            }
        }
    }

    let views = conn.query(MSSQL_VIEWS, &[]).await?;
    for row in &views {
        catalog.add_view(text(row, 0), text(row, 1));
    }

    let routines = conn.query(MSSQL_ROUTINES, &[]).await?;
    for row in &routines {
        if text(row, 1).eq_ignore_ascii_case("PROCEDURE") {
            catalog.add_procedure(text(row, 0), text(row, 2));
        } else {
            catalog.add_function(text(row, 0), text(row, 2));
        }
    }

    let constraints = conn.query(MSSQL_CONSTRAINTS, &[]).await?;
    for row in &constraints {
        let kind = text(row, 2);
        if kind.eq_ignore_ascii_case("FOREIGN KEY") {
            catalog.add_foreign_key(text(row, 1));
        } else if kind.eq_ignore_ascii_case("PRIMARY KEY") {
            if let Some(table) = catalog.table_mut(text(row, 0)) {
                table.primary_key = Some(text(row, 1).to_string());
            }
        }
    }

    Ok(catalog)
}

fn text(row: &Row, at: usize) -> &str {
    row.get(at).and_then(Value::as_str).unwrap_or_default()
}

fn integer(row: &Row, at: usize) -> i64 {
    row.get(at).and_then(Value::as_i64).unwrap_or_default()
}

/// Catalog default text arrives as whatever the cell decoded to; keep the
/// raw spelling for text comparison against rendered literals.
fn default_text(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(text) => Some(text.clone()),
        Value::I32(v) => Some(v.to_string()),
        Value::I64(v) => Some(v.to_string()),
        Value::F64(v) => Some(v.to_string()),
        Value::Bool(v) => Some(if *v { "1" } else { "0" }.to_string()),
        _ => None,
    }
}
