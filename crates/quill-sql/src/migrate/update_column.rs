//! The server-side column update. Everything depending on the column is
//! dropped, the column altered, and the constraints put back, all in one
//! batch: a cancelled run must never leave a drop without its re-create.

use super::Migrator;
use crate::catalog::{ExistingColumn, ExistingTable};
use crate::stmt::Statement;

use quill_core::schema::{Column, Table};
use quill_core::stmt::{self, Condition, Operand, Update, Value};
use quill_core::Result;

pub(super) struct ColumnUpdate {
    /// Statements joined into one command, in drop, backfill, alter,
    /// re-add order.
    pub(super) batch: String,

    /// Foreign keys the batch dropped. The caller removes them from the
    /// running constraint set so the foreign-key pass re-creates them.
    pub(super) dropped_foreign_keys: Vec<String>,
}

const DEFAULT_CONSTRAINT: &str = "SELECT dc.name FROM sys.default_constraints dc \
     JOIN sys.columns c ON c.object_id = dc.parent_object_id AND c.column_id = dc.parent_column_id \
     WHERE dc.parent_object_id = OBJECT_ID(@0) AND c.name = @1";

const FOREIGN_KEYS: &str = "SELECT fk.name FROM sys.foreign_keys fk \
     JOIN sys.foreign_key_columns fkc ON fkc.constraint_object_id = fk.object_id \
     WHERE (fkc.parent_object_id = OBJECT_ID(@0) \
        AND COL_NAME(fkc.parent_object_id, fkc.parent_column_id) = @1) \
        OR (fkc.referenced_object_id = OBJECT_ID(@0) \
        AND COL_NAME(fkc.referenced_object_id, fkc.referenced_column_id) = @1)";

pub(super) async fn plan(
    migrator: &mut Migrator<'_>,
    table: &Table,
    desired: &Column,
    current: &ExistingColumn,
    existing: &ExistingTable,
) -> Result<ColumnUpdate> {
    let params = [
        Value::from(table.name.as_str()),
        Value::from(desired.name.as_str()),
    ];

    let default_constraint = migrator
        .conn
        .query(DEFAULT_CONSTRAINT, &params)
        .await?
        .into_iter()
        .filter_map(first_name)
        .next();

    let dropped_foreign_keys: Vec<String> = migrator
        .conn
        .query(FOREIGN_KEYS, &params)
        .await?
        .into_iter()
        .filter_map(first_name)
        .collect();

    // The primary key blocks the alter only when it sits on this column.
    let primary_key = existing.primary_key.as_deref().filter(|_| {
        table
            .primary_key
            .as_deref()
            .is_some_and(|pk| pk.eq_ignore_ascii_case(&desired.name))
    });

    let serializer = migrator.serializer;
    let mut statements = Vec::new();

    if let Some(name) = &default_constraint {
        statements.push(serializer.serialize_literal(&Statement::drop_constraint(
            &table.name,
            name.as_str(),
        ))?);
    }
    for name in &dropped_foreign_keys {
        statements.push(serializer.serialize_literal(&Statement::drop_constraint(
            &table.name,
            name.as_str(),
        ))?);
    }
    if let Some(name) = primary_key {
        statements.push(
            serializer.serialize_literal(&Statement::drop_constraint(&table.name, name))?,
        );
    }

    // Tightening to NOT NULL fails on rows holding NULL; fill them from
    // the default first, strictly before the alter.
    if current.nullable && !desired.nullable {
        if let Some(default) = &desired.default {
            let backfill: Statement = Update::new(
                table.name.as_str(),
                [stmt::Assignment::new(
                    &desired.name,
                    Operand::value(default.clone()),
                )],
                Condition::is_null(Operand::Column(stmt::Column::unqualified(&desired.name))),
            )?
            .into();
            statements.push(serializer.serialize_literal(&backfill)?);
        }
    }

    statements.push(serializer.serialize_literal(&Statement::alter_column(&table.name, desired))?);

    if primary_key.is_some() {
        statements.push(serializer.serialize_literal(&Statement::add_primary_key(
            &table.name,
            &desired.name,
        ))?);
    }
    if let Some(value) = &desired.default {
        statements.push(serializer.serialize_literal(&Statement::add_default(
            &table.name,
            &desired.name,
            value.clone(),
        ))?);
    }

    Ok(ColumnUpdate {
        batch: statements.join(";\n"),
        dropped_foreign_keys,
    })
}

fn first_name(row: Vec<Value>) -> Option<String> {
    match row.into_iter().next() {
        Some(Value::String(name)) => Some(name),
        _ => None,
    }
}
