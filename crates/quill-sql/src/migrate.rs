//! Reconciles a desired schema against a live database.
//!
//! A run is a fixed sequence of passes, each completing before the next
//! starts: introspect, tables and columns, seed rows, foreign keys, views,
//! then procedures and functions. Later passes assume earlier effects are
//! visible; foreign keys, for instance, need their target tables to exist.
//!
//! A run is not safe against concurrent schema changes: it reads one
//! catalog snapshot and then issues DDL assuming the snapshot still holds.

mod introspect;
mod update_column;

use crate::catalog::Catalog;
use crate::serializer::{Command, Serializer};
use crate::stmt::Statement;

use quill_core::driver::{Connection, Row};
use quill_core::schema::{Schema, Table};
use quill_core::stmt::{Column, Insert, Operand, Select, TableRef, Value};
use quill_core::{Error, Result};

use std::fmt::Write;

use tracing::{debug, info, warn};

/// What a migration run does with the statements it decides on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MigrationMode {
    /// Execute against the live connection.
    Apply,

    /// Only collect the script text. The database is read during
    /// introspection but never written, so generation cannot fail on
    /// execution.
    Script,

    /// Execute and collect the script.
    ApplyAndScript,
}

impl MigrationMode {
    fn applies(self) -> bool {
        matches!(self, Self::Apply | Self::ApplyAndScript)
    }

    fn scripts(self) -> bool {
        matches!(self, Self::Script | Self::ApplyAndScript)
    }
}

/// Runs one migration, returning the script text when the mode collects
/// one. One connection serves the whole run.
pub async fn migrate(
    serializer: Serializer,
    conn: &mut dyn Connection,
    schema: &Schema,
    mode: MigrationMode,
) -> Result<Option<String>> {
    let mut migrator = Migrator::new(serializer, conn, mode);

    info!("introspecting catalog");
    let mut catalog = migrator.introspect().await?;

    info!("reconciling tables");
    migrator.tables(schema, &mut catalog).await?;

    info!("seeding rows");
    migrator.seed(schema, &catalog).await?;

    info!("reconciling foreign keys");
    migrator.foreign_keys(schema, &mut catalog).await?;

    info!("reconciling views");
    migrator.views(schema, &catalog).await?;

    info!("reconciling routines");
    migrator.routines(schema, &catalog).await?;

    Ok(migrator.script)
}

/// Lists catalog columns with no desired counterpart, one `table.column`
/// per line. Tables the desired schema does not know at all are left out.
pub async fn unmapped_columns(
    serializer: Serializer,
    conn: &mut dyn Connection,
    schema: &Schema,
) -> Result<String> {
    let catalog = introspect::introspect(serializer, conn).await?;

    let mut ret = String::new();
    for existing in catalog.tables.values() {
        let Some(desired) = schema.find_table(&existing.name) else {
            continue;
        };

        for column in existing.columns.values() {
            if desired.find_column(&column.name).is_none() {
                writeln!(ret, "{}.{}", existing.name, column.name).unwrap();
            }
        }
    }

    Ok(ret)
}

/// State for one run. Built fresh per run; nothing carries over.
struct Migrator<'a> {
    serializer: Serializer,

    conn: &'a mut dyn Connection,

    apply: bool,

    /// Collected script text, when the mode asks for one.
    script: Option<String>,
}

impl<'a> Migrator<'a> {
    fn new(serializer: Serializer, conn: &'a mut dyn Connection, mode: MigrationMode) -> Self {
        Self {
            serializer,
            conn,
            apply: mode.applies(),
            script: mode.scripts().then(String::new),
        }
    }

    async fn introspect(&mut self) -> Result<Catalog> {
        introspect::introspect(self.serializer, &mut *self.conn).await
    }

    /// Every schema-changing statement funnels through here: appended to
    /// the script when one is collected, executed when applying.
    async fn run(&mut self, command: Command) -> Result<()> {
        if let Some(script) = &mut self.script {
            script.push_str(&command.text);
            script.push_str(";\n");

            if !command.params.is_empty() {
                script.push_str("-- { ");
                for (ordinal, value) in command.params.iter().enumerate() {
                    if ordinal > 0 {
                        script.push_str(", ");
                    }
                    write!(script, "@{ordinal} = {}", self.serializer.literal(value)).unwrap();
                }
                script.push_str(" }\n");
            }
        }

        if self.apply {
            debug!(sql = %command.text, "executing");
            self.conn.execute(&command.text, &command.params).await?;
        }

        Ok(())
    }

    async fn run_statement(&mut self, statement: &Statement) -> Result<()> {
        let command = self.serializer.serialize(statement)?;
        self.run(command).await
    }

    /// Pass 2: create absent tables, add absent columns, and update
    /// columns whose shape drifted.
    async fn tables(&mut self, schema: &Schema, catalog: &mut Catalog) -> Result<()> {
        let mut warned = false;

        for table in &schema.tables {
            let Some(existing) = catalog.table(&table.name) else {
                self.run_statement(&Statement::create_table(table)).await?;
                continue;
            };
            let existing = existing.clone();

            for column in &table.columns {
                let Some(current) = existing.column(&column.name) else {
                    self.run_statement(&Statement::add_column(&table.name, column))
                        .await?;
                    continue;
                };

                if !current.differs(column, &self.serializer) {
                    continue;
                }

                if !self.conn.capability().alter_column {
                    if !warned {
                        warn!(
                            table = %table.name,
                            column = %column.name,
                            "this engine cannot alter columns; leaving the column as it is"
                        );
                        warned = true;
                    }
                    continue;
                }

                let unit = update_column::plan(self, table, column, current, &existing).await?;
                for name in &unit.dropped_foreign_keys {
                    catalog.remove_foreign_key(name);
                }
                self.run(Command::raw(unit.batch)).await?;
            }
        }

        Ok(())
    }

    /// Pass 3: insert seed rows whose primary key is not present yet.
    /// Append-only; rows that already exist are never touched. Row arity
    /// is checked against the column list before anything is emitted.
    async fn seed(&mut self, schema: &Schema, catalog: &Catalog) -> Result<()> {
        for table in &schema.tables {
            if table.seed.is_empty() {
                continue;
            }

            for (index, row) in table.seed.iter().enumerate() {
                if row.len() != table.columns.len() {
                    return Err(Error::invalid_schema(format!(
                        "seed row {index} for table `{}` carries {} values; the table has {} columns",
                        table.name,
                        row.len(),
                        table.columns.len(),
                    )));
                }
            }

            let pre_existing = catalog.table(&table.name).is_some();

            let Some(pk_index) = table.primary_key_index() else {
                // No key to dedup on, so rows only land in tables this
                // run just created.
                if !pre_existing {
                    self.insert_rows(table, table.seed.iter().collect()).await?;
                }
                continue;
            };

            let existing_keys = if pre_existing {
                self.existing_keys(table).await?
            } else {
                vec![]
            };

            let rows: Vec<&Vec<Value>> = table
                .seed
                .iter()
                .filter(|row| !existing_keys.contains(&row[pk_index]))
                .collect();

            self.insert_rows(table, rows).await?;
        }

        Ok(())
    }

    async fn insert_rows(&mut self, table: &Table, rows: Vec<&Vec<Value>>) -> Result<()> {
        if rows.is_empty() {
            return Ok(());
        }

        let identity = self.conn.capability().identity_insert
            && table
                .primary_key_column()
                .is_some_and(|column| column.auto_increment);

        if identity {
            self.run_statement(&Statement::set_identity_insert(&table.name, true))
                .await?;
        }

        for row in rows {
            let insert: Statement = Insert::values(
                table.name.as_str(),
                table.columns.iter().zip(row).map(|(column, value)| {
                    (
                        Column::unqualified(&column.name),
                        Operand::value(value.clone()),
                    )
                }),
            )
            .into();
            self.run_statement(&insert).await?;
        }

        if identity {
            self.run_statement(&Statement::set_identity_insert(&table.name, false))
                .await?;
        }

        Ok(())
    }

    /// Reads the primary-key values currently in a table. Runs in every
    /// mode; deciding which seed rows to emit needs the live answer.
    async fn existing_keys(&mut self, table: &Table) -> Result<Vec<Value>> {
        let Some(pk) = table.primary_key.as_deref() else {
            return Ok(vec![]);
        };

        let select: Statement = Select::new(TableRef::new(&table.name))
            .field(Operand::Column(Column::unqualified(pk)))
            .into();

        let command = self.serializer.serialize(&select)?;
        let rows = self.conn.query(&command.text, &command.params).await?;

        Ok(rows
            .into_iter()
            .filter_map(|row: Row| row.into_iter().next())
            .collect())
    }

    /// Pass 4: add desired foreign keys whose constraint name is not in
    /// the running set. Pass 2 removes names it had to drop, so those are
    /// re-created here.
    async fn foreign_keys(&mut self, schema: &Schema, catalog: &mut Catalog) -> Result<()> {
        let mut warned = false;

        for table in &schema.tables {
            for column in &table.columns {
                let Some(relationship) = &column.relationship else {
                    continue;
                };

                if catalog.has_foreign_key(&relationship.constraint) {
                    continue;
                }

                if !self.conn.capability().add_foreign_key {
                    if !warned {
                        warn!(
                            constraint = %relationship.constraint,
                            "this engine cannot add foreign keys to existing tables; skipping"
                        );
                        warned = true;
                    }
                    continue;
                }

                self.run_statement(&Statement::add_foreign_key(
                    &table.name,
                    &column.name,
                    relationship,
                ))
                .await?;
                catalog.add_foreign_key(&relationship.constraint);
            }
        }

        Ok(())
    }

    /// Pass 5: create absent views, alter ones whose stored text drifted.
    async fn views(&mut self, schema: &Schema, catalog: &Catalog) -> Result<()> {
        if schema.views.is_empty() {
            return Ok(());
        }

        if !self.conn.capability().views {
            warn!("this engine does not manage views; skipping");
            return Ok(());
        }

        for view in &schema.views {
            let desired = self
                .serializer
                .serialize_literal(&Statement::create_view(view))?;

            match catalog.view(&view.name) {
                None => self.run(Command::raw(desired)).await?,
                Some(stored) if !same_routine(stored, &desired) => {
                    let alter = self
                        .serializer
                        .serialize_literal(&Statement::alter_view(view))?;
                    self.run(Command::raw(alter)).await?;
                }
                Some(_) => {}
            }
        }

        Ok(())
    }

    /// Pass 6: procedures and functions, create-or-alter by stored text.
    async fn routines(&mut self, schema: &Schema, catalog: &Catalog) -> Result<()> {
        if !schema.procedures.is_empty() {
            if self.conn.capability().procedures {
                for procedure in &schema.procedures {
                    let desired = self
                        .serializer
                        .serialize_literal(&Statement::create_procedure(procedure))?;

                    match catalog.procedure(&procedure.name) {
                        None => self.run(Command::raw(desired)).await?,
                        Some(stored) if !same_routine(stored, &desired) => {
                            let alter = self
                                .serializer
                                .serialize_literal(&Statement::alter_procedure(procedure))?;
                            self.run(Command::raw(alter)).await?;
                        }
                        Some(_) => {}
                    }
                }
            } else {
                warn!("this engine does not manage stored procedures; skipping");
            }
        }

        if !schema.functions.is_empty() {
            if self.conn.capability().functions {
                for function in &schema.functions {
                    let desired = self
                        .serializer
                        .serialize_literal(&Statement::create_function(function))?;

                    match catalog.function(&function.name) {
                        None => self.run(Command::raw(desired)).await?,
                        Some(stored) if !same_routine(stored, &desired) => {
                            let alter = self
                                .serializer
                                .serialize_literal(&Statement::alter_function(function))?;
                            self.run(Command::raw(alter)).await?;
                        }
                        Some(_) => {}
                    }
                }
            } else {
                warn!("this engine does not manage functions; skipping");
            }
        }

        Ok(())
    }
}

/// Stored definition text keeps whatever verb last touched the object, so
/// CREATE and ALTER must compare equal; whitespace and case are noise.
fn same_routine(stored: &str, desired: &str) -> bool {
    normalize_routine(stored).eq_ignore_ascii_case(&normalize_routine(desired))
}

fn normalize_routine(text: &str) -> String {
    let text = text.trim();
    let text = strip_verb(text, "CREATE")
        .or_else(|| strip_verb(text, "ALTER"))
        .unwrap_or(text);

    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn strip_verb<'a>(text: &'a str, verb: &str) -> Option<&'a str> {
    let rest = text.get(verb.len()..)?;
    if text.as_bytes()[..verb.len()].eq_ignore_ascii_case(verb.as_bytes())
        && rest.starts_with(char::is_whitespace)
    {
        return Some(rest.trim_start());
    }
    None
}
