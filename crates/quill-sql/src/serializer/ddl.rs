use std::mem;

use super::ty::Ty;
use super::{value, Comma, Formatter, Ident, Params, ToSql};

use crate::ddl::{
    AddColumn, AddDefault, AddForeignKey, AddPrimaryKey, AlterColumn, AlterFunction,
    AlterProcedure, AlterView, CreateFunction, CreateProcedure, CreateTable, CreateView,
    DropConstraint, SetIdentityInsert,
};

use quill_core::schema::{Column, Function, Procedure, RoutineBody, RoutineParam, Table, View};
use quill_core::{Error, Result};

impl ToSql for &CreateTable {
    fn to_sql<T: Params>(self, f: &mut Formatter<'_, T>) -> Result<()> {
        let columns = TableColumns(&self.table);
        fmt!(f, "CREATE TABLE " Ident(&self.table.name) " (" columns ")");
        Ok(())
    }
}

/// Column list plus constraint clauses for CREATE TABLE.
struct TableColumns<'a>(&'a Table);

impl ToSql for TableColumns<'_> {
    fn to_sql<T: Params>(self, f: &mut Formatter<'_, T>) -> Result<()> {
        let table = self.0;

        // SQLite only auto-increments the column declared as the integer
        // primary key, so that key is declared inline instead of in a
        // trailing clause.
        let inline_pk = f.is_sqlite()
            && table
                .primary_key_column()
                .is_some_and(|column| column.auto_increment);

        let mut sep = "";
        for column in &table.columns {
            fmt!(f, sep);
            sep = ", ";

            let is_pk = table
                .primary_key
                .as_deref()
                .is_some_and(|pk| pk.eq_ignore_ascii_case(&column.name));

            if inline_pk && is_pk {
                // Explicit NOT NULL keeps PRAGMA table_info in line with
                // the desired column on later introspection runs.
                fmt!(f, Ident(&column.name) " INTEGER PRIMARY KEY AUTOINCREMENT NOT NULL");
                continue;
            }

            column_def(&table.name, column, f)?;
        }

        if let Some(pk) = &table.primary_key {
            if f.is_mssql() {
                let constraint = format!("PK_{}", table.name);
                fmt!(f, ", CONSTRAINT " Ident(&constraint) " PRIMARY KEY (" Ident(pk) ")");
            } else if !inline_pk {
                fmt!(f, ", PRIMARY KEY (" Ident(pk) ")");
            }
        }

        Ok(())
    }
}

/// One column declaration, shared by CREATE TABLE and ADD.
fn column_def<T: Params>(table: &str, column: &Column, f: &mut Formatter<'_, T>) -> Result<()> {
    let ty = Ty {
        ty: column.ty,
        max_length: column.max_length,
    };
    fmt!(f, Ident(&column.name) " " ty);

    if f.is_mssql() && column.auto_increment {
        fmt!(f, " IDENTITY(1, 1)");
    }

    if !column.nullable {
        fmt!(f, " NOT NULL");
    } else if f.is_mssql() {
        fmt!(f, " NULL");
    }

    if let Some(default) = &column.default {
        if f.is_mssql() {
            let constraint = format!("DF_{}_{}", table, column.name);
            fmt!(f, " CONSTRAINT " Ident(&constraint) " DEFAULT ");
        } else {
            fmt!(f, " DEFAULT ");
        }
        value::write_literal(default, f);
    }

    Ok(())
}

impl ToSql for &AddColumn {
    fn to_sql<T: Params>(self, f: &mut Formatter<'_, T>) -> Result<()> {
        fmt!(f, "ALTER TABLE " Ident(&self.table) " ADD ");
        column_def(&self.table, &self.column, f)
    }
}

impl ToSql for &AlterColumn {
    fn to_sql<T: Params>(self, f: &mut Formatter<'_, T>) -> Result<()> {
        if f.is_sqlite() {
            return Err(Error::unsupported("ALTER COLUMN on the embedded dialect"));
        }

        let ty = Ty {
            ty: self.column.ty,
            max_length: self.column.max_length,
        };
        let null = if self.column.nullable {
            " NULL"
        } else {
            " NOT NULL"
        };
        fmt!(
            f,
            "ALTER TABLE " Ident(&self.table) " ALTER COLUMN " Ident(&self.column.name) " " ty null
        );
        Ok(())
    }
}

impl ToSql for &AddPrimaryKey {
    fn to_sql<T: Params>(self, f: &mut Formatter<'_, T>) -> Result<()> {
        if f.is_sqlite() {
            return Err(Error::unsupported(
                "adding a primary key to an existing table on the embedded dialect",
            ));
        }

        let constraint = format!("PK_{}", self.table);
        fmt!(
            f,
            "ALTER TABLE " Ident(&self.table) " ADD CONSTRAINT " Ident(&constraint) " PRIMARY KEY (" Ident(&self.column) ")"
        );
        Ok(())
    }
}

impl ToSql for &DropConstraint {
    fn to_sql<T: Params>(self, f: &mut Formatter<'_, T>) -> Result<()> {
        if f.is_sqlite() {
            return Err(Error::unsupported("DROP CONSTRAINT on the embedded dialect"));
        }

        fmt!(f, "ALTER TABLE " Ident(&self.table) " DROP CONSTRAINT " Ident(&self.name));
        Ok(())
    }
}

impl ToSql for &AddDefault {
    fn to_sql<T: Params>(self, f: &mut Formatter<'_, T>) -> Result<()> {
        if f.is_sqlite() {
            return Err(Error::unsupported(
                "default constraints on the embedded dialect",
            ));
        }

        fmt!(
            f,
            "ALTER TABLE " Ident(&self.table) " ADD CONSTRAINT " Ident(&self.constraint) " DEFAULT "
        );
        value::write_literal(&self.value, f);
        fmt!(f, " FOR " Ident(&self.column));
        Ok(())
    }
}

impl ToSql for &AddForeignKey {
    fn to_sql<T: Params>(self, f: &mut Formatter<'_, T>) -> Result<()> {
        if f.is_sqlite() {
            return Err(Error::unsupported(
                "adding a foreign key to an existing table on the embedded dialect",
            ));
        }

        fmt!(
            f,
            "ALTER TABLE " Ident(&self.table) " ADD CONSTRAINT " Ident(&self.constraint) " FOREIGN KEY (" Ident(&self.column) ") REFERENCES " Ident(&self.target_table) " (" Ident(&self.target_column) ")"
        );
        Ok(())
    }
}

impl ToSql for &SetIdentityInsert {
    fn to_sql<T: Params>(self, f: &mut Formatter<'_, T>) -> Result<()> {
        if f.is_sqlite() {
            return Err(Error::unsupported(
                "IDENTITY_INSERT on the embedded dialect",
            ));
        }

        let state = if self.on { "ON" } else { "OFF" };
        fmt!(f, "SET IDENTITY_INSERT " Ident(&self.table) " " state);
        Ok(())
    }
}

impl ToSql for &CreateView {
    fn to_sql<T: Params>(self, f: &mut Formatter<'_, T>) -> Result<()> {
        view("CREATE", &self.view, f)
    }
}

impl ToSql for &AlterView {
    fn to_sql<T: Params>(self, f: &mut Formatter<'_, T>) -> Result<()> {
        view("ALTER", &self.view, f)
    }
}

fn view<T: Params>(verb: &'static str, view: &View, f: &mut Formatter<'_, T>) -> Result<()> {
    if f.is_sqlite() {
        return Err(Error::unsupported("view management on the embedded dialect"));
    }

    fmt!(f, verb " VIEW " Ident(&view.name) " AS ");

    // View definitions cannot carry placeholders.
    let prev = mem::replace(&mut f.literals, true);
    let select = &view.select;
    fmt!(f, select);
    f.literals = prev;

    Ok(())
}

impl ToSql for &CreateProcedure {
    fn to_sql<T: Params>(self, f: &mut Formatter<'_, T>) -> Result<()> {
        procedure("CREATE", &self.procedure, f)
    }
}

impl ToSql for &AlterProcedure {
    fn to_sql<T: Params>(self, f: &mut Formatter<'_, T>) -> Result<()> {
        procedure("ALTER", &self.procedure, f)
    }
}

fn procedure<T: Params>(
    verb: &'static str,
    procedure: &Procedure,
    f: &mut Formatter<'_, T>,
) -> Result<()> {
    if f.is_sqlite() {
        return Err(Error::unsupported(
            "stored procedures on the embedded dialect",
        ));
    }

    fmt!(f, verb " PROCEDURE " Ident(&procedure.name));

    if !procedure.params.is_empty() {
        let params = Comma(&procedure.params);
        fmt!(f, " " params);
    }

    fmt!(f, " AS BEGIN ");

    match &procedure.body {
        RoutineBody::Statement(statement) => {
            let prev = mem::replace(&mut f.literals, true);
            let statement = &**statement;
            fmt!(f, statement);
            f.literals = prev;
        }
        RoutineBody::Raw(text) => fmt!(f, text),
    }

    fmt!(f, " END");
    Ok(())
}

impl ToSql for &CreateFunction {
    fn to_sql<T: Params>(self, f: &mut Formatter<'_, T>) -> Result<()> {
        function("CREATE", &self.function, f)
    }
}

impl ToSql for &AlterFunction {
    fn to_sql<T: Params>(self, f: &mut Formatter<'_, T>) -> Result<()> {
        function("ALTER", &self.function, f)
    }
}

fn function<T: Params>(
    verb: &'static str,
    function: &Function,
    f: &mut Formatter<'_, T>,
) -> Result<()> {
    if f.is_sqlite() {
        return Err(Error::unsupported(
            "table-valued functions on the embedded dialect",
        ));
    }

    let params = Comma(&function.params);
    fmt!(f, verb " FUNCTION " Ident(&function.name) " (" params ") RETURNS TABLE AS RETURN (");

    let prev = mem::replace(&mut f.literals, true);
    let select = &function.select;
    fmt!(f, select);
    f.literals = prev;

    fmt!(f, ")");
    Ok(())
}

impl ToSql for &RoutineParam {
    fn to_sql<T: Params>(self, f: &mut Formatter<'_, T>) -> Result<()> {
        let ty = Ty {
            ty: self.ty,
            max_length: self.max_length,
        };
        fmt!(f, "@" self.name " " ty);
        Ok(())
    }
}
