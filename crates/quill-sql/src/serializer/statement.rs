use super::{Comma, Formatter, Ident, Params, ToSql};

use crate::stmt::{
    Assignment, Condition, Delete, Field, Insert, InsertSource, Join, JoinKind, Literal, OrderBy,
    Select, Shape, Source, Statement, TableRef, Update,
};

use quill_core::{Error, Result};

impl ToSql for &Statement {
    fn to_sql<T: Params>(self, f: &mut Formatter<'_, T>) -> Result<()> {
        match self {
            Statement::Delete(stmt) => fmt!(f, stmt),
            Statement::Insert(stmt) => fmt!(f, stmt),
            Statement::Select(stmt) => fmt!(f, stmt),
            Statement::Update(stmt) => fmt!(f, stmt),
            Statement::CreateTable(stmt) => fmt!(f, stmt),
            Statement::AddColumn(stmt) => fmt!(f, stmt),
            Statement::AlterColumn(stmt) => fmt!(f, stmt),
            Statement::AddPrimaryKey(stmt) => fmt!(f, stmt),
            Statement::DropConstraint(stmt) => fmt!(f, stmt),
            Statement::AddDefault(stmt) => fmt!(f, stmt),
            Statement::AddForeignKey(stmt) => fmt!(f, stmt),
            Statement::SetIdentityInsert(stmt) => fmt!(f, stmt),
            Statement::CreateView(stmt) => fmt!(f, stmt),
            Statement::AlterView(stmt) => fmt!(f, stmt),
            Statement::CreateProcedure(stmt) => fmt!(f, stmt),
            Statement::AlterProcedure(stmt) => fmt!(f, stmt),
            Statement::CreateFunction(stmt) => fmt!(f, stmt),
            Statement::AlterFunction(stmt) => fmt!(f, stmt),
        }

        Ok(())
    }
}

impl ToSql for &quill_core::stmt::Statement {
    fn to_sql<T: Params>(self, f: &mut Formatter<'_, T>) -> Result<()> {
        use quill_core::stmt::Statement::*;

        match self {
            Delete(stmt) => fmt!(f, stmt),
            Insert(stmt) => fmt!(f, stmt),
            Select(stmt) => fmt!(f, stmt),
            Update(stmt) => fmt!(f, stmt),
        }

        Ok(())
    }
}

impl ToSql for &Select {
    fn to_sql<T: Params>(self, f: &mut Formatter<'_, T>) -> Result<()> {
        if let Some(shape) = &self.shape {
            return shaped(self, shape, f);
        }

        let nested = f.depth > 0;
        f.depth += 1;

        fmt!(f, "SELECT ");

        if self.distinct {
            fmt!(f, "DISTINCT ");
        }

        if f.is_mssql() {
            if let Some(limit) = self.limit {
                fmt!(f, "TOP (" limit ") ");
            }
        }

        if self.wildcards.is_empty() && self.fields.is_empty() {
            // A nested select with no projection still needs a column to
            // be valid inside EXISTS/IN.
            if nested {
                fmt!(f, "NULL AS tmp");
            } else {
                fmt!(f, "*");
            }
        } else {
            let mut sep = "";
            for wildcard in &self.wildcards {
                let qualifier = Ident(wildcard.qualifier());
                fmt!(f, sep qualifier ".*");
                sep = ", ";
            }
            for field in &self.fields {
                fmt!(f, sep field);
                sep = ", ";
            }
        }

        let source = &self.source;
        fmt!(f, " FROM " source);

        for join in &self.joins {
            fmt!(f, " " join);
        }

        if let Some(filter) = &self.filter {
            if !filter.is_empty() {
                fmt!(f, " WHERE " filter);
            }
        }

        if !self.group_by.is_empty() {
            let group_by = Comma(&self.group_by);
            fmt!(f, " GROUP BY " group_by);
        }

        if !self.order_by.is_empty() {
            let order_by = Comma(&self.order_by);
            fmt!(f, " ORDER BY " order_by);
        }

        if f.is_sqlite() {
            if let Some(limit) = self.limit {
                fmt!(f, " LIMIT " limit);
            }
        }

        f.depth -= 1;
        Ok(())
    }
}

/// Resolves a pending shape by wrapping the select in the corresponding
/// scalar test. The inner select renders with its shape cleared, so the
/// rewrite happens exactly once.
fn shaped<T: Params>(select: &Select, shape: &Shape, f: &mut Formatter<'_, T>) -> Result<()> {
    let mut inner = select.clone();
    inner.shape = None;

    f.depth += 1;

    match shape {
        Shape::Any => {
            let inner = &inner;
            fmt!(f, "SELECT CASE WHEN EXISTS (" inner ") THEN 1 ELSE 0 END");
        }
        Shape::All => {
            // NOT EXISTS over the negated predicate, which is vacuously
            // true on an empty source.
            inner.filter = Some(match inner.filter.take() {
                Some(filter) if !filter.is_empty() => filter.negate(),
                _ => never(),
            });

            let inner = &inner;
            fmt!(f, "SELECT CASE WHEN NOT EXISTS (" inner ") THEN 1 ELSE 0 END");
        }
        Shape::Contains(probe) => {
            let inner = &inner;
            fmt!(f, "SELECT CASE WHEN " probe " IN (" inner ") THEN 1 ELSE 0 END");
        }
    }

    f.depth -= 1;
    Ok(())
}

/// A condition that never holds, for a universal test with no predicate to
/// negate.
fn never() -> Condition {
    Condition::ne(Literal::new("0"), Literal::new("0"))
}

impl ToSql for &Source {
    fn to_sql<T: Params>(self, f: &mut Formatter<'_, T>) -> Result<()> {
        match self {
            Source::Table(table) => fmt!(f, table),
            Source::Query { select, alias } => {
                let select = &**select;
                fmt!(f, "(" select ") AS " Ident(alias));
            }
            Source::Join(join) => {
                let join = &**join;
                fmt!(f, join);
            }
        }

        Ok(())
    }
}

impl ToSql for &Join {
    fn to_sql<T: Params>(self, f: &mut Formatter<'_, T>) -> Result<()> {
        if let Some(left) = &self.left {
            fmt!(f, left " ");
        }

        let kind = match self.kind {
            JoinKind::Inner => "INNER JOIN ",
            JoinKind::Left => "LEFT JOIN ",
            JoinKind::Right => "RIGHT JOIN ",
            JoinKind::Cross => "CROSS JOIN ",
            JoinKind::CrossApply if f.is_sqlite() => {
                return Err(Error::unsupported(
                    "CROSS APPLY on the embedded dialect",
                ));
            }
            JoinKind::CrossApply => "CROSS APPLY ",
        };

        let right = &self.right;
        fmt!(f, kind right);

        if let Some(on) = &self.on {
            if !on.is_empty() {
                fmt!(f, " ON " on);
            }
        }

        Ok(())
    }
}

impl ToSql for &TableRef {
    fn to_sql<T: Params>(self, f: &mut Formatter<'_, T>) -> Result<()> {
        fmt!(f, Ident(&self.name));

        if let Some(alias) = &self.alias {
            fmt!(f, " AS " Ident(alias));
        }

        Ok(())
    }
}

impl ToSql for &Field {
    fn to_sql<T: Params>(self, f: &mut Formatter<'_, T>) -> Result<()> {
        let expr = &self.expr;
        fmt!(f, expr);

        if let Some(alias) = &self.alias {
            fmt!(f, " AS " Ident(alias));
        }

        Ok(())
    }
}

impl ToSql for &OrderBy {
    fn to_sql<T: Params>(self, f: &mut Formatter<'_, T>) -> Result<()> {
        let expr = &self.expr;
        fmt!(f, expr);

        if self.direction.is_desc() {
            fmt!(f, " DESC");
        }

        Ok(())
    }
}

impl ToSql for &Insert {
    fn to_sql<T: Params>(self, f: &mut Formatter<'_, T>) -> Result<()> {
        let table = &self.table;
        fmt!(f, "INSERT INTO " table);

        match &self.source {
            InsertSource::Values(values) => {
                let columns = Comma(values.iter().map(|(column, _)| column));
                fmt!(f, " (" columns ") VALUES (");
                let values = Comma(values.iter().map(|(_, value)| value));
                fmt!(f, values ")");
            }
            InsertSource::Query { columns, select } => {
                let columns = Comma(columns);
                let select = &**select;
                fmt!(f, " (" columns ") " select);
            }
            InsertSource::DefaultValues => fmt!(f, " DEFAULT VALUES"),
        }

        Ok(())
    }
}

impl ToSql for &Update {
    fn to_sql<T: Params>(self, f: &mut Formatter<'_, T>) -> Result<()> {
        // Re-checked at render time: a statement hand-built around
        // `Update::new` must not slip through.
        if self.filter.is_empty() {
            return Err(Error::unsafe_statement(
                "UPDATE requires at least one condition",
            ));
        }

        let table = &self.table;
        let assignments = Comma(&self.assignments);
        let filter = &self.filter;
        fmt!(f, "UPDATE " table " SET " assignments " WHERE " filter);
        Ok(())
    }
}

impl ToSql for &Assignment {
    fn to_sql<T: Params>(self, f: &mut Formatter<'_, T>) -> Result<()> {
        // SET targets are bare column names; neither dialect accepts a
        // qualifier here.
        let column = Ident(&self.column.name);
        let value = &self.value;
        fmt!(f, column " = " value);
        Ok(())
    }
}

impl ToSql for &Delete {
    fn to_sql<T: Params>(self, f: &mut Formatter<'_, T>) -> Result<()> {
        if self.filter.is_empty() {
            return Err(Error::unsafe_statement(
                "DELETE requires at least one condition",
            ));
        }

        let table = &self.table;
        let filter = &self.filter;
        fmt!(f, "DELETE FROM " table " WHERE " filter);
        Ok(())
    }
}
