use super::Expr;
use crate::stmt::{Direction, JoinKind};

/// A relational select in the expression tree.
#[derive(Debug, Clone, PartialEq)]
pub struct ExprSelect {
    /// Declared output columns, in order
    pub columns: Vec<ColumnDecl>,

    /// Sources whose every column is projected, by name or alias
    pub wildcards: Vec<String>,

    /// The primary source
    pub source: ExprSource,

    /// Joins applied to the primary source, in order
    pub joins: Vec<ExprJoin>,

    /// Boolean-shaped filter expression
    pub filter: Option<Expr>,

    pub group_by: Vec<Expr>,

    pub order_by: Vec<ExprOrderBy>,

    pub limit: Option<u64>,

    pub distinct: bool,
}

/// A source relation: a named table or a derived subquery.
#[derive(Debug, Clone, PartialEq)]
pub enum ExprSource {
    Table {
        name: String,
        alias: Option<String>,
    },
    Query {
        select: Box<ExprSelect>,
        alias: String,
    },
}

/// A declared output column.
///
/// `name` is the column's name in the result shape. When it differs from
/// the rendered expression's natural name, the compiler emits an alias.
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnDecl {
    pub name: String,
    pub expr: Expr,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ExprJoin {
    pub kind: JoinKind,
    pub source: ExprSource,
    /// Join predicate; absent for cross joins and cross applies
    pub on: Option<Expr>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ExprOrderBy {
    pub expr: Expr,
    pub direction: Direction,
}

impl ExprSelect {
    pub fn new(source: ExprSource) -> Self {
        Self {
            columns: vec![],
            wildcards: vec![],
            source,
            joins: vec![],
            filter: None,
            group_by: vec![],
            order_by: vec![],
            limit: None,
            distinct: false,
        }
    }

    /// Select from a named table.
    pub fn from_table(name: impl Into<String>) -> Self {
        Self::new(ExprSource::table(name))
    }

    pub fn column(mut self, name: impl Into<String>, expr: Expr) -> Self {
        self.columns.push(ColumnDecl {
            name: name.into(),
            expr,
        });
        self
    }

    pub fn wildcard(mut self, source: impl Into<String>) -> Self {
        self.wildcards.push(source.into());
        self
    }

    pub fn join(mut self, kind: JoinKind, source: ExprSource, on: Option<Expr>) -> Self {
        self.joins.push(ExprJoin { kind, source, on });
        self
    }

    pub fn filter(mut self, expr: Expr) -> Self {
        self.filter = Some(expr);
        self
    }

    pub fn group_by(mut self, expr: Expr) -> Self {
        self.group_by.push(expr);
        self
    }

    pub fn order_by(mut self, expr: Expr, direction: Direction) -> Self {
        self.order_by.push(ExprOrderBy { expr, direction });
        self
    }

    pub fn limit(mut self, limit: u64) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn distinct(mut self) -> Self {
        self.distinct = true;
        self
    }
}

impl ExprSource {
    pub fn table(name: impl Into<String>) -> Self {
        Self::Table {
            name: name.into(),
            alias: None,
        }
    }

    pub fn aliased_table(name: impl Into<String>, alias: impl Into<String>) -> Self {
        Self::Table {
            name: name.into(),
            alias: Some(alias.into()),
        }
    }

    pub fn query(select: ExprSelect, alias: impl Into<String>) -> Self {
        Self::Query {
            select: Box::new(select),
            alias: alias.into(),
        }
    }
}
