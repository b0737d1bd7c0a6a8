mod op;
pub use op::{BinaryOp, UnaryOp};

mod select;
pub use select::{ColumnDecl, ExprJoin, ExprOrderBy, ExprSelect, ExprSource};

use crate::schema::ValueType;
use crate::stmt::{AggregateFunc, Direction, Value};

/// A relational expression tree, the upstream planner's hand-off format.
///
/// The tree mixes relational nodes (select, join, aggregate, subquery
/// markers) with ordinary expression nodes from a general expression
/// language (arithmetic, logic, member access, method calls). The compiler
/// in [`crate::compile`] lowers it into a [`crate::stmt::Select`].
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A literal constant, including null
    Value(Value),

    /// A column reference
    Column {
        /// Qualifier: the source table's name or alias
        table: Option<String>,
        name: String,
    },

    /// A named parameter carrying its bound value
    Param { name: String, value: Value },

    /// A relational select. In value position this is a scalar subquery.
    Select(Box<ExprSelect>),

    /// A subquery explicitly marked scalar by the planner
    ScalarQuery(Box<ExprSelect>),

    /// An aggregate over the current group
    Aggregate {
        func: AggregateFunc,
        distinct: bool,
        arg: Option<Box<Expr>>,
    },

    /// Existence test over a subquery
    Exists {
        query: Box<ExprSelect>,
        negate: bool,
    },

    /// Membership test against a literal list or a subquery
    In { expr: Box<Expr>, set: InSet },

    /// Null test
    IsNull { expr: Box<Expr>, negate: bool },

    /// Inclusive range test
    Between {
        expr: Box<Expr>,
        low: Box<Expr>,
        high: Box<Expr>,
    },

    /// `ROW_NUMBER()` windowed over an ordering
    RowNumber { order_by: Vec<ExprOrderBy> },

    /// Binary arithmetic, comparison, or logic
    Binary {
        left: Box<Expr>,
        op: BinaryOp,
        right: Box<Expr>,
    },

    /// Unary negation or logical not
    Unary { op: UnaryOp, expr: Box<Expr> },

    /// Ternary conditional; else-if chains nest through `otherwise`
    Conditional {
        test: Box<Expr>,
        then: Box<Expr>,
        otherwise: Box<Expr>,
    },

    /// Property access on a typed value, e.g. a string's length or a
    /// datetime's calendar fields
    Member {
        /// The declaring type, half of the dispatch key
        ty: ValueType,
        expr: Box<Expr>,
        member: String,
    },

    /// Method call on a typed value. `expr` is `None` for static calls.
    Call {
        /// The declaring type, half of the dispatch key
        ty: ValueType,
        expr: Option<Box<Expr>>,
        method: String,
        args: Vec<Expr>,
    },

    /// Constructor call, e.g. building a datetime from numeric parts
    New { ty: ValueType, args: Vec<Expr> },
}

/// The right-hand side of an `In` test.
#[derive(Debug, Clone, PartialEq)]
pub enum InSet {
    List(Vec<Expr>),
    Query(Box<ExprSelect>),
}

impl Expr {
    pub fn value(value: impl Into<Value>) -> Self {
        Self::Value(value.into())
    }

    pub fn null() -> Self {
        Self::Value(Value::Null)
    }

    pub fn column(name: impl Into<String>) -> Self {
        Self::Column {
            table: None,
            name: name.into(),
        }
    }

    pub fn qualified(table: impl Into<String>, name: impl Into<String>) -> Self {
        Self::Column {
            table: Some(table.into()),
            name: name.into(),
        }
    }

    pub fn param(name: impl Into<String>, value: impl Into<Value>) -> Self {
        Self::Param {
            name: name.into(),
            value: value.into(),
        }
    }

    pub fn binary(left: Expr, op: BinaryOp, right: Expr) -> Self {
        Self::Binary {
            left: Box::new(left),
            op,
            right: Box::new(right),
        }
    }

    pub fn eq(left: Expr, right: Expr) -> Self {
        Self::binary(left, BinaryOp::Eq, right)
    }

    pub fn ne(left: Expr, right: Expr) -> Self {
        Self::binary(left, BinaryOp::Ne, right)
    }

    pub fn gt(left: Expr, right: Expr) -> Self {
        Self::binary(left, BinaryOp::Gt, right)
    }

    pub fn lt(left: Expr, right: Expr) -> Self {
        Self::binary(left, BinaryOp::Lt, right)
    }

    pub fn and(left: Expr, right: Expr) -> Self {
        Self::binary(left, BinaryOp::And, right)
    }

    pub fn or(left: Expr, right: Expr) -> Self {
        Self::binary(left, BinaryOp::Or, right)
    }

    pub fn not(expr: Expr) -> Self {
        Self::Unary {
            op: UnaryOp::Not,
            expr: Box::new(expr),
        }
    }

    pub fn neg(expr: Expr) -> Self {
        Self::Unary {
            op: UnaryOp::Neg,
            expr: Box::new(expr),
        }
    }

    pub fn conditional(test: Expr, then: Expr, otherwise: Expr) -> Self {
        Self::Conditional {
            test: Box::new(test),
            then: Box::new(then),
            otherwise: Box::new(otherwise),
        }
    }

    pub fn aggregate(func: AggregateFunc, arg: impl Into<Option<Expr>>) -> Self {
        Self::Aggregate {
            func,
            distinct: false,
            arg: arg.into().map(Box::new),
        }
    }

    pub fn exists(query: ExprSelect) -> Self {
        Self::Exists {
            query: Box::new(query),
            negate: false,
        }
    }

    pub fn in_list(expr: Expr, values: impl IntoIterator<Item = Expr>) -> Self {
        Self::In {
            expr: Box::new(expr),
            set: InSet::List(values.into_iter().collect()),
        }
    }

    pub fn in_query(expr: Expr, query: ExprSelect) -> Self {
        Self::In {
            expr: Box::new(expr),
            set: InSet::Query(Box::new(query)),
        }
    }

    pub fn is_null(expr: Expr) -> Self {
        Self::IsNull {
            expr: Box::new(expr),
            negate: false,
        }
    }

    pub fn between(expr: Expr, low: Expr, high: Expr) -> Self {
        Self::Between {
            expr: Box::new(expr),
            low: Box::new(low),
            high: Box::new(high),
        }
    }

    pub fn row_number(order_by: impl IntoIterator<Item = (Expr, Direction)>) -> Self {
        Self::RowNumber {
            order_by: order_by
                .into_iter()
                .map(|(expr, direction)| ExprOrderBy { expr, direction })
                .collect(),
        }
    }

    pub fn member(ty: ValueType, expr: Expr, member: impl Into<String>) -> Self {
        Self::Member {
            ty,
            expr: Box::new(expr),
            member: member.into(),
        }
    }

    pub fn call(
        ty: ValueType,
        expr: Expr,
        method: impl Into<String>,
        args: impl IntoIterator<Item = Expr>,
    ) -> Self {
        Self::Call {
            ty,
            expr: Some(Box::new(expr)),
            method: method.into(),
            args: args.into_iter().collect(),
        }
    }

    pub fn call_static(
        ty: ValueType,
        method: impl Into<String>,
        args: impl IntoIterator<Item = Expr>,
    ) -> Self {
        Self::Call {
            ty,
            expr: None,
            method: method.into(),
            args: args.into_iter().collect(),
        }
    }

    pub fn new_of(ty: ValueType, args: impl IntoIterator<Item = Expr>) -> Self {
        Self::New {
            ty,
            args: args.into_iter().collect(),
        }
    }
}

impl From<ExprSelect> for Expr {
    fn from(value: ExprSelect) -> Self {
        Self::Select(Box::new(value))
    }
}
