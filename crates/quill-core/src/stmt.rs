mod aggregate;
pub use aggregate::{Aggregate, AggregateFunc};

mod arith;
pub use arith::{Arith, ArithOp};

mod assignment;
pub use assignment::Assignment;

mod case;
pub use case::Case;

mod column;
pub use column::Column;

mod compare;
pub use compare::Compare;

mod compare_op;
pub use compare_op::CompareOp;

mod condition;
pub use condition::Condition;

mod condition_group;
pub use condition_group::{ConditionGroup, ConditionItem, Link};

mod date_func;
pub use date_func::{DateFunc, DatePart};

mod delete;
pub use delete::Delete;

mod direction;
pub use direction::Direction;

mod exists;
pub use exists::Exists;

mod field;
pub use field::Field;

mod insert;
pub use insert::{Insert, InsertSource};

mod join;
pub use join::{Join, JoinKind};

mod literal;
pub use literal::Literal;

mod num_func;
pub use num_func::NumFunc;

mod operand;
pub use operand::Operand;

mod order_by;
pub use order_by::OrderBy;

mod param;
pub use param::Param;

mod row_number;
pub use row_number::RowNumber;

mod select;
pub use select::Select;

mod shape;
pub use shape::Shape;

mod source;
pub use source::Source;

mod str_func;
pub use str_func::StrFunc;

mod table_ref;
pub use table_ref::TableRef;

mod update;
pub use update::Update;

mod value;
pub use value::Value;

mod value_chrono;

use std::fmt;

/// A statement ready for dialect rendering.
///
/// Statements are built fresh, handed to exactly one serializer call, then
/// discarded. Nothing mutates a statement once rendering has begun.
#[derive(Clone, PartialEq)]
pub enum Statement {
    /// Delete rows matching a condition
    Delete(Delete),

    /// Insert one row, from values, a query, or defaults
    Insert(Insert),

    /// Query rows
    Select(Select),

    /// Update rows matching a condition
    Update(Update),
}

impl Statement {
    /// Attempts to return a reference to an inner [`Delete`].
    ///
    /// * If `self` is a [`Statement::Delete`], a reference to the inner [`Delete`] is
    ///   returned wrapped in [`Some`].
    /// * Else, [`None`] is returned.
    pub fn as_delete(&self) -> Option<&Delete> {
        match self {
            Self::Delete(delete) => Some(delete),
            _ => None,
        }
    }

    /// Consumes `self` and attempts to return the inner [`Delete`].
    pub fn into_delete(self) -> Option<Delete> {
        match self {
            Self::Delete(delete) => Some(delete),
            _ => None,
        }
    }

    /// Consumes `self` and returns the inner [`Delete`].
    ///
    /// # Panics
    ///
    /// If `self` is not a [`Statement::Delete`].
    pub fn unwrap_delete(self) -> Delete {
        match self {
            Self::Delete(delete) => delete,
            v => panic!("expected `Delete`, found {v:#?}"),
        }
    }

    /// Attempts to return a reference to an inner [`Insert`].
    pub fn as_insert(&self) -> Option<&Insert> {
        match self {
            Self::Insert(insert) => Some(insert),
            _ => None,
        }
    }

    /// Consumes `self` and attempts to return the inner [`Insert`].
    pub fn into_insert(self) -> Option<Insert> {
        match self {
            Self::Insert(insert) => Some(insert),
            _ => None,
        }
    }

    /// Consumes `self` and returns the inner [`Insert`].
    ///
    /// # Panics
    ///
    /// If `self` is not a [`Statement::Insert`].
    pub fn unwrap_insert(self) -> Insert {
        match self {
            Self::Insert(insert) => insert,
            v => panic!("expected `Insert`, found {v:#?}"),
        }
    }

    /// Attempts to return a reference to an inner [`Select`].
    pub fn as_select(&self) -> Option<&Select> {
        match self {
            Self::Select(select) => Some(select),
            _ => None,
        }
    }

    /// Consumes `self` and attempts to return the inner [`Select`].
    pub fn into_select(self) -> Option<Select> {
        match self {
            Self::Select(select) => Some(select),
            _ => None,
        }
    }

    /// Consumes `self` and returns the inner [`Select`].
    ///
    /// # Panics
    ///
    /// If `self` is not a [`Statement::Select`].
    pub fn unwrap_select(self) -> Select {
        match self {
            Self::Select(select) => select,
            v => panic!("expected `Select`, found {v:#?}"),
        }
    }

    /// Attempts to return a reference to an inner [`Update`].
    pub fn as_update(&self) -> Option<&Update> {
        match self {
            Self::Update(update) => Some(update),
            _ => None,
        }
    }

    /// Consumes `self` and attempts to return the inner [`Update`].
    pub fn into_update(self) -> Option<Update> {
        match self {
            Self::Update(update) => Some(update),
            _ => None,
        }
    }

    /// Consumes `self` and returns the inner [`Update`].
    ///
    /// # Panics
    ///
    /// If `self` is not a [`Statement::Update`].
    pub fn unwrap_update(self) -> Update {
        match self {
            Self::Update(update) => update,
            v => panic!("expected `Update`, found {v:#?}"),
        }
    }
}

impl fmt::Debug for Statement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Delete(v) => v.fmt(f),
            Self::Insert(v) => v.fmt(f),
            Self::Select(v) => v.fmt(f),
            Self::Update(v) => v.fmt(f),
        }
    }
}
