use super::{
    Aggregate, Arith, Case, Column, Condition, DateFunc, Literal, NumFunc, Param, RowNumber,
    Select, StrFunc, Value,
};

/// A value-position node: anything that can appear where SQL expects a
/// scalar expression.
#[derive(Debug, Clone, PartialEq)]
pub enum Operand {
    /// Column reference
    Column(Column),

    /// Literal constant, including null
    Value(Value),

    /// Named parameter carrying its bound value
    Param(Param),

    /// String function
    Str(Box<StrFunc>),

    /// Date/time function
    Date(Box<DateFunc>),

    /// Numeric function
    Num(Box<NumFunc>),

    /// Aggregate function
    Aggregate(Box<Aggregate>),

    /// `ROW_NUMBER() OVER (ORDER BY …)`
    RowNumber(RowNumber),

    /// Conditional case expression
    Case(Box<Case>),

    /// A boolean condition in value position, rendered
    /// `CASE WHEN … THEN 1 ELSE 0 END`
    Predicate(Box<Condition>),

    /// Raw SQL fragment
    Literal(Literal),

    /// Scalar or membership subquery
    Query(Box<Select>),

    /// Binary arithmetic
    Arith(Box<Arith>),
}

impl Operand {
    pub fn null() -> Self {
        Self::Value(Value::Null)
    }

    pub fn value(value: impl Into<Value>) -> Self {
        Self::Value(value.into())
    }

    pub fn param(name: impl Into<String>, value: impl Into<Value>) -> Self {
        Self::Param(Param::new(name, value))
    }

    pub fn column(table: impl Into<String>, name: impl Into<String>) -> Self {
        Self::Column(Column::new(table, name))
    }

    pub fn star() -> Self {
        Self::Column(Column::star())
    }

    pub fn predicate(condition: Condition) -> Self {
        Self::Predicate(Box::new(condition))
    }

    pub fn query(select: Select) -> Self {
        Self::Query(Box::new(select))
    }

    /// Returns the constant value when the operand is one.
    pub fn as_value(&self) -> Option<&Value> {
        match self {
            Self::Value(value) => Some(value),
            _ => None,
        }
    }

    /// Returns `true` for a constant null, or a parameter bound to null.
    /// Equality against such an operand renders as `IS NULL`.
    pub fn is_null_value(&self) -> bool {
        match self {
            Self::Value(value) => value.is_null(),
            Self::Param(param) => param.value.is_null(),
            _ => false,
        }
    }
}

impl From<Value> for Operand {
    fn from(value: Value) -> Self {
        Self::Value(value)
    }
}

impl From<StrFunc> for Operand {
    fn from(value: StrFunc) -> Self {
        Self::Str(Box::new(value))
    }
}

impl From<DateFunc> for Operand {
    fn from(value: DateFunc) -> Self {
        Self::Date(Box::new(value))
    }
}

impl From<NumFunc> for Operand {
    fn from(value: NumFunc) -> Self {
        Self::Num(Box::new(value))
    }
}

impl From<Aggregate> for Operand {
    fn from(value: Aggregate) -> Self {
        Self::Aggregate(Box::new(value))
    }
}

impl From<RowNumber> for Operand {
    fn from(value: RowNumber) -> Self {
        Self::RowNumber(value)
    }
}

impl From<Case> for Operand {
    fn from(value: Case) -> Self {
        Self::Case(Box::new(value))
    }
}

impl From<Arith> for Operand {
    fn from(value: Arith) -> Self {
        Self::Arith(Box::new(value))
    }
}

impl From<bool> for Operand {
    fn from(value: bool) -> Self {
        Self::Value(value.into())
    }
}

impl From<i32> for Operand {
    fn from(value: i32) -> Self {
        Self::Value(value.into())
    }
}

impl From<i64> for Operand {
    fn from(value: i64) -> Self {
        Self::Value(value.into())
    }
}

impl From<f64> for Operand {
    fn from(value: f64) -> Self {
        Self::Value(value.into())
    }
}

impl From<&str> for Operand {
    fn from(value: &str) -> Self {
        Self::Value(value.into())
    }
}

impl From<String> for Operand {
    fn from(value: String) -> Self {
        Self::Value(value.into())
    }
}
