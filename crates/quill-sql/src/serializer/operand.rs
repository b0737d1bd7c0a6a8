use super::{Comma, Formatter, Ident, Params, ToSql};

use quill_core::stmt::{
    Aggregate, AggregateFunc, Arith, Case, Column, Literal, Operand, Param, RowNumber,
};
use quill_core::Result;

impl ToSql for &Operand {
    fn to_sql<T: Params>(self, f: &mut Formatter<'_, T>) -> Result<()> {
        match self {
            Operand::Column(column) => fmt!(f, column),
            Operand::Value(value) => fmt!(f, value),
            Operand::Param(param) => fmt!(f, param),
            Operand::Str(func) => fmt!(f, func),
            Operand::Date(func) => fmt!(f, func),
            Operand::Num(func) => fmt!(f, func),
            Operand::Aggregate(aggregate) => fmt!(f, aggregate),
            Operand::RowNumber(row_number) => fmt!(f, row_number),
            Operand::Case(case) => fmt!(f, case),
            Operand::Predicate(condition) => {
                let condition = &**condition;
                fmt!(f, "CASE WHEN " condition " THEN 1 ELSE 0 END");
            }
            Operand::Literal(literal) => fmt!(f, literal),
            Operand::Query(select) => {
                let select = &**select;
                fmt!(f, "(" select ")");
            }
            Operand::Arith(arith) => fmt!(f, arith),
        }

        Ok(())
    }
}

impl ToSql for &Column {
    fn to_sql<T: Params>(self, f: &mut Formatter<'_, T>) -> Result<()> {
        if let Some(table) = &self.table {
            fmt!(f, Ident(table) ".");
        }

        if self.is_star() {
            fmt!(f, "*");
        } else {
            fmt!(f, Ident(&self.name));
        }

        Ok(())
    }
}

impl ToSql for &Aggregate {
    fn to_sql<T: Params>(self, f: &mut Formatter<'_, T>) -> Result<()> {
        let name = match self.func {
            AggregateFunc::Count => "COUNT",
            // The embedded engine's COUNT is already 64-bit.
            AggregateFunc::BigCount if f.is_mssql() => "COUNT_BIG",
            AggregateFunc::BigCount => "COUNT",
            AggregateFunc::Sum => "SUM",
            AggregateFunc::Min => "MIN",
            AggregateFunc::Max => "MAX",
            AggregateFunc::Avg => "AVG",
        };

        match &self.arg {
            Some(arg) => {
                let distinct = if self.distinct { "DISTINCT " } else { "" };
                fmt!(f, name "(" distinct arg ")");
            }
            None => fmt!(f, name "(*)"),
        }

        Ok(())
    }
}

impl ToSql for &RowNumber {
    fn to_sql<T: Params>(self, f: &mut Formatter<'_, T>) -> Result<()> {
        // Both engines require an ORDER BY inside OVER; `(SELECT NULL)`
        // leaves the order unspecified.
        if self.order_by.is_empty() {
            fmt!(f, "ROW_NUMBER() OVER (ORDER BY (SELECT NULL))");
        } else {
            let order_by = Comma(&self.order_by);
            fmt!(f, "ROW_NUMBER() OVER (ORDER BY " order_by ")");
        }

        Ok(())
    }
}

impl ToSql for &Case {
    fn to_sql<T: Params>(self, f: &mut Formatter<'_, T>) -> Result<()> {
        fmt!(f, "CASE");

        // Else-if chains nest through `otherwise`; flatten them into one
        // WHEN list.
        let mut case = self;
        loop {
            let when = &case.when;
            let then = &case.then;
            fmt!(f, " WHEN " when " THEN " then);

            match &case.otherwise {
                Operand::Case(next) => case = next,
                otherwise => {
                    fmt!(f, " ELSE " otherwise " END");
                    return Ok(());
                }
            }
        }
    }
}

impl ToSql for &Arith {
    fn to_sql<T: Params>(self, f: &mut Formatter<'_, T>) -> Result<()> {
        let left = &self.left;
        let op = self.op.symbol();
        let right = &self.right;
        fmt!(f, "(" left " " op " " right ")");
        Ok(())
    }
}

impl ToSql for &Literal {
    fn to_sql<T: Params>(self, f: &mut Formatter<'_, T>) -> Result<()> {
        f.dst.push_str(&self.0);
        Ok(())
    }
}

impl ToSql for &Param {
    fn to_sql<T: Params>(self, f: &mut Formatter<'_, T>) -> Result<()> {
        // Names are a construction-time convenience; identity is the
        // ordinal of the carried value.
        let value = &self.value;
        fmt!(f, value);
        Ok(())
    }
}
