use super::{Comma, Formatter, Params, ToSql};

use quill_core::stmt::{Compare, CompareOp, Condition, ConditionGroup, Exists, Link, Operand};
use quill_core::Result;

impl ToSql for &Condition {
    fn to_sql<T: Params>(self, f: &mut Formatter<'_, T>) -> Result<()> {
        match self {
            Condition::Compare(compare) => fmt!(f, compare),
            Condition::Group(group) => fmt!(f, group),
            Condition::Exists(exists) => fmt!(f, exists),
        }

        Ok(())
    }
}

impl ToSql for &Compare {
    fn to_sql<T: Params>(self, f: &mut Formatter<'_, T>) -> Result<()> {
        // Equality against a constant null is a null test, whichever side
        // the null is on.
        if matches!(self.op, CompareOp::Eq | CompareOp::Ne) {
            if let Some(value) = self.value() {
                let null_test = (self.op == CompareOp::Eq) != self.negate;
                let test = if null_test { " IS NULL" } else { " IS NOT NULL" };

                if value.is_null_value() {
                    let field = &self.field;
                    fmt!(f, field test);
                    return Ok(());
                }

                if self.field.is_null_value() {
                    fmt!(f, value test);
                    return Ok(());
                }
            }
        }

        if self.negate {
            fmt!(f, "NOT (");
        }

        let field = &self.field;

        if let (Some(symbol), Some(value)) = (self.op.binary_symbol(), self.value()) {
            fmt!(f, field " " symbol " " value);
        } else {
            match self.op {
                CompareOp::In => match self.values.as_slice() {
                    // Membership in nothing never holds.
                    [] => fmt!(f, "0 <> 0"),
                    [Operand::Query(select)] => {
                        let select = &**select;
                        fmt!(f, field " IN (" select ")");
                    }
                    values => {
                        let values = Comma(values);
                        fmt!(f, field " IN (" values ")");
                    }
                },
                CompareOp::Between => {
                    let [low, high] = self.values.as_slice() else {
                        unreachable!()
                    };
                    fmt!(f, field " BETWEEN " low " AND " high);
                }
                CompareOp::Contains | CompareOp::StartsWith | CompareOp::EndsWith => {
                    let [pattern] = self.values.as_slice() else {
                        unreachable!()
                    };
                    match self.op {
                        CompareOp::Contains if f.is_mssql() => {
                            fmt!(f, "CHARINDEX(" pattern ", " field ") > 0");
                        }
                        CompareOp::Contains => {
                            fmt!(f, field " LIKE '%' || " pattern " || '%'");
                        }
                        CompareOp::StartsWith if f.is_mssql() => {
                            fmt!(f, field " LIKE " pattern " + '%'");
                        }
                        CompareOp::StartsWith => {
                            fmt!(f, field " LIKE " pattern " || '%'");
                        }
                        CompareOp::EndsWith if f.is_mssql() => {
                            fmt!(f, field " LIKE '%' + " pattern);
                        }
                        CompareOp::EndsWith => {
                            fmt!(f, field " LIKE '%' || " pattern);
                        }
                        _ => unreachable!(),
                    }
                }
                _ => unreachable!(),
            }
        }

        if self.negate {
            fmt!(f, ")");
        }

        Ok(())
    }
}

impl ToSql for &ConditionGroup {
    fn to_sql<T: Params>(self, f: &mut Formatter<'_, T>) -> Result<()> {
        if self.negate {
            fmt!(f, "NOT (");
        }

        // Each item stores the link to the item after it; the link renders
        // between two non-empty children.
        let mut pending: Option<Link> = None;
        for item in &self.items {
            if item.condition.is_empty() {
                continue;
            }

            match pending {
                Some(Link::And) => fmt!(f, " AND "),
                Some(Link::Or) => fmt!(f, " OR "),
                None => {}
            }

            let condition = &item.condition;
            match condition.as_group() {
                Some(child) if child.items.len() > 1 && !child.negate => {
                    fmt!(f, "(" condition ")");
                }
                _ => fmt!(f, condition),
            }

            pending = Some(item.link);
        }

        if self.negate {
            fmt!(f, ")");
        }

        Ok(())
    }
}

impl ToSql for &Exists {
    fn to_sql<T: Params>(self, f: &mut Formatter<'_, T>) -> Result<()> {
        if self.negate {
            fmt!(f, "NOT ");
        }

        let query = &*self.query;
        fmt!(f, "EXISTS (" query ")");
        Ok(())
    }
}
