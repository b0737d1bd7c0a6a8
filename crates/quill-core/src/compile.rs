mod dispatch;

use crate::expr::{
    BinaryOp, ColumnDecl, Expr, ExprJoin, ExprSelect, ExprSource, InSet, UnaryOp,
};
use crate::stmt::{
    self, Aggregate, ArithOp, Case, Condition, Field, Join, JoinKind, Link, NumFunc, Operand,
    OrderBy, RowNumber, Select, Source, TableRef, Value,
};
use crate::{Error, Result};

/// Compiles a relational expression tree into a select statement.
///
/// The compiler's structural job is context: every subexpression lowers
/// either as a predicate, producing a [`Condition`], or as a value,
/// producing an [`Operand`]. Boolean-shaped expressions are coerced across
/// that boundary in both directions. An unknown member or method is an
/// `unsupported` error, never a silent passthrough.
pub fn compile(select: &ExprSelect) -> Result<Select> {
    lower_select(select)
}

fn lower_select(select: &ExprSelect) -> Result<Select> {
    let mut stmt = Select::new(lower_source(&select.source)?);
    stmt.distinct = select.distinct;
    stmt.limit = select.limit;

    for wildcard in &select.wildcards {
        stmt.wildcards.push(TableRef::new(wildcard.clone()));
    }

    for decl in &select.columns {
        stmt.fields.push(lower_column_decl(decl)?);
    }

    for join in &select.joins {
        stmt.joins.push(lower_join(join)?);
    }

    if let Some(filter) = &select.filter {
        stmt.filter = Some(predicate(filter)?);
    }

    for expr in &select.group_by {
        stmt.group_by.push(value(expr)?);
    }

    for order in &select.order_by {
        stmt.order_by
            .push(OrderBy::new(value(&order.expr)?, order.direction));
    }

    Ok(stmt)
}

fn lower_source(source: &ExprSource) -> Result<Source> {
    Ok(match source {
        ExprSource::Table { name, alias } => Source::Table(match alias {
            Some(alias) => TableRef::aliased(name, alias),
            None => TableRef::new(name),
        }),
        ExprSource::Query { select, alias } => Source::query(lower_select(select)?, alias),
    })
}

fn lower_join(join: &ExprJoin) -> Result<Join> {
    let on = match (&join.on, join.kind) {
        (Some(on), _) => Some(predicate(on)?),
        (None, JoinKind::Cross | JoinKind::CrossApply) => None,
        (None, kind) => {
            return Err(Error::unsupported(format!(
                "{kind:?} join without an ON clause"
            )))
        }
    };
    Ok(Join::new(join.kind, lower_source(&join.source)?, on))
}

fn lower_column_decl(decl: &ColumnDecl) -> Result<Field> {
    let expr = value(&decl.expr)?;

    // Alias only when the declared name is not what the expression would
    // already be called in the result set.
    let natural = match &expr {
        Operand::Column(column) => Some(column.name.as_str()),
        _ => None,
    };
    Ok(if decl.name.is_empty() || natural == Some(decl.name.as_str()) {
        Field::new(expr)
    } else {
        Field::aliased(expr, decl.name.clone())
    })
}

/// Lowers a boolean-shaped expression into a condition.
///
/// Expressions that are not boolean-shaped lower as values and compare
/// `<> 0`, the implicit truthiness test a bare value gets in filter
/// position.
fn predicate(expr: &Expr) -> Result<Condition> {
    match expr {
        Expr::Binary { left, op, right } => match op {
            BinaryOp::And | BinaryOp::Or => lower_logic(expr, *op),
            BinaryOp::Eq => Ok(Condition::eq(value(left)?, value(right)?)),
            BinaryOp::Ne => Ok(Condition::ne(value(left)?, value(right)?)),
            BinaryOp::Lt => Ok(Condition::lt(value(left)?, value(right)?)),
            BinaryOp::Le => Ok(Condition::le(value(left)?, value(right)?)),
            BinaryOp::Gt => Ok(Condition::gt(value(left)?, value(right)?)),
            BinaryOp::Ge => Ok(Condition::ge(value(left)?, value(right)?)),
            _ => truthy(expr),
        },
        Expr::Unary {
            op: UnaryOp::Not,
            expr,
        } => Ok(predicate(expr)?.negate()),
        Expr::Exists { query, negate } => {
            let condition = Condition::exists(lower_select(query)?);
            Ok(if *negate { condition.negate() } else { condition })
        }
        Expr::In { expr, set } => {
            let field = value(expr)?;
            let values = match set {
                InSet::List(items) => items.iter().map(value).collect::<Result<Vec<_>>>()?,
                InSet::Query(query) => vec![Operand::query(lower_select(query)?)],
            };
            Ok(Condition::is_in(field, values))
        }
        Expr::IsNull { expr, negate } => {
            let condition = Condition::is_null(value(expr)?);
            Ok(if *negate { condition.negate() } else { condition })
        }
        Expr::Between { expr, low, high } => {
            Ok(Condition::between(value(expr)?, value(low)?, value(high)?))
        }
        Expr::Call {
            ty,
            expr: object,
            method,
            args,
        } => match dispatch::condition_op(*ty, method) {
            Some(op) => lower_condition_call(op, object.as_deref(), args),
            None => {
                let operand = dispatch::call(*ty, object.as_deref(), method, args)?;
                Ok(truthy_operand(operand))
            }
        },
        _ => truthy(expr),
    }
}

/// Lowers an expression in value position into an operand.
///
/// Boolean-shaped expressions lower as predicates and get wrapped; the
/// serializer renders the wrapper `CASE WHEN … THEN 1 ELSE 0 END`.
fn value(expr: &Expr) -> Result<Operand> {
    match expr {
        Expr::Value(v) => Ok(Operand::Value(v.clone())),
        Expr::Column { table, name } => Ok(Operand::Column(match table {
            Some(table) => stmt::Column::new(table, name),
            None => stmt::Column::unqualified(name),
        })),
        Expr::Param { name, value } => Ok(Operand::param(name, value.clone())),
        Expr::Select(select) | Expr::ScalarQuery(select) => {
            Ok(Operand::query(lower_select(select)?))
        }
        Expr::Aggregate {
            func,
            distinct,
            arg,
        } => {
            let arg = arg.as_deref().map(value).transpose()?;
            let mut aggregate = Aggregate::new(*func, arg);
            aggregate.distinct = *distinct;
            Ok(aggregate.into())
        }
        Expr::RowNumber { order_by } => {
            let order_by = order_by
                .iter()
                .map(|order| Ok(OrderBy::new(value(&order.expr)?, order.direction)))
                .collect::<Result<Vec<_>>>()?;
            Ok(RowNumber::new(order_by).into())
        }
        Expr::Binary { left, op, right } => match arith_op(*op) {
            Some(op) => Ok(Operand::arith(value(left)?, op, value(right)?)),
            None => Ok(Operand::predicate(predicate(expr)?)),
        },
        Expr::Unary {
            op: UnaryOp::Neg,
            expr,
        } => Ok(NumFunc::Negate(value(expr)?).into()),
        Expr::Unary {
            op: UnaryOp::Not, ..
        } => Ok(Operand::predicate(predicate(expr)?)),
        Expr::Conditional {
            test,
            then,
            otherwise,
        } => Ok(Case::new(predicate(test)?, value(then)?, value(otherwise)?).into()),
        Expr::Member { ty, expr, member } => dispatch::member(*ty, expr, member),
        Expr::Call {
            ty,
            expr: object,
            method,
            args,
        } => match dispatch::condition_op(*ty, method) {
            Some(op) => Ok(Operand::predicate(lower_condition_call(
                op,
                object.as_deref(),
                args,
            )?)),
            None => dispatch::call(*ty, object.as_deref(), method, args),
        },
        Expr::New { ty, args } => dispatch::new_of(*ty, args),
        Expr::Exists { .. } | Expr::In { .. } | Expr::IsNull { .. } | Expr::Between { .. } => {
            Ok(Operand::predicate(predicate(expr)?))
        }
    }
}

fn lower_logic(expr: &Expr, op: BinaryOp) -> Result<Condition> {
    let mut operands = vec![];
    collect_logic(expr, op, &mut operands);

    let conditions = operands
        .into_iter()
        .map(predicate)
        .collect::<Result<Vec<_>>>()?;
    let link = match op {
        BinaryOp::And => Link::And,
        _ => Link::Or,
    };
    Ok(Condition::group(conditions, link))
}

/// Flattens nests of the same logical operator, so `a && (b && c)` and
/// `(a && b) && c` lower to the same group.
fn collect_logic<'a>(expr: &'a Expr, op: BinaryOp, out: &mut Vec<&'a Expr>) {
    match expr {
        Expr::Binary {
            left,
            op: nested,
            right,
        } if *nested == op => {
            collect_logic(left, op, out);
            collect_logic(right, op, out);
        }
        _ => out.push(expr),
    }
}

fn lower_condition_call(
    op: stmt::CompareOp,
    object: Option<&Expr>,
    args: &[Expr],
) -> Result<Condition> {
    let (left, right) = match (object, args) {
        (Some(left), [right]) => (left, right),
        (None, [left, right]) => (left, right),
        _ => {
            return Err(Error::unsupported(
                "comparison method with wrong argument count",
            ))
        }
    };
    Ok(Condition::compare(value(left)?, op, value(right)?))
}

fn truthy(expr: &Expr) -> Result<Condition> {
    Ok(truthy_operand(value(expr)?))
}

fn truthy_operand(operand: Operand) -> Condition {
    Condition::ne(operand, Value::Bool(false))
}

fn arith_op(op: BinaryOp) -> Option<ArithOp> {
    Some(match op {
        BinaryOp::Add => ArithOp::Add,
        BinaryOp::Sub => ArithOp::Sub,
        BinaryOp::Mul => ArithOp::Mul,
        BinaryOp::Div => ArithOp::Div,
        BinaryOp::Mod => ArithOp::Mod,
        _ => return None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::ValueType;
    use crate::stmt::{Column, CompareOp, Direction, StrFunc};
    use pretty_assertions::assert_eq;

    fn users() -> ExprSelect {
        ExprSelect::from_table("users")
    }

    #[test]
    fn filter_lowers_to_compare() {
        let select = users().filter(Expr::eq(
            Expr::column("city"),
            Expr::param("p0", "London"),
        ));

        let stmt = compile(&select).unwrap();

        assert_eq!(
            stmt.filter,
            Some(Condition::eq(
                Column::unqualified("city"),
                Operand::param("p0", "London"),
            ))
        );
        assert_eq!(stmt.source, Source::table("users"));
    }

    #[test]
    fn logic_nesting_flattens_to_one_group() {
        let a = Expr::eq(Expr::column("a"), Expr::value(1));
        let b = Expr::eq(Expr::column("b"), Expr::value(2));
        let c = Expr::eq(Expr::column("c"), Expr::value(3));

        let left_heavy = users().filter(Expr::and(Expr::and(a.clone(), b.clone()), c.clone()));
        let right_heavy = users().filter(Expr::and(a, Expr::and(b, c)));

        let left_heavy = compile(&left_heavy).unwrap();
        let right_heavy = compile(&right_heavy).unwrap();

        assert_eq!(left_heavy.filter, right_heavy.filter);
        let group = left_heavy.filter.unwrap();
        assert_eq!(group.as_group().unwrap().items.len(), 3);
    }

    #[test]
    fn mixed_links_do_not_flatten() {
        let a = Expr::eq(Expr::column("a"), Expr::value(1));
        let b = Expr::eq(Expr::column("b"), Expr::value(2));
        let c = Expr::eq(Expr::column("c"), Expr::value(3));

        let stmt = compile(&users().filter(Expr::or(Expr::and(a, b), c))).unwrap();

        let group = stmt.filter.unwrap();
        let group = group.as_group().unwrap();
        assert_eq!(group.items.len(), 2);
        assert!(group.items[0].condition.as_group().is_some());
    }

    #[test]
    fn bare_value_in_filter_compares_against_false() {
        let stmt = compile(&users().filter(Expr::column("active"))).unwrap();

        assert_eq!(
            stmt.filter,
            Some(Condition::ne(
                Column::unqualified("active"),
                Value::Bool(false),
            ))
        );
    }

    #[test]
    fn comparison_in_value_position_wraps_as_predicate() {
        let select = users().column(
            "is_adult",
            Expr::binary(Expr::column("age"), BinaryOp::Ge, Expr::value(18)),
        );

        let stmt = compile(&select).unwrap();

        let field = &stmt.fields[0];
        assert_eq!(field.alias.as_deref(), Some("is_adult"));
        assert!(matches!(field.expr, Operand::Predicate(_)));
    }

    #[test]
    fn column_decl_matching_name_needs_no_alias() {
        let select = users()
            .column("city", Expr::column("city"))
            .column("town", Expr::column("city"));

        let stmt = compile(&select).unwrap();

        assert_eq!(stmt.fields[0].alias, None);
        assert_eq!(stmt.fields[1].alias.as_deref(), Some("town"));
    }

    #[test]
    fn conditional_chain_nests_through_otherwise() {
        let chain = Expr::conditional(
            Expr::gt(Expr::column("n"), Expr::value(10)),
            Expr::value("big"),
            Expr::conditional(
                Expr::gt(Expr::column("n"), Expr::value(5)),
                Expr::value("medium"),
                Expr::value("small"),
            ),
        );

        let stmt = compile(&users().column("size", chain)).unwrap();

        let Operand::Case(case) = &stmt.fields[0].expr else {
            panic!("expected a case expression");
        };
        assert_eq!(case.then, Operand::value("big"));
        assert!(matches!(case.otherwise, Operand::Case(_)));
    }

    #[test]
    fn string_condition_method_lowers_in_filter() {
        let select = users().filter(Expr::call(
            ValueType::String,
            Expr::column("name"),
            "contains",
            [Expr::param("p0", "ann")],
        ));

        let stmt = compile(&select).unwrap();

        let filter = stmt.filter.unwrap();
        let compare = filter.as_compare().unwrap();
        assert_eq!(compare.op, CompareOp::Contains);
        assert_eq!(compare.field, Operand::Column(Column::unqualified("name")));
    }

    #[test]
    fn string_condition_method_in_value_position_wraps() {
        let select = users().column(
            "flagged",
            Expr::call(
                ValueType::String,
                Expr::column("name"),
                "starts_with",
                [Expr::value("A")],
            ),
        );

        let stmt = compile(&select).unwrap();

        assert!(matches!(stmt.fields[0].expr, Operand::Predicate(_)));
    }

    #[test]
    fn member_dispatch_produces_string_function() {
        let select = users().column(
            "name_length",
            Expr::member(ValueType::String, Expr::column("name"), "length"),
        );

        let stmt = compile(&select).unwrap();

        assert_eq!(
            stmt.fields[0].expr,
            StrFunc::Length(Operand::Column(Column::unqualified("name"))).into(),
        );
    }

    #[test]
    fn unknown_member_is_rejected() {
        let select = users().column(
            "x",
            Expr::member(ValueType::Bool, Expr::column("active"), "month"),
        );

        let err = compile(&select).unwrap_err();

        assert!(err.is_unsupported());
        assert!(err.to_string().contains("month"));
    }

    #[test]
    fn unknown_method_is_rejected() {
        let select = users().filter(Expr::call(
            ValueType::String,
            Expr::column("name"),
            "soundex",
            [],
        ));

        let err = compile(&select).unwrap_err();

        assert!(err.is_unsupported());
        assert!(err.to_string().contains("soundex"));
    }

    #[test]
    fn empty_in_list_is_preserved() {
        let stmt = compile(&users().filter(Expr::in_list(Expr::column("id"), []))).unwrap();

        let filter = stmt.filter.unwrap();
        let compare = filter.as_compare().unwrap();
        assert_eq!(compare.op, CompareOp::In);
        assert!(compare.values.is_empty());
    }

    #[test]
    fn in_subquery_lowers_to_query_operand() {
        let cities = ExprSelect::from_table("cities").column("id", Expr::column("id"));
        let stmt = compile(&users().filter(Expr::in_query(Expr::column("city_id"), cities)))
            .unwrap();

        let filter = stmt.filter.unwrap();
        let compare = filter.as_compare().unwrap();
        assert_eq!(compare.values.len(), 1);
        assert!(matches!(compare.values[0], Operand::Query(_)));
    }

    #[test]
    fn negated_null_test_keeps_null_operand() {
        let select = users().filter(Expr::not(Expr::is_null(Expr::column("email"))));

        let stmt = compile(&select).unwrap();

        let filter = stmt.filter.unwrap();
        let compare = filter.as_compare().unwrap();
        assert!(compare.negate);
        assert!(compare.value().unwrap().is_null_value());
    }

    #[test]
    fn join_without_on_is_rejected() {
        let select = users().join(JoinKind::Inner, ExprSource::table("orders"), None);

        let err = compile(&select).unwrap_err();

        assert!(err.is_unsupported());
    }

    #[test]
    fn cross_join_needs_no_on() {
        let select = users().join(JoinKind::Cross, ExprSource::table("orders"), None);

        let stmt = compile(&select).unwrap();

        assert_eq!(stmt.joins[0].kind, JoinKind::Cross);
        assert_eq!(stmt.joins[0].on, None);
    }

    #[test]
    fn static_math_call_uses_first_argument_as_target() {
        let select = users().column(
            "magnitude",
            Expr::call_static(ValueType::F64, "abs", [Expr::column("delta")]),
        );

        let stmt = compile(&select).unwrap();

        assert_eq!(
            stmt.fields[0].expr,
            NumFunc::Abs(Operand::Column(Column::unqualified("delta"))).into(),
        );
    }

    #[test]
    fn date_member_and_add_method_lower_to_date_functions() {
        use crate::stmt::{DateFunc, DatePart};

        let select = users()
            .column(
                "birth_year",
                Expr::member(ValueType::DateTime, Expr::column("born_at"), "year"),
            )
            .column(
                "due",
                Expr::call(
                    ValueType::DateTime,
                    Expr::column("created_at"),
                    "add_days",
                    [Expr::value(30)],
                ),
            );

        let stmt = compile(&select).unwrap();

        assert_eq!(
            stmt.fields[0].expr,
            DateFunc::Part {
                part: DatePart::Year,
                expr: Operand::Column(Column::unqualified("born_at")),
            }
            .into(),
        );
        assert_eq!(
            stmt.fields[1].expr,
            DateFunc::Add {
                part: DatePart::Day,
                expr: Operand::Column(Column::unqualified("created_at")),
                amount: Operand::value(30),
            }
            .into(),
        );
    }

    #[test]
    fn row_number_orders_by_lowered_operands() {
        let select = users().column(
            "rank",
            Expr::row_number([(Expr::column("score"), Direction::Desc)]),
        );

        let stmt = compile(&select).unwrap();

        let Operand::RowNumber(row_number) = &stmt.fields[0].expr else {
            panic!("expected row number");
        };
        assert_eq!(row_number.order_by.len(), 1);
        assert_eq!(row_number.order_by[0].direction, Direction::Desc);
    }
}
