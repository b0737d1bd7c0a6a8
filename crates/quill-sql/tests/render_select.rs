use pretty_assertions::assert_eq;

use quill_core::stmt::{
    Aggregate, Column, Condition, Field, Join, JoinKind, Operand, OrderBy, Select, Shape, Source,
    TableRef, Value,
};
use quill_sql::{NoParams, Serializer, Statement};

fn sqlite(statement: impl Into<Statement>) -> (String, Vec<Value>) {
    let command = Serializer::sqlite().serialize(&statement.into()).unwrap();
    (command.text, command.params)
}

fn mssql(statement: impl Into<Statement>) -> (String, Vec<Value>) {
    let command = Serializer::mssql().serialize(&statement.into()).unwrap();
    (command.text, command.params)
}

// ---------------------------------------------------------------------------
// Projection
// ---------------------------------------------------------------------------

#[test]
fn empty_projection_is_star_at_the_top_level() {
    let select = Select::new(TableRef::new("customers"));

    let (sql, params) = mssql(select);
    assert_eq!(sql, "SELECT * FROM [customers]");
    assert!(params.is_empty());
}

#[test]
fn filter_parameterizes_the_value() {
    let select = Select::new(TableRef::new("customers"))
        .field(Operand::Column(Column::unqualified("city")))
        .filter(Condition::eq(Column::unqualified("city"), "London"));

    let (sql, params) = mssql(select.clone());
    assert_eq!(sql, "SELECT [city] FROM [customers] WHERE [city] = @0");
    assert_eq!(params, vec![Value::from("London")]);

    // The embedded dialect differs only where documented; not here.
    let (sql, params) = sqlite(select);
    assert_eq!(sql, "SELECT [city] FROM [customers] WHERE [city] = @0");
    assert_eq!(params, vec![Value::from("London")]);
}

#[test]
fn qualified_columns_aliases_and_wildcards() {
    let select = Select::new(TableRef::aliased("customers", "c"))
        .wildcard(TableRef::aliased("customers", "c"))
        .field(Field::aliased(Aggregate::count_star(), "n"));

    let (sql, _) = mssql(select);
    assert_eq!(sql, "SELECT [c].*, COUNT(*) AS [n] FROM [customers] AS [c]");
}

#[test]
fn distinct_group_by_and_order_by() {
    let mut select = Select::new(TableRef::new("customers"))
        .field(Operand::Column(Column::unqualified("city")))
        .order_by(OrderBy::desc(Operand::Column(Column::unqualified("city"))))
        .order_by(OrderBy::asc(Operand::Column(Column::unqualified("id"))));
    select.distinct = true;
    select
        .group_by
        .push(Operand::Column(Column::unqualified("city")));
    select.group_by.push(Operand::Column(Column::unqualified("id")));

    let (sql, _) = mssql(select);
    assert_eq!(
        sql,
        "SELECT DISTINCT [city] FROM [customers] \
         GROUP BY [city], [id] ORDER BY [city] DESC, [id]"
    );
}

#[test]
fn closing_brackets_in_identifiers_double() {
    let select = Select::new(TableRef::new("weird]name"));

    let (sql, _) = mssql(select);
    assert_eq!(sql, "SELECT * FROM [weird]]name]");
}

// ---------------------------------------------------------------------------
// Limit: TOP before the projection on the server, LIMIT after ORDER BY on
// the embedded engine
// ---------------------------------------------------------------------------

#[test]
fn limit_renders_top_on_the_server() {
    let select = Select::new(TableRef::new("customers"))
        .order_by(OrderBy::asc(Operand::Column(Column::unqualified("city"))))
        .limit(5);

    let (sql, _) = mssql(select);
    assert_eq!(sql, "SELECT TOP (5) * FROM [customers] ORDER BY [city]");
}

#[test]
fn limit_renders_limit_on_the_embedded_engine() {
    let select = Select::new(TableRef::new("customers"))
        .order_by(OrderBy::asc(Operand::Column(Column::unqualified("city"))))
        .limit(5);

    let (sql, _) = sqlite(select);
    assert_eq!(sql, "SELECT * FROM [customers] ORDER BY [city] LIMIT 5");
}

// ---------------------------------------------------------------------------
// Joins and sources
// ---------------------------------------------------------------------------

#[test]
fn inner_join_with_on_condition() {
    let select = Select::new(TableRef::new("customers")).join(Join::inner(
        TableRef::new("orders"),
        Condition::eq(
            Operand::column("orders", "customer_id"),
            Operand::column("customers", "id"),
        ),
    ));

    let (sql, _) = sqlite(select);
    assert_eq!(
        sql,
        "SELECT * FROM [customers] INNER JOIN [orders] \
         ON [orders].[customer_id] = [customers].[id]"
    );
}

#[test]
fn left_and_cross_joins() {
    let select = Select::new(TableRef::new("customers"))
        .join(Join::left_outer(
            TableRef::new("orders"),
            Condition::eq(
                Operand::column("orders", "customer_id"),
                Operand::column("customers", "id"),
            ),
        ))
        .join(Join::cross(TableRef::new("regions")));

    let (sql, _) = mssql(select);
    assert_eq!(
        sql,
        "SELECT * FROM [customers] \
         LEFT JOIN [orders] ON [orders].[customer_id] = [customers].[id] \
         CROSS JOIN [regions]"
    );
}

#[test]
fn cross_apply_renders_on_the_server() {
    let inner = Select::new(TableRef::new("orders"))
        .field(Operand::column("orders", "total"))
        .limit(1);
    let select = Select::new(TableRef::new("customers")).join(Join::new(
        JoinKind::CrossApply,
        Source::query(inner, "latest"),
        None,
    ));

    let (sql, _) = mssql(select);
    assert_eq!(
        sql,
        "SELECT * FROM [customers] CROSS APPLY \
         (SELECT TOP (1) [orders].[total] FROM [orders]) AS [latest]"
    );
}

#[test]
fn cross_apply_is_rejected_on_the_embedded_engine() {
    let inner = Select::new(TableRef::new("orders")).field(Operand::column("orders", "total"));
    let select = Select::new(TableRef::new("customers")).join(Join::new(
        JoinKind::CrossApply,
        Source::query(inner, "latest"),
        None,
    ));

    let err = Serializer::sqlite()
        .serialize(&Statement::from(select))
        .unwrap_err();
    assert!(err.is_unsupported());
    assert_eq!(
        err.to_string(),
        "unsupported construct: CROSS APPLY on the embedded dialect"
    );
}

#[test]
fn derived_table_source_carries_its_alias() {
    let inner = Select::new(TableRef::new("orders"))
        .field(Operand::Column(Column::unqualified("customer_id")));
    let select = Select::new(Source::query(inner, "recent"));

    let (sql, _) = mssql(select);
    assert_eq!(
        sql,
        "SELECT * FROM (SELECT [customer_id] FROM [orders]) AS [recent]"
    );
}

#[test]
fn nested_selects_with_no_projection_render_a_null_column() {
    let inner = Select::new(TableRef::new("orders"));
    let select =
        Select::new(TableRef::new("customers")).filter(Condition::exists(inner));

    let (sql, _) = mssql(select);
    assert_eq!(
        sql,
        "SELECT * FROM [customers] WHERE EXISTS (SELECT NULL AS tmp FROM [orders])"
    );
}

// ---------------------------------------------------------------------------
// Scalar shapes
// ---------------------------------------------------------------------------

#[test]
fn any_shape_wraps_in_an_existence_test() {
    let mut select = Select::new(TableRef::new("customers"))
        .filter(Condition::eq(Column::unqualified("city"), "London"));
    select.shape = Some(Shape::Any);

    let (sql, params) = mssql(select);
    assert_eq!(
        sql,
        "SELECT CASE WHEN EXISTS (SELECT NULL AS tmp FROM [customers] \
         WHERE [city] = @0) THEN 1 ELSE 0 END"
    );
    assert_eq!(params, vec![Value::from("London")]);
}

#[test]
fn all_shape_negates_the_filter_inside_not_exists() {
    let mut select = Select::new(TableRef::new("customers"))
        .filter(Condition::eq(Column::unqualified("city"), "London"));
    select.shape = Some(Shape::All);

    let (sql, params) = mssql(select);
    assert_eq!(
        sql,
        "SELECT CASE WHEN NOT EXISTS (SELECT NULL AS tmp FROM [customers] \
         WHERE NOT ([city] = @0)) THEN 1 ELSE 0 END"
    );
    assert_eq!(params, vec![Value::from("London")]);
}

#[test]
fn all_shape_without_a_filter_is_vacuously_true() {
    let mut select = Select::new(TableRef::new("customers"));
    select.shape = Some(Shape::All);

    let (sql, params) = mssql(select);
    assert_eq!(
        sql,
        "SELECT CASE WHEN NOT EXISTS (SELECT NULL AS tmp FROM [customers] \
         WHERE 0 <> 0) THEN 1 ELSE 0 END"
    );
    assert!(params.is_empty());
}

#[test]
fn contains_shape_wraps_in_a_membership_test() {
    let mut select =
        Select::new(TableRef::new("customers")).field(Operand::Column(Column::unqualified("id")));
    select.shape = Some(Shape::Contains(Operand::value(5_i64)));

    let (sql, params) = sqlite(select);
    assert_eq!(
        sql,
        "SELECT CASE WHEN @0 IN (SELECT [id] FROM [customers]) THEN 1 ELSE 0 END"
    );
    assert_eq!(params, vec![Value::I64(5)]);
}

// ---------------------------------------------------------------------------
// Parameter sinks
// ---------------------------------------------------------------------------

#[test]
#[should_panic(expected = "statement unexpectedly produced a parameter")]
fn the_no_params_sink_refuses_values() {
    let select = Select::new(TableRef::new("customers"))
        .filter(Condition::eq(Column::unqualified("city"), "London"));

    let _ = Serializer::mssql().serialize_params(&Statement::from(select), &mut NoParams);
}
