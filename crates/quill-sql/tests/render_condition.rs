use pretty_assertions::assert_eq;

use quill_core::stmt::{Column, Condition, Link, Operand, Select, TableRef, Value};
use quill_sql::{Serializer, Statement};

fn where_clause(condition: Condition) -> (String, Vec<Value>) {
    let select = Select::new(TableRef::new("customers")).filter(condition);
    let command = Serializer::mssql()
        .serialize(&Statement::from(select))
        .unwrap();
    let text = command
        .text
        .strip_prefix("SELECT * FROM [customers] WHERE ")
        .expect("statement should have a WHERE clause")
        .to_string();
    (text, command.params)
}

fn city() -> Operand {
    Operand::Column(Column::unqualified("city"))
}

// ---------------------------------------------------------------------------
// Null handling
// ---------------------------------------------------------------------------

#[test]
fn equality_against_null_is_a_null_test() {
    let (sql, params) = where_clause(Condition::eq(city(), Operand::null()));
    assert_eq!(sql, "[city] IS NULL");
    assert!(params.is_empty());
}

#[test]
fn inequality_against_null_is_a_not_null_test() {
    let (sql, _) = where_clause(Condition::ne(city(), Operand::null()));
    assert_eq!(sql, "[city] IS NOT NULL");
}

#[test]
fn null_on_the_left_folds_the_same_way() {
    let (sql, _) = where_clause(Condition::eq(Operand::null(), city()));
    assert_eq!(sql, "[city] IS NULL");
}

#[test]
fn negating_a_null_test_flips_it() {
    let (sql, _) = where_clause(Condition::eq(city(), Operand::null()).negate());
    assert_eq!(sql, "[city] IS NOT NULL");
}

#[test]
fn a_param_bound_to_null_folds_into_a_null_test() {
    let (sql, params) = where_clause(Condition::eq(city(), Operand::param("city", Value::Null)));
    assert_eq!(sql, "[city] IS NULL");
    assert!(params.is_empty());

    let (sql, _) = where_clause(Condition::ne(city(), Operand::param("city", Value::Null)));
    assert_eq!(sql, "[city] IS NOT NULL");
}

#[test]
fn is_null_shorthand() {
    let (sql, _) = where_clause(Condition::is_null(city()));
    assert_eq!(sql, "[city] IS NULL");
}

// ---------------------------------------------------------------------------
// Comparisons
// ---------------------------------------------------------------------------

#[test]
fn binary_comparison_operators() {
    let (sql, params) = where_clause(Condition::and(
        Condition::ge(Operand::Column(Column::unqualified("age")), 18_i64),
        Condition::lt(Operand::Column(Column::unqualified("age")), 65_i64),
    ));
    assert_eq!(sql, "[age] >= @0 AND [age] < @1");
    assert_eq!(params, vec![Value::I64(18), Value::I64(65)]);
}

#[test]
fn negation_wraps_the_comparison() {
    let (sql, params) = where_clause(Condition::eq(city(), "London").negate());
    assert_eq!(sql, "NOT ([city] = @0)");
    assert_eq!(params, vec![Value::from("London")]);
}

#[test]
fn repeated_values_share_one_placeholder() {
    let (sql, params) = where_clause(Condition::or(
        Condition::eq(city(), "London"),
        Condition::eq(Operand::Column(Column::unqualified("birthplace")), "London"),
    ));
    assert_eq!(sql, "[city] = @0 OR [birthplace] = @0");
    assert_eq!(params, vec![Value::from("London")]);
}

#[test]
fn membership_in_an_empty_list_never_holds() {
    let (sql, params) = where_clause(Condition::is_in(city(), []));
    assert_eq!(sql, "0 <> 0");
    assert!(params.is_empty());
}

#[test]
fn membership_in_a_value_list() {
    let (sql, params) = where_clause(Condition::is_in(
        city(),
        [Operand::value("London"), Operand::value("Paris")],
    ));
    assert_eq!(sql, "[city] IN (@0, @1)");
    assert_eq!(params, vec![Value::from("London"), Value::from("Paris")]);
}

#[test]
fn membership_in_a_subquery() {
    let inner = Select::new(TableRef::new("orders"))
        .field(Operand::Column(Column::unqualified("customer_id")));
    let (sql, _) = where_clause(Condition::is_in(
        Operand::Column(Column::unqualified("id")),
        [Operand::query(inner)],
    ));
    assert_eq!(sql, "[id] IN (SELECT [customer_id] FROM [orders])");
}

#[test]
fn between_is_inclusive_range_syntax() {
    let (sql, params) = where_clause(Condition::between(
        Operand::Column(Column::unqualified("age")),
        18_i64,
        65_i64,
    ));
    assert_eq!(sql, "[age] BETWEEN @0 AND @1");
    assert_eq!(params, vec![Value::I64(18), Value::I64(65)]);
}

// ---------------------------------------------------------------------------
// Pattern matches diverge per dialect
// ---------------------------------------------------------------------------

fn pattern(serializer: Serializer, op: quill_core::stmt::CompareOp) -> String {
    let select = Select::new(TableRef::new("customers"))
        .filter(Condition::compare(city(), op, "don"));
    serializer
        .serialize(&Statement::from(select))
        .unwrap()
        .text
        .strip_prefix("SELECT * FROM [customers] WHERE ")
        .unwrap()
        .to_string()
}

#[test]
fn contains_uses_charindex_on_the_server() {
    use quill_core::stmt::CompareOp;

    assert_eq!(
        pattern(Serializer::mssql(), CompareOp::Contains),
        "CHARINDEX(@0, [city]) > 0"
    );
    assert_eq!(
        pattern(Serializer::sqlite(), CompareOp::Contains),
        "[city] LIKE '%' || @0 || '%'"
    );
}

#[test]
fn prefix_and_suffix_matches_concatenate_the_wildcard() {
    use quill_core::stmt::CompareOp;

    assert_eq!(
        pattern(Serializer::mssql(), CompareOp::StartsWith),
        "[city] LIKE @0 + '%'"
    );
    assert_eq!(
        pattern(Serializer::sqlite(), CompareOp::StartsWith),
        "[city] LIKE @0 || '%'"
    );
    assert_eq!(
        pattern(Serializer::mssql(), CompareOp::EndsWith),
        "[city] LIKE '%' + @0"
    );
    assert_eq!(
        pattern(Serializer::sqlite(), CompareOp::EndsWith),
        "[city] LIKE '%' || @0"
    );
}

// ---------------------------------------------------------------------------
// Groups
// ---------------------------------------------------------------------------

#[test]
fn nested_groups_parenthesize_only_where_needed() {
    let condition = Condition::and(
        Condition::eq(city(), "London"),
        Condition::or(
            Condition::eq(Operand::Column(Column::unqualified("vip")), true),
            Condition::gt(Operand::Column(Column::unqualified("orders")), 10_i64),
        ),
    );

    let (sql, _) = where_clause(condition);
    assert_eq!(sql, "[city] = @0 AND ([vip] = @1 OR [orders] > @2)");
}

#[test]
fn empty_children_leave_no_dangling_links() {
    let condition = Condition::group(
        [
            Condition::group([], Link::And),
            Condition::eq(city(), "London"),
            Condition::group([], Link::And),
        ],
        Link::And,
    );

    let (sql, params) = where_clause(condition);
    assert_eq!(sql, "[city] = @0");
    assert_eq!(params, vec![Value::from("London")]);
}

#[test]
fn negated_groups_wrap_in_not() {
    let condition = Condition::or(
        Condition::eq(city(), "London"),
        Condition::eq(city(), "Paris"),
    )
    .negate();

    let (sql, _) = where_clause(condition);
    assert_eq!(sql, "NOT ([city] = @0 OR [city] = @1)");
}

// ---------------------------------------------------------------------------
// Existence and predicates in value position
// ---------------------------------------------------------------------------

#[test]
fn not_exists_renders_the_negation_outside() {
    let inner = Select::new(TableRef::new("orders"));
    let (sql, _) = where_clause(Condition::not_exists(inner));
    assert_eq!(sql, "NOT EXISTS (SELECT NULL AS tmp FROM [orders])");
}

#[test]
fn a_predicate_in_value_position_becomes_a_case_expression() {
    let select = Select::new(TableRef::new("customers"))
        .field(Operand::predicate(Condition::eq(city(), "London")));

    let command = Serializer::mssql()
        .serialize(&Statement::from(select))
        .unwrap();
    assert_eq!(
        command.text,
        "SELECT CASE WHEN [city] = @0 THEN 1 ELSE 0 END FROM [customers]"
    );
}
