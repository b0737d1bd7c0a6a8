use pretty_assertions::assert_eq;

use quill_core::stmt::{
    Aggregate, AggregateFunc, ArithOp, Case, Column, Condition, NumFunc, Operand, OrderBy,
    RowNumber, Select, StrFunc, TableRef, Value,
};
use quill_sql::{Serializer, Statement};

/// Renders one operand projected from a fixed table and returns the
/// projection text.
fn project(serializer: Serializer, operand: impl Into<Operand>) -> (String, Vec<Value>) {
    let select = Select::new(TableRef::new("t")).field(operand.into());
    let command = serializer.serialize(&Statement::from(select)).unwrap();
    let text = command
        .text
        .strip_prefix("SELECT ")
        .unwrap()
        .strip_suffix(" FROM [t]")
        .unwrap()
        .to_string();
    (text, command.params)
}

fn sqlite(operand: impl Into<Operand>) -> String {
    project(Serializer::sqlite(), operand).0
}

fn mssql(operand: impl Into<Operand>) -> String {
    project(Serializer::mssql(), operand).0
}

fn name() -> Operand {
    Operand::Column(Column::unqualified("name"))
}

// ---------------------------------------------------------------------------
// String functions
// ---------------------------------------------------------------------------

#[test]
fn length_diverges_by_name() {
    assert_eq!(sqlite(StrFunc::Length(name())), "LENGTH([name])");
    assert_eq!(mssql(StrFunc::Length(name())), "LEN([name])");
}

#[test]
fn substring_adjusts_to_one_based_offsets() {
    let func = StrFunc::Substring {
        expr: name(),
        start: Operand::value(2_i64),
        length: Some(Operand::value(3_i64)),
    };
    assert_eq!(sqlite(func.clone()), "SUBSTR([name], @0 + 1, @1)");
    assert_eq!(mssql(func), "SUBSTRING([name], @0 + 1, @1)");
}

#[test]
fn substring_without_length_takes_the_rest() {
    let func = StrFunc::Substring {
        expr: name(),
        start: Operand::value(2_i64),
        length: None,
    };
    assert_eq!(sqlite(func.clone()), "SUBSTR([name], @0 + 1)");
    // SUBSTRING requires a length; the string's own length is always enough.
    assert_eq!(mssql(func), "SUBSTRING([name], @0 + 1, LEN([name]))");
}

#[test]
fn remove_stitches_on_the_embedded_engine_and_stuffs_on_the_server() {
    let func = StrFunc::Remove {
        expr: name(),
        start: Operand::value(2_i64),
        count: Some(Operand::value(3_i64)),
    };
    assert_eq!(
        sqlite(func.clone()),
        "(SUBSTR([name], 1, @0) || SUBSTR([name], @0 + @1 + 1))"
    );
    assert_eq!(mssql(func), "STUFF([name], @0 + 1, @1, '')");
}

#[test]
fn remove_without_count_truncates() {
    let func = StrFunc::Remove {
        expr: name(),
        start: Operand::value(2_i64),
        count: None,
    };
    assert_eq!(sqlite(func.clone()), "SUBSTR([name], 1, @0)");
    assert_eq!(mssql(func), "STUFF([name], @0 + 1, LEN([name]), '')");
}

#[test]
fn index_of_returns_zero_based_positions() {
    let func = StrFunc::IndexOf {
        expr: name(),
        search: Operand::value("don"),
    };
    assert_eq!(sqlite(func.clone()), "(INSTR([name], @0) - 1)");
    // CHARINDEX takes the needle first.
    assert_eq!(mssql(func), "(CHARINDEX(@0, [name]) - 1)");
}

#[test]
fn trim_composes_on_the_server() {
    assert_eq!(sqlite(StrFunc::Trim(name())), "TRIM([name])");
    assert_eq!(mssql(StrFunc::Trim(name())), "LTRIM(RTRIM([name]))");
}

#[test]
fn upper_lower_and_replace_are_shared() {
    assert_eq!(sqlite(StrFunc::Upper(name())), "UPPER([name])");
    assert_eq!(mssql(StrFunc::Lower(name())), "LOWER([name])");

    let replace = StrFunc::Replace {
        expr: name(),
        from: Operand::value("a"),
        to: Operand::value("b"),
    };
    assert_eq!(sqlite(replace.clone()), "REPLACE([name], @0, @1)");
    assert_eq!(mssql(replace), "REPLACE([name], @0, @1)");
}

#[test]
fn three_way_compare_is_a_case_chain() {
    let func = StrFunc::Compare {
        left: Operand::Column(Column::unqualified("a")),
        right: Operand::Column(Column::unqualified("b")),
    };
    assert_eq!(
        mssql(func),
        "CASE WHEN [a] < [b] THEN -1 WHEN [a] > [b] THEN 1 ELSE 0 END"
    );
}

#[test]
fn concat_uses_the_dialect_operator() {
    let func = StrFunc::Concat(vec![
        Operand::Column(Column::unqualified("first")),
        Operand::value(" "),
        Operand::Column(Column::unqualified("last")),
    ]);
    assert_eq!(sqlite(func.clone()), "([first] || @0 || [last])");
    assert_eq!(mssql(func), "([first] + @0 + [last])");
}

// ---------------------------------------------------------------------------
// Numeric functions
// ---------------------------------------------------------------------------

fn x() -> Operand {
    Operand::Column(Column::unqualified("x"))
}

#[test]
fn floor_and_ceiling_are_emulated_on_the_embedded_engine() {
    assert_eq!(sqlite(NumFunc::Floor(x())), "ROUND([x] - 0.5)");
    assert_eq!(mssql(NumFunc::Floor(x())), "FLOOR([x])");

    assert_eq!(
        sqlite(NumFunc::Ceiling(x())),
        "(CAST([x] AS INTEGER) + (CASE WHEN [x] > CAST([x] AS INTEGER) THEN 1 ELSE 0 END))"
    );
    assert_eq!(mssql(NumFunc::Ceiling(x())), "CEILING([x])");
}

#[test]
fn round_without_digits_gets_an_explicit_length_on_the_server() {
    let func = NumFunc::Round {
        expr: x(),
        digits: None,
    };
    assert_eq!(sqlite(func.clone()), "ROUND([x])");
    assert_eq!(mssql(func), "ROUND([x], 0)");

    let func = NumFunc::Round {
        expr: x(),
        digits: Some(Operand::value(2_i64)),
    };
    assert_eq!(mssql(func), "ROUND([x], @0)");
}

#[test]
fn truncate_goes_toward_zero_on_both_dialects() {
    assert_eq!(sqlite(NumFunc::Truncate(x())), "CAST([x] AS INTEGER)");
    assert_eq!(mssql(NumFunc::Truncate(x())), "ROUND([x], 0, 1)");
}

#[test]
fn sign_is_a_case_chain_on_the_embedded_engine() {
    assert_eq!(
        sqlite(NumFunc::Sign(x())),
        "CASE WHEN [x] > 0 THEN 1 WHEN [x] < 0 THEN -1 ELSE 0 END"
    );
    assert_eq!(mssql(NumFunc::Sign(x())), "SIGN([x])");
}

#[test]
fn natural_log_diverges_by_name() {
    assert_eq!(sqlite(NumFunc::Log(x())), "LN([x])");
    assert_eq!(mssql(NumFunc::Log(x())), "LOG([x])");
    assert_eq!(mssql(NumFunc::Log10(x())), "LOG10([x])");
}

#[test]
fn shared_numeric_functions() {
    assert_eq!(sqlite(NumFunc::Abs(x())), "ABS([x])");
    assert_eq!(mssql(NumFunc::Negate(x())), "(-[x])");
    assert_eq!(mssql(NumFunc::Sqrt(x())), "SQRT([x])");
    assert_eq!(
        mssql(NumFunc::Power {
            base: x(),
            exponent: Operand::value(2_i64),
        }),
        "POWER([x], @0)"
    );
}

// ---------------------------------------------------------------------------
// Aggregates, row numbers, case, arithmetic
// ---------------------------------------------------------------------------

#[test]
fn count_star_and_distinct_aggregates() {
    assert_eq!(mssql(Aggregate::count_star()), "COUNT(*)");
    assert_eq!(
        mssql(Aggregate::new(AggregateFunc::Sum, x()).distinct()),
        "SUM(DISTINCT [x])"
    );
    assert_eq!(mssql(Aggregate::new(AggregateFunc::Avg, x())), "AVG([x])");
}

#[test]
fn big_count_only_differs_on_the_server() {
    let func = Aggregate::new(AggregateFunc::BigCount, None);
    assert_eq!(mssql(func.clone()), "COUNT_BIG(*)");
    // The embedded engine's COUNT is already 64-bit.
    assert_eq!(sqlite(func), "COUNT(*)");
}

#[test]
fn row_number_requires_an_order_even_when_unspecified() {
    assert_eq!(
        mssql(RowNumber::new([])),
        "ROW_NUMBER() OVER (ORDER BY (SELECT NULL))"
    );
    assert_eq!(
        mssql(RowNumber::new([OrderBy::desc(x())])),
        "ROW_NUMBER() OVER (ORDER BY [x] DESC)"
    );
}

#[test]
fn nested_case_flattens_into_one_when_chain() {
    let status = Operand::Column(Column::unqualified("status"));
    let case = Case::new(
        Condition::eq(status.clone(), 1_i64),
        "gold",
        Case::new(Condition::eq(status, 2_i64), "silver", "none"),
    );

    let (sql, params) = project(Serializer::mssql(), case);
    assert_eq!(
        sql,
        "CASE WHEN [status] = @0 THEN @1 WHEN [status] = @2 THEN @3 ELSE @4 END"
    );
    assert_eq!(
        params,
        vec![
            Value::I64(1),
            Value::from("gold"),
            Value::I64(2),
            Value::from("silver"),
            Value::from("none"),
        ]
    );
}

#[test]
fn arithmetic_parenthesizes_each_node() {
    let tax = Operand::arith(
        Operand::Column(Column::unqualified("price")),
        ArithOp::Mul,
        Operand::value(0.2_f64),
    );
    let total = Operand::arith(Operand::Column(Column::unqualified("price")), ArithOp::Add, tax);

    let (sql, params) = project(Serializer::mssql(), total);
    assert_eq!(sql, "([price] + ([price] * @0))");
    assert_eq!(params, vec![Value::F64(0.2)]);
}

#[test]
fn named_params_render_by_carried_value() {
    let operand = Operand::param("city", "London");
    let (sql, params) = project(Serializer::mssql(), operand);
    assert_eq!(sql, "@0");
    assert_eq!(params, vec![Value::from("London")]);
}

#[test]
fn equal_param_and_value_share_a_placeholder() {
    let select = Select::new(TableRef::new("t"))
        .field(Operand::param("city", "London"))
        .field(Operand::value("London"));
    let command = Serializer::mssql()
        .serialize(&Statement::from(select))
        .unwrap();
    assert_eq!(command.text, "SELECT @0, @0 FROM [t]");
    assert_eq!(command.params, vec![Value::from("London")]);
}
