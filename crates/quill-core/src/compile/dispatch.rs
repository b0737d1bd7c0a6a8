//! Member and method dispatch.
//!
//! The expression tree names members and methods as strings; the key for
//! lowering them is the pair of declaring type and name. Everything the
//! pair does not match is an `unsupported` error carrying both halves.

use super::value;
use crate::expr::Expr;
use crate::schema::ValueType;
use crate::stmt::{CompareOp, DateFunc, DatePart, NumFunc, Operand, StrFunc};
use crate::{Error, Result};

/// Methods whose result is a condition rather than a value, keyed by
/// declaring type and name.
pub(super) fn condition_op(ty: ValueType, method: &str) -> Option<CompareOp> {
    match (ty, method) {
        (ValueType::String, "contains") => Some(CompareOp::Contains),
        (ValueType::String, "starts_with") => Some(CompareOp::StartsWith),
        (ValueType::String, "ends_with") => Some(CompareOp::EndsWith),
        (_, "equals") => Some(CompareOp::Eq),
        _ => None,
    }
}

pub(super) fn member(ty: ValueType, expr: &Expr, member: &str) -> Result<Operand> {
    match (ty, member) {
        (ValueType::String, "length") => Ok(StrFunc::Length(value(expr)?).into()),
        (ValueType::Date | ValueType::DateTime, _) => {
            let Some(part) = part_member(member) else {
                return Err(unknown_member(ty, member));
            };
            Ok(DateFunc::Part {
                part,
                expr: value(expr)?,
            }
            .into())
        }
        _ => Err(unknown_member(ty, member)),
    }
}

pub(super) fn call(
    ty: ValueType,
    object: Option<&Expr>,
    method: &str,
    args: &[Expr],
) -> Result<Operand> {
    match ty {
        ValueType::String => str_call(object, method, args),
        ValueType::Date | ValueType::DateTime => date_call(ty, object, method, args),
        ValueType::I32 | ValueType::I64 | ValueType::F64 => num_call(ty, object, method, args),
        _ => Err(unknown_method(ty, method)),
    }
}

pub(super) fn new_of(ty: ValueType, args: &[Expr]) -> Result<Operand> {
    if ty != ValueType::DateTime {
        return Err(Error::unsupported(format!("constructor for {ty:?}")));
    }
    let func = match args {
        [year, month, day] => DateFunc::FromParts {
            year: value(year)?,
            month: value(month)?,
            day: value(day)?,
            hour: None,
            minute: None,
            second: None,
        },
        [year, month, day, hour, minute, second] => DateFunc::FromParts {
            year: value(year)?,
            month: value(month)?,
            day: value(day)?,
            hour: Some(value(hour)?),
            minute: Some(value(minute)?),
            second: Some(value(second)?),
        },
        _ => {
            return Err(Error::unsupported(
                "datetime constructor takes 3 or 6 arguments",
            ))
        }
    };
    Ok(func.into())
}

fn str_call(object: Option<&Expr>, method: &str, args: &[Expr]) -> Result<Operand> {
    // Concatenation and three-way compare also come in static form, with
    // every operand in the argument list.
    if method == "concat" {
        let parts = object
            .into_iter()
            .chain(args)
            .map(value)
            .collect::<Result<Vec<_>>>()?;
        return Ok(StrFunc::Concat(parts).into());
    }
    if method == "compare" || method == "compare_to" {
        return match (object, args) {
            (None, [left, right]) | (Some(left), [right]) => Ok(StrFunc::Compare {
                left: value(left)?,
                right: value(right)?,
            }
            .into()),
            _ => Err(unknown_method(ValueType::String, method)),
        };
    }

    let Some(object) = object else {
        return Err(unknown_method(ValueType::String, method));
    };
    let target = value(object)?;

    let func = match (method, args) {
        ("substring", [start]) => StrFunc::Substring {
            expr: target,
            start: value(start)?,
            length: None,
        },
        ("substring", [start, length]) => StrFunc::Substring {
            expr: target,
            start: value(start)?,
            length: Some(value(length)?),
        },
        ("remove", [start]) => StrFunc::Remove {
            expr: target,
            start: value(start)?,
            count: None,
        },
        ("remove", [start, count]) => StrFunc::Remove {
            expr: target,
            start: value(start)?,
            count: Some(value(count)?),
        },
        ("index_of", [search]) => StrFunc::IndexOf {
            expr: target,
            search: value(search)?,
        },
        ("replace", [from, to]) => StrFunc::Replace {
            expr: target,
            from: value(from)?,
            to: value(to)?,
        },
        ("to_upper", []) => StrFunc::Upper(target),
        ("to_lower", []) => StrFunc::Lower(target),
        ("trim", []) => StrFunc::Trim(target),
        _ => return Err(unknown_method(ValueType::String, method)),
    };
    Ok(func.into())
}

fn date_call(ty: ValueType, object: Option<&Expr>, method: &str, args: &[Expr]) -> Result<Operand> {
    let Some(object) = object else {
        return Err(unknown_method(ty, method));
    };

    if let Some(part) = method.strip_prefix("add_").and_then(part_unit) {
        let [amount] = args else {
            return Err(unknown_method(ty, method));
        };
        return Ok(DateFunc::Add {
            part,
            expr: value(object)?,
            amount: value(amount)?,
        }
        .into());
    }
    if let Some(part) = method.strip_prefix("diff_").and_then(part_unit) {
        let [end] = args else {
            return Err(unknown_method(ty, method));
        };
        return Ok(DateFunc::Diff {
            part,
            start: value(object)?,
            end: value(end)?,
        }
        .into());
    }
    Err(unknown_method(ty, method))
}

fn num_call(ty: ValueType, object: Option<&Expr>, method: &str, args: &[Expr]) -> Result<Operand> {
    // Static calls name their target as the first argument.
    let mut operands = args.iter().map(value).collect::<Result<Vec<_>>>()?;
    if let Some(object) = object {
        operands.insert(0, value(object)?);
    }
    let mut operands = operands.into_iter();
    let Some(target) = operands.next() else {
        return Err(unknown_method(ty, method));
    };
    let second = operands.next();

    let func = match (method, second) {
        ("abs", None) => NumFunc::Abs(target),
        ("ceiling", None) => NumFunc::Ceiling(target),
        ("floor", None) => NumFunc::Floor(target),
        ("round", digits) => NumFunc::Round {
            expr: target,
            digits,
        },
        ("truncate", None) => NumFunc::Truncate(target),
        ("sign", None) => NumFunc::Sign(target),
        ("pow", Some(exponent)) => NumFunc::Power {
            base: target,
            exponent,
        },
        ("sqrt", None) => NumFunc::Sqrt(target),
        ("exp", None) => NumFunc::Exp(target),
        ("log", None) => NumFunc::Log(target),
        ("log10", None) => NumFunc::Log10(target),
        ("sin", None) => NumFunc::Sin(target),
        ("cos", None) => NumFunc::Cos(target),
        ("tan", None) => NumFunc::Tan(target),
        ("asin", None) => NumFunc::Asin(target),
        ("acos", None) => NumFunc::Acos(target),
        ("atan", None) => NumFunc::Atan(target),
        _ => return Err(unknown_method(ty, method)),
    };
    Ok(func.into())
}

fn part_member(name: &str) -> Option<DatePart> {
    Some(match name {
        "year" => DatePart::Year,
        "quarter" => DatePart::Quarter,
        "month" => DatePart::Month,
        "day" => DatePart::Day,
        "day_of_year" => DatePart::DayOfYear,
        "day_of_week" => DatePart::DayOfWeek,
        "hour" => DatePart::Hour,
        "minute" => DatePart::Minute,
        "second" => DatePart::Second,
        "millisecond" => DatePart::Millisecond,
        _ => return None,
    })
}

/// Plural unit suffixes used by the `add_*` and `diff_*` method families.
fn part_unit(name: &str) -> Option<DatePart> {
    Some(match name {
        "years" => DatePart::Year,
        "quarters" => DatePart::Quarter,
        "months" => DatePart::Month,
        "days" => DatePart::Day,
        "hours" => DatePart::Hour,
        "minutes" => DatePart::Minute,
        "seconds" => DatePart::Second,
        "milliseconds" => DatePart::Millisecond,
        _ => return None,
    })
}

fn unknown_member(ty: ValueType, member: &str) -> Error {
    Error::unsupported(format!("member `{member}` of {ty:?}"))
}

fn unknown_method(ty: ValueType, method: &str) -> Error {
    Error::unsupported(format!("method `{method}` of {ty:?}"))
}
