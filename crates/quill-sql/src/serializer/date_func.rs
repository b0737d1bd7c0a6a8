use super::{Formatter, Params, ToSql};

use quill_core::stmt::{DateFunc, DatePart, Operand};
use quill_core::{Error, Result};

impl ToSql for &DateFunc {
    fn to_sql<T: Params>(self, f: &mut Formatter<'_, T>) -> Result<()> {
        if f.is_mssql() {
            return mssql(self, f);
        }

        sqlite(self, f)
    }
}

/// T-SQL keyword for a date part, valid in DATEPART/DATEADD/DATEDIFF.
fn part_name(part: DatePart) -> &'static str {
    match part {
        DatePart::Year => "year",
        DatePart::Quarter => "quarter",
        DatePart::Month => "month",
        DatePart::Day => "day",
        DatePart::DayOfYear => "dayofyear",
        DatePart::DayOfWeek => "weekday",
        DatePart::Hour => "hour",
        DatePart::Minute => "minute",
        DatePart::Second => "second",
        DatePart::Millisecond => "millisecond",
    }
}

fn mssql<T: Params>(func: &DateFunc, f: &mut Formatter<'_, T>) -> Result<()> {
    match func {
        DateFunc::Part { part, expr } => {
            let part = part_name(*part);
            fmt!(f, "DATEPART(" part ", " expr ")");
        }
        DateFunc::Add { part, expr, amount } => {
            let part = part_name(*part);
            fmt!(f, "DATEADD(" part ", " amount ", " expr ")");
        }
        DateFunc::Diff { part, start, end } => {
            let part = part_name(*part);
            fmt!(f, "DATEDIFF(" part ", " start ", " end ")");
        }
        DateFunc::FromParts {
            year,
            month,
            day,
            hour,
            minute,
            second,
        } => {
            fmt!(f, "DATETIMEFROMPARTS(" year ", " month ", " day ", ");
            time_field(hour, f)?;
            fmt!(f, ", ");
            time_field(minute, f)?;
            fmt!(f, ", ");
            time_field(second, f)?;
            fmt!(f, ", 0)");
        }
    }

    Ok(())
}

/// STRFTIME code for the parts that map to one directly.
fn strftime_code(part: DatePart) -> &'static str {
    match part {
        DatePart::Year => "%Y",
        DatePart::Month => "%m",
        DatePart::Day => "%d",
        DatePart::DayOfYear => "%j",
        DatePart::Hour => "%H",
        DatePart::Minute => "%M",
        DatePart::Second => "%S",
        DatePart::Quarter | DatePart::DayOfWeek | DatePart::Millisecond => unreachable!(),
    }
}

/// SQLite datetime modifier unit for DATEADD emulation.
fn modifier_unit(part: DatePart) -> Result<&'static str> {
    Ok(match part {
        DatePart::Year => "years",
        DatePart::Month => "months",
        DatePart::Day => "days",
        DatePart::Hour => "hours",
        DatePart::Minute => "minutes",
        DatePart::Second => "seconds",
        part => {
            return Err(Error::unsupported(format!(
                "date addition by {part:?} on the embedded dialect"
            )))
        }
    })
}

/// Truncating STRFTIME format used to count boundary crossings for the
/// sub-day diff units.
fn truncate_format(part: DatePart) -> &'static str {
    match part {
        DatePart::Hour => "%Y-%m-%d %H:00:00",
        DatePart::Minute => "%Y-%m-%d %H:%M:00",
        DatePart::Second => "%Y-%m-%d %H:%M:%S",
        _ => unreachable!(),
    }
}

fn sqlite<T: Params>(func: &DateFunc, f: &mut Formatter<'_, T>) -> Result<()> {
    match func {
        DateFunc::Part { part, expr } => match part {
            DatePart::Quarter => {
                fmt!(f, "((CAST(STRFTIME('%m', " expr ") AS INTEGER) + 2) / 3)");
            }
            // %w is 0 = Sunday; shift to the 1-based convention.
            DatePart::DayOfWeek => {
                fmt!(f, "(CAST(STRFTIME('%w', " expr ") AS INTEGER) + 1)");
            }
            // %f is SS.SSS; subtracting the whole seconds leaves the
            // fractional part.
            DatePart::Millisecond => {
                fmt!(
                    f,
                    "CAST((STRFTIME('%f', " expr ") - STRFTIME('%S', " expr ")) * 1000 AS INTEGER)"
                );
            }
            part => {
                let code = strftime_code(*part);
                fmt!(f, "CAST(STRFTIME('" code "', " expr ") AS INTEGER)");
            }
        },
        DateFunc::Add { part, expr, amount } => {
            let unit = modifier_unit(*part)?;
            fmt!(f, "DATETIME(" expr ", CAST(" amount " AS TEXT) || ' " unit "')");
        }
        DateFunc::Diff { part, start, end } => match part {
            DatePart::Year => {
                fmt!(
                    f,
                    "(CAST(STRFTIME('%Y', " end ") AS INTEGER) - CAST(STRFTIME('%Y', " start ") AS INTEGER))"
                );
            }
            DatePart::Month => {
                fmt!(
                    f,
                    "((CAST(STRFTIME('%Y', " end ") AS INTEGER) - CAST(STRFTIME('%Y', " start ") AS INTEGER)) * 12 + CAST(STRFTIME('%m', " end ") AS INTEGER) - CAST(STRFTIME('%m', " start ") AS INTEGER))"
                );
            }
            DatePart::Day => {
                fmt!(
                    f,
                    "CAST(JULIANDAY(DATE(" end ")) - JULIANDAY(DATE(" start ")) AS INTEGER)"
                );
            }
            // Truncate both ends to the unit, then an exact julianday
            // difference counts the boundaries crossed. ROUND soaks up the
            // float representation of the day fraction.
            DatePart::Hour | DatePart::Minute | DatePart::Second => {
                let format = truncate_format(*part);
                let scale = match part {
                    DatePart::Hour => "24",
                    DatePart::Minute => "1440",
                    DatePart::Second => "86400",
                    _ => unreachable!(),
                };
                fmt!(
                    f,
                    "CAST(ROUND((JULIANDAY(STRFTIME('" format "', " end ")) - JULIANDAY(STRFTIME('" format "', " start "))) * " scale ") AS INTEGER)"
                );
            }
            part => {
                return Err(Error::unsupported(format!(
                    "date difference by {part:?} on the embedded dialect"
                )))
            }
        },
        DateFunc::FromParts {
            year,
            month,
            day,
            hour,
            minute,
            second,
        } => {
            fmt!(
                f,
                "DATETIME(PRINTF('%04d-%02d-%02d %02d:%02d:%02d', " year ", " month ", " day ", "
            );
            time_field(hour, f)?;
            fmt!(f, ", ");
            time_field(minute, f)?;
            fmt!(f, ", ");
            time_field(second, f)?;
            fmt!(f, "))");
        }
    }

    Ok(())
}

/// Optional time component; omitted fields default to zero.
fn time_field<T: Params>(field: &Option<Operand>, f: &mut Formatter<'_, T>) -> Result<()> {
    match field {
        Some(operand) => fmt!(f, operand),
        None => fmt!(f, "0"),
    }

    Ok(())
}
