//! Template filters used by the page templates.
//!
//! Every filter degrades instead of failing: missing values render as a
//! placeholder so a sparse backend record never breaks a page.

use std::collections::HashMap;

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde_json::{Number, Value};
use tera::Tera;

const DEFAULT_PRECISION: i64 = 2;

const DATETIME_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

/// Registers all filters on the template engine.
pub fn register(tera: &mut Tera) {
    tera.register_filter("format_number", format_number_filter);
    tera.register_filter("human_date", human_date_filter);
    tera.register_filter("safe_round", safe_round_filter);
}

fn group_thousands(value: f64) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "inf" } else { "-inf" }.to_string();
    }

    let rounded = format!("{value:.0}");
    let (sign, digits) = match rounded.strip_prefix('-') {
        Some(digits) => ("-", digits),
        None => ("", rounded.as_str()),
    };

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    format!("{sign}{grouped}")
}

/// Formats a number with thousands separators and no decimals.
///
/// `null` renders as `"0"`; values that are not numbers are rendered as-is.
pub fn format_number(value: &Value) -> String {
    match value {
        Value::Null => "0".to_string(),
        Value::Number(number) => number
            .as_f64()
            .map(group_thousands)
            .unwrap_or_else(|| number.to_string()),
        Value::Bool(flag) => group_thousands(if *flag { 1.0 } else { 0.0 }),
        Value::String(text) => match text.trim().parse::<f64>() {
            Ok(number) => group_thousands(number),
            Err(_) => text.clone(),
        },
        other => other.to_string(),
    }
}

fn parse_timestamp(raw: &str) -> Option<NaiveDateTime> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.naive_local());
    }

    DATETIME_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(raw, format).ok())
        .or_else(|| {
            NaiveDate::parse_from_str(raw, "%Y-%m-%d")
                .ok()
                .and_then(|date| date.and_hms_opt(0, 0, 0))
        })
}

/// Converts an ISO timestamp into e.g. `"September 07, 2025 at 10:21 PM"`.
pub fn human_date(value: &Value) -> String {
    let raw = match value {
        Value::Null => return "N/A".to_string(),
        Value::String(raw) if raw.is_empty() => return "N/A".to_string(),
        Value::String(raw) => raw.as_str(),
        _ => return "Invalid Date".to_string(),
    };

    match parse_timestamp(raw) {
        Some(dt) => dt.format("%B %d, %Y at %I:%M %p").to_string(),
        None => "Invalid Date".to_string(),
    }
}

/// Rounds an integer to `precision` decimals. Only a negative precision
/// changes the value; ties go to the even multiple.
fn round_integer(value: i128, precision: i64) -> Value {
    if precision >= 0 {
        return integer_value(value);
    }

    let Some(factor) = u32::try_from(precision.unsigned_abs())
        .ok()
        .and_then(|exponent| 10i128.checked_pow(exponent))
    else {
        return Value::from(0);
    };

    let quotient = value.div_euclid(factor);
    let remainder = value.rem_euclid(factor);
    let quotient = match remainder.cmp(&(factor - remainder)) {
        std::cmp::Ordering::Less => quotient,
        std::cmp::Ordering::Greater => quotient + 1,
        std::cmp::Ordering::Equal if quotient % 2 == 0 => quotient,
        std::cmp::Ordering::Equal => quotient + 1,
    };

    quotient
        .checked_mul(factor)
        .map(integer_value)
        .unwrap_or_else(|| Value::from(0))
}

fn integer_value(value: i128) -> Value {
    if let Ok(value) = i64::try_from(value) {
        return Value::from(value);
    }
    if let Ok(value) = u64::try_from(value) {
        return Value::from(value);
    }
    Number::from_f64(value as f64)
        .map(Value::Number)
        .unwrap_or_else(|| Value::from(0))
}

/// Rounds a number to `precision` decimals. Anything that is not a number
/// becomes `0`; booleans count as `0` and `1`.
pub fn safe_round(value: &Value, precision: i64) -> Value {
    let number = match value {
        Value::Number(number) => number,
        Value::Bool(flag) => return round_integer(i128::from(*flag), precision),
        _ => return Value::from(0),
    };

    if let Some(integer) = number.as_i64() {
        return round_integer(i128::from(integer), precision);
    }
    if let Some(integer) = number.as_u64() {
        return round_integer(i128::from(integer), precision);
    }

    let Some(float) = number.as_f64() else {
        return Value::from(0);
    };
    let exponent =
        i32::try_from(precision).unwrap_or(if precision < 0 { i32::MIN } else { i32::MAX });
    let factor = 10f64.powi(exponent);
    let rounded = (float * factor).round() / factor;

    Number::from_f64(rounded)
        .map(Value::Number)
        .unwrap_or_else(|| value.clone())
}

fn format_number_filter(value: &Value, _args: &HashMap<String, Value>) -> tera::Result<Value> {
    Ok(Value::String(format_number(value)))
}

fn human_date_filter(value: &Value, _args: &HashMap<String, Value>) -> tera::Result<Value> {
    Ok(Value::String(human_date(value)))
}

fn safe_round_filter(value: &Value, args: &HashMap<String, Value>) -> tera::Result<Value> {
    let precision = args
        .get("precision")
        .and_then(Value::as_i64)
        .unwrap_or(DEFAULT_PRECISION);

    Ok(safe_round(value, precision))
}
