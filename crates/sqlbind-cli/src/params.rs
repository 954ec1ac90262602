//! Bind arguments from JSON.
//!
//! The parameter list is a JSON array. Objects bind by name and do not take a
//! positional index; every other element binds the next index.

use anyhow::{Context, Result, bail};
use serde_json::Value;
use sqlbind_core::{BindArg, Placeholder, SqlValue};

/// Parses a JSON array of bind arguments.
pub fn parse_params(json: &str) -> Result<Vec<BindArg>> {
    let value: Value = serde_json::from_str(json).context("Invalid --params JSON")?;
    let items = match value {
        Value::Array(items) => items,
        other => bail!("--params must be a JSON array, got {other}"),
    };

    items.into_iter().map(to_bind_arg).collect()
}

fn to_bind_arg(value: Value) -> Result<BindArg> {
    match value {
        Value::Object(map) => {
            let entries = map
                .into_iter()
                .map(|(key, value)| Ok((to_placeholder(key), to_sql_value(value)?)))
                .collect::<Result<Vec<_>>>()?;
            Ok(BindArg::Named(entries))
        }
        other => Ok(BindArg::Positional(to_sql_value(other)?)),
    }
}

/// Object keys are always strings in JSON; all-digit keys address positional
/// placeholders.
fn to_placeholder(key: String) -> Placeholder {
    if !key.is_empty() && key.chars().all(|c| c.is_ascii_digit()) {
        if let Ok(index) = key.parse::<i64>() {
            return Placeholder::Index(index);
        }
    }
    Placeholder::Name(key)
}

fn to_sql_value(value: Value) -> Result<SqlValue> {
    Ok(match value {
        Value::Null => SqlValue::Null,
        Value::Bool(b) => SqlValue::Bool(b),
        Value::Number(n) => match n.as_i64() {
            Some(i) => SqlValue::Int(i),
            None => match n.as_f64() {
                Some(x) => SqlValue::Float(x),
                None => bail!("Number {n} cannot be bound"),
            },
        },
        Value::String(s) => SqlValue::Text(s),
        Value::Array(_) | Value::Object(_) => {
            bail!("Nested arrays and objects cannot be bound: {value}")
        }
    })
}
