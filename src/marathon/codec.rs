use crate::marathon::ServiceMarathon;
use crate::{EdgeLbError, Result};
use log::debug;
use serde::de::{Error as _, Unexpected};
use serde_json::Value;

pub fn from_str(input: &str) -> Result<ServiceMarathon> {
    let value: Value = serde_json::from_str(input).map_err(EdgeLbError::MalformedInput)?;
    from_value(value)
}

pub fn from_slice(input: &[u8]) -> Result<ServiceMarathon> {
    let value: Value = serde_json::from_slice(input).map_err(EdgeLbError::MalformedInput)?;
    from_value(value)
}

// Objects only. Unknown keys are ignored and null reads as unset.
pub fn from_value(value: Value) -> Result<ServiceMarathon> {
    if !value.is_object() {
        return Err(EdgeLbError::MalformedInput(serde_json::Error::invalid_type(
            unexpected(&value),
            &"a selector object",
        )));
    }

    serde_json::from_value(value).map_err(EdgeLbError::MalformedInput)
}

// Either a single selector object or an array of them
pub fn from_str_many(input: &str) -> Result<Vec<ServiceMarathon>> {
    let value: Value = serde_json::from_str(input).map_err(EdgeLbError::MalformedInput)?;

    let selectors = match value {
        Value::Array(items) => items
            .into_iter()
            .map(from_value)
            .collect::<Result<Vec<_>>>()?,
        other => vec![from_value(other)?],
    };

    debug!("Decoded {} selector(s)", selectors.len());
    Ok(selectors)
}

pub fn to_value(selector: &ServiceMarathon) -> Result<Value> {
    serde_json::to_value(selector).map_err(EdgeLbError::EncodeError)
}

pub fn to_string(selector: &ServiceMarathon) -> Result<String> {
    serde_json::to_string(selector).map_err(EdgeLbError::EncodeError)
}

pub fn to_string_pretty(selector: &ServiceMarathon) -> Result<String> {
    serde_json::to_string_pretty(selector).map_err(EdgeLbError::EncodeError)
}

fn unexpected(value: &Value) -> Unexpected<'_> {
    match value {
        Value::Null => Unexpected::Unit,
        Value::Bool(b) => Unexpected::Bool(*b),
        Value::Number(n) => match n.as_f64() {
            Some(f) => Unexpected::Float(f),
            None => Unexpected::Other("number"),
        },
        Value::String(s) => Unexpected::Str(s),
        Value::Array(_) => Unexpected::Seq,
        Value::Object(_) => Unexpected::Map,
    }
}
