use serde_json::Value;

use crate::{
    convert::IntoJson,
    error::ConversionError,
    value::{JsonObject, JsonValue, Number},
};

/// Structural ingestion of already-parsed `serde_json` trees.
///
/// This is a data conversion at the model boundary, not a text parser: the
/// crate still exposes no JSON reader of its own.
impl IntoJson for Value {
    fn into_json(self) -> Result<JsonValue, ConversionError> {
        match self {
            Value::Null => Ok(JsonValue::Null),
            Value::Bool(value) => Ok(JsonValue::Bool(value)),
            Value::Number(number) => to_number(&number).map(JsonValue::Number),
            Value::String(text) => Ok(JsonValue::String(text)),
            Value::Array(elements) => elements
                .into_iter()
                .map(IntoJson::into_json)
                .collect::<Result<Vec<_>, _>>()
                .map(JsonValue::Array),
            Value::Object(object) => object
                .into_iter()
                .map(|(key, value)| Ok((key, value.into_json()?)))
                .collect::<Result<JsonObject, _>>()
                .map(JsonValue::Object),
        }
    }
}

fn to_number(number: &serde_json::Number) -> Result<Number, ConversionError> {
    if let Some(value) = number.as_u64() {
        Ok(Number::from(value))
    } else if let Some(value) = number.as_i64() {
        Ok(Number::from(value))
    } else if let Some(value) = number.as_f64().and_then(Number::from_f64) {
        Ok(value)
    } else {
        Err(ConversionError::new(format!(
            "number {number} does not fit u64, i64, or finite f64"
        )))
    }
}

fn eq(lhs: &Value, rhs: &JsonValue) -> bool {
    match (lhs, rhs) {
        (Value::Null, JsonValue::Null) => true,
        (Value::Bool(l), JsonValue::Bool(r)) => l == r,
        (Value::Number(l), JsonValue::Number(r)) => numbers_eq(l, r),
        (Value::String(l), JsonValue::String(r)) => l == r,
        (Value::Array(l), JsonValue::Array(r)) => {
            l.len() == r.len() && l.iter().zip(r.iter()).all(|(l, r)| eq(l, r))
        }
        (Value::Object(l), JsonValue::Object(r)) => {
            l.len() == r.len()
                && l.iter()
                    .all(|(key, lv)| r.get(key).is_some_and(|rv| eq(lv, rv)))
        }
        _ => false,
    }
}

#[inline]
fn numbers_eq(lhs: &serde_json::Number, rhs: &Number) -> bool {
    if let Some(value) = rhs.as_u64() {
        lhs.as_u64() == Some(value)
    } else if let Some(value) = rhs.as_i64() {
        lhs.as_i64() == Some(value)
    } else {
        lhs.as_f64() == Some(rhs.as_f64())
    }
}

impl PartialEq<Value> for JsonValue {
    fn eq(&self, other: &Value) -> bool {
        eq(other, self)
    }
}

impl PartialEq<JsonValue> for Value {
    fn eq(&self, other: &JsonValue) -> bool {
        eq(self, other)
    }
}
