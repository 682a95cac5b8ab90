//! Conversions to and from `serde_json::Value`.

use crate::error::ValueError;
use crate::value::{JArray, JNumber, JObject, JString, Value};

/// Integral values below this magnitude convert to `serde_json` integers.
const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_991.0;

impl From<Value> for serde_json::Value {
    fn from(v: Value) -> Self {
        serde_json::Value::from(&v)
    }
}

impl From<&Value> for serde_json::Value {
    fn from(v: &Value) -> Self {
        match v {
            Value::Null => serde_json::Value::Null,
            Value::Boolean(b) => serde_json::Value::Bool(*b),
            Value::Number(n) => number_to_json(*n),
            Value::String(s) => serde_json::Value::String(s.unescaped()),
            Value::Array(arr) => {
                serde_json::Value::Array(arr.iter().map(serde_json::Value::from).collect())
            }
            Value::Object(obj) => serde_json::Value::Object(
                obj.iter()
                    .map(|(k, v)| (k.to_owned(), serde_json::Value::from(v)))
                    .collect(),
            ),
        }
    }
}

fn number_to_json(n: JNumber) -> serde_json::Value {
    let x = n.value();
    if n.is_integral() && x.abs() <= MAX_SAFE_INTEGER {
        serde_json::Value::from(x as i64)
    } else {
        // Finite by construction, so `from_f64` always succeeds.
        serde_json::Number::from_f64(x).map_or(serde_json::Value::Null, serde_json::Value::Number)
    }
}

impl TryFrom<serde_json::Value> for Value {
    type Error = ValueError;

    fn try_from(v: serde_json::Value) -> Result<Self, Self::Error> {
        Ok(match v {
            serde_json::Value::Null => Value::NULL,
            serde_json::Value::Bool(b) => Value::from(b),
            serde_json::Value::Number(n) => {
                let x = n
                    .as_f64()
                    .ok_or_else(|| ValueError::UnrepresentableNumber(n.to_string()))?;
                Value::Number(JNumber::new(x)?)
            }
            serde_json::Value::String(s) => Value::String(JString::from_raw(&s)),
            serde_json::Value::Array(arr) => Value::Array(
                arr.into_iter()
                    .map(Value::try_from)
                    .collect::<Result<JArray, _>>()?,
            ),
            serde_json::Value::Object(obj) => Value::Object(
                obj.into_iter()
                    .map(|(k, v)| Value::try_from(v).map(|v| (k, v)))
                    .collect::<Result<JObject, _>>()?,
            ),
        })
    }
}
