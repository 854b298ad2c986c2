//! Conversions from `serde_json::Value` into the integer/string model

use serde_json::Value as JsonValue;

use crate::error::{Error, Result};
use crate::value::{Object, Value};

fn kind(v: &JsonValue) -> &'static str {
    match v {
        JsonValue::Null => "null",
        JsonValue::Bool(_) => "boolean",
        JsonValue::Number(_) => "number",
        JsonValue::String(_) => "string",
        JsonValue::Array(_) => "array",
        JsonValue::Object(_) => "object",
    }
}

impl<'a> TryFrom<&'a JsonValue> for Value {
    type Error = Error;

    fn try_from(v: &'a JsonValue) -> Result<Self> {
        match v {
            JsonValue::String(s) => Ok(Value::String(s.clone())),
            JsonValue::Number(n) => n
                .as_i64()
                .map(Value::Integer)
                .ok_or_else(|| Error::Unsupported(format!("number {} is not an i64", n))),
            other => Err(Error::Unsupported(kind(other).to_string())),
        }
    }
}

impl<'a> TryFrom<&'a JsonValue> for Object {
    type Error = Error;

    fn try_from(v: &'a JsonValue) -> Result<Self> {
        let map = match v {
            JsonValue::Object(map) => map,
            other => {
                return Err(Error::Unsupported(format!(
                    "expected object, found {}",
                    kind(other)
                )));
            }
        };
        let mut obj = Object::with_capacity(map.len());
        for (k, vv) in map {
            if k.is_empty() {
                return Err(Error::Unsupported("empty key".to_string()));
            }
            let value = Value::try_from(vv)
                .map_err(|e| Error::Unsupported(format!("member \"{}\": {}", k, e)))?;
            obj.put(k.clone(), value);
        }
        Ok(obj)
    }
}
