//! Numeric normalization for fields the node sends as either integers or
//! numeric strings.
//!
//! Only fields that opt in through `deserialize_with` are coerced. Any other
//! JSON type in such a field is a decode error.

use std::fmt;

use serde::de::{self, Deserializer, SeqAccess, Visitor};
use serde::Deserialize;
use serde_json::Value;

use crate::shared::error::{ClientError, ClientResult};

struct IntOrStringVisitor;

impl<'de> Visitor<'de> for IntOrStringVisitor {
    type Value = i64;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("an integer or a numeric string")
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<i64, E> {
        Ok(v)
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<i64, E> {
        i64::try_from(v).map_err(|_| E::invalid_value(de::Unexpected::Unsigned(v), &self))
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<i64, E> {
        v.parse::<i64>()
            .map_err(|_| E::invalid_value(de::Unexpected::Str(v), &self))
    }
}

/// Integer that arrives either as a JSON number or as a numeric string
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Numeric(pub i64);

impl<'de> Deserialize<'de> for Numeric {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(IntOrStringVisitor).map(Numeric)
    }
}

/// `deserialize_with` target for a single coerced integer field
pub fn int_or_string<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    deserializer.deserialize_any(IntOrStringVisitor)
}

/// `deserialize_with` target for an array mixing integers and numeric strings
pub fn vec_int_or_string<'de, D>(deserializer: D) -> Result<Vec<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    struct SeqVisitor;

    impl<'de> Visitor<'de> for SeqVisitor {
        type Value = Vec<i64>;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("an array of integers or numeric strings")
        }

        fn visit_seq<A>(self, mut seq: A) -> Result<Vec<i64>, A::Error>
        where
            A: SeqAccess<'de>,
        {
            let mut out = Vec::with_capacity(seq.size_hint().unwrap_or(0));
            while let Some(Numeric(value)) = seq.next_element()? {
                out.push(value);
            }
            Ok(out)
        }
    }

    deserializer.deserialize_seq(SeqVisitor)
}

/// Coerce an untyped result payload into an integer
pub fn integer_from_value(value: &Value) -> ClientResult<i64> {
    match value {
        Value::Number(number) => number.as_i64().ok_or_else(|| {
            ClientError::Decode(format!("Result {} is not an integer", number))
        }),
        Value::String(text) => text
            .parse::<i64>()
            .map_err(|_| ClientError::Decode(format!("Result \"{}\" is not numeric", text))),
        other => Err(ClientError::Decode(format!(
            "Expected an integer result, got {}",
            json_type_name(other)
        ))),
    }
}

/// Parse a reputation score sent as a decimal string
pub fn parse_reputation(raw: &str) -> ClientResult<i64> {
    raw.parse::<i64>()
        .map_err(|_| ClientError::Decode(format!("reputation not numeric: \"{}\"", raw)))
}

pub(crate) fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
