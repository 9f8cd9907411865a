//! Response decoder: turns an untyped result payload into the shape the
//! calling method expects

use serde_json::Value;

use crate::domain::{
    account::{AccountData, AccountReputation, HistoryEntry},
    coerce,
};
use crate::shared::error::{ClientError, ClientResult};

/// Decoder for the result payloads of the account methods
pub struct ResponseDecoder;

impl ResponseDecoder {
    /// Scalar results (count, bandwidth)
    pub fn decode_integer(result: &Value) -> ClientResult<i64> {
        coerce::integer_from_value(result)
    }

    /// `get_accounts` results, in the order the node returned them
    pub fn decode_accounts(result: Value) -> ClientResult<Vec<AccountData>> {
        let entries = Self::expect_array(result, "accounts")?;

        entries
            .into_iter()
            .enumerate()
            .map(|(index, entry)| {
                serde_json::from_value::<AccountData>(entry).map_err(|e| {
                    ClientError::Decode(format!("Malformed account record #{}: {}", index, e))
                })
            })
            .collect()
    }

    /// First reputation of a `get_account_reputations` result, as an integer
    pub fn decode_reputation(result: Value) -> ClientResult<i64> {
        let entries: Vec<AccountReputation> = serde_json::from_value(result)
            .map_err(|e| ClientError::Decode(format!("Malformed reputation list: {}", e)))?;

        let first = entries
            .first()
            .ok_or_else(|| ClientError::Decode("Reputation list is empty".to_string()))?;

        coerce::parse_reputation(&first.reputation)
    }

    /// History entries stay opaque beyond their `[index, operation]` nesting
    pub fn decode_history(result: Value) -> ClientResult<Vec<HistoryEntry>> {
        serde_json::from_value(result)
            .map_err(|e| ClientError::Decode(format!("Malformed account history: {}", e)))
    }

    fn expect_array(result: Value, what: &str) -> ClientResult<Vec<Value>> {
        match result {
            Value::Array(entries) => Ok(entries),
            other => Err(ClientError::Decode(format!(
                "Expected {} as an array, got {}",
                what,
                coerce::json_type_name(&other)
            ))),
        }
    }
}
