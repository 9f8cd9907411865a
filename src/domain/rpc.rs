//! JSON-RPC 2.0 wire model: request builder, parameters and response envelope

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::shared::error::{ClientError, ClientResult};

/// Protocol version sent with every request
pub const JSONRPC_VERSION: &str = "2.0";

/// Identifier of every request; calls are sequential so it never correlates
pub const REQUEST_ID: u64 = 1;

/// A single positional parameter
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RpcParam {
    Int(i64),
    Str(String),
    /// Nested array, for methods taking a list as one argument
    List(Vec<RpcParam>),
}

impl From<&str> for RpcParam {
    fn from(value: &str) -> Self {
        RpcParam::Str(value.to_string())
    }
}

impl From<String> for RpcParam {
    fn from(value: String) -> Self {
        RpcParam::Str(value)
    }
}

impl From<&String> for RpcParam {
    fn from(value: &String) -> Self {
        RpcParam::Str(value.clone())
    }
}

impl From<i64> for RpcParam {
    fn from(value: i64) -> Self {
        RpcParam::Int(value)
    }
}

impl From<i32> for RpcParam {
    fn from(value: i32) -> Self {
        RpcParam::Int(i64::from(value))
    }
}

impl From<u32> for RpcParam {
    fn from(value: u32) -> Self {
        RpcParam::Int(i64::from(value))
    }
}

impl<T: Into<RpcParam>> From<Vec<T>> for RpcParam {
    fn from(values: Vec<T>) -> Self {
        RpcParam::List(values.into_iter().map(Into::into).collect())
    }
}

/// JSON-RPC request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RpcRequest {
    /// JSON-RPC version
    pub jsonrpc: String,

    /// Remote method name
    pub method: String,

    /// Ordered positional parameters
    pub params: Vec<RpcParam>,

    /// Request ID
    pub id: u64,
}

impl RpcRequest {
    /// Build a request for `method` with `params` in order.
    ///
    /// The method name is not checked against any known set; only an empty
    /// name is refused.
    pub fn new<I, P>(method: &str, params: I) -> ClientResult<Self>
    where
        I: IntoIterator<Item = P>,
        P: Into<RpcParam>,
    {
        if method.is_empty() {
            return Err(ClientError::Validation(
                "Method name cannot be empty".to_string(),
            ));
        }

        Ok(Self {
            jsonrpc: JSONRPC_VERSION.to_string(),
            method: method.to_string(),
            params: params.into_iter().map(Into::into).collect(),
            id: REQUEST_ID,
        })
    }

    /// Request without parameters
    pub fn without_params(method: &str) -> ClientResult<Self> {
        Self::new(method, Vec::<RpcParam>::new())
    }

    /// Append one more positional parameter
    pub fn with_param(mut self, param: impl Into<RpcParam>) -> Self {
        self.params.push(param.into());
        self
    }
}

/// JSON-RPC error object
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RpcError {
    /// Error code
    pub code: i64,

    /// Error message
    pub message: String,

    /// Additional error data
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
}

impl RpcError {
    pub fn new(code: i64, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            data: None,
        }
    }
}

/// JSON-RPC response envelope
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RpcResponse {
    /// JSON-RPC version
    #[serde(default)]
    pub jsonrpc: String,

    /// Result (for successful responses)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result: Option<Value>,

    /// Error (for error responses)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<RpcError>,

    /// Echoed request ID
    #[serde(default)]
    pub id: Option<Value>,
}

impl RpcResponse {
    /// Create a successful response
    pub fn success(result: Value, id: u64) -> Self {
        Self {
            jsonrpc: JSONRPC_VERSION.to_string(),
            result: Some(result),
            error: None,
            id: Some(Value::from(id)),
        }
    }

    /// Create an error response
    pub fn error(error: RpcError, id: u64) -> Self {
        Self {
            jsonrpc: JSONRPC_VERSION.to_string(),
            result: None,
            error: Some(error),
            id: Some(Value::from(id)),
        }
    }

    /// Split the envelope into its payload or the error it carries.
    ///
    /// Exactly one of `result` and `error` must be present.
    pub fn into_result(self) -> ClientResult<Value> {
        match (self.result, self.error) {
            (None, Some(error)) => Err(ClientError::remote(error.code, error.message)),
            (Some(result), None) => Ok(result),
            (Some(_), Some(_)) => Err(ClientError::Decode(
                "Response carries both a result and an error".to_string(),
            )),
            (None, None) => Err(ClientError::Decode(
                "Response carries neither a result nor an error".to_string(),
            )),
        }
    }
}
