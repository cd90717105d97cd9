//! Result type returned by every API operation.

use crate::error::RequestError;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Error payload, serialized as `{"error": "..."}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiError {
    pub error: String,
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.error)
    }
}

impl std::error::Error for ApiError {}

/// Outcome of one API call: the JSON body as returned, or an error payload.
///
/// Operations never fail with `Err`; callers inspect the variant.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ApiResponse {
    Success(Value),
    Error(ApiError),
}

impl ApiResponse {
    /// Creates an error response from a message.
    pub fn error(message: impl Into<String>) -> Self {
        ApiResponse::Error(ApiError { error: message.into() })
    }

    pub fn is_success(&self) -> bool {
        matches!(self, ApiResponse::Success(_))
    }

    pub fn is_error(&self) -> bool {
        matches!(self, ApiResponse::Error(_))
    }

    /// Returns the error message, if this is an error.
    pub fn error_message(&self) -> Option<&str> {
        match self {
            ApiResponse::Error(e) => Some(&e.error),
            ApiResponse::Success(_) => None,
        }
    }

    /// Returns the JSON body, if this is a success.
    pub fn body(&self) -> Option<&Value> {
        match self {
            ApiResponse::Success(v) => Some(v),
            ApiResponse::Error(_) => None,
        }
    }

    /// Converts into a `Result` for callers that prefer `?`.
    pub fn into_result(self) -> Result<Value, ApiError> {
        match self {
            ApiResponse::Success(v) => Ok(v),
            ApiResponse::Error(e) => Err(e),
        }
    }

    /// Renders the response as the JSON value callers see on the wire.
    pub fn to_value(&self) -> Value {
        match self {
            ApiResponse::Success(v) => v.clone(),
            ApiResponse::Error(e) => serde_json::json!({ "error": e.error }),
        }
    }
}

impl From<Result<Value, RequestError>> for ApiResponse {
    fn from(result: Result<Value, RequestError>) -> Self {
        match result {
            Ok(v) => ApiResponse::Success(v),
            Err(e) => ApiResponse::error(e.to_string()),
        }
    }
}
