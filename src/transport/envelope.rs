use serde::Deserialize;
use serde_json::{Map, Value};

use crate::domain::ErrorCode;

#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("invalid JSON response: {0}")]
    Json(#[from] serde_json::Error),

    #[error("response body is not a JSON object")]
    NotAnObject,

    #[error("response object has no errorCode field")]
    MissingErrorCode,

    #[error("errorCode is neither a string nor a number")]
    MalformedErrorCode,
}

/// Scalar field tolerated as either JSON string or JSON number.
///
/// The vendor documents most result fields as strings but has been observed
/// returning bare numbers for ids and counters.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub(crate) enum TransportScalar {
    String(String),
    Number(serde_json::Number),
}

impl TransportScalar {
    pub(crate) fn into_string(self) -> String {
        match self {
            Self::String(value) => value,
            Self::Number(value) => value.to_string(),
        }
    }
}

/// Decoded vendor envelope: verbatim `errorCode`, optional `msg`, and the
/// remaining operation-specific fields.
#[derive(Debug, Clone)]
pub struct Envelope {
    pub error_code: ErrorCode,
    pub msg: Option<String>,
    pub fields: Map<String, Value>,
}

/// Decode the shared response envelope.
///
/// A non-JSON body, a non-object body, and a missing or malformed
/// `errorCode` are all decode failures, kept distinct from vendor business
/// errors (which are valid envelopes with a non-`"0"` code).
pub fn decode_envelope(json: &str) -> Result<Envelope, TransportError> {
    let value: Value = serde_json::from_str(json)?;
    let Value::Object(mut fields) = value else {
        return Err(TransportError::NotAnObject);
    };

    let error_code = match fields.remove(ErrorCode::FIELD) {
        Some(Value::String(code)) => ErrorCode::new(code),
        Some(Value::Number(code)) => ErrorCode::new(code.to_string()),
        Some(_) => return Err(TransportError::MalformedErrorCode),
        None => return Err(TransportError::MissingErrorCode),
    };

    let msg = match fields.remove("msg") {
        Some(Value::String(text)) => Some(text),
        Some(Value::Null) | None => None,
        Some(other) => Some(other.to_string()),
    };

    Ok(Envelope {
        error_code,
        msg,
        fields,
    })
}
