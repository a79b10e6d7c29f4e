use crate::api::{SERVER_RESPONSE, USER_RESPONSE};
use crate::error::ProtocolError;
use crud::UserRecord;
use serde::Deserialize;
use serde_json::Value;

/// Payload of `server_response`.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct ServerResponse {
    pub data: String,
}

/// Payload of `user_response`. Only `data[0]` is meaningful; it holds the
/// user list either as a JSON array or as the serialized text of one.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct UserResponse {
    pub data: Vec<Value>,
}

impl UserResponse {
    /// Decode and validate the user list. Nothing in the payload is evaluated.
    pub fn records(&self) -> Result<Vec<UserRecord>, ProtocolError> {
        let first = self
            .data
            .first()
            .ok_or_else(|| ProtocolError::malformed(USER_RESPONSE, "data is empty"))?;

        let parsed = match first {
            Value::String(text) => serde_json::from_str::<Vec<UserRecord>>(text),
            Value::Array(_) => serde_json::from_value::<Vec<UserRecord>>(first.clone()),
            other => {
                return Err(ProtocolError::malformed(
                    USER_RESPONSE,
                    format!("expected a list of users, got {}", kind_of(other)),
                ));
            }
        };

        parsed.map_err(|e| ProtocolError::malformed(USER_RESPONSE, e.to_string()))
    }
}

impl ServerResponse {
    pub fn from_value(value: Value) -> Result<Self, ProtocolError> {
        serde_json::from_value(value)
            .map_err(|e| ProtocolError::malformed(SERVER_RESPONSE, e.to_string()))
    }
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
