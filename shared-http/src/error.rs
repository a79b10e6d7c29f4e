use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ProtocolError {
    #[error("Malformed envelope: {0}")]
    MalformedEnvelope(String),

    #[error("Malformed payload for '{event}': {reason}")]
    MalformedPayload { event: &'static str, reason: String },

    #[error("Unknown event '{0}'")]
    UnknownEvent(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl ProtocolError {
    pub fn malformed(event: &'static str, reason: impl Into<String>) -> Self {
        ProtocolError::MalformedPayload {
            event,
            reason: reason.into(),
        }
    }
}

impl From<ProtocolError> for crud::Error {
    fn from(err: ProtocolError) -> Self {
        crud::Error::MalformedPayload(err.to_string())
    }
}
