use crate::api::{SERVER_RESPONSE, ServerResponse, USER_RESPONSE, UserResponse};
use crate::error::ProtocolError;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

/// A single text frame on the channel: `{"event": ..., "data": ...}`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Envelope {
    pub event: String,
    #[serde(default)]
    pub data: Value,
}

/// Events the server pushes on the user refresh namespace.
#[derive(Debug, Clone, PartialEq)]
pub enum InboundEvent {
    ServerResponse(ServerResponse),
    UserResponse(UserResponse),
}

/// Parse a text frame. Payload validation of `user_response` is deferred to
/// [`UserResponse::records`] so a bad list can be reported on its own.
pub fn decode_inbound(frame: &str) -> Result<InboundEvent, ProtocolError> {
    let envelope: Envelope = serde_json::from_str(frame)
        .map_err(|e| ProtocolError::MalformedEnvelope(e.to_string()))?;

    debug!("Inbound event '{}'", envelope.event);

    match envelope.event.as_str() {
        SERVER_RESPONSE => ServerResponse::from_value(envelope.data).map(InboundEvent::ServerResponse),
        USER_RESPONSE => serde_json::from_value::<UserResponse>(envelope.data)
            .map(InboundEvent::UserResponse)
            .map_err(|e| ProtocolError::malformed(USER_RESPONSE, e.to_string())),
        _ => Err(ProtocolError::UnknownEvent(envelope.event)),
    }
}

/// Serialize an outbound event into a text frame.
pub fn encode_outbound<T: Serialize>(event: &str, payload: &T) -> Result<String, ProtocolError> {
    let data =
        serde_json::to_value(payload).map_err(|e| ProtocolError::SerializationError(e.to_string()))?;
    let envelope = Envelope {
        event: event.to_string(),
        data,
    };
    serde_json::to_string(&envelope).map_err(|e| ProtocolError::SerializationError(e.to_string()))
}
