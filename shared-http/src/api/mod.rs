pub mod events;
pub mod requests;
pub mod responses;

pub use events::{InboundEvent, decode_inbound, encode_outbound};
pub use requests::{ConnectEvent, DeleteUserForm};
pub use responses::{ServerResponse, UserResponse};

/// Sent once by the client on every successful connect.
pub const CONNECT_EVENT: &str = "connect_event";
/// Acknowledgment text pushed by the server.
pub const SERVER_RESPONSE: &str = "server_response";
/// Full user list pushed by the server.
pub const USER_RESPONSE: &str = "user_response";
