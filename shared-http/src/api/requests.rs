use crud::UserId;
use serde::{Deserialize, Serialize};

/// Greeting carried by `connect_event`.
pub const CONNECT_GREETING: &str = "我已连接上服务端！";

/// Payload of the outbound `connect_event`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ConnectEvent {
    pub data: String,
}

impl ConnectEvent {
    pub fn greeting() -> Self {
        Self {
            data: CONNECT_GREETING.to_string(),
        }
    }
}

/// Form body of the `crud.basic` delete form (fields carry the `delete_user` prefix).
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct DeleteUserForm {
    #[serde(rename = "delete_user-user_id")]
    pub user_id: String,
    #[serde(
        rename = "delete_user-csrf_token",
        skip_serializing_if = "Option::is_none"
    )]
    pub csrf_token: Option<String>,
}

impl DeleteUserForm {
    pub fn new(user_id: UserId, csrf_token: Option<String>) -> Self {
        Self {
            user_id: user_id.to_string(),
            csrf_token,
        }
    }
}
