use serde::{Deserialize, Serialize};
use std::fmt;

/// Primary key of a user row on the server.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(transparent)]
pub struct UserId(pub i64);

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A user as pushed by the server. Extra fields are ignored, missing or
/// mistyped ones make the whole list invalid.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserRecord {
    pub id: UserId,
    pub username: String,
    pub email: String,
    /// `true` for administrators.
    pub role: bool,
    /// `true` while the account is active.
    pub status: bool,
}

impl UserRecord {
    pub fn new(
        id: i64,
        username: impl Into<String>,
        email: impl Into<String>,
        role: bool,
        status: bool,
    ) -> Self {
        Self {
            id: UserId(id),
            username: username.into(),
            email: email.into(),
            role,
            status,
        }
    }

    pub fn is_admin(&self) -> bool {
        self.role
    }

    pub fn is_active(&self) -> bool {
        self.status
    }
}
