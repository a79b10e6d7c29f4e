// crud/src/lib.rs

pub mod backoff;
pub mod config;
pub mod connection;
pub mod domain;
pub mod error;
pub mod labels;
pub mod layout;
pub mod location;
pub mod log;
pub mod navigation;
pub mod table;

pub use backoff::Backoff;
pub use config::Config;
pub use connection::ConnectionState;
pub use domain::{UserId, UserRecord};
pub use error::{Error, Result};
pub use labels::Locale;
pub use layout::OffcanvasState;
pub use location::PageLocation;
pub use log::ChannelLog;
pub use navigation::NavLink;
pub use table::UserRow;

/// Namespace the live user list is published on.
pub const USER_REFRESH_NAMESPACE: &str = "/websocket/user_refresh";
