pub mod channel_log;
pub mod connection_status;
pub mod empty_users;
pub mod sidebar;
pub mod user_table;
