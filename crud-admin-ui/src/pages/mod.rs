pub mod live_users;

pub use live_users::LiveUsers;
