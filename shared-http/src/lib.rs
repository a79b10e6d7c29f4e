pub mod api;
pub mod error;
pub mod live;

pub use error::ProtocolError;
pub use live::{Applied, LiveModel, greet};
