use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("Invalid page location: {0}")]
    InvalidLocation(String),

    #[error("Malformed payload: {0}")]
    MalformedPayload(String),

    #[error("Connection lost: {0}")]
    ConnectionLost(String),
}

impl From<url::ParseError> for Error {
    fn from(err: url::ParseError) -> Self {
        Error::InvalidLocation(err.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::MalformedPayload(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
