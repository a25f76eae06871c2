use std::io;
use std::num::ParseIntError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServerError {
    #[error("Configuration error: {0}")]
    Configuration(String),
    #[error("Bind error on port {port}: {source}")]
    Bind {
        port: u16,
        #[source]
        source: io::Error,
    },
}

impl From<ParseIntError> for ServerError {
    fn from(err: ParseIntError) -> Self {
        ServerError::Configuration(err.to_string())
    }
}
