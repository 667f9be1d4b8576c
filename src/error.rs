use std::io;

use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ConfigError {
    #[error("Allowed origin `{0}` must be a bare http(s) origin, e.g. http://localhost:3000")]
    InvalidOrigin(String),
    #[error("CORS max age must be greater than zero")]
    InvalidMaxAge,
    #[error("HTTP worker count must be greater than zero")]
    InvalidWorkers,
}

impl From<ConfigError> for io::Error {
    fn from(error: ConfigError) -> Self {
        io::Error::new(io::ErrorKind::InvalidInput, error)
    }
}
