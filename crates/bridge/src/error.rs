use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BridgeError {
    #[error("Missing argument: {0}")]
    MissingArgument(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("{0}")]
    Unavailable(String),

    #[error("Not implemented: {0}")]
    NotImplemented(String),
}

impl BridgeError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            BridgeError::MissingArgument(_) => ErrorKind::MissingArgument,
            BridgeError::NotFound(_) => ErrorKind::NotFound,
            BridgeError::Unavailable(_) => ErrorKind::Unavailable,
            BridgeError::NotImplemented(_) => ErrorKind::NotImplemented,
        }
    }
}

/// Wire-level error classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorKind {
    MissingArgument,
    NotFound,
    Unavailable,
    NotImplemented,
}
