use std::io;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Error)]
pub enum AopError {
    #[error("Configuration error: {0}")]
    Config(String),
    #[error("File System error: {0}")]
    Io(String),
    #[error("Item Not Found: {0}")]
    NotFound(String),
    #[error("Table parse error: {0}")]
    Parse(String),
    #[error("Validation error: {0}")]
    Validation(String),
}

impl From<io::Error> for AopError {
    fn from(x: io::Error) -> Self {
        match x.kind() {
            io::ErrorKind::NotFound => AopError::NotFound(format!("{x}")),
            _ => AopError::Io(format!("IOError: {}", x.kind())),
        }
    }
}

impl From<toml::de::Error> for AopError {
    fn from(src: toml::de::Error) -> AopError {
        AopError::Parse(format!("Toml deserialization error: {src}"))
    }
}
