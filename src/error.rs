// src/error.rs
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CounterError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid state file {path}: {source}")]
    StateDecode {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("Failed to encode state: {0}")]
    StateEncode(#[from] toml::ser::Error),
}
