//! Setup failures. None of them reach the user; they end up in the log.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum GlueError {
    #[error("Missing element: {0}")]
    MissingElement(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Config error: {0}")]
    Config(String),

    #[error("DOM error: {0}")]
    Dom(String),
}

