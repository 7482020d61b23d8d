use thiserror::Error;

/// Engine-internal failures.
///
/// These are the only conditions allowed to propagate out of `dispatch`;
/// everything raised by an algorithm body is captured into the execution
/// record instead (see `engine::executor`).
#[derive(Error, Debug)]
pub enum ForgeError {
    #[error("Failed to sample process memory: {0}")]
    MemorySample(String),

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerdeError(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ForgeError>;
