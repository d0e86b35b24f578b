#[derive(Debug, thiserror::Error)]
pub enum CmcError {
    #[error("HTTP error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("JSON decode error: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("HTML extraction error: {0}")]
    Extraction(String),

    #[error("Unexpected response shape: {0}")]
    ResponseShape(String),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Background task failed: {0}")]
    Task(String),
}

pub type Result<T> = std::result::Result<T, CmcError>;
