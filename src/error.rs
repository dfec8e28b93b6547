use thiserror::Error;

#[derive(Error, Debug)]
pub enum GatewayError {
    #[error("Precondition failed: {0}")]
    Precondition(String),
    #[error("Transport error: {0}")]
    Transport(#[source] Box<dyn std::error::Error + Send + Sync>),
    #[error("Malformed response: expected at least 5 fields, got {fields}")]
    MalformedResponse { fields: usize },
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl GatewayError {
    pub fn precondition(message: impl Into<String>) -> Self {
        Self::Precondition(message.into())
    }
}

impl From<reqwest::Error> for GatewayError {
    fn from(err: reqwest::Error) -> Self {
        Self::Transport(Box::new(err))
    }
}

pub type Result<T> = std::result::Result<T, GatewayError>;
