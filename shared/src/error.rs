use thiserror::Error;
use validator::ValidationErrors;

#[derive(Debug, Error)]
pub enum WheelError {
    #[error("Invalid prize configuration: {0}")]
    InvalidConfig(#[from] ValidationErrors),
    #[error("Malformed prize configuration: {0}")]
    MalformedConfig(#[from] serde_json::Error),
    #[error("Secure random source unavailable: {0}")]
    Randomness(String),
    #[error("Drawing surface unavailable: {0}")]
    Surface(String),
}
