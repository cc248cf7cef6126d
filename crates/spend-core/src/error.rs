use spend_domain::UserId;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("Data integrity error: {0}")]
    DataIntegrity(String),
    #[error("User not found: {0}")]
    UserNotFound(UserId),
    #[error("Data source error: {0}")]
    Source(String),
    #[error("Invalid filter: {0}")]
    InvalidFilter(String),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serde(String),
}
