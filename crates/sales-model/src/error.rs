use thiserror::Error;

#[derive(Debug, Error)]
pub enum SalesError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid cleaning options: {0}")]
    Options(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, SalesError>;
