use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("invalid book code: {0:?}")]
    InvalidBookCode(String),
    #[error("invalid verse reference: {0:?}")]
    InvalidReference(String),
}

pub type Result<T> = std::result::Result<T, ModelError>;
