//! Error types for Carton

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CartonError {
    #[error("Missing value: {0}")]
    Empty(String),

    #[error("Rejected value: {0}")]
    Rejected(String),
}

pub type Result<T> = std::result::Result<T, CartonError>;
