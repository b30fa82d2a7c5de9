use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("sqlite error: {0}")]
    Sql(#[from] rusqlite::Error),
    #[error("missing home directory")]
    MissingHomeDir,
    #[error("invalid id string: {0}")]
    InvalidId(String),
    #[error("migration error: {0}")]
    Migration(String),
    #[error("invalid data path: {0}")]
    InvalidDataPath(PathBuf),
}

pub type Result<T> = std::result::Result<T, StoreError>;
