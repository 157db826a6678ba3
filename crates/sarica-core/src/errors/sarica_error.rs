//! Top-level error aggregating every subsystem error.

use super::error_code::SaricaErrorCode;
use super::{ConfigError, EssenceError, StorageError};

/// Any error the Sarica crates can surface to an adapter.
#[derive(Debug, thiserror::Error)]
pub enum SaricaError {
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("Essence error: {0}")]
    Essence(#[from] EssenceError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

impl SaricaErrorCode for SaricaError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Storage(e) => e.error_code(),
            Self::Essence(e) => e.error_code(),
            Self::Config(e) => e.error_code(),
        }
    }
}

pub type SaricaResult<T> = Result<T, SaricaError>;
