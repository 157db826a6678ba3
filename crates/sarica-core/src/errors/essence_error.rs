//! Domain errors raised by the progression engine and class ledger.

use super::error_code::{self, SaricaErrorCode};

/// Errors for domain-invalid input.
#[derive(Debug, thiserror::Error)]
pub enum EssenceError {
    #[error("unknown category: {name}")]
    UnknownCategory { name: String },

    #[error("unknown alignment: {name}")]
    UnknownAlignment { name: String },
}

impl SaricaErrorCode for EssenceError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::UnknownCategory { .. } => error_code::UNKNOWN_CATEGORY,
            Self::UnknownAlignment { .. } => error_code::UNKNOWN_ALIGNMENT,
        }
    }
}
