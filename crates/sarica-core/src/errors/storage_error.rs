//! Storage-layer errors for SQLite operations.

use super::error_code::{self, SaricaErrorCode};

/// Errors raised by the persistence adapter.
///
/// `SchemaMismatch` and a failure to open the database are fatal at startup.
/// Everything else propagates to the caller unchanged.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("SQLite error: {message}")]
    Sqlite { message: String },

    #[error("I/O error at {path}: {message}")]
    Io { path: String, message: String },

    #[error("unknown schema version {found} (expected {expected}); refusing to start")]
    SchemaMismatch { found: u32, expected: u32 },

    #[error("migration failed at version {version}: {message}")]
    MigrationFailed { version: u32, message: String },

    #[error("ledger cannot be reconstructed: {details}")]
    CorruptLedger { details: String },

    #[error("{what} lock poisoned")]
    LockPoisoned { what: &'static str },
}

impl StorageError {
    /// True for conditions the process must not start (or keep running) under.
    pub fn is_fatal(&self) -> bool {
        matches!(self, Self::SchemaMismatch { .. } | Self::MigrationFailed { .. })
    }
}

impl SaricaErrorCode for StorageError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Sqlite { .. } | Self::Io { .. } => error_code::STORAGE_ERROR,
            Self::SchemaMismatch { .. } => error_code::SCHEMA_MISMATCH,
            Self::MigrationFailed { .. } => error_code::MIGRATION_FAILED,
            Self::CorruptLedger { .. } => error_code::CORRUPT_LEDGER,
            Self::LockPoisoned { .. } => error_code::LOCK_POISONED,
        }
    }
}
