//! SaricaErrorCode trait for adapter-facing error reporting.

/// Trait for mapping Sarica errors to stable error code strings.
/// Chat adapters surface these codes instead of parsing messages.
pub trait SaricaErrorCode {
    /// Returns the error code string (e.g., "UNKNOWN_CATEGORY").
    fn error_code(&self) -> &'static str;

    /// Returns the formatted error string: `[ERROR_CODE] message`.
    fn coded_string(&self) -> String
    where
        Self: std::fmt::Display,
    {
        format!("[{}] {}", self.error_code(), self)
    }
}

pub const STORAGE_ERROR: &str = "STORAGE_ERROR";
pub const SCHEMA_MISMATCH: &str = "SCHEMA_MISMATCH";
pub const MIGRATION_FAILED: &str = "MIGRATION_FAILED";
pub const CORRUPT_LEDGER: &str = "CORRUPT_LEDGER";
pub const LOCK_POISONED: &str = "LOCK_POISONED";
pub const UNKNOWN_CATEGORY: &str = "UNKNOWN_CATEGORY";
pub const UNKNOWN_ALIGNMENT: &str = "UNKNOWN_ALIGNMENT";
pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
