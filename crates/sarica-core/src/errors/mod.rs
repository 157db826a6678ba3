//! Error handling for Sarica.
//! One error enum per subsystem, `thiserror` only.

pub mod config_error;
pub mod error_code;
pub mod essence_error;
pub mod sarica_error;
pub mod storage_error;

pub use config_error::ConfigError;
pub use error_code::SaricaErrorCode;
pub use essence_error::EssenceError;
pub use sarica_error::{SaricaError, SaricaResult};
pub use storage_error::StorageError;
