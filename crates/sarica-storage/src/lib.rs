//! # sarica-storage
//!
//! SQLite persistence for member essences.
//! One serialized writer, a read pool for file-backed databases, a
//! single-version schema gate, and the load → award → save service.

pub mod connection;
pub mod engine;
pub mod migrations;
pub mod queries;
pub mod service;

pub use connection::DatabaseManager;
pub use engine::StorageEngine;
pub use queries::settings::ChapterUpdate;
pub use service::ProgressionService;

use sarica_core::errors::StorageError;

/// Wrap a rusqlite (or any displayable) failure as a storage error.
pub(crate) fn to_storage_err(message: impl std::fmt::Display) -> StorageError {
    StorageError::Sqlite {
        message: message.to_string(),
    }
}

/// Member ids are 64-bit snowflakes; SQLite integers are signed. The bit
/// pattern is stored as-is so every id round-trips.
pub(crate) fn member_key(member_id: u64) -> i64 {
    member_id as i64
}
