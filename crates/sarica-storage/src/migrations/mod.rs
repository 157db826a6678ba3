//! Schema gate on `PRAGMA user_version`.
//!
//! 0 means a fresh database: create the current schema and stamp it.
//! The current version proceeds. Anything else is fatal; there is no
//! automatic migration between versions.

pub mod v001_initial;

use rusqlite::Connection;

use sarica_core::constants::SCHEMA_VERSION;
use sarica_core::errors::StorageError;

use crate::to_storage_err;

/// Initialize a fresh database or verify an existing one.
pub fn run_migrations(conn: &Connection) -> Result<(), StorageError> {
    let found = current_version(conn)?;

    if found == SCHEMA_VERSION {
        tracing::debug!(version = found, "schema up to date");
        return Ok(());
    }

    if found != 0 {
        tracing::error!(found, expected = SCHEMA_VERSION, "unknown schema version");
        return Err(StorageError::SchemaMismatch {
            found,
            expected: SCHEMA_VERSION,
        });
    }

    conn.execute_batch(v001_initial::MIGRATION_SQL)
        .map_err(|e| StorageError::MigrationFailed {
            version: SCHEMA_VERSION,
            message: e.to_string(),
        })?;
    conn.pragma_update(None, "user_version", SCHEMA_VERSION)
        .map_err(|e| StorageError::MigrationFailed {
            version: SCHEMA_VERSION,
            message: e.to_string(),
        })?;
    tracing::info!(version = SCHEMA_VERSION, "initialized schema");

    Ok(())
}

/// Get the current schema version.
pub fn current_version(conn: &Connection) -> Result<u32, StorageError> {
    conn.pragma_query_value(None, "user_version", |row| row.get(0))
        .map_err(to_storage_err)
}
