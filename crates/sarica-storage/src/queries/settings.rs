//! settings: string key/value pairs owned by adapters (e.g. the feed poller).

use rusqlite::{params, Connection, OptionalExtension};

use sarica_core::errors::StorageError;

use crate::to_storage_err;

/// Key holding the id of the newest published chapter seen so far.
pub const LATEST_CHAPTER_KEY: &str = "latest_chapter_id";

/// Result of recording the newest chapter id reported by the feed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChapterUpdate {
    /// Nothing was recorded yet. The id is stored but not announced.
    First,
    /// Same chapter as last time.
    Unchanged,
    /// A new chapter; announce it.
    New { previous: String },
}

impl ChapterUpdate {
    pub fn should_announce(&self) -> bool {
        matches!(self, Self::New { .. })
    }
}

pub fn get_setting(conn: &Connection, key: &str) -> Result<Option<String>, StorageError> {
    conn.prepare_cached("SELECT value FROM settings WHERE key = ?1")
        .and_then(|mut stmt| {
            stmt.query_row(params![key], |row| row.get(0))
                .optional()
        })
        .map_err(to_storage_err)
}

pub fn set_setting(conn: &Connection, key: &str, value: &str) -> Result<(), StorageError> {
    conn.prepare_cached(
        "INSERT INTO settings (key, value) VALUES (?1, ?2)
         ON CONFLICT(key) DO UPDATE SET value = excluded.value",
    )
    .and_then(|mut stmt| stmt.execute(params![key, value]))
    .map_err(to_storage_err)?;
    Ok(())
}

/// Compare-and-store the latest chapter id. Run inside a transaction.
pub fn record_latest_chapter(conn: &Connection, chapter_id: &str) -> Result<ChapterUpdate, StorageError> {
    let update = match get_setting(conn, LATEST_CHAPTER_KEY)? {
        None => ChapterUpdate::First,
        Some(previous) if previous == chapter_id => return Ok(ChapterUpdate::Unchanged),
        Some(previous) => ChapterUpdate::New { previous },
    };
    set_setting(conn, LATEST_CHAPTER_KEY, chapter_id)?;
    Ok(update)
}
