//! essences: one `(experience, level)` row per member.

use rusqlite::{params, Connection, OptionalExtension};

use sarica_core::errors::StorageError;

use crate::to_storage_err;

/// A stored essence row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EssenceRow {
    pub experience: i64,
    pub level: u32,
}

pub fn get_essence_row(conn: &Connection, member: i64) -> Result<Option<EssenceRow>, StorageError> {
    let mut stmt = conn
        .prepare_cached("SELECT experience, level FROM essences WHERE member_id = ?1")
        .map_err(to_storage_err)?;

    stmt.query_row(params![member], |row| {
        Ok(EssenceRow {
            experience: row.get(0)?,
            level: row.get(1)?,
        })
    })
    .optional()
    .map_err(to_storage_err)
}

pub fn upsert_essence_row(conn: &Connection, member: i64, row: EssenceRow) -> Result<(), StorageError> {
    conn.prepare_cached(
        "INSERT INTO essences (member_id, experience, level) VALUES (?1, ?2, ?3)
         ON CONFLICT(member_id) DO UPDATE SET
            experience = excluded.experience,
            level = excluded.level",
    )
    .and_then(|mut stmt| stmt.execute(params![member, row.experience, row.level]))
    .map_err(to_storage_err)?;
    Ok(())
}

pub fn count_members(conn: &Connection) -> Result<i64, StorageError> {
    conn.query_row("SELECT COUNT(*) FROM essences", [], |row| row.get(0))
        .map_err(to_storage_err)
}
