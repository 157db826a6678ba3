//! class_points: lifetime points per `(member, category)`.

use rusqlite::{params, Connection};

use sarica_core::errors::StorageError;

use crate::to_storage_err;

/// Raw `(category_id, points)` pairs for a member, ascending by category id.
pub fn load_class_points(conn: &Connection, member: i64) -> Result<Vec<(i64, i64)>, StorageError> {
    let mut stmt = conn
        .prepare_cached(
            "SELECT category, points FROM class_points
             WHERE member_id = ?1
             ORDER BY category ASC",
        )
        .map_err(to_storage_err)?;

    let rows = stmt
        .query_map(params![member], |row| Ok((row.get(0)?, row.get(1)?)))
        .map_err(to_storage_err)?;

    let mut result = Vec::new();
    for row in rows {
        result.push(row.map_err(to_storage_err)?);
    }
    Ok(result)
}

pub fn upsert_class_points(
    conn: &Connection,
    member: i64,
    category: i64,
    points: i64,
) -> Result<(), StorageError> {
    conn.prepare_cached(
        "INSERT INTO class_points (member_id, category, points) VALUES (?1, ?2, ?3)
         ON CONFLICT(member_id, category) DO UPDATE SET points = excluded.points",
    )
    .and_then(|mut stmt| stmt.execute(params![member, category, points]))
    .map_err(to_storage_err)?;
    Ok(())
}
