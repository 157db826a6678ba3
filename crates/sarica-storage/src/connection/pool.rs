//! Read-only connections shared by essence loads and settings lookups.

use std::path::Path;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Mutex, MutexGuard, TryLockError};

use rusqlite::{Connection, OpenFlags};

use sarica_core::config::defaults::MAX_READ_POOL_SIZE;
use sarica_core::errors::StorageError;

use super::pragmas::apply_read_pragmas;
use crate::to_storage_err;

const READER_FLAGS: OpenFlags =
    OpenFlags::SQLITE_OPEN_READ_ONLY.union(OpenFlags::SQLITE_OPEN_NO_MUTEX);

/// Fixed set of `query_only` readers over one database file.
///
/// A caller takes the first idle reader it finds, starting from a rotating
/// offset; when every reader is busy it waits on the one at that offset.
pub struct ReadPool {
    readers: Vec<Mutex<Connection>>,
    cursor: AtomicUsize,
}

impl ReadPool {
    /// Open `size` readers (clamped to `1..=MAX_READ_POOL_SIZE`).
    ///
    /// The writer must have passed the schema gate first; readers cannot
    /// create tables.
    pub fn open(path: &Path, size: usize) -> Result<Self, StorageError> {
        let size = size.clamp(1, MAX_READ_POOL_SIZE);
        let readers = (0..size)
            .map(|_| {
                let conn = Connection::open_with_flags(path, READER_FLAGS).map_err(to_storage_err)?;
                apply_read_pragmas(&conn)?;
                Ok(Mutex::new(conn))
            })
            .collect::<Result<Vec<_>, StorageError>>()?;

        tracing::debug!(path = %path.display(), readers = size, "opened read pool");
        Ok(Self {
            readers,
            cursor: AtomicUsize::new(0),
        })
    }

    fn acquire(&self) -> Result<MutexGuard<'_, Connection>, StorageError> {
        let start = self.cursor.fetch_add(1, Ordering::Relaxed);
        let len = self.readers.len();

        for offset in 0..len {
            match self.readers[(start + offset) % len].try_lock() {
                Ok(guard) => return Ok(guard),
                Err(TryLockError::WouldBlock) => continue,
                Err(TryLockError::Poisoned(_)) => {
                    return Err(StorageError::LockPoisoned { what: "read pool" })
                }
            }
        }

        self.readers[start % len]
            .lock()
            .map_err(|_| StorageError::LockPoisoned { what: "read pool" })
    }

    /// Run `f` on a reader.
    pub fn with_conn<F, T>(&self, f: F) -> Result<T, StorageError>
    where
        F: FnOnce(&Connection) -> Result<T, StorageError>,
    {
        let conn = self.acquire()?;
        f(&conn)
    }

    pub fn size(&self) -> usize {
        self.readers.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::connection::DatabaseManager;

    #[test]
    fn size_is_clamped() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("pool.db");
        let _db = DatabaseManager::open(&path, 1).unwrap();

        assert_eq!(ReadPool::open(&path, 0).unwrap().size(), 1);
        assert_eq!(ReadPool::open(&path, 64).unwrap().size(), MAX_READ_POOL_SIZE);
    }

    #[test]
    fn held_reader_is_skipped() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("pool.db");
        let _db = DatabaseManager::open(&path, 1).unwrap();
        let pool = ReadPool::open(&path, 2).unwrap();

        let _held = pool.acquire().unwrap();
        let n: i64 = pool
            .with_conn(|conn| conn.query_row("SELECT 1", [], |r| r.get(0)).map_err(to_storage_err))
            .unwrap();
        assert_eq!(n, 1);
    }
}
