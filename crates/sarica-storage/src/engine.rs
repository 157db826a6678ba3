//! StorageEngine: owns the DatabaseManager and implements `EssenceStore`.

use std::path::Path;

use sarica_core::config::StorageConfig;
use sarica_core::errors::StorageError;
use sarica_core::taxonomy::UserClass;
use sarica_essence::{Essence, EssenceStore};

use crate::connection::writer::with_immediate_transaction;
use crate::connection::DatabaseManager;
use crate::member_key;
use crate::queries::class_points;
use crate::queries::essences::{self, EssenceRow};
use crate::queries::settings::{self, ChapterUpdate};

/// The persistence adapter for member essences and adapter settings.
pub struct StorageEngine {
    db: DatabaseManager,
}

impl StorageEngine {
    /// Open the database described by `config`, creating its directory if needed.
    pub fn open(config: &StorageConfig) -> Result<Self, StorageError> {
        let dir = config.effective_data_dir();
        std::fs::create_dir_all(&dir).map_err(|e| StorageError::Io {
            path: dir.display().to_string(),
            message: e.to_string(),
        })?;
        Self::open_path(&config.database_path(), config.effective_read_pool_size())
    }

    /// Open a database file directly.
    pub fn open_path(path: &Path, read_pool_size: usize) -> Result<Self, StorageError> {
        let db = DatabaseManager::open(path, read_pool_size)?;
        tracing::info!(path = %path.display(), "opened essence store");
        Ok(Self { db })
    }

    /// Open an in-memory storage engine (for testing).
    pub fn open_in_memory() -> Result<Self, StorageError> {
        Ok(Self {
            db: DatabaseManager::open_in_memory()?,
        })
    }

    /// Get a reference to the database manager (for advanced operations).
    pub fn db(&self) -> &DatabaseManager {
        &self.db
    }

    pub fn get_setting(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.db.with_reader(|conn| settings::get_setting(conn, key))
    }

    pub fn set_setting(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.db.with_writer(|conn| settings::set_setting(conn, key, value))
    }

    /// Record the newest chapter id seen by the feed poller.
    pub fn record_latest_chapter(&self, chapter_id: &str) -> Result<ChapterUpdate, StorageError> {
        let update = self.db.with_writer(|conn| {
            with_immediate_transaction(conn, |tx| settings::record_latest_chapter(tx, chapter_id))
        })?;
        if update.should_announce() {
            tracing::info!(chapter_id, "new chapter recorded");
        }
        Ok(update)
    }

    /// Number of members with a stored essence row.
    pub fn member_count(&self) -> Result<i64, StorageError> {
        self.db.with_reader(essences::count_members)
    }
}

/// Convert raw rows into typed ledger entries, rejecting anything a save could not have written.
fn ledger_entries(member_id: u64, raw: Vec<(i64, i64)>) -> Result<Vec<(UserClass, i64)>, StorageError> {
    raw.into_iter()
        .map(|(category, points)| {
            let class = UserClass::from_id(category).ok_or_else(|| StorageError::CorruptLedger {
                details: format!("member {member_id} has unknown category id {category}"),
            })?;
            if points < 0 {
                return Err(StorageError::CorruptLedger {
                    details: format!("member {member_id} has negative points in {class}"),
                });
            }
            Ok((class, points))
        })
        .collect()
}

impl EssenceStore for StorageEngine {
    fn load_essence(&self, member_id: u64) -> Result<Essence, StorageError> {
        let key = member_key(member_id);
        let (row, raw) = self.db.with_reader(|conn| {
            let row = essences::get_essence_row(conn, key)?;
            let raw = class_points::load_class_points(conn, key)?;
            Ok((row, raw))
        })?;

        let essence = Essence::from_ledger(ledger_entries(member_id, raw)?);

        if let Some(row) = row {
            if row.experience != essence.experience() || row.level != essence.level() {
                tracing::warn!(
                    member_id,
                    stored_level = row.level,
                    stored_experience = row.experience,
                    level = essence.level(),
                    experience = essence.experience(),
                    "stored essence diverges from ledger; using ledger"
                );
            }
        }

        Ok(essence)
    }

    fn save_essence(&self, member_id: u64, essence: &mut Essence) -> Result<usize, StorageError> {
        // Every award dirties a category, so a clean record matches storage.
        if !essence.is_dirty() {
            return Ok(0);
        }

        let key = member_key(member_id);
        let row = EssenceRow {
            experience: essence.experience(),
            level: essence.level(),
        };
        let dirty: Vec<(i64, i64)> = essence
            .dirty_classes()
            .map(|c| (i64::from(c.category().id()), c.points()))
            .collect();

        self.db.with_writer(|conn| {
            with_immediate_transaction(conn, |tx| {
                essences::upsert_essence_row(tx, key, row)?;
                for (category, points) in &dirty {
                    class_points::upsert_class_points(tx, key, *category, *points)?;
                }
                Ok(())
            })
        })?;

        // Only after the commit.
        essence.mark_saved();
        tracing::debug!(member_id, rows = dirty.len(), level = row.level, "saved essence");
        Ok(dirty.len())
    }
}
