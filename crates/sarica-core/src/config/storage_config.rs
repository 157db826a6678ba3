//! Storage configuration.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use super::defaults;

/// Where the per-guild database lives and how it is accessed.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct StorageConfig {
    /// Directory holding the database files. Default: `guilds`.
    pub data_dir: Option<String>,
    /// Guild the bot serves. The database file is named after it.
    pub guild_id: Option<String>,
    /// Read-only connections kept for file-backed stores. Default: 4.
    pub read_pool_size: Option<usize>,
}

impl StorageConfig {
    pub fn effective_data_dir(&self) -> PathBuf {
        PathBuf::from(
            self.data_dir
                .as_deref()
                .unwrap_or(defaults::DEFAULT_DATA_DIR),
        )
    }

    pub fn effective_read_pool_size(&self) -> usize {
        self.read_pool_size.unwrap_or(defaults::DEFAULT_READ_POOL_SIZE)
    }

    /// `<data_dir>/<guild_id>.db`, or `<data_dir>/sarica.db` without a guild.
    pub fn database_path(&self) -> PathBuf {
        let file = match self.guild_id.as_deref() {
            Some(guild) => format!("{guild}.db"),
            None => defaults::DEFAULT_DB_FILENAME.to_string(),
        };
        self.effective_data_dir().join(file)
    }
}
