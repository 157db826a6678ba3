// Single source of truth for all default values.

// --- Storage ---
pub const DEFAULT_DATA_DIR: &str = "guilds";
pub const DEFAULT_DB_FILENAME: &str = "sarica.db";
pub const DEFAULT_READ_POOL_SIZE: usize = 4;
pub const MAX_READ_POOL_SIZE: usize = 8;
pub const DEFAULT_BUSY_TIMEOUT_MS: u32 = 5_000;

// --- Files ---
pub const PROJECT_CONFIG_FILENAME: &str = "sarica.toml";
