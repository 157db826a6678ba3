//! Configuration system for Sarica.
//! TOML-based, 3-layer resolution: env > project > defaults.

pub mod alignment_config;
pub mod defaults;
pub mod sarica_config;
pub mod storage_config;

pub use alignment_config::AlignmentConfig;
pub use sarica_config::SaricaConfig;
pub use storage_config::StorageConfig;
