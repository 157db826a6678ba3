//! # sarica-core
//!
//! Foundation crate for the Sarica member progression engine.
//! Defines the category taxonomy, level tiers, errors, config, events,
//! tracing, and constants. Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod events;
pub mod taxonomy;
pub mod tiers;
pub mod tracing;

// Re-export the most commonly used types at the crate root.
pub use config::SaricaConfig;
pub use errors::{SaricaError, SaricaResult};
pub use taxonomy::{Alignment, UserClass};
pub use tiers::{Path, Realm, RealmProgress, Stage};
