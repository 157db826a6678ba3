use sarica_core::errors::StorageError;

use crate::essence::Essence;

/// Durable keyed store for essences.
///
/// Implementations never fail a load for an unknown member: they return a
/// fresh record. Storage failures propagate unchanged.
pub trait EssenceStore: Send + Sync {
    /// Load a member, rebuilding experience, level, and affinities from the ledger.
    fn load_essence(&self, member_id: u64) -> Result<Essence, StorageError>;

    /// Upsert the member row and every dirty category row in one transaction,
    /// then clear the dirty flags. Returns the number of category rows written.
    fn save_essence(&self, member_id: u64, essence: &mut Essence) -> Result<usize, StorageError>;
}
