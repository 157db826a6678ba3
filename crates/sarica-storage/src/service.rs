//! ProgressionService: one load → award → save turn per interaction.

use std::sync::{Arc, Mutex};

use dashmap::DashMap;

use sarica_core::config::SaricaConfig;
use sarica_core::errors::{SaricaResult, StorageError};
use sarica_core::events::{
    EssenceSavedEvent, EventDispatcher, LevelChangedEvent, PointsAwardedEvent,
};
use sarica_core::taxonomy::UserClass;
use sarica_essence::{AlignmentTable, Essence, EssenceStore, Standing};

use crate::engine::StorageEngine;

/// Entry point for chat adapters (message rules, reaction rules, admin grants).
///
/// Each member has its own lock, so turns for the same member never
/// interleave between load and save while different members proceed freely.
pub struct ProgressionService<S: EssenceStore = StorageEngine> {
    store: S,
    alignments: AlignmentTable,
    events: EventDispatcher,
    member_locks: DashMap<u64, Arc<Mutex<()>>>,
}

impl ProgressionService<StorageEngine> {
    /// Open the configured database and build the alignment table.
    ///
    /// Fails on a schema mismatch or an unopenable store; callers must
    /// abort startup on any error here.
    pub fn open(config: &SaricaConfig) -> SaricaResult<Self> {
        let store = StorageEngine::open(&config.storage)?;
        let alignments = AlignmentTable::from_config(&config.alignments)?;
        Ok(Self::new(store, alignments))
    }
}

impl<S: EssenceStore> ProgressionService<S> {
    pub fn new(store: S, alignments: AlignmentTable) -> Self {
        Self {
            store,
            alignments,
            events: EventDispatcher::new(),
            member_locks: DashMap::new(),
        }
    }

    pub fn with_events(mut self, events: EventDispatcher) -> Self {
        self.events = events;
        self
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn alignments(&self) -> &AlignmentTable {
        &self.alignments
    }

    fn member_lock(&self, member_id: u64) -> Arc<Mutex<()>> {
        self.member_locks.entry(member_id).or_default().clone()
    }

    /// Drop a member's lock once no turn holds or waits on it.
    ///
    /// `entry` and `remove_if` both hold the shard lock, so a turn cloning
    /// the lock concurrently keeps the count above one and the entry stays.
    fn release_member_lock(&self, member_id: u64, lock: Arc<Mutex<()>>) {
        drop(lock);
        self.member_locks
            .remove_if(&member_id, |_, lock| Arc::strong_count(lock) == 1);
    }

    /// Number of members with a turn in flight.
    pub fn active_members(&self) -> usize {
        self.member_locks.len()
    }

    /// Award points to a member and persist the result.
    pub fn award(&self, member_id: u64, category: UserClass, amount: i64) -> SaricaResult<Essence> {
        let lock = self.member_lock(member_id);
        let result = match lock.lock() {
            Ok(_guard) => self.award_locked(member_id, category, amount),
            Err(_) => Err(StorageError::LockPoisoned { what: "member" }.into()),
        };
        self.release_member_lock(member_id, lock);
        result
    }

    fn award_locked(&self, member_id: u64, category: UserClass, amount: i64) -> SaricaResult<Essence> {
        let mut essence = self.store.load_essence(member_id)?;
        let outcome = essence.award(category, amount);
        let rows_written = self.store.save_essence(member_id, &mut essence)?;

        tracing::debug!(member_id, %category, amount, level = essence.level(), "awarded points");

        self.events.emit_points_awarded(&PointsAwardedEvent {
            member_id,
            category,
            amount,
            points: outcome.points,
        });
        if outcome.level.changed() {
            tracing::info!(
                member_id,
                from = outcome.level.previous,
                to = outcome.level.current,
                "member level changed"
            );
            self.events.emit_level_changed(&LevelChangedEvent {
                member_id,
                previous_level: outcome.level.previous,
                level: outcome.level.current,
            });
        }
        self.events.emit_essence_saved(&EssenceSavedEvent {
            member_id,
            rows_written,
        });

        Ok(essence)
    }

    /// Award by category name; unknown names fail before touching storage.
    pub fn award_named(&self, member_id: u64, category: &str, amount: i64) -> SaricaResult<Essence> {
        let category = category.parse::<UserClass>()?;
        self.award(member_id, category, amount)
    }

    /// Current record for a member. Unknown members come back zeroed.
    pub fn essence(&self, member_id: u64) -> SaricaResult<Essence> {
        Ok(self.store.load_essence(member_id)?)
    }

    /// Display snapshot for a member.
    pub fn standing(&self, member_id: u64) -> SaricaResult<Standing> {
        let essence = self.essence(member_id)?;
        Ok(Standing::of(&essence, &self.alignments))
    }
}
