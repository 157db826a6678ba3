//! Event payload types.

use crate::taxonomy::UserClass;

/// Payload for `on_points_awarded`.
#[derive(Debug, Clone)]
pub struct PointsAwardedEvent {
    pub member_id: u64,
    pub category: UserClass,
    pub amount: i64,
    /// Lifetime points in the category after the award.
    pub points: i64,
}

/// Payload for `on_level_changed`. Fired for promotions and demotions alike.
#[derive(Debug, Clone)]
pub struct LevelChangedEvent {
    pub member_id: u64,
    pub previous_level: u32,
    pub level: u32,
}

impl LevelChangedEvent {
    pub fn is_promotion(&self) -> bool {
        self.level > self.previous_level
    }
}

/// Payload for `on_essence_saved`.
#[derive(Debug, Clone)]
pub struct EssenceSavedEvent {
    pub member_id: u64,
    /// Category rows written by the save (dirty rows only).
    pub rows_written: usize,
}
