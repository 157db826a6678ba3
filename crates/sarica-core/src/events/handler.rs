//! EssenceEventHandler trait, all methods with no-op defaults.

use super::types::*;

/// Trait for handling progression events.
///
/// Handlers only override the events they care about.
pub trait EssenceEventHandler: Send + Sync {
    fn on_points_awarded(&self, _event: &PointsAwardedEvent) {}
    fn on_level_changed(&self, _event: &LevelChangedEvent) {}
    fn on_essence_saved(&self, _event: &EssenceSavedEvent) {}
}
