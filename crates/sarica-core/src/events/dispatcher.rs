//! EventDispatcher: synchronous dispatch to registered handlers.

use std::sync::Arc;

use super::handler::EssenceEventHandler;
use super::types::*;

/// Synchronous event dispatcher wrapping a list of handlers.
#[derive(Default)]
pub struct EventDispatcher {
    handlers: Vec<Arc<dyn EssenceEventHandler>>,
}

impl EventDispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, handler: Arc<dyn EssenceEventHandler>) {
        self.handlers.push(handler);
    }

    pub fn handler_count(&self) -> usize {
        self.handlers.len()
    }

    /// Handlers that panic are caught and do not prevent subsequent handlers
    /// from receiving the event.
    fn emit<F: Fn(&dyn EssenceEventHandler)>(&self, event: &'static str, f: F) {
        for handler in &self.handlers {
            let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
                f(handler.as_ref());
            }));
            if result.is_err() {
                tracing::warn!(event, "event handler panicked");
            }
        }
    }

    pub fn emit_points_awarded(&self, event: &PointsAwardedEvent) {
        self.emit("points_awarded", |h| h.on_points_awarded(event));
    }

    pub fn emit_level_changed(&self, event: &LevelChangedEvent) {
        self.emit("level_changed", |h| h.on_level_changed(event));
    }

    pub fn emit_essence_saved(&self, event: &EssenceSavedEvent) {
        self.emit("essence_saved", |h| h.on_essence_saved(event));
    }
}
