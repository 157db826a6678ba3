//! Progression events, consumed by chat adapters (level-up announcements, audit).

pub mod dispatcher;
pub mod handler;
pub mod types;

pub use dispatcher::EventDispatcher;
pub use handler::EssenceEventHandler;
pub use types::*;
