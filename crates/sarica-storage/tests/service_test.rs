//! End-to-end tests for ProgressionService: load → award → save turns,
//! event emission, error propagation, and per-member serialization.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::thread;

use sarica_core::config::SaricaConfig;
use sarica_core::errors::{SaricaError, StorageError};
use sarica_core::events::{
    EssenceEventHandler, EssenceSavedEvent, EventDispatcher, LevelChangedEvent, PointsAwardedEvent,
};
use sarica_core::taxonomy::{Alignment, UserClass};
use sarica_essence::{AlignmentTable, Essence, EssenceStore};
use sarica_storage::{ProgressionService, StorageEngine};
use tempfile::tempdir;

#[derive(Default)]
struct Recorder {
    awarded: Mutex<Vec<PointsAwardedEvent>>,
    levels: Mutex<Vec<LevelChangedEvent>>,
    saved: Mutex<Vec<EssenceSavedEvent>>,
}

impl EssenceEventHandler for Recorder {
    fn on_points_awarded(&self, event: &PointsAwardedEvent) {
        self.awarded.lock().unwrap().push(event.clone());
    }
    fn on_level_changed(&self, event: &LevelChangedEvent) {
        self.levels.lock().unwrap().push(event.clone());
    }
    fn on_essence_saved(&self, event: &EssenceSavedEvent) {
        self.saved.lock().unwrap().push(event.clone());
    }
}

fn service_with_recorder() -> (ProgressionService, Arc<Recorder>) {
    let recorder = Arc::new(Recorder::default());
    let mut events = EventDispatcher::new();
    events.register(recorder.clone());
    let service = ProgressionService::new(StorageEngine::open_in_memory().unwrap(), AlignmentTable::new())
        .with_events(events);
    (service, recorder)
}

#[test]
fn award_persists_and_emits_events() {
    let (service, recorder) = service_with_recorder();

    let essence = service.award(7, UserClass::Reader, 100).unwrap();
    assert_eq!(essence.level(), 1);
    assert_eq!(essence.experience(), 6);
    assert!(!essence.is_dirty());

    let awarded = recorder.awarded.lock().unwrap();
    assert_eq!(awarded.len(), 1);
    assert_eq!(awarded[0].member_id, 7);
    assert_eq!(awarded[0].points, 100);

    let levels = recorder.levels.lock().unwrap();
    assert_eq!(levels.len(), 1);
    assert_eq!((levels[0].previous_level, levels[0].level), (0, 1));
    assert!(levels[0].is_promotion());

    let saved = recorder.saved.lock().unwrap();
    assert_eq!(saved[0].rows_written, 1);

    let reloaded = service.essence(7).unwrap();
    assert_eq!(reloaded.points(UserClass::Reader), 100);
}

#[test]
fn no_level_event_without_level_change() {
    let (service, recorder) = service_with_recorder();
    service.award(7, UserClass::Greeter, 10).unwrap();
    service.award(7, UserClass::Greeter, 10).unwrap();

    assert_eq!(recorder.awarded.lock().unwrap().len(), 2);
    assert!(recorder.levels.lock().unwrap().is_empty());
    assert_eq!(service.essence(7).unwrap().points(UserClass::Greeter), 20);
}

#[test]
fn successive_awards_accumulate_across_turns() {
    let (service, _) = service_with_recorder();
    for _ in 0..10 {
        service.award(3, UserClass::Reader, 1).unwrap();
    }
    let essence = service.essence(3).unwrap();
    assert_eq!(essence.experience(), 10);
    assert_eq!(essence.level(), 0);
    assert_eq!(essence.points(UserClass::Reader), 10);
}

#[test]
fn unknown_category_name_touches_nothing() {
    let (service, recorder) = service_with_recorder();

    let err = service.award_named(7, "Poet", 50).unwrap_err();
    assert!(matches!(err, SaricaError::Essence(_)));
    assert!(err.to_string().contains("unknown category: Poet"));
    assert!(recorder.awarded.lock().unwrap().is_empty());
    assert_eq!(service.store().member_count().unwrap(), 0);
}

#[test]
fn named_awards_accept_display_names() {
    let (service, _) = service_with_recorder();
    let essence = service.award_named(7, "soul healer", 40).unwrap();
    assert_eq!(essence.points(UserClass::SoulHealer), 40);
}

#[test]
fn standing_uses_configured_alignments() {
    let alignments = AlignmentTable::new().with(UserClass::SoulHealer, Alignment::Celestial);
    let service = ProgressionService::new(StorageEngine::open_in_memory().unwrap(), alignments);

    service.award(9, UserClass::Reader, 500).unwrap();
    service.award(9, UserClass::SoulHealer, 20).unwrap();

    let standing = service.standing(9).unwrap();
    assert_eq!(
        standing.class_triples(),
        vec![
            ("Reader".to_string(), "Primordial".to_string(), "E".to_string()),
            ("Soul Healer".to_string(), "Celestial".to_string(), "X".to_string()),
        ]
    );
}

#[test]
fn member_locks_are_released_after_each_turn() {
    let (service, _) = service_with_recorder();
    for member in 0..50u64 {
        service.award(member, UserClass::Greeter, 1).unwrap();
    }
    assert_eq!(service.active_members(), 0);
    assert_eq!(service.store().member_count().unwrap(), 50);
}

#[test]
fn open_from_config_creates_guild_database() {
    let dir = tempdir().unwrap();
    let mut config = SaricaConfig::default();
    config.storage.data_dir = Some(dir.path().join("guilds").display().to_string());
    config.storage.guild_id = Some("1234".to_string());

    let service = ProgressionService::open(&config).unwrap();
    service.award(1, UserClass::Artist, 5).unwrap();

    assert!(dir.path().join("guilds").join("1234.db").exists());
}

#[test]
fn concurrent_awards_for_one_member_are_not_lost() {
    let dir = tempdir().unwrap();
    let engine = StorageEngine::open_path(&dir.path().join("race.db"), 4).unwrap();
    let service = Arc::new(ProgressionService::new(engine, AlignmentTable::new()));

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let service = Arc::clone(&service);
            thread::spawn(move || {
                for _ in 0..25 {
                    service.award(11, UserClass::TechSupport, 2).unwrap();
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }

    assert_eq!(service.active_members(), 0);

    let essence = service.essence(11).unwrap();
    assert_eq!(essence.points(UserClass::TechSupport), 400);
    // 400 = 94 + 268 + 38
    assert_eq!(essence.level(), 2);
    assert_eq!(essence.experience(), 38);
}

// ═══════════════════════════════════════════════════════════════════════════
// FAILING STORE
// ═══════════════════════════════════════════════════════════════════════════

/// Loads fresh records, refuses every save.
struct ReadOnlyStore {
    saves: AtomicUsize,
}

impl EssenceStore for ReadOnlyStore {
    fn load_essence(&self, _member_id: u64) -> Result<Essence, StorageError> {
        Ok(Essence::new())
    }

    fn save_essence(&self, _member_id: u64, essence: &mut Essence) -> Result<usize, StorageError> {
        self.saves.fetch_add(1, Ordering::SeqCst);
        assert!(essence.is_dirty());
        Err(StorageError::Sqlite {
            message: "database is locked".to_string(),
        })
    }
}

#[test]
fn save_failure_propagates_and_emits_nothing() {
    let recorder = Arc::new(Recorder::default());
    let mut events = EventDispatcher::new();
    events.register(recorder.clone());
    let store = ReadOnlyStore {
        saves: AtomicUsize::new(0),
    };
    let service = ProgressionService::new(store, AlignmentTable::new()).with_events(events);

    let err = service.award(1, UserClass::Jester, 10).unwrap_err();
    assert!(matches!(err, SaricaError::Storage(StorageError::Sqlite { .. })));
    assert_eq!(service.store().saves.load(Ordering::SeqCst), 1);
    assert!(recorder.awarded.lock().unwrap().is_empty());
    assert!(recorder.saved.lock().unwrap().is_empty());
    assert_eq!(service.active_members(), 0);
}

#[test]
fn panicking_handler_does_not_fail_the_award() {
    struct Panics;
    impl EssenceEventHandler for Panics {
        fn on_points_awarded(&self, _event: &PointsAwardedEvent) {
            panic!("handler bug");
        }
    }

    let recorder = Arc::new(Recorder::default());
    let mut events = EventDispatcher::new();
    events.register(Arc::new(Panics));
    events.register(recorder.clone());
    let service = ProgressionService::new(StorageEngine::open_in_memory().unwrap(), AlignmentTable::new())
        .with_events(events);

    service.award(1, UserClass::Jester, 10).unwrap();
    assert_eq!(recorder.awarded.lock().unwrap().len(), 1);
}
