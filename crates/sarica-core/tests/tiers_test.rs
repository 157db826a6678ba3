//! Tests for the level tier hierarchy.

use proptest::prelude::*;
use sarica_core::constants::MAX_LEVEL;
use sarica_core::tiers::{self, Path, Realm, RealmProgress, Stage};

#[test]
fn hierarchy_is_consistent_for_every_level() {
    for level in 0..=MAX_LEVEL {
        let stage = Stage::from_level(level);
        assert_eq!(stage.realm(), Realm::from_level(level), "realm at level {level}");
        assert_eq!(stage.path(), Path::from_level(level), "path at level {level}");
        assert_eq!(
            Realm::from_level(level).path(),
            Path::from_level(level),
            "realm path at level {level}"
        );
    }
}

#[test]
fn level_zero_is_hollow_everywhere() {
    assert_eq!(Stage::from_level(0), Stage::Hollow);
    assert_eq!(Realm::from_level(0), Realm::Hollow);
    assert_eq!(Path::from_level(0), Path::Hollow);
    assert_eq!(RealmProgress::from_level(0), RealmProgress::Hollow);
    assert!(!Stage::Hollow.has_steps());
    assert!(!Realm::Hollow.has_progress());
}

#[test]
fn only_the_cap_is_unbound() {
    assert_eq!(Stage::from_level(244), Stage::Unbound);
    assert_eq!(Realm::from_level(244), Realm::Unbound);
    assert_eq!(Path::from_level(244), Path::Unbound);
    assert_eq!(RealmProgress::from_level(244), RealmProgress::Hollow);

    assert_eq!(Stage::from_level(243), Stage::Omnipotence);
    assert_eq!(Realm::from_level(243), Realm::Transcendent);
    assert_eq!(Path::from_level(243), Path::Divine);
    assert!(!Stage::Unbound.has_steps());
    assert!(!Realm::Unbound.has_progress());
}

#[test]
fn boundaries_between_tiers() {
    assert_eq!(Stage::from_level(1), Stage::Body);
    assert_eq!(Stage::from_level(9), Stage::Body);
    assert_eq!(Stage::from_level(10), Stage::Blood);
    assert_eq!(Stage::from_level(28), Stage::Weaving);

    assert_eq!(Realm::from_level(27), Realm::Mortal);
    assert_eq!(Realm::from_level(28), Realm::Elite);
    assert_eq!(Path::from_level(81), Path::Ephemeral);
    assert_eq!(Path::from_level(82), Path::Ascended);
    assert_eq!(Path::from_level(163), Path::Divine);
}

#[test]
fn transcendent_stages_are_distinct() {
    // Unity and Omniscience must be separate stages with separate indices.
    assert_ne!(Stage::Unity.index(), Stage::Omniscience.index());
    assert_eq!(Stage::from_level(24 * 9 + 1), Stage::Omniscience);
    assert_eq!(Stage::from_level(23 * 9 + 1), Stage::Unity);
}

#[test]
fn realm_progress_thirds() {
    assert_eq!(RealmProgress::from_level(1), RealmProgress::Low);
    assert_eq!(RealmProgress::from_level(10), RealmProgress::Middle);
    assert_eq!(RealmProgress::from_level(19), RealmProgress::High);
    assert_eq!(RealmProgress::from_level(28), RealmProgress::Low);
}

#[test]
fn display_names() {
    assert_eq!(Stage::Omnipresence.to_string(), "Omnipresence");
    assert_eq!(Realm::Harold.to_string(), "Harold");
    assert_eq!(Path::Ascended.to_string(), "Ascended");
    assert_eq!(RealmProgress::Middle.to_string(), "Middle");
}

proptest! {
    #[test]
    fn step_always_in_one_to_nine(level in 0u32..=MAX_LEVEL) {
        let step = tiers::step(level);
        prop_assert!((1..=9).contains(&step));
    }

    #[test]
    fn index_round_trips(index in -1i64..=27) {
        prop_assert_eq!(Stage::from_index(index).index(), index);
    }
}
