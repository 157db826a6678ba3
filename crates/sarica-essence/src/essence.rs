//! The per-member progression record and the experience/level engine.

use sarica_core::constants::MAX_LEVEL;
use sarica_core::taxonomy::UserClass;
use sarica_core::tiers::{self, Path, Realm, RealmProgress, Stage};

use crate::curve;
use crate::ledger::ClassProgress;

/// A member's total progression record.
///
/// Created zeroed on first lookup and never deleted. Only `total_experience`,
/// `level`, and per-category points are durable; everything else is derived.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Essence {
    pub(crate) total_experience: i64,
    pub(crate) level: u32,
    pub(crate) classes: Vec<ClassProgress>,
}

/// Level before and after an experience change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LevelChange {
    pub previous: u32,
    pub current: u32,
}

impl LevelChange {
    pub fn changed(&self) -> bool {
        self.previous != self.current
    }
}

impl Essence {
    /// A fresh, all-zero record.
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild a record by replaying raw ledger totals in ascending category id order.
    ///
    /// The replay is the source of truth for experience and level, so the
    /// result is identical no matter what order `entries` arrive in. The
    /// rebuilt record is clean: nothing is dirty until the next award.
    pub fn from_ledger(entries: impl IntoIterator<Item = (UserClass, i64)>) -> Self {
        let mut entries: Vec<(UserClass, i64)> = entries.into_iter().collect();
        entries.sort_by_key(|(class, _)| class.id());

        let mut essence = Self::new();
        for (class, points) in entries {
            essence.award(class, points);
        }
        essence.mark_saved();
        essence
    }

    /// Apply a signed experience delta, promoting or demoting as needed.
    ///
    /// Demotion refunds the requirement of each vacated level until the
    /// balance is non-negative; at level 0 a remaining deficit is dropped.
    /// Promotion stops at `MAX_LEVEL`; experience beyond that is retained.
    pub fn apply(&mut self, amount: i64) -> LevelChange {
        let previous = self.level;
        self.total_experience = self.total_experience.saturating_add(amount);

        if self.total_experience < 0 {
            while self.total_experience < 0 {
                if self.level == 0 {
                    self.total_experience = 0;
                    break;
                }
                self.level -= 1;
                self.total_experience += curve::exp_to_next(self.level);
            }
        } else {
            while self.level < MAX_LEVEL {
                let needed = curve::exp_to_next(self.level);
                if self.total_experience < needed {
                    break;
                }
                self.total_experience -= needed;
                self.level += 1;
            }
        }

        self.level = self.level.min(MAX_LEVEL);

        let change = LevelChange {
            previous,
            current: self.level,
        };
        if change.changed() {
            tracing::debug!(from = previous, to = self.level, amount, "level changed");
        }
        change
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    /// Experience accumulated within the current level.
    pub fn experience(&self) -> i64 {
        self.total_experience
    }

    pub fn exp_to_next(&self) -> i64 {
        curve::exp_to_next(self.level)
    }

    /// Fraction of the way to the next level, in `[0, 1]`.
    pub fn exp_fraction(&self) -> f64 {
        // At the cap the retained surplus can exceed the requirement.
        (self.total_experience as f64 / self.exp_to_next() as f64).min(1.0)
    }

    /// Percentage string with two decimals, e.g. `"42.55%"`.
    pub fn exp_percent_string(&self) -> String {
        format!("{:.2}%", self.exp_fraction() * 100.0)
    }

    pub fn realm(&self) -> Realm {
        Realm::from_level(self.level)
    }

    pub fn realm_progress(&self) -> RealmProgress {
        RealmProgress::from_level(self.level)
    }

    pub fn stage(&self) -> Stage {
        Stage::from_level(self.level)
    }

    pub fn step(&self) -> u32 {
        tiers::step(self.level)
    }

    pub fn path(&self) -> Path {
        Path::from_level(self.level)
    }

    /// Categories ordered by points, highest first.
    pub fn classes(&self) -> &[ClassProgress] {
        &self.classes
    }

    pub fn class(&self, category: UserClass) -> Option<&ClassProgress> {
        self.classes.iter().find(|c| c.category == category)
    }

    /// Lifetime points in a category; zero if the member never earned any.
    pub fn points(&self, category: UserClass) -> i64 {
        self.class(category).map_or(0, |c| c.points)
    }

    /// Categories whose points changed since the last successful save.
    pub fn dirty_classes(&self) -> impl Iterator<Item = &ClassProgress> {
        self.classes.iter().filter(|c| c.dirty)
    }

    pub fn is_dirty(&self) -> bool {
        self.classes.iter().any(|c| c.dirty)
    }

    /// Clear every dirty flag. Call only after the save has committed.
    pub fn mark_saved(&mut self) {
        for class in &mut self.classes {
            class.dirty = false;
        }
    }
}
