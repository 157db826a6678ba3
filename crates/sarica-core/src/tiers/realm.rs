use std::fmt;

use super::{tier_index, Path};
use crate::constants::{LEVELS_PER_REALM, LEVELS_PER_STAGE};

/// Middle tier, 27 levels wide. Three realms make a path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Realm {
    Hollow,
    // Ephemeral
    Mortal,
    Elite,
    Ascendant,
    // Ascended
    Harold,
    Sage,
    Hegemon,
    // Divine
    Monarch,
    Imperial,
    Transcendent,
    Unbound,
}

impl Realm {
    const NAMED: [Realm; 9] = [
        Self::Mortal,
        Self::Elite,
        Self::Ascendant,
        Self::Harold,
        Self::Sage,
        Self::Hegemon,
        Self::Monarch,
        Self::Imperial,
        Self::Transcendent,
    ];

    pub fn from_level(level: u32) -> Self {
        Self::from_index(tier_index(level, LEVELS_PER_REALM))
    }

    pub fn from_index(index: i64) -> Self {
        match usize::try_from(index) {
            Err(_) => Self::Hollow,
            Ok(i) => Self::NAMED.get(i).copied().unwrap_or(Self::Unbound),
        }
    }

    /// Raw realm index: -1 for Hollow, then declaration order.
    pub fn index(self) -> i64 {
        self as i64 - 1
    }

    /// False for the Hollow and Unbound sentinels, which have nothing to fill.
    pub fn has_progress(self) -> bool {
        !matches!(self, Self::Hollow | Self::Unbound)
    }

    pub fn path(self) -> Path {
        Path::from_index(self.index().div_euclid(3))
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Hollow => "Hollow",
            Self::Mortal => "Mortal",
            Self::Elite => "Elite",
            Self::Ascendant => "Ascendant",
            Self::Harold => "Harold",
            Self::Sage => "Sage",
            Self::Hegemon => "Hegemon",
            Self::Monarch => "Monarch",
            Self::Imperial => "Imperial",
            Self::Transcendent => "Transcendent",
            Self::Unbound => "Unbound",
        }
    }
}

impl fmt::Display for Realm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Which third of its realm a level sits in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RealmProgress {
    Hollow,
    Low,
    Middle,
    High,
}

impl RealmProgress {
    pub fn from_level(level: u32) -> Self {
        let stage = tier_index(level, LEVELS_PER_STAGE);
        if !Realm::from_level(level).has_progress() {
            return Self::Hollow;
        }
        match stage.rem_euclid(3) {
            0 => Self::Low,
            1 => Self::Middle,
            _ => Self::High,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Hollow => "Hollow",
            Self::Low => "Low",
            Self::Middle => "Middle",
            Self::High => "High",
        }
    }
}

impl fmt::Display for RealmProgress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
