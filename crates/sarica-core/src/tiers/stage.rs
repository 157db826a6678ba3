use std::fmt;

use super::{tier_index, Path, Realm};
use crate::constants::LEVELS_PER_STAGE;

/// Nine-level tier. Three stages make a realm.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Stage {
    Hollow,
    // Mortal
    Body,
    Blood,
    Mind,
    // Elite
    Weaving,
    Energy,
    Matter,
    // Ascendant
    Infusion,
    Harmony,
    Awakening,
    // Harold
    Formation,
    Attunement,
    Capacity,
    // Sage
    Manifestation,
    Expansion,
    Amplification,
    // Hegemon
    Authority,
    Synthesis,
    Genesis,
    // Monarch
    Assimilation,
    Dominion,
    Convergence,
    // Imperial
    Reflection,
    Sovereignty,
    Unity,
    // Transcendent
    Omniscience,
    Omnipresence,
    Omnipotence,
    Unbound,
}

impl Stage {
    const NAMED: [Stage; 27] = [
        Self::Body,
        Self::Blood,
        Self::Mind,
        Self::Weaving,
        Self::Energy,
        Self::Matter,
        Self::Infusion,
        Self::Harmony,
        Self::Awakening,
        Self::Formation,
        Self::Attunement,
        Self::Capacity,
        Self::Manifestation,
        Self::Expansion,
        Self::Amplification,
        Self::Authority,
        Self::Synthesis,
        Self::Genesis,
        Self::Assimilation,
        Self::Dominion,
        Self::Convergence,
        Self::Reflection,
        Self::Sovereignty,
        Self::Unity,
        Self::Omniscience,
        Self::Omnipresence,
        Self::Omnipotence,
    ];

    pub fn from_level(level: u32) -> Self {
        Self::from_index(tier_index(level, LEVELS_PER_STAGE))
    }

    pub fn from_index(index: i64) -> Self {
        match usize::try_from(index) {
            Err(_) => Self::Hollow,
            Ok(i) => Self::NAMED.get(i).copied().unwrap_or(Self::Unbound),
        }
    }

    /// Raw stage index: -1 for Hollow, then declaration order.
    pub fn index(self) -> i64 {
        self as i64 - 1
    }

    /// False for the Hollow and Unbound sentinels, which have no steps to show.
    pub fn has_steps(self) -> bool {
        !matches!(self, Self::Hollow | Self::Unbound)
    }

    pub fn realm(self) -> Realm {
        Realm::from_index(self.index().div_euclid(3))
    }

    pub fn path(self) -> Path {
        Path::from_index(self.index().div_euclid(9))
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Hollow => "Hollow",
            Self::Body => "Body",
            Self::Blood => "Blood",
            Self::Mind => "Mind",
            Self::Weaving => "Weaving",
            Self::Energy => "Energy",
            Self::Matter => "Matter",
            Self::Infusion => "Infusion",
            Self::Harmony => "Harmony",
            Self::Awakening => "Awakening",
            Self::Formation => "Formation",
            Self::Attunement => "Attunement",
            Self::Capacity => "Capacity",
            Self::Manifestation => "Manifestation",
            Self::Expansion => "Expansion",
            Self::Amplification => "Amplification",
            Self::Authority => "Authority",
            Self::Synthesis => "Synthesis",
            Self::Genesis => "Genesis",
            Self::Assimilation => "Assimilation",
            Self::Dominion => "Dominion",
            Self::Convergence => "Convergence",
            Self::Reflection => "Reflection",
            Self::Sovereignty => "Sovereignty",
            Self::Unity => "Unity",
            Self::Omniscience => "Omniscience",
            Self::Omnipresence => "Omnipresence",
            Self::Omnipotence => "Omnipotence",
            Self::Unbound => "Unbound",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
