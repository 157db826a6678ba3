use std::fmt;

use super::tier_index;
use crate::constants::LEVELS_PER_PATH;

/// Coarsest tier, 81 levels wide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Path {
    Hollow,
    Ephemeral,
    Ascended,
    Divine,
    Unbound,
}

impl Path {
    const NAMED: [Path; 3] = [Self::Ephemeral, Self::Ascended, Self::Divine];

    pub fn from_level(level: u32) -> Self {
        Self::from_index(tier_index(level, LEVELS_PER_PATH))
    }

    /// Map a raw path index. Negative is Hollow, past the last named path is Unbound.
    pub fn from_index(index: i64) -> Self {
        match usize::try_from(index) {
            Err(_) => Self::Hollow,
            Ok(i) => Self::NAMED.get(i).copied().unwrap_or(Self::Unbound),
        }
    }

    pub fn index(self) -> i64 {
        match self {
            Self::Hollow => -1,
            Self::Ephemeral => 0,
            Self::Ascended => 1,
            Self::Divine => 2,
            Self::Unbound => 3,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Hollow => "Hollow",
            Self::Ephemeral => "Ephemeral",
            Self::Ascended => "Ascended",
            Self::Divine => "Divine",
            Self::Unbound => "Unbound",
        }
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
