use std::fmt;
use std::str::FromStr;

use crate::errors::EssenceError;

/// Cosmological alignment attached to a category.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Alignment {
    #[default]
    Primordial,
    Celestial,
    Infernal,
    Abyssal,
    Ethereal,
    Environmental,
    Artificial,
    Temporal,
    Cardinal,
}

impl Alignment {
    pub const ALL: [Alignment; 9] = [
        Self::Primordial,
        Self::Celestial,
        Self::Infernal,
        Self::Abyssal,
        Self::Ethereal,
        Self::Environmental,
        Self::Artificial,
        Self::Temporal,
        Self::Cardinal,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::Primordial => "Primordial",
            Self::Celestial => "Celestial",
            Self::Infernal => "Infernal",
            Self::Abyssal => "Abyssal",
            Self::Ethereal => "Ethereal",
            Self::Environmental => "Environmental",
            Self::Artificial => "Artificial",
            Self::Temporal => "Temporal",
            Self::Cardinal => "Cardinal",
        }
    }
}

impl fmt::Display for Alignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Alignment {
    type Err = EssenceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Self::ALL
            .into_iter()
            .find(|a| a.name().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| EssenceError::UnknownAlignment {
                name: s.to_string(),
            })
    }
}
