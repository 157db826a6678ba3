use std::fmt;
use std::str::FromStr;

use crate::errors::EssenceError;

/// A behavior-tagged point bucket.
///
/// The numeric id is the persisted key and must stay stable across releases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum UserClass {
    BugGirlConnoisseur,
    Greeter,
    Jester,
    SoulHealer,
    FriendlyGuide,
    Deviant,
    SocialButterfly,
    Reactionary,
    ContentCreator,
    ConspiracyTheorist,
    TechSupport,
    Storyteller,
    Researcher,
    Visionary,
    WebArchiver,
    StickerCollector,
    Reader,
    GameDev,
    Artist,
}

impl UserClass {
    /// Every category in ascending id order.
    pub const ALL: [UserClass; 19] = [
        Self::BugGirlConnoisseur,
        Self::Greeter,
        Self::Jester,
        Self::SoulHealer,
        Self::FriendlyGuide,
        Self::Deviant,
        Self::SocialButterfly,
        Self::Reactionary,
        Self::ContentCreator,
        Self::ConspiracyTheorist,
        Self::TechSupport,
        Self::Storyteller,
        Self::Researcher,
        Self::Visionary,
        Self::WebArchiver,
        Self::StickerCollector,
        Self::Reader,
        Self::GameDev,
        Self::Artist,
    ];

    /// Stable persisted id.
    pub fn id(self) -> u8 {
        self as u8
    }

    pub fn from_id(id: i64) -> Option<Self> {
        usize::try_from(id)
            .ok()
            .and_then(|i| Self::ALL.get(i).copied())
    }

    /// Underscore identifier, e.g. `Soul_Healer`.
    pub fn identifier(self) -> &'static str {
        match self {
            Self::BugGirlConnoisseur => "Bug_Girl_Connoisseur",
            Self::Greeter => "Greeter",
            Self::Jester => "Jester",
            Self::SoulHealer => "Soul_Healer",
            Self::FriendlyGuide => "Friendly_Guide",
            Self::Deviant => "Deviant",
            Self::SocialButterfly => "Social_Butterfly",
            Self::Reactionary => "Reactionary",
            Self::ContentCreator => "Content_Creator",
            Self::ConspiracyTheorist => "Conspiracy_Theorist",
            Self::TechSupport => "Tech_Support",
            Self::Storyteller => "Storyteller",
            Self::Researcher => "Researcher",
            Self::Visionary => "Visionary",
            Self::WebArchiver => "Web_Archiver",
            Self::StickerCollector => "Sticker_Collector",
            Self::Reader => "Reader",
            Self::GameDev => "GameDev",
            Self::Artist => "Artist",
        }
    }

    /// Human-readable name: the identifier with underscores replaced by spaces.
    pub fn name(self) -> String {
        self.identifier().replace('_', " ")
    }
}

impl fmt::Display for UserClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name())
    }
}

impl FromStr for UserClass {
    type Err = EssenceError;

    /// Accepts `Soul_Healer`, `Soul Healer`, or any ASCII case of either.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().replace(' ', "_");
        Self::ALL
            .into_iter()
            .find(|c| c.identifier().eq_ignore_ascii_case(&wanted))
            .ok_or_else(|| EssenceError::UnknownCategory {
                name: s.to_string(),
            })
    }
}
