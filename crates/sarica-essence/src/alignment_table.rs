use std::collections::HashMap;

use sarica_core::config::AlignmentConfig;
use sarica_core::errors::ConfigError;
use sarica_core::taxonomy::{Alignment, UserClass};

/// Category -> alignment lookup.
///
/// Every category starts as `Primordial`, the only alignment the bot has
/// ever assigned. The per-category mapping is expected to be filled in
/// through `[alignments]` in `sarica.toml`.
#[derive(Debug, Clone, Default)]
pub struct AlignmentTable {
    overrides: HashMap<UserClass, Alignment>,
}

impl AlignmentTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_config(config: &AlignmentConfig) -> Result<Self, ConfigError> {
        Ok(Self {
            overrides: config.resolve()?.into_iter().collect(),
        })
    }

    pub fn with(mut self, category: UserClass, alignment: Alignment) -> Self {
        self.overrides.insert(category, alignment);
        self
    }

    pub fn alignment(&self, category: UserClass) -> Alignment {
        self.overrides.get(&category).copied().unwrap_or_default()
    }
}
