//! Per-category alignment overrides.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::errors::ConfigError;
use crate::taxonomy::{Alignment, UserClass};

/// Maps category names to alignment names, e.g.
///
/// ```toml
/// [alignments]
/// Soul_Healer = "Celestial"
/// "Tech Support" = "Artificial"
/// ```
///
/// Categories without an entry keep the default alignment.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(transparent)]
pub struct AlignmentConfig {
    pub overrides: BTreeMap<String, String>,
}

impl AlignmentConfig {
    /// Parse every override into typed pairs.
    pub fn resolve(&self) -> Result<Vec<(UserClass, Alignment)>, ConfigError> {
        self.overrides
            .iter()
            .map(|(class, alignment)| {
                let class = class.parse::<UserClass>().map_err(|e| ConfigError::InvalidValue {
                    field: format!("alignments.{class}"),
                    message: e.to_string(),
                })?;
                let alignment =
                    alignment
                        .parse::<Alignment>()
                        .map_err(|e| ConfigError::InvalidValue {
                            field: format!("alignments.{}", class.identifier()),
                            message: e.to_string(),
                        })?;
                Ok((class, alignment))
            })
            .collect()
    }
}
