//! Letter grades for affinities.
//!
//! ```text
//! affinity < 1          -> "X"
//! l = log3(affinity)
//! tier = floor(l)       -> F E D C B A S SS SSS, tier >= 9 -> "Z"
//! sign = floor(frac(l) * 3) -> "-" "" "+"
//! ```

use std::fmt;

use serde::{Serialize, Serializer};

use sarica_core::constants::GRADE_LOG_BASE;

const LETTERS: [&str; 9] = ["F", "E", "D", "C", "B", "A", "S", "SS", "SSS"];
const SIGNS: [&str; 3] = ["-", "", "+"];

/// First tier that no longer has a letter.
const OFF_SCALE_TIER: i32 = LETTERS.len() as i32;

/// Discrete display form of an affinity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Grade {
    /// Affinity below 1: no meaningful affinity ("X").
    Unranked,
    /// `tier` indexes F..SSS, `sign` indexes minus/plain/plus.
    Ranked { tier: u8, sign: u8 },
    /// Past SSS+ ("Z").
    OffScale,
}

impl Grade {
    pub fn is_ranked(self) -> bool {
        matches!(self, Self::Ranked { .. })
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unranked => f.write_str("X"),
            Self::OffScale => f.write_str("Z"),
            // A hand-built rank past the table is shown as off-scale.
            Self::Ranked { tier, sign } => {
                match (LETTERS.get(usize::from(*tier)), SIGNS.get(usize::from(*sign))) {
                    (Some(letter), Some(sign)) => write!(f, "{letter}{sign}"),
                    _ => f.write_str("Z"),
                }
            }
        }
    }
}

impl Serialize for Grade {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Map an affinity to its grade. Total: zero, negative, and NaN are `Unranked`.
pub fn affinity_to_grade(affinity: f64) -> Grade {
    if !(affinity >= 1.0) {
        return Grade::Unranked;
    }
    if !affinity.is_finite() {
        return Grade::OffScale;
    }

    let l = affinity.log(GRADE_LOG_BASE);
    let mut tier = l.floor().min(f64::from(OFF_SCALE_TIER)) as i32;

    // log() can land a hair either side of an exact power of three; the
    // integer powers are exact, so settle the tier against them.
    if affinity < GRADE_LOG_BASE.powi(tier) {
        tier -= 1;
    } else if tier < OFF_SCALE_TIER && affinity >= GRADE_LOG_BASE.powi(tier + 1) {
        tier += 1;
    }

    if tier >= OFF_SCALE_TIER {
        return Grade::OffScale;
    }

    let sign = ((l - f64::from(tier)) * 3.0).floor().clamp(0.0, 2.0) as u8;
    Grade::Ranked {
        tier: tier as u8,
        sign,
    }
}
