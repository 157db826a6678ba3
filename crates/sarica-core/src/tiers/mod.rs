//! Display tiers layered on an integer level: step (1) < stage (9) < realm (27) < path (81).
//!
//! Every tier is a floor division of `level - 1`, so level 0 lands on the
//! Hollow sentinel and level 244 on the terminal Unbound value.

pub mod path;
pub mod realm;
pub mod stage;

pub use path::Path;
pub use realm::{Realm, RealmProgress};
pub use stage::Stage;

use crate::constants::LEVELS_PER_STAGE;

/// Floor-divided tier index for a level. Level 0 yields -1 (Hollow).
pub(crate) fn tier_index(level: u32, width: u32) -> i64 {
    (i64::from(level) - 1).div_euclid(i64::from(width))
}

/// Step within the current stage, `((level - 1) mod 9) + 1`, always in 1..=9.
pub fn step(level: u32) -> u32 {
    // rem_euclid keeps level 0 on step 9 rather than going negative.
    let step = (i64::from(level) - 1).rem_euclid(i64::from(LEVELS_PER_STAGE)) + 1;
    step as u32
}
