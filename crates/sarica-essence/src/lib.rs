//! # sarica-essence
//!
//! Member progression engine.
//! An `Essence` holds total experience, a level in `[0, 244]`, and a ledger of
//! per-category points. Awards move experience along a power curve and
//! recompute a softmax-style affinity for every category the member holds.

pub mod alignment_table;
pub mod curve;
pub mod essence;
pub mod grade;
pub mod ledger;
pub mod standing;
pub mod traits;

pub use alignment_table::AlignmentTable;
pub use essence::{Essence, LevelChange};
pub use grade::{affinity_to_grade, Grade};
pub use ledger::{AwardOutcome, ClassProgress};
pub use standing::{ClassStanding, Standing};
pub use traits::EssenceStore;
