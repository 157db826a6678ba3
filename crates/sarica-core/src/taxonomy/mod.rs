//! Closed category taxonomy: the point buckets a member accrues and their alignments.

pub mod alignment;
pub mod user_class;

pub use alignment::Alignment;
pub use user_class::UserClass;
