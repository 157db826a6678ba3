//! SQL for the three tables. Every function takes a plain `&Connection` so it
//! runs equally on a pooled reader, the writer, or inside a transaction.

pub mod class_points;
pub mod essences;
pub mod settings;
