//! Read-only snapshot of a member's progression for display adapters.

use serde::Serialize;

use crate::alignment_table::AlignmentTable;
use crate::essence::Essence;
use crate::grade::Grade;

/// One `(category, alignment, grade)` row.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClassStanding {
    pub category: String,
    pub alignment: String,
    pub grade: Grade,
    pub points: i64,
}

/// Everything a standing/profile command renders.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Standing {
    pub level: u32,
    pub experience: i64,
    pub exp_to_next: i64,
    pub exp_fraction: f64,
    pub exp_percent: String,
    pub path: String,
    pub realm: String,
    pub realm_progress: String,
    pub stage: String,
    pub step: u32,
    /// False on the Hollow and Unbound realms.
    pub has_progress: bool,
    /// False on the Hollow and Unbound stages.
    pub has_steps: bool,
    /// Ordered by points, highest first.
    pub classes: Vec<ClassStanding>,
}

impl Standing {
    pub fn of(essence: &Essence, alignments: &AlignmentTable) -> Self {
        let realm = essence.realm();
        let stage = essence.stage();
        Self {
            level: essence.level(),
            experience: essence.experience(),
            exp_to_next: essence.exp_to_next(),
            exp_fraction: essence.exp_fraction(),
            exp_percent: essence.exp_percent_string(),
            path: essence.path().to_string(),
            realm: realm.to_string(),
            realm_progress: essence.realm_progress().to_string(),
            stage: stage.to_string(),
            step: essence.step(),
            has_progress: realm.has_progress(),
            has_steps: stage.has_steps(),
            classes: essence
                .classes()
                .iter()
                .map(|c| ClassStanding {
                    category: c.category().name(),
                    alignment: alignments.alignment(c.category()).to_string(),
                    grade: c.grade(),
                    points: c.points(),
                })
                .collect(),
        }
    }

    /// `(category_name, alignment, grade)` triples in display order.
    pub fn class_triples(&self) -> Vec<(String, String, String)> {
        self.classes
            .iter()
            .map(|c| (c.category.clone(), c.alignment.clone(), c.grade.to_string()))
            .collect()
    }
}
