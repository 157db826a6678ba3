//! Per-category point ledger and whole-member affinity recomputation.

use sarica_core::constants::AFFINITY_POINT_DIVISOR;
use sarica_core::errors::EssenceError;
use sarica_core::taxonomy::UserClass;

use crate::essence::{Essence, LevelChange};
use crate::grade::{affinity_to_grade, Grade};

/// A member's standing in one category. Created lazily on the first award.
#[derive(Debug, Clone, PartialEq)]
pub struct ClassProgress {
    pub(crate) category: UserClass,
    pub(crate) points: i64,
    pub(crate) affinity: f64,
    pub(crate) dirty: bool,
}

impl ClassProgress {
    fn new(category: UserClass) -> Self {
        Self {
            category,
            points: 0,
            affinity: 0.0,
            dirty: false,
        }
    }

    pub fn category(&self) -> UserClass {
        self.category
    }

    /// Lifetime contribution. Never decreases.
    pub fn points(&self) -> i64 {
        self.points
    }

    pub fn affinity(&self) -> f64 {
        self.affinity
    }

    pub fn grade(&self) -> Grade {
        affinity_to_grade(self.affinity)
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }
}

/// What a single award did to the record.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AwardOutcome {
    pub category: UserClass,
    pub amount: i64,
    /// Category points after the award.
    pub points: i64,
    pub level: LevelChange,
}

impl Essence {
    /// Award `amount` to `category`: the sole way a member's state changes.
    ///
    /// The signed amount moves experience; the category's lifetime points
    /// only ever grow (a negative award adds nothing to them). Every
    /// category's affinity is recomputed and the list is re-sorted by
    /// points, highest first, with ties keeping their prior order.
    pub fn award(&mut self, category: UserClass, amount: i64) -> AwardOutcome {
        let level = self.apply(amount);

        let index = match self.classes.iter().position(|c| c.category == category) {
            Some(index) => index,
            None => {
                self.classes.push(ClassProgress::new(category));
                self.classes.len() - 1
            }
        };
        let class = &mut self.classes[index];
        class.points = class.points.saturating_add(amount.max(0));
        class.dirty = true;
        let points = class.points;

        recompute_affinities(&mut self.classes);
        self.classes.sort_by(|a, b| b.points.cmp(&a.points));

        AwardOutcome {
            category,
            amount,
            points,
            level,
        }
    }

    /// Award by category name. Unknown names are rejected rather than creating a bucket.
    pub fn award_named(&mut self, category: &str, amount: i64) -> Result<AwardOutcome, EssenceError> {
        let category = category.parse::<UserClass>()?;
        Ok(self.award(category, amount))
    }
}

/// Numerically stable softmax over point totals, scaled by absolute magnitude.
///
/// ```text
/// m = max(p)
/// e_i = exp(p_i - m)
/// affinity_i = (e_i / sum(e)) * p_i / 100
/// ```
pub fn recompute_affinities(classes: &mut [ClassProgress]) {
    let Some(max) = classes.iter().map(|c| c.points).max() else {
        return;
    };
    let max = max as f64;

    let exps: Vec<f64> = classes
        .iter()
        .map(|c| (c.points as f64 - max).exp())
        .collect();
    let sum: f64 = exps.iter().sum();

    for (class, e) in classes.iter_mut().zip(exps) {
        class.affinity = (e / sum) * class.points as f64 / AFFINITY_POINT_DIVISOR;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn progress(category: UserClass, points: i64) -> ClassProgress {
        ClassProgress {
            points,
            ..ClassProgress::new(category)
        }
    }

    #[test]
    fn single_class_affinity_is_points_over_hundred() {
        let mut classes = vec![progress(UserClass::Reader, 250)];
        recompute_affinities(&mut classes);
        assert!((classes[0].affinity - 2.5).abs() < 1e-12);
    }

    #[test]
    fn equal_points_split_evenly() {
        let mut classes = vec![
            progress(UserClass::Reader, 200),
            progress(UserClass::Artist, 200),
        ];
        recompute_affinities(&mut classes);
        assert!((classes[0].affinity - 1.0).abs() < 1e-12);
        assert!((classes[1].affinity - 1.0).abs() < 1e-12);
    }

    #[test]
    fn empty_ledger_is_a_no_op() {
        let mut classes: Vec<ClassProgress> = Vec::new();
        recompute_affinities(&mut classes);
        assert!(classes.is_empty());
    }
}
