//! The assembled plan structures returned to the caller.

use crate::catalog::{Exercise, Recipe};
use serde::Serialize;

/// One day's selections: three meals plus four exercise slots.
///
/// Every field is always populated, with a real catalog item or a
/// placeholder. Never mutated after assembly.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DailyPlan {
    pub breakfast: Recipe,
    pub lunch: Recipe,
    pub dinner: Recipe,
    pub upper: Exercise,
    pub lower: Exercise,
    pub core: Exercise,
    pub cardio: Exercise,
}

/// A labeled day within a weekly plan.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DayEntry {
    pub label: String,
    pub plan: DailyPlan,
}

/// A day-ordered mapping from label ("Day 1" .. "Day 7") to daily plan.
///
/// Insertion order is day order and is preserved through iteration and
/// serialization. Built once per request; the caller owns it afterwards.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct WeeklyPlan {
    days: Vec<DayEntry>,
}

impl WeeklyPlan {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a day under the next position in day order.
    pub fn push(&mut self, label: String, plan: DailyPlan) {
        self.days.push(DayEntry { label, plan });
    }

    /// The day's plan for an exact label, if present.
    pub fn get(&self, label: &str) -> Option<&DailyPlan> {
        self.days
            .iter()
            .find(|entry| entry.label == label)
            .map(|entry| &entry.plan)
    }

    /// Iterates days in insertion (day) order.
    pub fn iter(&self) -> impl Iterator<Item = &DayEntry> {
        self.days.iter()
    }

    pub fn len(&self) -> usize {
        self.days.len()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }
}

impl<'a> IntoIterator for &'a WeeklyPlan {
    type Item = &'a DayEntry;
    type IntoIter = std::slice::Iter<'a, DayEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.days.iter()
    }
}
