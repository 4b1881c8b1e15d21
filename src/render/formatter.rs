use crate::plan::{DailyPlan, WeeklyPlan};

/// Formats assembled plans into human-readable text.
pub struct PlanFormatter;

impl PlanFormatter {
    /// Renders a full weekly plan, one labeled block per day.
    pub fn format_plan(plan: &WeeklyPlan) -> String {
        let mut out = String::new();
        for entry in plan.iter() {
            out.push_str(&entry.label);
            out.push_str(":\n");
            out.push_str(&Self::format_day(&entry.plan));
            out.push('\n');
        }
        out
    }

    /// Renders a single day: the three meals, then the exercise block.
    pub fn format_day(day: &DailyPlan) -> String {
        format!(
            "  Breakfast: {}\n  Lunch: {}\n  Dinner: {}\n  Exercises:\n    \
             Upper Body: {}\n    Lower Body: {}\n    Core: {}\n    Cardio: {}\n",
            day.breakfast, day.lunch, day.dinner, day.upper, day.lower, day.core, day.cardio
        )
    }
}
