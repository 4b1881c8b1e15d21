//! Assembles the 7-day plan, one slot at a time.

use crate::catalog::{Catalog, Exercise, ExerciseCategory, MealType, Recipe};
use crate::engine::matcher;
use crate::engine::ranker;
use crate::engine::selector::{self, MEAL_WINDOW, Selection};
use crate::plan::{DailyPlan, WeeklyPlan};
use crate::preferences::UserPreferences;
use rand::Rng;

/// Generates weekly plans over a shared, read-only catalog.
///
/// Resolution is single-pass per slot with no retries or backtracking: filter
/// the catalog, rank (meals only), draw, and fall back to a placeholder when
/// the filtered set is empty. There is no fatal-error path; every call
/// returns a fully populated 7-day plan.
pub struct Planner<'a> {
    catalog: &'a Catalog,
}

impl<'a> Planner<'a> {
    pub fn new(catalog: &'a Catalog) -> Self {
        Self { catalog }
    }

    /// Builds a plan for days "Day 1" through "Day 7".
    ///
    /// The daily calorie target is split into equal thirds across the meals.
    /// Slots are resolved in a fixed order (three meals, then the four
    /// exercise categories, day by day), so a seeded `rng` reproduces the
    /// same plan byte for byte.
    pub fn generate_weekly_plan<R: Rng + ?Sized>(
        &self,
        prefs: &UserPreferences,
        rng: &mut R,
    ) -> WeeklyPlan {
        let per_meal_calories = prefs.daily_calories / 3.0;
        let mut week = WeeklyPlan::new();

        for day in 1..=7 {
            let [breakfast, lunch, dinner] =
                MealType::ALL.map(|meal| self.pick_meal(meal, per_meal_calories, prefs, rng));
            let [upper, lower, core, cardio] =
                ExerciseCategory::ALL.map(|category| self.pick_exercise(category, prefs, rng));

            week.push(
                format!("Day {day}"),
                DailyPlan {
                    breakfast,
                    lunch,
                    dinner,
                    upper,
                    lower,
                    core,
                    cardio,
                },
            );
        }

        week
    }

    fn pick_meal<R: Rng + ?Sized>(
        &self,
        meal_type: MealType,
        target_calories: f64,
        prefs: &UserPreferences,
        rng: &mut R,
    ) -> Recipe {
        let candidates: Vec<&Recipe> = self
            .catalog
            .recipes()
            .iter()
            .filter(|r| r.meal_type == meal_type)
            .filter(|r| matcher::matches_recipe(r, &prefs.dietary_tags, &prefs.allergies))
            .collect();

        let ranked = ranker::rank_by_calorie_distance(candidates, target_calories);

        match selector::select_within_window(&ranked, MEAL_WINDOW, rng) {
            Selection::Found(recipe) => (*recipe).clone(),
            Selection::NotFound => Recipe::placeholder(meal_type),
        }
    }

    fn pick_exercise<R: Rng + ?Sized>(
        &self,
        category: ExerciseCategory,
        prefs: &UserPreferences,
        rng: &mut R,
    ) -> Exercise {
        let filtered: Vec<&Exercise> = self
            .catalog
            .exercises()
            .iter()
            .filter(|e| e.category == category)
            .filter(|e| matcher::matches_exercise(e, &prefs.equipment, &prefs.intensity))
            .collect();

        match selector::select_uniform(&filtered, rng) {
            Selection::Found(exercise) => (*exercise).clone(),
            Selection::NotFound => {
                Exercise::placeholder(category, &prefs.equipment, &prefs.intensity)
            }
        }
    }
}
