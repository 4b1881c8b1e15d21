//! Pure constraint predicates over immutable catalog records.
//!
//! Matching is advisory filtering, not validation: a mismatch returns `false`,
//! never an error. All comparisons are ASCII case-insensitive and exact; there
//! is no substring, synonym or partial-credit matching anywhere.

use crate::catalog::{Exercise, Recipe};
use ahash::AHashSet;

/// Whether a recipe satisfies the user's dietary constraints.
///
/// True iff the recipe carries every required tag AND none of the excluded
/// allergens. An empty `required_tags` set passes every recipe; the empty set
/// is a subset of anything.
pub fn matches_recipe(
    recipe: &Recipe,
    required_tags: &AHashSet<String>,
    excluded_allergens: &AHashSet<String>,
) -> bool {
    let carries_all_tags = required_tags.iter().all(|tag| {
        recipe
            .dietary_tags
            .iter()
            .any(|t| t.eq_ignore_ascii_case(tag))
    });

    let carries_no_allergen = !recipe.allergens.iter().any(|allergen| {
        excluded_allergens
            .iter()
            .any(|a| a.eq_ignore_ascii_case(allergen))
    });

    carries_all_tags && carries_no_allergen
}

/// Whether an exercise matches the requested equipment and intensity.
pub fn matches_exercise(exercise: &Exercise, equipment: &str, intensity: &str) -> bool {
    exercise.equipment.eq_ignore_ascii_case(equipment)
        && exercise.intensity.eq_ignore_ascii_case(intensity)
}
