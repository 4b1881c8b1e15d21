use serde::{Deserialize, Serialize};
use std::fmt;

/// The meal slot a recipe belongs to. Stored as snake_case in catalog tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MealType {
    Breakfast,
    Lunch,
    Dinner,
}

impl MealType {
    /// All meal slots, in the order they are filled per day.
    pub const ALL: [MealType; 3] = [MealType::Breakfast, MealType::Lunch, MealType::Dinner];

    /// The canonical catalog label for this meal type.
    pub fn as_str(&self) -> &'static str {
        match self {
            MealType::Breakfast => "breakfast",
            MealType::Lunch => "lunch",
            MealType::Dinner => "dinner",
        }
    }
}

impl fmt::Display for MealType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single immutable recipe record from the catalog.
///
/// `dietary_tags` and `allergens` are disjoint concerns: a recipe suits a user
/// only if it carries every requested tag and none of the excluded allergens.
/// `ingredients` are display-only and keep their catalog order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recipe {
    pub name: String,
    pub meal_type: MealType,
    #[serde(default)]
    pub dietary_tags: Vec<String>,
    #[serde(default)]
    pub allergens: Vec<String>,
    pub calories: f64,
    pub carbs: f64,
    pub protein: f64,
    pub fats: f64,
    #[serde(default)]
    pub ingredients: Vec<String>,
}

impl Recipe {
    /// The zero-value substitute for a meal slot no catalog item could fill.
    /// Its name is the caller-visible failure signal; nothing ever raises.
    pub fn placeholder(meal_type: MealType) -> Self {
        Self {
            name: format!("No suitable {meal_type} found"),
            meal_type,
            dietary_tags: Vec::new(),
            allergens: Vec::new(),
            calories: 0.0,
            carbs: 0.0,
            protein: 0.0,
            fats: 0.0,
            ingredients: Vec::new(),
        }
    }

    /// A context-free macro-balance heuristic, higher is better.
    ///
    /// Peaks at exactly 100 for carbs=50, protein=20, fats=30. Exposed as a
    /// derived attribute for inspection and ranking extensions; baseline
    /// selection does not consult it.
    pub fn balance_score(&self) -> f64 {
        100.0 - (self.carbs - 50.0).abs() - (self.protein - 20.0).abs() - (self.fats - 30.0).abs()
    }
}

impl fmt::Display for Recipe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} [{}]: {} kcal | {}",
            self.name,
            self.meal_type,
            self.calories,
            self.ingredients.join(", ")
        )
    }
}
