use crate::catalog::{Exercise, Recipe};
use crate::error::CatalogError;
use ahash::AHashSet;
use std::fs;

/// The embedded catalog tables, extracted as plain data so record volume stays
/// decoupled from engine logic.
const BUILTIN_RECIPES: &str = include_str!("../../data/recipes.json");
const BUILTIN_EXERCISES: &str = include_str!("../../data/exercises.json");

/// The fixed, read-only collection of all known recipes and exercises.
///
/// A catalog is validated once at construction and never mutated afterwards;
/// the engine only iterates it. The order of the backing vectors is the
/// catalog order, which breaks ranking ties deterministically.
#[derive(Debug, Clone)]
pub struct Catalog {
    recipes: Vec<Recipe>,
    exercises: Vec<Exercise>,
}

impl Catalog {
    /// Builds a catalog from pre-constructed records, validating recipe-name
    /// uniqueness and non-negative nutrition values.
    pub fn new(recipes: Vec<Recipe>, exercises: Vec<Exercise>) -> Result<Self, CatalogError> {
        let mut seen: AHashSet<&str> = AHashSet::with_capacity(recipes.len());
        for recipe in &recipes {
            if !seen.insert(&recipe.name) {
                return Err(CatalogError::DuplicateRecipeName(recipe.name.clone()));
            }
            for (field, value) in [
                ("calories", recipe.calories),
                ("carbs", recipe.carbs),
                ("protein", recipe.protein),
                ("fats", recipe.fats),
            ] {
                if value < 0.0 {
                    return Err(CatalogError::NegativeNutrition {
                        name: recipe.name.clone(),
                        field,
                        value,
                    });
                }
            }
        }

        Ok(Self { recipes, exercises })
    }

    /// Parses two JSON arrays (recipes, exercises) into a validated catalog.
    pub fn from_json(recipes_json: &str, exercises_json: &str) -> Result<Self, CatalogError> {
        let recipes: Vec<Recipe> = serde_json::from_str(recipes_json)
            .map_err(|e| CatalogError::JsonParseError(e.to_string()))?;
        let exercises: Vec<Exercise> = serde_json::from_str(exercises_json)
            .map_err(|e| CatalogError::JsonParseError(e.to_string()))?;
        Self::new(recipes, exercises)
    }

    /// Loads a catalog from two JSON files on disk.
    pub fn from_files(
        recipes_path: &str,
        exercises_path: &str,
    ) -> Result<Self, Box<dyn std::error::Error>> {
        let recipes_json = fs::read_to_string(recipes_path)?;
        let exercises_json = fs::read_to_string(exercises_path)?;
        Ok(Self::from_json(&recipes_json, &exercises_json)?)
    }

    /// The catalog embedded in the crate: 294 recipes and 1041 exercises.
    pub fn builtin() -> Self {
        Self::from_json(BUILTIN_RECIPES, BUILTIN_EXERCISES)
            .expect("embedded catalog tables are valid")
    }

    /// All recipes, in catalog order.
    pub fn recipes(&self) -> &[Recipe] {
        &self.recipes
    }

    /// All exercises, in catalog order.
    pub fn exercises(&self) -> &[Exercise] {
        &self.exercises
    }
}
