use thiserror::Error;

/// Errors that can occur while loading or validating a catalog.
#[derive(Error, Debug, Clone)]
pub enum CatalogError {
    #[error("Failed to parse catalog JSON: {0}")]
    JsonParseError(String),

    #[error("Recipe name '{0}' appears more than once in the catalog")]
    DuplicateRecipeName(String),

    #[error("Recipe '{name}' has a negative {field} value: {value}")]
    NegativeNutrition {
        name: String,
        field: &'static str,
        value: f64,
    },
}

/// Errors that can occur when turning raw user input into `UserPreferences`.
#[derive(Error, Debug, Clone)]
pub enum PreferenceError {
    #[error("Daily calorie target must be a non-negative number, got {0}")]
    InvalidCalorieTarget(f64),
}
