use crate::error::PreferenceError;
use ahash::AHashSet;

/// One user's constraints for a single plan-generation request.
///
/// Constructed per request and discarded after use. Matching is advisory:
/// unrecognized tags, equipment or intensity values are not errors, they
/// simply match nothing and surface as placeholder slots in the plan.
#[derive(Debug, Clone)]
pub struct UserPreferences {
    /// Dietary tags a recipe must carry all of (e.g. "vegan", "gluten_free").
    pub dietary_tags: AHashSet<String>,
    /// Allergens a recipe must carry none of (e.g. "dairy", "nuts").
    pub allergies: AHashSet<String>,
    /// Daily calorie target, split into equal thirds across the three meals.
    pub daily_calories: f64,
    /// Required equipment, matched case-insensitively (e.g. "None", "Dumbbells").
    pub equipment: String,
    /// Required intensity, matched case-insensitively ("Low", "Medium", "High").
    pub intensity: String,
}

impl UserPreferences {
    /// Parses raw console-style input into preferences.
    ///
    /// `dietary` and `allergies` are comma-separated lists; entries are
    /// trimmed, lowercased and empties dropped, so `"vegan, ,Gluten_Free"`
    /// yields `{"vegan", "gluten_free"}`. The calorie target must be finite
    /// and non-negative; everything else is accepted as-is.
    pub fn from_raw_input(
        dietary: &str,
        allergies: &str,
        daily_calories: f64,
        equipment: &str,
        intensity: &str,
    ) -> Result<Self, PreferenceError> {
        if !daily_calories.is_finite() || daily_calories < 0.0 {
            return Err(PreferenceError::InvalidCalorieTarget(daily_calories));
        }

        Ok(Self {
            dietary_tags: parse_csv_set(dietary),
            allergies: parse_csv_set(allergies),
            daily_calories,
            equipment: equipment.trim().to_string(),
            intensity: intensity.trim().to_string(),
        })
    }
}

fn parse_csv_set(raw: &str) -> AHashSet<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(str::to_ascii_lowercase)
        .collect()
}
