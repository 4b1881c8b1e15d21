use serde::{Deserialize, Serialize};
use std::fmt;

/// The body-area slot an exercise fills. Stored as snake_case in catalog tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExerciseCategory {
    UpperBody,
    LowerBody,
    Core,
    Cardio,
}

impl ExerciseCategory {
    /// All categories, in the order they are filled per day.
    pub const ALL: [ExerciseCategory; 4] = [
        ExerciseCategory::UpperBody,
        ExerciseCategory::LowerBody,
        ExerciseCategory::Core,
        ExerciseCategory::Cardio,
    ];

    /// The canonical catalog label for this category.
    pub fn as_str(&self) -> &'static str {
        match self {
            ExerciseCategory::UpperBody => "upper_body",
            ExerciseCategory::LowerBody => "lower_body",
            ExerciseCategory::Core => "core",
            ExerciseCategory::Cardio => "cardio",
        }
    }
}

impl fmt::Display for ExerciseCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single immutable exercise record from the catalog.
///
/// `equipment` and `intensity` are open vocabularies matched by exact
/// case-insensitive equality against the user's request (catalog values are
/// `"None"`, `"Dumbbells"`, ... and `"Low"` / `"Medium"` / `"High"`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Exercise {
    pub name: String,
    pub equipment: String,
    pub intensity: String,
    pub category: ExerciseCategory,
}

impl Exercise {
    /// The substitute for an exercise slot no catalog item could fill. It
    /// carries the requested equipment and intensity verbatim so the rendered
    /// plan shows what was asked for.
    pub fn placeholder(category: ExerciseCategory, equipment: &str, intensity: &str) -> Self {
        Self {
            name: format!("No suitable {category} exercise"),
            equipment: equipment.to_string(),
            intensity: intensity.to_string(),
            category,
        }
    }
}

impl fmt::Display for Exercise {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} [{}] - {} ({})",
            self.name, self.category, self.intensity, self.equipment
        )
    }
}
