//! Prelude module for convenient imports
//!
//! Re-exports the most commonly used types from the kondate crate. Import
//! this module to get access to the core functionality without having to
//! import each type individually.
//!
//! # Example
//!
//! ```rust
//! use kondate::prelude::*;
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//!
//! # fn run_example() -> Result<()> {
//! let catalog = Catalog::builtin();
//! let prefs = UserPreferences::from_raw_input("vegan", "", 1500.0, "None", "Medium")?;
//!
//! let mut rng = StdRng::seed_from_u64(7);
//! let plan = Planner::new(&catalog).generate_weekly_plan(&prefs, &mut rng);
//!
//! println!("{}", PlanFormatter::format_plan(&plan));
//! # Ok(())
//! # }
//! ```

// Catalog records and loader
pub use crate::catalog::{Catalog, Exercise, ExerciseCategory, MealType, Recipe};

// Engine
pub use crate::engine::{MEAL_WINDOW, Planner, Selection};

// Plan structures
pub use crate::plan::{DailyPlan, DayEntry, WeeklyPlan};

// Preferences
pub use crate::preferences::UserPreferences;

// Error types
pub use crate::error::{CatalogError, PreferenceError};

// Plan rendering
pub use crate::render::PlanFormatter;

// Result type alias for convenience
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;
