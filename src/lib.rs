//! # Kondate - Weekly Meal and Exercise Plan Engine
//!
//! **Kondate** generates 7-day meal-and-exercise plans from a static catalog of
//! recipes and exercises. Catalog items are filtered against user-supplied
//! dietary, allergy, equipment and intensity constraints, ranked toward a daily
//! calorie target, and picked with bounded randomness so that repeated plans
//! stay varied without drifting away from the target.
//!
//! ## Core Workflow
//!
//! The engine is data-agnostic: it consumes any catalog of [`Recipe`] and
//! [`Exercise`] records and never mutates it. The primary workflow is:
//!
//! 1.  **Load a Catalog**: Use the embedded tables via [`Catalog::builtin`], parse
//!     your own JSON tables with [`Catalog::from_json`], or build records
//!     programmatically and validate them with [`Catalog::new`].
//! 2.  **Collect Preferences**: Construct [`UserPreferences`] from raw user input
//!     (comma-separated tag lists, a calorie target, equipment and intensity
//!     strings) with [`UserPreferences::from_raw_input`].
//! 3.  **Generate**: Create a [`Planner`] over the catalog and call
//!     [`Planner::generate_weekly_plan`] with an injected random generator. A
//!     seeded generator reproduces the exact same plan; every slot always
//!     resolves, falling back to a visibly-named placeholder when no catalog
//!     item satisfies the constraints.
//! 4.  **Present**: Render the returned [`WeeklyPlan`] with
//!     [`PlanFormatter::format_plan`], or serialize it with `serde`.
//!
//! ## Quick Start
//!
//! ```rust
//! use kondate::prelude::*;
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//!
//! fn main() -> Result<()> {
//!     // 1. Load the embedded catalog (294 recipes, 1041 exercises).
//!     let catalog = Catalog::builtin();
//!
//!     // 2. Parse raw user input into preferences.
//!     let prefs = UserPreferences::from_raw_input(
//!         "vegan, gluten_free", // dietary tags
//!         "nuts",               // allergies
//!         1800.0,               // daily calorie target
//!         "None",               // equipment
//!         "Medium",             // intensity
//!     )?;
//!
//!     // 3. Generate a reproducible 7-day plan.
//!     let mut rng = StdRng::seed_from_u64(42);
//!     let planner = Planner::new(&catalog);
//!     let plan = planner.generate_weekly_plan(&prefs, &mut rng);
//!
//!     // 4. Render it.
//!     println!("{}", PlanFormatter::format_plan(&plan));
//!     Ok(())
//! }
//! ```
//!
//! ## Selection Model
//!
//! Meals and exercises are resolved differently:
//!
//! - **Meals** are ranked by absolute distance between their calories and a
//!   per-meal target (the daily target split into equal thirds), then one is
//!   drawn uniformly from the top [`MEAL_WINDOW`](engine::MEAL_WINDOW) closest
//!   candidates. Always taking rank #1 would make every breakfast identical;
//!   drawing from the whole filtered set would ignore the target entirely.
//! - **Exercises** have no ranking dimension, so one is drawn uniformly from
//!   the full filtered set.
//!
//! An empty filtered set is not an error: the [`Selector`](engine::selector)
//! reports [`Selection::NotFound`](engine::Selection) and the planner
//! substitutes a zero-value placeholder record, so the returned plan always
//! has all 7 days × 7 slots populated.

pub mod catalog;
pub mod engine;
pub mod error;
pub mod plan;
pub mod preferences;
pub mod prelude;
pub mod render;

pub use catalog::{Catalog, Exercise, ExerciseCategory, MealType, Recipe};
pub use engine::Planner;
pub use plan::{DailyPlan, WeeklyPlan};
pub use preferences::UserPreferences;
pub use render::PlanFormatter;
