pub mod matcher;
pub mod planner;
pub mod ranker;
pub mod selector;

pub use matcher::{matches_exercise, matches_recipe};
pub use planner::Planner;
pub use ranker::rank_by_calorie_distance;
pub use selector::{MEAL_WINDOW, Selection, select_uniform, select_within_window};
