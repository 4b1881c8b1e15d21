pub mod exercise;
pub mod loader;
pub mod recipe;

pub use exercise::*;
pub use loader::*;
pub use recipe::*;
