//! Common test utilities for building small catalogs and preferences.
use kondate::prelude::*;

/// Builds a recipe with neutral macros; tests that care about macros or
/// allergens override the fields directly.
#[allow(dead_code)]
pub fn recipe(name: &str, meal_type: MealType, tags: &[&str], calories: f64) -> Recipe {
    Recipe {
        name: name.to_string(),
        meal_type,
        dietary_tags: tags.iter().map(|t| t.to_string()).collect(),
        allergens: Vec::new(),
        calories,
        carbs: 40.0,
        protein: 15.0,
        fats: 20.0,
        ingredients: vec!["Water".to_string(), "Salt".to_string()],
    }
}

#[allow(dead_code)]
pub fn exercise(name: &str, equipment: &str, intensity: &str, category: ExerciseCategory) -> Exercise {
    Exercise {
        name: name.to_string(),
        equipment: equipment.to_string(),
        intensity: intensity.to_string(),
        category,
    }
}

/// A small, fully-controlled catalog covering every meal type and category.
#[allow(dead_code)]
pub fn tiny_catalog() -> Catalog {
    let mut egg_scramble = recipe("Egg Scramble", MealType::Breakfast, &["vegetarian"], 350.0);
    egg_scramble.allergens = vec!["dairy".to_string()];

    let mut chicken_wrap = recipe("Chicken Wrap", MealType::Lunch, &["none"], 600.0);
    chicken_wrap.allergens = vec!["gluten".to_string()];

    let recipes = vec![
        recipe(
            "Oat Bowl",
            MealType::Breakfast,
            &["vegan", "gluten_free"],
            300.0,
        ),
        egg_scramble,
        recipe("Tofu Scramble", MealType::Breakfast, &["vegan"], 400.0),
        recipe(
            "Lentil Salad",
            MealType::Lunch,
            &["vegan", "gluten_free"],
            500.0,
        ),
        chicken_wrap,
        recipe("Veggie Curry", MealType::Dinner, &["vegan"], 550.0),
        recipe(
            "Salmon Plate",
            MealType::Dinner,
            &["pescatarian", "gluten_free"],
            650.0,
        ),
    ];

    let exercises = vec![
        exercise("Push-ups", "None", "Medium", ExerciseCategory::UpperBody),
        exercise(
            "Pike Push-ups",
            "None",
            "Medium",
            ExerciseCategory::UpperBody,
        ),
        exercise("Squats", "None", "Medium", ExerciseCategory::LowerBody),
        exercise("Plank", "None", "Medium", ExerciseCategory::Core),
        exercise("Jumping Jacks", "None", "Medium", ExerciseCategory::Cardio),
        exercise("Bench Press", "Barbell", "High", ExerciseCategory::UpperBody),
    ];

    Catalog::new(recipes, exercises).expect("tiny catalog is valid")
}

/// Preferences matching the vegan / bodyweight part of the tiny catalog.
#[allow(dead_code)]
pub fn vegan_prefs(daily_calories: f64) -> UserPreferences {
    UserPreferences::from_raw_input("vegan", "", daily_calories, "None", "Medium")
        .expect("valid preferences")
}
