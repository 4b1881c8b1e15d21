//! Unit tests for catalog records, preferences and error types.
mod common;
use common::*;
use kondate::prelude::*;

#[test]
fn test_recipe_display() {
    let r = recipe("Oat Bowl", MealType::Breakfast, &["vegan"], 300.0);
    assert_eq!(
        format!("{}", r),
        "Oat Bowl [breakfast]: 300 kcal | Water, Salt"
    );
}

#[test]
fn test_exercise_display() {
    let e = exercise("Push-ups", "None", "Medium", ExerciseCategory::UpperBody);
    assert_eq!(format!("{}", e), "Push-ups [upper_body] - Medium (None)");
}

#[test]
fn test_balance_score_maximum() {
    let mut r = recipe("Ideal", MealType::Lunch, &[], 500.0);
    r.carbs = 50.0;
    r.protein = 20.0;
    r.fats = 30.0;
    assert_eq!(r.balance_score(), 100.0);
}

#[test]
fn test_balance_score_penalizes_distance() {
    let mut r = recipe("Skewed", MealType::Lunch, &[], 500.0);
    r.carbs = 60.0; // +10 off
    r.protein = 15.0; // 5 off
    r.fats = 30.0;
    assert_eq!(r.balance_score(), 85.0);
}

#[test]
fn test_recipe_placeholder_shape() {
    let p = Recipe::placeholder(MealType::Dinner);
    assert_eq!(p.name, "No suitable dinner found");
    assert_eq!(p.meal_type, MealType::Dinner);
    assert_eq!(p.calories, 0.0);
    assert_eq!(p.carbs, 0.0);
    assert_eq!(p.protein, 0.0);
    assert_eq!(p.fats, 0.0);
    assert!(p.dietary_tags.is_empty());
    assert!(p.allergens.is_empty());
    assert!(p.ingredients.is_empty());
}

#[test]
fn test_exercise_placeholder_carries_request() {
    let p = Exercise::placeholder(ExerciseCategory::Cardio, "Rowing Machine", "Extreme");
    assert_eq!(p.name, "No suitable cardio exercise");
    assert_eq!(p.equipment, "Rowing Machine");
    assert_eq!(p.intensity, "Extreme");
    assert_eq!(p.category, ExerciseCategory::Cardio);
}

#[test]
fn test_preferences_parse_trims_and_lowercases() {
    let prefs =
        UserPreferences::from_raw_input("Vegan, ,Gluten_Free", "DAIRY", 1800.0, " None ", " High ")
            .expect("valid input");

    assert_eq!(prefs.dietary_tags.len(), 2);
    assert!(prefs.dietary_tags.contains("vegan"));
    assert!(prefs.dietary_tags.contains("gluten_free"));
    assert!(prefs.allergies.contains("dairy"));
    assert_eq!(prefs.equipment, "None");
    assert_eq!(prefs.intensity, "High");
}

#[test]
fn test_preferences_empty_lists() {
    let prefs = UserPreferences::from_raw_input("", "", 1500.0, "None", "Low").expect("valid");
    assert!(prefs.dietary_tags.is_empty());
    assert!(prefs.allergies.is_empty());
}

#[test]
fn test_preferences_reject_bad_calorie_targets() {
    assert!(matches!(
        UserPreferences::from_raw_input("", "", -100.0, "None", "Low"),
        Err(PreferenceError::InvalidCalorieTarget(_))
    ));
    assert!(UserPreferences::from_raw_input("", "", f64::NAN, "None", "Low").is_err());
    assert!(UserPreferences::from_raw_input("", "", f64::INFINITY, "None", "Low").is_err());
}

#[test]
fn test_catalog_rejects_duplicate_recipe_names() {
    let recipes = vec![
        recipe("Twin", MealType::Lunch, &[], 400.0),
        recipe("Twin", MealType::Dinner, &[], 500.0),
    ];
    let err = Catalog::new(recipes, Vec::new()).unwrap_err();
    assert!(matches!(err, CatalogError::DuplicateRecipeName(name) if name == "Twin"));
}

#[test]
fn test_catalog_rejects_negative_nutrition() {
    let mut bad = recipe("Anti-Matter Soup", MealType::Dinner, &[], 400.0);
    bad.protein = -5.0;
    let err = Catalog::new(vec![bad], Vec::new()).unwrap_err();
    assert!(err.to_string().contains("Anti-Matter Soup"));
    assert!(err.to_string().contains("protein"));
}

#[test]
fn test_error_display() {
    let err = CatalogError::JsonParseError("expected value at line 1".to_string());
    assert!(err.to_string().contains("expected value"));

    let pref_err = PreferenceError::InvalidCalorieTarget(-1.0);
    assert!(pref_err.to_string().contains("-1"));
}
