use clap::Parser;
use kondate::prelude::*;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::fs;

/// A CLI tool to generate synthetic catalog tables for stress-testing the planner
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// The path to write the generated recipes JSON to
    #[arg(long, default_value = "generated_recipes.json")]
    recipes_out: String,

    /// The path to write the generated exercises JSON to
    #[arg(long, default_value = "generated_exercises.json")]
    exercises_out: String,

    /// The number of recipes to generate per meal type
    #[arg(long, default_value_t = 100)]
    recipes_per_meal: usize,

    /// The number of exercises to generate per category
    #[arg(long, default_value_t = 250)]
    exercises_per_category: usize,

    /// Seed for the random generator
    #[arg(short, long, default_value_t = 0)]
    seed: u64,
}

const DIETARY_TAGS: [&str; 5] = ["vegan", "vegetarian", "pescatarian", "gluten_free", "none"];
const ALLERGENS: [&str; 3] = ["dairy", "gluten", "shellfish"];
const EQUIPMENT: [&str; 5] = ["None", "Dumbbells", "Barbell", "Kettlebell", "Resistance Bands"];
const INTENSITIES: [&str; 3] = ["Low", "Medium", "High"];

fn main() -> Result<()> {
    let cli = Cli::parse();
    let mut rng = StdRng::seed_from_u64(cli.seed);

    println!(
        "Generating catalog ({} recipes per meal type, {} exercises per category)...",
        cli.recipes_per_meal, cli.exercises_per_category
    );

    let recipes = generate_recipes(&mut rng, cli.recipes_per_meal);
    let exercises = generate_exercises(&mut rng, cli.exercises_per_category);

    // Round-trip through the validating constructor to catch generator bugs early.
    let catalog = Catalog::new(recipes, exercises)?;

    fs::write(
        &cli.recipes_out,
        serde_json::to_string_pretty(catalog.recipes())?,
    )?;
    fs::write(
        &cli.exercises_out,
        serde_json::to_string_pretty(catalog.exercises())?,
    )?;

    println!(
        "Successfully wrote '{}' and '{}'",
        cli.recipes_out, cli.exercises_out
    );

    Ok(())
}

fn generate_recipes(rng: &mut StdRng, per_meal: usize) -> Vec<Recipe> {
    let mut recipes = Vec::with_capacity(per_meal * MealType::ALL.len());
    for meal_type in MealType::ALL {
        for index in 0..per_meal {
            let tag = DIETARY_TAGS[rng.random_range(0..DIETARY_TAGS.len())];
            let mut dietary_tags = vec![tag.to_string()];
            if rng.random_bool(0.5) {
                dietary_tags.push("gluten_free".to_string());
                dietary_tags.dedup();
            }

            let allergens = if rng.random_bool(0.3) {
                vec![ALLERGENS[rng.random_range(0..ALLERGENS.len())].to_string()]
            } else {
                Vec::new()
            };

            recipes.push(Recipe {
                name: format!("Synthetic {meal_type} #{index:04}"),
                meal_type,
                dietary_tags,
                allergens,
                calories: rng.random_range(250.0..800.0).round(),
                carbs: rng.random_range(10.0..90.0).round(),
                protein: rng.random_range(5.0..50.0).round(),
                fats: rng.random_range(5.0..40.0).round(),
                ingredients: vec!["Ingredient A".to_string(), "Ingredient B".to_string()],
            });
        }
    }
    println!("-> Generated {} recipes.", recipes.len());
    recipes
}

fn generate_exercises(rng: &mut StdRng, per_category: usize) -> Vec<Exercise> {
    let mut exercises = Vec::with_capacity(per_category * ExerciseCategory::ALL.len());
    for category in ExerciseCategory::ALL {
        for index in 0..per_category {
            exercises.push(Exercise {
                name: format!("Synthetic {category} #{index:04}"),
                equipment: EQUIPMENT[rng.random_range(0..EQUIPMENT.len())].to_string(),
                intensity: INTENSITIES[rng.random_range(0..INTENSITIES.len())].to_string(),
                category,
            });
        }
    }
    println!("-> Generated {} exercises.", exercises.len());
    exercises
}
