use clap::Parser;
use kondate::prelude::*;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::io::{self, Write};

/// A weekly meal-and-exercise plan generator CLI
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Daily calorie target
    #[arg(short, long, default_value_t = 2000.0)]
    calories: f64,

    /// Comma-separated dietary tags (e.g. "vegan,gluten_free")
    #[arg(short, long, default_value = "")]
    dietary: String,

    /// Comma-separated allergies (e.g. "dairy,nuts")
    #[arg(short, long, default_value = "")]
    allergies: String,

    /// Preferred equipment (e.g. "None", "Dumbbells")
    #[arg(short, long, default_value = "None")]
    equipment: String,

    /// Preferred intensity ("Low", "Medium", "High")
    #[arg(short, long, default_value = "Medium")]
    intensity: String,

    /// Seed for the random generator, for reproducible plans
    #[arg(short, long)]
    seed: Option<u64>,

    /// Path to a recipes JSON file overriding the embedded table
    #[arg(long, requires = "exercises")]
    recipes: Option<String>,

    /// Path to an exercises JSON file overriding the embedded table
    #[arg(long, requires = "recipes")]
    exercises: Option<String>,

    /// Emit the plan as pretty-printed JSON instead of text
    #[arg(short, long)]
    json: bool,

    /// Run in interactive mode to be prompted for inputs
    #[arg(long, help = "Run in interactive 'human' mode")]
    human: bool,
}

fn main() {
    let cli = Cli::parse();

    if cli.human {
        run_interactive(&cli);
    } else {
        run_non_interactive(&cli);
    }
}

fn run_non_interactive(cli: &Cli) {
    let prefs = match UserPreferences::from_raw_input(
        &cli.dietary,
        &cli.allergies,
        cli.calories,
        &cli.equipment,
        &cli.intensity,
    ) {
        Ok(prefs) => prefs,
        Err(e) => {
            eprintln!("Invalid preferences: {e}");
            std::process::exit(1);
        }
    };

    generate_and_print(cli, &prefs);
}

fn run_interactive(cli: &Cli) {
    println!("Kondate - 7-Day Diet and Exercise Planner\n");

    let dietary = prompt("Enter dietary restrictions (comma separated, e.g. vegan,gluten_free): ");
    let allergies = prompt("Enter allergy restrictions (comma separated, e.g. dairy,nuts): ");
    let calories_raw = prompt("Enter your daily calorie target: ");
    let equipment = prompt("Enter preferred equipment (e.g. None, Dumbbells): ");
    let intensity = prompt("Enter preferred intensity (Low, Medium, High): ");

    let calories: f64 = match calories_raw.trim().parse() {
        Ok(value) => value,
        Err(_) => {
            eprintln!("'{}' is not a number", calories_raw.trim());
            std::process::exit(1);
        }
    };

    let prefs =
        match UserPreferences::from_raw_input(&dietary, &allergies, calories, &equipment, &intensity)
        {
            Ok(prefs) => prefs,
            Err(e) => {
                eprintln!("Invalid preferences: {e}");
                std::process::exit(1);
            }
        };

    generate_and_print(cli, &prefs);
}

fn generate_and_print(cli: &Cli, prefs: &UserPreferences) {
    let catalog = match (&cli.recipes, &cli.exercises) {
        (Some(recipes_path), Some(exercises_path)) => {
            match Catalog::from_files(recipes_path, exercises_path) {
                Ok(catalog) => catalog,
                Err(e) => {
                    eprintln!("Failed to load catalog: {e}");
                    std::process::exit(1);
                }
            }
        }
        _ => Catalog::builtin(),
    };

    let mut rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    let planner = Planner::new(&catalog);
    let plan = planner.generate_weekly_plan(prefs, &mut rng);

    if cli.json {
        match serde_json::to_string_pretty(&plan) {
            Ok(json) => println!("{json}"),
            Err(e) => {
                eprintln!("Failed to serialize plan: {e}");
                std::process::exit(1);
            }
        }
    } else {
        println!("\n7-Day Diet and Exercise Plan:\n");
        print!("{}", PlanFormatter::format_plan(&plan));
    }
}

fn prompt(message: &str) -> String {
    print!("{message}");
    let _ = io::stdout().flush();
    let mut input = String::new();
    if io::stdin().read_line(&mut input).is_err() {
        eprintln!("Failed to read input");
        std::process::exit(1);
    }
    input.trim().to_string()
}
