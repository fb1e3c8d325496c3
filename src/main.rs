use std::collections::HashMap;
use std::path::Path;

use clap::Parser;
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde_json::json;

use pantry_macro_rs::cli::{Cli, Command};
use pantry_macro_rs::error::{Result, SolverError};
use pantry_macro_rs::interface::{display_meal_plans, display_reverse_solution};
use pantry_macro_rs::models::{
    CatalogIngredient, MacroTargets, NutrientProfile, catalog_candidates,
    pantry_by_catalog_name, pantry_candidates,
};
use pantry_macro_rs::solver::multi::solve_multiple_with_tolerance;
use pantry_macro_rs::solver::solve_reverse;
use pantry_macro_rs::state::{import_catalog_csv, load_catalog, load_pantry, save_catalog};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::Solve {
            protein,
            carbs,
            fats,
            count,
            tolerance,
            seed,
            json,
        } => cmd_solve(
            &cli.catalog,
            &cli.pantry,
            MacroTargets::new(protein, carbs, fats),
            count as usize,
            tolerance,
            seed,
            json,
        ),
        Command::Reverse {
            protein,
            carbs,
            fats,
            ceiling,
            tolerance,
            seed,
            json,
        } => cmd_reverse(
            &cli.catalog,
            &cli.pantry,
            MacroTargets::new(protein, carbs, fats),
            ceiling,
            tolerance,
            seed,
            json,
        ),
        Command::Import { input } => cmd_import(&cli.catalog, &input),
    }
}

/// Targets may be zero (a tight band around nothing) but never negative.
fn validate_targets(targets: &MacroTargets) -> Result<()> {
    if targets.protein < 0.0 || targets.carbs < 0.0 || targets.fats < 0.0 {
        return Err(SolverError::InvalidInput(
            "macro targets must be non-negative".to_string(),
        ));
    }
    Ok(())
}

fn make_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}

/// Load the catalog, treating a missing file as a client error (exit 1).
fn require_catalog(path: &str) -> Result<Vec<CatalogIngredient>> {
    if !Path::new(path).exists() {
        return Err(SolverError::InvalidInput(format!(
            "catalog file not found: {} (run 'import --input <file.csv>' to create one)",
            path
        )));
    }
    load_catalog(path)
}

/// Forward solve: pantry-constrained, multi-solution.
fn cmd_solve(
    catalog_path: &str,
    pantry_path: &str,
    targets: MacroTargets,
    count: usize,
    tolerance: f64,
    seed: Option<u64>,
    as_json: bool,
) -> Result<()> {
    validate_targets(&targets)?;

    let catalog = require_catalog(catalog_path)?;

    if !Path::new(pantry_path).exists() {
        return Err(SolverError::InvalidInput(format!(
            "pantry file not found: {}",
            pantry_path
        )));
    }
    let pantry = load_pantry(pantry_path)?;

    let candidates = pantry_candidates(&catalog, &pantry)?;

    let mut rng = make_rng(seed);
    let plans = solve_multiple_with_tolerance(&targets, &candidates, count, tolerance, &mut rng)?;

    if plans.is_empty() {
        println!(
            "No solution found. Try adjusting your targets or adding more variety to your pantry."
        );
        return Ok(());
    }

    if as_json {
        println!("{}", serde_json::to_string_pretty(&json!({ "mealPlans": plans }))?);
    } else {
        let profiles: HashMap<String, NutrientProfile> = catalog
            .iter()
            .map(|ing| (ing.name.clone(), ing.profile))
            .collect();
        display_meal_plans(&plans, &profiles, &targets);
    }

    Ok(())
}

/// Reverse solve: full catalog, single solution, shopping list.
fn cmd_reverse(
    catalog_path: &str,
    pantry_path: &str,
    targets: MacroTargets,
    ceiling: f64,
    tolerance: f64,
    seed: Option<u64>,
    as_json: bool,
) -> Result<()> {
    validate_targets(&targets)?;

    let catalog = require_catalog(catalog_path)?;
    let full_catalog = catalog_candidates(&catalog)?;

    // A missing pantry file just means nothing is on hand.
    let pantry = if Path::new(pantry_path).exists() {
        load_pantry(pantry_path)?
    } else {
        HashMap::new()
    };
    let on_hand = pantry_by_catalog_name(&catalog, &pantry);

    let mut rng = make_rng(seed);
    let solution = solve_reverse(&targets, &full_catalog, &on_hand, ceiling, tolerance, &mut rng)?;

    let Some(solution) = solution else {
        println!("No solution found with the current ingredient catalog.");
        return Ok(());
    };

    if as_json {
        let payload = json!({
            "plan": solution.plan,
            "macros": {
                "target": targets,
                "achieved": {
                    "calories": round1(solution.totals.calories),
                    "protein": round1(solution.totals.protein),
                    "carbs": round1(solution.totals.carbs),
                    "fats": round1(solution.totals.fats),
                },
            },
            "pantryUsage": solution.pantry_usage,
            "shoppingList": solution.shopping_list,
        });
        println!("{}", serde_json::to_string_pretty(&payload)?);
    } else {
        display_reverse_solution(&solution, &targets);
    }

    Ok(())
}

/// Replace the catalog from a CSV file.
fn cmd_import(catalog_path: &str, input: &str) -> Result<()> {
    if !Path::new(input).exists() {
        return Err(SolverError::InvalidInput(format!(
            "CSV file not found: {}",
            input
        )));
    }

    let ingredients = import_catalog_csv(input)?;
    save_catalog(catalog_path, &ingredients)?;
    println!("Imported {} ingredients into {}.", ingredients.len(), catalog_path);

    Ok(())
}

fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
