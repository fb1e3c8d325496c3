use std::collections::HashMap;

use crate::models::{MacroTargets, MealPlan, NutrientProfile, ReverseSolution};
use crate::solver::aggregate_totals;

/// Display solved meal plans with achieved-vs-target macros.
pub fn display_meal_plans(
    plans: &[MealPlan],
    profiles: &HashMap<String, NutrientProfile>,
    targets: &MacroTargets,
) {
    if plans.is_empty() {
        println!("No meal plans found.");
        return;
    }

    println!();
    println!(
        "Targets: {:.0}g protein / {:.0}g carbs / {:.0}g fats",
        targets.protein, targets.carbs, targets.fats
    );

    for (i, plan) in plans.iter().enumerate() {
        println!();
        println!("=== Plan {} ===", i + 1);

        let max_name_len = plan.keys().map(|n| n.len()).max().unwrap_or(10);
        for (name, grams) in plan {
            println!("  {:<width$}  {:>4} g", name, grams, width = max_name_len);
        }

        let totals = aggregate_totals(plan, profiles);
        println!(
            "  achieved: {:.0} cal | P {:.1}g C {:.1}g F {:.1}g",
            totals.calories, totals.protein, totals.carbs, totals.fats
        );
    }
    println!();
}

/// Display a reverse solve: plan, macros, pantry usage, and shopping list.
pub fn display_reverse_solution(solution: &ReverseSolution, targets: &MacroTargets) {
    println!();
    println!("=== Recommended Meal ===");
    println!();

    let max_name_len = solution.plan.keys().map(|n| n.len()).max().unwrap_or(10);
    for (name, grams) in &solution.plan {
        println!("  {:<width$}  {:>4} g", name, grams, width = max_name_len);
    }

    println!();
    println!(
        "Target:   P {:.0}g C {:.0}g F {:.0}g",
        targets.protein, targets.carbs, targets.fats
    );
    println!(
        "Achieved: P {:.1}g C {:.1}g F {:.1}g ({:.1} cal)",
        solution.totals.protein, solution.totals.carbs, solution.totals.fats,
        solution.totals.calories
    );

    println!();
    println!("--- Pantry usage ---");
    for usage in &solution.pantry_usage {
        println!(
            "  {:<width$}  need {:>4} g | on hand {:>6.0} g | buy {:>4.0} g",
            usage.name,
            usage.needed,
            usage.available,
            usage.shortfall,
            width = max_name_len
        );
    }

    println!();
    if solution.shopping_list.is_empty() {
        println!("Shopping list: nothing to buy, the pantry covers it.");
    } else {
        println!("--- Shopping list ---");
        for item in &solution.shopping_list {
            println!("  {:<width$}  {:>4.0} g", item.name, item.amount, width = max_name_len);
        }
    }
    println!();
}
