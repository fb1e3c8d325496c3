use std::collections::{HashMap, HashSet};

use assert_float_eq::assert_float_absolute_eq;
use rand::SeedableRng;
use rand::rngs::StdRng;

use pantry_macro_rs::models::{Candidate, MacroTargets, NutrientProfile, plan_signature};
use pantry_macro_rs::solver::constants::MACRO_TOLERANCE_GRAMS;
use pantry_macro_rs::solver::{aggregate_totals, solve_multiple, solve_single};

fn make_candidate(name: &str, cal: f64, p: f64, c: f64, f: f64, available: f64) -> Candidate {
    Candidate::new(name, NutrientProfile::new(cal, p, c, f), available)
}

fn pantry() -> Vec<Candidate> {
    vec![
        make_candidate("Chicken", 165.0, 23.0, 0.0, 1.0, 300.0),
        make_candidate("Rice", 130.0, 7.0, 80.0, 1.0, 300.0),
        make_candidate("Olive Oil", 884.0, 0.0, 0.0, 100.0, 300.0),
    ]
}

fn profiles(candidates: &[Candidate]) -> HashMap<String, NutrientProfile> {
    candidates
        .iter()
        .map(|c| (c.name.clone(), c.profile))
        .collect()
}

#[test]
fn test_scenario_chicken_rice_oil() {
    // Protein must come from chicken (rice protein is capped by the carb
    // band) and carbs from rice, so any feasible plan uses both.
    let targets = MacroTargets::new(30.0, 40.0, 10.0);
    let result = solve_single(&targets, &pantry(), MACRO_TOLERANCE_GRAMS).unwrap();

    assert!(result.feasible);
    assert!(result.plan.contains_key("Chicken"));
    assert!(result.plan.contains_key("Rice"));

    assert!(result.totals.protein >= 25.0 - 1.0 && result.totals.protein <= 35.0 + 1.0);
    assert!(result.totals.carbs >= 35.0 - 1.0 && result.totals.carbs <= 45.0 + 1.0);
    assert!(result.totals.fats >= 5.0 - 1.0 && result.totals.fats <= 15.0 + 1.0);
}

#[test]
fn test_capacity_respected_across_plans() {
    let targets = MacroTargets::new(40.0, 50.0, 15.0);
    let candidates = vec![
        make_candidate("Chicken", 165.0, 23.0, 0.0, 1.0, 200.0),
        make_candidate("Tofu", 76.0, 8.0, 2.0, 4.5, 250.0),
        make_candidate("Rice", 130.0, 7.0, 80.0, 1.0, 100.0),
        make_candidate("Oats", 389.0, 17.0, 66.0, 7.0, 150.0),
        make_candidate("Olive Oil", 884.0, 0.0, 0.0, 100.0, 50.0),
    ];
    let by_name: HashMap<&str, f64> = candidates
        .iter()
        .map(|c| (c.name.as_str(), c.available_grams))
        .collect();

    let mut rng = StdRng::seed_from_u64(17);
    let plans = solve_multiple(&targets, &candidates, 4, &mut rng).unwrap();

    for plan in &plans {
        for (name, &grams) in plan {
            assert!(grams > 0, "plan contains a zero-gram entry for {}", name);
            let cap = by_name[name.as_str()];
            assert!(
                f64::from(grams) <= cap + 1.0,
                "{} uses {} g over its {} g cap",
                name,
                grams,
                cap
            );
        }
    }
}

#[test]
fn test_tolerance_respected_from_rounded_plan() {
    let targets = MacroTargets::new(40.0, 50.0, 15.0);
    let candidates = pantry();
    let lookup = profiles(&candidates);

    let mut rng = StdRng::seed_from_u64(23);
    let plans = solve_multiple(&targets, &candidates, 3, &mut rng).unwrap();
    assert!(!plans.is_empty());

    // Rounding happens after LP optimality; allow 1 g past the 5 g band.
    let slack = MACRO_TOLERANCE_GRAMS + 1.0;
    for plan in &plans {
        let totals = aggregate_totals(plan, &lookup);
        assert!((totals.protein - targets.protein).abs() <= slack);
        assert!((totals.carbs - targets.carbs).abs() <= slack);
        assert!((totals.fats - targets.fats).abs() <= slack);
    }
}

#[test]
fn test_single_solve_is_deterministic() {
    let targets = MacroTargets::new(30.0, 40.0, 10.0);
    let a = solve_single(&targets, &pantry(), MACRO_TOLERANCE_GRAMS).unwrap();
    let b = solve_single(&targets, &pantry(), MACRO_TOLERANCE_GRAMS).unwrap();
    assert_eq!(a.plan, b.plan);
    assert_float_absolute_eq!(a.totals.protein, b.totals.protein, 1e-12);
}

#[test]
fn test_multi_solve_bound_and_distinctness() {
    let targets = MacroTargets::new(30.0, 40.0, 10.0);
    let mut rng = StdRng::seed_from_u64(2);

    let plans = solve_multiple(&targets, &pantry(), 3, &mut rng).unwrap();
    assert!(plans.len() <= 3);

    let signatures: HashSet<String> = plans.iter().map(plan_signature).collect();
    assert_eq!(signatures.len(), plans.len());
}

#[test]
fn test_high_protein_target_infeasible() {
    // Only low-protein ingredients: no combination reaches 1000 g protein.
    let targets = MacroTargets::new(1000.0, 0.0, 0.0);
    let candidates = vec![
        make_candidate("Lettuce", 15.0, 1.4, 2.9, 0.2, 500.0),
        make_candidate("Cucumber", 16.0, 0.7, 3.6, 0.1, 500.0),
    ];

    let result = solve_single(&targets, &candidates, MACRO_TOLERANCE_GRAMS).unwrap();
    assert!(!result.feasible);
    assert!(result.plan.is_empty());

    let mut rng = StdRng::seed_from_u64(9);
    let plans = solve_multiple(&targets, &candidates, 3, &mut rng).unwrap();
    assert!(plans.is_empty());
}

#[test]
fn test_empty_ingredients_never_panic() {
    let targets = MacroTargets::new(30.0, 40.0, 10.0);

    let result = solve_single(&targets, &[], MACRO_TOLERANCE_GRAMS).unwrap();
    assert!(!result.feasible);

    let mut rng = StdRng::seed_from_u64(1);
    let plans = solve_multiple(&targets, &[], 3, &mut rng).unwrap();
    assert!(plans.is_empty());
}

#[test]
fn test_aggregation_example() {
    let mut plan = pantry_macro_rs::models::MealPlan::new();
    plan.insert("A".to_string(), 200);

    let mut lookup = HashMap::new();
    lookup.insert("A".to_string(), NutrientProfile::new(0.0, 20.0, 0.0, 5.0));

    let totals = aggregate_totals(&plan, &lookup);
    assert_float_absolute_eq!(totals.protein, 40.0, 1e-9);
    assert_float_absolute_eq!(totals.carbs, 0.0, 1e-9);
    assert_float_absolute_eq!(totals.fats, 10.0, 1e-9);
}
