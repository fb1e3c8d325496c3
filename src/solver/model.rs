use microlp::{ComparisonOp, OptimizationDirection, Problem, Variable};

use crate::models::{Candidate, MacroTargets};

/// Build the LP for one solve attempt.
///
/// One variable per candidate, in grams, bounded to `[0, available_grams]` —
/// the capacity cap and the non-negativity floor both live on the variable
/// bounds. Each macro gets a `>= target - tolerance` / `<= target + tolerance`
/// constraint pair over `density / 100` coefficients (densities are per 100 g,
/// variables are grams).
///
/// `costs` supplies the objective coefficient per candidate, in order;
/// the objective is minimized.
pub fn build_problem(
    targets: &MacroTargets,
    candidates: &[Candidate],
    costs: &[f64],
    tolerance: f64,
) -> (Problem, Vec<(String, Variable)>) {
    debug_assert_eq!(candidates.len(), costs.len());

    let mut problem = Problem::new(OptimizationDirection::Minimize);

    let mut vars = Vec::with_capacity(candidates.len());
    let mut protein_expr = Vec::with_capacity(candidates.len());
    let mut carbs_expr = Vec::with_capacity(candidates.len());
    let mut fats_expr = Vec::with_capacity(candidates.len());

    for (candidate, &cost) in candidates.iter().zip(costs) {
        let cap = candidate.available_grams.max(0.0);
        let var = problem.add_var(cost, (0.0, cap));

        protein_expr.push((var, candidate.profile.protein_per_100g / 100.0));
        carbs_expr.push((var, candidate.profile.carbs_per_100g / 100.0));
        fats_expr.push((var, candidate.profile.fats_per_100g / 100.0));

        vars.push((candidate.name.clone(), var));
    }

    add_band(&mut problem, &protein_expr, targets.protein, tolerance);
    add_band(&mut problem, &carbs_expr, targets.carbs, tolerance);
    add_band(&mut problem, &fats_expr, targets.fats, tolerance);

    (problem, vars)
}

/// Constrain a macro total to `[target - tolerance, target + tolerance]`.
fn add_band(problem: &mut Problem, expr: &[(Variable, f64)], target: f64, tolerance: f64) {
    problem.add_constraint(expr, ComparisonOp::Ge, target - tolerance);
    problem.add_constraint(expr, ComparisonOp::Le, target + tolerance);
}

/// Round a raw LP assignment to whole grams, dropping entries that round
/// to zero or below.
pub(crate) fn extract_plan(
    solution: &microlp::Solution,
    vars: &[(String, Variable)],
) -> crate::models::MealPlan {
    let mut plan = crate::models::MealPlan::new();
    for (name, var) in vars {
        let grams = solution[*var].round();
        if grams > 0.0 {
            plan.insert(name.clone(), grams as u32);
        }
    }
    plan
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::NutrientProfile;
    use crate::solver::constants::MACRO_TOLERANCE_GRAMS;

    fn candidates() -> Vec<Candidate> {
        vec![
            Candidate::new(
                "Chicken",
                NutrientProfile::new(165.0, 23.0, 0.0, 1.0),
                300.0,
            ),
            Candidate::new("Rice", NutrientProfile::new(130.0, 7.0, 80.0, 1.0), 300.0),
        ]
    }

    #[test]
    fn test_solution_respects_capacity_and_bands() {
        let targets = MacroTargets::new(30.0, 40.0, 1.0);
        let candidates = candidates();
        let costs = vec![1.0, 1.0];

        let (problem, vars) =
            build_problem(&targets, &candidates, &costs, MACRO_TOLERANCE_GRAMS);
        let solution = problem.solve().expect("model should be feasible");

        let mut protein = 0.0;
        for (candidate, (_, var)) in candidates.iter().zip(&vars) {
            let grams = solution[*var];
            assert!(grams >= -1e-9);
            assert!(grams <= candidate.available_grams + 1e-9);
            protein += grams * candidate.profile.protein_per_100g / 100.0;
        }
        assert!(protein >= targets.protein - MACRO_TOLERANCE_GRAMS - 1e-6);
        assert!(protein <= targets.protein + MACRO_TOLERANCE_GRAMS + 1e-6);
    }

    #[test]
    fn test_unreachable_target_is_infeasible() {
        let targets = MacroTargets::new(1000.0, 40.0, 1.0);
        let candidates = candidates();
        let costs = vec![1.0, 1.0];

        let (problem, _) = build_problem(&targets, &candidates, &costs, MACRO_TOLERANCE_GRAMS);
        assert!(problem.solve().is_err());
    }
}
