use std::collections::HashSet;

use rand::Rng;

use crate::error::{Result, SolverError};
use crate::models::{Candidate, MacroTargets, MealPlan, plan_signature};
use crate::solver::constants::{
    ATTEMPTS_PER_PLAN, COST_JITTER_MAX, COST_JITTER_MIN, MACRO_TOLERANCE_GRAMS,
};
use crate::solver::model::{build_problem, extract_plan};

/// Search for up to `desired_count` materially different plans.
///
/// Each round rebuilds the model with a fresh uniform-random cost per
/// ingredient, so different rounds land on different optimal vertices of the
/// same feasible polytope, then dedupes rounded plans by signature. The
/// search is probabilistic sampling, not error recovery: infeasible rounds
/// are skipped, and fewer than `desired_count` plans (including zero) is a
/// valid partial result, never an error.
pub fn solve_multiple<R: Rng>(
    targets: &MacroTargets,
    candidates: &[Candidate],
    desired_count: usize,
    rng: &mut R,
) -> Result<Vec<MealPlan>> {
    solve_multiple_with_tolerance(targets, candidates, desired_count, MACRO_TOLERANCE_GRAMS, rng)
}

/// `solve_multiple` with an explicit tolerance band half-width.
pub fn solve_multiple_with_tolerance<R: Rng>(
    targets: &MacroTargets,
    candidates: &[Candidate],
    desired_count: usize,
    tolerance: f64,
    rng: &mut R,
) -> Result<Vec<MealPlan>> {
    if candidates.is_empty() || desired_count == 0 {
        return Ok(Vec::new());
    }

    let mut plans = Vec::new();
    let mut seen = HashSet::new();
    // Saturate so an absurd desired_count cannot overflow the attempt budget.
    let attempts = desired_count.saturating_mul(ATTEMPTS_PER_PLAN);

    for _ in 0..attempts {
        let costs: Vec<f64> = candidates
            .iter()
            .map(|_| rng.gen_range(COST_JITTER_MIN..COST_JITTER_MAX))
            .collect();
        let (problem, vars) = build_problem(targets, candidates, &costs, tolerance);

        let solution = match problem.solve() {
            Ok(solution) => solution,
            Err(microlp::Error::Infeasible) | Err(microlp::Error::Unbounded) => continue,
            Err(e) => return Err(SolverError::Lp(e.to_string())),
        };

        let plan = extract_plan(&solution, &vars);
        if plan.is_empty() {
            continue;
        }

        if seen.insert(plan_signature(&plan)) {
            plans.push(plan);
            if plans.len() >= desired_count {
                break;
            }
        }
    }

    Ok(plans)
}
