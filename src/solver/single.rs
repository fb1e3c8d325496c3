use std::collections::HashMap;

use crate::error::{Result, SolverError};
use crate::models::{Candidate, MacroTargets, SolveResult};
use crate::solver::aggregate::aggregate_totals;
use crate::solver::constants::NEUTRAL_COST;
use crate::solver::model::{build_problem, extract_plan};

/// Solve once with a neutral cost per ingredient.
///
/// Deterministic: identical inputs produce the identical plan. Infeasibility
/// is a normal outcome (`feasible: false`, empty plan, zeroed totals) and is
/// never retried; only an internal fault of the LP primitive is an error.
pub fn solve_single(
    targets: &MacroTargets,
    candidates: &[Candidate],
    tolerance: f64,
) -> Result<SolveResult> {
    if candidates.is_empty() {
        return Ok(SolveResult::infeasible());
    }

    let costs = vec![NEUTRAL_COST; candidates.len()];
    let (problem, vars) = build_problem(targets, candidates, &costs, tolerance);

    let solution = match problem.solve() {
        Ok(solution) => solution,
        Err(microlp::Error::Infeasible) | Err(microlp::Error::Unbounded) => {
            return Ok(SolveResult::infeasible());
        }
        Err(e) => return Err(SolverError::Lp(e.to_string())),
    };

    let plan = extract_plan(&solution, &vars);
    let profiles: HashMap<_, _> = candidates
        .iter()
        .map(|c| (c.name.clone(), c.profile))
        .collect();
    let totals = aggregate_totals(&plan, &profiles);

    Ok(SolveResult {
        feasible: true,
        plan,
        totals,
    })
}
