use std::collections::HashMap;

use rand::Rng;

use crate::error::{Result, SolverError};
use crate::models::{
    Candidate, MacroTargets, PantryUsage, ReverseSolution, ShoppingItem,
};
use crate::solver::aggregate::aggregate_totals;
use crate::solver::constants::{COST_JITTER_MAX, COST_JITTER_MIN};
use crate::solver::model::{build_problem, extract_plan};

/// Solve against the full catalog, then diff the plan against pantry stock.
///
/// Every catalog ingredient is capped at `ceiling` grams instead of its
/// pantry quantity, so the plan may recommend ingredients the user does not
/// own. Costs are randomized once (single attempt, no multi-solution search)
/// so repeated calls do not always pick the same combination when many
/// catalog entries tie. `None` means no combination of any known ingredient
/// satisfies the macro bands.
pub fn solve_reverse<R: Rng>(
    targets: &MacroTargets,
    catalog: &[Candidate],
    pantry: &HashMap<String, f64>,
    ceiling: f64,
    tolerance: f64,
    rng: &mut R,
) -> Result<Option<ReverseSolution>> {
    if catalog.is_empty() {
        return Ok(None);
    }

    let capped: Vec<Candidate> = catalog
        .iter()
        .map(|c| Candidate::new(c.name.clone(), c.profile, ceiling))
        .collect();
    let costs: Vec<f64> = capped
        .iter()
        .map(|_| rng.gen_range(COST_JITTER_MIN..COST_JITTER_MAX))
        .collect();

    let (problem, vars) = build_problem(targets, &capped, &costs, tolerance);

    let solution = match problem.solve() {
        Ok(solution) => solution,
        Err(microlp::Error::Infeasible) | Err(microlp::Error::Unbounded) => return Ok(None),
        Err(e) => return Err(SolverError::Lp(e.to_string())),
    };

    let plan = extract_plan(&solution, &vars);
    if plan.is_empty() {
        return Ok(None);
    }

    let profiles: HashMap<_, _> = catalog
        .iter()
        .map(|c| (c.name.clone(), c.profile))
        .collect();
    let totals = aggregate_totals(&plan, &profiles);

    let mut pantry_usage = Vec::with_capacity(plan.len());
    let mut shopping_list = Vec::new();

    for (name, &needed) in &plan {
        let needed_grams = f64::from(needed);
        let available = pantry.get(name).copied().unwrap_or(0.0);
        let from_pantry = needed_grams.min(available);
        let shortfall = (needed_grams - available).max(0.0);

        pantry_usage.push(PantryUsage {
            name: name.clone(),
            needed,
            available,
            from_pantry,
            shortfall,
        });
        if shortfall > 0.0 {
            shopping_list.push(ShoppingItem {
                name: name.clone(),
                amount: shortfall,
            });
        }
    }

    Ok(Some(ReverseSolution {
        plan,
        totals,
        pantry_usage,
        shopping_list,
    }))
}
