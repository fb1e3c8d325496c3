mod ingredient;
mod plan;

pub use ingredient::{
    Candidate, CatalogIngredient, MacroTargets, NutrientProfile, catalog_candidates,
    pantry_by_catalog_name, pantry_candidates,
};
pub use plan::{
    MacroTotals, MealPlan, PantryUsage, ReverseSolution, ShoppingItem, SolveResult,
    plan_signature,
};
