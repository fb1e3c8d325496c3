use std::collections::BTreeMap;

use serde::Serialize;

/// A solved meal: ingredient name to whole grams used.
///
/// Entries are always positive; zero-rounded quantities are dropped, never
/// stored as 0. The ordered map keeps output and signatures stable.
pub type MealPlan = BTreeMap<String, u32>;

/// Canonical dedup key for a rounded plan: `name:grams` tokens joined with
/// `|`. The map already iterates in name order, so equal plans always yield
/// equal strings. Plans differing in any rounded quantity are distinct.
pub fn plan_signature(plan: &MealPlan) -> String {
    plan.iter()
        .map(|(name, grams)| format!("{}:{}", name, grams))
        .collect::<Vec<_>>()
        .join("|")
}

/// Achieved macro totals for a plan, computed from the rounded plan.
#[derive(Debug, Clone, Copy, Default, Serialize)]
pub struct MacroTotals {
    pub calories: f64,
    pub protein: f64,
    pub carbs: f64,
    pub fats: f64,
}

/// Outcome of a single forward solve.
#[derive(Debug, Clone, Serialize)]
pub struct SolveResult {
    pub feasible: bool,
    pub plan: MealPlan,
    pub totals: MacroTotals,
}

impl SolveResult {
    /// The terminal infeasible outcome: empty plan, zeroed totals.
    pub fn infeasible() -> Self {
        Self {
            feasible: false,
            plan: MealPlan::new(),
            totals: MacroTotals::default(),
        }
    }
}

/// How one planned ingredient splits between pantry stock and purchase.
#[derive(Debug, Clone, Serialize)]
pub struct PantryUsage {
    pub name: String,
    pub needed: u32,
    pub available: f64,
    #[serde(rename = "fromPantry")]
    pub from_pantry: f64,
    pub shortfall: f64,
}

/// One line of the shopping list: grams to buy beyond pantry stock.
#[derive(Debug, Clone, Serialize)]
pub struct ShoppingItem {
    pub name: String,
    pub amount: f64,
}

/// Outcome of a feasible reverse (full-catalog) solve.
#[derive(Debug, Clone, Serialize)]
pub struct ReverseSolution {
    pub plan: MealPlan,
    pub totals: MacroTotals,
    #[serde(rename = "pantryUsage")]
    pub pantry_usage: Vec<PantryUsage>,
    #[serde(rename = "shoppingList")]
    pub shopping_list: Vec<ShoppingItem>,
}
