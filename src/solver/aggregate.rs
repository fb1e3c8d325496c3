use std::collections::HashMap;

use crate::models::{MacroTotals, MealPlan, NutrientProfile};

/// Compute the achieved totals of a rounded plan.
///
/// Each entry contributes `density * grams / 100` to every field. Calories
/// are never constrained by the solver; they are reported as a side effect
/// of the caloric density. Plan entries whose name is missing from
/// `profiles` are skipped silently (stale snapshot tolerance).
pub fn aggregate_totals(plan: &MealPlan, profiles: &HashMap<String, NutrientProfile>) -> MacroTotals {
    let mut totals = MacroTotals::default();

    for (name, grams) in plan {
        let Some(profile) = profiles.get(name) else {
            continue;
        };
        let ratio = f64::from(*grams) / 100.0;
        totals.calories += profile.calories_per_100g * ratio;
        totals.protein += profile.protein_per_100g * ratio;
        totals.carbs += profile.carbs_per_100g * ratio;
        totals.fats += profile.fats_per_100g * ratio;
    }

    totals
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_totals_scale_by_ratio() {
        let mut plan = MealPlan::new();
        plan.insert("A".to_string(), 200);

        let mut profiles = HashMap::new();
        profiles.insert("A".to_string(), NutrientProfile::new(120.0, 20.0, 0.0, 5.0));

        let totals = aggregate_totals(&plan, &profiles);
        assert!((totals.calories - 240.0).abs() < 1e-9);
        assert!((totals.protein - 40.0).abs() < 1e-9);
        assert!((totals.carbs - 0.0).abs() < 1e-9);
        assert!((totals.fats - 10.0).abs() < 1e-9);
    }

    #[test]
    fn test_unknown_ingredient_skipped() {
        let mut plan = MealPlan::new();
        plan.insert("Gone".to_string(), 500);
        plan.insert("Here".to_string(), 100);

        let mut profiles = HashMap::new();
        profiles.insert("Here".to_string(), NutrientProfile::new(50.0, 5.0, 5.0, 5.0));

        let totals = aggregate_totals(&plan, &profiles);
        assert!((totals.calories - 50.0).abs() < 1e-9);
        assert!((totals.protein - 5.0).abs() < 1e-9);
    }

    #[test]
    fn test_empty_plan_zeroes() {
        let totals = aggregate_totals(&MealPlan::new(), &HashMap::new());
        assert_eq!(totals.calories, 0.0);
        assert_eq!(totals.protein, 0.0);
    }
}
