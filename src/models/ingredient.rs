use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::{Result, SolverError};

/// Nutrient content of an ingredient, normalized to 100 grams.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct NutrientProfile {
    #[serde(rename = "caloriesPer100g")]
    pub calories_per_100g: f64,

    #[serde(rename = "proteinPer100g")]
    pub protein_per_100g: f64,

    #[serde(rename = "carbsPer100g")]
    pub carbs_per_100g: f64,

    #[serde(rename = "fatsPer100g")]
    pub fats_per_100g: f64,
}

impl NutrientProfile {
    pub fn new(calories: f64, protein: f64, carbs: f64, fats: f64) -> Self {
        Self {
            calories_per_100g: calories,
            protein_per_100g: protein,
            carbs_per_100g: carbs,
            fats_per_100g: fats,
        }
    }

    /// Basic validation: all densities non-negative.
    pub fn is_valid(&self) -> bool {
        self.calories_per_100g >= 0.0
            && self.protein_per_100g >= 0.0
            && self.carbs_per_100g >= 0.0
            && self.fats_per_100g >= 0.0
    }
}

/// An ingredient offered to a single solve call.
///
/// Built fresh per call from a snapshot of pantry or catalog data;
/// `available_grams` is the upper bound on usage.
#[derive(Debug, Clone)]
pub struct Candidate {
    pub name: String,
    pub profile: NutrientProfile,
    pub available_grams: f64,
}

impl Candidate {
    pub fn new(name: impl Into<String>, profile: NutrientProfile, available_grams: f64) -> Self {
        Self {
            name: name.into(),
            profile,
            available_grams,
        }
    }

    /// Canonical key for lookups (lowercase name).
    pub fn key(&self) -> String {
        self.name.to_lowercase()
    }
}

/// A persisted ingredient catalog entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogIngredient {
    pub name: String,

    #[serde(flatten)]
    pub profile: NutrientProfile,
}

impl CatalogIngredient {
    /// Canonical key for lookups (lowercase name).
    pub fn key(&self) -> String {
        self.name.to_lowercase()
    }

    /// Snapshot this entry as a solve candidate with the given cap.
    pub fn to_candidate(&self, available_grams: f64) -> Candidate {
        Candidate::new(self.name.clone(), self.profile, available_grams)
    }
}

/// Join catalog entries with pantry stock, keeping only stocked ingredients
/// capped at the stocked grams. Pantry keys match catalog names
/// case-insensitively. A pantry stocking nothing from the catalog is a
/// client error, not an infeasible solve.
pub fn pantry_candidates(
    catalog: &[CatalogIngredient],
    pantry: &HashMap<String, f64>,
) -> Result<Vec<Candidate>> {
    let stock: HashMap<String, f64> = pantry
        .iter()
        .map(|(name, grams)| (name.to_lowercase(), *grams))
        .collect();

    let candidates: Vec<Candidate> = catalog
        .iter()
        .filter_map(|ing| {
            let grams = stock.get(&ing.key()).copied().unwrap_or(0.0);
            (grams > 0.0).then(|| ing.to_candidate(grams))
        })
        .collect();

    if candidates.is_empty() {
        return Err(SolverError::EmptyPantry);
    }
    Ok(candidates)
}

/// Snapshot the whole catalog as solve candidates. Capacity comes from the
/// reverse solver's ceiling, not from here. An empty catalog is a client
/// error.
pub fn catalog_candidates(catalog: &[CatalogIngredient]) -> Result<Vec<Candidate>> {
    if catalog.is_empty() {
        return Err(SolverError::EmptyCatalog);
    }
    Ok(catalog.iter().map(|ing| ing.to_candidate(0.0)).collect())
}

/// Re-key pantry stock to canonical catalog names, case-insensitively, so a
/// shortfall diff lines up with the plan's ingredient names.
pub fn pantry_by_catalog_name(
    catalog: &[CatalogIngredient],
    pantry: &HashMap<String, f64>,
) -> HashMap<String, f64> {
    let stock: HashMap<String, f64> = pantry
        .iter()
        .map(|(name, grams)| (name.to_lowercase(), *grams))
        .collect();

    catalog
        .iter()
        .filter_map(|ing| stock.get(&ing.key()).map(|&grams| (ing.name.clone(), grams)))
        .collect()
}

/// Target grams of each macro for one meal.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct MacroTargets {
    pub protein: f64,
    pub carbs: f64,
    pub fats: f64,
}

impl MacroTargets {
    pub fn new(protein: f64, carbs: f64, fats: f64) -> Self {
        Self {
            protein,
            carbs,
            fats,
        }
    }
}
