use std::collections::HashMap;
use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::Result;
use crate::models::{CatalogIngredient, NutrientProfile};

/// Load the ingredient catalog from a JSON array.
///
/// Deduplicates by lowercase name (last occurrence wins).
pub fn load_catalog<P: AsRef<Path>>(path: P) -> Result<Vec<CatalogIngredient>> {
    let content = fs::read_to_string(path)?;
    let ingredients: Vec<CatalogIngredient> = serde_json::from_str(&content)?;
    Ok(dedup_by_key(ingredients))
}

/// Save the ingredient catalog as pretty-printed JSON.
pub fn save_catalog<P: AsRef<Path>>(path: P, ingredients: &[CatalogIngredient]) -> Result<()> {
    let deduped = dedup_by_key(ingredients.to_vec());
    let json = serde_json::to_string_pretty(&deduped)?;
    fs::write(path, json)?;
    Ok(())
}

/// Load pantry stock: a JSON object of ingredient name to grams on hand.
pub fn load_pantry<P: AsRef<Path>>(path: P) -> Result<HashMap<String, f64>> {
    let content = fs::read_to_string(path)?;
    let pantry: HashMap<String, f64> = serde_json::from_str(&content)?;
    Ok(pantry)
}

/// Save pantry stock as pretty-printed JSON.
pub fn save_pantry<P: AsRef<Path>>(path: P, pantry: &HashMap<String, f64>) -> Result<()> {
    let json = serde_json::to_string_pretty(pantry)?;
    fs::write(path, json)?;
    Ok(())
}

/// One CSV row of a catalog import. Headers match the JSON wire names.
#[derive(Debug, Deserialize)]
struct CsvIngredient {
    name: String,

    #[serde(rename = "caloriesPer100g")]
    calories_per_100g: f64,

    #[serde(rename = "proteinPer100g")]
    protein_per_100g: f64,

    #[serde(rename = "carbsPer100g")]
    carbs_per_100g: f64,

    #[serde(rename = "fatsPer100g")]
    fats_per_100g: f64,
}

/// Import a catalog from CSV, deduplicated by lowercase name (last wins).
pub fn import_catalog_csv<P: AsRef<Path>>(path: P) -> Result<Vec<CatalogIngredient>> {
    let mut reader = csv::Reader::from_path(path)?;
    let mut ingredients = Vec::new();

    for row in reader.deserialize() {
        let row: CsvIngredient = row?;
        ingredients.push(CatalogIngredient {
            name: row.name,
            profile: NutrientProfile::new(
                row.calories_per_100g,
                row.protein_per_100g,
                row.carbs_per_100g,
                row.fats_per_100g,
            ),
        });
    }

    Ok(dedup_by_key(ingredients))
}

fn dedup_by_key(ingredients: Vec<CatalogIngredient>) -> Vec<CatalogIngredient> {
    let mut seen: HashMap<String, CatalogIngredient> = HashMap::new();
    for ingredient in ingredients {
        seen.insert(ingredient.key(), ingredient);
    }
    let mut deduped: Vec<CatalogIngredient> = seen.into_values().collect();
    deduped.sort_by(|a, b| a.name.cmp(&b.name));
    deduped
}
