use clap::{Parser, Subcommand};

use crate::solver::constants::{
    CATALOG_CEILING_GRAMS, DEFAULT_PLAN_COUNT, MACRO_TOLERANCE_GRAMS,
};

/// PantryMacro — solve meals that hit macro targets from what you have on hand.
#[derive(Parser, Debug)]
#[command(name = "pantry_macro")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Path to the ingredient catalog JSON file.
    #[arg(long, default_value = "catalog.json")]
    pub catalog: String,

    /// Path to the pantry stock JSON file.
    #[arg(long, default_value = "pantry.json")]
    pub pantry: String,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Solve meals from pantry stock hitting the given macro targets.
    Solve {
        /// Target protein in grams.
        #[arg(long)]
        protein: f64,

        /// Target carbs in grams.
        #[arg(long)]
        carbs: f64,

        /// Target fats in grams.
        #[arg(long)]
        fats: f64,

        /// How many distinct plans to look for.
        #[arg(
            long,
            default_value_t = DEFAULT_PLAN_COUNT as u64,
            value_parser = clap::value_parser!(u64).range(1..=100)
        )]
        count: u64,

        /// Accepted band half-width around each target, in grams.
        #[arg(long, default_value_t = MACRO_TOLERANCE_GRAMS)]
        tolerance: f64,

        /// Seed for the cost jitter (reproducible runs).
        #[arg(long)]
        seed: Option<u64>,

        /// Emit JSON instead of a table.
        #[arg(long)]
        json: bool,
    },

    /// Solve against the full catalog and produce a shopping list.
    Reverse {
        /// Target protein in grams.
        #[arg(long)]
        protein: f64,

        /// Target carbs in grams.
        #[arg(long)]
        carbs: f64,

        /// Target fats in grams.
        #[arg(long)]
        fats: f64,

        /// Per-ingredient usage cap in grams.
        #[arg(long, default_value_t = CATALOG_CEILING_GRAMS)]
        ceiling: f64,

        /// Accepted band half-width around each target, in grams.
        #[arg(long, default_value_t = MACRO_TOLERANCE_GRAMS)]
        tolerance: f64,

        /// Seed for the cost jitter (reproducible runs).
        #[arg(long)]
        seed: Option<u64>,

        /// Emit JSON instead of a table.
        #[arg(long)]
        json: bool,
    },

    /// Replace the ingredient catalog from a CSV file.
    Import {
        /// CSV file with name,caloriesPer100g,proteinPer100g,carbsPer100g,fatsPer100g.
        #[arg(long)]
        input: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    fn solve_args(count: &str) -> Vec<&str> {
        vec![
            "pantry_macro",
            "solve",
            "--protein",
            "30",
            "--carbs",
            "40",
            "--fats",
            "10",
            "--count",
            count,
        ]
    }

    #[test]
    fn test_count_defaults() {
        let cli = Cli::try_parse_from([
            "pantry_macro",
            "solve",
            "--protein",
            "30",
            "--carbs",
            "40",
            "--fats",
            "10",
        ])
        .unwrap();
        match cli.command {
            Command::Solve { count, .. } => assert_eq!(count, DEFAULT_PLAN_COUNT as u64),
            _ => panic!("expected solve command"),
        }
    }

    #[test]
    fn test_count_rejects_zero() {
        assert!(Cli::try_parse_from(solve_args("0")).is_err());
    }

    #[test]
    fn test_count_rejects_huge_values() {
        assert!(Cli::try_parse_from(solve_args("5000")).is_err());
        assert!(Cli::try_parse_from(solve_args("18446744073709551615")).is_err());
    }

    #[test]
    fn test_count_accepts_in_range() {
        let cli = Cli::try_parse_from(solve_args("10")).unwrap();
        match cli.command {
            Command::Solve { count, .. } => assert_eq!(count, 10),
            _ => panic!("expected solve command"),
        }
    }
}
