pub mod cli;
pub mod error;
pub mod interface;
pub mod models;
pub mod solver;
pub mod state;

pub use error::{Result, SolverError};
pub use models::{Candidate, MacroTargets, MacroTotals, MealPlan, NutrientProfile};
