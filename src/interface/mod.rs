pub mod render;

pub use render::{display_meal_plans, display_reverse_solution};
