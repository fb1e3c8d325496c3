pub mod aggregate;
pub mod constants;
pub mod model;
pub mod multi;
pub mod reverse;
pub mod single;

pub use aggregate::aggregate_totals;
pub use constants::*;
pub use model::build_problem;
pub use multi::{solve_multiple, solve_multiple_with_tolerance};
pub use reverse::solve_reverse;
pub use single::solve_single;
