use thiserror::Error;

#[derive(Debug, Error)]
pub enum SolverError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Your pantry is empty!")]
    EmptyPantry,

    #[error("No ingredients available in the catalog")]
    EmptyCatalog,

    #[error("LP solver error: {0}")]
    Lp(String),
}

pub type Result<T> = std::result::Result<T, SolverError>;
