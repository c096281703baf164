pub mod search;
pub mod selection;

pub use search::{SearchParams, SearchRequest, MAX_PASSENGERS, MIN_PASSENGERS};
pub use selection::{ToggleOutcome, ToggleSet};

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Validation failed: {0}")]
    Validation(String),
}

pub type CoreResult<T> = Result<T, CoreError>;
