pub mod models;
pub mod pii;

pub use models::{CabinClass, DietaryTag};
pub use pii::Masked;
