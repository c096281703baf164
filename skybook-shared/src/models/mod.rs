pub mod cabin;
pub mod dietary;

pub use cabin::CabinClass;
pub use dietary::DietaryTag;
