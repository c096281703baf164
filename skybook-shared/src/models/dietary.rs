use serde::{Deserialize, Serialize};

/// Dietary labels attached to a meal option.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "lowercase")]
pub enum DietaryTag {
    Halal,
    Vegetarian,
    Vegan,
}
