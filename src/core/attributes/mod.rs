mod category;
mod ternary_value;

pub use category::{Category, NUMBER_OF_CATEGORIES};
pub use ternary_value::{NUMBER_OF_BRANCHES, TernaryValue};
