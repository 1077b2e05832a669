mod error;
pub mod recipe;

pub use error::*;
pub use recipe::{Ingredient, IngredientCategory, Recipe, Step};
