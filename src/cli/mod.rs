mod cook;
mod recipes;
mod shopping;

pub use cook::cook;
pub use recipes::recipes;
pub use shopping::{ShoppingArgs, shopping};
