pub mod aggregation;
pub mod item;
pub mod list;

pub use aggregation::ShoppingAggregationService;
pub use item::{CompletionStats, RawShoppingItem, RecipeShoppingItems, ShoppingItem};
pub use list::{ID_FLOOR, ShoppingList, ViewMode};
