use std::collections::{HashMap, HashSet};

use cookmate_shared::IngredientCategory;

use crate::item::{RecipeShoppingItems, ShoppingItem};

/// Shopping list aggregation service
///
/// Stateless domain service that folds the raw items of the selected recipes
/// into one row per `(name, category)`.
///
/// - "Egg 3" (A) + "Egg 2" (B) = "Egg 3 + 2" bought for A and B
/// - "Egg 3" (A) + "Egg 3" (B) = "Egg 3", the amount is listed once
/// - "Onion" as vegetable and "Onion" as seasoning stay two rows
pub struct ShoppingAggregationService;

impl ShoppingAggregationService {
    /// Merge the raw items of every selected recipe
    ///
    /// # Arguments
    /// * `recipe_items` - Contributions in the order they were added
    /// * `selected` - Recipe ids taking part in the merge
    /// * `states` - Check-state by raw item id
    ///
    /// # Returns
    /// Rows sorted by category order, then by name
    pub fn merge(
        recipe_items: &[RecipeShoppingItems],
        selected: &HashSet<String>,
        states: &HashMap<u64, bool>,
    ) -> Vec<ShoppingItem> {
        let mut rows: HashMap<(String, IngredientCategory), ShoppingItem> = HashMap::new();

        for recipe in recipe_items
            .iter()
            .filter(|recipe| selected.contains(&recipe.recipe_id))
        {
            for item in &recipe.items {
                let key = (item.name.to_owned(), item.category);

                let Some(existing) = rows.get_mut(&key) else {
                    let checked = states.get(&item.id).copied().unwrap_or(false);
                    rows.insert(
                        key,
                        ShoppingItem::project(item, &recipe.recipe_name, checked),
                    );
                    continue;
                };

                if !existing.amounts.contains(&item.amount) {
                    existing.amounts.push(item.amount.to_owned());
                }

                if !existing.recipes.contains(&recipe.recipe_name) {
                    existing.recipes.push(recipe.recipe_name.to_owned());
                }

                // Last tracked contributor decides, rows of untracked items keep their flag
                if let Some(checked) = states.get(&item.id) {
                    existing.checked = *checked;
                }
            }
        }

        let mut result: Vec<ShoppingItem> = rows.into_values().collect();

        result.sort_by(|a, b| a.category.cmp(&b.category).then_with(|| a.name.cmp(&b.name)));

        result
    }
}
