use std::collections::{HashMap, HashSet};

use cookmate_shared::Recipe;
use serde::{Deserialize, Serialize};

use crate::aggregation::ShoppingAggregationService;
use crate::item::{CompletionStats, RawShoppingItem, RecipeShoppingItems, ShoppingItem};

/// Ids start right above this value when a list is created empty.
pub const ID_FLOOR: u64 = 100;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ViewMode {
    ByRecipe,
    #[default]
    Merged,
}

/// In-memory shopping list state.
///
/// Holds the recipes added to the list, the recipes taking part in the merged
/// view and the check-state of every raw item. Views are derived on demand.
#[derive(Clone, Debug)]
pub struct ShoppingList {
    recipe_items: Vec<RecipeShoppingItems>,
    selected: HashSet<String>,
    states: HashMap<u64, bool>,
    filter: Option<String>,
    view_mode: ViewMode,
    next_id: u64,
}

impl Default for ShoppingList {
    fn default() -> Self {
        Self::new()
    }
}

impl ShoppingList {
    pub fn new() -> Self {
        Self::with_recipe_items(vec![])
    }

    /// Seeds the list with existing contributions, all of them selected.
    ///
    /// Only the first entry of a recipe id is kept, and an item whose id was
    /// already seen is dropped, so seeded ids stay unique.
    pub fn with_recipe_items(seed: Vec<RecipeShoppingItems>) -> Self {
        let mut recipe_items: Vec<RecipeShoppingItems> = Vec::with_capacity(seed.len());
        let mut seen_ids = HashSet::new();

        for mut recipe in seed {
            if recipe_items.iter().any(|r| r.recipe_id == recipe.recipe_id) {
                tracing::warn!(recipe_id = %recipe.recipe_id, "duplicate seeded recipe dropped");
                continue;
            }

            recipe.items.retain(|item| {
                let fresh = seen_ids.insert(item.id);
                if !fresh {
                    tracing::warn!(item_id = item.id, "duplicate seeded item dropped");
                }
                fresh
            });

            recipe_items.push(recipe);
        }

        let max_id = seen_ids.iter().copied().max().unwrap_or(ID_FLOOR);

        let selected = recipe_items
            .iter()
            .map(|recipe| recipe.recipe_id.to_owned())
            .collect();

        Self {
            recipe_items,
            selected,
            states: HashMap::new(),
            filter: None,
            view_mode: ViewMode::default(),
            next_id: max_id + 1,
        }
    }

    pub fn recipe_items(&self) -> &[RecipeShoppingItems] {
        &self.recipe_items
    }

    pub fn selected_recipes(&self) -> &HashSet<String> {
        &self.selected
    }

    pub fn is_selected(&self, recipe_id: &str) -> bool {
        self.selected.contains(recipe_id)
    }

    pub fn is_checked(&self, item_id: u64) -> bool {
        self.states.get(&item_id).copied().unwrap_or(false)
    }

    pub fn view_mode(&self) -> ViewMode {
        self.view_mode
    }

    pub fn set_view_mode(&mut self, view_mode: ViewMode) {
        self.view_mode = view_mode;
    }

    pub fn filter(&self) -> Option<&str> {
        self.filter.as_deref()
    }

    /// Restricts the by-recipe view to one recipe, `None` shows them all.
    pub fn set_filter(&mut self, recipe_id: Option<String>) {
        if let Some(id) = recipe_id.as_deref()
            && !self.contains_recipe(id)
        {
            tracing::warn!(recipe_id = id, "filter on a recipe not in the shopping list ignored");
            return;
        }

        self.filter = recipe_id;
    }

    pub fn add_recipes(&mut self, recipes: &[Recipe]) {
        if recipes.is_empty() {
            return;
        }

        for recipe in recipes {
            let recipe_id = recipe.shopping_key();

            let Some(index) = self.position(&recipe_id) else {
                let items: Vec<RawShoppingItem> = recipe
                    .ingredients
                    .iter()
                    .map(|ingredient| RawShoppingItem {
                        id: self.generate_id(),
                        name: ingredient.name.to_owned(),
                        amount: ingredient.amount.to_owned(),
                        category: ingredient.category,
                    })
                    .collect();

                for item in &items {
                    self.states.entry(item.id).or_insert(false);
                }

                tracing::debug!(
                    recipe_id = %recipe_id,
                    items = items.len(),
                    "recipe added to shopping list"
                );

                self.recipe_items.push(RecipeShoppingItems {
                    recipe_id: recipe_id.to_owned(),
                    recipe_name: recipe.name.to_owned(),
                    items,
                });
                self.selected.insert(recipe_id);

                continue;
            };

            self.selected.insert(recipe_id.to_owned());

            let mut added = 0;
            for ingredient in &recipe.ingredients {
                let existing = self.recipe_items[index]
                    .items
                    .iter()
                    .find(|item| item.matches(&ingredient.name, ingredient.category))
                    .map(|item| item.id);

                let id = match existing {
                    Some(id) => id,
                    None => {
                        let id = self.generate_id();
                        self.recipe_items[index].items.push(RawShoppingItem {
                            id,
                            name: ingredient.name.to_owned(),
                            amount: ingredient.amount.to_owned(),
                            category: ingredient.category,
                        });
                        added += 1;
                        id
                    }
                };

                self.states.entry(id).or_insert(false);
            }

            tracing::debug!(recipe_id = %recipe_id, added, "recipe merged into shopping list");
        }
    }

    pub fn remove_recipe(&mut self, recipe_id: &str) {
        let Some(index) = self.position(recipe_id) else {
            return;
        };

        let recipe = self.recipe_items.remove(index);
        for item in &recipe.items {
            self.states.remove(&item.id);
        }

        self.selected.remove(recipe_id);

        if self.filter.as_deref() == Some(recipe_id) {
            self.filter = None;
        }

        tracing::debug!(recipe_id, "recipe removed from shopping list");
    }

    /// Flips an item, an item never touched before becomes checked.
    pub fn toggle_item(&mut self, item_id: u64) {
        let checked = self.states.entry(item_id).or_insert(false);
        *checked = !*checked;
    }

    pub fn toggle_recipe_selection(&mut self, recipe_id: &str) {
        if !self.selected.remove(recipe_id) {
            self.selected.insert(recipe_id.to_owned());
        }
    }

    pub fn merged_view(&self) -> Vec<ShoppingItem> {
        ShoppingAggregationService::merge(&self.recipe_items, &self.selected, &self.states)
    }

    pub fn by_recipe_view(&self, filter: Option<&str>) -> Vec<ShoppingItem> {
        self.recipe_items
            .iter()
            .filter(|recipe| filter.is_none_or(|id| recipe.recipe_id == id))
            .flat_map(|recipe| {
                recipe.items.iter().map(|item| {
                    ShoppingItem::project(item, &recipe.recipe_name, self.is_checked(item.id))
                })
            })
            .collect()
    }

    /// Rows of the active view mode.
    pub fn current_items(&self) -> Vec<ShoppingItem> {
        match self.view_mode {
            ViewMode::Merged => self.merged_view(),
            ViewMode::ByRecipe => self.by_recipe_view(self.filter()),
        }
    }

    pub fn completion(&self) -> CompletionStats {
        CompletionStats::of(&self.current_items())
    }

    pub fn completed_count(&self) -> usize {
        self.completion().checked
    }

    pub fn progress(&self) -> f64 {
        self.completion().ratio
    }

    pub fn clear_all(&mut self) {
        self.recipe_items.clear();
        self.selected.clear();
        self.states.clear();
        self.filter = None;
    }

    pub fn uncheck_all(&mut self) {
        self.states.values_mut().for_each(|checked| *checked = false);
    }

    fn contains_recipe(&self, recipe_id: &str) -> bool {
        self.position(recipe_id).is_some()
    }

    fn position(&self, recipe_id: &str) -> Option<usize> {
        self.recipe_items
            .iter()
            .position(|recipe| recipe.recipe_id == recipe_id)
    }

    fn generate_id(&mut self) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }
}
