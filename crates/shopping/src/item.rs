use cookmate_shared::IngredientCategory;
use serde::{Deserialize, Serialize};

/// An ingredient line contributed by exactly one recipe.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawShoppingItem {
    pub id: u64,
    pub name: String,
    pub amount: String,
    pub category: IngredientCategory,
}

impl RawShoppingItem {
    pub(crate) fn matches(&self, name: &str, category: IngredientCategory) -> bool {
        self.name == name && self.category == category
    }
}

/// Everything a single recipe contributes to the shopping list.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecipeShoppingItems {
    pub recipe_id: String,
    pub recipe_name: String,
    pub items: Vec<RawShoppingItem>,
}

/// A row as displayed by either view.
///
/// In the merged view one row stands for every raw item sharing the same
/// name and category, `amounts` and `recipes` keep the distinct values in
/// the order they were first seen.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShoppingItem {
    pub id: u64,
    pub name: String,
    pub amounts: Vec<String>,
    pub category: IngredientCategory,
    pub checked: bool,
    pub recipes: Vec<String>,
}

impl ShoppingItem {
    pub(crate) fn project(item: &RawShoppingItem, recipe_name: &str, checked: bool) -> Self {
        Self {
            id: item.id,
            name: item.name.to_owned(),
            amounts: vec![item.amount.to_owned()],
            category: item.category,
            checked,
            recipes: vec![recipe_name.to_owned()],
        }
    }

    pub fn merge_key(&self) -> String {
        format!("{}-{}", self.name, self.category)
    }

    pub fn joined_amounts(&self) -> String {
        self.amounts.join(" + ")
    }

    pub fn with_toggled(&self) -> Self {
        self.with_checked(!self.checked)
    }

    pub fn with_checked(&self, checked: bool) -> Self {
        Self {
            checked,
            ..self.clone()
        }
    }
}

/// Checked / total counters for a rendered list.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct CompletionStats {
    pub checked: usize,
    pub total: usize,
    pub ratio: f64,
}

impl CompletionStats {
    pub fn of(items: &[ShoppingItem]) -> Self {
        let total = items.len();
        let checked = items.iter().filter(|item| item.checked).count();
        let ratio = if total == 0 {
            0.0
        } else {
            checked as f64 / total as f64
        };

        Self {
            checked,
            total,
            ratio,
        }
    }

    pub fn is_complete(&self) -> bool {
        self.total > 0 && self.checked == self.total
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(name: &str, amounts: &[&str], checked: bool) -> ShoppingItem {
        ShoppingItem {
            id: 1,
            name: name.to_owned(),
            amounts: amounts.iter().map(|a| a.to_string()).collect(),
            category: IngredientCategory::Seasoning,
            checked,
            recipes: vec!["Fried rice".to_owned()],
        }
    }

    #[test]
    fn test_joined_amounts() {
        assert_eq!(item("Salt", &["1tsp", "a pinch"], false).joined_amounts(), "1tsp + a pinch");
        assert_eq!(item("Salt", &["1tsp"], false).joined_amounts(), "1tsp");
    }

    #[test]
    fn test_merge_key() {
        assert_eq!(item("Salt", &["1tsp"], false).merge_key(), "Salt-seasoning");
    }

    #[test]
    fn test_with_toggled_and_with_checked() {
        let salt = item("Salt", &["1tsp"], false);
        assert!(salt.with_toggled().checked);
        assert!(!salt.with_toggled().with_toggled().checked);
        assert!(salt.with_checked(true).checked);
        assert!(!salt.checked);
    }

    #[test]
    fn test_completion_stats() {
        let empty = CompletionStats::of(&[]);
        assert_eq!(empty.total, 0);
        assert_eq!(empty.ratio, 0.0);
        assert!(!empty.is_complete());

        let items = vec![
            item("Salt", &["1tsp"], true),
            item("Oil", &["to taste"], false),
            item("Sugar", &["half tsp"], true),
            item("Soy sauce", &["3 spoons"], false),
        ];
        let stats = CompletionStats::of(&items);
        assert_eq!(stats.checked, 2);
        assert_eq!(stats.total, 4);
        assert_eq!(stats.ratio, 0.5);

        let all = CompletionStats::of(&[item("Salt", &["1tsp"], true)]);
        assert!(all.is_complete());
        assert_eq!(all.ratio, 1.0);
    }
}
