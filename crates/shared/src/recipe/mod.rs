use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString, VariantArray};
use uuid::Uuid;
use validator::Validate;

/// Ingredient grouping shared by recipes and the shopping list.
///
/// Declaration order is the display order of a shopping list, the derived
/// `Ord` relies on it.
#[derive(
    EnumString,
    Display,
    VariantArray,
    AsRefStr,
    Default,
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum IngredientCategory {
    /// Main ingredients of the dish
    Main,
    /// Garnish and secondary ingredients
    Supplement,
    Seasoning,
    Vegetable,
    Meat,
    /// Eggs and dairy products
    Dairy,
    /// Rice, noodles, bread
    Staple,
    #[default]
    Other,
}

#[derive(Validate, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Ingredient {
    #[validate(length(min = 1))]
    pub name: String,
    /// Free-form quantity such as "2 cloves" or "to taste"
    pub amount: String,
    #[serde(default)]
    pub category: IngredientCategory,
}

impl Ingredient {
    pub fn new(
        name: impl Into<String>,
        amount: impl Into<String>,
        category: IngredientCategory,
    ) -> Self {
        Self {
            name: name.into(),
            amount: amount.into(),
            category,
        }
    }
}

#[derive(Validate, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Step {
    pub id: u32,
    #[validate(length(min = 1))]
    pub description: String,
    /// Suggested duration in seconds
    pub duration: u64,
    #[serde(default)]
    pub tip: String,
}

impl Step {
    pub fn new(id: u32, description: impl Into<String>, duration: u64) -> Self {
        Self {
            id,
            description: description.into(),
            duration,
            tip: String::new(),
        }
    }
}

#[derive(Validate, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Recipe {
    #[serde(default = "Uuid::new_v4")]
    pub id: Uuid,
    #[validate(length(min = 1))]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub time: String,
    #[serde(default)]
    pub servings: String,
    #[serde(default)]
    pub difficulty: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub likes: u32,
    #[serde(default)]
    pub saved_at: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[validate(nested)]
    #[serde(default)]
    pub ingredients: Vec<Ingredient>,
    #[validate(nested)]
    #[serde(default)]
    pub steps: Vec<Step>,
}

impl Recipe {
    /// Builds a recipe with a fresh identity and no steps.
    pub fn new(name: impl Into<String>, ingredients: Vec<Ingredient>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            description: String::new(),
            time: String::new(),
            servings: String::new(),
            difficulty: String::new(),
            tags: vec![],
            likes: 0,
            saved_at: None,
            image_url: None,
            ingredients,
            steps: vec![],
        }
    }

    /// Key under which this recipe contributes to a shopping list.
    pub fn shopping_key(&self) -> String {
        format!("import-{}", self.id)
    }
}
