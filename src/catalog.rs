use std::path::Path;

use cookmate_shared::Recipe;
use validator::Validate;

/// Recipes available to the command line, loaded from a JSON array.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    recipes: Vec<Recipe>,
}

impl Catalog {
    pub fn new(recipes: Vec<Recipe>) -> cookmate_shared::Result<Self> {
        for recipe in &recipes {
            recipe.validate()?;
        }

        Ok(Self { recipes })
    }

    pub fn from_json(json: &str) -> cookmate_shared::Result<Self> {
        let recipes: Vec<Recipe> = serde_json::from_str(json)?;

        Self::new(recipes)
    }

    pub fn load(path: impl AsRef<Path>) -> cookmate_shared::Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let catalog = Self::from_json(&json)?;

        tracing::debug!(
            path = %path.display(),
            recipes = catalog.recipes.len(),
            "catalog loaded"
        );

        Ok(catalog)
    }

    pub fn recipes(&self) -> &[Recipe] {
        &self.recipes
    }

    /// Case-insensitive lookup by recipe name.
    pub fn find(&self, name: &str) -> Option<&Recipe> {
        Self::find_in(&self.recipes, name)
    }

    /// Name lookup shared by every command line option naming a recipe:
    /// surrounding whitespace is ignored and case is folded (Unicode aware).
    pub fn find_in<'a>(recipes: &'a [Recipe], name: &str) -> Option<&'a Recipe> {
        let name = name.trim().to_lowercase();

        recipes
            .iter()
            .find(|recipe| recipe.name.trim().to_lowercase() == name)
    }

    pub fn find_all<'a>(
        &self,
        names: impl IntoIterator<Item = &'a str>,
    ) -> cookmate_shared::Result<Vec<Recipe>> {
        let mut recipes = vec![];

        for name in names {
            let Some(recipe) = self.find(name) else {
                cookmate_shared::bail!("recipe '{}' not found in catalog", name);
            };

            recipes.push(recipe.clone());
        }

        Ok(recipes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cookmate_shared::{Error, IngredientCategory};

    const CATALOG: &str = r#"[
        {
            "name": "Tomato and egg",
            "difficulty": "easy",
            "ingredients": [
                {"name": "Egg", "amount": "3", "category": "main"},
                {"name": "Tomato", "amount": "2", "category": "main"}
            ],
            "steps": [
                {"id": 1, "description": "Blanch the tomatoes", "duration": 180}
            ]
        },
        {
            "name": "Egg fried rice",
            "ingredients": [
                {"name": "Egg", "amount": "3", "category": "dairy"},
                {"name": "Rice", "amount": "2 bowls", "category": "staple"}
            ]
        }
    ]"#;

    #[test]
    fn test_from_json() {
        let catalog = Catalog::from_json(CATALOG).unwrap();

        assert_eq!(catalog.recipes().len(), 2);
        assert_eq!(catalog.recipes()[0].steps.len(), 1);
        assert_eq!(
            catalog.recipes()[1].ingredients[1].category,
            IngredientCategory::Staple
        );
    }

    #[test]
    fn test_find_case_insensitive() {
        let catalog = Catalog::from_json(CATALOG).unwrap();

        let recipe = catalog.find("  egg FRIED rice ").unwrap();
        assert_eq!(recipe.name, "Egg fried rice");
        assert!(catalog.find("Braised pork").is_none());
    }

    #[test]
    fn test_find_non_ascii_names() {
        let catalog = Catalog::from_json(
            r#"[
                {"name": "番茄炒蛋", "ingredients": []},
                {"name": "Crème Brûlée", "ingredients": []}
            ]"#,
        )
        .unwrap();

        assert_eq!(catalog.find(" 番茄炒蛋 ").unwrap().name, "番茄炒蛋");
        assert_eq!(catalog.find("CRÈME BRÛLÉE").unwrap().name, "Crème Brûlée");

        let picked = catalog.find_all(["crème brûlée"]).unwrap();
        let on_list = Catalog::find_in(&picked, "  CRÈME brûlée ").unwrap();
        assert_eq!(on_list.id, picked[0].id);
        assert!(Catalog::find_in(&picked, "番茄炒蛋").is_none());
    }

    #[test]
    fn test_find_all_keeps_identity() {
        let catalog = Catalog::from_json(CATALOG).unwrap();

        let found = catalog.find_all(["Tomato and egg", "Egg fried rice"]).unwrap();
        assert_eq!(found.len(), 2);
        assert_eq!(found[0].id, catalog.recipes()[0].id);

        let missing = catalog.find_all(["Tomato and egg", "Braised pork"]);
        assert!(matches!(missing, Err(Error::Server(_))));
    }

    #[test]
    fn test_invalid_catalog_rejected() {
        let unnamed = r#"[{"name": "", "ingredients": []}]"#;
        assert!(matches!(
            Catalog::from_json(unnamed),
            Err(Error::Validate(_))
        ));

        assert!(matches!(
            Catalog::from_json("{not json"),
            Err(Error::Json(_))
        ));
    }
}
