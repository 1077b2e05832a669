use std::collections::BTreeSet;

use clap::{Args, ValueEnum};
use cookmate::Catalog;
use cookmate_shared::Recipe;
use cookmate_shopping::{ShoppingList, ViewMode};

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ViewArg {
    Merged,
    ByRecipe,
}

impl From<ViewArg> for ViewMode {
    fn from(value: ViewArg) -> Self {
        match value {
            ViewArg::Merged => ViewMode::Merged,
            ViewArg::ByRecipe => ViewMode::ByRecipe,
        }
    }
}

#[derive(Args)]
pub struct ShoppingArgs {
    /// Recipe to shop for, repeat for several
    #[arg(long = "recipe", required = true)]
    recipes: Vec<String>,

    /// View to print (overrides config file)
    #[arg(long, value_enum)]
    view: Option<ViewArg>,

    /// Only list this recipe in the by-recipe view
    #[arg(long)]
    filter: Option<String>,

    /// Item id to check off, repeat for several
    #[arg(long = "check")]
    checks: Vec<u64>,

    /// Leave a recipe out of the merged view, naming it twice has no extra effect
    #[arg(long = "deselect")]
    deselects: Vec<String>,

    /// Print the list as JSON
    #[arg(long)]
    json: bool,
}

pub fn shopping(config: cookmate::Config, args: ShoppingArgs) -> anyhow::Result<()> {
    let catalog = Catalog::load(&config.catalog.path)?;
    let recipes = catalog.find_all(args.recipes.iter().map(String::as_str))?;

    let mut list = ShoppingList::new();
    list.add_recipes(&recipes);
    list.set_view_mode(
        args.view
            .map(ViewMode::from)
            .unwrap_or(config.shopping.default_view),
    );

    let mut deselected = BTreeSet::new();
    for name in &args.deselects {
        deselected.insert(on_list(&recipes, name)?.shopping_key());
    }

    for recipe_id in &deselected {
        list.toggle_recipe_selection(recipe_id);
    }

    if let Some(name) = &args.filter {
        list.set_filter(Some(on_list(&recipes, name)?.shopping_key()));
    }

    for id in &args.checks {
        list.toggle_item(*id);
    }

    let items = list.current_items();
    tracing::info!(
        recipes = recipes.len(),
        items = items.len(),
        "shopping list built"
    );

    if args.json {
        println!("{}", serde_json::to_string_pretty(&items)?);
    } else {
        print!(
            "{}",
            cookmate::render::shopping_list(&items, list.view_mode())
        );
    }

    Ok(())
}

fn on_list<'a>(recipes: &'a [Recipe], name: &str) -> anyhow::Result<&'a Recipe> {
    Catalog::find_in(recipes, name)
        .ok_or_else(|| anyhow::anyhow!("recipe '{}' is not on the shopping list", name.trim()))
}
