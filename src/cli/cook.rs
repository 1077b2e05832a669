use cookmate::Catalog;
use cookmate_cooking::CookingProgress;

pub fn cook(config: cookmate::Config, recipe: String, advance: usize) -> anyhow::Result<()> {
    let catalog = Catalog::load(&config.catalog.path)?;

    let Some(recipe) = catalog.find(&recipe) else {
        anyhow::bail!("recipe '{recipe}' not found in catalog");
    };

    let mut progress = CookingProgress::new(recipe.steps.to_owned())?;
    for _ in 0..advance {
        progress.next();
    }

    tracing::info!(
        recipe = %recipe.name,
        step = progress.current_index() + 1,
        "cooking"
    );
    print!("{}", cookmate::render::cooking_step(&progress));

    Ok(())
}
