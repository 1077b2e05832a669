use cookmate::Catalog;

pub fn recipes(config: cookmate::Config) -> anyhow::Result<()> {
    let catalog = Catalog::load(&config.catalog.path)?;

    tracing::info!(recipes = catalog.recipes().len(), "listing catalog");
    print!("{}", cookmate::render::recipe_list(catalog.recipes()));

    Ok(())
}
