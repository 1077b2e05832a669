use anyhow::Result;
use clap::{Parser, Subcommand};

mod cli;

/// cookmate - recipes, cooking steps and shopping lists
#[derive(Parser)]
#[command(name = "cookmate")]
#[command(about = "Browse recipes, cook step by step and build shopping lists", long_about = None)]
struct Cli {
    /// Path to configuration file
    #[arg(long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the recipes of the catalog
    Recipes,
    /// Build a shopping list from one or more recipes
    Shopping(cli::ShoppingArgs),
    /// Show the cooking steps of a recipe
    Cook {
        /// Recipe name
        #[arg(long)]
        recipe: String,

        /// Number of steps already done
        #[arg(long, default_value_t = 0)]
        advance: usize,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = cookmate::Config::load(cli.config.clone())?;
    config.validate().map_err(|e| anyhow::anyhow!(e))?;

    cookmate::observability::init_observability(
        "cookmate",
        env!("CARGO_PKG_VERSION"),
        &config.observability,
    )?;

    match cli.command {
        Commands::Recipes => cli::recipes(config),
        Commands::Shopping(args) => cli::shopping(config, args),
        Commands::Cook { recipe, advance } => cli::cook(config, recipe, advance),
    }
}
