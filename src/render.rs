use cookmate_cooking::{CookingProgress, StepStatus, format_clock};
use cookmate_shared::Recipe;
use cookmate_shopping::{CompletionStats, ShoppingItem, ViewMode};

/// Plain text shopping list.
///
/// The merged view gets one header per category, the by-recipe view one
/// header per recipe in the order the recipes were added.
pub fn shopping_list(items: &[ShoppingItem], view_mode: ViewMode) -> String {
    let mut out = String::new();
    let mut last_header = None;

    for item in items {
        let header = match view_mode {
            ViewMode::Merged => item.category.to_string(),
            ViewMode::ByRecipe => item.recipes.first().cloned().unwrap_or_default(),
        };

        if last_header.as_ref() != Some(&header) {
            out.push_str(&format!("== {header} ==\n"));
            last_header = Some(header);
        }

        let mark = if item.checked { "x" } else { " " };
        out.push_str(&format!(
            "[{mark}] #{} {}  {}",
            item.id,
            item.name,
            item.joined_amounts()
        ));

        if view_mode == ViewMode::Merged {
            out.push_str(&format!("  ({})", item.recipes.join(", ")));
        }

        out.push('\n');
    }

    let stats = CompletionStats::of(items);
    out.push_str(&format!(
        "{}/{} checked ({:.0}%)\n",
        stats.checked,
        stats.total,
        stats.ratio * 100.0
    ));

    if stats.is_complete() {
        out.push_str("All items checked, happy shopping!\n");
    }

    out
}

pub fn recipe_list(recipes: &[Recipe]) -> String {
    let mut out = String::new();

    for recipe in recipes {
        out.push_str(&format!(
            "{}  {} ingredients, {} steps",
            recipe.name,
            recipe.ingredients.len(),
            recipe.steps.len()
        ));

        if !recipe.time.is_empty() {
            out.push_str(&format!(", {}", recipe.time));
        }

        if !recipe.difficulty.is_empty() {
            out.push_str(&format!(", {}", recipe.difficulty));
        }

        out.push('\n');
    }

    out
}

pub fn cooking_step(progress: &CookingProgress) -> String {
    let strip: Vec<&str> = (0..progress.steps().len())
        .map(|index| match progress.step_status(index) {
            StepStatus::Current => "[>]",
            StepStatus::Completed => "[x]",
            StepStatus::Pending => "[ ]",
        })
        .collect();

    let step = progress.current_step();
    let mut out = format!(
        "Step {}/{}  {}\n{}\n",
        progress.current_index() + 1,
        progress.steps().len(),
        strip.join(""),
        step.description
    );

    if !step.tip.is_empty() {
        out.push_str(&format!("Tip: {}\n", step.tip));
    }

    out.push_str(&format!(
        "Time left {}, {:.0}% done\n",
        format_clock(progress.time_left()),
        progress.progress() * 100.0
    ));

    if progress.show_completion() {
        out.push_str("All steps done, enjoy your meal!\n");
    } else {
        out.push_str(&format!("{}\n", progress.encouragement()));
    }

    out
}
