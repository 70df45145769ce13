use crate::composer::scaled_quantity;
use crate::models::{trim_number, AnalysisRecord, FoodGroup, Ingredient, Nutrition};
use crate::state::CompositionStore;

fn star(is_favorite: bool) -> &'static str {
    if is_favorite { " *" } else { "" }
}

/// One table line for a group, using the scaled display quantity.
pub fn format_group_line(index: usize, group: &FoodGroup, name_width: usize) -> String {
    let marker = if group.is_parent() { "+" } else { " " };
    let branded = if group.is_branded { " [branded]" } else { "" };
    format!(
        "{:>3}.{} {:<width$}  {:<14} {:>5}  {}{}{}",
        index + 1,
        marker,
        group.name,
        scaled_quantity(&group.original_quantity, group.serving_multiplier),
        group.serving_multiplier.to_string(),
        group.nutrition.summary(),
        branded,
        star(group.is_favorite),
        width = name_width
    )
}

/// One indented line for an ingredient.
pub fn format_ingredient_line(ingredient: &Ingredient) -> String {
    format!(
        "        - {} ({}) {}{}",
        ingredient.name,
        ingredient.quantity,
        ingredient.nutrition.summary(),
        star(ingredient.is_favorite)
    )
}

fn format_total(total: &Nutrition) -> String {
    format!(
        "Total: {:.0} cal | Protein {} g | Carbs {} g | Fat {} g",
        total.calories,
        trim_number(total.protein),
        trim_number(total.carbs),
        trim_number(total.fat)
    )
}

/// Width of the name column, in characters.
pub fn name_width(groups: &[FoodGroup]) -> usize {
    groups.iter().map(|g| g.name.chars().count()).max().unwrap_or(10)
}

/// Print the session's groups. Composite ingredients show when expanded or `expand_all`.
pub fn display_composition(store: &CompositionStore, expand_all: bool) {
    if store.is_empty() {
        println!("No foods in this meal.");
        return;
    }

    println!();
    println!("=== Meal ({} items) ===", store.len());
    println!();

    let name_width = name_width(store.groups());

    for (i, group) in store.groups().iter().enumerate() {
        println!("{}", format_group_line(i, group, name_width));
        if group.is_parent() && (expand_all || store.is_expanded(group.id)) {
            for ingredient in &group.ingredients {
                println!("{}", format_ingredient_line(ingredient));
            }
        }
    }

    println!();
    println!("{}", format_total(&store.total()));
    println!();
}

/// Print a saved record as a compact list.
pub fn display_record(record: &AnalysisRecord) {
    println!();
    println!("=== Saved meal ({} items) ===", record.foods.len());
    for food in &record.foods {
        println!("  {} ({}) - {}", food.name, food.quantity, food.nutrition.summary());
        for ingredient in &food.ingredients {
            println!("      - {} ({})", ingredient.name, ingredient.quantity);
        }
    }
    println!("{}", format_total(&record.total));
    println!();
}
