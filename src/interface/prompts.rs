use dialoguer::{Confirm, Input, Select};
use strsim::jaro_winkler;

use crate::composer::{FavoritePolicy, FUZZY_MATCH_THRESHOLD};
use crate::error::{MealError, Result};
use crate::models::{FoodGroup, GroupId, IngredientId};

/// Entries of the edit menu, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Expand,
    IncreaseServing,
    DecreaseServing,
    ToggleFavorite,
    DeleteIngredient,
    DeleteGroup,
    FindByName,
    Save,
    Quit,
}

impl MenuChoice {
    pub const ALL: [MenuChoice; 9] = [
        MenuChoice::Expand,
        MenuChoice::IncreaseServing,
        MenuChoice::DecreaseServing,
        MenuChoice::ToggleFavorite,
        MenuChoice::DeleteIngredient,
        MenuChoice::DeleteGroup,
        MenuChoice::FindByName,
        MenuChoice::Save,
        MenuChoice::Quit,
    ];

    pub fn label(self) -> &'static str {
        match self {
            MenuChoice::Expand => "Expand / collapse a food",
            MenuChoice::IncreaseServing => "Increase servings",
            MenuChoice::DecreaseServing => "Decrease servings",
            MenuChoice::ToggleFavorite => "Toggle favorite",
            MenuChoice::DeleteIngredient => "Remove an ingredient",
            MenuChoice::DeleteGroup => "Remove a food",
            MenuChoice::FindByName => "Find a food by name",
            MenuChoice::Save => "Save and quit",
            MenuChoice::Quit => "Quit without saving",
        }
    }
}

/// Prompt for the next edit.
pub fn prompt_menu() -> Result<MenuChoice> {
    let labels: Vec<&str> = MenuChoice::ALL.iter().map(|c| c.label()).collect();
    let selection = Select::new()
        .with_prompt("What would you like to do?")
        .items(&labels)
        .default(0)
        .interact()?;
    Ok(MenuChoice::ALL[selection])
}

/// Prompt for one of the groups. `parents_only` limits the list to composites.
pub fn prompt_group(groups: &[FoodGroup], parents_only: bool) -> Result<GroupId> {
    let candidates: Vec<&FoodGroup> = groups
        .iter()
        .filter(|g| !parents_only || g.is_parent())
        .collect();

    if candidates.is_empty() {
        return Err(MealError::InvalidInput(
            "No matching foods to choose from".to_string(),
        ));
    }

    let labels: Vec<String> = candidates
        .iter()
        .map(|g| format!("{} ({})", g.name, g.serving_multiplier))
        .collect();
    let selection = Select::new()
        .with_prompt("Which food?")
        .items(&labels)
        .default(0)
        .interact()?;
    Ok(candidates[selection].id)
}

/// Prompt for an ingredient of `group`.
pub fn prompt_ingredient(group: &FoodGroup) -> Result<IngredientId> {
    if group.ingredients.is_empty() {
        return Err(MealError::InvalidInput(format!(
            "{} has no ingredients",
            group.name
        )));
    }

    let labels: Vec<String> = group
        .ingredients
        .iter()
        .map(|i| format!("{} ({})", i.name, i.quantity))
        .collect();
    let selection = Select::new()
        .with_prompt("Which ingredient?")
        .items(&labels)
        .default(0)
        .interact()?;
    Ok(group.ingredients[selection].id)
}

/// Whether favoriting `group` should ask which part of it to favorite.
pub fn asks_favorite_target(policy: FavoritePolicy, group: &FoodGroup) -> bool {
    policy == FavoritePolicy::Independent && group.is_parent()
}

/// Labels for the favorite picker: the whole dish first, then each ingredient.
pub fn favorite_target_labels(group: &FoodGroup) -> Vec<String> {
    std::iter::once(format!("Whole dish: {}", group.name))
        .chain(group.ingredients.iter().map(|i| format!("{} ({})", i.name, i.quantity)))
        .collect()
}

/// Map a favorite picker selection to an ingredient. Index 0 is the whole dish.
pub fn favorite_target_from_selection(group: &FoodGroup, selection: usize) -> Option<IngredientId> {
    selection
        .checked_sub(1)
        .and_then(|i| group.ingredients.get(i))
        .map(|i| i.id)
}

/// Prompt for the dish or one of its ingredients.
pub fn prompt_favorite_target(group: &FoodGroup) -> Result<Option<IngredientId>> {
    let labels = favorite_target_labels(group);
    let selection = Select::new()
        .with_prompt("Favorite which part?")
        .items(&labels)
        .default(0)
        .interact()?;
    Ok(favorite_target_from_selection(group, selection))
}

/// Prompt for a free-text food name.
pub fn prompt_name() -> Result<String> {
    let input: String = Input::new()
        .with_prompt("Food name")
        .interact_text()?;
    Ok(input.trim().to_string())
}

/// Prompt for yes/no confirmation.
pub fn prompt_yes_no(prompt: &str, default: bool) -> Result<bool> {
    Ok(Confirm::new()
        .with_prompt(prompt)
        .default(default)
        .interact()?)
}

/// Resolve a typed name to a group: exact match first, then the closest fuzzy match.
pub fn find_group_by_name(groups: &[FoodGroup], query: &str) -> Option<GroupId> {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return None;
    }

    if let Some(group) = groups.iter().find(|g| g.name.to_lowercase() == query) {
        return Some(group.id);
    }

    groups
        .iter()
        .map(|g| (g.id, jaro_winkler(&g.name.to_lowercase(), &query)))
        .filter(|(_, score)| *score > FUZZY_MATCH_THRESHOLD)
        .max_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal))
        .map(|(id, _)| id)
}
