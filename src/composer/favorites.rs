//! Favorite state transitions for a group and its ingredients.
//!
//! Each transition takes a whole group and returns the next one, so the group
//! and its ingredients are always updated together.

use serde::{Deserialize, Serialize};

use crate::models::{FoodGroup, IngredientId};

/// How a favorite toggle propagates through a composite.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum FavoritePolicy {
    /// All-or-nothing: the group and every ingredient share one state.
    #[default]
    Cascade,
    /// Ingredients toggle on their own; the group is favorite only when all are.
    Independent,
}

/// True if the group or any of its ingredients is favorited.
pub fn any_favorited(group: &FoodGroup) -> bool {
    group.is_favorite || group.ingredients.iter().any(|i| i.is_favorite)
}

/// All-or-nothing toggle over the whole group.
pub fn cascade(group: &FoodGroup) -> FoodGroup {
    let next_state = !any_favorited(group);
    let mut next = group.clone();
    next.is_favorite = next_state;
    for ingredient in &mut next.ingredients {
        ingredient.is_favorite = next_state;
    }
    next
}

/// Toggle one ingredient, then set the group to "every ingredient favorited".
///
/// Returns `None` if the ingredient is not part of the group.
pub fn toggle_ingredient(group: &FoodGroup, ingredient_id: IngredientId) -> Option<FoodGroup> {
    let mut next = group.clone();
    let ingredient = next.ingredients.iter_mut().find(|i| i.id == ingredient_id)?;
    ingredient.is_favorite = !ingredient.is_favorite;
    next.is_favorite = next.ingredients.iter().all(|i| i.is_favorite);
    Some(next)
}

/// Apply a favorite toggle under `policy`.
///
/// Under [`FavoritePolicy::Cascade`] an ingredient id only selects the group;
/// the whole group toggles. Unknown ingredient ids yield `None`.
pub fn toggle(
    policy: FavoritePolicy,
    group: &FoodGroup,
    ingredient_id: Option<IngredientId>,
) -> Option<FoodGroup> {
    match (policy, ingredient_id) {
        (_, None) => Some(cascade(group)),
        (FavoritePolicy::Cascade, Some(id)) => group.ingredient(id).map(|_| cascade(group)),
        (FavoritePolicy::Independent, Some(id)) => toggle_ingredient(group, id),
    }
}
