use tracing::debug;

use crate::error::{MealError, Result};
use crate::interface::prompts::{
    asks_favorite_target, find_group_by_name, prompt_favorite_target, prompt_group,
    prompt_ingredient, prompt_menu, prompt_name, prompt_yes_no, MenuChoice,
};
use crate::interface::render::display_composition;
use crate::models::{FoodGroup, GroupId, IngredientId};
use crate::state::CompositionStore;

/// How an interactive session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionOutcome {
    Save,
    Discard,
}

/// Run the interactive edit loop until the user saves or quits.
pub fn edit_session(store: &mut CompositionStore) -> Result<SessionOutcome> {
    store.set_edit_mode(true);
    let step = store.config().serving_step;

    loop {
        display_composition(store, false);

        let choice = prompt_menu()?;
        let result = match choice {
            MenuChoice::Save => break finish(store, SessionOutcome::Save),
            MenuChoice::Quit => {
                if store.is_empty() || prompt_yes_no("Discard all changes?", false)? {
                    break finish(store, SessionOutcome::Discard);
                }
                continue;
            }
            _ if store.is_empty() => {
                println!("Nothing left to edit.");
                continue;
            }
            other => apply_choice(store, other, step),
        };

        match result {
            Ok(true) => {}
            Ok(false) => println!("No change."),
            // selection problems are reported and the loop continues
            Err(e @ (MealError::InvalidInput(_) | MealError::GroupNotFound(_))) => println!("{}", e),
            Err(e) => return Err(e),
        }
    }
}

fn finish(store: &mut CompositionStore, outcome: SessionOutcome) -> Result<SessionOutcome> {
    store.set_edit_mode(false);
    debug!(?outcome, "edit session finished");
    Ok(outcome)
}

/// Toggle a favorite, asking `pick` for the target only when the policy favors parts of a dish.
fn toggle_favorite_with<F>(store: &mut CompositionStore, id: GroupId, pick: F) -> Result<bool>
where
    F: FnOnce(&FoodGroup) -> Result<Option<IngredientId>>,
{
    let group = store
        .group(id)
        .ok_or_else(|| MealError::GroupNotFound(id.to_string()))?;
    let ingredient = if asks_favorite_target(store.config().favorite_policy, group) {
        pick(group)?
    } else {
        None
    };
    Ok(store.toggle_favorite(id, ingredient))
}

/// Prompt for the target of `choice` and dispatch it. Returns whether anything changed.
fn apply_choice(store: &mut CompositionStore, choice: MenuChoice, step: f64) -> Result<bool> {
    match choice {
        MenuChoice::Expand => {
            let id = prompt_group(store.groups(), true)?;
            Ok(store.toggle_expanded(id))
        }
        MenuChoice::IncreaseServing => {
            let id = prompt_group(store.groups(), false)?;
            Ok(store.change_serving_multiplier(id, step))
        }
        MenuChoice::DecreaseServing => {
            let id = prompt_group(store.groups(), false)?;
            Ok(store.change_serving_multiplier(id, -step))
        }
        MenuChoice::ToggleFavorite => {
            let id = prompt_group(store.groups(), false)?;
            toggle_favorite_with(store, id, prompt_favorite_target)
        }
        MenuChoice::DeleteIngredient => {
            let id = prompt_group(store.groups(), true)?;
            let group = store
                .group(id)
                .ok_or_else(|| MealError::GroupNotFound(id.to_string()))?;
            let ingredient = prompt_ingredient(group)?;
            Ok(store.delete_ingredient(id, ingredient))
        }
        MenuChoice::DeleteGroup => {
            let id = prompt_group(store.groups(), false)?;
            if !prompt_yes_no("Remove this food and all its ingredients?", true)? {
                return Ok(false);
            }
            Ok(store.delete_group(id))
        }
        MenuChoice::FindByName => {
            let name = prompt_name()?;
            let id = find_group_by_name(store.groups(), &name)
                .ok_or_else(|| MealError::GroupNotFound(name.clone()))?;
            if let Some(group) = store.group(id) {
                println!("Found: {} ({})", group.name, group.nutrition.summary());
            }
            let is_parent = store.group(id).is_some_and(|g| g.is_parent());
            Ok(is_parent && !store.is_expanded(id) && store.toggle_expanded(id))
        }
        MenuChoice::Save | MenuChoice::Quit => Ok(false),
    }
}
