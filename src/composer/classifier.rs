//! Turns an analysis result into an ordered list of food groups.
//!
//! When the analyzer already supplied a hierarchy it is mapped one-to-one.
//! Otherwise a single left-to-right keyword scan groups likely ingredients
//! under the most recent composite dish.

use tracing::debug;

use crate::composer::constants::{
    COMPOSITE_KEYWORDS, FIRST_POSITION_INGREDIENT, INGREDIENT_KEYWORDS,
};
use crate::models::{FoodEntry, FoodGroup, GroupId, Ingredient, IngredientId};

/// Where a flat entry lands during the heuristic scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Classification {
    /// Opens a new composite, closing any open one.
    Composite,
    /// Attaches to the open composite.
    IngredientOf(GroupId),
    /// Becomes its own group.
    Standalone,
}

fn contains_any(name: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|k| name.contains(k))
}

pub fn is_composite_name(name: &str) -> bool {
    contains_any(&name.to_lowercase(), COMPOSITE_KEYWORDS)
}

/// Whether an entry at `index` would be accepted as an ingredient if a composite were open.
pub fn is_ingredient_candidate(name: &str, index: usize) -> bool {
    let lower = name.to_lowercase();
    if lower.contains(FIRST_POSITION_INGREDIENT) {
        return index == 0;
    }
    contains_any(&lower, INGREDIENT_KEYWORDS)
}

/// Decide the fate of one flat entry given the currently open composite.
pub fn classify_entry(name: &str, index: usize, open: Option<GroupId>) -> Classification {
    if is_composite_name(name) {
        return Classification::Composite;
    }
    match open {
        Some(parent) if is_ingredient_candidate(name, index) => Classification::IngredientOf(parent),
        _ => Classification::Standalone,
    }
}

/// Build the group hierarchy for an analysis result.
///
/// Deterministic: the same ordered input always yields the same groups and ids.
pub fn classify(entries: &[FoodEntry]) -> Vec<FoodGroup> {
    if entries.iter().any(FoodEntry::has_ingredients) {
        from_hierarchy(entries)
    } else {
        from_flat(entries)
    }
}

fn from_hierarchy(entries: &[FoodEntry]) -> Vec<FoodGroup> {
    entries
        .iter()
        .enumerate()
        .map(|(i, entry)| {
            let ingredients = entry
                .ingredients
                .iter()
                .enumerate()
                .map(|(j, ing)| {
                    Ingredient::new(IngredientId(j as u32), &ing.name, &ing.quantity, ing.nutrition)
                })
                .collect();
            FoodGroup::new(
                GroupId(i as u32),
                &entry.name,
                &entry.quantity,
                entry.is_branded.unwrap_or(false),
                entry.nutrition,
                ingredients,
            )
        })
        .collect()
}

fn from_flat(entries: &[FoodEntry]) -> Vec<FoodGroup> {
    let mut groups: Vec<FoodGroup> = Vec::with_capacity(entries.len());
    // Slot of the open composite. Its position is reserved when it opens so
    // output order follows the analysis.
    let mut open: Option<usize> = None;

    for (index, entry) in entries.iter().enumerate() {
        let open_id = open.map(|slot| groups[slot].id);
        let decision = classify_entry(&entry.name, index, open_id);
        debug!(name = %entry.name, index, ?decision, "classified flat entry");

        match decision {
            Classification::Composite => {
                if let Some(slot) = open.take() {
                    groups[slot].recompute();
                }
                open = Some(groups.len());
                groups.push(group_from_entry(groups.len(), entry));
            }
            Classification::IngredientOf(_) => {
                // open_id is Some only while a slot is open
                if let Some(slot) = open {
                    let parent = &mut groups[slot];
                    let id = IngredientId(parent.ingredients.len() as u32);
                    parent.ingredients.push(Ingredient::new(
                        id,
                        &entry.name,
                        &entry.quantity,
                        entry.nutrition,
                    ));
                }
            }
            Classification::Standalone => {
                groups.push(group_from_entry(groups.len(), entry));
            }
        }
    }

    if let Some(slot) = open {
        groups[slot].recompute();
    }

    groups
}

fn group_from_entry(position: usize, entry: &FoodEntry) -> FoodGroup {
    FoodGroup::new(
        GroupId(position as u32),
        &entry.name,
        &entry.quantity,
        entry.is_branded.unwrap_or(false),
        entry.nutrition,
        Vec::new(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{IngredientEntry, Nutrition};

    fn flat(name: &str, calories: f64) -> FoodEntry {
        FoodEntry::new(name, "1 serving", Nutrition::new(calories, 0.0, 0.0, 0.0))
    }

    #[test]
    fn test_composite_keyword_case_insensitive() {
        assert!(is_composite_name("Chicken CAESAR Salad"));
        assert!(is_composite_name("Breakfast Burrito"));
        assert!(!is_composite_name("Apple"));
    }

    #[test]
    fn test_ingredient_without_open_composite_is_standalone() {
        assert_eq!(classify_entry("Cheddar Cheese", 1, None), Classification::Standalone);
        assert_eq!(
            classify_entry("Cheddar Cheese", 1, Some(GroupId(0))),
            Classification::IngredientOf(GroupId(0))
        );
    }

    #[test]
    fn test_pickle_only_ingredient_at_first_position() {
        assert!(is_ingredient_candidate("Dill Pickle", 0));
        assert!(!is_ingredient_candidate("Dill Pickle", 3));
        // the positional rule overrides other keyword matches
        assert!(!is_ingredient_candidate("Pickle Sauce", 2));
        assert_eq!(classify_entry("Dill Pickle", 2, Some(GroupId(0))), Classification::Standalone);
    }

    #[test]
    fn test_composite_keyword_wins_over_ingredient_keyword() {
        assert_eq!(classify_entry("Chicken Wrap", 1, Some(GroupId(0))), Classification::Composite);
    }

    #[test]
    fn test_new_composite_closes_previous() {
        let entries = vec![
            flat("Ham Sandwich", 400.0),
            flat("Ham", 100.0),
            flat("Beef Burger", 600.0),
            flat("Bun", 150.0),
            flat("Cheese", 110.0),
        ];
        let groups = classify(&entries);
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].ingredients.len(), 1);
        assert_eq!(groups[0].base_nutrition.calories, 100.0);
        assert_eq!(groups[1].ingredients.len(), 2);
        assert_eq!(groups[1].base_nutrition.calories, 260.0);
    }

    #[test]
    fn test_composite_without_ingredients_keeps_own_nutrition() {
        let groups = classify(&[flat("Poke Bowl", 520.0), flat("Green Tea", 0.0)]);
        assert_eq!(groups.len(), 2);
        assert!(!groups[0].is_parent());
        assert_eq!(groups[0].nutrition.calories, 520.0);
    }

    #[test]
    fn test_output_follows_analysis_order() {
        let entries = vec![
            flat("Turkey Sandwich", 380.0),
            flat("Potato Chips", 150.0),
            flat("Turkey Breast", 90.0),
        ];
        let groups = classify(&entries);
        let names: Vec<&str> = groups.iter().map(|g| g.name.as_str()).collect();
        assert_eq!(names, ["Turkey Sandwich", "Potato Chips"]);
        assert_eq!(groups[0].ingredients[0].name, "Turkey Breast");
        assert_eq!(groups[0].id, GroupId(0));
        assert_eq!(groups[1].id, GroupId(1));
    }

    #[test]
    fn test_branded_flat_composite_keeps_supplied_base() {
        let entries = vec![flat("Club Sandwich", 500.0).branded(true), flat("Bacon", 80.0)];
        let groups = classify(&entries);
        assert!(groups[0].is_parent());
        assert_eq!(groups[0].base_nutrition.calories, 500.0);
    }

    #[test]
    fn test_hierarchy_present_maps_one_to_one() {
        let entries = vec![
            flat("Cheese", 110.0),
            flat("Taco", 200.0).with_ingredients(vec![IngredientEntry::new(
                "Tortilla",
                "1",
                Nutrition::new(70.0, 2.0, 12.0, 1.5),
            )]),
        ];
        let groups = classify(&entries);
        assert_eq!(groups.len(), 2);
        assert!(!groups[0].is_parent());
        assert_eq!(groups[1].base_nutrition.calories, 70.0);
    }

    #[test]
    fn test_empty_input() {
        assert!(classify(&[]).is_empty());
    }
}
