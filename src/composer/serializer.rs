//! Conversion between the group hierarchy and the flat persistence record.

use crate::composer::{aggregate, classifier};
use crate::models::{AnalysisRecord, FoodEntry, FoodGroup, IngredientEntry, ServingMultiplier};

/// Whether the emitted nutrition must be taken as-is when the record is reloaded.
///
/// A composite saved away from 1x carries scaled nutrition next to unscaled
/// ingredients, so it is marked branded to keep the saved value.
fn keeps_supplied_value(group: &FoodGroup) -> bool {
    group.is_branded || (group.is_parent() && group.serving_multiplier != ServingMultiplier::ONE)
}

/// Flatten one group: original quantity text, current scaled nutrition.
pub fn group_to_entry(group: &FoodGroup) -> FoodEntry {
    let ingredients = group
        .ingredients
        .iter()
        .map(|i| IngredientEntry::new(&i.name, &i.quantity, i.nutrition))
        .collect();

    FoodEntry {
        name: group.name.clone(),
        quantity: group.original_quantity.clone(),
        nutrition: group.nutrition,
        is_branded: keeps_supplied_value(group).then_some(true),
        ingredients,
    }
}

/// Flatten the hierarchy into a record with a session total.
pub fn to_record(groups: &[FoodGroup]) -> AnalysisRecord {
    let foods: Vec<FoodEntry> = groups.iter().map(group_to_entry).collect();
    let total = aggregate::sum(foods.iter().map(|f| &f.nutrition));
    AnalysisRecord { foods, total }
}

/// Rebuild a hierarchy from a record. Multipliers restart at 1.
pub fn from_record(record: &AnalysisRecord) -> Vec<FoodGroup> {
    classifier::classify(&record.foods)
}
