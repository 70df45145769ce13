use assert_float_eq::assert_float_absolute_eq;

use meal_composer_rs::composer::{classify, classify_entry, Classification};
use meal_composer_rs::models::{FoodEntry, GroupId, IngredientEntry, Nutrition};
use meal_composer_rs::state::CompositionStore;
use meal_composer_rs::ComposerConfig;

fn cal(calories: f64) -> Nutrition {
    Nutrition::new(calories, 0.0, 0.0, 0.0)
}

fn turkey_sandwich_hierarchical() -> FoodEntry {
    FoodEntry::new("Turkey Sandwich", "1 serving", Nutrition::new(380.0, 25.0, 45.0, 12.0)).with_ingredients(vec![
        IngredientEntry::new("Whole Wheat Bread", "2 slices", Nutrition::new(140.0, 6.0, 24.0, 2.0)),
        IngredientEntry::new("Turkey Breast", "3 oz", Nutrition::new(90.0, 19.0, 0.0, 1.0)),
        IngredientEntry::new("Lettuce", "0.5 cup", Nutrition::new(4.0, 0.5, 1.0, 0.0)),
        IngredientEntry::new("Tomato", "2 slices", Nutrition::new(5.0, 0.3, 1.0, 0.0)),
    ])
}

fn flat_lunch() -> Vec<FoodEntry> {
    vec![
        FoodEntry::new("Turkey Sandwich", "1 sandwich", cal(380.0)),
        FoodEntry::new("Whole Wheat Bread", "2 slices", cal(140.0)),
        FoodEntry::new("Turkey Breast", "3 oz", cal(90.0)),
        FoodEntry::new("Potato Chips", "1 bag", cal(150.0)),
    ]
}

fn flat_store() -> CompositionStore {
    CompositionStore::with_groups(classify(&flat_lunch()), ComposerConfig::default())
}

#[test]
fn test_hierarchical_unbranded_base_is_ingredient_sum() {
    let groups = classify(&[turkey_sandwich_hierarchical()]);
    assert_eq!(groups.len(), 1);

    let sandwich = &groups[0];
    assert!(sandwich.is_parent());
    assert_eq!(sandwich.ingredients.len(), 4);

    let base = sandwich.base_nutrition;
    assert_float_absolute_eq!(base.calories, 239.0, 1e-9);
    assert_float_absolute_eq!(base.protein, 25.8, 1e-9);
    assert_float_absolute_eq!(base.carbs, 26.0, 1e-9);
    assert_float_absolute_eq!(base.fat, 3.0, 1e-9);

    assert_eq!(sandwich.nutrition, Nutrition::new(239.0, 26.0, 26.0, 3.0));
}

#[test]
fn test_flat_heuristic_groups_sandwich() {
    let groups = classify(&flat_lunch());
    assert_eq!(groups.len(), 2);

    let sandwich = &groups[0];
    assert_eq!(sandwich.name, "Turkey Sandwich");
    let names: Vec<&str> = sandwich.ingredients.iter().map(|i| i.name.as_str()).collect();
    assert_eq!(names, ["Whole Wheat Bread", "Turkey Breast"]);
    assert_eq!(sandwich.base_nutrition.calories, 230.0);

    let chips = &groups[1];
    assert_eq!(chips.name, "Potato Chips");
    assert!(!chips.is_parent());
    assert_eq!(chips.nutrition.calories, 150.0);
}

#[test]
fn test_serving_increment_scales_calories() {
    let mut store = flat_store();
    assert!(store.change_serving_multiplier(GroupId(0), 0.5));

    let sandwich = store.group(GroupId(0)).unwrap();
    assert_eq!(sandwich.serving_multiplier.value(), 1.5);
    assert_eq!(sandwich.nutrition.calories, 345.0);
    assert_eq!(store.total().calories, 495.0);
}

#[test]
fn test_ingredient_delete_under_multiplier() {
    let mut store = flat_store();
    store.change_serving_multiplier(GroupId(0), 0.5);

    let turkey = store.group(GroupId(0)).unwrap().ingredients[1].id;
    assert!(store.delete_ingredient(GroupId(0), turkey));

    let sandwich = store.group(GroupId(0)).unwrap();
    assert_eq!(sandwich.base_nutrition.calories, 140.0);
    assert_eq!(sandwich.nutrition.calories, 210.0);
    assert_eq!(store.total().calories, 360.0);
}

#[test]
fn test_favorite_cascade_round_trip() {
    let mut store = flat_store();
    let states = |s: &CompositionStore| {
        let g = s.group(GroupId(0)).unwrap();
        (g.is_favorite, g.ingredients.iter().map(|i| i.is_favorite).collect::<Vec<_>>())
    };

    assert_eq!(states(&store), (false, vec![false, false]));
    store.toggle_favorite(GroupId(0), None);
    assert_eq!(states(&store), (true, vec![true, true]));
    store.toggle_favorite(GroupId(0), None);
    assert_eq!(states(&store), (false, vec![false, false]));
}

#[test]
fn test_pickle_position_rule() {
    let open = Some(GroupId(0));
    assert_eq!(classify_entry("Dill Pickle", 0, open), Classification::IngredientOf(GroupId(0)));
    assert_eq!(classify_entry("Dill Pickle", 1, open), Classification::Standalone);
    assert_eq!(classify_entry("Dill Pickle", 5, open), Classification::Standalone);

    // later in a real scan the pickle stays its own food
    let groups = classify(&[
        FoodEntry::new("Ham Sandwich", "1", cal(350.0)),
        FoodEntry::new("Ham", "2 oz", cal(70.0)),
        FoodEntry::new("Dill Pickle", "1 spear", cal(5.0)),
    ]);
    assert_eq!(groups.len(), 2);
    assert_eq!(groups[0].ingredients.len(), 1);
    assert_eq!(groups[1].name, "Dill Pickle");

    // first position has no open composite, so it is standalone too
    let groups = classify(&[FoodEntry::new("Dill Pickle", "1 spear", cal(5.0))]);
    assert_eq!(groups.len(), 1);
    assert!(!groups[0].is_parent());
}
