use std::io::Write;

use tempfile::NamedTempFile;

use meal_composer_rs::composer::classify;
use meal_composer_rs::models::GroupId;
use meal_composer_rs::state::{export_csv, load_analysis, load_record, save_record, CompositionStore};
use meal_composer_rs::ComposerConfig;

const ANALYSIS: &str = r#"{
    "foods": [
        {"name": "Turkey Sandwich", "quantity": "1 sandwich", "nutrition": {"calories": 380, "protein": 25, "carbs": 45, "fat": 12}},
        {"name": "Whole Wheat Bread", "quantity": "2 slices", "nutrition": {"calories": 140, "protein": 6, "carbs": 24, "fat": 2}},
        {"name": "Turkey Breast", "quantity": "3 oz", "nutrition": {"calories": 90, "protein": 19, "fat": 1}},
        {"name": "Potato Chips", "quantity": "1 bag", "nutrition": {"calories": 150, "protein": 2, "carbs": 15, "fat": 10}}
    ]
}"#;

fn analysis_file() -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(ANALYSIS.as_bytes()).unwrap();
    file
}

#[test]
fn test_load_edit_save_reload() {
    let input = analysis_file();
    let entries = load_analysis(input.path()).unwrap();
    let mut store = CompositionStore::with_groups(classify(&entries), ComposerConfig::default());

    store.change_serving_multiplier(GroupId(0), 1.0);
    store.toggle_favorite(GroupId(1), None);
    assert_eq!(store.total().calories, 610.0);

    let output = NamedTempFile::new().unwrap();
    save_record(output.path(), &store.to_record()).unwrap();
    let record = load_record(output.path()).unwrap();

    assert_eq!(record.foods.len(), 2);
    assert_eq!(record.foods[0].quantity, "1 sandwich");
    assert_eq!(record.foods[0].nutrition.calories, 460.0);
    assert_eq!(record.foods[0].ingredients.len(), 2);
    assert_eq!(record.total.calories, 610.0);

    // a saved record can be loaded back as analyzer input
    let reloaded = load_analysis(output.path()).unwrap();
    let again = CompositionStore::with_groups(classify(&reloaded), ComposerConfig::default());
    assert_eq!(again.len(), 2);
    let sandwich = again.group(GroupId(0)).unwrap();
    assert!(sandwich.is_parent());
    assert_eq!(sandwich.base_nutrition.calories, 460.0);
    assert_eq!(again.total(), record.total);
}

#[test]
fn test_export_saved_record() {
    let input = analysis_file();
    let entries = load_analysis(input.path()).unwrap();
    let store = CompositionStore::with_groups(classify(&entries), ComposerConfig::default());

    let record_file = NamedTempFile::new().unwrap();
    save_record(record_file.path(), &store.to_record()).unwrap();

    let csv_file = NamedTempFile::new().unwrap();
    export_csv(csv_file.path(), &load_record(record_file.path()).unwrap()).unwrap();

    let content = std::fs::read_to_string(csv_file.path()).unwrap();
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines.len(), 6);
    assert!(lines[0].starts_with("kind,food,name"));
    assert!(lines[5].starts_with("total,,,,380,"));
}
