use std::fs;
use std::path::Path;

use serde::Deserialize;
use tracing::info;

use crate::error::{MealError, Result};
use crate::models::{AnalysisRecord, FoodEntry};

/// Analyzer output arrives either as a bare list or wrapped in an object.
#[derive(Deserialize)]
#[serde(untagged)]
enum AnalysisInput {
    List(Vec<FoodEntry>),
    Wrapped { foods: Vec<FoodEntry> },
}

/// Parse analyzer output from a JSON string.
pub fn parse_analysis(content: &str) -> Result<Vec<FoodEntry>> {
    let entries = match serde_json::from_str(content)? {
        AnalysisInput::List(foods) | AnalysisInput::Wrapped { foods } => foods,
    };
    if entries.is_empty() {
        return Err(MealError::EmptyAnalysis);
    }
    Ok(entries)
}

/// Load analyzer output from a JSON file.
pub fn load_analysis<P: AsRef<Path>>(path: P) -> Result<Vec<FoodEntry>> {
    let content = fs::read_to_string(path)?;
    parse_analysis(&content)
}

/// Load a previously saved record.
pub fn load_record<P: AsRef<Path>>(path: P) -> Result<AnalysisRecord> {
    let content = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}

/// Save a record as pretty JSON.
pub fn save_record<P: AsRef<Path>>(path: P, record: &AnalysisRecord) -> Result<()> {
    let json = serde_json::to_string_pretty(record)?;
    fs::write(path.as_ref(), json)?;
    info!(path = %path.as_ref().display(), foods = record.foods.len(), "record saved");
    Ok(())
}

/// Write a record as CSV: one row per food, one per ingredient, then the total.
pub fn export_csv<P: AsRef<Path>>(path: P, record: &AnalysisRecord) -> Result<()> {
    let mut wtr = csv::Writer::from_path(path)?;

    wtr.write_record(["kind", "food", "name", "quantity", "calories", "protein", "carbs", "fat"])?;

    for food in &record.foods {
        let kind = if food.has_ingredients() { "composite" } else { "food" };
        let n = &food.nutrition;
        wtr.write_record([
            kind.to_string(),
            food.name.clone(),
            food.name.clone(),
            food.quantity.clone(),
            format!("{:.0}", n.calories),
            format!("{:.1}", n.protein),
            format!("{:.1}", n.carbs),
            format!("{:.1}", n.fat),
        ])?;

        for ingredient in &food.ingredients {
            let n = &ingredient.nutrition;
            wtr.write_record([
                "ingredient".to_string(),
                food.name.clone(),
                ingredient.name.clone(),
                ingredient.quantity.clone(),
                format!("{:.0}", n.calories),
                format!("{:.1}", n.protein),
                format!("{:.1}", n.carbs),
                format!("{:.1}", n.fat),
            ])?;
        }
    }

    let t = &record.total;
    wtr.write_record([
        "total".to_string(),
        String::new(),
        String::new(),
        String::new(),
        format!("{:.0}", t.calories),
        format!("{:.1}", t.protein),
        format!("{:.1}", t.carbs),
        format!("{:.1}", t.fat),
    ])?;

    wtr.flush()?;
    Ok(())
}
