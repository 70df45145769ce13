mod entry;
mod group;
mod nutrition;

pub use entry::{AnalysisRecord, FoodEntry, IngredientEntry};
pub use group::{FoodGroup, GroupId, Ingredient, IngredientId, ServingMultiplier};
pub use nutrition::{trim_number, Nutrition};
