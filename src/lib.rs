pub mod cli;
pub mod composer;
pub mod error;
pub mod interface;
pub mod models;
pub mod state;

pub use composer::{ComposerConfig, FavoritePolicy};
pub use error::{MealError, Result};
pub use models::{AnalysisRecord, FoodEntry, FoodGroup, Ingredient, Nutrition};
pub use state::CompositionStore;
