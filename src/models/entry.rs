use serde::{Deserialize, Serialize};

use super::Nutrition;

/// A food as reported by the analysis provider, or as emitted for persistence.
///
/// Inbound and outbound records share this shape. Nesting is one level deep:
/// ingredients never carry ingredients of their own.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FoodEntry {
    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub quantity: String,

    #[serde(default)]
    pub nutrition: Nutrition,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_branded: Option<bool>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub ingredients: Vec<IngredientEntry>,
}

/// A component of a [`FoodEntry`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IngredientEntry {
    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub quantity: String,

    #[serde(default)]
    pub nutrition: Nutrition,
}

impl FoodEntry {
    /// A flat entry with no branding flag and no ingredients.
    pub fn new(name: impl Into<String>, quantity: impl Into<String>, nutrition: Nutrition) -> Self {
        Self {
            name: name.into(),
            quantity: quantity.into(),
            nutrition,
            is_branded: None,
            ingredients: Vec::new(),
        }
    }

    pub fn branded(mut self, is_branded: bool) -> Self {
        self.is_branded = Some(is_branded);
        self
    }

    pub fn with_ingredients(mut self, ingredients: Vec<IngredientEntry>) -> Self {
        self.ingredients = ingredients;
        self
    }

    pub fn has_ingredients(&self) -> bool {
        !self.ingredients.is_empty()
    }
}

impl IngredientEntry {
    pub fn new(name: impl Into<String>, quantity: impl Into<String>, nutrition: Nutrition) -> Self {
        Self {
            name: name.into(),
            quantity: quantity.into(),
            nutrition,
        }
    }
}

/// The flat record handed to the persistence collaborator on save.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisRecord {
    pub foods: Vec<FoodEntry>,

    #[serde(default)]
    pub total: Nutrition,
}
