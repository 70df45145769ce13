use std::fmt;

use serde::{Deserialize, Serialize};

use super::Nutrition;
use crate::composer::aggregate;
use crate::composer::constants::{MAX_SERVING_MULTIPLIER, MIN_SERVING_MULTIPLIER, SERVING_STEP};

/// Session-local identifier of a top-level food group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GroupId(pub u32);

/// Identifier of an ingredient, unique within its parent group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct IngredientId(pub u32);

impl fmt::Display for GroupId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "g{}", self.0)
    }
}

impl fmt::Display for IngredientId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "i{}", self.0)
    }
}

/// Serving multiplier restricted to {0.5, 1.0, 1.5, ..., 10.0}.
///
/// Stored as a count of half-servings so equality and stepping are exact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(into = "f64", try_from = "f64")]
pub struct ServingMultiplier(u8);

impl ServingMultiplier {
    pub const ONE: Self = Self(2);

    /// Convert a raw value, rejecting anything off the half-step grid or out of range.
    pub fn from_value(value: f64) -> Option<Self> {
        let steps = value / SERVING_STEP;
        if !steps.is_finite() {
            return None;
        }
        let whole = steps.round();
        if (steps - whole).abs() > 1e-9 {
            return None;
        }
        let min = (MIN_SERVING_MULTIPLIER / SERVING_STEP).round();
        let max = (MAX_SERVING_MULTIPLIER / SERVING_STEP).round();
        if whole < min || whole > max {
            return None;
        }
        Some(Self(whole as u8))
    }

    pub fn lowest() -> Self {
        Self((MIN_SERVING_MULTIPLIER / SERVING_STEP).round() as u8)
    }

    pub fn highest() -> Self {
        Self((MAX_SERVING_MULTIPLIER / SERVING_STEP).round() as u8)
    }

    pub fn value(self) -> f64 {
        self.0 as f64 * SERVING_STEP
    }

    /// The multiplier after adding `delta`, or `None` if that leaves the allowed set.
    pub fn step(self, delta: f64) -> Option<Self> {
        Self::from_value(self.value() + delta)
    }
}

impl Default for ServingMultiplier {
    fn default() -> Self {
        Self::ONE
    }
}

impl From<ServingMultiplier> for f64 {
    fn from(m: ServingMultiplier) -> f64 {
        m.value()
    }
}

impl TryFrom<f64> for ServingMultiplier {
    type Error = String;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::from_value(value).ok_or_else(|| format!("invalid serving multiplier: {}", value))
    }
}

impl fmt::Display for ServingMultiplier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0 % 2 == 0 {
            write!(f, "{}x", self.0 / 2)
        } else {
            write!(f, "{:.1}x", self.value())
        }
    }
}

/// A component of a composite food. Never scaled by a serving multiplier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ingredient {
    pub id: IngredientId,
    pub name: String,
    pub quantity: String,
    pub nutrition: Nutrition,
    pub is_favorite: bool,
}

impl Ingredient {
    pub fn new(id: IngredientId, name: impl Into<String>, quantity: impl Into<String>, nutrition: Nutrition) -> Self {
        Self {
            id,
            name: name.into(),
            quantity: quantity.into(),
            nutrition,
            is_favorite: false,
        }
    }
}

/// A top-level logged food: standalone, or a composite with ingredients.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FoodGroup {
    pub id: GroupId,
    pub name: String,
    pub is_branded: bool,

    /// Nutrition at a multiplier of 1.
    pub base_nutrition: Nutrition,

    /// `base_nutrition` scaled by `serving_multiplier`, rounded per field.
    pub nutrition: Nutrition,

    pub serving_multiplier: ServingMultiplier,

    /// Quantity text exactly as received upstream. Never rewritten.
    pub original_quantity: String,

    pub is_favorite: bool,
    pub ingredients: Vec<Ingredient>,
}

impl FoodGroup {
    /// Build a group at multiplier 1.
    ///
    /// `supplied` is the upstream nutrition. It becomes the base unless the
    /// group is an unbranded composite, whose base is the sum of its ingredients.
    pub fn new(
        id: GroupId,
        name: impl Into<String>,
        original_quantity: impl Into<String>,
        is_branded: bool,
        supplied: Nutrition,
        ingredients: Vec<Ingredient>,
    ) -> Self {
        let mut group = Self {
            id,
            name: name.into(),
            is_branded,
            base_nutrition: supplied,
            nutrition: Nutrition::zero(),
            serving_multiplier: ServingMultiplier::ONE,
            original_quantity: original_quantity.into(),
            is_favorite: false,
            ingredients,
        };
        group.recompute();
        group
    }

    pub fn is_parent(&self) -> bool {
        !self.ingredients.is_empty()
    }

    /// Whether the base is derived from ingredients rather than taken as supplied.
    pub fn derives_base(&self) -> bool {
        self.is_parent() && !self.is_branded
    }

    /// Re-derive the base where applicable, then rescale.
    pub fn recompute(&mut self) {
        if self.derives_base() {
            self.base_nutrition = aggregate::sum(self.ingredients.iter().map(|i| &i.nutrition));
        }
        self.rescale();
    }

    /// Refresh `nutrition` from the base and current multiplier.
    pub fn rescale(&mut self) {
        self.nutrition = aggregate::scale(&self.base_nutrition, self.serving_multiplier);
    }

    pub fn ingredient(&self, id: IngredientId) -> Option<&Ingredient> {
        self.ingredients.iter().find(|i| i.id == id)
    }

    /// Number of favorited ingredients.
    pub fn favorite_ingredient_count(&self) -> usize {
        self.ingredients.iter().filter(|i| i.is_favorite).count()
    }

    /// Check the scaling, derived-base, and non-negativity invariants.
    pub fn is_consistent(&self) -> bool {
        let scaled = aggregate::scale(&self.base_nutrition, self.serving_multiplier);
        if self.nutrition != scaled {
            return false;
        }
        if self.derives_base() {
            let derived = aggregate::sum(self.ingredients.iter().map(|i| &i.nutrition));
            if !self.base_nutrition.approx_eq(&derived, 1e-6) {
                return false;
            }
        }
        self.base_nutrition.is_non_negative() && self.nutrition.is_non_negative()
    }
}
