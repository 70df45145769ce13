use serde::{Deserialize, Serialize};

/// Macronutrient snapshot for a food, ingredient, or whole meal.
///
/// Missing fields deserialize as zero; upstream data is trusted, not validated.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Nutrition {
    #[serde(default)]
    pub calories: f64,

    #[serde(default)]
    pub protein: f64,

    #[serde(default)]
    pub carbs: f64,

    #[serde(default)]
    pub fat: f64,
}

impl Nutrition {
    pub fn new(calories: f64, protein: f64, carbs: f64, fat: f64) -> Self {
        Self {
            calories,
            protein,
            carbs,
            fat,
        }
    }

    /// All fields zero.
    pub fn zero() -> Self {
        Self::default()
    }

    /// Apply `f` to every field.
    pub fn map(self, f: impl Fn(f64) -> f64) -> Self {
        Self {
            calories: f(self.calories),
            protein: f(self.protein),
            carbs: f(self.carbs),
            fat: f(self.fat),
        }
    }

    /// Combine two snapshots field by field.
    pub fn zip_with(self, other: Nutrition, f: impl Fn(f64, f64) -> f64) -> Self {
        Self {
            calories: f(self.calories, other.calories),
            protein: f(self.protein, other.protein),
            carbs: f(self.carbs, other.carbs),
            fat: f(self.fat, other.fat),
        }
    }

    /// True when no field is negative.
    pub fn is_non_negative(&self) -> bool {
        self.calories >= 0.0 && self.protein >= 0.0 && self.carbs >= 0.0 && self.fat >= 0.0
    }

    /// Field-wise comparison within `epsilon`.
    pub fn approx_eq(&self, other: &Nutrition, epsilon: f64) -> bool {
        (self.calories - other.calories).abs() <= epsilon
            && (self.protein - other.protein).abs() <= epsilon
            && (self.carbs - other.carbs).abs() <= epsilon
            && (self.fat - other.fat).abs() <= epsilon
    }

    /// Compact one-line summary for tables and logs.
    pub fn summary(&self) -> String {
        format!(
            "{:.0} cal | P:{} C:{} F:{}",
            self.calories,
            trim_number(self.protein),
            trim_number(self.carbs),
            trim_number(self.fat)
        )
    }
}

impl std::ops::Add for Nutrition {
    type Output = Nutrition;

    fn add(self, other: Nutrition) -> Nutrition {
        self.zip_with(other, |a, b| a + b)
    }
}

impl std::ops::AddAssign for Nutrition {
    fn add_assign(&mut self, other: Nutrition) {
        *self = *self + other;
    }
}

impl std::iter::Sum for Nutrition {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Nutrition::zero(), |acc, n| acc + n)
    }
}

impl<'a> std::iter::Sum<&'a Nutrition> for Nutrition {
    fn sum<I: Iterator<Item = &'a Nutrition>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

/// Render a number with at most one decimal and no trailing zeros.
pub fn trim_number(value: f64) -> String {
    let rounded = (value * 10.0).round() / 10.0;
    if rounded.fract() == 0.0 {
        format!("{:.0}", rounded)
    } else {
        format!("{:.1}", rounded)
    }
}
