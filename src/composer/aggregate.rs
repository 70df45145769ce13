//! Nutrition arithmetic shared by the classifier, the store, and the serializer.

use crate::models::{FoodGroup, Nutrition};

/// Multiply every field by `multiplier`, rounding each field independently.
pub fn scale(base: &Nutrition, multiplier: impl Into<f64>) -> Nutrition {
    let m = multiplier.into();
    base.map(|v| (v * m).round())
}

/// Field-wise sum.
pub fn sum<'a, I>(items: I) -> Nutrition
where
    I: IntoIterator<Item = &'a Nutrition>,
{
    items.into_iter().sum()
}

/// Field-wise `max(0, a - b)`.
pub fn subtract_clamped(a: &Nutrition, b: &Nutrition) -> Nutrition {
    a.zip_with(*b, |x, y| (x - y).max(0.0))
}

/// Sum of the scaled nutrition of every top-level group.
///
/// Always recomputed from scratch; never patched incrementally.
pub fn session_total(groups: &[FoodGroup]) -> Nutrition {
    sum(groups.iter().map(|g| &g.nutrition))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ServingMultiplier;

    #[test]
    fn test_scale_rounds_each_field() {
        let base = Nutrition::new(230.0, 25.8, 71.0, 3.0);
        let m = ServingMultiplier::from_value(1.5).unwrap();
        assert_eq!(scale(&base, m), Nutrition::new(345.0, 39.0, 107.0, 5.0));
    }

    #[test]
    fn test_scale_at_one_rounds() {
        let base = Nutrition::new(239.0, 25.8, 71.0, 3.0);
        assert_eq!(scale(&base, 1.0), Nutrition::new(239.0, 26.0, 71.0, 3.0));
    }

    #[test]
    fn test_sum_empty_is_zero() {
        assert_eq!(sum(std::iter::empty()), Nutrition::zero());
    }

    #[test]
    fn test_subtract_clamped_floors_at_zero() {
        let a = Nutrition::new(100.0, 5.0, 10.0, 1.0);
        let b = Nutrition::new(40.0, 8.0, 10.0, 0.5);
        assert_eq!(subtract_clamped(&a, &b), Nutrition::new(60.0, 0.0, 0.0, 0.5));
    }
}
