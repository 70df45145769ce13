/// Name fragments that open a composite food (case-insensitive substring match).
pub const COMPOSITE_KEYWORDS: &[&str] = &[
    "sandwich", "salad", "bowl", "wrap", "burger", "pizza", "taco", "burrito",
];

/// Name fragments that mark an entry as a likely ingredient of the open composite.
pub const INGREDIENT_KEYWORDS: &[&str] = &[
    "bread",
    "bun",
    "lettuce",
    "tomato",
    "cheese",
    "mayo",
    "mayonnaise",
    "mustard",
    "ketchup",
    "onion",
    "chicken",
    "turkey",
    "beef",
    "ham",
    "bacon",
    "avocado",
    "dressing",
    "sauce",
    "tortilla",
];

/// Only counts as an ingredient when it is the very first entry of an analysis.
pub const FIRST_POSITION_INGREDIENT: &str = "pickle";

/// Serving multiplier range and stepper increment.
pub const MIN_SERVING_MULTIPLIER: f64 = 0.5;
pub const MAX_SERVING_MULTIPLIER: f64 = 10.0;
pub const SERVING_STEP: f64 = 0.5;

/// Minimum jaro-winkler similarity for a typed name to match a group.
pub const FUZZY_MATCH_THRESHOLD: f64 = 0.7;
