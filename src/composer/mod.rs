pub mod aggregate;
pub mod classifier;
pub mod constants;
pub mod favorites;
pub mod quantity;
pub mod serializer;

pub use aggregate::{scale, session_total, subtract_clamped, sum};
pub use classifier::{classify, classify_entry, Classification};
pub use constants::*;
pub use favorites::FavoritePolicy;
pub use quantity::scaled_quantity;
pub use serializer::{from_record, to_record};

/// Runtime knobs for a composition session.
#[derive(Debug, Clone)]
pub struct ComposerConfig {
    pub favorite_policy: FavoritePolicy,
    /// Increment applied by the serving stepper.
    pub serving_step: f64,
}

impl Default for ComposerConfig {
    fn default() -> Self {
        Self {
            favorite_policy: FavoritePolicy::default(),
            serving_step: SERVING_STEP,
        }
    }
}
