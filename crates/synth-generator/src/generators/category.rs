//! Categorical and boolean value generators.

use rand::seq::SliceRandom;
use rand::Rng;
use synth_core::GeneratedValue;

/// Pick one label uniformly, with replacement.
///
/// An empty label list produces an empty string; callers reject empty lists
/// before generating.
pub fn generate_one_of<R: Rng + ?Sized>(rng: &mut R, labels: &[String]) -> GeneratedValue {
    GeneratedValue::Text(labels.choose(rng).cloned().unwrap_or_default())
}

/// Fair coin flip.
pub fn generate_bool<R: Rng + ?Sized>(rng: &mut R) -> GeneratedValue {
    GeneratedValue::Bool(rng.gen_bool(0.5))
}
