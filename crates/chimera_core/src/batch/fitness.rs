use super::{assert_same_len, map_indexed};
use crate::traits::TraitVectorLogic;
use chimera_data::TraitVector;

/// Fitness of each record: `Σ trait · environment · weight` over the lanes.
///
/// The result is not normalized. Weights summing to at most 1 keep it in
/// [0, 1] for unit-range traits and environments.
///
/// # Panics
/// If the three input slices differ in length.
#[must_use]
pub fn evaluate(
    traits: &[TraitVector],
    environment: &[TraitVector],
    weights: &[TraitVector],
) -> Vec<f32> {
    let n = traits.len();
    assert_same_len("environment", n, environment.len());
    assert_same_len("weights", n, weights.len());

    map_indexed(n, |i| traits[i].weighted_alignment(&environment[i], &weights[i]))
}
