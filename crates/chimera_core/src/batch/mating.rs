use super::{assert_same_len, map_indexed};
use crate::config::BatchConfig;
use crate::traits::{clamp_unit, TraitVectorLogic};
use chimera_data::TraitVector;

/// Largest distance between two unit-range vectors, sqrt of the lane count.
const MAX_DISTANCE: f32 = 2.0;

/// Mating compatibility of one pair.
///
/// Rewards divergence: identical vectors of the same generation score 0,
/// and the score never drops as any lane difference or the generation gap
/// grows.
#[must_use]
pub fn pair_compatibility(
    traits1: &TraitVector,
    traits2: &TraitVector,
    generation1: u32,
    generation2: u32,
    config: &BatchConfig,
) -> f32 {
    let divergence = (traits1.distance(traits2) / MAX_DISTANCE).min(1.0);
    let gap = generation1.abs_diff(generation2) as f32;
    let gap_bonus = (gap * config.generation_gap_step).min(1.0);
    clamp_unit(config.divergence_weight * divergence + config.generation_weight * gap_bonus)
}

/// Compatibility of `traits1[i]` with `traits2[i]` for every index.
///
/// # Panics
/// If the four input slices differ in length.
#[must_use]
pub fn compatibility(
    traits1: &[TraitVector],
    traits2: &[TraitVector],
    generation1: &[u32],
    generation2: &[u32],
    config: &BatchConfig,
) -> Vec<f32> {
    let n = traits1.len();
    assert_same_len("traits2", n, traits2.len());
    assert_same_len("generation1", n, generation1.len());
    assert_same_len("generation2", n, generation2.len());

    map_indexed(n, |i| {
        pair_compatibility(
            &traits1[i],
            &traits2[i],
            generation1[i],
            generation2[i],
            config,
        )
    })
}
