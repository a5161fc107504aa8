use super::{assert_same_len, map_indexed};
use crate::config::BatchConfig;
use crate::traits::{mix_seed, TraitVectorLogic};
use chimera_data::TraitVector;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Blends one pair: interpolate, add symmetric noise of full width
/// `noise_width`, clamp every lane.
pub fn blend_pair<R: Rng>(
    parent1: &TraitVector,
    parent2: &TraitVector,
    blend_factor: f32,
    noise_width: f32,
    rng: &mut R,
) -> TraitVector {
    let mut child = parent1.lerp(parent2, blend_factor.clamp(0.0, 1.0));
    child.perturb_with_rng(noise_width, rng);
    child
}

/// Produces one offspring per index from `parent1[i]`, `parent2[i]` and
/// `blend_factor[i]`.
///
/// Index `i` draws its noise from a `ChaCha8Rng` seeded with
/// `mix_seed(seed, i)`, so the output is identical however the work is split.
///
/// # Panics
/// If the three input slices differ in length.
#[must_use]
pub fn blend(
    parent1: &[TraitVector],
    parent2: &[TraitVector],
    blend_factor: &[f32],
    seed: u64,
    config: &BatchConfig,
) -> Vec<TraitVector> {
    let n = parent1.len();
    assert_same_len("parent2", n, parent2.len());
    assert_same_len("blend_factor", n, blend_factor.len());

    let noise = config.blend_noise;
    map_indexed(n, |i| {
        let mut rng = ChaCha8Rng::seed_from_u64(mix_seed(seed, i as u64));
        blend_pair(&parent1[i], &parent2[i], blend_factor[i], noise, &mut rng)
    })
}
