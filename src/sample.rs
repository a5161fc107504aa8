//! Seeded sample data for demos, benchmarks and tests.

use chimera_core::PopulationBatch;
use chimera_data::{
    ExpressionType, Gene, GeneticProfile, Mutation, MutationKind, TraitType, TraitVector,
};
use rand::Rng;
use uuid::Uuid;

/// A profile carrying every trait type with random values.
///
/// The id is drawn from `rng` as well, so the whole profile is reproducible.
pub fn random_profile<R: Rng>(rng: &mut R, generation: u32) -> GeneticProfile {
    let genes = TraitType::ALL
        .iter()
        .map(|&t| {
            let is_mutation = rng.gen_bool(0.05);
            Gene {
                value: Some(rng.gen_range(0.0..=1.0)),
                dominance_strength: rng.gen_range(0.0..=1.0),
                is_active: rng.gen_bool(0.9),
                is_mutation,
                expression: match rng.gen_range(0..4) {
                    0 => ExpressionType::Dominant,
                    1 => ExpressionType::Recessive,
                    2 => ExpressionType::Codominant,
                    _ => ExpressionType::Incomplete,
                },
                ..Gene::new(t, 0.5, 0.5)
            }
        })
        .collect();

    let mutations = (0..rng.gen_range(0..3))
        .map(|_| Mutation {
            kind: match rng.gen_range(0..3) {
                0 => MutationKind::ValueShift,
                1 => MutationKind::ExpressionChange,
                _ => MutationKind::NewTrait,
            },
            severity: rng.gen_range(0.0..=1.0),
            is_harmful: rng.gen_bool(0.3),
        })
        .collect();

    GeneticProfile {
        id: Uuid::from_u128(rng.gen()),
        genes,
        mutations,
        generation,
    }
}

pub fn random_vector<R: Rng>(rng: &mut R) -> TraitVector {
    TraitVector::new(rng.gen(), rng.gen(), rng.gen(), rng.gen())
}

/// A batch of `n` random pairs with weights summing to one.
pub fn random_batch<R: Rng>(rng: &mut R, n: usize) -> PopulationBatch {
    PopulationBatch {
        parent1: (0..n).map(|_| random_vector(rng)).collect(),
        parent2: (0..n).map(|_| random_vector(rng)).collect(),
        generation1: (0..n).map(|_| rng.gen_range(0..20)).collect(),
        generation2: (0..n).map(|_| rng.gen_range(0..20)).collect(),
        blend_factors: (0..n).map(|_| rng.gen_range(0.0..=1.0)).collect(),
        environment: (0..n).map(|_| random_vector(rng)).collect(),
        weights: vec![TraitVector::splat(0.25); n],
    }
}
