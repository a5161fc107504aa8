use chimera_lib::model::config::EngineConfig;
use chimera_lib::model::state::{Gene, GeneticProfile, Mutation, MutationKind, TraitType};
use chimera_lib::model::GeneticsEngine;

#[allow(dead_code)]
pub struct ProfileBuilder {
    profile: GeneticProfile,
}

#[allow(dead_code)]
impl ProfileBuilder {
    pub fn new() -> Self {
        Self {
            profile: GeneticProfile::new(1),
        }
    }

    pub fn generation(mut self, generation: u32) -> Self {
        self.profile.generation = generation;
        self
    }

    pub fn gene(mut self, trait_type: TraitType, value: f32, dominance: f32) -> Self {
        self.profile.genes.push(Gene::new(trait_type, value, dominance));
        self
    }

    pub fn mutation(mut self, severity: f32) -> Self {
        self.profile.mutations.push(Mutation {
            kind: MutationKind::ValueShift,
            severity,
            is_harmful: false,
        });
        self
    }

    pub fn build(self) -> GeneticProfile {
        self.profile
    }
}

/// Engine with every adjustment pass disabled, so predictions reflect
/// dominance resolution and noise only.
#[allow(dead_code)]
pub fn bare_engine(seed: u64) -> GeneticsEngine {
    let mut config = EngineConfig {
        seed: Some(seed),
        ..Default::default()
    };
    config.prediction.polygenic_enabled = false;
    config.prediction.epistasis_enabled = false;
    config.prediction.environmental_enabled = false;
    GeneticsEngine::init(config).unwrap()
}

#[allow(dead_code)]
pub fn seeded_engine(seed: u64) -> GeneticsEngine {
    GeneticsEngine::init(EngineConfig {
        seed: Some(seed),
        ..Default::default()
    })
    .unwrap()
}
