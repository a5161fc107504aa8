use crate::data::genetics::TraitType;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Which parent's gene wins a clear-dominance resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum DominantParent {
    /// Co-dominant, neither parent wins.
    #[default]
    Neither,
    First,
    Second,
}

impl DominantParent {
    /// Numeric form: 0 = neither, 1 = first parent, 2 = second parent.
    #[must_use]
    pub fn as_index(self) -> u8 {
        match self {
            DominantParent::Neither => 0,
            DominantParent::First => 1,
            DominantParent::Second => 2,
        }
    }
}

/// Predicted inheritance of a single trait.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TraitPrediction {
    pub trait_name: String,
    pub trait_type: TraitType,
    /// Final predicted value in [0, 1], after all adjustments.
    pub predicted_value: f32,
    pub parent1_value: f32,
    pub parent2_value: f32,
    pub parent1_dominance: f32,
    pub parent2_dominance: f32,
    /// Dominance ratio of parent 1; parent 2 holds the complement.
    pub parent1_contribution: f32,
    pub parent2_contribution: f32,
    pub mutation_chance: f32,
    pub confidence: f32,
    pub is_dominant: bool,
    pub dominant_parent: DominantParent,
    /// Delta applied by the polygenic group adjustment.
    pub polygenic_effect: f32,
    /// Delta applied by epistatic links.
    pub epistatic_effect: f32,
    /// Delta applied by the biome bonus.
    pub environmental_effect: f32,
}

/// Full prediction for one breeding pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BreedingPrediction {
    pub parent1_id: Uuid,
    pub parent2_id: Uuid,
    pub traits: Vec<TraitPrediction>,
    pub rare_trait_probability: f32,
    pub superior_stats_probability: f32,
    pub overall_mutation_probability: f32,
    pub hybrid_vigor_probability: f32,
    pub confidence: f32,
}

impl BreedingPrediction {
    /// Prediction for the given trait name.
    #[must_use]
    pub fn trait_prediction(&self, trait_name: &str) -> Option<&TraitPrediction> {
        self.traits.iter().find(|t| t.trait_name == trait_name)
    }

    /// Prediction for the given trait type.
    #[must_use]
    pub fn trait_of(&self, trait_type: TraitType) -> Option<&TraitPrediction> {
        self.traits.iter().find(|t| t.trait_type == trait_type)
    }
}

/// Multi-factor compatibility report for a breeding pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BreedingCompatibility {
    pub genetic_diversity: f32,
    pub trait_synergy: f32,
    pub health: f32,
    pub environmental: f32,
    pub lineage: f32,
    /// Reported only, never weighted into `overall`.
    pub mutation_potential: f32,
    pub overall: f32,
    pub explanation: String,
}
