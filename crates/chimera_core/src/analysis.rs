//! Multi-factor breeding compatibility.
//!
//! Five factors feed the weighted `overall` score: genetic diversity, trait
//! synergy, health, environmental adaptation and lineage distance. Mutation
//! potential is reported alongside but carries no weight.

use crate::config::AnalysisConfig;
use crate::tables::TraitTables;
use crate::traits::{clamp_unit, mean_or};
use chimera_data::{BreedingCompatibility, GeneticProfile, TraitType};

const NEUTRAL: f32 = 0.5;
const VITALITY_WEIGHT: f32 = 0.6;
const STAMINA_WEIGHT: f32 = 0.4;
const SAME_GENERATION_LINEAGE: f32 = 0.7;
const LINEAGE_DECAY_PER_GENERATION: f32 = 0.1;
const MUTATION_POTENTIAL_PER_MUTATION: f32 = 0.05;

/// Stateless analyzer over a config and the shared lookup tables.
pub struct CompatibilityAnalyzer<'a> {
    config: &'a AnalysisConfig,
    tables: &'a TraitTables,
}

impl<'a> CompatibilityAnalyzer<'a> {
    #[must_use]
    pub fn new(config: &'a AnalysisConfig, tables: &'a TraitTables) -> Self {
        Self { config, tables }
    }

    /// Builds the full compatibility report for a pair.
    #[must_use]
    pub fn analyze(
        &self,
        parent1: &GeneticProfile,
        parent2: &GeneticProfile,
    ) -> BreedingCompatibility {
        let genetic_diversity = diversity(parent1, parent2);
        let trait_synergy = self.synergy(parent1, parent2);
        let health = self.health(parent1, parent2);
        let environmental = environmental(parent1, parent2);
        let lineage = lineage(parent1.generation, parent2.generation);
        let mutation_potential = mutation_potential(parent1, parent2);

        let c = self.config;
        let overall = clamp_unit(
            genetic_diversity * c.diversity_weight
                + trait_synergy * c.synergy_weight
                + health * c.health_weight
                + environmental * c.environment_weight
                + lineage * c.lineage_weight,
        );

        let mut report = BreedingCompatibility {
            genetic_diversity,
            trait_synergy,
            health,
            environmental,
            lineage,
            mutation_potential,
            overall,
            explanation: String::new(),
        };
        report.explanation = explain(&report);
        report
    }

    /// Mean product of each synergy pair's values per parent, over pairs
    /// present in both parents.
    fn synergy(&self, parent1: &GeneticProfile, parent2: &GeneticProfile) -> f32 {
        let scores = self.tables.synergy_pairs().iter().filter_map(|&(a, b)| {
            let p1 = parent1.value_of(a)? * parent1.value_of(b)?;
            let p2 = parent2.value_of(a)? * parent2.value_of(b)?;
            Some((p1 + p2) / 2.0)
        });
        clamp_unit(mean_or(scores, NEUTRAL))
    }

    fn health(&self, parent1: &GeneticProfile, parent2: &GeneticProfile) -> f32 {
        let h1 = parent_health(parent1);
        let h2 = parent_health(parent2);
        let mut health = (h1 + h2) / 2.0;
        let threshold = self.config.high_health_threshold;
        if h1 > threshold && h2 > threshold {
            health += self.config.high_health_bonus;
        }
        clamp_unit(health)
    }
}

fn parent_health(profile: &GeneticProfile) -> f32 {
    let vitality = profile.value_of(TraitType::Vitality).unwrap_or(NEUTRAL);
    let stamina = profile.value_of(TraitType::Stamina).unwrap_or(NEUTRAL);
    VITALITY_WEIGHT * vitality + STAMINA_WEIGHT * stamina
}

/// Mean of value and dominance differences over shared trait names.
fn diversity(parent1: &GeneticProfile, parent2: &GeneticProfile) -> f32 {
    let diffs = parent1.trait_names().into_iter().filter_map(|name| {
        let g1 = parent1.gene(name)?;
        let g2 = parent2.gene(name)?;
        let value_diff = (g1.value_or_neutral() - g2.value_or_neutral()).abs();
        let dominance_diff = (g1.dominance_strength - g2.dominance_strength).abs();
        Some((value_diff + dominance_diff) / 2.0)
    });
    clamp_unit(mean_or(diffs, NEUTRAL))
}

fn environmental(parent1: &GeneticProfile, parent2: &GeneticProfile) -> f32 {
    let a1 = parent1
        .value_of(TraitType::EnvironmentalAdaptation)
        .unwrap_or(NEUTRAL);
    let a2 = parent2
        .value_of(TraitType::EnvironmentalAdaptation)
        .unwrap_or(NEUTRAL);
    clamp_unit((a1 + a2) / 2.0)
}

/// Outbreeding policy: one or two generations apart is ideal.
#[must_use]
pub fn lineage(generation1: u32, generation2: u32) -> f32 {
    match generation1.abs_diff(generation2) {
        0 => SAME_GENERATION_LINEAGE,
        1 | 2 => 1.0,
        gap => (1.0 - (gap - 2) as f32 * LINEAGE_DECAY_PER_GENERATION).max(0.0),
    }
}

fn mutation_potential(parent1: &GeneticProfile, parent2: &GeneticProfile) -> f32 {
    let count = parent1.mutations.len() + parent2.mutations.len();
    clamp_unit(NEUTRAL + count as f32 * MUTATION_POTENTIAL_PER_MUTATION)
}

/// Qualitative remarks for every factor crossing a threshold.
fn explain(report: &BreedingCompatibility) -> String {
    let mut remarks: Vec<&str> = Vec::new();

    if report.genetic_diversity > 0.8 {
        remarks.push("Excellent genetic diversity");
    } else if report.genetic_diversity < 0.2 {
        remarks.push("Low genetic diversity may concentrate weaknesses");
    }
    if report.trait_synergy > 0.7 {
        remarks.push("Strong trait synergy");
    }
    if report.health > 0.8 {
        remarks.push("Both parents are in excellent health");
    } else if report.health < 0.3 {
        remarks.push("Health concerns for offspring");
    }
    if report.environmental > 0.7 {
        remarks.push("Offspring should adapt well to their environment");
    }
    if report.lineage >= 1.0 {
        remarks.push("Ideal generational distance");
    } else if report.lineage < 0.3 {
        remarks.push("Distant generations reduce lineage compatibility");
    }
    if report.mutation_potential > 0.7 {
        remarks.push("High mutation potential");
    }

    if remarks.is_empty() {
        "Average breeding compatibility".to_string()
    } else {
        remarks.join(". ")
    }
}
