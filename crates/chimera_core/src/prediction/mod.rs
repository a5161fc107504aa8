//! Mendelian inheritance prediction for one breeding pair.
//!
//! For every trait carried by either parent the predictor resolves
//! dominance, perturbs and clamps the blended value, then runs the optional
//! adjustment passes in a fixed order: polygenic, epistatic, environmental.
//! A trait missing on one side is read as `{value: 0.5, dominance: 0.5}`.

pub mod adjust;

use crate::config::PredictionConfig;
use crate::tables::TraitTables;
use crate::traits::{
    clamp_unit, contribution_split, mean_or, resolve_dominance, symmetric_noise,
};
use chimera_data::{
    Biome, BreedingPrediction, DominantParent, Gene, GeneticProfile, Season, TraitPrediction,
    TraitType,
};
use rand::Rng;

const DEFAULT_VALUE: f32 = 0.5;
const DEFAULT_DOMINANCE: f32 = 0.5;
const RARE_TRAIT_BASE: f32 = 0.01;
const RARE_TRAIT_PER_SEVERITY: f32 = 0.1;
const SUPERIOR_STATS_GAIN: f32 = 2.5;

/// Environmental signals a prediction is made under.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PredictionContext {
    pub biome: Biome,
    pub season: Season,
    /// Age-driven mutation pressure multiplier.
    pub age_factor: f32,
}

impl Default for PredictionContext {
    fn default() -> Self {
        Self {
            biome: Biome::default(),
            season: Season::default(),
            age_factor: 1.0,
        }
    }
}

impl PredictionContext {
    /// Seasonal mutation pressure multiplier.
    #[must_use]
    pub fn season_factor(&self) -> f32 {
        match self.season {
            Season::Spring => 1.2,
            Season::Summer => 1.0,
            Season::Autumn => 0.9,
            Season::Winter => 1.1,
        }
    }
}

/// One side of a trait comparison after default substitution.
#[derive(Debug, Clone, Copy)]
struct Allele {
    value: f32,
    dominance: f32,
}

impl Allele {
    fn from_gene(gene: Option<&Gene>) -> Self {
        gene.map_or(
            Allele {
                value: DEFAULT_VALUE,
                dominance: DEFAULT_DOMINANCE,
            },
            |g| Allele {
                value: g.value_or_neutral(),
                dominance: g.dominance_strength,
            },
        )
    }
}

/// Stateless predictor over a config and the shared lookup tables.
pub struct InheritancePredictor<'a> {
    config: &'a PredictionConfig,
    tables: &'a TraitTables,
}

impl<'a> InheritancePredictor<'a> {
    #[must_use]
    pub fn new(config: &'a PredictionConfig, tables: &'a TraitTables) -> Self {
        Self { config, tables }
    }

    /// Predicts offspring traits and aggregate odds for a pair.
    ///
    /// Never mutates either profile. All randomness comes from `rng`.
    pub fn predict<R: Rng>(
        &self,
        parent1: &GeneticProfile,
        parent2: &GeneticProfile,
        context: &PredictionContext,
        rng: &mut R,
    ) -> BreedingPrediction {
        let mut traits: Vec<TraitPrediction> = Self::trait_union(parent1, parent2)
            .into_iter()
            .map(|(name, trait_type)| {
                let a1 = Allele::from_gene(parent1.gene(name));
                let a2 = Allele::from_gene(parent2.gene(name));
                self.predict_trait(name, trait_type, a1, a2, context, rng)
            })
            .collect();

        if self.config.polygenic_enabled {
            adjust::apply_polygenic(&mut traits, self.tables);
        }
        if self.config.epistasis_enabled {
            adjust::apply_epistasis(&mut traits, self.tables);
        }
        if self.config.environmental_enabled {
            adjust::apply_environment(&mut traits, self.tables, context.biome);
        }

        self.aggregate(parent1, parent2, traits)
    }

    /// Union of trait names: parent 1's order first, then parent 2's extras.
    fn trait_union<'p>(
        parent1: &'p GeneticProfile,
        parent2: &'p GeneticProfile,
    ) -> Vec<(&'p str, TraitType)> {
        let mut union: Vec<(&str, TraitType)> = Vec::new();
        for gene in parent1.genes.iter().chain(parent2.genes.iter()) {
            if !union.iter().any(|(n, _)| *n == gene.trait_name) {
                union.push((gene.trait_name.as_str(), gene.trait_type));
            }
        }
        union
    }

    fn predict_trait<R: Rng>(
        &self,
        name: &str,
        trait_type: TraitType,
        a1: Allele,
        a2: Allele,
        context: &PredictionContext,
        rng: &mut R,
    ) -> TraitPrediction {
        let cfg = self.config;
        let outcome = resolve_dominance(
            a1.value,
            a1.dominance,
            a2.value,
            a2.dominance,
            cfg.dominance_clarity_threshold,
            cfg.dominant_weight,
        );
        let predicted_value =
            clamp_unit(outcome.value + symmetric_noise(rng, cfg.prediction_noise));

        let (parent1_contribution, parent2_contribution) =
            contribution_split(a1.dominance, a2.dominance);

        let mutation_chance = clamp_unit(
            cfg.base_mutation_rate * context.season_factor() * context.age_factor,
        );

        let dominance_difference = (a1.dominance - a2.dominance).abs();
        let confidence =
            clamp_unit(cfg.base_confidence + dominance_difference * cfg.confidence_dominance_scale);

        TraitPrediction {
            trait_name: name.to_string(),
            trait_type,
            predicted_value,
            parent1_value: a1.value,
            parent2_value: a2.value,
            parent1_dominance: a1.dominance,
            parent2_dominance: a2.dominance,
            parent1_contribution,
            parent2_contribution,
            mutation_chance,
            confidence,
            is_dominant: outcome.dominant_parent != DominantParent::Neither,
            dominant_parent: outcome.dominant_parent,
            polygenic_effect: 0.0,
            epistatic_effect: 0.0,
            environmental_effect: 0.0,
        }
    }

    fn aggregate(
        &self,
        parent1: &GeneticProfile,
        parent2: &GeneticProfile,
        traits: Vec<TraitPrediction>,
    ) -> BreedingPrediction {
        let severity = parent1.mutation_severity() + parent2.mutation_severity();
        let rare_trait_probability =
            clamp_unit(RARE_TRAIT_BASE + severity * RARE_TRAIT_PER_SEVERITY);

        let superior_stats_probability = if traits.is_empty() {
            0.0
        } else {
            let avg_predicted = mean_or(traits.iter().map(|t| t.predicted_value), 0.0);
            let avg_parent = mean_or(
                traits
                    .iter()
                    .map(|t| (t.parent1_value + t.parent2_value) / 2.0),
                0.0,
            );
            clamp_unit(0.5 + (avg_predicted - avg_parent) * SUPERIOR_STATS_GAIN)
        };

        let overall_mutation_probability = mean_or(traits.iter().map(|t| t.mutation_chance), 0.0);
        let diversity = genetic_diversity(parent1, parent2);
        let hybrid_vigor_probability = clamp_unit(diversity * self.config.hybrid_vigor_scale);
        let confidence = mean_or(traits.iter().map(|t| t.confidence), 0.0);

        BreedingPrediction {
            parent1_id: parent1.id,
            parent2_id: parent2.id,
            traits,
            rare_trait_probability,
            superior_stats_probability,
            overall_mutation_probability,
            hybrid_vigor_probability,
            confidence,
        }
    }
}

/// Mean absolute value difference over traits both parents carry, 0 when
/// they share none.
#[must_use]
pub fn genetic_diversity(parent1: &GeneticProfile, parent2: &GeneticProfile) -> f32 {
    let diffs = parent1.trait_names().into_iter().filter_map(|name| {
        let g1 = parent1.gene(name)?;
        let g2 = parent2.gene(name)?;
        Some((g1.value_or_neutral() - g2.value_or_neutral()).abs())
    });
    mean_or(diffs, 0.0)
}
