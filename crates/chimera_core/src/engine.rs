//! Engine lifecycle and entry points.
//!
//! An external scheduler calls [`GeneticsEngine::init`] once and then
//! [`GeneticsEngine::step`] per simulation tick. Interactive callers use
//! [`GeneticsEngine::predict`] and [`GeneticsEngine::analyze`] at any time.
//! The prediction cache is the only state that changes between calls and
//! sits behind a mutex.

use crate::analysis::CompatibilityAnalyzer;
use crate::batch;
use crate::cache::PredictionCache;
use crate::config::EngineConfig;
use crate::metrics::Metrics;
use crate::prediction::{InheritancePredictor, PredictionContext};
use crate::tables::TraitTables;
use crate::traits::{mean_or, mix_id, mix_seed};
use chimera_data::{BreedingCompatibility, BreedingPrediction, GeneticProfile, TraitVector};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use std::sync::Mutex;
use std::time::Instant;

/// One tick's worth of population data.
///
/// Index `i` of every vector describes the same breeding pair.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PopulationBatch {
    pub parent1: Vec<TraitVector>,
    pub parent2: Vec<TraitVector>,
    pub generation1: Vec<u32>,
    pub generation2: Vec<u32>,
    pub blend_factors: Vec<f32>,
    /// Environmental target each offspring is scored against.
    pub environment: Vec<TraitVector>,
    pub weights: Vec<TraitVector>,
}

impl PopulationBatch {
    #[must_use]
    pub fn len(&self) -> usize {
        self.parent1.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.parent1.is_empty()
    }
}

/// Results of one [`GeneticsEngine::step`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TickReport {
    pub tick: u64,
    pub offspring: Vec<TraitVector>,
    /// Fitness of each offspring in its environment.
    pub fitness: Vec<f32>,
    /// Mating compatibility of each parent pair.
    pub compatibility: Vec<f32>,
    pub mean_fitness: f32,
    pub mean_compatibility: f32,
}

pub struct GeneticsEngine {
    config: EngineConfig,
    tables: TraitTables,
    cache: Mutex<PredictionCache>,
    metrics: Metrics,
    seed: u64,
    tick: u64,
}

impl GeneticsEngine {
    /// Validates the config and builds the lookup tables.
    pub fn init(config: EngineConfig) -> anyhow::Result<Self> {
        config.validate()?;
        let seed = config.seed.unwrap_or_else(rand::random);
        tracing::info!(
            seed = seed,
            fingerprint = %config.fingerprint(),
            cache_capacity = config.cache.capacity,
            "Genetics engine initialized"
        );
        Ok(Self {
            cache: Mutex::new(PredictionCache::new(config.cache.capacity)),
            metrics: Metrics::new(config.log_interval),
            tables: TraitTables::standard(),
            config,
            seed,
            tick: 0,
        })
    }

    /// Runs blending, fitness and mating compatibility for one tick.
    ///
    /// # Panics
    /// If the batch's parallel vectors differ in length.
    pub fn step(&mut self, batch: &PopulationBatch) -> TickReport {
        let start = Instant::now();
        let tick_seed = mix_seed(self.seed, self.tick);
        let cfg = &self.config.batch;

        let offspring = batch::blend(
            &batch.parent1,
            &batch.parent2,
            &batch.blend_factors,
            tick_seed,
            cfg,
        );
        let fitness = batch::evaluate(&offspring, &batch.environment, &batch.weights);
        let compatibility = batch::compatibility(
            &batch.parent1,
            &batch.parent2,
            &batch.generation1,
            &batch.generation2,
            cfg,
        );

        let report = TickReport {
            tick: self.tick,
            mean_fitness: mean_or(fitness.iter().copied(), 0.0),
            mean_compatibility: mean_or(compatibility.iter().copied(), 0.0),
            offspring,
            fitness,
            compatibility,
        };

        self.tick += 1;
        self.metrics.record_tick(start.elapsed(), batch.len());
        report
    }

    /// Predicts offspring of a pair, served from the cache when possible.
    ///
    /// Returns `None` if either parent is absent. The RNG stream is derived
    /// from the engine seed and both parent ids, so a pair's prediction does
    /// not depend on call order.
    pub fn predict(
        &self,
        parent1: Option<&GeneticProfile>,
        parent2: Option<&GeneticProfile>,
        context: &PredictionContext,
    ) -> Option<BreedingPrediction> {
        let (p1, p2) = (parent1?, parent2?);
        let key = (p1.id, p2.id);

        let mut cache = self.cache.lock().unwrap_or_else(|e| e.into_inner());
        let mut computed = false;
        let prediction = cache.get_or_compute(key, || {
            computed = true;
            let mut rng = self.pair_rng(p1, p2);
            InheritancePredictor::new(&self.config.prediction, &self.tables)
                .predict(p1, p2, context, &mut rng)
        });
        drop(cache);

        self.metrics.record_prediction(!computed);
        tracing::debug!(
            parent1 = %p1.id,
            parent2 = %p2.id,
            cached = !computed,
            traits = prediction.traits.len(),
            "Breeding prediction"
        );
        Some(prediction)
    }

    /// Compatibility report for a pair, `None` if either parent is absent.
    pub fn analyze(
        &self,
        parent1: Option<&GeneticProfile>,
        parent2: Option<&GeneticProfile>,
    ) -> Option<BreedingCompatibility> {
        let (p1, p2) = (parent1?, parent2?);
        self.metrics.record_analysis();
        Some(CompatibilityAnalyzer::new(&self.config.analysis, &self.tables).analyze(p1, p2))
    }

    fn pair_rng(&self, parent1: &GeneticProfile, parent2: &GeneticProfile) -> ChaCha8Rng {
        let seed = mix_id(mix_id(self.seed, parent1.id.as_u128()), parent2.id.as_u128());
        ChaCha8Rng::seed_from_u64(seed)
    }

    /// Drops every cached prediction, e.g. after the biome or season changes.
    pub fn clear_cache(&self) {
        self.cache
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .clear();
    }

    #[must_use]
    pub fn cached_predictions(&self) -> usize {
        self.cache.lock().unwrap_or_else(|e| e.into_inner()).len()
    }

    #[must_use]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    #[must_use]
    pub fn tables(&self) -> &TraitTables {
        &self.tables
    }

    #[must_use]
    pub fn metrics(&self) -> &Metrics {
        &self.metrics
    }

    /// Resolved root seed.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Number of completed ticks.
    #[must_use]
    pub fn tick(&self) -> u64 {
        self.tick
    }
}
