//! # Chimera Core
//!
//! The genetic computation engine behind Chimera's creature breeding.
//!
//! This crate contains the deterministic genetics logic, including:
//! - Batch trait blending, fitness and mating compatibility for whole populations
//! - Mendelian inheritance prediction for a single breeding pair
//! - Multi-factor breeding compatibility analysis
//! - A bounded prediction cache
//! - Metrics collection and structured logging
//!
//! ## Architecture
//!
//! - **Batch path**: contiguous `TraitVector` arrays, Rayon-parallel per index,
//!   each index seeded from the tick seed so results never depend on thread count
//! - **Interactive path**: named-trait profiles run through dominance resolution,
//!   then polygenic, epistatic and environmental adjustments
//! - **Deterministic**: every random draw comes from a caller-seeded `ChaCha8Rng`
//!
//! ## Example
//!
//! ```
//! use chimera_core::batch::blend;
//! use chimera_core::config::BatchConfig;
//! use chimera_data::TraitVector;
//!
//! let p1 = vec![TraitVector::new(1.0, 0.8, 0.6, 0.4)];
//! let p2 = vec![TraitVector::new(0.0, 0.2, 0.4, 0.6)];
//! let offspring = blend::blend(&p1, &p2, &[0.5], 42, &BatchConfig::default());
//! assert!(offspring[0].lanes.iter().all(|&l| (0.45..=0.55).contains(&l)));
//! ```

/// Multi-factor breeding compatibility reports
pub mod analysis;
/// Population-scale blending, fitness and mating engines
pub mod batch;
/// Bounded prediction memo table
pub mod cache;
/// Configuration management for engine parameters
pub mod config;
/// Engine lifecycle (`init`/`step`) and the interactive entry points
pub mod engine;
/// Performance metrics collection and logging
pub mod metrics;
/// Mendelian inheritance prediction for a single pair
pub mod prediction;
/// Enum-keyed trait lookup tables
pub mod tables;
/// Shared numeric primitives and trait vector logic
pub mod traits;

pub use analysis::CompatibilityAnalyzer;
pub use cache::PredictionCache;
pub use config::EngineConfig;
pub use engine::{GeneticsEngine, PopulationBatch, TickReport};
pub use metrics::{init_logging, Metrics};
pub use prediction::{InheritancePredictor, PredictionContext};
pub use tables::TraitTables;
pub use traits::TraitVectorLogic;
