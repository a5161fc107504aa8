//! Configuration management for engine parameters.
//!
//! This module provides strongly-typed configuration structures that map to
//! the `chimera.toml` file. The configuration is loaded once at startup and
//! passed by reference into every engine call; nothing mutates it afterwards.
//!
//! ## Configuration Hierarchy
//!
//! 1. Default values (hardcoded in `Default` impls)
//! 2. `chimera.toml` file (overrides defaults, any section may be omitted)
//!
//! ## Example `chimera.toml`
//!
//! ```toml
//! seed = 42
//!
//! [batch]
//! blend_noise = 0.1
//!
//! [prediction]
//! base_mutation_rate = 0.05
//! dominance_clarity_threshold = 0.3
//! polygenic_enabled = true
//! epistasis_enabled = true
//! environmental_enabled = true
//!
//! [cache]
//! capacity = 100
//! ```

use serde::{Deserialize, Serialize};

/// Population-scale engine policy.
///
/// Mating compatibility is `divergence_weight * divergence +
/// generation_weight * min(gap * generation_gap_step, 1)`, clamped to [0, 1].
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(default)]
pub struct BatchConfig {
    /// Full width of the symmetric blend noise (0.1 gives ±0.05).
    pub blend_noise: f32,
    pub divergence_weight: f32,
    pub generation_weight: f32,
    pub generation_gap_step: f32,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            blend_noise: 0.1,
            divergence_weight: 0.7,
            generation_weight: 0.3,
            generation_gap_step: 0.1,
        }
    }
}

/// Single-pair inheritance prediction policy.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(default)]
pub struct PredictionConfig {
    pub base_mutation_rate: f32,
    /// Dominance difference above which one parent clearly dominates.
    pub dominance_clarity_threshold: f32,
    /// Weight of the dominant parent's value under clear dominance.
    pub dominant_weight: f32,
    /// Amplitude of the uniform perturbation applied to each prediction.
    pub prediction_noise: f32,
    pub base_confidence: f32,
    pub confidence_dominance_scale: f32,
    pub hybrid_vigor_scale: f32,
    pub polygenic_enabled: bool,
    pub epistasis_enabled: bool,
    pub environmental_enabled: bool,
}

impl Default for PredictionConfig {
    fn default() -> Self {
        Self {
            base_mutation_rate: 0.05,
            dominance_clarity_threshold: 0.3,
            dominant_weight: 0.75,
            prediction_noise: 0.1,
            base_confidence: 0.7,
            confidence_dominance_scale: 0.2,
            hybrid_vigor_scale: 1.0,
            polygenic_enabled: true,
            epistasis_enabled: true,
            environmental_enabled: true,
        }
    }
}

/// Compatibility analyzer weights and thresholds.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(default)]
pub struct AnalysisConfig {
    pub diversity_weight: f32,
    pub synergy_weight: f32,
    pub health_weight: f32,
    pub environment_weight: f32,
    pub lineage_weight: f32,
    pub high_health_threshold: f32,
    pub high_health_bonus: f32,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            diversity_weight: 0.30,
            synergy_weight: 0.25,
            health_weight: 0.20,
            environment_weight: 0.15,
            lineage_weight: 0.10,
            high_health_threshold: 0.8,
            high_health_bonus: 0.1,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(default)]
pub struct CacheConfig {
    pub capacity: usize,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self { capacity: 100 }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(default)]
pub struct EngineConfig {
    /// Root seed. `None` draws one at `init` and logs it.
    pub seed: Option<u64>,
    /// Ticks between info-level tick logs.
    pub log_interval: u64,
    pub batch: BatchConfig,
    pub prediction: PredictionConfig,
    pub analysis: AnalysisConfig,
    pub cache: CacheConfig,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            seed: None,
            log_interval: 100,
            batch: BatchConfig::default(),
            prediction: PredictionConfig::default(),
            analysis: AnalysisConfig::default(),
            cache: CacheConfig::default(),
        }
    }
}

fn unit(value: f32) -> bool {
    (0.0..=1.0).contains(&value)
}

impl EngineConfig {
    /// Validates all configuration parameters.
    ///
    /// Returns `Ok(())` if all parameters are valid, or `Err` with a description
    /// of the first validation failure.
    ///
    /// # Validation Rules
    /// - Rates, thresholds and weights must lie in [0.0, 1.0]
    /// - Analyzer weights must sum to 1.0
    /// - Cache capacity and log interval must be positive
    pub fn validate(&self) -> anyhow::Result<()> {
        // Batch validation
        anyhow::ensure!(
            unit(self.batch.blend_noise),
            "Blend noise must be in [0.0, 1.0]"
        );
        anyhow::ensure!(
            unit(self.batch.divergence_weight) && unit(self.batch.generation_weight),
            "Mating weights must be in [0.0, 1.0]"
        );
        anyhow::ensure!(
            self.batch.generation_gap_step >= 0.0,
            "Generation gap step must be non-negative"
        );

        // Prediction validation
        let p = &self.prediction;
        anyhow::ensure!(
            unit(p.base_mutation_rate),
            "Base mutation rate must be in [0.0, 1.0]"
        );
        anyhow::ensure!(
            unit(p.dominance_clarity_threshold),
            "Dominance clarity threshold must be in [0.0, 1.0]"
        );
        anyhow::ensure!(
            unit(p.dominant_weight),
            "Dominant weight must be in [0.0, 1.0]"
        );
        anyhow::ensure!(
            unit(p.prediction_noise),
            "Prediction noise must be in [0.0, 1.0]"
        );
        anyhow::ensure!(
            unit(p.base_confidence),
            "Base confidence must be in [0.0, 1.0]"
        );
        anyhow::ensure!(
            p.confidence_dominance_scale >= 0.0,
            "Confidence dominance scale must be non-negative"
        );
        anyhow::ensure!(
            p.hybrid_vigor_scale >= 0.0,
            "Hybrid vigor scale must be non-negative"
        );

        // Analysis validation
        let a = &self.analysis;
        let weights = [
            a.diversity_weight,
            a.synergy_weight,
            a.health_weight,
            a.environment_weight,
            a.lineage_weight,
        ];
        anyhow::ensure!(
            weights.iter().all(|&w| unit(w)),
            "Analysis weights must be in [0.0, 1.0]"
        );
        anyhow::ensure!(
            (weights.iter().sum::<f32>() - 1.0).abs() < 1e-3,
            "Analysis weights must sum to 1.0"
        );
        anyhow::ensure!(
            unit(a.high_health_threshold),
            "High health threshold must be in [0.0, 1.0]"
        );

        anyhow::ensure!(self.cache.capacity > 0, "Cache capacity must be positive");
        anyhow::ensure!(self.log_interval > 0, "Log interval must be positive");

        Ok(())
    }

    /// Parses and validates configuration from TOML text.
    pub fn from_toml(content: &str) -> anyhow::Result<Self> {
        let config = toml::from_str::<Self>(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads `path`, falling back to defaults if it does not exist.
    pub fn load(path: &std::path::Path) -> anyhow::Result<Self> {
        if !path.exists() {
            tracing::warn!(path = %path.display(), "Config file not found, using defaults");
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// Hash of every policy section, excluding the seed.
    #[must_use]
    pub fn fingerprint(&self) -> String {
        use sha2::{Digest, Sha256};
        let mut hasher = Sha256::new();
        hasher.update(format!("{:?}", self.batch).as_bytes());
        hasher.update(format!("{:?}", self.prediction).as_bytes());
        hasher.update(format!("{:?}", self.analysis).as_bytes());
        hasher.update(format!("{:?}", self.cache).as_bytes());
        hex::encode(hasher.finalize())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_validates() {
        let config = EngineConfig::default();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_invalid_mutation_rate() {
        let config = EngineConfig {
            prediction: PredictionConfig {
                base_mutation_rate: 1.5,
                ..Default::default()
            },
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_analysis_weights_must_sum_to_one() {
        let config = EngineConfig {
            analysis: AnalysisConfig {
                diversity_weight: 0.5,
                ..Default::default()
            },
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_zero_cache_capacity() {
        let config = EngineConfig {
            cache: CacheConfig { capacity: 0 },
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = EngineConfig::from_toml(
            r#"
            seed = 7

            [prediction]
            epistasis_enabled = false
            "#,
        )
        .expect("valid toml");
        assert_eq!(config.seed, Some(7));
        assert!(!config.prediction.epistasis_enabled);
        assert!(config.prediction.polygenic_enabled);
        assert_eq!(config.cache.capacity, 100);
    }

    #[test]
    fn test_invalid_toml_rejected() {
        assert!(EngineConfig::from_toml("[cache]\ncapacity = 0\n").is_err());
        assert!(EngineConfig::from_toml("seed = \"abc\"").is_err());
    }

    #[test]
    fn test_fingerprint_ignores_seed() {
        let config1 = EngineConfig::default();
        let config2 = EngineConfig {
            seed: Some(99),
            ..Default::default()
        };
        assert_eq!(config1.fingerprint(), config2.fingerprint());

        let config3 = EngineConfig {
            batch: BatchConfig {
                blend_noise: 0.0,
                ..Default::default()
            },
            ..Default::default()
        };
        assert_ne!(config1.fingerprint(), config3.fingerprint());
    }
}
