mod common;

use chimera_lib::model::prediction::PredictionContext;
use chimera_lib::model::state::{Biome, DominantParent, GeneticProfile, Season, TraitType};
use chimera_lib::sample;
use common::{bare_engine, seeded_engine, ProfileBuilder};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

#[test]
fn test_codominant_parents_predict_near_mean() {
    let ctx = PredictionContext::default();
    for seed in 0..40 {
        let engine = bare_engine(seed);
        let p1 = ProfileBuilder::new().gene(TraitType::Size, 0.2, 0.5).build();
        let p2 = ProfileBuilder::new().gene(TraitType::Size, 0.8, 0.5).build();
        let pred = engine.predict(Some(&p1), Some(&p2), &ctx).unwrap();
        let size = pred.trait_of(TraitType::Size).unwrap();
        assert!(
            (size.predicted_value - 0.5).abs() <= 0.1 + 1e-6,
            "seed {} predicted {}",
            seed,
            size.predicted_value
        );
        assert_eq!(size.dominant_parent, DominantParent::Neither);
    }
}

#[test]
fn test_clear_dominance_favors_dominant_parent() {
    let ctx = PredictionContext::default();
    for seed in 0..40 {
        let engine = bare_engine(seed);
        let p1 = ProfileBuilder::new()
            .gene(TraitType::Strength, 0.9, 0.95)
            .build();
        let p2 = ProfileBuilder::new()
            .gene(TraitType::Strength, 0.1, 0.1)
            .build();
        let pred = engine.predict(Some(&p1), Some(&p2), &ctx).unwrap();
        let strength = pred.trait_of(TraitType::Strength).unwrap();
        let expected = 0.75 * 0.9 + 0.25 * 0.1;
        assert!((strength.predicted_value - expected).abs() <= 0.1 + 1e-6);
        assert_eq!(strength.dominant_parent, DominantParent::First);
        assert!(strength.is_dominant);
        assert!(strength.parent1_contribution > strength.parent2_contribution);
    }
}

#[test]
fn test_all_outputs_clamped() {
    let engine = seeded_engine(21);
    let mut rng = ChaCha8Rng::seed_from_u64(21);
    for biome in Biome::ALL {
        engine.clear_cache();
        let ctx = PredictionContext {
            biome,
            season: Season::Spring,
            age_factor: 50.0,
        };
        for _ in 0..20 {
            let p1 = sample::random_profile(&mut rng, 1);
            let p2 = sample::random_profile(&mut rng, 4);
            let pred = engine.predict(Some(&p1), Some(&p2), &ctx).unwrap();
            let unit = 0.0..=1.0;
            assert!(unit.contains(&pred.rare_trait_probability));
            assert!(unit.contains(&pred.superior_stats_probability));
            assert!(unit.contains(&pred.overall_mutation_probability));
            assert!(unit.contains(&pred.hybrid_vigor_probability));
            assert!(unit.contains(&pred.confidence));
            for t in &pred.traits {
                assert!(unit.contains(&t.predicted_value), "{}", t.trait_name);
                assert!(unit.contains(&t.mutation_chance));
                assert!(unit.contains(&t.confidence));
            }
        }
    }
}

#[test]
fn test_absent_parent_yields_nothing() {
    let engine = seeded_engine(1);
    let p = ProfileBuilder::new().gene(TraitType::Speed, 0.4, 0.6).build();
    let ctx = PredictionContext::default();
    assert!(engine.predict(None, Some(&p), &ctx).is_none());
    assert!(engine.predict(Some(&p), None, &ctx).is_none());
    assert!(engine.predict(None, None, &ctx).is_none());
    assert_eq!(engine.metrics().predictions(), 0);
}

#[test]
fn test_prediction_does_not_mutate_parents() {
    let engine = seeded_engine(4);
    let mut rng = ChaCha8Rng::seed_from_u64(4);
    let p1 = sample::random_profile(&mut rng, 1);
    let p2 = sample::random_profile(&mut rng, 1);
    let (before1, before2) = (p1.clone(), p2.clone());
    let _ = engine.predict(Some(&p1), Some(&p2), &PredictionContext::default());
    assert_eq!(p1, before1);
    assert_eq!(p2, before2);
}

#[test]
fn test_trait_union_covers_both_parents() {
    let engine = bare_engine(2);
    let p1 = ProfileBuilder::new()
        .gene(TraitType::Size, 0.6, 0.5)
        .gene(TraitType::Speed, 0.6, 0.5)
        .build();
    let p2 = ProfileBuilder::new()
        .gene(TraitType::Speed, 0.3, 0.5)
        .gene(TraitType::Fertility, 0.9, 0.5)
        .build();
    let pred = engine
        .predict(Some(&p1), Some(&p2), &PredictionContext::default())
        .unwrap();
    let names: Vec<&str> = pred.traits.iter().map(|t| t.trait_name.as_str()).collect();
    assert_eq!(names, vec!["size", "speed", "fertility"]);
    let fertility = pred.trait_of(TraitType::Fertility).unwrap();
    assert_eq!(fertility.parent1_value, 0.5);
    assert_eq!(fertility.parent1_dominance, 0.5);
}

#[test]
fn test_biome_bonus_recorded_on_trait() {
    let mut config = chimera_lib::model::config::EngineConfig {
        seed: Some(3),
        ..Default::default()
    };
    config.prediction.polygenic_enabled = false;
    config.prediction.epistasis_enabled = false;
    let engine = chimera_lib::model::GeneticsEngine::init(config).unwrap();

    let p = ProfileBuilder::new()
        .gene(TraitType::MagicalAffinity, 0.5, 0.5)
        .build();
    let ctx = PredictionContext {
        biome: Biome::Mystic,
        ..Default::default()
    };
    let pred = engine.predict(Some(&p), Some(&p), &ctx).unwrap();
    let magic = pred.trait_of(TraitType::MagicalAffinity).unwrap();
    assert!(magic.environmental_effect > 0.0);
    assert_eq!(magic.polygenic_effect, 0.0);
    assert_eq!(magic.epistatic_effect, 0.0);
}

#[test]
fn test_empty_profiles_predict_no_traits() {
    let engine = seeded_engine(9);
    let (a, b) = (GeneticProfile::new(0), GeneticProfile::new(0));
    let pred = engine
        .predict(Some(&a), Some(&b), &PredictionContext::default())
        .unwrap();
    assert!(pred.traits.is_empty());
    assert_eq!(pred.confidence, 0.0);
    assert!((pred.rare_trait_probability - 0.01).abs() < 1e-6);
}

#[test]
fn test_mutation_severity_raises_rare_trait_odds() {
    let engine = seeded_engine(6);
    let clean = ProfileBuilder::new().gene(TraitType::Vitality, 0.5, 0.5).build();
    let mutated = ProfileBuilder::new()
        .gene(TraitType::Vitality, 0.5, 0.5)
        .mutation(0.9)
        .mutation(0.6)
        .build();
    let ctx = PredictionContext::default();
    let base = engine.predict(Some(&clean), Some(&clean), &ctx).unwrap();
    let boosted = engine.predict(Some(&mutated), Some(&clean), &ctx).unwrap();
    assert!((boosted.rare_trait_probability - (0.01 + 0.1 * 1.5)).abs() < 1e-5);
    assert!(boosted.rare_trait_probability > base.rare_trait_probability);
}
