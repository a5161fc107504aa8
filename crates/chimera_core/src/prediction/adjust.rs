//! Post-resolution adjustment passes.
//!
//! Each pass clamps what it touches and records the delta it actually
//! applied on the affected prediction.

use crate::tables::TraitTables;
use crate::traits::{clamp_unit, mean_or};
use chimera_data::{Biome, TraitCategory, TraitPrediction};

const POLYGENIC_HIGH: f32 = 0.7;
const POLYGENIC_LOW: f32 = 0.3;
const POLYGENIC_BOOST: f32 = 0.1;
const POLYGENIC_PENALTY: f32 = 0.05;

const EPISTATIC_HIGH: f32 = 0.8;
const EPISTATIC_LOW: f32 = 0.2;
const EPISTATIC_BOOST: f32 = 0.15;
const EPISTATIC_PENALTY: f32 = 0.1;

/// Shifts a prediction by `delta`, clamps, and returns the applied change.
fn shift(prediction: &mut TraitPrediction, delta: f32) -> f32 {
    let before = prediction.predicted_value;
    prediction.predicted_value = clamp_unit(before + delta);
    prediction.predicted_value - before
}

/// Nudges every member of a multi-trait category group when the group
/// average is extreme.
pub fn apply_polygenic(traits: &mut [TraitPrediction], tables: &TraitTables) {
    for category in [
        TraitCategory::Physical,
        TraitCategory::Mental,
        TraitCategory::Special,
    ] {
        let members: Vec<usize> = traits
            .iter()
            .enumerate()
            .filter(|(_, t)| tables.category(t.trait_type) == category)
            .map(|(i, _)| i)
            .collect();
        if members.len() < 2 {
            continue;
        }

        let average = mean_or(members.iter().map(|&i| traits[i].predicted_value), 0.5);
        let delta = if average > POLYGENIC_HIGH {
            POLYGENIC_BOOST * (average - POLYGENIC_HIGH)
        } else if average < POLYGENIC_LOW {
            -POLYGENIC_PENALTY * (POLYGENIC_LOW - average)
        } else {
            continue;
        };

        for &i in &members {
            let applied = shift(&mut traits[i], delta);
            traits[i].polygenic_effect += applied;
        }
    }
}

/// Applies the epistatic links in table order. A link whose primary or
/// affected trait was not predicted is skipped.
pub fn apply_epistasis(traits: &mut [TraitPrediction], tables: &TraitTables) {
    for link in tables.epistatic_links() {
        let Some(primary) = traits.iter().position(|t| t.trait_type == link.primary) else {
            continue;
        };
        let Some(affected) = traits.iter().position(|t| t.trait_type == link.affected) else {
            continue;
        };

        let expression = traits[primary].predicted_value;
        let delta = if expression > EPISTATIC_HIGH {
            EPISTATIC_BOOST * (expression - EPISTATIC_HIGH)
        } else if expression < EPISTATIC_LOW {
            -EPISTATIC_PENALTY * (EPISTATIC_LOW - expression)
        } else {
            continue;
        };

        let applied = shift(&mut traits[affected], delta);
        traits[affected].epistatic_effect += applied;
        tracing::trace!(
            primary = ?link.primary,
            affected = ?link.affected,
            delta = applied,
            "Epistatic adjustment"
        );
    }
}

/// Adds the biome bonus for each predicted trait.
pub fn apply_environment(traits: &mut [TraitPrediction], tables: &TraitTables, biome: Biome) {
    for t in traits.iter_mut() {
        let bonus = tables.biome_bonus(t.trait_type, biome);
        if bonus != 0.0 {
            let applied = shift(t, bonus);
            t.environmental_effect += applied;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chimera_data::{DominantParent, TraitType};

    fn prediction(trait_type: TraitType, value: f32) -> TraitPrediction {
        TraitPrediction {
            trait_name: trait_type.canonical_name().to_string(),
            trait_type,
            predicted_value: value,
            parent1_value: value,
            parent2_value: value,
            parent1_dominance: 0.5,
            parent2_dominance: 0.5,
            parent1_contribution: 0.5,
            parent2_contribution: 0.5,
            mutation_chance: 0.05,
            confidence: 0.7,
            is_dominant: false,
            dominant_parent: DominantParent::Neither,
            polygenic_effect: 0.0,
            epistatic_effect: 0.0,
            environmental_effect: 0.0,
        }
    }

    #[test]
    fn test_polygenic_boosts_strong_group() {
        let tables = TraitTables::standard();
        let mut traits = vec![
            prediction(TraitType::Size, 0.9),
            prediction(TraitType::Strength, 0.9),
            prediction(TraitType::Intelligence, 0.9),
        ];
        apply_polygenic(&mut traits, &tables);
        let boost = 0.1 * (0.9 - 0.7);
        assert!((traits[0].predicted_value - (0.9 + boost)).abs() < 1e-6);
        assert!((traits[1].polygenic_effect - boost).abs() < 1e-6);
        // A lone Mental trait has no group to join
        assert_eq!(traits[2].predicted_value, 0.9);
    }

    #[test]
    fn test_polygenic_penalizes_weak_group() {
        let tables = TraitTables::standard();
        let mut traits = vec![
            prediction(TraitType::Intelligence, 0.1),
            prediction(TraitType::Wisdom, 0.1),
        ];
        apply_polygenic(&mut traits, &tables);
        let penalty = 0.05 * (0.3 - 0.1);
        assert!((traits[0].predicted_value - (0.1 - penalty)).abs() < 1e-6);
        assert!(traits[1].polygenic_effect < 0.0);
    }

    #[test]
    fn test_polygenic_leaves_moderate_group() {
        let tables = TraitTables::standard();
        let mut traits = vec![
            prediction(TraitType::Size, 0.5),
            prediction(TraitType::Speed, 0.6),
        ];
        apply_polygenic(&mut traits, &tables);
        assert_eq!(traits[0].predicted_value, 0.5);
        assert_eq!(traits[1].polygenic_effect, 0.0);
    }

    #[test]
    fn test_epistasis_high_primary_boosts_affected() {
        let tables = TraitTables::standard();
        let mut traits = vec![
            prediction(TraitType::Intelligence, 0.9),
            prediction(TraitType::MagicalAffinity, 0.5),
        ];
        apply_epistasis(&mut traits, &tables);
        let boost = 0.15 * (0.9 - 0.8);
        assert!((traits[1].predicted_value - (0.5 + boost)).abs() < 1e-6);
        assert!((traits[1].epistatic_effect - boost).abs() < 1e-6);
        assert_eq!(traits[0].epistatic_effect, 0.0);
    }

    #[test]
    fn test_epistasis_low_primary_penalizes_affected() {
        let tables = TraitTables::standard();
        let mut traits = vec![
            prediction(TraitType::Size, 0.0),
            prediction(TraitType::Strength, 0.01),
        ];
        apply_epistasis(&mut traits, &tables);
        // Clamped at zero, so only the reachable part of the penalty lands
        assert_eq!(traits[1].predicted_value, 0.0);
        assert!((traits[1].epistatic_effect + 0.01).abs() < 1e-6);
    }

    #[test]
    fn test_epistasis_chain_follows_table_order() {
        let tables = TraitTables::standard();
        // Wisdom -> Intelligence is applied after Intelligence -> MagicalAffinity,
        // so the boosted Intelligence does not feed back into MagicalAffinity.
        let mut traits = vec![
            prediction(TraitType::Wisdom, 1.0),
            prediction(TraitType::Intelligence, 0.8),
            prediction(TraitType::MagicalAffinity, 0.5),
        ];
        apply_epistasis(&mut traits, &tables);
        assert!(traits[1].predicted_value > 0.8);
        assert_eq!(traits[2].predicted_value, 0.5);
    }

    #[test]
    fn test_environment_bonus_and_clamp() {
        let tables = TraitTables::standard();
        let mut traits = vec![
            prediction(TraitType::MagicalAffinity, 0.95),
            prediction(TraitType::Fertility, 0.5),
        ];
        apply_environment(&mut traits, &tables, Biome::Mystic);
        assert_eq!(traits[0].predicted_value, 1.0);
        assert!((traits[0].environmental_effect - 0.05).abs() < 1e-6);
        assert_eq!(traits[1].environmental_effect, 0.0);
    }
}
