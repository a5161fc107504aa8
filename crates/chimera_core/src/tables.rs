//! Enum-keyed trait lookup tables.
//!
//! Built once when the engine starts and shared by the predictor and the
//! analyzer; nothing in the hot path compares trait name strings.

use chimera_data::{Biome, TraitCategory, TraitType};
use std::collections::HashMap;

/// Directed epistatic relationship: `primary`'s expression shifts `affected`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EpistaticLink {
    pub primary: TraitType,
    pub affected: TraitType,
}

/// Trait metadata tables.
#[derive(Debug, Clone)]
pub struct TraitTables {
    categories: HashMap<TraitType, TraitCategory>,
    epistasis: Vec<EpistaticLink>,
    biome_bonuses: HashMap<(TraitType, Biome), f32>,
    synergy_pairs: Vec<(TraitType, TraitType)>,
}

impl Default for TraitTables {
    fn default() -> Self {
        Self::standard()
    }
}

impl TraitTables {
    /// The standard trait metadata.
    #[must_use]
    pub fn standard() -> Self {
        use TraitType::*;

        let categories = TraitType::ALL
            .iter()
            .map(|&t| {
                let category = match t {
                    Size | Strength | Speed | Agility | Vitality | Stamina | Fertility
                    | Longevity => TraitCategory::Physical,
                    Intelligence | Wisdom | Temperament => TraitCategory::Mental,
                    MagicalAffinity | ElementalResistance | EnvironmentalAdaptation => {
                        TraitCategory::Special
                    }
                };
                (t, category)
            })
            .collect();

        // Applied in this order; later links see earlier adjustments.
        let epistasis = [
            (Intelligence, MagicalAffinity),
            (Size, Strength),
            (Vitality, Stamina),
            (Agility, Speed),
            (EnvironmentalAdaptation, ElementalResistance),
            (Wisdom, Intelligence),
        ]
        .into_iter()
        .map(|(primary, affected)| EpistaticLink { primary, affected })
        .collect();

        let biome_bonuses = [
            ((Speed, Biome::Grassland), 0.05),
            ((Stamina, Biome::Grassland), 0.03),
            ((Agility, Biome::Forest), 0.05),
            ((Wisdom, Biome::Forest), 0.02),
            ((Stamina, Biome::Desert), 0.05),
            ((EnvironmentalAdaptation, Biome::Desert), 0.05),
            ((Size, Biome::Tundra), 0.05),
            ((Vitality, Biome::Tundra), 0.03),
            ((Speed, Biome::Tundra), -0.03),
            ((ElementalResistance, Biome::Volcanic), 0.08),
            ((Strength, Biome::Volcanic), 0.03),
            ((Agility, Biome::Ocean), 0.04),
            ((EnvironmentalAdaptation, Biome::Ocean), 0.05),
            ((MagicalAffinity, Biome::Mystic), 0.10),
            ((Wisdom, Biome::Mystic), 0.05),
        ]
        .into_iter()
        .collect();

        let synergy_pairs = vec![
            (Size, Strength),
            (Intelligence, MagicalAffinity),
            (Agility, Speed),
            (Vitality, Stamina),
            (Wisdom, Intelligence),
        ];

        Self {
            categories,
            epistasis,
            biome_bonuses,
            synergy_pairs,
        }
    }

    #[must_use]
    pub fn category(&self, trait_type: TraitType) -> TraitCategory {
        self.categories
            .get(&trait_type)
            .copied()
            .unwrap_or(TraitCategory::Special)
    }

    /// Epistatic links in application order.
    #[must_use]
    pub fn epistatic_links(&self) -> &[EpistaticLink] {
        &self.epistasis
    }

    /// Additive bonus for a trait in a biome, zero if none is defined.
    #[must_use]
    pub fn biome_bonus(&self, trait_type: TraitType, biome: Biome) -> f32 {
        self.biome_bonuses
            .get(&(trait_type, biome))
            .copied()
            .unwrap_or(0.0)
    }

    /// Trait pairs that interact favorably when both are strong.
    #[must_use]
    pub fn synergy_pairs(&self) -> &[(TraitType, TraitType)] {
        &self.synergy_pairs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_trait_has_a_category() {
        let tables = TraitTables::standard();
        assert_eq!(tables.categories.len(), TraitType::ALL.len());
        assert_eq!(tables.category(TraitType::Size), TraitCategory::Physical);
        assert_eq!(tables.category(TraitType::Wisdom), TraitCategory::Mental);
        assert_eq!(
            tables.category(TraitType::MagicalAffinity),
            TraitCategory::Special
        );
    }

    #[test]
    fn test_epistatic_links_have_no_self_loops() {
        let tables = TraitTables::standard();
        assert!(tables
            .epistatic_links()
            .iter()
            .all(|l| l.primary != l.affected));
    }

    #[test]
    fn test_biome_bonus_defaults_to_zero() {
        let tables = TraitTables::standard();
        assert_eq!(tables.biome_bonus(TraitType::Fertility, Biome::Ocean), 0.0);
        assert!(tables.biome_bonus(TraitType::MagicalAffinity, Biome::Mystic) > 0.0);
    }
}
