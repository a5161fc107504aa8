use crate::error::{DataError, Result};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Value read for a gene whose value was never rolled.
pub const NEUTRAL_TRAIT_VALUE: f32 = 0.5;

/// Heritable trait a gene encodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum TraitType {
    /// Body size.
    Size,
    /// Physical strength.
    Strength,
    /// Top movement speed.
    Speed,
    /// Reflexes and dexterity.
    Agility,
    /// Problem solving.
    Intelligence,
    /// Learned judgement.
    Wisdom,
    /// Affinity for magic.
    MagicalAffinity,
    /// Resistance to elemental damage.
    ElementalResistance,
    /// Base health.
    Vitality,
    /// Endurance under exertion.
    Stamina,
    /// Tolerance of hostile habitats.
    EnvironmentalAdaptation,
    /// Litter size and conception odds.
    Fertility,
    /// Natural lifespan.
    Longevity,
    /// Disposition toward others.
    Temperament,
}

impl TraitType {
    pub const ALL: [TraitType; 14] = [
        TraitType::Size,
        TraitType::Strength,
        TraitType::Speed,
        TraitType::Agility,
        TraitType::Intelligence,
        TraitType::Wisdom,
        TraitType::MagicalAffinity,
        TraitType::ElementalResistance,
        TraitType::Vitality,
        TraitType::Stamina,
        TraitType::EnvironmentalAdaptation,
        TraitType::Fertility,
        TraitType::Longevity,
        TraitType::Temperament,
    ];

    /// Canonical gene name for this trait.
    #[must_use]
    pub fn canonical_name(self) -> &'static str {
        match self {
            TraitType::Size => "size",
            TraitType::Strength => "strength",
            TraitType::Speed => "speed",
            TraitType::Agility => "agility",
            TraitType::Intelligence => "intelligence",
            TraitType::Wisdom => "wisdom",
            TraitType::MagicalAffinity => "magical_affinity",
            TraitType::ElementalResistance => "elemental_resistance",
            TraitType::Vitality => "vitality",
            TraitType::Stamina => "stamina",
            TraitType::EnvironmentalAdaptation => "environmental_adaptation",
            TraitType::Fertility => "fertility",
            TraitType::Longevity => "longevity",
            TraitType::Temperament => "temperament",
        }
    }
}

/// Polygenic grouping of traits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TraitCategory {
    Physical,
    Mental,
    Special,
}

/// How a gene is expressed in the phenotype.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum ExpressionType {
    Dominant,
    Recessive,
    #[default]
    Codominant,
    /// Partial expression, blends with the partner allele.
    Incomplete,
}

/// A named trait record carried by a profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Gene {
    /// Trait name, unique per profile by convention.
    pub trait_name: String,
    /// Trait this gene encodes.
    pub trait_type: TraitType,
    /// Trait value in [0, 1], `None` if never rolled.
    pub value: Option<f32>,
    /// Dominance strength in [0, 1].
    pub dominance_strength: f32,
    /// Whether the gene is currently expressed.
    pub is_active: bool,
    /// Whether the gene arose from a mutation.
    pub is_mutation: bool,
    /// Expression mode.
    pub expression: ExpressionType,
}

impl Gene {
    /// Creates an active, non-mutated gene named after its trait type.
    #[must_use]
    pub fn new(trait_type: TraitType, value: f32, dominance_strength: f32) -> Self {
        Self {
            trait_name: trait_type.canonical_name().to_string(),
            trait_type,
            value: Some(value),
            dominance_strength,
            is_active: true,
            is_mutation: false,
            expression: ExpressionType::default(),
        }
    }

    /// Value with unrolled genes reading as neutral.
    #[must_use]
    pub fn value_or_neutral(&self) -> f32 {
        self.value.unwrap_or(NEUTRAL_TRAIT_VALUE)
    }

    /// Checks the documented ranges of value and dominance.
    pub fn validate(&self) -> Result<()> {
        if let Some(v) = self.value {
            if !(0.0..=1.0).contains(&v) {
                return Err(DataError::validation(format!(
                    "gene '{}' value {} outside [0, 1]",
                    self.trait_name, v
                )));
            }
        }
        if !(0.0..=1.0).contains(&self.dominance_strength) {
            return Err(DataError::validation(format!(
                "gene '{}' dominance {} outside [0, 1]",
                self.trait_name, self.dominance_strength
            )));
        }
        Ok(())
    }
}

/// Kind of mutation recorded on a profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MutationKind {
    ValueShift,
    ExpressionChange,
    NewTrait,
}

/// A mutation event in a profile's history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Mutation {
    /// What the mutation changed.
    pub kind: MutationKind,
    /// Severity in [0, 1].
    pub severity: f32,
    /// Whether the mutation is detrimental.
    pub is_harmful: bool,
}

/// Complete genetic record of one creature.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneticProfile {
    /// Identity used for cache keys and prediction back-references.
    pub id: Uuid,
    /// Genes in declaration order.
    pub genes: Vec<Gene>,
    /// Mutation history.
    pub mutations: Vec<Mutation>,
    /// Breeding generation.
    pub generation: u32,
}

impl Default for GeneticProfile {
    fn default() -> Self {
        Self::new(0)
    }
}

impl GeneticProfile {
    /// Creates an empty profile with a fresh id.
    #[must_use]
    pub fn new(generation: u32) -> Self {
        Self {
            id: Uuid::new_v4(),
            genes: Vec::new(),
            mutations: Vec::new(),
            generation,
        }
    }

    /// Builder-style gene append.
    #[must_use]
    pub fn with_gene(mut self, gene: Gene) -> Self {
        self.genes.push(gene);
        self
    }

    /// Builder-style mutation append.
    #[must_use]
    pub fn with_mutation(mut self, mutation: Mutation) -> Self {
        self.mutations.push(mutation);
        self
    }

    /// First gene with the given trait name.
    #[must_use]
    pub fn gene(&self, trait_name: &str) -> Option<&Gene> {
        self.genes.iter().find(|g| g.trait_name == trait_name)
    }

    /// First gene encoding the given trait type.
    #[must_use]
    pub fn gene_of(&self, trait_type: TraitType) -> Option<&Gene> {
        self.genes.iter().find(|g| g.trait_type == trait_type)
    }

    /// Value of the given trait type, if the profile carries it.
    #[must_use]
    pub fn value_of(&self, trait_type: TraitType) -> Option<f32> {
        self.gene_of(trait_type).map(Gene::value_or_neutral)
    }

    /// Trait names in declaration order, duplicates removed.
    #[must_use]
    pub fn trait_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = Vec::with_capacity(self.genes.len());
        for gene in &self.genes {
            if !names.contains(&gene.trait_name.as_str()) {
                names.push(&gene.trait_name);
            }
        }
        names
    }

    /// Fraction of active genes that are not mutations.
    ///
    /// A profile with no active genes is considered pure.
    #[must_use]
    pub fn genetic_purity(&self) -> f32 {
        let active = self.genes.iter().filter(|g| g.is_active).count();
        if active == 0 {
            return 1.0;
        }
        let pure = self
            .genes
            .iter()
            .filter(|g| g.is_active && !g.is_mutation)
            .count();
        pure as f32 / active as f32
    }

    /// Sum of mutation severities.
    #[must_use]
    pub fn mutation_severity(&self) -> f32 {
        self.mutations.iter().map(|m| m.severity).sum()
    }

    /// Validates every gene and mutation.
    pub fn validate(&self) -> Result<()> {
        for gene in &self.genes {
            gene.validate()?;
        }
        for m in &self.mutations {
            if !(0.0..=1.0).contains(&m.severity) {
                return Err(DataError::validation(format!(
                    "mutation severity {} outside [0, 1]",
                    m.severity
                )));
            }
        }
        Ok(())
    }

    /// Serialize profile to hex string.
    #[must_use]
    pub fn to_hex(&self) -> String {
        let bytes = serde_json::to_vec(self).unwrap_or_default();
        hex::encode(bytes)
    }

    /// Deserialize profile from hex string.
    pub fn from_hex(hex_str: &str) -> Result<Self> {
        let bytes = hex::decode(hex_str)?;
        if bytes.is_empty() {
            return Err(DataError::Empty);
        }
        let profile: Self = serde_json::from_slice(&bytes)?;
        profile.validate()?;
        Ok(profile)
    }
}
