//! Core data structures for the Chimera genetics engine.

pub mod data;
pub mod error;

pub use data::environment::{Biome, Season};
pub use data::genetics::{
    ExpressionType, Gene, GeneticProfile, Mutation, MutationKind, TraitCategory, TraitType,
};
pub use data::prediction::{
    BreedingCompatibility, BreedingPrediction, DominantParent, TraitPrediction,
};
pub use data::vector::{TraitLane, TraitVector, TRAIT_LANES};
pub use error::{DataError, Result};
