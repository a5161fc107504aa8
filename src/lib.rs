//! # Chimera
//!
//! Genetic computation engine for a creature-breeding simulation.
//!
//! `model` re-exports the engine crates under one roof for the CLI and for
//! downstream collaborators; `sample` generates seeded demo populations.

pub mod model;
pub mod sample;
