//! Core data structures for the Chimera genetics engine.

pub mod environment;
pub mod genetics;
pub mod prediction;
pub mod vector;
