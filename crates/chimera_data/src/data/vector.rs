use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// Number of lanes in a [`TraitVector`].
pub const TRAIT_LANES: usize = 4;

/// Canonical trait slot of a [`TraitVector`] lane.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TraitLane {
    Strength = 0,
    Agility = 1,
    Intelligence = 2,
    Vitality = 3,
}

impl TraitLane {
    pub const ALL: [TraitLane; TRAIT_LANES] = [
        TraitLane::Strength,
        TraitLane::Agility,
        TraitLane::Intelligence,
        TraitLane::Vitality,
    ];
}

/// Fixed-width trait record used on the population-scale path.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct TraitVector {
    pub lanes: [f32; TRAIT_LANES],
}

impl TraitVector {
    #[must_use]
    pub const fn new(strength: f32, agility: f32, intelligence: f32, vitality: f32) -> Self {
        Self {
            lanes: [strength, agility, intelligence, vitality],
        }
    }

    /// Vector with every lane set to `value`.
    #[must_use]
    pub const fn splat(value: f32) -> Self {
        Self {
            lanes: [value; TRAIT_LANES],
        }
    }
}

impl From<[f32; TRAIT_LANES]> for TraitVector {
    fn from(lanes: [f32; TRAIT_LANES]) -> Self {
        Self { lanes }
    }
}

impl Index<TraitLane> for TraitVector {
    type Output = f32;

    fn index(&self, lane: TraitLane) -> &f32 {
        &self.lanes[lane as usize]
    }
}

impl IndexMut<TraitLane> for TraitVector {
    fn index_mut(&mut self, lane: TraitLane) -> &mut f32 {
        &mut self.lanes[lane as usize]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lane_indexing_matches_constructor_order() {
        let mut v = TraitVector::new(0.1, 0.2, 0.3, 0.4);
        assert_eq!(v[TraitLane::Agility], 0.2);
        v[TraitLane::Vitality] = 0.9;
        assert_eq!(v.lanes, [0.1, 0.2, 0.3, 0.9]);
    }
}
