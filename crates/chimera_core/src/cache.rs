//! Bounded memo table for pair predictions.
//!
//! Eviction is by insertion order: once full, the entry inserted first goes,
//! however recently it was read. The cache does no locking of its own;
//! shared use needs an outer lock (see `GeneticsEngine`).

use chimera_data::BreedingPrediction;
use std::collections::{HashMap, VecDeque};
use uuid::Uuid;

/// Ordered `(parent1, parent2)` identity.
pub type PairKey = (Uuid, Uuid);

#[derive(Debug, Clone)]
pub struct PredictionCache {
    capacity: usize,
    entries: HashMap<PairKey, BreedingPrediction>,
    order: VecDeque<PairKey>,
    hits: u64,
    misses: u64,
}

impl Default for PredictionCache {
    fn default() -> Self {
        Self::new(100)
    }
}

impl PredictionCache {
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            entries: HashMap::with_capacity(capacity),
            order: VecDeque::with_capacity(capacity),
            hits: 0,
            misses: 0,
        }
    }

    /// Returns the cached prediction for `key`, computing and storing it on a miss.
    pub fn get_or_compute<F>(&mut self, key: PairKey, compute: F) -> BreedingPrediction
    where
        F: FnOnce() -> BreedingPrediction,
    {
        if let Some(hit) = self.entries.get(&key) {
            self.hits += 1;
            return hit.clone();
        }
        self.misses += 1;
        let prediction = compute();
        self.insert(key, prediction.clone());
        prediction
    }

    #[must_use]
    pub fn get(&self, key: &PairKey) -> Option<&BreedingPrediction> {
        self.entries.get(key)
    }

    /// Stores a prediction. Replacing an existing key keeps its original
    /// insertion position.
    pub fn insert(&mut self, key: PairKey, prediction: BreedingPrediction) {
        if self.capacity == 0 {
            return;
        }
        if self.entries.insert(key, prediction).is_some() {
            return;
        }
        self.order.push_back(key);
        while self.order.len() > self.capacity {
            if let Some(oldest) = self.order.pop_front() {
                self.entries.remove(&oldest);
                tracing::debug!(parent1 = %oldest.0, parent2 = %oldest.1, "Evicted cached prediction");
            }
        }
    }

    #[must_use]
    pub fn contains(&self, key: &PairKey) -> bool {
        self.entries.contains_key(key)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    #[must_use]
    pub fn hits(&self) -> u64 {
        self.hits
    }

    #[must_use]
    pub fn misses(&self) -> u64 {
        self.misses
    }

    pub fn clear(&mut self) {
        self.entries.clear();
        self.order.clear();
    }
}
