//! Shared numeric primitives.
//!
//! Both the batch engines and the inheritance predictor go through these
//! helpers, so clamping and dominance behave identically on both paths.

use chimera_data::{DominantParent, TraitVector, TRAIT_LANES};
use rand::Rng;

/// Clamps a trait value or score to [0, 1].
#[inline]
#[must_use]
pub fn clamp_unit(value: f32) -> f32 {
    value.clamp(0.0, 1.0)
}

/// Linear interpolation from `a` (t = 0) to `b` (t = 1).
#[inline]
#[must_use]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Derives an independent stream seed for one record of a batch.
#[inline]
#[must_use]
pub fn mix_seed(seed: u64, index: u64) -> u64 {
    let mut s = seed.wrapping_add(index).wrapping_mul(0x517CC1B727220A95);
    s ^= s >> 32;
    s = s.wrapping_mul(0x517CC1B727220A95);
    s ^ index.rotate_left(17)
}

/// Folds a 128-bit id into a seed.
#[inline]
#[must_use]
pub fn mix_id(seed: u64, id: u128) -> u64 {
    let mut s = seed.wrapping_mul(0x517CC1B727220A95);
    s ^= (id >> 64) as u64;
    s = s.wrapping_mul(0x517CC1B727220A95);
    s ^ id as u64
}

/// Uniform draw from `[-amplitude, amplitude]`.
#[inline]
pub fn symmetric_noise<R: Rng>(rng: &mut R, amplitude: f32) -> f32 {
    if amplitude <= 0.0 {
        0.0
    } else {
        rng.gen_range(-amplitude..=amplitude)
    }
}

/// Outcome of resolving two parents' alleles for one trait.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DominanceOutcome {
    /// Blended value before noise and clamping.
    pub value: f32,
    pub dominant_parent: DominantParent,
}

/// Resolves a trait from two parents.
///
/// A dominance difference strictly above `threshold` is clear dominance and
/// weights the dominant value by `dominant_weight`; otherwise the values are
/// averaged (co-dominance).
#[must_use]
pub fn resolve_dominance(
    value1: f32,
    dominance1: f32,
    value2: f32,
    dominance2: f32,
    threshold: f32,
    dominant_weight: f32,
) -> DominanceOutcome {
    if (dominance1 - dominance2).abs() > threshold {
        let (dominant, recessive, parent) = if dominance1 > dominance2 {
            (value1, value2, DominantParent::First)
        } else {
            (value2, value1, DominantParent::Second)
        };
        DominanceOutcome {
            value: lerp(recessive, dominant, dominant_weight),
            dominant_parent: parent,
        }
    } else {
        DominanceOutcome {
            value: lerp(value1, value2, 0.5),
            dominant_parent: DominantParent::Neither,
        }
    }
}

/// Dominance ratio of each parent. Two zero dominances split evenly.
#[must_use]
pub fn contribution_split(dominance1: f32, dominance2: f32) -> (f32, f32) {
    let total = dominance1 + dominance2;
    if total <= f32::EPSILON {
        return (0.5, 0.5);
    }
    let first = dominance1 / total;
    (first, 1.0 - first)
}

/// Arithmetic mean that reads an empty input as `default`.
#[must_use]
pub fn mean_or(values: impl IntoIterator<Item = f32>, default: f32) -> f32 {
    let mut sum = 0.0;
    let mut count = 0usize;
    for v in values {
        sum += v;
        count += 1;
    }
    if count == 0 {
        default
    } else {
        sum / count as f32
    }
}

/// Per-lane operations on [`TraitVector`].
pub trait TraitVectorLogic: Sized {
    /// Lane-wise interpolation towards `other`.
    #[must_use]
    fn lerp(&self, other: &Self, t: f32) -> Self;
    /// Every lane clamped to [0, 1].
    #[must_use]
    fn clamped(&self) -> Self;
    /// Adds `(u - 0.5) * width` to each lane with `u` in [0, 1), then clamps.
    fn perturb_with_rng<R: Rng>(&mut self, width: f32, rng: &mut R);
    /// Euclidean distance between two vectors.
    fn distance(&self, other: &Self) -> f32;
    /// `Σ self · environment · weights` over all lanes.
    fn weighted_alignment(&self, environment: &Self, weights: &Self) -> f32;
}

impl TraitVectorLogic for TraitVector {
    fn lerp(&self, other: &Self, t: f32) -> Self {
        let mut lanes = [0.0; TRAIT_LANES];
        for (i, lane) in lanes.iter_mut().enumerate() {
            *lane = lerp(self.lanes[i], other.lanes[i], t);
        }
        TraitVector { lanes }
    }

    fn clamped(&self) -> Self {
        TraitVector {
            lanes: self.lanes.map(clamp_unit),
        }
    }

    fn perturb_with_rng<R: Rng>(&mut self, width: f32, rng: &mut R) {
        for lane in &mut self.lanes {
            *lane = clamp_unit(*lane + (rng.gen::<f32>() - 0.5) * width);
        }
    }

    fn distance(&self, other: &Self) -> f32 {
        self.lanes
            .iter()
            .zip(other.lanes.iter())
            .map(|(a, b)| (a - b) * (a - b))
            .sum::<f32>()
            .sqrt()
    }

    fn weighted_alignment(&self, environment: &Self, weights: &Self) -> f32 {
        (0..TRAIT_LANES)
            .map(|i| self.lanes[i] * environment.lanes[i] * weights.lanes[i])
            .sum()
    }
}
