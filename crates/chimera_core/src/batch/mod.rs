//! Population-scale engines.
//!
//! Every engine here maps index `i` of its inputs to index `i` of its output
//! and touches nothing else, so records are spread over Rayon workers with
//! no synchronization. Parallel input slices must have equal lengths; a
//! mismatch is a caller bug and panics.

pub mod blend;
pub mod fitness;
pub mod mating;

pub use blend::blend;
pub use fitness::evaluate;
pub use mating::compatibility;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Builds `len` outputs by calling `f` on every index.
pub(crate) fn map_indexed<T, F>(len: usize, f: F) -> Vec<T>
where
    T: Send,
    F: Fn(usize) -> T + Sync + Send,
{
    #[cfg(feature = "parallel")]
    {
        (0..len).into_par_iter().map(f).collect()
    }
    #[cfg(not(feature = "parallel"))]
    {
        (0..len).map(f).collect()
    }
}

#[track_caller]
pub(crate) fn assert_same_len(name: &str, expected: usize, actual: usize) {
    assert_eq!(
        expected, actual,
        "batch input '{name}' has {actual} records, expected {expected}"
    );
}
