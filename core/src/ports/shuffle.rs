//! the randomness source the core consumes but never implements: the
//! original implementation hard-wires `math/rand.Shuffle`; here it is an
//! injectable port so tests can supply a deterministic ordering.

/// a permutation of `0..len`, supplied by the caller's randomness source.
pub trait Shuffler: Send + Sync {
    /// return a permutation of `0..len`.
    fn shuffle_indices(&self, len: usize) -> Vec<usize>;
}
