//! Cycle detection for a single top-level comparison.

use std::any::TypeId;
use std::collections::HashSet;

/// Identity of a composite value: where it lives and what it is.
///
/// The type is part of the identity because a struct and its first member
/// share an address.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Identity {
    address: usize,
    type_id: TypeId,
}

impl Identity {
    pub fn new(address: usize, type_id: TypeId) -> Self {
        Self { address, type_id }
    }
}

/// Pairs of values whose comparison is in progress further up the call stack.
///
/// A pair found here is assumed equal, which stops the recursion on cyclic
/// graphs. Keyed by identity, never by value.
#[derive(Debug, Default)]
pub struct PendingComparisonSet {
    pairs: HashSet<(Identity, Identity)>,
}

impl PendingComparisonSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether `(left, right)` or `(right, left)` is in flight
    pub fn contains(&self, left: Identity, right: Identity) -> bool {
        self.pairs.contains(&(left, right)) || self.pairs.contains(&(right, left))
    }

    /// Returns false if the pair was already pending
    pub fn insert(&mut self, left: Identity, right: Identity) -> bool {
        self.pairs.insert((left, right))
    }

    pub fn remove(&mut self, left: Identity, right: Identity) -> bool {
        self.pairs.remove(&(left, right))
    }

    pub fn clear(&mut self) {
        self.pairs.clear();
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}
