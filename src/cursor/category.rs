//! Capability tags
//!
//! A tag is a zero-sized type naming how far a cursor can move.
//! Tags are sealed: the set of capabilities is closed.

use std::fmt;

mod sealed {
    pub trait Sealed {}

    impl Sealed for super::Forward {}
    impl Sealed for super::RandomAccess {}
}

/// Capability level of a cursor, known at compile time
pub trait Category: sealed::Sealed + fmt::Debug + Copy + Send + Sync + 'static {
    /// Runtime mirror of the tag, for reporting
    const KIND: CategoryKind;
}

/// Single-pass, step-by-one traversal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Forward;

/// O(1) jumps in both directions and O(1) distance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct RandomAccess;

impl Category for Forward {
    const KIND: CategoryKind = CategoryKind::Forward;
}

impl Category for RandomAccess {
    const KIND: CategoryKind = CategoryKind::RandomAccess;
}

/// Value-level view of a [`Category`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CategoryKind {
    /// See [`Forward`]
    Forward,
    /// See [`RandomAccess`]
    RandomAccess,
}

impl CategoryKind {
    /// Whether jumps and distances are O(1)
    #[inline]
    pub fn is_random_access(self) -> bool {
        matches!(self, CategoryKind::RandomAccess)
    }
}

impl fmt::Display for CategoryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CategoryKind::Forward => write!(f, "forward"),
            CategoryKind::RandomAccess => write!(f, "random-access"),
        }
    }
}
