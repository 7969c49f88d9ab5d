//! Bounded counter: the integers `0..bound`, computed on demand
//!
//! Nothing is stored but the bound. Elements are positions: the value
//! at a cursor is the cursor's offset.
//!
//! The capability parameter picks the cursor surface:
//! - [`ForwardCounter`]: read, step, compare
//! - [`RandomAccessCounter`]: additionally step back, jump, distance
//!
//! A negative bound is accepted and behaves as an empty sequence.

mod forward;
mod random_access;

use std::fmt;
use std::marker::PhantomData;

use static_assertions::{assert_impl_all, assert_not_impl_any};
use tracing::debug;

use crate::cursor::{Category, Forward, RandomAccess, Traverse};
use crate::view::{ForwardView, Iter, RandomAccessView, View};
use crate::RangeError;

/// Lazy sequence `0, 1, ..., bound - 1`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(bound = ""))]
pub struct BoundedCounter<K = Forward> {
    bound: i64,
    #[cfg_attr(feature = "serde", serde(skip))]
    capability: PhantomData<K>,
}

/// Counter whose cursor only moves forward
pub type ForwardCounter = BoundedCounter<Forward>;

/// Counter whose cursor jumps and measures in O(1)
pub type RandomAccessCounter = BoundedCounter<RandomAccess>;

/// Position token handed out by a [`BoundedCounter`]
///
/// Only a counter can create one; equality is equality of position.
/// Serializable for reporting, never deserializable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(bound = ""))]
pub struct CounterCursor<K> {
    pos: i64,
    #[cfg_attr(feature = "serde", serde(skip))]
    capability: PhantomData<K>,
}

impl<K> CounterCursor<K> {
    #[inline]
    fn at(pos: i64) -> Self {
        Self {
            pos,
            capability: PhantomData,
        }
    }

    /// Offset into `[0, bound]`
    #[inline]
    pub fn position(&self) -> i64 {
        self.pos
    }
}

impl<K: Category> BoundedCounter<K> {
    /// Counter over `0..bound`; a negative bound yields an empty sequence
    pub fn new(bound: i64) -> Self {
        if bound < 0 {
            let capability = K::KIND;
            debug!(bound, %capability, "negative bound, sequence is empty");
        }
        Self {
            bound,
            capability: PhantomData,
        }
    }

    /// Counter over `0..bound`, rejecting a negative bound
    pub fn try_new(bound: i64) -> Result<Self, RangeError> {
        if bound < 0 {
            return Err(RangeError::NegativeBound(bound));
        }
        Ok(Self::new(bound))
    }

    /// Bound as given at construction
    #[inline]
    pub fn bound(&self) -> i64 {
        self.bound
    }

    /// Position of the end cursor
    #[inline]
    fn end_pos(&self) -> i64 {
        self.bound.max(0)
    }

    /// Whether `cursor` points at an element of this counter
    pub fn contains(&self, cursor: &CounterCursor<K>) -> bool {
        (0..self.end_pos()).contains(&cursor.pos)
    }

    /// Checked read: the value at `cursor`, or why it has none
    pub fn get(&self, cursor: &CounterCursor<K>) -> Result<i64, RangeError> {
        if !self.contains(cursor) {
            return Err(RangeError::OutOfRange {
                position: cursor.pos,
                bound: self.end_pos(),
            });
        }
        Ok(cursor.pos)
    }

    /// Same bound, different cursor capability
    pub fn with_capability<L: Category>(self) -> BoundedCounter<L> {
        BoundedCounter {
            bound: self.bound,
            capability: PhantomData,
        }
    }
}

impl<K> View for BoundedCounter<K>
where
    K: Category,
    CounterCursor<K>: Traverse,
{
    type Cursor = CounterCursor<K>;

    #[inline]
    fn begin_cursor(&self) -> CounterCursor<K> {
        CounterCursor::at(0)
    }

    #[inline]
    fn end_cursor(&self) -> CounterCursor<K> {
        CounterCursor::at(self.end_pos())
    }
}

impl<K> IntoIterator for BoundedCounter<K>
where
    K: Category,
    CounterCursor<K>: Traverse<Item = i64>,
{
    type Item = i64;
    type IntoIter = Iter<CounterCursor<K>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<K> IntoIterator for &BoundedCounter<K>
where
    K: Category,
    CounterCursor<K>: Traverse<Item = i64>,
{
    type Item = i64;
    type IntoIter = Iter<CounterCursor<K>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<K: Category> fmt::Display for BoundedCounter<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0..{} ({})", self.end_pos(), K::KIND)
    }
}

assert_impl_all!(ForwardCounter: ForwardView, Copy, Default, Send, Sync);
assert_impl_all!(RandomAccessCounter: RandomAccessView, Copy, Default, Send, Sync);
assert_not_impl_any!(ForwardCounter: RandomAccessView);
