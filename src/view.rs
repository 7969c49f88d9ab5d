//! Views: sequences described by a pair of boundary cursors
//!
//! A view stores no elements. It hands out a begin and an end cursor and
//! [`Iter`] walks the half-open range `[begin, end)` between them.
//! Once both cursors are captured the view itself is no longer needed.

use std::iter::FusedIterator;

use crate::cursor::{Category, CategoryKind, Cursor, RandomAccessCursor, Traverse};

/// Sequence exposed through boundary cursors
pub trait View {
    /// Cursor type handed out by this view
    type Cursor: Cursor;

    /// Cursor at the first element
    fn begin_cursor(&self) -> Self::Cursor;

    /// Cursor one past the last element
    fn end_cursor(&self) -> Self::Cursor;

    /// Lazy iterator over `[begin, end)`
    fn iter(&self) -> Iter<Self::Cursor> {
        Iter::new(self.begin_cursor(), self.end_cursor())
    }

    /// True when begin and end coincide
    fn is_empty(&self) -> bool {
        self.begin_cursor().equal(&self.end_cursor())
    }

    /// Capability of this view's cursor
    fn category(&self) -> CategoryKind {
        <<Self::Cursor as Cursor>::Category as Category>::KIND
    }
}

/// Every view supports a forward pass
pub trait ForwardView: View {}

impl<V: View> ForwardView for V {}

/// Views whose cursor can jump and measure in O(1)
pub trait RandomAccessView: View {}

impl<V> RandomAccessView for V
where
    V: View,
    V::Cursor: RandomAccessCursor,
{
}

/// Iterator over the range between two cursors
///
/// Forward cursors give a plain [`Iterator`]. Random-access cursors
/// additionally give [`DoubleEndedIterator`] and [`ExactSizeIterator`].
#[derive(Debug, Clone)]
pub struct Iter<C> {
    front: C,
    back: C,
}

impl<C: Cursor> Iter<C> {
    /// Iterate `[begin, end)`; `end` must be reachable from `begin`
    pub fn new(begin: C, end: C) -> Self {
        Self {
            front: begin,
            back: end,
        }
    }
}

impl<C: Traverse> Iterator for Iter<C> {
    type Item = C::Item;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        if self.front.equal(&self.back) {
            return None;
        }
        let value = self.front.read();
        self.front.next();
        Some(value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self.front.known_len(&self.back) {
            Some(len) => (len, Some(len)),
            None if self.front.equal(&self.back) => (0, Some(0)),
            None => (1, None),
        }
    }

    fn count(self) -> usize {
        usize::try_from(self.front.measure(&self.back)).unwrap_or(0)
    }

    fn nth(&mut self, n: usize) -> Option<Self::Item> {
        let wanted = i64::try_from(n).unwrap_or(i64::MAX);
        let moved = self.front.forward_within(wanted, &self.back);
        if moved < wanted {
            return None;
        }
        self.next()
    }
}

impl<C> DoubleEndedIterator for Iter<C>
where
    C: RandomAccessCursor + Traverse,
{
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.front.equal(&self.back) {
            return None;
        }
        self.back.prev();
        Some(self.back.read())
    }

    fn nth_back(&mut self, n: usize) -> Option<Self::Item> {
        let wanted = i64::try_from(n).unwrap_or(i64::MAX);
        let moved = self.back.backward_within(wanted, &self.front).unwrap_or(0);
        if moved < wanted {
            return None;
        }
        self.next_back()
    }
}

impl<C> ExactSizeIterator for Iter<C> where C: RandomAccessCursor + Traverse {}

impl<C: Traverse> FusedIterator for Iter<C> {}
