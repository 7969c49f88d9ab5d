//! Static algorithm selection by capability tag
//!
//! [`CategoryStrategy`] has exactly one blanket impl per tag. A cursor gets
//! the forward strategy when its category is [`Forward`] and the jump-based
//! strategy when it implements [`RandomAccessCursor`]. The impls differ in
//! the trait's type parameter, so they never overlap.

use super::{Category, CategoryKind, Cursor, Forward, RandomAccess, RandomAccessCursor};

/// Movement primitives implemented once per capability tag
pub trait CategoryStrategy<Tag: Category>: Cursor {
    /// Number of forward steps from `self` to `to`
    ///
    /// `to` must be reachable from `self`.
    fn measure_by_tag(&self, to: &Self) -> i64;

    /// Move up to `n` steps forward without passing `limit`; returns steps taken
    fn forward_by_tag(&mut self, n: i64, limit: &Self) -> i64;

    /// Move up to `n` steps backward without passing `limit`
    ///
    /// `None` when the capability cannot move backward at all.
    fn backward_by_tag(&mut self, n: i64, limit: &Self) -> Option<i64>;

    /// Remaining length to `to` when it is known without walking
    fn len_by_tag(&self, to: &Self) -> Option<usize>;
}

impl<C> CategoryStrategy<Forward> for C
where
    C: Cursor<Category = Forward>,
{
    fn measure_by_tag(&self, to: &Self) -> i64 {
        let mut probe = *self;
        let mut steps = 0;
        while !probe.equal(to) {
            probe.next();
            steps += 1;
        }
        steps
    }

    fn forward_by_tag(&mut self, n: i64, limit: &Self) -> i64 {
        let mut moved = 0;
        while moved < n && !self.equal(limit) {
            self.next();
            moved += 1;
        }
        moved
    }

    fn backward_by_tag(&mut self, _n: i64, _limit: &Self) -> Option<i64> {
        None
    }

    fn len_by_tag(&self, _to: &Self) -> Option<usize> {
        None
    }
}

impl<C> CategoryStrategy<RandomAccess> for C
where
    C: RandomAccessCursor,
{
    #[inline]
    fn measure_by_tag(&self, to: &Self) -> i64 {
        self.distance_to(to)
    }

    fn forward_by_tag(&mut self, n: i64, limit: &Self) -> i64 {
        let room = self.distance_to(limit).max(0);
        let step = n.clamp(0, room);
        self.advance(step);
        step
    }

    fn backward_by_tag(&mut self, n: i64, limit: &Self) -> Option<i64> {
        let room = limit.distance_to(self).max(0);
        let step = n.clamp(0, room);
        self.advance(-step);
        Some(step)
    }

    #[inline]
    fn len_by_tag(&self, to: &Self) -> Option<usize> {
        Some(usize::try_from(self.distance_to(to)).unwrap_or(0))
    }
}

/// Any cursor whose own category has a strategy
///
/// This is the bound generic algorithms use; it resolves to the forward
/// or random-access strategy with no runtime branch.
pub trait Traverse: Cursor {
    /// Capability of this cursor type
    fn category() -> CategoryKind {
        <Self::Category as Category>::KIND
    }

    /// See [`CategoryStrategy::measure_by_tag`]
    fn measure(&self, to: &Self) -> i64;

    /// See [`CategoryStrategy::forward_by_tag`]
    fn forward_within(&mut self, n: i64, limit: &Self) -> i64;

    /// See [`CategoryStrategy::backward_by_tag`]
    fn backward_within(&mut self, n: i64, limit: &Self) -> Option<i64>;

    /// See [`CategoryStrategy::len_by_tag`]
    fn known_len(&self, to: &Self) -> Option<usize>;
}

impl<C> Traverse for C
where
    C: Cursor + CategoryStrategy<<C as Cursor>::Category>,
{
    #[inline]
    fn measure(&self, to: &Self) -> i64 {
        <C as CategoryStrategy<C::Category>>::measure_by_tag(self, to)
    }

    #[inline]
    fn forward_within(&mut self, n: i64, limit: &Self) -> i64 {
        <C as CategoryStrategy<C::Category>>::forward_by_tag(self, n, limit)
    }

    #[inline]
    fn backward_within(&mut self, n: i64, limit: &Self) -> Option<i64> {
        <C as CategoryStrategy<C::Category>>::backward_by_tag(self, n, limit)
    }

    #[inline]
    fn known_len(&self, to: &Self) -> Option<usize> {
        <C as CategoryStrategy<C::Category>>::len_by_tag(self, to)
    }
}
