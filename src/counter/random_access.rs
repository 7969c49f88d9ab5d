//! Random-access counter cursor
//!
//! Position arithmetic is a single integer add, so jumps and distances
//! are O(1).

use super::CounterCursor;
use crate::cursor::{RandomAccess, RandomAccessCursor};

impl RandomAccessCursor for CounterCursor<RandomAccess> {
    #[inline]
    fn prev(&mut self) {
        debug_assert!(self.pos > 0, "stepped before the first position");
        self.pos -= 1;
    }

    #[inline]
    fn advance(&mut self, n: i64) {
        self.pos += n;
    }

    #[inline]
    fn distance_to(&self, other: &Self) -> i64 {
        other.pos - self.pos
    }
}
