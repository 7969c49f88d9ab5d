//! Forward surface of the counter cursor
//!
//! Shared by every capability: the tag only decides which further
//! traits the cursor implements.

use super::CounterCursor;
use crate::cursor::{Category, Cursor};

impl<K: Category> Cursor for CounterCursor<K> {
    type Item = i64;
    type Category = K;

    #[inline]
    fn read(&self) -> i64 {
        self.pos
    }

    #[inline]
    fn equal(&self, other: &Self) -> bool {
        self.pos == other.pos
    }

    #[inline]
    fn next(&mut self) {
        self.pos += 1;
    }
}
