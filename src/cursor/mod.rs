//! Cursor contract
//!
//! A cursor is a detached position token: it knows where it is,
//! never what sequence produced it. Two levels of capability:
//!
//! - [`Cursor`]: read, step forward, compare (category [`Forward`])
//! - [`RandomAccessCursor`]: adds step back, jump by offset, distance
//!   (category [`RandomAccess`])
//!
//! Generic code never asks a cursor what it can do at runtime. The
//! associated [`Cursor::Category`] picks a [`CategoryStrategy`] at compile
//! time and [`Traverse`] exposes the chosen strategy.

mod category;
mod strategy;

pub use category::{Category, CategoryKind, Forward, RandomAccess};
pub use strategy::{CategoryStrategy, Traverse};

use std::fmt;

/// Minimal cursor: enough for one left-to-right pass
///
/// Reading or stepping at the end boundary is out of contract;
/// the cursor cannot detect it because it does not know the bound.
pub trait Cursor: Copy + fmt::Debug {
    /// Value produced at a position
    type Item;

    /// Capability tag
    type Category: Category;

    /// Value at the current position
    fn read(&self) -> Self::Item;

    /// Position equality
    fn equal(&self, other: &Self) -> bool;

    /// Move forward by one
    fn next(&mut self);
}

/// Cursor that can also move backward and jump in O(1)
///
/// Laws, for cursors `a`, `b` over the same sequence:
/// - `a.distance_to(&b) == -b.distance_to(&a)`
/// - after `a.advance(a.distance_to(&b))`, `a.equal(&b)`
pub trait RandomAccessCursor: Cursor<Category = RandomAccess> {
    /// Move back by one
    fn prev(&mut self);

    /// Move by `n` positions (negative moves backward)
    fn advance(&mut self, n: i64);

    /// Signed number of forward steps from `self` to `other`
    fn distance_to(&self, other: &Self) -> i64;
}
