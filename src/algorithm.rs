//! Generic algorithms over views
//!
//! Every function here compiles against any [`View`] whose cursor has a
//! strategy for its own category. The cost depends on that category:
//!
//! | algorithm       | forward      | random-access |
//! |-----------------|--------------|---------------|
//! | [`size`]        | O(n) steps   | O(1)          |
//! | [`advance`]     | O(n) steps   | O(1)          |
//! | [`lower_bound`] | O(n) steps, O(log n) reads | O(log n) |

use tracing::trace;

use crate::cursor::{Cursor, Traverse};
use crate::view::View;
use crate::RangeError;

/// Number of elements between `first` and `last`
///
/// `last` must be reachable from `first`.
pub fn distance<C: Traverse>(first: &C, last: &C) -> i64 {
    let steps = first.measure(last);
    let category = C::category();
    trace!(%category, steps, "measured range");
    steps
}

/// Number of elements in the view
pub fn size<V>(view: &V) -> usize
where
    V: View,
    V::Cursor: Traverse,
{
    usize::try_from(distance(&view.begin_cursor(), &view.end_cursor())).unwrap_or(0)
}

/// Move `cursor` by `n` positions, staying within `[begin, end]` of `view`
///
/// Negative `n` needs a random-access cursor. On error `cursor` is left
/// where it was.
pub fn advance<V>(view: &V, cursor: &mut V::Cursor, n: i64) -> Result<(), RangeError>
where
    V: View,
    V::Cursor: Traverse,
{
    let mut probe = *cursor;
    if n >= 0 {
        let moved = probe.forward_within(n, &view.end_cursor());
        if moved < n {
            return Err(RangeError::PastEnd {
                requested: n,
                available: moved,
            });
        }
    } else {
        let wanted = n.saturating_neg();
        match probe.backward_within(wanted, &view.begin_cursor()) {
            None => return Err(RangeError::BackwardOnForward { steps: n }),
            Some(moved) if moved < wanted => {
                return Err(RangeError::BeforeBegin {
                    requested: n,
                    available: moved,
                })
            }
            Some(_) => {}
        }
    }
    let category = <V::Cursor as Traverse>::category();
    trace!(%category, n, "advanced cursor");
    *cursor = probe;
    Ok(())
}

/// Element at index `n`, if any
pub fn nth<V>(view: &V, n: usize) -> Option<<V::Cursor as Cursor>::Item>
where
    V: View,
    V::Cursor: Traverse,
{
    view.iter().nth(n)
}

/// First cursor whose value is not less than `value`
///
/// The view must be sorted ascending. Returns the end cursor when every
/// element is less than `value`.
pub fn lower_bound<V>(view: &V, value: &<V::Cursor as Cursor>::Item) -> V::Cursor
where
    V: View,
    V::Cursor: Traverse,
    <V::Cursor as Cursor>::Item: PartialOrd,
{
    let last = view.end_cursor();
    let mut first = view.begin_cursor();
    let mut count = first.measure(&last);
    let mut probes = 0u32;

    while count > 0 {
        let step = count / 2;
        let mut mid = first;
        mid.forward_within(step, &last);
        probes += 1;
        if mid.read() < *value {
            mid.next();
            first = mid;
            count -= step + 1;
        } else {
            count = step;
        }
    }

    let category = <V::Cursor as Traverse>::category();
    trace!(%category, probes, "lower bound");
    first
}

/// Index of `value` in a sorted view, or the index where it would be inserted
///
/// Same contract as [`slice::binary_search`] for views without duplicates.
pub fn binary_search<V>(view: &V, value: &<V::Cursor as Cursor>::Item) -> Result<usize, usize>
where
    V: View,
    V::Cursor: Traverse,
    <V::Cursor as Cursor>::Item: PartialOrd,
{
    let found = lower_bound(view, value);
    let index = usize::try_from(view.begin_cursor().measure(&found)).unwrap_or(0);
    if !found.equal(&view.end_cursor()) && found.read() == *value {
        Ok(index)
    } else {
        Err(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::counter::{ForwardCounter, RandomAccessCounter};

    #[test]
    fn test_size() {
        assert_eq!(size(&ForwardCounter::new(4)), 4);
        assert_eq!(size(&RandomAccessCounter::new(4)), 4);
        assert_eq!(size(&RandomAccessCounter::new(-4)), 0);
    }

    #[test]
    fn test_advance_forward() {
        let counter = ForwardCounter::new(5);
        let mut cursor = counter.begin_cursor();
        advance(&counter, &mut cursor, 3).expect("within range");
        assert_eq!(cursor.read(), 3);
        advance(&counter, &mut cursor, 2).expect("reaching end is allowed");
        assert!(cursor.equal(&counter.end_cursor()));
    }

    #[test]
    fn test_advance_forward_rejects_backward() {
        let counter = ForwardCounter::new(5);
        let mut cursor = counter.end_cursor();
        let err = advance(&counter, &mut cursor, -1).unwrap_err();
        assert!(matches!(err, RangeError::BackwardOnForward { steps: -1 }));
        assert!(cursor.equal(&counter.end_cursor()));
    }

    #[test]
    fn test_advance_past_end_leaves_cursor() {
        let counter = RandomAccessCounter::new(5);
        let mut cursor = counter.begin_cursor();
        advance(&counter, &mut cursor, 2).expect("within range");
        let err = advance(&counter, &mut cursor, 4).unwrap_err();
        assert!(matches!(
            err,
            RangeError::PastEnd {
                requested: 4,
                available: 3
            }
        ));
        assert_eq!(cursor.read(), 2);
    }

    #[test]
    fn test_advance_random_access_backward() {
        let counter = RandomAccessCounter::new(5);
        let mut cursor = counter.end_cursor();
        advance(&counter, &mut cursor, -5).expect("back to begin");
        assert!(cursor.equal(&counter.begin_cursor()));
        let err = advance(&counter, &mut cursor, -1).unwrap_err();
        assert!(matches!(
            err,
            RangeError::BeforeBegin {
                requested: -1,
                available: 0
            }
        ));
    }

    #[test]
    fn test_nth() {
        assert_eq!(nth(&ForwardCounter::new(4), 2), Some(2));
        assert_eq!(nth(&RandomAccessCounter::new(4), 4), None);
    }

    #[test]
    fn test_lower_bound() {
        let counter = RandomAccessCounter::new(10);
        assert_eq!(lower_bound(&counter, &0).position(), 0);
        assert_eq!(lower_bound(&counter, &7).position(), 7);
        assert_eq!(lower_bound(&counter, &-3).position(), 0);
        assert!(lower_bound(&counter, &10).equal(&counter.end_cursor()));

        let counter = ForwardCounter::new(10);
        assert_eq!(lower_bound(&counter, &7).position(), 7);
    }

    #[test]
    fn test_binary_search() {
        for bound in [0, 1, 5, 16] {
            let fwd = ForwardCounter::new(bound);
            let ra = RandomAccessCounter::new(bound);
            let slice: Vec<i64> = (0..bound).collect();
            for value in -2..bound + 2 {
                let expected = slice.binary_search(&value);
                assert_eq!(binary_search(&fwd, &value), expected);
                assert_eq!(binary_search(&ra, &value), expected);
            }
        }
    }
}
