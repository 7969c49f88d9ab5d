use proptest::prelude::*;
use range_facade::algorithm;
use range_facade::{Cursor, ForwardCounter, RandomAccessCounter, RandomAccessCursor, View};

proptest! {
    #[test]
    fn traversal_yields_exact_prefix(bound in 0i64..512) {
        let forward: Vec<i64> = ForwardCounter::new(bound).into_iter().collect();
        let random: Vec<i64> = RandomAccessCounter::new(bound).into_iter().collect();

        prop_assert_eq!(forward.len() as i64, bound);
        prop_assert!(forward.iter().copied().eq(0..bound), "values must be 0..bound in order");
        prop_assert_eq!(random, forward);
    }

    #[test]
    fn jump_by_distance_lands_on_target(
        bound in 0i64..1024,
        from in 0i64..1024,
        to in 0i64..1024,
    ) {
        let counter = RandomAccessCounter::new(bound);
        let from = from.min(bound);
        let to = to.min(bound);

        let mut a = counter.begin_cursor();
        a.advance(from);
        let mut b = counter.begin_cursor();
        b.advance(to);

        prop_assert_eq!(a.distance_to(&b), -b.distance_to(&a));
        a.advance(a.distance_to(&b));
        prop_assert!(a.equal(&b));
    }

    #[test]
    fn measured_size_matches_walk(bound in -16i64..512) {
        let walked = ForwardCounter::new(bound).into_iter().count();
        let ra = RandomAccessCounter::new(bound);
        prop_assert_eq!(ra.begin_cursor().distance_to(&ra.end_cursor()), bound.max(0));
        prop_assert_eq!(algorithm::size(&ra), walked);
        prop_assert_eq!(algorithm::size(&ForwardCounter::new(bound)), walked);
    }

    #[test]
    fn same_bound_same_output(bound in 0i64..256, skip in 0usize..256) {
        let mut first = ForwardCounter::new(bound).iter();
        let second = ForwardCounter::new(bound).iter();

        let skipped = first.nth(skip);
        let skip = i64::try_from(skip).expect("small skip");
        prop_assert_eq!(skipped, (skip < bound).then_some(skip));

        let rest: Vec<i64> = first.collect();
        prop_assert!(rest.iter().copied().eq((skip + 1).min(bound)..bound));

        let untouched: Vec<i64> = second.collect();
        prop_assert!(untouched.iter().copied().eq(0..bound));
    }

    #[test]
    fn checked_advance_never_escapes(bound in 0i64..64, steps in proptest::collection::vec(-80i64..80, 0..16)) {
        let counter = RandomAccessCounter::new(bound);
        let mut cursor = counter.begin_cursor();
        for n in steps {
            let before = cursor;
            match algorithm::advance(&counter, &mut cursor, n) {
                Ok(()) => prop_assert_eq!(cursor.position(), before.position() + n),
                Err(_) => prop_assert_eq!(cursor, before),
            }
            prop_assert!((0..=bound).contains(&cursor.position()));
        }
    }
}
