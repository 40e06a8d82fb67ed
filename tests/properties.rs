//! Property-based tests for the sequence operators.

use ironlinq::*;
use proptest::prelude::*;

fn small_vec() -> impl Strategy<Value = Vec<i32>> {
    prop::collection::vec(-50i32..50, 0..64)
}

// Strategy for a vector plus a count in 0..=len
fn vec_and_count() -> impl Strategy<Value = (Vec<i32>, isize)> {
    small_vec().prop_flat_map(|v| {
        let len = v.len() as isize;
        (Just(v), 0..=len)
    })
}

proptest! {
    /// Filter never grows the sequence, and everything kept satisfies the predicate.
    #[test]
    fn filter_is_a_subsequence(v in small_vec()) {
        let s = Sequence::from(v);
        let out = s.filter(|x| x % 3 == 0);
        prop_assert!(out.len() <= s.len());
        prop_assert!(out.all(|x| x % 3 == 0));
        prop_assert_eq!(out.len(), s.count(|x| x % 3 == 0));
    }

    #[test]
    fn filter_and_its_complement_cover_the_source(v in small_vec()) {
        let s = Sequence::from(v);
        let kept = s.filter(|x| x % 2 == 0).count(no_predicate());
        let dropped = s.filter(|x| x % 2 != 0).count(no_predicate());
        prop_assert_eq!(kept + dropped, s.len());
    }

    #[test]
    fn append_then_skip_yields_the_appended(v in small_vec(), x in any::<i32>()) {
        let s = Sequence::from(v);
        let len = s.len() as isize;
        prop_assert_eq!(s.append([x]).skip(len).into_vec(), vec![x]);
    }

    #[test]
    fn order_by_is_idempotent(v in small_vec()) {
        let s = Sequence::from(v);
        let once = s.order_by(|x| x.rem_euclid(7));
        prop_assert_eq!(once.order_by(|x| x.rem_euclid(7)), once.clone());
    }

    #[test]
    fn take_and_skip_partition((v, n) in vec_and_count()) {
        let s = Sequence::from(v);
        let joined = s.take(n).append(s.skip(n));
        prop_assert_eq!(joined, s);
    }

    #[test]
    fn take_last_and_skip_last_partition((v, n) in vec_and_count()) {
        let s = Sequence::from(v);
        let joined = s.skip_last(n).append(s.take_last(n));
        prop_assert_eq!(joined, s.clone());
        prop_assert_eq!(s.take_last(n).len() as isize, n);
    }

    #[test]
    fn out_of_range_counts_are_errors(v in small_vec(), extra in 1isize..10) {
        let s = Sequence::from(v);
        let over = s.len() as isize + extra;
        prop_assert!(s.try_take(over).is_err());
        prop_assert!(s.try_skip(-extra).is_err());
        prop_assert!(s.try_take_last(over).is_err());
        prop_assert!(s.try_skip_last(-extra).is_err());
    }

    #[test]
    fn reverse_is_an_involution(v in small_vec()) {
        let s = Sequence::from(v);
        prop_assert_eq!(s.reverse().reverse(), s);
    }

    #[test]
    fn order_by_sorts_stably(v in prop::collection::vec((0u8..4, any::<u16>()), 0..64)) {
        let s = Sequence::from(v.clone());
        let sorted = s.order_by(|p| p.0).into_vec();
        let mut expected = v;
        expected.sort_by_key(|p| p.0);
        prop_assert_eq!(sorted, expected);
    }

    #[test]
    fn order_by_descending_sorts_stably(v in prop::collection::vec((0u8..4, any::<u16>()), 0..64)) {
        let s = Sequence::from(v.clone());
        let sorted = s.order_by_descending(|p| p.0).into_vec();
        let mut expected = v;
        expected.sort_by(|a, b| b.0.cmp(&a.0));
        prop_assert_eq!(sorted, expected);
    }

    #[test]
    fn distinct_is_unique_and_idempotent(v in small_vec()) {
        let s = Sequence::from(v);
        let d = s.distinct();
        prop_assert_eq!(d.distinct(), d.clone());
        prop_assert_eq!(d.clone(), s.distinct_hashed());
        prop_assert!(s.all(|x| d.contains(x)));
    }

    #[test]
    fn group_sizes_cover_source(v in small_vec()) {
        let s = Sequence::from(v);
        let g = s.group_by(|x| x.rem_euclid(5), |&x| x);
        let total: usize = g.iter().map(|(_, items)| items.len()).sum();
        prop_assert_eq!(total, s.len());
        prop_assert!(g.iter().all(|(k, items)| items.iter().all(|x| x.rem_euclid(5) == *k)));
    }

    #[test]
    fn remove_range_respects_bounds(v in small_vec(), index in -3isize..70, count in -3isize..70) {
        let mut s = Sequence::from(v.clone());
        let len = v.len() as isize;
        let valid = index >= 0 && count >= 0 && index + count <= len;
        let res = s.remove_range(index, count);
        prop_assert_eq!(res.is_ok(), valid);
        if valid {
            prop_assert_eq!(s.len() as isize, len - count);
        } else {
            prop_assert_eq!(s.into_vec(), v);
        }
    }

    #[test]
    fn numeric_aggregates_match_iterators(v in small_vec()) {
        let s = Sequence::from(v.clone());
        let n = s.numbers();
        prop_assert_eq!(n.sum(|&x| i64::from(x)), v.iter().map(|&x| i64::from(x)).sum::<i64>());
        prop_assert_eq!(n.max(|&x| x), v.iter().copied().max());
        prop_assert_eq!(n.min(|&x| x), v.iter().copied().min());
    }
}

#[cfg(feature = "parallel")]
proptest! {
    #[test]
    fn select_par_matches_select(v in small_vec()) {
        let s = Sequence::from(v);
        prop_assert_eq!(s.select_par(|&x| x * 2 + 1), s.select(|&x| x * 2 + 1));
    }
}
