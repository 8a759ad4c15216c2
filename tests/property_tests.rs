use proptest::prelude::*;
use sorthelper::prelude::*;
use sorthelper::{floats_are_sorted, ints_are_sorted, search_ints, search_strings};

fn sorted_copy<T: Ord + Clone>(v: &[T]) -> Vec<T> {
    let mut v = v.to_vec();
    v.sort();
    v
}

proptest! {
    #[test]
    fn sort_is_ordered_permutation(input in prop::collection::vec(any::<i32>(), 0..300)) {
        let mut data = input.clone();
        ints(&mut data);

        prop_assert!(ints_are_sorted(&data));
        prop_assert_eq!(data, sorted_copy(&input));
    }

    #[test]
    fn sort_is_idempotent(input in prop::collection::vec(any::<u16>(), 0..300)) {
        let mut once = input;
        sort(&mut once);
        let mut twice = once.clone();
        sort(&mut twice);

        prop_assert_eq!(once, twice);
    }

    #[test]
    fn stable_keeps_ties_in_input_order(
        keys in prop::collection::vec(0u8..6, 0..300),
    ) {
        // Tag every record with its input position.
        let mut data: Vec<(u8, usize)> = keys.iter().copied().zip(0..).collect();
        Sorter::new(&mut data).stable_by(|a, b| a.0 < b.0);

        for w in data.windows(2) {
            prop_assert!(w[0].0 <= w[1].0);
            if w[0].0 == w[1].0 {
                prop_assert!(w[0].1 < w[1].1);
            }
        }
    }

    #[test]
    fn multi_key_is_stable_composition(
        input in prop::collection::vec((0u8..4, 0u8..4, any::<u8>()), 0..200),
    ) {
        let k1 = |a: &(u8, u8, u8), b: &(u8, u8, u8)| a.0 < b.0;
        let k2 = |a: &(u8, u8, u8), b: &(u8, u8, u8)| a.1 < b.1;

        let mut chained = input.clone();
        MultiSorter::new(&mut chained).stable_by(&[&k1, &k2]).unwrap();

        let mut composed = input;
        Sorter::new(&mut composed).stable_by(k2);
        Sorter::new(&mut composed).stable_by(k1);

        prop_assert_eq!(chained, composed);
    }

    #[test]
    fn multi_key_unstable_orders_lexicographically(
        input in prop::collection::vec((0u8..4, 0u8..4), 0..200),
    ) {
        let k1 = |a: &(u8, u8), b: &(u8, u8)| a.0 < b.0;
        let k2 = |a: &(u8, u8), b: &(u8, u8)| a.1 < b.1;

        let mut data = input.clone();
        MultiSorter::new(&mut data).ordered_by(&[&k1, &k2]).unwrap();

        prop_assert_eq!(data, sorted_copy(&input));
    }

    #[test]
    fn nans_come_first(
        input in prop::collection::vec(
            prop_oneof![Just(f64::NAN), Just(f64::INFINITY), Just(f64::NEG_INFINITY), -1e6..1e6f64],
            0..200,
        ),
    ) {
        let mut data = input.clone();
        floats(&mut data);

        let nans = input.iter().filter(|x| x.is_nan()).count();
        prop_assert!(data[..nans].iter().all(|x| x.is_nan()));
        prop_assert!(data[nans..].windows(2).all(|w| w[0] <= w[1]));
        prop_assert!(floats_are_sorted(&data));
    }

    #[test]
    fn reverse_mirrors_sort(input in prop::collection::vec(any::<i64>(), 0..200)) {
        let mut ascending = input.clone();
        IntSlice::new(&mut ascending).sort();
        let mut descending = input;
        IntSlice::new(&mut descending).reverse();

        descending.reverse();
        prop_assert_eq!(ascending, descending);
    }

    #[test]
    fn search_returns_insertion_point(
        input in prop::collection::vec(-100i32..100, 0..200),
        x in -110i32..110,
    ) {
        let a = sorted_copy(&input);
        let i = search(&a, &x);

        prop_assert!(i <= a.len());
        prop_assert!(a[..i].iter().all(|e| *e < x));
        prop_assert!(a[i..].iter().all(|e| *e >= x));
        prop_assert_eq!(search_ints(&a, x), i);
    }

    #[test]
    fn search_strings_matches_generic(
        input in prop::collection::vec("[a-c]{0,3}", 0..50),
        x in "[a-c]{0,3}",
    ) {
        let a = sorted_copy(&input);
        prop_assert_eq!(search_strings(&a, &x), search(&a, &x));
    }
}
