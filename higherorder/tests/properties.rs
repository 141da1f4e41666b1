use proptest::prelude::*;

// proptest's prelude exports its own `any`, so the quantifiers stay qualified
use higherorder::{filter, first, foldl, foldr, map, reverse, sort, Error, SequenceExt};

#[derive(Debug, Clone, PartialEq)]
struct Keyed {
    key: u8,
    position: usize,
}

fn keyed(keys: &[u8]) -> Vec<Keyed> {
    keys.iter()
        .enumerate()
        .map(|(position, key)| Keyed { key: *key, position })
        .collect()
}

proptest! {
    #[test]
    fn prop_map_preserves_length(values in prop::collection::vec(any::<i32>(), 0..100)) {
        prop_assert_eq!(map(|x| i64::from(*x), &values).len(), values.len());
    }

    #[test]
    fn prop_map_composition(values in prop::collection::vec(-1000i32..1000, 0..50)) {
        let f = |x: &i32| x * 3;
        let g = |y: &i32| y.to_string();
        let twice = map(g, &map(f, &values));
        let once = map(|x| g(&f(x)), &values);
        prop_assert_eq!(twice, once);
    }

    #[test]
    fn prop_filter_is_matching_subsequence(values in prop::collection::vec(any::<i16>(), 0..100)) {
        let is_even = |x: &i16| x % 2 == 0;
        let filtered = filter(is_even, &values);
        prop_assert!(filtered.iter().all(is_even));
        // every kept element can be found in order in the input
        let mut remaining = values.iter();
        for kept in &filtered {
            prop_assert!(remaining.any(|x| x == kept));
        }
        prop_assert_eq!(filtered.len(), values.iter().filter(|x| is_even(*x)).count());
    }

    #[test]
    fn prop_all_any_agree_with_first(values in prop::collection::vec(any::<i32>(), 0..50)) {
        let positive = |x: &i32| *x > 0;
        let found = first(positive, &values);
        prop_assert_eq!(higherorder::any(positive, &values), found.is_ok());
        prop_assert_eq!(
            higherorder::all(|x| !positive(x), &values),
            found == Err(Error::NotFound)
        );
    }

    #[test]
    fn prop_first_is_lowest_matching_index(values in prop::collection::vec(0u8..10, 0..50)) {
        let is_seven = |x: &u8| *x == 7;
        match values.iter().position(is_seven) {
            Some(index) => {
                prop_assert_eq!(first(is_seven, &values), Ok(values[index]));
            }
            None => {
                prop_assert_eq!(first(is_seven, &values), Err(Error::NotFound));
            }
        }
    }

    #[test]
    fn prop_foldl_foldr_agree_for_sum(values in prop::collection::vec(-1000i64..1000, 0..50)) {
        prop_assert_eq!(
            foldl(|acc, x| acc + x, 0, &values),
            foldr(|x, acc| x + acc, 0, &values)
        );
    }

    #[test]
    fn prop_foldr_is_foldl_of_reverse(values in prop::collection::vec(any::<u8>(), 0..30)) {
        let push_right = |x: &u8, mut acc: Vec<u8>| {
            acc.push(*x);
            acc
        };
        let push_left = |mut acc: Vec<u8>, x: &u8| {
            acc.push(*x);
            acc
        };
        let right = foldr(push_right, Vec::new(), &values);
        let left = foldl(push_left, Vec::new(), &reverse(&values));
        prop_assert_eq!(right, left);
    }

    #[test]
    fn prop_reverse_is_involution(values in prop::collection::vec(any::<i32>(), 0..100)) {
        let original = values.clone();
        prop_assert_eq!(reverse(&reverse(&values)), original.clone());
        prop_assert_eq!(values, original);
    }

    #[test]
    fn prop_sort_orders_and_keeps_input(values in prop::collection::vec(any::<i32>(), 0..100)) {
        let original = values.clone();
        let sorted = sort(|a, b| a < b, &values);
        prop_assert!(sorted.windows(2).all(|pair| pair[0] <= pair[1]));
        prop_assert_eq!(sorted.len(), values.len());
        prop_assert_eq!(values, original);
    }

    #[test]
    fn prop_sort_is_idempotent(values in prop::collection::vec(any::<i32>(), 0..100)) {
        let less = |a: &i32, b: &i32| a < b;
        let once = sort(less, &values);
        prop_assert_eq!(sort(less, &once), once);
    }

    #[test]
    fn prop_sort_is_stable(keys in prop::collection::vec(0u8..5, 0..60)) {
        let records = keyed(&keys);
        let sorted = records.sorted_by_less(|a, b| a.key < b.key);
        for pair in sorted.windows(2) {
            prop_assert!(pair[0].key <= pair[1].key);
            if pair[0].key == pair[1].key {
                prop_assert!(pair[0].position < pair[1].position);
            }
        }
    }
}

#[test]
fn test_empty_quantifiers() {
    let empty: [i32; 0] = [];
    assert!(higherorder::all(|_| false, &empty));
    assert!(!higherorder::any(|_| true, &empty));
}
