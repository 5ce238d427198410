use proptest::prelude::*;
use radix256::{is_sorted_keys, sort_keys, sort_keys_and_values, sort_pairs, QuantileSelector};

fn pairs_strategy() -> impl Strategy<Value = (Vec<u32>, Vec<u32>)> {
    // narrow key range to get plenty of duplicates
    prop::collection::vec(prop_oneof![0..16_u32, any::<u32>()], 0..512).prop_map(|keys| {
        let values = (0..keys.len() as u32).collect::<Vec<u32>>();
        (keys, values)
    })
}

proptest! {
    #[test]
    fn prop_sorted_permutation(keys in prop::collection::vec(any::<u32>(), 0..1024)) {
        let sorted = sort_keys(&keys).unwrap();
        let mut expected = keys.clone();
        expected.sort_unstable();
        prop_assert_eq!(sorted, expected);
    }

    #[test]
    fn prop_pairs_match_std_stable_sort((keys, values) in pairs_strategy()) {
        let (sorted_keys, sorted_values) = sort_pairs(&keys, &values).unwrap();

        let mut expected = keys.iter().copied().zip(values.iter().copied()).collect::<Vec<_>>();
        expected.sort_by_key(|(key, _)| *key);

        prop_assert!(is_sorted_keys(&sorted_keys));
        prop_assert_eq!(sorted_keys, expected.iter().map(|(k, _)| *k).collect::<Vec<_>>());
        prop_assert_eq!(sorted_values, expected.iter().map(|(_, v)| *v).collect::<Vec<_>>());
    }

    #[test]
    fn prop_idempotent((keys, values) in pairs_strategy()) {
        let (once_keys, once_values) = sort_pairs(&keys, &values).unwrap();
        let (twice_keys, twice_values) = sort_pairs(&once_keys, &once_values).unwrap();
        prop_assert_eq!(once_keys, twice_keys);
        prop_assert_eq!(once_values, twice_values);
    }

    #[test]
    fn prop_count_prefix_only(keys in prop::collection::vec(any::<u32>(), 1..256), cut in 0usize..256) {
        let count = cut.min(keys.len());
        let mut input_keys = keys.clone();
        let mut input_values = keys.clone();
        let mut output_keys = vec![0; keys.len()];
        let mut output_values = vec![0; keys.len()];

        let active = sort_keys_and_values(&mut input_keys, &mut input_values, &mut output_keys, &mut output_values, count).unwrap();

        let mut expected = keys[..count].to_vec();
        expected.sort_unstable();
        prop_assert_eq!(&active.pick(&input_keys, &output_keys)[..count], expected.as_slice());
        prop_assert_eq!(&active.pick(&input_values, &output_values)[..count], expected.as_slice());
    }

    #[test]
    fn prop_selection_is_upper_set(
        (keys, values) in pairs_strategy(),
        target in 0usize..600,
        stride in 1usize..50,
    ) {
        let selector = QuantileSelector::new(stride).unwrap();
        let mut keys_out = vec![0; keys.len()];
        let mut values_out = vec![0; keys.len()];

        let retained = selector.select(&keys, &values, &mut keys_out, &mut values_out, keys.len(), target).unwrap();

        prop_assert!(retained <= keys.len());
        if !keys.is_empty() {
            prop_assert!(retained > 0);
        }
        // survivors keep input order and carry their own values
        prop_assert!(values_out[..retained].windows(2).all(|w| w[0] < w[1]));
        for (key, value) in keys_out[..retained].iter().zip(&values_out[..retained]) {
            prop_assert_eq!(keys[*value as usize], *key);
        }
        // nothing dropped is larger than anything kept
        if let Some(min_kept) = keys_out[..retained].iter().min() {
            let dropped_above = keys.iter().filter(|k| *k >= min_kept).count();
            prop_assert_eq!(dropped_above, retained);
        }
    }
}
