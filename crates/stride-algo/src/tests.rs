// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! Property tests across the algorithm families.

use crate::config::{AlgorithmConfig, ScratchPolicy};
use crate::copy::{reverse, unique};
use crate::heap::{is_heap, make_heap, sort_heap};
use crate::partition::{is_partitioned, partition};
use crate::search::{all_of, any_of, find_if};
use crate::set::merge;
use crate::sort::{is_sorted, sort, sort_with};
use crate::stable::{stable_partition_with, stable_sort_by_key_with};
use proptest::{
    arbitrary::any,
    collection::vec,
    proptest,
    test_runner::Config as ProptestConfig,
};
use rand::SeedableRng;
use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;

fn sorted_copy(values: &[i32]) -> Vec<i32> {
    let mut expected = values.to_vec();
    expected.sort();
    expected
}

fn in_place() -> AlgorithmConfig {
    AlgorithmConfig::builder().scratch(ScratchPolicy::Disabled).build()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn proptest_find_if_returns_first_match(values in vec(any::<i16>(), 0..64), needle in any::<i16>()) {
        let pos = find_if(&values, |x| *x >= needle);
        let expected = values.iter().position(|x| *x >= needle).unwrap_or(values.len());
        assert_eq!(pos.get(), expected);
    }

    #[test]
    fn proptest_all_of_is_not_any_of_negation(values in vec(0u8..8, 0..64), bound in 0u8..8) {
        assert_eq!(
            all_of(&values, |x| *x < bound),
            !any_of(&values, |x| !(*x < bound))
        );
    }

    #[test]
    fn proptest_sort_is_sorted_permutation(values in vec(any::<i32>(), 0..200), threshold in 1usize..40) {
        let config = AlgorithmConfig::builder().median_of_three_threshold(threshold).build();
        let mut v = values.clone();
        sort_with(&mut v, &config);
        assert!(is_sorted(&v));
        assert_eq!(v, sorted_copy(&values));
    }

    #[test]
    fn proptest_stable_sort_paths_agree(keys in vec(0u8..6, 0..150), run in 1usize..20) {
        let input: Vec<(u8, usize)> = keys.into_iter().enumerate().map(|(i, k)| (k, i)).collect();
        let buffered_config = AlgorithmConfig::builder().insertion_run_len(run).build();

        let mut buffered = input.clone();
        let mut fallback = input.clone();
        stable_sort_by_key_with(&mut buffered, &buffered_config, |p| p.0);
        stable_sort_by_key_with(&mut fallback, &in_place(), |p| p.0);

        let mut expected = input;
        expected.sort_by_key(|p| p.0);
        assert_eq!(&buffered, &expected);
        assert_eq!(&fallback, &expected);
    }

    #[test]
    fn proptest_reverse_twice_is_identity(values in vec(any::<i32>(), 0..64)) {
        let mut v = values.clone();
        reverse(&mut v);
        reverse(&mut v);
        assert_eq!(v, values);
    }

    #[test]
    fn proptest_unique_of_sorted_is_strictly_increasing(values in vec(0i32..20, 0..100)) {
        let mut v = values;
        sort(&mut v);
        let end = unique(&mut v).get();
        v.truncate(end);
        assert!(v.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn proptest_partition_invariant(values in vec(any::<i32>(), 0..100)) {
        let mut v = values.clone();
        let split = partition(&mut v, |x| x % 3 == 0).get();
        assert!(is_partitioned(&v, |x| x % 3 == 0));
        assert!(v[..split].iter().all(|x| x % 3 == 0));
        assert_eq!(sorted_copy(&v), sorted_copy(&values));
    }

    #[test]
    fn proptest_stable_partition_preserves_group_order(values in vec(any::<i32>(), 0..100)) {
        let expected: Vec<i32> = values
            .iter()
            .filter(|x| *x % 2 == 0)
            .chain(values.iter().filter(|x| *x % 2 != 0))
            .copied()
            .collect();
        for config in [AlgorithmConfig::default(), in_place()] {
            let mut v = values.clone();
            let split = stable_partition_with(&mut v, &config, |x| x % 2 == 0).get();
            assert_eq!(&v, &expected);
            assert_eq!(split, values.iter().filter(|x| *x % 2 == 0).count());
        }
    }

    #[test]
    fn proptest_heap_sort(values in vec(any::<i32>(), 0..200)) {
        let mut v = values.clone();
        make_heap(&mut v);
        assert!(is_heap(&v));
        sort_heap(&mut v);
        assert_eq!(v, sorted_copy(&values));
    }

    #[test]
    fn proptest_merge_is_sorted_multiset_union(
        a in vec(0i32..30, 0..50),
        b in vec(0i32..30, 0..50),
    ) {
        let (a, b) = (sorted_copy(&a), sorted_copy(&b));
        let mut out = Vec::new();
        merge(&a, &b, &mut out);
        let mut all: Vec<i32> = a.iter().chain(b.iter()).copied().collect();
        all.sort();
        assert_eq!(out, all);
    }
}

#[test]
fn test_fixed_examples() {
    let mut v = vec![5, 3, 1, 4, 1, 5, 9, 2, 6];
    sort(&mut v);
    assert_eq!(v, vec![1, 1, 2, 3, 4, 5, 5, 6, 9]);
}

#[test]
fn test_seeded_stable_paths_agree() {
    let mut rng = ChaCha8Rng::seed_from_u64(0x5712_1de);
    for round in 0..20 {
        let len = 50 + round * 37;
        let mut input: Vec<(u16, usize)> = (0..len).map(|i| ((i % 11) as u16, i)).collect();
        input.shuffle(&mut rng);

        let mut buffered = input.clone();
        let mut fallback = input.clone();
        stable_sort_by_key_with(&mut buffered, &AlgorithmConfig::default(), |p| p.0);
        stable_sort_by_key_with(&mut fallback, &in_place(), |p| p.0);
        assert_eq!(buffered, fallback, "round {}", round);
    }
}
