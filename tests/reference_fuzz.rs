use anagroup::prelude::*;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::BTreeMap;

/// Naive reference: bucket indices by sorted bytes, compare as set-of-sets.
fn reference_partition(input: &[Vec<u8>]) -> Vec<Vec<usize>> {
    let mut buckets: BTreeMap<Vec<u8>, Vec<usize>> = BTreeMap::new();
    for (i, word) in input.iter().enumerate() {
        let mut key = word.clone();
        key.sort_unstable();
        buckets.entry(key).or_default().push(i);
    }
    let mut groups: Vec<Vec<usize>> = buckets.into_values().collect();
    groups.sort();
    groups
}

fn canonical(mut groups: Vec<Vec<usize>>) -> Vec<Vec<usize>> {
    groups.sort();
    groups
}

fn random_lowercase_word(rng: &mut StdRng, max_len: usize) -> Vec<u8> {
    let len = rng.random_range(0..=max_len);
    (0..len).map(|_| rng.random_range(b'a'..=b'z')).collect()
}

#[test]
fn test_fuzz_against_reference() {
    let mut rng = StdRng::seed_from_u64(42);

    for _iter in 0..50 {
        let count = rng.random_range(0..500);
        // Short words over a narrow alphabet to force collisions.
        let input: Vec<Vec<u8>> = (0..count)
            .map(|_| {
                let len = rng.random_range(0..6);
                (0..len).map(|_| rng.random_range(b'a'..=b'd')).collect()
            })
            .collect();

        let expected = reference_partition(&input);

        let by_counts = canonical(anagroup(&input).unwrap());
        let by_sorting = canonical(anagroup_sorted(&input));

        assert_eq!(by_counts, expected);
        assert_eq!(by_sorting, expected);
    }
}

#[test]
fn test_fuzz_wide_alphabet() {
    let mut rng = StdRng::seed_from_u64(7);

    for _iter in 0..20 {
        let count = rng.random_range(0..1000);
        let input: Vec<Vec<u8>> = (0..count)
            .map(|_| random_lowercase_word(&mut rng, 20))
            .collect();

        let expected = reference_partition(&input);
        assert_eq!(canonical(anagroup(&input).unwrap()), expected);
    }
}

#[test]
fn test_fuzz_no_index_lost_or_duplicated() {
    let mut rng = StdRng::seed_from_u64(1234);

    for _iter in 0..20 {
        let count = rng.random_range(0..2000);
        let input: Vec<Vec<u8>> = (0..count)
            .map(|_| random_lowercase_word(&mut rng, 10))
            .collect();

        let groups = anagroup(&input).unwrap();

        let mut seen: Vec<usize> = groups.iter().flatten().copied().collect();
        seen.sort_unstable();
        let all: Vec<usize> = (0..count).collect();
        assert_eq!(seen, all);
    }
}
