use anagroup::prelude::*;
use rand::Rng;
use std::time::Instant;

#[test]
fn test_group_10k_at_length_bound() {
    // Documented bounds: up to 10_000 words of up to 100 lowercase letters.
    let count = 10_000;
    println!("Generating {} random words...", count);

    let mut rng = rand::rng();
    let mut input: Vec<Vec<u8>> = Vec::with_capacity(count);

    for _ in 0..count {
        let len = rng.random_range(0..=100);
        let word: Vec<u8> = (0..len).map(|_| rng.random_range(b'a'..=b'z')).collect();
        input.push(word);
    }

    println!("Grouping {} words...", count);
    let start = Instant::now();
    let groups = anagroup(&input).unwrap();
    let duration = start.elapsed();
    println!("Grouped {} words in {:?}", count, duration);

    // Partition invariant: every index exactly once.
    let total: usize = groups.iter().map(|g| g.len()).sum();
    assert_eq!(total, count);

    // Every word in a group is an anagram of the group's first word.
    for group in &groups {
        let mut anchor = input[group[0]].clone();
        anchor.sort_unstable();
        for &i in &group[1..] {
            let mut word = input[i].clone();
            word.sort_unstable();
            assert_eq!(word, anchor, "non-anagram in group at index {}", i);
        }
    }
}

#[test]
fn test_many_anagram_classes() {
    // Short permutation-heavy words produce many small classes.
    let mut rng = rand::rng();
    let count = 10_000;

    let input: Vec<Vec<u8>> = (0..count)
        .map(|_| {
            let len = rng.random_range(1..5);
            (0..len).map(|_| rng.random_range(b'a'..=b'f')).collect()
        })
        .collect();

    let by_counts = anagroup(&input).unwrap();
    let by_sorting = anagroup_sorted(&input);

    // The strategies must agree on the number of classes and their sizes.
    let mut sizes_a: Vec<usize> = by_counts.iter().map(|g| g.len()).collect();
    let mut sizes_b: Vec<usize> = by_sorting.iter().map(|g| g.len()).collect();
    sizes_a.sort_unstable();
    sizes_b.sort_unstable();
    assert_eq!(sizes_a, sizes_b);
}
