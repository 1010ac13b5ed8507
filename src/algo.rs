//! Core grouping algorithms (count-signature and sorted-signature).
//!
//! Both strategies follow the same structure: compute a signature per word such
//! that two words share a signature iff they are anagrams, then bucket words by
//! signature in a single pass.
//!
//! - **Count-signature**: a 26-slot letter frequency table encoded as
//!   `(letter, decimal count)` pairs. One O(k) scan per word, no sorting.
//! - **Sorted-signature**: the word's bytes in non-decreasing order. Simpler,
//!   O(k log k) per word, and total over arbitrary bytes.
//!
//! The main entry points are [`anagroup`] and [`anagroup_sorted`].

use crate::core::{ALPHABET, GroupError, WordAccessor};
use ahash::AHashMap;

/// Groups words by their count-signature, returning groups of indices.
///
/// This function does not copy the input words. It returns a `Vec<Vec<usize>>`
/// where each inner vector holds the indices of mutually anagrammatic words,
/// in input order. Groups appear in first-seen signature order. Every input
/// index lands in exactly one group.
///
/// The input collection must implement the [`WordAccessor`] trait, which
/// abstracts byte-slice access.
///
/// # Errors
///
/// Fails fast with [`GroupError::NonLowercaseByte`] if any word contains a
/// byte outside `b'a'..=b'z'`. Use [`anagroup_sorted`] for inputs outside
/// that domain.
///
/// # Examples
///
/// ```
/// use anagroup::anagroup;
///
/// let words = vec!["eat", "tea", "tan", "ate", "nat", "bat"];
/// let groups = anagroup(&words)?;
///
/// assert_eq!(groups, vec![vec![0, 1, 3], vec![2, 4], vec![5]]);
/// # Ok::<(), anagroup::GroupError>(())
/// ```
pub fn anagroup<T: WordAccessor + ?Sized>(provider: &T) -> Result<Vec<Vec<usize>>, GroupError> {
    let len = provider.len();
    let mut slots: AHashMap<Vec<u8>, usize> = AHashMap::with_capacity(len);
    let mut groups: Vec<Vec<usize>> = Vec::new();

    for index in 0..len {
        let counts = provider.letter_counts(index)?;
        let signature = count_signature(&counts);

        let slot = *slots.entry(signature).or_insert_with(|| {
            groups.push(Vec::new());
            groups.len() - 1
        });
        groups[slot].push(index);
    }

    Ok(groups)
}

/// Groups words by their sorted-signature, returning groups of indices.
///
/// Identical partitioning semantics to [`anagroup`], but the signature is the
/// word's bytes sorted into non-decreasing order. This variant is total over
/// arbitrary byte content (uppercase, digits, UTF-8, binary), at the cost of
/// an O(k log k) sort per word.
///
/// # Examples
///
/// ```
/// use anagroup::anagroup_sorted;
///
/// let words = vec!["Tea", "Eat", "aTe"];
/// let groups = anagroup_sorted(&words);
///
/// // "Tea" and "aTe" share bytes {T, a, e}; "Eat" does not.
/// assert_eq!(groups, vec![vec![0, 2], vec![1]]);
/// ```
pub fn anagroup_sorted<T: WordAccessor + ?Sized>(provider: &T) -> Vec<Vec<usize>> {
    let len = provider.len();
    let mut slots: AHashMap<Vec<u8>, usize> = AHashMap::with_capacity(len);
    let mut groups: Vec<Vec<usize>> = Vec::new();

    for index in 0..len {
        let signature = sorted_signature(provider.get_word(index));

        let slot = *slots.entry(signature).or_insert_with(|| {
            groups.push(Vec::new());
            groups.len() - 1
        });
        groups[slot].push(index);
    }

    groups
}

/// Groups a slice of owned items, cloning them into the result.
///
/// This is a convenience wrapper for [`anagroup`] which resolves the index
/// groups back into clones of the input items.
///
/// # Errors
///
/// Same domain as [`anagroup`]: fails on the first byte outside `b'a'..=b'z'`.
///
/// # Examples
///
/// ```
/// use anagroup::anagroup_owned;
///
/// let words = vec!["eat", "tea", "bat"];
/// let groups = anagroup_owned(&words)?;
///
/// assert_eq!(groups, vec![vec!["eat", "tea"], vec!["bat"]]);
/// # Ok::<(), anagroup::GroupError>(())
/// ```
pub fn anagroup_owned<T: AsRef<[u8]> + Clone>(data: &[T]) -> Result<Vec<Vec<T>>, GroupError> {
    Ok(resolve_groups(data, anagroup(data)?))
}

/// Groups a slice of owned items by sorted-signature, cloning them into the result.
///
/// Convenience wrapper for [`anagroup_sorted`]; total over arbitrary bytes.
pub fn anagroup_sorted_owned<T: AsRef<[u8]> + Clone>(data: &[T]) -> Vec<Vec<T>> {
    resolve_groups(data, anagroup_sorted(data))
}

fn resolve_groups<T: Clone>(data: &[T], groups: Vec<Vec<usize>>) -> Vec<Vec<T>> {
    groups
        .into_iter()
        .map(|group| group.into_iter().map(|i| data[i].clone()).collect())
        .collect()
}

/// Encodes a letter frequency table as a count-signature.
///
/// For each nonzero slot in letter order, appends the letter byte followed by
/// its count in ASCII decimal. Letter markers separate the decimal runs, so
/// distinct frequency tables can never encode to the same signature.
///
/// Deterministic: encoding the same table twice yields the same bytes.
///
/// # Examples
///
/// ```
/// use anagroup::count_signature;
///
/// let mut counts = [0u32; 26];
/// counts[0] = 1; // a
/// counts[19] = 2; // t
///
/// assert_eq!(count_signature(&counts), b"a1t2");
/// ```
pub fn count_signature(counts: &[u32; ALPHABET]) -> Vec<u8> {
    // Worst case per slot: 1 marker byte + 3 decimal digits (counts <= 100
    // in the documented domain).
    let mut signature = Vec::with_capacity(ALPHABET * 4);

    for (slot, &count) in counts.iter().enumerate() {
        if count > 0 {
            signature.push(b'a' + slot as u8);
            push_decimal(&mut signature, count);
        }
    }

    signature
}

/// Sorts a word's bytes into non-decreasing order.
///
/// Two words share a sorted-signature iff they are anagrams of each other.
///
/// # Examples
///
/// ```
/// use anagroup::sorted_signature;
///
/// assert_eq!(sorted_signature(b"banana"), b"aaabnn");
/// ```
pub fn sorted_signature(word: &[u8]) -> Vec<u8> {
    let mut signature = word.to_vec();
    signature.sort_unstable();
    signature
}

/// Appends `value` to `out` in ASCII decimal without intermediate allocation.
fn push_decimal(out: &mut Vec<u8>, mut value: u32) {
    let mut digits = [0u8; 10];
    let mut len = 0;

    loop {
        digits[len] = b'0' + (value % 10) as u8;
        value /= 10;
        len += 1;
        if value == 0 {
            break;
        }
    }

    out.extend(digits[..len].iter().rev());
}
