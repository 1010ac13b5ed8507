//! Core traits and types for Anagroup.
//!
//! This module defines:
//! - [`WordAccessor`]: The main trait users implement to group their custom types.
//! - [`GroupError`]: The error raised for bytes outside the lowercase domain.

use std::collections::VecDeque;
use thiserror::Error;

/// Number of letters in the lowercase Latin alphabet.
pub const ALPHABET: usize = 26;

/// Error raised when a word contains a byte outside `b'a'..=b'z'`.
///
/// Only the count-signature path ([`anagroup`](crate::algo::anagroup)) raises
/// this; the sorted-signature path accepts arbitrary bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GroupError {
    /// A word contained a byte outside the lowercase Latin alphabet.
    #[error("word {word} contains non-lowercase byte {byte:#04x} at offset {offset}")]
    NonLowercaseByte {
        /// Index of the offending word in the input collection.
        word: usize,
        /// Byte offset of the offending byte within the word.
        offset: usize,
        /// The offending byte.
        byte: u8,
    },
}

/// A trait for accessing word data from a collection without copying.
///
/// This trait allows `anagroup` to group any collection where elements can be
/// represented as byte slices (e.g., `Vec<String>`, `Vec<Vec<u8>>`, or custom
/// flat-storage layouts like Arrow arrays).
///
/// # Examples
///
/// Implementing for a custom struct:
///
/// ```
/// use anagroup::core::WordAccessor;
///
/// struct MyCollection {
///     data: Vec<String>,
/// }
///
/// impl WordAccessor for MyCollection {
///     fn get_word(&self, index: usize) -> &[u8] {
///         self.data[index].as_bytes()
///     }
///
///     fn len(&self) -> usize {
///         self.data.len()
///     }
/// }
/// ```
pub trait WordAccessor {
    /// Returns a byte slice representing the word at the given index.
    fn get_word(&self, index: usize) -> &[u8];

    /// Returns the number of words in the collection.
    fn len(&self) -> usize;

    /// Returns `true` if the collection is empty.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Scans the word at `index` once into a 26-slot letter frequency table.
    ///
    /// Implementors with a faster path to the frequency profile (e.g. columnar
    /// stores that maintain per-row histograms) may override this.
    ///
    /// # Errors
    ///
    /// Returns [`GroupError::NonLowercaseByte`] for the first byte outside
    /// `b'a'..=b'z'`, with the word index and byte offset where it was found.
    #[inline]
    fn letter_counts(&self, index: usize) -> Result<[u32; ALPHABET], GroupError> {
        let word = self.get_word(index);
        let mut counts = [0u32; ALPHABET];

        for (offset, &byte) in word.iter().enumerate() {
            if !byte.is_ascii_lowercase() {
                return Err(GroupError::NonLowercaseByte {
                    word: index,
                    offset,
                    byte,
                });
            }
            counts[(byte - b'a') as usize] += 1;
        }

        Ok(counts)
    }
}

// Blanket implementation for indexable slices of byte-ref types.
impl<T: AsRef<[u8]>> WordAccessor for [T] {
    fn get_word(&self, index: usize) -> &[u8] {
        self[index].as_ref()
    }

    fn len(&self) -> usize {
        self.len()
    }
}

// Explicit Vec impl to improve ergonomics (avoiding .as_slice()).
impl<T: AsRef<[u8]>> WordAccessor for Vec<T> {
    fn get_word(&self, index: usize) -> &[u8] {
        self[index].as_ref()
    }

    fn len(&self) -> usize {
        self.len()
    }
}

// Implementation for VecDeque.
// Provides O(1) random access, so it is suitable for Anagroup.
impl<T: AsRef<[u8]>> WordAccessor for VecDeque<T> {
    fn get_word(&self, index: usize) -> &[u8] {
        self[index].as_ref()
    }

    fn len(&self) -> usize {
        self.len()
    }
}
