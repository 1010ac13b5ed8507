//! # Anagroup
//!
//! `anagroup` groups strings, byte arrays, and other byte-addressable data into
//! sets of mutual anagrams.
//!
//! Two words are anagrams when they contain the same bytes with the same
//! frequencies. The library derives a **signature** per word so that two words
//! share a signature iff they are anagrams, then buckets words by signature in
//! a single pass over the input.
//!
//! ## Key Features
//!
//! - **Two keying strategies**: A count-signature built from a 26-slot letter
//!   frequency table (one O(k) scan per word, no sorting), and a
//!   sorted-signature built by sorting the word's bytes (simpler, and total
//!   over arbitrary byte content). Both produce the same partition on
//!   lowercase input.
//! - **Zero-copy abstractions**: The [`WordAccessor`] trait allows grouping
//!   arbitrary data structures (e.g., Arrow arrays, `Vec<Vec<u8>>`) without
//!   copying the underlying data; results are groups of indices.
//! - **Owned convenience**: [`anagroup_owned`] and [`anagroup_sorted_owned`]
//!   resolve index groups back into clones of the input items.
//!
//! ## Usage
//!
//! ### Basic Usage
//!
//! For standard collections like `Vec<String>` or `Vec<&str>`, use
//! [`anagroup`] (index-based) or [`anagroup_owned`] (cloning).
//!
//! ```rust
//! use anagroup::anagroup_owned;
//!
//! let words = vec!["eat", "tea", "tan", "ate", "nat", "bat"];
//! let groups = anagroup_owned(&words)?;
//!
//! assert_eq!(groups, vec![
//!     vec!["eat", "tea", "ate"],
//!     vec!["tan", "nat"],
//!     vec!["bat"],
//! ]);
//! # Ok::<(), anagroup::GroupError>(())
//! ```
//!
//! ### Custom Types
//!
//! To group custom types or complex data structures without creating
//! intermediate strings, implement the [`WordAccessor`] trait.
//!
//! ```rust
//! use anagroup::{anagroup, WordAccessor};
//!
//! struct Entry {
//!     word: String,
//! }
//!
//! // Wrapper struct to avoid orphan rule violation (impl foreign trait on foreign type).
//! struct Entries(Vec<Entry>);
//!
//! impl WordAccessor for Entries {
//!     fn get_word(&self, index: usize) -> &[u8] {
//!         self.0[index].word.as_bytes()
//!     }
//!
//!     fn len(&self) -> usize {
//!         self.0.len()
//!     }
//! }
//!
//! let entries = Entries(vec![
//!     Entry { word: "listen".to_string() },
//!     Entry { word: "silent".to_string() },
//! ]);
//!
//! // Returns index groups: [[0, 1]]
//! let groups = anagroup(&entries)?;
//! assert_eq!(groups, vec![vec![0, 1]]);
//! # Ok::<(), anagroup::GroupError>(())
//! ```
//!
//! ## Out-of-Domain Input
//!
//! The count-signature path documents its domain as lowercase Latin letters
//! and fails fast with [`GroupError`] on anything else, reporting the word,
//! offset, and byte. The sorted-signature path ([`anagroup_sorted`]) is a
//! total function over arbitrary bytes; use it for mixed-case or non-ASCII
//! input.
//!
//! ## Performance Characteristics
//!
//! - **Time**: O(N·K) for the count-signature strategy, O(N·K log K) for the
//!   sorted-signature strategy (N words of length at most K).
//! - **Memory Overhead**: One signature allocation per distinct anagram class
//!   plus one `usize` per word; input data is never copied on the index-based
//!   paths.
//!
//! Both strategies are deterministic: groups appear in first-seen signature
//! order, and words within a group keep their input order.

pub mod algo;
pub mod core;
pub use algo::{
    anagroup, anagroup_owned, anagroup_sorted, anagroup_sorted_owned, count_signature,
    sorted_signature,
};
pub use core::{ALPHABET, GroupError, WordAccessor};

pub mod prelude {
    pub use crate::algo::{anagroup, anagroup_owned, anagroup_sorted, anagroup_sorted_owned};
    pub use crate::core::{GroupError, WordAccessor};
}
