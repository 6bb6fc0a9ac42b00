//! # keygroup - Grouping by Canonical Key
//!
//! Partitions a sequence of items into equivalence classes: two items share a
//! group exactly when a caller-supplied normalization function maps them to
//! the same canonical key.
//!
//! The grouper guarantees:
//! 1. **Exact partition**: every input item lands in exactly one group
//! 2. **First-seen order**: groups are ordered by their key's first appearance,
//!    and items keep input order within a group
//!
//! Anagram grouping, duplicate detection and two-sum lookup are built on the
//! same hash-map-keyed-by-derived-value pattern.
//!
//! ## Example
//!
//! ```
//! use keygroup_rs::{group, sorted_chars};
//!
//! let groups = group(["eat", "tea", "tan", "ate", "nat", "bat"], |s| sorted_chars(s));
//! assert_eq!(groups, vec![vec!["eat", "tea", "ate"], vec!["tan", "nat"], vec!["bat"]]);
//! ```
//!
//! ## Performance
//!
//! - One hash-map operation per item, so O(n · cost(key_fn)) overall
//! - [`sorted_chars`] costs O(k log k) per string, [`FrequencyKey`] O(k)

mod anagram;
mod duplicate;
mod error;
mod grouper;
mod key;
mod two_sum;


pub use anagram::{group_anagrams, group_anagrams_counting, group_anagrams_in};
pub use duplicate::{duplicate_groups, first_duplicate, has_duplicate};
pub use error::{Error, Result};
pub use grouper::{group, try_group, Grouper, GroupingStats, KeyedGrouper};
pub use key::{sorted_chars, Alphabet, FrequencyKey};
pub use two_sum::{two_sum, Complement};
