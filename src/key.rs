//! Canonicalization strategies for character sequences.
//!
//! Two strings are anagrams exactly when their canonical keys are equal:
//! - [`sorted_chars`] works for any text, O(k log k) per string
//! - [`FrequencyKey`] counts symbols of a small fixed [`Alphabet`], O(k) per string

use crate::error::{Error, Result};

const SURROGATE_START: u32 = 0xD800;

/// Returns the characters of `s` in sorted order.
///
/// ```
/// assert_eq!(keygroup_rs::sorted_chars("tea"), "aet");
/// ```
pub fn sorted_chars(s: &str) -> String {
    let mut chars: Vec<char> = s.chars().collect();
    chars.sort_unstable();
    chars.into_iter().collect()
}

/// A contiguous range of symbols, used as the domain of a [`FrequencyKey`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Alphabet {
    first: char,
    len: usize,
}

impl Alphabet {
    /// `'a'..='z'`
    pub const LOWERCASE: Alphabet = Alphabet { first: 'a', len: 26 };

    /// Creates an alphabet of `len` consecutive code points starting at `first`.
    ///
    /// Fails if `len` is zero, or if the range runs past `char::MAX` or into
    /// the surrogate block.
    pub fn new(first: char, len: usize) -> Result<Self> {
        let invalid = Error::InvalidAlphabet { first, len };
        let span = u32::try_from(len)
            .ok()
            .and_then(|len| len.checked_sub(1))
            .ok_or(invalid.clone())?;

        let start = first as u32;
        let end = start.checked_add(span).ok_or(invalid.clone())?;

        if char::from_u32(end).is_none() || (start < SURROGATE_START && end >= SURROGATE_START) {
            return Err(invalid);
        }

        Ok(Self { first, len })
    }

    /// Returns the first symbol.
    pub fn first(&self) -> char {
        self.first
    }

    /// Returns the number of symbols.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Always false; alphabets hold at least one symbol.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the slot of `symbol` in a frequency vector.
    pub fn index_of(&self, symbol: char) -> Option<usize> {
        let offset = (symbol as u32).checked_sub(self.first as u32)? as usize;
        (offset < self.len).then_some(offset)
    }

    pub fn contains(&self, symbol: char) -> bool {
        self.index_of(symbol).is_some()
    }
}

impl Default for Alphabet {
    fn default() -> Self {
        Self::LOWERCASE
    }
}

/// Per-symbol counts of a string over an [`Alphabet`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FrequencyKey(Box<[u64]>);

impl FrequencyKey {
    /// Counts the symbols of `s`.
    ///
    /// Fails on the first character that is not part of `alphabet`.
    pub fn new(s: &str, alphabet: &Alphabet) -> Result<Self> {
        let mut counts = vec![0u64; alphabet.len()].into_boxed_slice();

        for (position, symbol) in s.chars().enumerate() {
            let slot = alphabet
                .index_of(symbol)
                .ok_or(Error::SymbolOutOfAlphabet { symbol, position })?;
            counts[slot] += 1;
        }

        Ok(Self(counts))
    }

    /// Counts are `u64`, so no string that fits in memory can overflow a slot.
    pub fn counts(&self) -> &[u64] {
        &self.0
    }

    /// Returns the number of symbols counted.
    pub fn total(&self) -> u64 {
        self.0.iter().sum()
    }
}
