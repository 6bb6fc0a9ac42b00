use crate::error::Result;
use crate::grouper::{group, try_group};
use crate::key::{sorted_chars, Alphabet, FrequencyKey};

/// Groups anagrams by their sorted characters.
///
/// Works for any text. Groups come out in order of first appearance.
///
/// ```
/// use keygroup_rs::group_anagrams;
///
/// let groups = group_anagrams(["eat", "tea", "tan", "ate", "nat", "bat"]);
/// assert_eq!(groups, vec![vec!["eat", "tea", "ate"], vec!["tan", "nat"], vec!["bat"]]);
/// ```
pub fn group_anagrams<S, I>(strs: I) -> Vec<Vec<S>>
where
    S: AsRef<str>,
    I: IntoIterator<Item = S>,
{
    group(strs, |s| sorted_chars(s.as_ref()))
}

/// Groups lowercase ASCII anagrams by letter counts.
///
/// Fails with [`Error::SymbolOutOfAlphabet`](crate::Error::SymbolOutOfAlphabet)
/// on any character outside `'a'..='z'`.
pub fn group_anagrams_counting<S, I>(strs: I) -> Result<Vec<Vec<S>>>
where
    S: AsRef<str>,
    I: IntoIterator<Item = S>,
{
    group_anagrams_in(strs, &Alphabet::LOWERCASE)
}

/// Groups anagrams by symbol counts over `alphabet`.
pub fn group_anagrams_in<S, I>(strs: I, alphabet: &Alphabet) -> Result<Vec<Vec<S>>>
where
    S: AsRef<str>,
    I: IntoIterator<Item = S>,
{
    try_group(strs, |s| FrequencyKey::new(s.as_ref(), alphabet))
}
