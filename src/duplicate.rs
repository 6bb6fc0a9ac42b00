use crate::grouper::group;
use ahash::AHashSet as HashSet;
use std::hash::Hash;

/// Returns true if any value occurs more than once in `items`.
///
/// Stops at the first repeat.
pub fn has_duplicate<T: Hash + Eq>(items: &[T]) -> bool {
    first_duplicate(items).is_some()
}

/// Returns the index of the first element whose value already appeared
/// earlier in `items`.
pub fn first_duplicate<T: Hash + Eq>(items: &[T]) -> Option<usize> {
    let mut seen = HashSet::with_capacity(items.len());
    items.iter().position(|item| !seen.insert(item))
}

/// Returns every value that occurs more than once, grouped with all its
/// occurrences, in order of first appearance.
pub fn duplicate_groups<T, I>(items: I) -> Vec<Vec<T>>
where
    T: Hash + Eq + Clone,
    I: IntoIterator<Item = T>,
{
    let mut groups = group(items, T::clone);
    groups.retain(|g| g.len() > 1);
    groups
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_has_duplicate() {
        assert!(has_duplicate(&[1, 2, 3, 1]));
        assert!(!has_duplicate(&[1, 2, 3]));
    }

    #[test]
    fn test_empty_and_single() {
        assert!(!has_duplicate::<u8>(&[]));
        assert!(!has_duplicate(&[42]));
        assert_eq!(first_duplicate::<u8>(&[]), None);
    }

    #[test]
    fn test_duplicate_at_end_of_large_input() {
        let mut items: Vec<u32> = (0..10_000).collect();
        items.push(1);
        assert!(has_duplicate(&items));
        assert_eq!(first_duplicate(&items), Some(10_000));
    }

    #[test]
    fn test_first_duplicate() {
        assert_eq!(first_duplicate(&["a", "b", "c", "b", "a"]), Some(3));
        assert_eq!(first_duplicate(&[7, 7]), Some(1));
    }

    #[test]
    fn test_duplicate_groups() {
        let groups = duplicate_groups(vec![3, 1, 3, 2, 1, 3]);
        assert_eq!(groups, vec![vec![3, 3, 3], vec![1, 1]]);
    }

    #[test]
    fn test_duplicate_groups_none() {
        assert!(duplicate_groups(vec!['x', 'y', 'z']).is_empty());
    }
}
