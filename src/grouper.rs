use ahash::AHashMap as HashMap;
use std::borrow::Borrow;
use std::collections::hash_map::Entry;
use std::fmt;
use std::hash::Hash;
use tracing::{debug, trace};

/// Partitions items into groups that share a canonical key.
///
/// Groups are kept in order of each key's first appearance, and items within
/// a group keep insertion order. The grouper never inspects items itself;
/// the caller supplies the key for every item (see [`KeyedGrouper`] for a
/// grouper that owns its key function).
#[derive(Debug, Clone)]
pub struct Grouper<K, T> {
    /// Canonical key -> position in `groups`
    index: HashMap<K, usize>,

    /// Groups in first-seen order
    groups: Vec<Vec<T>>,

    /// Number of items inserted
    length: usize,
}

impl<K: Hash + Eq, T> Grouper<K, T> {
    /// Creates an empty grouper.
    pub fn new() -> Self {
        Self {
            index: HashMap::new(),
            groups: Vec::new(),
            length: 0,
        }
    }

    /// Creates an empty grouper sized for roughly `capacity` distinct keys.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            index: HashMap::with_capacity(capacity),
            groups: Vec::with_capacity(capacity),
            length: 0,
        }
    }

    /// Inserts `item` under an already computed `key`.
    ///
    /// Opens a new group on the first occurrence of `key`, otherwise appends
    /// to the existing one. Returns the index of the group the item landed in.
    pub fn push_with_key(&mut self, key: K, item: T) -> usize {
        self.length += 1;

        match self.index.entry(key) {
            Entry::Occupied(entry) => {
                let group = *entry.get();
                self.groups[group].push(item);
                group
            }
            Entry::Vacant(entry) => {
                let group = self.groups.len();
                entry.insert(group);
                self.groups.push(vec![item]);
                trace!(group, "opened group");
                group
            }
        }
    }

    /// Returns the number of items inserted.
    pub fn len(&self) -> usize {
        self.length
    }

    /// Returns true if no items have been inserted.
    pub fn is_empty(&self) -> bool {
        self.length == 0
    }

    /// Returns the number of distinct keys seen.
    pub fn num_groups(&self) -> usize {
        self.groups.len()
    }

    /// Returns the group stored under `key`, if any item had that key.
    pub fn get<Q>(&self, key: &Q) -> Option<&[T]>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.index
            .get(key)
            .map(|&group| self.groups[group].as_slice())
    }

    /// Iterates over the groups in first-seen order.
    pub fn groups(&self) -> impl Iterator<Item = &[T]> + '_ {
        self.groups.iter().map(Vec::as_slice)
    }

    /// Consumes the grouper, returning the groups in first-seen order.
    pub fn into_groups(self) -> Vec<Vec<T>> {
        debug!(
            items = self.length,
            groups = self.groups.len(),
            "grouping complete"
        );
        self.groups
    }

    /// Returns statistics about the current partition.
    pub fn stats(&self) -> GroupingStats {
        let mut largest_group = 0;
        let mut singletons = 0;

        for group in &self.groups {
            largest_group = largest_group.max(group.len());
            if group.len() == 1 {
                singletons += 1;
            }
        }

        GroupingStats {
            items: self.length,
            groups: self.groups.len(),
            largest_group,
            singletons,
        }
    }
}

impl<K: Hash + Eq, T> Default for Grouper<K, T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Statistics about a partition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GroupingStats {
    /// Number of items grouped
    pub items: usize,
    /// Number of distinct canonical keys
    pub groups: usize,
    /// Size of the largest group
    pub largest_group: usize,
    /// Number of groups holding exactly one item
    pub singletons: usize,
}

impl GroupingStats {
    /// Returns the average number of items per group.
    pub fn mean_group_size(&self) -> f64 {
        if self.groups == 0 {
            0.0
        } else {
            self.items as f64 / self.groups as f64
        }
    }
}

/// A [`Grouper`] bundled with the function that derives each item's key.
///
/// `key_fn` must be pure and deterministic: if it returns different keys for
/// equal inputs, equivalent items end up in different groups.
pub struct KeyedGrouper<K, T, F> {
    grouper: Grouper<K, T>,
    key_fn: F,
}

impl<K, T, F> KeyedGrouper<K, T, F>
where
    K: Hash + Eq,
    F: FnMut(&T) -> K,
{
    /// Creates an empty grouper that derives keys with `key_fn`.
    pub fn new(key_fn: F) -> Self {
        Self {
            grouper: Grouper::new(),
            key_fn,
        }
    }

    /// Creates an empty grouper sized for roughly `capacity` distinct keys.
    pub fn with_capacity(capacity: usize, key_fn: F) -> Self {
        Self {
            grouper: Grouper::with_capacity(capacity),
            key_fn,
        }
    }

    /// Adds an item, returning the index of its group.
    pub fn push(&mut self, item: T) -> usize {
        let key = (self.key_fn)(&item);
        self.grouper.push_with_key(key, item)
    }

    /// Adds every item from `iter` in order.
    pub fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.push(item);
        }
    }

    /// Returns the underlying grouper.
    pub fn grouper(&self) -> &Grouper<K, T> {
        &self.grouper
    }

    /// Consumes the grouper, returning the groups in first-seen order.
    pub fn into_groups(self) -> Vec<Vec<T>> {
        self.grouper.into_groups()
    }
}

impl<K: fmt::Debug, T: fmt::Debug, F> fmt::Debug for KeyedGrouper<K, T, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeyedGrouper")
            .field("grouper", &self.grouper)
            .finish_non_exhaustive()
    }
}

/// Groups `items` by the canonical key `key_fn` derives from each of them.
///
/// Returns the groups in order of each key's first appearance, with items in
/// input order inside each group. Empty input yields no groups.
///
/// ```
/// use keygroup_rs::group;
///
/// let groups = group(vec![1, 2, 3, 4, 5, 6], |n| n % 3);
/// assert_eq!(groups, vec![vec![1, 4], vec![2, 5], vec![3, 6]]);
/// ```
pub fn group<T, K, F, I>(items: I, key_fn: F) -> Vec<Vec<T>>
where
    I: IntoIterator<Item = T>,
    K: Hash + Eq,
    F: FnMut(&T) -> K,
{
    let mut grouper = KeyedGrouper::new(key_fn);
    grouper.extend(items);
    grouper.into_groups()
}

/// Like [`group`], but with a fallible key function.
///
/// The first error stops the walk and is returned unchanged; no item after
/// the failing one is passed to `key_fn`.
pub fn try_group<T, K, E, F, I>(items: I, mut key_fn: F) -> Result<Vec<Vec<T>>, E>
where
    I: IntoIterator<Item = T>,
    K: Hash + Eq,
    F: FnMut(&T) -> Result<K, E>,
{
    let mut grouper = Grouper::new();

    for (position, item) in items.into_iter().enumerate() {
        let key = key_fn(&item).inspect_err(|_| debug!(position, "key function failed"))?;
        grouper.push_with_key(key, item);
    }

    Ok(grouper.into_groups())
}
