//! Persistent multi-select set keyed by row identity.

use std::collections::BTreeSet;

/// Selected row ids, independent of what is currently visible.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionSet {
    ids: BTreeSet<u64>,
}

impl SelectionSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, id: u64) -> bool {
        self.ids.contains(&id)
    }

    pub fn insert(&mut self, id: u64) -> bool {
        self.ids.insert(id)
    }

    pub fn remove(&mut self, id: u64) -> bool {
        self.ids.remove(&id)
    }

    /// Flips membership of `id`. Returns the new membership.
    pub fn toggle(&mut self, id: u64) -> bool {
        if self.ids.remove(&id) {
            false
        } else {
            self.ids.insert(id);
            true
        }
    }

    /// True when every id in `ids` is selected. An empty input is never "all selected".
    pub fn contains_all(&self, ids: &[u64]) -> bool {
        !ids.is_empty() && ids.iter().all(|id| self.ids.contains(id))
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn clear(&mut self) {
        self.ids.clear();
    }

    /// Keeps only ids for which `keep` returns true.
    pub fn retain(&mut self, mut keep: impl FnMut(u64) -> bool) {
        self.ids.retain(|&id| keep(id));
    }

    /// Selected ids in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = u64> + '_ {
        self.ids.iter().copied()
    }
}

impl Extend<u64> for SelectionSet {
    fn extend<I: IntoIterator<Item = u64>>(&mut self, iter: I) {
        self.ids.extend(iter);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_flips_membership() {
        let mut set = SelectionSet::new();
        assert!(set.toggle(4));
        assert!(set.contains(4));
        assert!(!set.toggle(4));
        assert!(set.is_empty());
    }

    #[test]
    fn extend_is_a_union() {
        let mut set = SelectionSet::new();
        set.insert(2);
        set.extend([1, 2, 3]);
        assert_eq!(set.iter().collect::<Vec<_>>(), vec![1, 2, 3]);
    }

    #[test]
    fn contains_all_requires_non_empty_input() {
        let mut set = SelectionSet::new();
        set.insert(1);
        assert!(!set.contains_all(&[]));
        assert!(set.contains_all(&[1]));
        assert!(!set.contains_all(&[1, 2]));
    }
}
