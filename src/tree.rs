use std::collections::BTreeSet;

/// Set-like operations shared by the ordered trees in this crate.
///
/// `insert` and `remove` report whether the tree changed; inserting a value
/// that is already present and removing a missing one are both no-ops.
pub trait TreeOps<T> {
    fn insert(&mut self, value: T) -> bool;
    fn contains(&self, value: &T) -> bool;
    fn remove(&mut self, value: &T) -> bool;
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<T: Ord> TreeOps<T> for BTreeSet<T> {
    fn insert(&mut self, value: T) -> bool {
        BTreeSet::insert(self, value)
    }

    fn contains(&self, value: &T) -> bool {
        BTreeSet::contains(self, value)
    }

    fn remove(&mut self, value: &T) -> bool {
        BTreeSet::remove(self, value)
    }

    fn len(&self) -> usize {
        BTreeSet::len(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fill<S: TreeOps<i32>>(tree: &mut S) {
        for i in [5, 3, 8, 3, 1] {
            tree.insert(i);
        }
    }

    #[test]
    fn btree_set_as_tree_ops() {
        let mut set = BTreeSet::new();
        assert!(TreeOps::is_empty(&set));
        fill(&mut set);
        assert_eq!(TreeOps::len(&set), 4);
        assert!(TreeOps::contains(&set, &8));
        assert!(TreeOps::remove(&mut set, &8));
        assert!(!TreeOps::remove(&mut set, &8));
        assert_eq!(TreeOps::len(&set), 3);
    }
}
