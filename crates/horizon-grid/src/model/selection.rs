//! Row selection.
//!
//! [`SelectionSet`] holds dataset row indices in the order they were
//! selected. Indices always refer to the dataset, never to positions in the
//! filtered display.
//!
//! # Example
//!
//! ```
//! use horizon_grid::SelectionSet;
//!
//! let mut selection = SelectionSet::from_indices([4, 1]);
//! selection.toggle(1);
//! assert_eq!(selection.as_slice(), &[4]);
//!
//! // Rows 0 and 2 are deleted: row 4 becomes row 2.
//! selection.reconcile_after_delete(&[0, 2]);
//! assert_eq!(selection.as_slice(), &[2]);
//! ```

use std::collections::HashSet;

use serde::{Serialize, Serializer};

/// An ordered set of selected dataset row indices.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionSet {
    /// Selection order.
    indices: Vec<usize>,
    /// Membership lookup.
    members: HashSet<usize>,
}

impl SelectionSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a set from indices, dropping duplicates.
    pub fn from_indices(indices: impl IntoIterator<Item = usize>) -> Self {
        let mut set = Self::new();
        for index in indices {
            set.insert(index);
        }
        set
    }

    pub fn len(&self) -> usize {
        self.indices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    pub fn contains(&self, index: usize) -> bool {
        self.members.contains(&index)
    }

    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.indices.iter().copied()
    }

    pub fn as_slice(&self) -> &[usize] {
        &self.indices
    }

    /// Adds `index`. Returns `false` if it was already selected.
    pub fn insert(&mut self, index: usize) -> bool {
        if self.members.insert(index) {
            self.indices.push(index);
            true
        } else {
            false
        }
    }

    /// Removes `index`. Returns `false` if it was not selected.
    pub fn remove(&mut self, index: usize) -> bool {
        if self.members.remove(&index) {
            self.indices.retain(|&i| i != index);
            true
        } else {
            false
        }
    }

    /// Flips membership of `index`. Returns the new state.
    pub fn toggle(&mut self, index: usize) -> bool {
        if self.remove(index) {
            false
        } else {
            self.insert(index);
            true
        }
    }

    pub fn clear(&mut self) {
        self.indices.clear();
        self.members.clear();
    }

    /// Replaces the selection with `indices`.
    pub fn select_all(&mut self, indices: impl IntoIterator<Item = usize>) {
        *self = Self::from_indices(indices);
    }

    /// Drops deleted rows and shifts the survivors down by the number of
    /// deletions before them.
    pub fn reconcile_after_delete(&mut self, deleted: &[usize]) {
        let mut deleted = deleted.to_vec();
        deleted.sort_unstable();
        deleted.dedup();

        let survivors: Vec<usize> = self
            .indices
            .iter()
            .filter(|&&index| deleted.binary_search(&index).is_err())
            .map(|&index| index - deleted.partition_point(|&d| d < index))
            .collect();
        *self = Self::from_indices(survivors);
    }

    /// State of a "select all" header checkbox over the displayed rows.
    pub fn header_state(&self, displayed: impl IntoIterator<Item = usize>) -> HeaderCheckState {
        let mut total = 0;
        let mut selected = 0;
        for index in displayed {
            total += 1;
            if self.contains(index) {
                selected += 1;
            }
        }
        match selected {
            0 => HeaderCheckState::Unchecked,
            n if n == total => HeaderCheckState::Checked,
            _ => HeaderCheckState::Indeterminate,
        }
    }
}

impl Serialize for SelectionSet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.indices.serialize(serializer)
    }
}

/// Check state of the "select all" header checkbox.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum HeaderCheckState {
    Unchecked,
    Indeterminate,
    Checked,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_keeps_order_and_dedups() {
        let mut selection = SelectionSet::new();
        assert!(selection.insert(3));
        assert!(selection.insert(1));
        assert!(!selection.insert(3));
        assert_eq!(selection.as_slice(), &[3, 1]);
        assert!(selection.contains(1));
        assert!(!selection.contains(0));
    }

    #[test]
    fn test_toggle() {
        let mut selection = SelectionSet::new();
        assert!(selection.toggle(2));
        assert!(!selection.toggle(2));
        assert!(selection.is_empty());
    }

    #[test]
    fn test_reconcile_after_delete() {
        let mut selection = SelectionSet::from_indices([5, 0, 3, 7]);
        selection.reconcile_after_delete(&[3, 1, 3]);
        assert_eq!(selection.as_slice(), &[3, 0, 5]);
    }

    #[test]
    fn test_reconcile_everything_deleted() {
        let mut selection = SelectionSet::from_indices([0, 1]);
        selection.reconcile_after_delete(&[1, 0]);
        assert!(selection.is_empty());
    }

    #[test]
    fn test_header_state() {
        let selection = SelectionSet::from_indices([0, 2]);
        assert_eq!(selection.header_state([0, 2]), HeaderCheckState::Checked);
        assert_eq!(selection.header_state([0, 1, 2]), HeaderCheckState::Indeterminate);
        assert_eq!(selection.header_state([1]), HeaderCheckState::Unchecked);
        assert_eq!(SelectionSet::new().header_state([]), HeaderCheckState::Unchecked);
    }

    #[test]
    fn test_serializes_as_list() {
        let selection = SelectionSet::from_indices([2, 0]);
        assert_eq!(serde_json::to_string(&selection).unwrap(), "[2,0]");
    }
}
