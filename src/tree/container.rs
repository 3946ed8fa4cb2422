// Copyright (c) 2025 - Cowboy AI, Inc.
//! Ordered composite container
//!
//! Owns its children exclusively, so a derived `Clone` is a full deep copy:
//! every child is cloned through its own `Clone` impl, recursively.

use serde::{Deserialize, Serialize};
use std::slice;

use super::TreeNode;
use crate::errors::{InventoryError, InventoryResult};

/// Ordered sequence of owned child nodes
///
/// # Invariants
/// - Insertion order is preserved (and preserved by `clone`)
/// - No deduplication: equal items may appear more than once
/// - Each child belongs to exactly one container
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Container<T> {
    items: Vec<T>,
}

impl<T> Container<T> {
    /// Create an empty container
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Append a child at the end
    pub fn add(&mut self, item: T) {
        self.items.push(item);
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        self.items.get(index)
    }

    pub fn last(&self) -> Option<&T> {
        self.items.last()
    }

    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.items.iter()
    }

    pub fn iter_mut(&mut self) -> slice::IterMut<'_, T> {
        self.items.iter_mut()
    }
}

impl<T: PartialEq> Container<T> {
    /// Index of the first child equal to `probe`
    pub fn position(&self, probe: &T) -> Option<usize> {
        self.items.iter().position(|item| item == probe)
    }

    pub fn contains(&self, probe: &T) -> bool {
        self.position(probe).is_some()
    }
}

impl<T: PartialEq + TreeNode> Container<T> {
    /// First child equal to `probe`, in insertion order
    ///
    /// Returns the stored child, not a copy of it.
    pub fn find(&self, probe: &T) -> InventoryResult<&T> {
        self.items
            .iter()
            .find(|item| *item == probe)
            .ok_or_else(|| InventoryError::NotFound(probe.label()))
    }

    /// Mutable access to the first child equal to `probe`
    pub fn find_mut(&mut self, probe: &T) -> InventoryResult<&mut T> {
        self.items
            .iter_mut()
            .find(|item| *item == probe)
            .ok_or_else(|| InventoryError::NotFound(probe.label()))
    }
}

impl<T: TreeNode> Container<T> {
    /// Children as trait objects, ready for rendering
    pub fn nodes(&self) -> impl Iterator<Item = &dyn TreeNode> {
        self.items.iter().map(|item| item as &dyn TreeNode)
    }
}

impl<T> Default for Container<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> From<Vec<T>> for Container<T> {
    fn from(items: Vec<T>) -> Self {
        Self { items }
    }
}

impl<T> FromIterator<T> for Container<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

impl<'a, T> IntoIterator for &'a Container<T> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl<T> IntoIterator for Container<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}
