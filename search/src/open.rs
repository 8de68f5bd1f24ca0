//! Open list: labels awaiting selection, lowest [`OpenKey`] first.
//!
//! Only keys are held here; label data stays in the label store.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use crate::label::{Label, LabelId, OpenKey};

/// Min-priority queue of label keys.
///
/// `BinaryHeap` is a max-heap, so keys are wrapped in `Reverse` to pop the
/// lexicographically smallest `f` first.
#[derive(Debug, Default)]
pub struct OpenList {
    heap: BinaryHeap<Reverse<OpenKey>>,
    high_water: usize,
}

impl OpenList {
    /// Create an empty open list.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a label for selection.
    pub fn push(&mut self, label: &Label) {
        self.heap.push(Reverse(OpenKey::from(label)));
        self.high_water = self.high_water.max(self.heap.len());
    }

    /// Remove and return the id of the best queued label.
    #[must_use]
    pub fn pop(&mut self) -> Option<LabelId> {
        self.heap.pop().map(|Reverse(key)| key.id)
    }

    /// Largest size reached since creation. Reported as `open_size_max`.
    #[must_use]
    pub fn high_water(&self) -> usize {
        self.high_water
    }
}
