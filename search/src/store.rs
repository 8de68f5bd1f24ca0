//! Arena storage for labels and their parent links.
//!
//! Ids are indices. Nothing is removed, so any id handed out stays valid
//! for the life of the store. Each search run owns a fresh store.

use emoa_kernel::cost::CostVector;
use emoa_kernel::graph::VertexId;

use crate::label::{Label, LabelId};

/// Capacity of the first allocation batch.
pub const INITIAL_BATCH: usize = 1024;

/// Largest allocation batch; growth is linear past this point.
pub const MAX_BATCH: usize = 4096;

/// Growable, id-indexed label arena.
#[derive(Debug)]
pub struct LabelStore {
    labels: Vec<Label>,
    parents: Vec<Option<LabelId>>,
    next_batch: usize,
}

impl LabelStore {
    /// Create an empty store. No memory is reserved until the first push.
    #[must_use]
    pub fn new() -> Self {
        Self {
            labels: Vec::new(),
            parents: Vec::new(),
            next_batch: INITIAL_BATCH,
        }
    }

    /// Store a new label and return its id.
    pub fn push(
        &mut self,
        vertex: VertexId,
        g: CostVector,
        f: CostVector,
        parent: Option<LabelId>,
    ) -> LabelId {
        if self.labels.len() == self.labels.capacity() {
            self.labels.reserve_exact(self.next_batch);
            self.parents.reserve_exact(self.next_batch);
            self.next_batch = (self.next_batch * 2).min(MAX_BATCH);
        }
        let id = self.labels.len();
        self.labels.push(Label { id, vertex, g, f });
        self.parents.push(parent);
        id
    }

    /// Label by id.
    #[must_use]
    pub fn get(&self, id: LabelId) -> Option<&Label> {
        self.labels.get(id)
    }

    /// Parent id, `None` for the root or an unknown id.
    #[must_use]
    pub fn parent(&self, id: LabelId) -> Option<LabelId> {
        self.parents.get(id).copied().flatten()
    }

    /// Vertex sequence from the root to `id`, in start-to-label order.
    ///
    /// Returns an empty path for an unknown id.
    #[must_use]
    pub fn path_to(&self, id: LabelId) -> Vec<VertexId> {
        let mut path = Vec::new();
        let mut current = self.get(id).map(|l| l.id);
        while let Some(lid) = current {
            path.push(self.labels[lid].vertex);
            current = self.parent(lid);
        }
        path.reverse();
        path
    }

    /// Number of labels created.
    #[must_use]
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    /// Whether no label has been created.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

impl Default for LabelStore {
    fn default() -> Self {
        Self::new()
    }
}
