//! Search labels and the open-list ordering key.

use std::cmp::Ordering;

use emoa_kernel::cost::CostVector;
use emoa_kernel::graph::VertexId;

/// Label identifier: an index into the [`crate::store::LabelStore`].
///
/// Assigned monotonically from 0 within one search and never reused.
pub type LabelId = usize;

/// An immutable partial-path candidate.
///
/// `f = g + h(vertex)`. The parent link lives in the label store, not here.
#[derive(Debug, Clone, PartialEq)]
pub struct Label {
    pub id: LabelId,
    pub vertex: VertexId,
    /// Accumulated cost from the start vertex.
    pub g: CostVector,
    /// Estimated total cost through this label.
    pub f: CostVector,
}

/// The open-list ordering key: `f` lexicographically, then label id.
///
/// Lower is better. The id tie-break makes expansion order fully
/// deterministic for identical inputs.
#[derive(Debug, Clone, PartialEq)]
pub struct OpenKey {
    pub f: CostVector,
    pub id: LabelId,
}

impl Eq for OpenKey {}

impl PartialOrd for OpenKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for OpenKey {
    fn cmp(&self, other: &Self) -> Ordering {
        self.f.lex_cmp(&other.f).then(self.id.cmp(&other.id))
    }
}

impl From<&Label> for OpenKey {
    fn from(label: &Label) -> Self {
        Self {
            f: label.f.clone(),
            id: label.id,
        }
    }
}
