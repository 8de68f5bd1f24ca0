//! Per-vertex non-dominated frontiers.
//!
//! A frontier answers one question: can a candidate cost through this vertex
//! still contribute a Pareto-optimal solution? It stores the non-dominated
//! set of registered costs and rejects anything weakly dominated by it.
//!
//! Two strategies implement [`Frontier`]:
//!
//! - [`LexFrontier`] drops the first objective before comparing. This is
//!   exact only when labels are registered in nondecreasing lexicographic
//!   `f` order, which the search loop guarantees by registering at pop time.
//!   For `k = 2` at most one entry survives.
//! - [`FullFrontier`] compares whole vectors and is valid in any order.

use std::fmt;

use serde::{Deserialize, Serialize};

use emoa_kernel::cost::CostVector;

use crate::label::{Label, LabelId};

/// A stored (possibly projected) cost and the label that produced it.
#[derive(Debug, Clone, PartialEq)]
pub struct FrontierEntry {
    pub key: CostVector,
    pub label: LabelId,
}

/// Dominance-pruning store for one vertex.
pub trait Frontier: fmt::Debug {
    /// True if `f` is weakly dominated by a stored entry.
    ///
    /// Adds one to `comparisons` per pairwise test performed.
    fn check(&self, f: &CostVector, comparisons: &mut u64) -> bool;

    /// Register `label`, evicting entries its cost weakly dominates.
    ///
    /// Returns `false` (and stores nothing) if an existing entry already
    /// weakly dominates the label, so equal costs keep the earlier label.
    fn update(&mut self, label: &Label) -> bool;

    /// Stored entries, in registration order.
    fn entries(&self) -> &[FrontierEntry];

    /// Number of stored entries.
    fn len(&self) -> usize {
        self.entries().len()
    }

    /// Whether nothing is stored.
    fn is_empty(&self) -> bool {
        self.entries().is_empty()
    }
}

/// Frontier strategy selector, fixed for the lifetime of an engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FrontierKind {
    /// Projected `(k-1)`-dimensional test.
    #[default]
    Lex,
    /// Full `k`-dimensional test.
    Full,
}

impl FrontierKind {
    /// Construct an empty frontier of this kind.
    #[must_use]
    pub fn build(self) -> Box<dyn Frontier> {
        match self {
            Self::Lex => Box::new(LexFrontier::default()),
            Self::Full => Box::new(FullFrontier::default()),
        }
    }
}

impl fmt::Display for FrontierKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Lex => f.write_str("lex"),
            Self::Full => f.write_str("full"),
        }
    }
}

impl std::str::FromStr for FrontierKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "lex" => Ok(Self::Lex),
            "full" => Ok(Self::Full),
            other => Err(format!("unknown frontier kind {other:?} (expected lex or full)")),
        }
    }
}

/// Pairwise non-dominated key set shared by both strategies.
#[derive(Debug, Default)]
struct NonDominatedSet {
    entries: Vec<FrontierEntry>,
}

impl NonDominatedSet {
    fn covers(&self, key: &CostVector, comparisons: &mut u64) -> bool {
        for e in &self.entries {
            *comparisons += 1;
            if e.key.weakly_dominates(key) {
                return true;
            }
        }
        false
    }

    fn insert(&mut self, key: CostVector, label: LabelId) -> bool {
        if self.entries.iter().any(|e| e.key.weakly_dominates(&key)) {
            return false;
        }
        self.entries.retain(|e| !key.weakly_dominates(&e.key));
        self.entries.push(FrontierEntry { key, label });
        true
    }
}

/// Frontier keyed on `f` without its first component.
#[derive(Debug, Default)]
pub struct LexFrontier {
    set: NonDominatedSet,
}

impl Frontier for LexFrontier {
    fn check(&self, f: &CostVector, comparisons: &mut u64) -> bool {
        self.set.covers(&f.project_out(0), comparisons)
    }

    fn update(&mut self, label: &Label) -> bool {
        self.set.insert(label.f.project_out(0), label.id)
    }

    fn entries(&self) -> &[FrontierEntry] {
        &self.set.entries
    }
}

/// Frontier keyed on the whole `f` vector.
#[derive(Debug, Default)]
pub struct FullFrontier {
    set: NonDominatedSet,
}

impl Frontier for FullFrontier {
    fn check(&self, f: &CostVector, comparisons: &mut u64) -> bool {
        self.set.covers(f, comparisons)
    }

    fn update(&mut self, label: &Label) -> bool {
        self.set.insert(label.f.clone(), label.id)
    }

    fn entries(&self) -> &[FrontierEntry] {
        &self.set.entries
    }
}
