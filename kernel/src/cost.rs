//! `CostVector`: fixed-dimension vector of non-negative real costs.
//!
//! Every edge cost, accumulated cost `g`, heuristic `h` and estimate `f` in a
//! run is a `CostVector` of the same dimension `k`.
//!
//! # Ordering
//!
//! Two orders are defined and they must not be confused:
//!
//! - **Dominance** ([`CostVector::dominates`], [`CostVector::weakly_dominates`]):
//!   the component-wise partial order used for Pareto pruning.
//! - **Lexicographic** ([`CostVector::lex_cmp`]): the total order used by the
//!   open list. Components are compared with `f64::total_cmp`, so the order is
//!   total even in the presence of infinities.

use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, Index};

use serde::{Deserialize, Serialize};

/// An ordered tuple of real-valued objective costs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CostVector(Vec<f64>);

impl CostVector {
    /// The zero vector of dimension `dims`.
    #[must_use]
    pub fn zeros(dims: usize) -> Self {
        Self(vec![0.0; dims])
    }

    /// A vector with every component set to `+inf`.
    #[must_use]
    pub fn infinite(dims: usize) -> Self {
        Self(vec![f64::INFINITY; dims])
    }

    /// Number of objectives.
    #[must_use]
    pub fn dims(&self) -> usize {
        self.0.len()
    }

    /// Component slice.
    #[must_use]
    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }

    /// True if any component is `+inf` (or NaN).
    #[must_use]
    pub fn has_infinite(&self) -> bool {
        self.0.iter().any(|c| !c.is_finite())
    }

    /// True if every component is finite and `>= 0`.
    #[must_use]
    pub fn is_valid_edge_cost(&self) -> bool {
        self.0.iter().all(|c| c.is_finite() && *c >= 0.0)
    }

    /// Drop component `dim`, returning a `(k-1)`-dimensional vector.
    ///
    /// Used by the lexicographic frontier, which leaves the open list's
    /// primary key out of its dominance test.
    #[must_use]
    pub fn project_out(&self, dim: usize) -> Self {
        Self(
            self.0
                .iter()
                .enumerate()
                .filter(|(i, _)| *i != dim)
                .map(|(_, c)| *c)
                .collect(),
        )
    }

    /// Pareto dominance: `self[i] <= other[i]` everywhere and strictly less
    /// somewhere. Equal vectors do not dominate each other.
    ///
    /// # Panics
    ///
    /// Debug builds assert equal dimensions.
    #[must_use]
    pub fn dominates(&self, other: &Self) -> bool {
        debug_assert_eq!(self.dims(), other.dims());
        let mut strict = false;
        for (a, b) in self.0.iter().zip(&other.0) {
            if a > b {
                return false;
            }
            if a < b {
                strict = true;
            }
        }
        strict
    }

    /// Weak dominance: `self[i] <= other[i]` for every component.
    ///
    /// Equal vectors weakly dominate each other; frontiers use this to keep a
    /// single representative per cost.
    #[must_use]
    pub fn weakly_dominates(&self, other: &Self) -> bool {
        debug_assert_eq!(self.dims(), other.dims());
        self.0.iter().zip(&other.0).all(|(a, b)| a <= b)
    }

    /// Lexicographic total order over components.
    #[must_use]
    pub fn lex_cmp(&self, other: &Self) -> Ordering {
        for (a, b) in self.0.iter().zip(&other.0) {
            match a.total_cmp(b) {
                Ordering::Equal => {}
                ord => return ord,
            }
        }
        self.dims().cmp(&other.dims())
    }
}

impl From<Vec<f64>> for CostVector {
    fn from(v: Vec<f64>) -> Self {
        Self(v)
    }
}

impl<const N: usize> From<[f64; N]> for CostVector {
    fn from(v: [f64; N]) -> Self {
        Self(v.to_vec())
    }
}

impl Index<usize> for CostVector {
    type Output = f64;

    fn index(&self, i: usize) -> &f64 {
        &self.0[i]
    }
}

impl Add<&CostVector> for &CostVector {
    type Output = CostVector;

    fn add(self, rhs: &CostVector) -> CostVector {
        debug_assert_eq!(self.dims(), rhs.dims());
        CostVector(self.0.iter().zip(&rhs.0).map(|(a, b)| a + b).collect())
    }
}

impl fmt::Display for CostVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("(")?;
        for (i, c) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{c}")?;
        }
        f.write_str(")")
    }
}
