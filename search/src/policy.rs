//! Search policy types.

use serde::{Deserialize, Serialize};

use crate::error::SearchError;
use crate::frontier::FrontierKind;

/// Engine configuration, fixed for the lifetime of a [`crate::search::BoaLex`].
///
/// The wall-clock budget is per query and passed to `search` directly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchPolicy {
    /// Frontier strategy used at every vertex.
    pub frontier: FrontierKind,
    /// Optional ceiling on labels created per search. Reaching it ends the
    /// search like a timeout.
    pub max_labels: Option<u64>,
}

impl SearchPolicy {
    /// Validate the policy before any search state is built.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::InvalidPolicy`] for a zero label ceiling, which
    /// could never admit the root label.
    pub fn validate(&self) -> Result<(), SearchError> {
        if self.max_labels == Some(0) {
            return Err(SearchError::InvalidPolicy {
                detail: "max_labels must be at least 1".into(),
            });
        }
        Ok(())
    }
}

impl Default for SearchPolicy {
    fn default() -> Self {
        Self {
            frontier: FrontierKind::Lex,
            max_labels: None,
        }
    }
}
