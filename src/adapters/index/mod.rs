//! # Index Adapters
//!
//! Implementations of the `NeighborSearch` port.
//!
//! Available adapters:
//! - `FlatNeighbors` - Brute force scan (exact, O(n) per query)
//! - `TreeNeighbors` - R-tree candidates re-checked exactly (O(log n) per query)
//!
//! `NeighborBackend` picks one at runtime.

mod flat;
mod tree;

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::core::proximity::Proximity;
use crate::core::SurveyPoint;
use crate::ports::{NeighborError, NeighborResult, NeighborSearch};

pub use flat::FlatNeighbors;
pub use tree::TreeNeighbors;

/// Which neighbor index the engine builds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NeighborBackend {
    /// Brute force scan
    #[default]
    Flat,

    /// R-tree over plan positions
    Tree,
}

impl NeighborBackend {
    /// Build an index of this kind over `points`
    pub fn build<'a>(
        self,
        points: &'a [SurveyPoint],
        proximity: Arc<dyn Proximity>,
    ) -> Box<dyn NeighborSearch + 'a> {
        match self {
            NeighborBackend::Flat => Box::new(FlatNeighbors::new(points, proximity)),
            NeighborBackend::Tree => Box::new(TreeNeighbors::new(points, proximity)),
        }
    }
}

/// Shared argument checks for `NeighborSearch::within`
fn check_query(anchor: usize, len: usize, threshold: f64) -> NeighborResult<()> {
    if anchor >= len {
        return Err(NeighborError::AnchorOutOfRange { anchor, len });
    }
    if !threshold.is_finite() || threshold < 0.0 {
        return Err(NeighborError::InvalidThreshold(threshold));
    }
    Ok(())
}
