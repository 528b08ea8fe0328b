//! # Neighbor Search Port
//!
//! Trait for finding measurements close to an anchor measurement.
//!
//! Implemented by index adapters (flat scan, R-tree). Every implementation
//! must return exactly the same answer for the same input: the
//! consolidation sweep is order dependent and its partition may not change
//! with the backend.

/// Result type for neighbor queries
pub type NeighborResult<T> = Result<T, NeighborError>;

/// Errors that can occur during neighbor queries
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum NeighborError {
    /// The anchor index is not part of the indexed set
    #[error("anchor {anchor} out of range for {len} points")]
    AnchorOutOfRange { anchor: usize, len: usize },

    /// The search radius cannot be used
    #[error("invalid search threshold: {0}")]
    InvalidThreshold(f64),
}

/// Trait for radius queries over an indexed point set
///
/// Points are identified by their position in the indexed slice, so two
/// coincident but distinct measurements are still told apart.
pub trait NeighborSearch {
    /// Indices of all OTHER points within `threshold` of `anchor`
    ///
    /// The bound is inclusive (`distance <= threshold`). The anchor itself
    /// is never returned. Results are sorted by ascending index.
    fn within(&self, anchor: usize, threshold: f64) -> NeighborResult<Vec<usize>>;

    /// Number of indexed points
    fn len(&self) -> usize;

    /// Check if the index is empty
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Name of the backend (for logging)
    fn name(&self) -> &'static str;
}
