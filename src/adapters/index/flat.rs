//! # Flat Neighbor Adapter
//!
//! Brute force radius search.
//! Compares the anchor against ALL points - O(n) per query, O(n²) per sweep.
//!
//! Good for:
//! - Testing and as the reference answer for other backends
//! - Single city databases (a few thousand monuments)
//!
//! Not good for:
//! - County-wide merges (use `TreeNeighbors` instead)

use std::sync::Arc;

use super::check_query;
use crate::core::proximity::{Euclidean, Proximity};
use crate::core::SurveyPoint;
use crate::ports::{NeighborResult, NeighborSearch};

/// Brute force index - scans all points
pub struct FlatNeighbors<'a> {
    /// Indexed points, identified by position
    points: &'a [SurveyPoint],

    /// Distance function to use
    proximity: Arc<dyn Proximity>,
}

impl<'a> FlatNeighbors<'a> {
    /// Create a new flat index over `points`
    pub fn new(points: &'a [SurveyPoint], proximity: Arc<dyn Proximity>) -> Self {
        Self { points, proximity }
    }

    /// Create with 3-D Euclidean distance
    pub fn euclidean(points: &'a [SurveyPoint]) -> Self {
        Self::new(points, Arc::new(Euclidean))
    }
}

impl NeighborSearch for FlatNeighbors<'_> {
    fn within(&self, anchor: usize, threshold: f64) -> NeighborResult<Vec<usize>> {
        check_query(anchor, self.points.len(), threshold)?;

        let origin = &self.points[anchor];
        let results = self
            .points
            .iter()
            .enumerate()
            .filter(|&(i, other)| {
                i != anchor && self.proximity.distance(origin, other) <= threshold
            })
            .map(|(i, _)| i)
            .collect();

        Ok(results)
    }

    fn len(&self) -> usize {
        self.points.len()
    }

    fn name(&self) -> &'static str {
        "flat"
    }
}
