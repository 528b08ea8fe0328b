//! # R-tree Neighbor Adapter
//!
//! Radius search backed by an `rstar` R-tree over plan positions.
//!
//! The tree only produces candidates: every candidate is re-measured with
//! the configured `Proximity` and the same inclusive test the flat scan
//! uses, so both backends return identical neighbor sets. Pruning relies
//! on the proximity never being smaller than the plan distance
//! (`Proximity::bounded_by_plan`); any other proximity gets a full scan.

use std::sync::Arc;

use rstar::primitives::GeomWithData;
use rstar::RTree;

use super::check_query;
use crate::core::proximity::{Euclidean, Proximity};
use crate::core::SurveyPoint;
use crate::ports::{NeighborResult, NeighborSearch};

/// Plan position tagged with its index in the input slice
type Entry = GeomWithData<[f64; 2], usize>;

/// Relative slack on the candidate radius so rounding in the squared
/// comparison never drops a point the exact test would keep
const RADIUS_SLACK: f64 = 1e-9;

/// R-tree index over plan positions
pub struct TreeNeighbors<'a> {
    points: &'a [SurveyPoint],
    proximity: Arc<dyn Proximity>,
    tree: RTree<Entry>,
}

impl<'a> TreeNeighbors<'a> {
    /// Bulk load an index over `points`
    pub fn new(points: &'a [SurveyPoint], proximity: Arc<dyn Proximity>) -> Self {
        let entries: Vec<Entry> = points
            .iter()
            .enumerate()
            .map(|(i, p)| GeomWithData::new([p.easting, p.northing], i))
            .collect();

        Self {
            points,
            proximity,
            tree: RTree::bulk_load(entries),
        }
    }

    /// Create with 3-D Euclidean distance
    pub fn euclidean(points: &'a [SurveyPoint]) -> Self {
        Self::new(points, Arc::new(Euclidean))
    }
}

impl NeighborSearch for TreeNeighbors<'_> {
    fn within(&self, anchor: usize, threshold: f64) -> NeighborResult<Vec<usize>> {
        check_query(anchor, self.points.len(), threshold)?;

        let origin = &self.points[anchor];
        let radius = threshold * (1.0 + RADIUS_SLACK) + f64::EPSILON;

        let keep =
            |&i: &usize| i != anchor && self.proximity.distance(origin, &self.points[i]) <= threshold;

        if !self.proximity.bounded_by_plan() {
            return Ok((0..self.points.len()).filter(keep).collect());
        }

        let mut results: Vec<usize> = self
            .tree
            .locate_within_distance([origin.easting, origin.northing], radius * radius)
            .map(|entry| entry.data)
            .filter(keep)
            .collect();

        // tree traversal order is arbitrary
        results.sort_unstable();

        Ok(results)
    }

    fn len(&self) -> usize {
        self.tree.size()
    }

    fn name(&self) -> &'static str {
        "rtree"
    }
}
