//! # Consolidation
//!
//! Collapses repeated measurements of the same monument into one point.
//!
//! ## Anchor sweep
//!
//! Points are visited once, in input order. Each unconsumed point acts as
//! an anchor:
//!
//! 1. Find every other point within the proximity threshold (nearby).
//!    Nothing nearby means nothing can merge; move on.
//! 2. Of those, the unconsumed ones within the merge threshold are members.
//! 3. With at least one member, the anchor is replaced by a representative
//!    at the merged position of anchor + members (anchor attributes kept),
//!    and every member is removed. Anchor and members are consumed.
//! 4. Without members the anchor is left alone.
//!
//! Consumed points are never revisited, so clustering is not transitive:
//! if A absorbs B, a later D close to B but not to A stays on its own.
//! The partition depends on input order and is identical for every
//! neighbor backend.

use std::collections::{HashMap, HashSet};

use serde::Serialize;

use crate::adapters::index::NeighborBackend;
use crate::core::{ConfigError, ConsolidationConfig, SurveyPoint};
use crate::ports::NeighborSearch;

/// What happened around one anchor that had nearby points
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClusterReport {
    /// Input index of the anchor
    pub anchor: usize,

    /// Input indices within the proximity threshold, ascending
    pub nearby: Vec<usize>,

    /// Input indices merged into the anchor, ascending
    pub members: Vec<usize>,

    /// Merged `[northing, easting, elevation]`, when a merge happened
    pub representative: Option<[f64; 3]>,
}

impl ClusterReport {
    /// Whether this anchor absorbed any members
    pub fn is_merge(&self) -> bool {
        !self.members.is_empty()
    }
}

/// Counts describing a consolidation run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ConsolidationSummary {
    /// Points handed to the engine
    pub input: usize,

    /// Points in the final output
    pub kept: usize,

    /// Points merged away
    pub removed: usize,

    /// Anchors that had at least one nearby point
    pub nearby_groups: usize,

    /// Anchors that absorbed members
    pub merges: usize,
}

/// Result of a consolidation run
///
/// Every input point is accounted for exactly once: unchanged in `kept`,
/// as a merged representative in `kept`, or in `removed`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Consolidation {
    /// Number of points handed to the engine
    pub input: usize,

    /// Surviving points in input order; merged anchors carry averaged coordinates
    pub kept: Vec<SurveyPoint>,

    /// Members merged away, in the order they were consumed
    pub removed: Vec<SurveyPoint>,

    /// One report per anchor that had nearby points, in sweep order
    pub clusters: Vec<ClusterReport>,
}

impl Consolidation {
    /// Reports for anchors that absorbed members
    pub fn merges(&self) -> impl Iterator<Item = &ClusterReport> {
        self.clusters.iter().filter(|c| c.is_merge())
    }

    pub fn summary(&self) -> ConsolidationSummary {
        ConsolidationSummary {
            input: self.input,
            kept: self.kept.len(),
            removed: self.removed.len(),
            nearby_groups: self.clusters.len(),
            merges: self.merges().count(),
        }
    }
}

/// Duplicate-detection and merge engine
///
/// Holds no state between calls; each `consolidate` works on its own input.
///
/// # Example
/// ```
/// use survey_consolidate::{ConsolidationEngine, SurveyPoint};
///
/// let engine = ConsolidationEngine::default();
/// let result = engine.consolidate(&[
///     SurveyPoint::new("A", 0.0, 0.0, 0.0),
///     SurveyPoint::new("B", 0.1, 0.0, 0.0),
///     SurveyPoint::new("C", 5.0, 5.0, 5.0),
/// ]);
///
/// assert_eq!(result.kept.len(), 2);
/// assert_eq!(result.kept[0].id, "A");
/// assert!((result.kept[0].northing - 0.05).abs() < 1e-12);
/// assert_eq!(result.removed[0].id, "B");
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConsolidationEngine {
    config: ConsolidationConfig,
    backend: NeighborBackend,
}

impl ConsolidationEngine {
    /// Create an engine, rejecting unusable thresholds
    pub fn new(config: ConsolidationConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            config,
            backend: NeighborBackend::default(),
        })
    }

    /// Use a different neighbor index
    pub fn with_backend(mut self, backend: NeighborBackend) -> Self {
        self.backend = backend;
        self
    }

    pub fn config(&self) -> &ConsolidationConfig {
        &self.config
    }

    pub fn backend(&self) -> NeighborBackend {
        self.backend
    }

    /// Partition `points` into kept and removed
    pub fn consolidate(&self, points: &[SurveyPoint]) -> Consolidation {
        let index = self.backend.build(points, self.config.proximity.clone());
        log::debug!(
            "Consolidating {} points ({} index, {} distance, {} merge)",
            points.len(),
            index.name(),
            self.config.proximity.name(),
            self.config.merge.name()
        );

        let mut consumed: HashSet<usize> = HashSet::new();
        let mut representatives: HashMap<usize, SurveyPoint> = HashMap::new();
        let mut removed: Vec<SurveyPoint> = Vec::new();
        let mut clusters: Vec<ClusterReport> = Vec::new();

        for anchor in 0..points.len() {
            if consumed.contains(&anchor) {
                log::debug!("Point {} has already been consumed", points[anchor].id);
                continue;
            }

            let nearby = self.neighbors(index.as_ref(), anchor, self.config.proximity_threshold);
            if nearby.is_empty() {
                continue;
            }

            let origin = &points[anchor];
            let members: Vec<usize> = nearby
                .iter()
                .copied()
                .filter(|i| !consumed.contains(i))
                .filter(|&i| {
                    self.config.proximity.distance(origin, &points[i]) <= self.config.merge_threshold
                })
                .collect();

            log::info!(
                "Point {} has {} nearby points (<= {}) and {} varying points (<= {})",
                origin.id,
                nearby.len(),
                self.config.proximity_threshold,
                members.len(),
                self.config.merge_threshold
            );
            for &i in &nearby {
                log::warn!("\tnearby: {}", points[i]);
            }

            if members.is_empty() {
                clusters.push(ClusterReport {
                    anchor,
                    nearby,
                    members,
                    representative: None,
                });
                continue;
            }

            let coords: Vec<[f64; 3]> = std::iter::once(anchor)
                .chain(members.iter().copied())
                .map(|i| points[i].coordinates())
                .collect();
            let merged = self.config.merge.merge(&coords);

            consumed.insert(anchor);
            for &i in &members {
                consumed.insert(i);
                removed.push(points[i].clone());
            }
            representatives.insert(anchor, origin.with_coordinates(merged));

            log::info!("Removed {} points and kept {}", members.len(), origin.id);
            clusters.push(ClusterReport {
                anchor,
                nearby,
                members,
                representative: Some(merged),
            });
        }

        let kept: Vec<SurveyPoint> = points
            .iter()
            .enumerate()
            .filter_map(|(i, p)| match representatives.remove(&i) {
                Some(rep) => Some(rep),
                None if consumed.contains(&i) => None,
                None => Some(p.clone()),
            })
            .collect();

        let result = Consolidation {
            input: points.len(),
            kept,
            removed,
            clusters,
        };
        let summary = result.summary();
        log::info!(
            "Consolidation kept {} of {} points ({} merges, {} removed)",
            summary.kept,
            summary.input,
            summary.merges,
            summary.removed
        );
        result
    }

    fn neighbors(&self, index: &dyn NeighborSearch, anchor: usize, threshold: f64) -> Vec<usize> {
        match index.within(anchor, threshold) {
            Ok(found) => found,
            Err(e) => {
                log::error!("Neighbor query for point {} failed: {}", anchor, e);
                Vec::new()
            }
        }
    }
}
