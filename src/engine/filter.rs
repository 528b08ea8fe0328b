//! # Boundary Filter
//!
//! Discards points whose plan position falls outside a target boundary.
//! The decision per point is delegated to a `Containment` rule; this type
//! owns the boundary, validates it once on construction and does the
//! logging.

use std::sync::Arc;

use serde::Serialize;

use crate::adapters::containment::SignConsistency;
use crate::core::{Boundary, BoundaryError, SurveyPoint};
use crate::ports::Containment;

/// Points split by boundary membership, each side in input order
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct BoundaryPartition {
    pub inside: Vec<SurveyPoint>,
    pub outside: Vec<SurveyPoint>,
}

/// Boundary membership test over survey points
pub struct BoundaryFilter {
    boundary: Boundary,
    rule: Arc<dyn Containment>,
    status: Result<(), BoundaryError>,
}

impl BoundaryFilter {
    /// Create a filter using the sign-consistency rule
    ///
    /// An unusable boundary is logged here, once.
    pub fn new(boundary: Boundary) -> Self {
        let status = boundary.validate();
        if let Err(e) = &status {
            log::error!("Boundary unusable, every point will be discarded: {}", e);
        }

        Self {
            boundary,
            rule: Arc::new(SignConsistency),
            status,
        }
    }

    /// Use a different containment rule
    pub fn with_rule(mut self, rule: Arc<dyn Containment>) -> Self {
        self.rule = rule;
        self
    }

    pub fn boundary(&self) -> &Boundary {
        &self.boundary
    }

    /// Name of the active containment rule
    pub fn rule_name(&self) -> &'static str {
        self.rule.name()
    }

    /// Whether the boundary can be used at all
    pub fn validate(&self) -> Result<(), BoundaryError> {
        self.status.clone()
    }

    /// Whether `point` lies inside the boundary (edges count as inside)
    ///
    /// An unusable boundary contains nothing.
    pub fn contains(&self, point: &SurveyPoint) -> bool {
        self.status.is_ok() && self.rule.contains(&self.boundary, point.planar())
    }

    /// Split `points` into inside and outside
    ///
    /// With an unusable boundary every point lands in `outside` without
    /// per-point logging. The caller decides what to do with either side.
    pub fn partition(&self, points: Vec<SurveyPoint>) -> BoundaryPartition {
        let mut result = BoundaryPartition::default();

        if self.status.is_err() {
            log::warn!("Discarding all {} points, boundary unusable", points.len());
            result.outside = points;
            return result;
        }

        for point in points {
            if self.contains(&point) {
                log::debug!("Survey point {} is located in boundary", point.id);
                result.inside.push(point);
            } else {
                log::warn!(
                    "Survey point {} was discarded for being outside the boundary",
                    point.id
                );
                result.outside.push(point);
            }
        }

        log::info!(
            "Boundary filter ({}): {} inside, {} outside",
            self.rule.name(),
            result.inside.len(),
            result.outside.len()
        );
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::containment::WindingNumber;

    fn square() -> Boundary {
        Boundary::new([(0.0, 0.0), (0.0, 10.0), (10.0, 10.0), (10.0, 0.0)])
    }

    /// `SurveyPoint::new` takes northing first; boundary vertices are (x, y)
    fn at(id: &str, x: f64, y: f64) -> SurveyPoint {
        SurveyPoint::new(id, y, x, 0.0)
    }

    #[test]
    fn test_contains_square() {
        let filter = BoundaryFilter::new(square());
        assert!(filter.contains(&at("in", 5.0, 5.0)));
        assert!(!filter.contains(&at("out", 15.0, 15.0)));
        assert!(filter.contains(&at("edge", 0.0, 5.0)));
    }

    #[test]
    fn test_axis_mapping() {
        // tall thin boundary: x in [0, 1], y in [0, 100]
        let filter = BoundaryFilter::new(Boundary::new([
            (0.0, 0.0),
            (0.0, 100.0),
            (1.0, 100.0),
            (1.0, 0.0),
        ]));
        // northing 50, easting 0.5 -> inside
        assert!(filter.contains(&SurveyPoint::new("a", 50.0, 0.5, 0.0)));
        // northing 0.5, easting 50 -> outside
        assert!(!filter.contains(&SurveyPoint::new("b", 0.5, 50.0, 0.0)));
    }

    #[test]
    fn test_partition_keeps_order() {
        let filter = BoundaryFilter::new(square());
        let points = vec![
            at("a", 1.0, 1.0),
            at("b", 20.0, 1.0),
            at("c", 9.0, 9.0),
            at("d", -3.0, 4.0),
        ];

        let result = filter.partition(points);
        let inside: Vec<_> = result.inside.iter().map(|p| p.id.as_str()).collect();
        let outside: Vec<_> = result.outside.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(inside, vec!["a", "c"]);
        assert_eq!(outside, vec!["b", "d"]);
    }

    #[test]
    fn test_partition_unusable_boundary() {
        let filter = BoundaryFilter::new(Boundary::new([(0.0, 0.0), (0.0, 10.0), (10.0, 10.0)]));
        assert!(filter.validate().is_err());

        let result = filter.partition(vec![at("a", 1.0, 1.0), at("b", 5.0, 5.0)]);
        assert!(result.inside.is_empty());
        assert_eq!(result.outside.len(), 2);
    }

    #[test]
    fn test_unusable_boundary_contains_nothing() {
        let filter = BoundaryFilter::new(Boundary::new([(0.0, 0.0), (0.0, 10.0), (10.0, 10.0)]))
            .with_rule(Arc::new(WindingNumber));
        assert!(matches!(
            filter.validate(),
            Err(BoundaryError::TooFewVertices { got: 3, .. })
        ));
        for p in [at("a", 1.0, 5.0), at("b", 0.0, 0.0), at("c", 50.0, 50.0)] {
            assert!(!filter.contains(&p));
        }
    }

    #[test]
    fn test_with_rule() {
        let filter = BoundaryFilter::new(square()).with_rule(Arc::new(WindingNumber));
        assert_eq!(filter.rule_name(), "winding_number");
        assert!(filter.contains(&at("in", 5.0, 5.0)));
    }

    #[test]
    fn test_partition_empty() {
        let result = BoundaryFilter::new(square()).partition(Vec::new());
        assert_eq!(result, BoundaryPartition::default());
    }
}
