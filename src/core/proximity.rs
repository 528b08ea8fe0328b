//! # Proximity
//!
//! Trait and implementations for measuring how far apart two measurements
//! are. The consolidation thresholds are expressed in the same linear unit
//! as the coordinates (typically survey feet).

use super::SurveyPoint;

/// Trait for measuring distance between survey points
///
/// Lower values mean closer. Implementations must be symmetric and return
/// `0.0` for coincident points.
pub trait Proximity: Send + Sync {
    /// Distance between two points
    fn distance(&self, a: &SurveyPoint, b: &SurveyPoint) -> f64;

    /// Name of this proximity function (for logging/config)
    fn name(&self) -> &'static str;

    /// Whether `distance` is never smaller than the plan distance
    ///
    /// The R-tree index prunes candidates by plan distance and is only
    /// exact when this holds. Returning `false` makes it scan every point.
    fn bounded_by_plan(&self) -> bool {
        false
    }
}

/// Straight-line distance in `(northing, easting, elevation)` space
#[derive(Clone, Copy, Debug, Default)]
pub struct Euclidean;

impl Proximity for Euclidean {
    fn distance(&self, a: &SurveyPoint, b: &SurveyPoint) -> f64 {
        let dn = b.northing - a.northing;
        let de = b.easting - a.easting;
        let dz = b.elevation - a.elevation;
        ((dn * dn) + (de * de) + (dz * dz)).sqrt()
    }

    fn name(&self) -> &'static str {
        "euclidean"
    }

    fn bounded_by_plan(&self) -> bool {
        true
    }
}

/// Plan distance, ignoring elevation
///
/// Useful when elevations come from mixed vertical datums.
#[derive(Clone, Copy, Debug, Default)]
pub struct Horizontal;

impl Proximity for Horizontal {
    fn distance(&self, a: &SurveyPoint, b: &SurveyPoint) -> f64 {
        let dn = b.northing - a.northing;
        let de = b.easting - a.easting;
        ((dn * dn) + (de * de)).sqrt()
    }

    fn name(&self) -> &'static str {
        "horizontal"
    }

    fn bounded_by_plan(&self) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn p(n: f64, e: f64, z: f64) -> SurveyPoint {
        SurveyPoint::new("p", n, e, z)
    }

    #[test]
    fn test_euclidean() {
        let d = Euclidean.distance(&p(0.0, 0.0, 0.0), &p(3.0, 4.0, 12.0));
        assert_relative_eq!(d, 13.0);
    }

    #[test]
    fn test_euclidean_symmetric() {
        let a = p(1.5, -2.0, 7.25);
        let b = p(-4.0, 3.5, 0.5);
        assert_eq!(Euclidean.distance(&a, &b), Euclidean.distance(&b, &a));
    }

    #[test]
    fn test_euclidean_coincident() {
        let a = p(100.0, 200.0, 5.0);
        assert_eq!(Euclidean.distance(&a, &a.clone()), 0.0);
    }

    #[test]
    fn test_horizontal_ignores_elevation() {
        let d = Horizontal.distance(&p(0.0, 0.0, 0.0), &p(3.0, 4.0, 100.0));
        assert_relative_eq!(d, 5.0);
    }

    #[test]
    fn test_builtins_bounded_by_plan() {
        assert!(Euclidean.bounded_by_plan());
        assert!(Horizontal.bounded_by_plan());
    }

    #[test]
    fn test_proximity_names() {
        assert_eq!(Euclidean.name(), "euclidean");
        assert_eq!(Horizontal.name(), "horizontal");
    }
}
