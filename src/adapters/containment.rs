//! # Containment Adapters
//!
//! Implementations of the `Containment` port.
//!
//! - `SignConsistency` - the long-standing city-limit test. Correct for
//!   convex boundaries traversed in one winding order; concave boundaries
//!   can be misclassified. Default.
//! - `WindingNumber` - standard winding-number test, correct for any simple
//!   polygon. Opt-in, because switching changes which points get discarded.
//!
//! Both report points lying on an edge as inside and treat a boundary that
//! fails `Boundary::validate` as containing nothing. Rules do no logging;
//! `BoundaryFilter` reports an unusable boundary.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::core::{Boundary, Vertex};
use crate::ports::Containment;

/// Signed area term of `p` against the edge `a -> b`
///
/// Positive when `p` is left of the edge, zero when collinear.
#[inline]
fn edge_side(a: Vertex, b: Vertex, p: Vertex) -> f64 {
    (p.y - a.y) * (b.x - a.x) - (p.x - a.x) * (b.y - a.y)
}

fn usable(boundary: &Boundary) -> bool {
    boundary.validate().is_ok()
}

/// Inside iff the point is on the same side of every edge
///
/// A zero side term anywhere reports inside. The zero test does not check
/// that the point falls within the edge's extent, so a point on the
/// extension of an edge line also reports inside.
///
/// The ring is tested with its closing edge `v[n-1] -> v[0]`. The legacy
/// city-limit check skipped that edge, so a point beyond it (below an open
/// square, say) used to pass and is now discarded.
#[derive(Clone, Copy, Debug, Default)]
pub struct SignConsistency;

impl Containment for SignConsistency {
    fn contains(&self, boundary: &Boundary, point: Vertex) -> bool {
        if !usable(boundary) {
            return false;
        }

        let coef: Vec<f64> = boundary
            .edges()
            .map(|(a, b)| edge_side(a, b, point))
            .collect();

        if coef.iter().any(|&c| c == 0.0) {
            return true;
        }

        coef.windows(2).all(|w| w[0] * w[1] >= 0.0)
    }

    fn name(&self) -> &'static str {
        "sign_consistency"
    }
}

/// Non-zero winding rule, edges inclusive
#[derive(Clone, Copy, Debug, Default)]
pub struct WindingNumber;

impl WindingNumber {
    fn on_segment(a: Vertex, b: Vertex, p: Vertex) -> bool {
        edge_side(a, b, p) == 0.0
            && p.x >= a.x.min(b.x)
            && p.x <= a.x.max(b.x)
            && p.y >= a.y.min(b.y)
            && p.y <= a.y.max(b.y)
    }

    fn winding(boundary: &Boundary, p: Vertex) -> i32 {
        let mut wn = 0;
        for (a, b) in boundary.edges() {
            let left = edge_side(a, b, p);
            if a.y <= p.y {
                if b.y > p.y && left > 0.0 {
                    wn += 1;
                }
            } else if b.y <= p.y && left < 0.0 {
                wn -= 1;
            }
        }
        wn
    }
}

impl Containment for WindingNumber {
    fn contains(&self, boundary: &Boundary, point: Vertex) -> bool {
        if !usable(boundary) {
            return false;
        }
        if boundary
            .edges()
            .any(|(a, b)| Self::on_segment(a, b, point))
        {
            return true;
        }
        Self::winding(boundary, point) != 0
    }

    fn name(&self) -> &'static str {
        "winding_number"
    }
}

/// Containment rule selectable from settings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContainmentRule {
    #[default]
    SignConsistency,
    WindingNumber,
}

impl ContainmentRule {
    pub fn build(self) -> Arc<dyn Containment> {
        match self {
            ContainmentRule::SignConsistency => Arc::new(SignConsistency),
            ContainmentRule::WindingNumber => Arc::new(WindingNumber),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square() -> Boundary {
        Boundary::new([(0.0, 0.0), (0.0, 10.0), (10.0, 10.0), (10.0, 0.0)])
    }

    /// U shape open to the north; the notch is outside
    fn notched() -> Boundary {
        Boundary::new([
            (0.0, 0.0),
            (0.0, 10.0),
            (3.0, 10.0),
            (3.0, 3.0),
            (7.0, 3.0),
            (7.0, 10.0),
            (10.0, 10.0),
            (10.0, 0.0),
        ])
    }

    #[test]
    fn test_sign_inside_and_outside() {
        assert!(SignConsistency.contains(&square(), Vertex::new(5.0, 5.0)));
        assert!(!SignConsistency.contains(&square(), Vertex::new(15.0, 15.0)));
    }

    #[test]
    fn test_sign_on_edge() {
        assert!(SignConsistency.contains(&square(), Vertex::new(0.0, 5.0)));
        assert!(SignConsistency.contains(&square(), Vertex::new(5.0, 0.0)));
    }

    #[test]
    fn test_sign_uses_closing_edge() {
        // below the square: only the implied closing edge separates it
        assert!(!SignConsistency.contains(&square(), Vertex::new(5.0, -5.0)));
    }

    #[test]
    fn test_sign_explicit_close_matches_implicit() {
        let closed = Boundary::new([
            (0.0, 0.0),
            (0.0, 10.0),
            (10.0, 10.0),
            (10.0, 0.0),
            (0.0, 0.0),
        ]);
        for p in [Vertex::new(5.0, -5.0), Vertex::new(5.0, 5.0), Vertex::new(5.0, 0.0)] {
            assert_eq!(
                SignConsistency.contains(&closed, p),
                SignConsistency.contains(&square(), p)
            );
        }
    }

    #[test]
    fn test_sign_either_winding() {
        let ccw = Boundary::new([(0.0, 0.0), (10.0, 0.0), (10.0, 10.0), (0.0, 10.0)]);
        assert!(SignConsistency.contains(&ccw, Vertex::new(5.0, 5.0)));
        assert!(!SignConsistency.contains(&ccw, Vertex::new(-1.0, 5.0)));
    }

    #[test]
    fn test_sign_edge_extension_reports_inside() {
        assert!(SignConsistency.contains(&square(), Vertex::new(0.0, 20.0)));
    }

    #[test]
    fn test_sign_concave_rejects_interior() {
        // (5, 1) is inside the U below the notch
        let interior = Vertex::new(5.0, 1.0);
        assert!(WindingNumber.contains(&notched(), interior));
        assert!(!SignConsistency.contains(&notched(), interior));
    }

    #[test]
    fn test_too_few_vertices() {
        let tri = Boundary::new([(0.0, 0.0), (0.0, 10.0), (10.0, 10.0)]);
        for p in [Vertex::new(1.0, 5.0), Vertex::new(0.0, 0.0), Vertex::new(50.0, 50.0)] {
            assert!(!SignConsistency.contains(&tri, p));
            assert!(!WindingNumber.contains(&tri, p));
        }
    }

    #[test]
    fn test_winding_square() {
        assert!(WindingNumber.contains(&square(), Vertex::new(5.0, 5.0)));
        assert!(!WindingNumber.contains(&square(), Vertex::new(15.0, 15.0)));
        assert!(WindingNumber.contains(&square(), Vertex::new(0.0, 5.0)));
        assert!(!WindingNumber.contains(&square(), Vertex::new(0.0, 20.0)));
    }

    #[test]
    fn test_winding_concave() {
        let b = notched();
        assert!(WindingNumber.contains(&b, Vertex::new(1.5, 8.0)));
        assert!(WindingNumber.contains(&b, Vertex::new(5.0, 1.5)));
        assert!(!WindingNumber.contains(&b, Vertex::new(5.0, 8.0)));
    }

    #[test]
    fn test_rule_build() {
        assert_eq!(ContainmentRule::default().build().name(), "sign_consistency");
        assert_eq!(ContainmentRule::WindingNumber.build().name(), "winding_number");
        let rule: ContainmentRule = serde_json::from_str("\"winding_number\"").unwrap();
        assert_eq!(rule, ContainmentRule::WindingNumber);
    }
}
