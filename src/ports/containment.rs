//! # Containment Port
//!
//! Trait for deciding whether a plan position lies inside a boundary.
//!
//! Implemented by the containment adapters. Implementations are pure
//! predicates: an unusable boundary yields `false`, never a panic.

use crate::core::{Boundary, Vertex};

/// Point-in-boundary predicate
pub trait Containment: Send + Sync {
    /// Whether `point` lies inside (or on the edge of) `boundary`
    fn contains(&self, boundary: &Boundary, point: Vertex) -> bool;

    /// Name of this rule (for logging/config)
    fn name(&self) -> &'static str;
}
