//! # Core Domain
//!
//! Pure data and math, no I/O.
//!
//! This module contains the fundamental types and operations:
//! - `SurveyPoint` - One field measurement of a monument
//! - `Boundary` - Polygon used to discard points outside a target area
//! - `Proximity` - Trait for measuring distance between measurements
//! - `Merge` - Trait for collapsing a cluster into one position
//! - `KeywordRules` - Whitelist/blacklist screening of record lines
//!
//! Everything here is deterministic and testable in isolation.

mod point;
mod boundary;
pub mod proximity;
pub mod merge;
pub mod keywords;
pub mod config;

// Re-exports
pub use point::SurveyPoint;
pub use boundary::{Boundary, BoundaryError, Vertex, MIN_BOUNDARY_VERTICES};
pub use keywords::KeywordRules;
pub use config::{ConfigError, ConsolidationConfig};
