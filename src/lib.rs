//! # Survey Consolidate
//!
//! Builds a consolidated control point database from raw field-survey
//! measurements.
//!
//! ## Overview
//!
//! Crews shoot the same monuments over and over across projects. Each shot
//! lands in a different field file with slightly different coordinates.
//! This crate takes the candidate points an ingest step has already
//! parsed, optionally drops the ones outside a target boundary, and merges
//! repeated measurements of the same mark into one averaged point.
//!
//! ## Key Features
//!
//! - **Anchor sweep merge**: first-seen point survives, members within
//!   0.15 units are averaged into it and removed
//! - **Nearby reporting**: points within 2.0 units are logged for review
//! - **Boundary filter**: city-limit polygon test, sign-consistency by
//!   default, winding number on request
//! - **Keyword screening**: whitelist/blacklist rules for record lines
//! - **Pluggable**: distance, merge and neighbor index are swappable
//!
//! ## Rust Usage
//!
//! ```rust
//! use survey_consolidate::{Boundary, BoundaryFilter, ConsolidationEngine, SurveyPoint};
//!
//! let points = vec![
//!     SurveyPoint::new("A", 5.0, 5.0, 100.0),
//!     SurveyPoint::new("B", 5.1, 5.0, 100.0),
//!     SurveyPoint::new("C", 50.0, 50.0, 100.0),
//! ];
//!
//! let city = Boundary::new([(0.0, 0.0), (0.0, 10.0), (10.0, 10.0), (10.0, 0.0)]);
//! let split = BoundaryFilter::new(city).partition(points);
//! assert_eq!(split.outside.len(), 1);
//!
//! let result = ConsolidationEngine::default().consolidate(&split.inside);
//! assert_eq!(result.kept.len(), 1);
//! assert_eq!(result.removed.len(), 1);
//! ```

pub mod core;
pub mod ports;
pub mod adapters;
pub mod engine;

// Re-exports for convenience
pub use core::{Boundary, BoundaryError, ConsolidationConfig, KeywordRules, SurveyPoint, Vertex};
pub use adapters::containment::{ContainmentRule, SignConsistency, WindingNumber};
pub use adapters::index::{FlatNeighbors, NeighborBackend, TreeNeighbors};
pub use adapters::settings::{Settings, SettingsError};
pub use engine::{BoundaryFilter, Consolidation, ConsolidationEngine, Pipeline};
pub use ports::{Containment, NeighborSearch};
